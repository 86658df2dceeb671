//! Protocol error types.

use thiserror::Error;

/// Errors related to packet registry lookups.
///
/// Lookups keyed by [`PacketKind`](super::PacketKind) are total and never
/// fail; only conversion from a raw wire byte can, when the byte falls
/// outside the registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("unknown packet kind: {0}")]
    UnknownPacketKind(u8),
}
