//! Weft: packet type registry and protocol compatibility negotiation
//! for a real-time, low-latency datagram transport.
//!
//! Weft connects heterogeneous peers — clients, rendezvous servers,
//! domain coordinators, audio and state mixers, asset servers — that are
//! deployed and upgraded independently. This crate holds the one thing
//! all of them must agree on byte-for-byte: which packet kinds exist,
//! how each is classified for trust and relay purposes, which wire
//! format revision each is at, and the single fingerprint that lets two
//! peers check all of that in one comparison during the handshake.

pub mod protocol;

// Re-export the registry surface
pub use protocol::{
    describe_code, is_unsourced, live_for, protocol_fingerprint, protocol_fingerprint_base64,
    replica_for, requires_verification, version_for, FingerprintService, PacketKind,
    PacketVersion, ProtocolError, VersionFingerprint, BASELINE_PACKET_VERSION, FINGERPRINT_LEN,
};
