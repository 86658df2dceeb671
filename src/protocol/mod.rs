//! Weft protocol registry: packet kinds, classification, versions, and
//! the compatibility fingerprint.
//!
//! This module is the byte-for-byte contract shared by every Weft peer —
//! clients, rendezvous servers, domain coordinators, mixers, and asset
//! servers. It answers four questions about any packet on the wire:
//!
//! - **What is it?** [`PacketKind`], a closed append-only enumeration
//!   whose numeric codes are frozen into the wire format.
//! - **Who may send it?** [`is_unsourced`] / [`requires_verification`],
//!   the trust classification the framing layer applies uniformly when
//!   building and parsing headers.
//! - **Which revision is it?** [`version_for`], one independently
//!   evolving version per kind.
//! - **Do we speak the same protocol?** [`protocol_fingerprint`], a
//!   single digest over the whole version surface, exchanged during the
//!   handshake instead of the full table.
//!
//! Every table here is immutable after process start; all lookups are
//! pure and callable from any thread without synchronization. The only
//! state is the fingerprint's compute-once cache.

mod class;
mod error;
mod fingerprint;
mod types;
mod version;

pub use class::{is_unsourced, live_for, replica_for, requires_verification};
pub use error::ProtocolError;
pub use fingerprint::{
    protocol_fingerprint, protocol_fingerprint_base64, FingerprintService, VersionFingerprint,
    FINGERPRINT_LEN,
};
pub use types::{describe_code, PacketKind, UNKNOWN_KIND_NAME};
pub use version::{
    version_for, ActorVersion, AssetVersion, AudioVersion, ChannelMessageVersion,
    JoinDeniedVersion, JoinRequestVersion, NodeAddedVersion, ObjectQueryVersion, PacketVersion,
    RosterVersion, BASELINE_PACKET_VERSION, VERSION_OBJECTS_MATERIAL_MAPS,
    VERSION_OBJECTS_PHYSICS_OWNERSHIP, VERSION_OBJECTS_RIGID_BODY_DYNAMICS,
    VERSION_OBJECTS_SERVER_SCRIPTS,
};
