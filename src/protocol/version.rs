//! Per-kind wire format versions.
//!
//! Every packet kind carries an independent version byte in its header,
//! bumped only when that kind's wire format changes. The tables below are
//! an append-only changelog: entries are never edited or removed once a
//! release has shipped them, only extended with higher values. The
//! current version of a ladder is its last entry.
//!
//! Kinds that have never needed a bump resolve to
//! [`BASELINE_PACKET_VERSION`] through the default arm of [`version_for`].

use super::PacketKind;

/// A packet kind's wire format revision.
pub type PacketVersion = u8;

/// Version of every kind that has never changed its wire format.
pub const BASELINE_PACKET_VERSION: PacketVersion = 17;

// ============================================================================
// Version Ladders
// ============================================================================

/// Audio frame format revisions.
///
/// Shared by every kind the audio mixer produces or consumes; the frame
/// header layout is common to all of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AudioVersion {
    Baseline = 17,
    /// Codec negotiated per stream instead of fixed PCM.
    CodecNegotiation = 18,
    /// Sequence number widened and moved into the frame header.
    PerFrameSequencing = 19,
    /// Gain fields switched to wide-dynamic-range encoding.
    WideDynamicGain = 20,
}

/// Actor mixer packet format revisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ActorVersion {
    Baseline = 17,
    /// Rotations sent absolute instead of parent-relative.
    AbsoluteRotations = 18,
    /// Session-scoped display names in identity packets.
    SessionDisplayName = 19,
    /// Pose streams may reference a parent frame.
    ParentFrames = 20,
    /// Identity packets carry a sequence number for reordering.
    IdentitySequencing = 21,
    /// Identity packets carry the relayed-origin flag.
    RelayFlagInIdentity = 22,
}

/// Object interest query format revisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ObjectQueryVersion {
    Baseline = 17,
    /// Filter expression encoded as JSON.
    JsonFilter = 18,
    /// Filter results include the ancestry chain of each match.
    FilterWithAncestry = 19,
}

/// Asset server request format revisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AssetVersion {
    Baseline = 17,
    /// Byte-range requests on get and upload.
    RangeRequests = 18,
}

/// Channel message format revisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ChannelMessageVersion {
    Baseline = 17,
    /// Payload tagged as text or binary instead of assumed UTF-8.
    TextOrBinary = 18,
}

/// Domain roster format revisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum RosterVersion {
    Baseline = 17,
    /// Per-peer permission flags in roster entries.
    PermissionsFlags = 18,
    /// Short session-local ids alongside full node ids.
    SessionLocalIds = 19,
    /// Roster keyed by hardware fingerprint for ban continuity.
    HardwareFingerprintLookup = 20,
}

/// Domain join request format revisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum JoinRequestVersion {
    Baseline = 17,
    /// Request carries a send timestamp for clock-skew estimation.
    HasTimestamp = 18,
    /// Request carries the sender's protocol fingerprint.
    HasProtocolFingerprint = 19,
    /// Request carries a stable hardware id.
    HasHardwareId = 20,
}

/// Domain join denial format revisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum JoinDeniedVersion {
    Baseline = 17,
    /// Denial carries a machine-readable reason code.
    ReasonCode = 18,
    /// Denial carries operator-supplied extra info text.
    ExtraInfo = 19,
}

/// DomainNodeAdded format revisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum NodeAddedVersion {
    Baseline = 17,
    /// Entry carries the full permissions grid for the new peer.
    PermissionsGrid = 18,
}

// Object state milestones, shared by ObjectSpawn/Update/Data/Physics.
// The four kinds serialize the same object record, so they gate on one
// named constant rather than four copies of the same ladder.
pub const VERSION_OBJECTS_SERVER_SCRIPTS: PacketVersion = 24;
pub const VERSION_OBJECTS_MATERIAL_MAPS: PacketVersion = 25;
pub const VERSION_OBJECTS_PHYSICS_OWNERSHIP: PacketVersion = 26;
pub const VERSION_OBJECTS_RIGID_BODY_DYNAMICS: PacketVersion = 27;

// ============================================================================
// Resolver
// ============================================================================

/// Current wire format version for a packet kind.
///
/// Total over the registry: kinds without an explicit entry fall through
/// to [`BASELINE_PACKET_VERSION`]. Relayed kinds version independently of
/// their live counterparts and have never needed a bump.
pub fn version_for(kind: PacketKind) -> PacketVersion {
    match kind {
        PacketKind::DomainRoster => RosterVersion::HardwareFingerprintLookup as PacketVersion,

        PacketKind::ObjectSpawn
        | PacketKind::ObjectUpdate
        | PacketKind::ObjectData
        | PacketKind::ObjectPhysics => VERSION_OBJECTS_RIGID_BODY_DYNAMICS,

        PacketKind::ObjectQuery => ObjectQueryVersion::FilterWithAncestry as PacketVersion,

        PacketKind::ActorPose
        | PacketKind::ActorIdentity
        | PacketKind::BulkActorPose
        | PacketKind::ActorGone => ActorVersion::RelayFlagInIdentity as PacketVersion,

        PacketKind::ChannelMessage => ChannelMessageVersion::TextOrBinary as PacketVersion,

        PacketKind::RendezvousHeartbeat => 18, // heartbeat signing

        PacketKind::AssetGet | PacketKind::AssetGetInfo | PacketKind::AssetUpload => {
            AssetVersion::RangeRequests as PacketVersion
        }

        PacketKind::NodeIgnoreRequest => 18, // per-session ignore lists

        PacketKind::DomainJoinDenied => JoinDeniedVersion::ExtraInfo as PacketVersion,

        PacketKind::DomainJoinRequest => JoinRequestVersion::HasHardwareId as PacketVersion,

        PacketKind::DomainNodeAdded => NodeAddedVersion::PermissionsGrid as PacketVersion,

        PacketKind::MixedAudio
        | PacketKind::SilentVoiceFrame
        | PacketKind::InjectedAudio
        | PacketKind::VoiceFrame
        | PacketKind::VoiceFrameLoopback
        | PacketKind::AudioStreamStats => AudioVersion::WideDynamicGain as PacketVersion,

        _ => BASELINE_PACKET_VERSION,
    }
}
