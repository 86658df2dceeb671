//! Packet kind registry: the closed, ordered set of Weft packet types.
//!
//! Every packet on the wire names its kind with a single byte. Codes are
//! assigned contiguously from 0 and are part of the wire format: once a
//! kind has shipped its code is frozen forever. New kinds are appended at
//! the tail, which is why the relayed variants and the later snapshot
//! operations sit at the end of the enumeration rather than next to their
//! live counterparts.

use std::fmt;

use super::ProtocolError;

/// Placeholder name returned when rendering a code outside the registry.
pub const UNKNOWN_KIND_NAME: &str = "UnknownPacketKind";

/// Packet kind identifiers.
///
/// The numeric discriminant is the wire code. Appending is the only legal
/// mutation; renumbering or reordering silently breaks interoperability
/// with every deployed peer, and the total count feeds the protocol
/// fingerprint so even a gap would change the negotiated surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PacketKind {
    // Rendezvous / introduction (0-6)
    /// Client asks a rendezvous server to introduce it to a domain.
    RendezvousQuery = 0,
    /// Rendezvous server sends each side the other's address candidates.
    RendezvousPeerInfo = 1,
    /// Domain coordinator keepalive to its rendezvous server.
    RendezvousHeartbeat = 2,
    RendezvousHeartbeatAck = 3,
    /// Heartbeat refused (unregistered or signature-invalid domain).
    RendezvousHeartbeatDenied = 4,
    /// Hole-punch probe between introduced peers.
    IntroPing = 5,
    IntroPingReply = 6,

    // Liveness (7-8)
    Ping = 7,
    PingReply = 8,

    // Domain coordinator (9-20)
    /// Client asks the coordinator for a fresh peer roster.
    DomainRosterRequest = 9,
    /// Connection request carrying the sender's protocol fingerprint.
    DomainJoinRequest = 10,
    /// Coordinator's roster of session peers and their sockets.
    DomainRoster = 11,
    DomainJoinDenied = 12,
    DomainLeaveRequest = 13,
    /// Incremental roster update: one peer joined.
    DomainNodeAdded = 14,
    /// Incremental roster update: one peer left.
    DomainNodeRemoved = 15,
    /// One-time token for the encrypted join path.
    DomainConnectionToken = 16,
    DomainSettingsRequest = 17,
    DomainSettings = 18,
    /// Resolve a named spawn path inside the domain.
    DomainPathQuery = 19,
    DomainPathResponse = 20,

    // Worker assignment (21-25)
    /// Coordinator offers an assignment (mixer, object server, ...).
    AssignmentCreate = 21,
    /// Idle worker asks for an assignment to run.
    AssignmentRequest = 22,
    AssignmentWorkerStatus = 23,
    /// Orderly shutdown notice for an assigned worker.
    NodeShutdown = 24,
    /// Periodic JSON stats blob from a node to the coordinator.
    NodeStatsJson = 25,

    // Audio mixer (26-35)
    /// Captured microphone frame, mixer must not echo it back.
    VoiceFrame = 26,
    /// Captured microphone frame, sender wants to hear itself.
    VoiceFrameLoopback = 27,
    /// Positional audio injected by a script or worker.
    InjectedAudio = 28,
    /// Keepalive frame while the capture gate is closed.
    SilentVoiceFrame = 29,
    /// Mixed output stream from the audio mixer.
    MixedAudio = 30,
    AudioStreamStats = 31,
    AudioFormatOffer = 32,
    AudioFormatSelect = 33,
    EnvironmentMute = 34,
    /// Per-source gain adjustment request.
    GainAdjust = 35,

    // Actor mixer (36-39)
    /// High-rate pose stream for one actor.
    ActorPose = 36,
    /// Low-rate identity attributes (display name, outfit, flags).
    ActorIdentity = 37,
    /// Mixer's batched pose broadcast.
    BulkActorPose = 38,
    /// Actor left or was evicted; receivers drop its state.
    ActorGone = 39,

    // Object state server (40-48)
    ObjectSpawn = 40,
    ObjectUpdate = 41,
    /// Server -> client object state stream.
    ObjectData = 42,
    /// Physics-only delta (transform and velocities).
    ObjectPhysics = 43,
    ObjectErase = 44,
    /// Interest query with client-side filter expression.
    ObjectQuery = 45,
    /// Client rejects an edit it could not apply.
    ObjectUpdateNack = 46,
    WorldDataNack = 47,
    /// Replace the whole world snapshot from an uploaded blob.
    WorldSnapshotReplace = 48,

    // Asset server (49-56)
    AssetGet = 49,
    AssetGetReply = 50,
    AssetGetInfo = 51,
    AssetGetInfoReply = 52,
    AssetUpload = 53,
    AssetUploadReply = 54,
    /// Path-to-hash mapping operation (get/set/rename/delete).
    AssetMappingOp = 55,
    AssetMappingOpReply = 56,

    // Text channels (57-59)
    ChannelMessage = 57,
    ChannelSubscribe = 58,
    ChannelUnsubscribe = 59,

    // Identity lookup and moderation (60-64)
    DisplayNameRequest = 60,
    DisplayNameReply = 61,
    /// Sender asks mixers to stop relaying a specific peer to it.
    NodeIgnoreRequest = 62,
    NodeEvictRequest = 63,
    NodeSilenceRequest = 64,

    // Relayed variants for downstream-only observers (65-71).
    // Appended when relay support shipped; see class::replica_for.
    RelayedVoiceFrame = 65,
    RelayedVoiceFrameLoopback = 66,
    RelayedInjectedAudio = 67,
    RelayedSilentVoiceFrame = 68,
    RelayedActorIdentity = 69,
    RelayedActorGone = 70,
    RelayedBulkActorPose = 71,

    /// Replace the world snapshot by URL instead of inline blob.
    WorldSnapshotReplaceFromUrl = 72,
}

impl PacketKind {
    /// Number of registered packet kinds. Codes run `0..COUNT`.
    ///
    /// This count is serialized into the protocol fingerprint, so merely
    /// appending a kind is a (deliberate) compatibility break.
    pub const COUNT: u8 = 73;

    /// Try to convert from a wire code.
    ///
    /// Returns `None` for codes outside the registry, e.g. from a
    /// malformed packet or a newer-protocol peer.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(PacketKind::RendezvousQuery),
            1 => Some(PacketKind::RendezvousPeerInfo),
            2 => Some(PacketKind::RendezvousHeartbeat),
            3 => Some(PacketKind::RendezvousHeartbeatAck),
            4 => Some(PacketKind::RendezvousHeartbeatDenied),
            5 => Some(PacketKind::IntroPing),
            6 => Some(PacketKind::IntroPingReply),
            7 => Some(PacketKind::Ping),
            8 => Some(PacketKind::PingReply),
            9 => Some(PacketKind::DomainRosterRequest),
            10 => Some(PacketKind::DomainJoinRequest),
            11 => Some(PacketKind::DomainRoster),
            12 => Some(PacketKind::DomainJoinDenied),
            13 => Some(PacketKind::DomainLeaveRequest),
            14 => Some(PacketKind::DomainNodeAdded),
            15 => Some(PacketKind::DomainNodeRemoved),
            16 => Some(PacketKind::DomainConnectionToken),
            17 => Some(PacketKind::DomainSettingsRequest),
            18 => Some(PacketKind::DomainSettings),
            19 => Some(PacketKind::DomainPathQuery),
            20 => Some(PacketKind::DomainPathResponse),
            21 => Some(PacketKind::AssignmentCreate),
            22 => Some(PacketKind::AssignmentRequest),
            23 => Some(PacketKind::AssignmentWorkerStatus),
            24 => Some(PacketKind::NodeShutdown),
            25 => Some(PacketKind::NodeStatsJson),
            26 => Some(PacketKind::VoiceFrame),
            27 => Some(PacketKind::VoiceFrameLoopback),
            28 => Some(PacketKind::InjectedAudio),
            29 => Some(PacketKind::SilentVoiceFrame),
            30 => Some(PacketKind::MixedAudio),
            31 => Some(PacketKind::AudioStreamStats),
            32 => Some(PacketKind::AudioFormatOffer),
            33 => Some(PacketKind::AudioFormatSelect),
            34 => Some(PacketKind::EnvironmentMute),
            35 => Some(PacketKind::GainAdjust),
            36 => Some(PacketKind::ActorPose),
            37 => Some(PacketKind::ActorIdentity),
            38 => Some(PacketKind::BulkActorPose),
            39 => Some(PacketKind::ActorGone),
            40 => Some(PacketKind::ObjectSpawn),
            41 => Some(PacketKind::ObjectUpdate),
            42 => Some(PacketKind::ObjectData),
            43 => Some(PacketKind::ObjectPhysics),
            44 => Some(PacketKind::ObjectErase),
            45 => Some(PacketKind::ObjectQuery),
            46 => Some(PacketKind::ObjectUpdateNack),
            47 => Some(PacketKind::WorldDataNack),
            48 => Some(PacketKind::WorldSnapshotReplace),
            49 => Some(PacketKind::AssetGet),
            50 => Some(PacketKind::AssetGetReply),
            51 => Some(PacketKind::AssetGetInfo),
            52 => Some(PacketKind::AssetGetInfoReply),
            53 => Some(PacketKind::AssetUpload),
            54 => Some(PacketKind::AssetUploadReply),
            55 => Some(PacketKind::AssetMappingOp),
            56 => Some(PacketKind::AssetMappingOpReply),
            57 => Some(PacketKind::ChannelMessage),
            58 => Some(PacketKind::ChannelSubscribe),
            59 => Some(PacketKind::ChannelUnsubscribe),
            60 => Some(PacketKind::DisplayNameRequest),
            61 => Some(PacketKind::DisplayNameReply),
            62 => Some(PacketKind::NodeIgnoreRequest),
            63 => Some(PacketKind::NodeEvictRequest),
            64 => Some(PacketKind::NodeSilenceRequest),
            65 => Some(PacketKind::RelayedVoiceFrame),
            66 => Some(PacketKind::RelayedVoiceFrameLoopback),
            67 => Some(PacketKind::RelayedInjectedAudio),
            68 => Some(PacketKind::RelayedSilentVoiceFrame),
            69 => Some(PacketKind::RelayedActorIdentity),
            70 => Some(PacketKind::RelayedActorGone),
            71 => Some(PacketKind::RelayedBulkActorPose),
            72 => Some(PacketKind::WorldSnapshotReplaceFromUrl),
            _ => None,
        }
    }

    /// Convert to the wire code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Iterate every registered kind in ascending code order.
    ///
    /// Iteration order is the serialization order of the protocol
    /// fingerprint and must be identical on every peer.
    pub fn all() -> impl Iterator<Item = PacketKind> {
        (0..Self::COUNT).filter_map(Self::from_code)
    }

    /// Registry name for diagnostics. Not part of any wire contract.
    pub fn name(self) -> &'static str {
        match self {
            PacketKind::RendezvousQuery => "RendezvousQuery",
            PacketKind::RendezvousPeerInfo => "RendezvousPeerInfo",
            PacketKind::RendezvousHeartbeat => "RendezvousHeartbeat",
            PacketKind::RendezvousHeartbeatAck => "RendezvousHeartbeatAck",
            PacketKind::RendezvousHeartbeatDenied => "RendezvousHeartbeatDenied",
            PacketKind::IntroPing => "IntroPing",
            PacketKind::IntroPingReply => "IntroPingReply",
            PacketKind::Ping => "Ping",
            PacketKind::PingReply => "PingReply",
            PacketKind::DomainRosterRequest => "DomainRosterRequest",
            PacketKind::DomainJoinRequest => "DomainJoinRequest",
            PacketKind::DomainRoster => "DomainRoster",
            PacketKind::DomainJoinDenied => "DomainJoinDenied",
            PacketKind::DomainLeaveRequest => "DomainLeaveRequest",
            PacketKind::DomainNodeAdded => "DomainNodeAdded",
            PacketKind::DomainNodeRemoved => "DomainNodeRemoved",
            PacketKind::DomainConnectionToken => "DomainConnectionToken",
            PacketKind::DomainSettingsRequest => "DomainSettingsRequest",
            PacketKind::DomainSettings => "DomainSettings",
            PacketKind::DomainPathQuery => "DomainPathQuery",
            PacketKind::DomainPathResponse => "DomainPathResponse",
            PacketKind::AssignmentCreate => "AssignmentCreate",
            PacketKind::AssignmentRequest => "AssignmentRequest",
            PacketKind::AssignmentWorkerStatus => "AssignmentWorkerStatus",
            PacketKind::NodeShutdown => "NodeShutdown",
            PacketKind::NodeStatsJson => "NodeStatsJson",
            PacketKind::VoiceFrame => "VoiceFrame",
            PacketKind::VoiceFrameLoopback => "VoiceFrameLoopback",
            PacketKind::InjectedAudio => "InjectedAudio",
            PacketKind::SilentVoiceFrame => "SilentVoiceFrame",
            PacketKind::MixedAudio => "MixedAudio",
            PacketKind::AudioStreamStats => "AudioStreamStats",
            PacketKind::AudioFormatOffer => "AudioFormatOffer",
            PacketKind::AudioFormatSelect => "AudioFormatSelect",
            PacketKind::EnvironmentMute => "EnvironmentMute",
            PacketKind::GainAdjust => "GainAdjust",
            PacketKind::ActorPose => "ActorPose",
            PacketKind::ActorIdentity => "ActorIdentity",
            PacketKind::BulkActorPose => "BulkActorPose",
            PacketKind::ActorGone => "ActorGone",
            PacketKind::ObjectSpawn => "ObjectSpawn",
            PacketKind::ObjectUpdate => "ObjectUpdate",
            PacketKind::ObjectData => "ObjectData",
            PacketKind::ObjectPhysics => "ObjectPhysics",
            PacketKind::ObjectErase => "ObjectErase",
            PacketKind::ObjectQuery => "ObjectQuery",
            PacketKind::ObjectUpdateNack => "ObjectUpdateNack",
            PacketKind::WorldDataNack => "WorldDataNack",
            PacketKind::WorldSnapshotReplace => "WorldSnapshotReplace",
            PacketKind::AssetGet => "AssetGet",
            PacketKind::AssetGetReply => "AssetGetReply",
            PacketKind::AssetGetInfo => "AssetGetInfo",
            PacketKind::AssetGetInfoReply => "AssetGetInfoReply",
            PacketKind::AssetUpload => "AssetUpload",
            PacketKind::AssetUploadReply => "AssetUploadReply",
            PacketKind::AssetMappingOp => "AssetMappingOp",
            PacketKind::AssetMappingOpReply => "AssetMappingOpReply",
            PacketKind::ChannelMessage => "ChannelMessage",
            PacketKind::ChannelSubscribe => "ChannelSubscribe",
            PacketKind::ChannelUnsubscribe => "ChannelUnsubscribe",
            PacketKind::DisplayNameRequest => "DisplayNameRequest",
            PacketKind::DisplayNameReply => "DisplayNameReply",
            PacketKind::NodeIgnoreRequest => "NodeIgnoreRequest",
            PacketKind::NodeEvictRequest => "NodeEvictRequest",
            PacketKind::NodeSilenceRequest => "NodeSilenceRequest",
            PacketKind::RelayedVoiceFrame => "RelayedVoiceFrame",
            PacketKind::RelayedVoiceFrameLoopback => "RelayedVoiceFrameLoopback",
            PacketKind::RelayedInjectedAudio => "RelayedInjectedAudio",
            PacketKind::RelayedSilentVoiceFrame => "RelayedSilentVoiceFrame",
            PacketKind::RelayedActorIdentity => "RelayedActorIdentity",
            PacketKind::RelayedActorGone => "RelayedActorGone",
            PacketKind::RelayedBulkActorPose => "RelayedBulkActorPose",
            PacketKind::WorldSnapshotReplaceFromUrl => "WorldSnapshotReplaceFromUrl",
        }
    }
}

impl TryFrom<u8> for PacketKind {
    type Error = ProtocolError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(ProtocolError::UnknownPacketKind(code))
    }
}

impl fmt::Display for PacketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Render a raw code for logs: `"11 (DomainRoster)"`.
///
/// Out-of-range codes get a placeholder name instead of failing, so
/// diagnostics stay usable on packets from malformed or newer peers.
pub fn describe_code(code: u8) -> String {
    match PacketKind::from_code(code) {
        Some(kind) => format!("{} ({})", code, kind.name()),
        None => format!("{} ({})", code, UNKNOWN_KIND_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_contiguous() {
        for code in 0..PacketKind::COUNT {
            let kind = PacketKind::from_code(code)
                .unwrap_or_else(|| panic!("code {} missing from registry", code));
            assert_eq!(kind.code(), code);
        }
    }

    #[test]
    fn test_count_is_one_past_last_code() {
        assert!(PacketKind::from_code(PacketKind::COUNT).is_none());
        assert!(PacketKind::from_code(PacketKind::COUNT - 1).is_some());
        assert!(PacketKind::from_code(u8::MAX).is_none());
    }

    #[test]
    fn test_all_iterates_in_code_order() {
        let kinds: Vec<PacketKind> = PacketKind::all().collect();
        assert_eq!(kinds.len(), PacketKind::COUNT as usize);
        for (i, kind) in kinds.iter().enumerate() {
            assert_eq!(kind.code() as usize, i);
        }
    }

    #[test]
    fn test_try_from_valid_and_invalid() {
        assert_eq!(PacketKind::try_from(11).unwrap(), PacketKind::DomainRoster);
        let err = PacketKind::try_from(PacketKind::COUNT).unwrap_err();
        assert!(matches!(err, ProtocolError::UnknownPacketKind(c) if c == PacketKind::COUNT));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = PacketKind::all().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PacketKind::COUNT as usize);
    }

    #[test]
    fn test_describe_code() {
        assert_eq!(describe_code(11), "11 (DomainRoster)");
        assert_eq!(describe_code(26), "26 (VoiceFrame)");
        // one past the last valid code must not panic
        assert_eq!(
            describe_code(PacketKind::COUNT),
            format!("{} ({})", PacketKind::COUNT, UNKNOWN_KIND_NAME)
        );
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(PacketKind::MixedAudio.to_string(), "MixedAudio");
        assert_eq!(
            PacketKind::RelayedBulkActorPose.to_string(),
            PacketKind::RelayedBulkActorPose.name()
        );
    }
}
