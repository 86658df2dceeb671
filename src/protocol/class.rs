//! Trust and relay classification of packet kinds.
//!
//! Three static tables over the registry, decided at protocol-definition
//! time and immutable at runtime:
//!
//! - **unsourced**: the header carries no sending-node identity. These are
//!   the packets exchanged before a peer has a session (rendezvous,
//!   join), server-to-client control traffic, and relayed variants whose
//!   original source is not the relaying mixer.
//! - **verified**: the header carries an authenticity tag the receiver
//!   checks against the sender's session key. Every sourced kind is
//!   verified unless explicitly exempted.
//! - **replica mapping**: live kind -> relayed kind substituted on paths
//!   toward downstream-only observers, so the sending code path can
//!   downgrade a packet without duplicating any encoding logic.
//!
//! The framing layer consults these when building and parsing headers;
//! nothing here allocates or takes a lock.

use super::PacketKind;

/// True if the kind's header carries no sending-node identity.
pub fn is_unsourced(kind: PacketKind) -> bool {
    matches!(
        kind,
        PacketKind::RendezvousQuery
            | PacketKind::RendezvousPeerInfo
            | PacketKind::RendezvousHeartbeat
            | PacketKind::RendezvousHeartbeatAck
            | PacketKind::RendezvousHeartbeatDenied
            | PacketKind::IntroPing
            | PacketKind::IntroPingReply
            | PacketKind::DomainJoinRequest
            | PacketKind::DomainRoster
            | PacketKind::DomainJoinDenied
            | PacketKind::DomainNodeAdded
            | PacketKind::DomainNodeRemoved
            | PacketKind::DomainConnectionToken
            | PacketKind::DomainSettingsRequest
            | PacketKind::DomainSettings
            | PacketKind::DomainPathQuery
            | PacketKind::DomainPathResponse
            | PacketKind::AssignmentCreate
            | PacketKind::AssignmentRequest
            | PacketKind::AssignmentWorkerStatus
            | PacketKind::NodeShutdown
            | PacketKind::WorldSnapshotReplace
            | PacketKind::DisplayNameReply
            | PacketKind::RelayedVoiceFrame
            | PacketKind::RelayedVoiceFrameLoopback
            | PacketKind::RelayedInjectedAudio
            | PacketKind::RelayedSilentVoiceFrame
            | PacketKind::RelayedActorIdentity
            | PacketKind::RelayedActorGone
            | PacketKind::RelayedBulkActorPose
            | PacketKind::WorldSnapshotReplaceFromUrl
    )
}

/// Sourced kinds exempt from header verification.
///
/// These are low-stakes request/stats kinds where the authenticity tag
/// buys nothing: the receiver either answers from public state or applies
/// its own permission check against the source id anyway.
fn is_verification_exempt(kind: PacketKind) -> bool {
    matches!(
        kind,
        PacketKind::DomainRosterRequest
            | PacketKind::DomainLeaveRequest
            | PacketKind::NodeShutdown
            | PacketKind::NodeStatsJson
            | PacketKind::ObjectQuery
            | PacketKind::ObjectUpdateNack
            | PacketKind::WorldDataNack
            | PacketKind::DisplayNameRequest
            | PacketKind::NodeEvictRequest
            | PacketKind::NodeSilenceRequest
    )
}

/// True if the kind's header must carry an authenticity tag.
///
/// Unsourced kinds have no identity to authenticate and are never
/// verified. Classification of a relayed kind is its own: it is not
/// inherited from the live kind it mirrors.
pub fn requires_verification(kind: PacketKind) -> bool {
    !is_unsourced(kind) && !is_verification_exempt(kind)
}

/// Relayed counterpart for a live kind, if one exists.
///
/// The mapping is injective and irreflexive: no two live kinds share a
/// relayed kind, no kind maps to itself, and no relayed kind appears on
/// the left-hand side.
pub fn replica_for(kind: PacketKind) -> Option<PacketKind> {
    match kind {
        PacketKind::VoiceFrame => Some(PacketKind::RelayedVoiceFrame),
        PacketKind::VoiceFrameLoopback => Some(PacketKind::RelayedVoiceFrameLoopback),
        PacketKind::InjectedAudio => Some(PacketKind::RelayedInjectedAudio),
        PacketKind::SilentVoiceFrame => Some(PacketKind::RelayedSilentVoiceFrame),
        PacketKind::ActorIdentity => Some(PacketKind::RelayedActorIdentity),
        PacketKind::ActorGone => Some(PacketKind::RelayedActorGone),
        PacketKind::BulkActorPose => Some(PacketKind::RelayedBulkActorPose),
        _ => None,
    }
}

/// Live counterpart for a relayed kind: exact inverse of [`replica_for`].
///
/// Used when classifying inbound relayed traffic back onto the handler
/// for its live kind.
pub fn live_for(kind: PacketKind) -> Option<PacketKind> {
    match kind {
        PacketKind::RelayedVoiceFrame => Some(PacketKind::VoiceFrame),
        PacketKind::RelayedVoiceFrameLoopback => Some(PacketKind::VoiceFrameLoopback),
        PacketKind::RelayedInjectedAudio => Some(PacketKind::InjectedAudio),
        PacketKind::RelayedSilentVoiceFrame => Some(PacketKind::SilentVoiceFrame),
        PacketKind::RelayedActorIdentity => Some(PacketKind::ActorIdentity),
        PacketKind::RelayedActorGone => Some(PacketKind::ActorGone),
        PacketKind::RelayedBulkActorPose => Some(PacketKind::BulkActorPose),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_replica_mapping_is_injective_and_irreflexive() {
        let mut replicas = HashSet::new();
        for kind in PacketKind::all() {
            if let Some(replica) = replica_for(kind) {
                assert_ne!(replica, kind, "{} maps to itself", kind);
                assert!(
                    replicas.insert(replica),
                    "{} is the replica of two live kinds",
                    replica
                );
            }
        }
        assert_eq!(replicas.len(), 7);
    }

    #[test]
    fn test_replica_domain_and_codomain_disjoint() {
        for kind in PacketKind::all() {
            if let Some(replica) = replica_for(kind) {
                // a replica kind never has a replica of its own
                assert_eq!(replica_for(replica), None, "{} chains replicas", kind);
            }
        }
    }

    #[test]
    fn test_live_for_inverts_replica_for() {
        for kind in PacketKind::all() {
            if let Some(replica) = replica_for(kind) {
                assert_eq!(live_for(replica), Some(kind));
            }
            if let Some(live) = live_for(kind) {
                assert_eq!(replica_for(live), Some(kind));
            }
        }
    }

    #[test]
    fn test_verified_packet_classification() {
        // sourced and not exempt
        assert!(requires_verification(PacketKind::VoiceFrame));
        assert!(!is_unsourced(PacketKind::VoiceFrame));

        // unsourced, never verified
        assert!(is_unsourced(PacketKind::DomainRoster));
        assert!(!requires_verification(PacketKind::DomainRoster));

        // sourced but exempt
        assert!(!is_unsourced(PacketKind::ObjectQuery));
        assert!(!requires_verification(PacketKind::ObjectQuery));
    }

    #[test]
    fn test_replica_classification_is_independent() {
        // live voice frames are sourced and verified; the relayed variant
        // is unsourced and unverified. Neither flag is inherited.
        assert!(requires_verification(PacketKind::VoiceFrame));
        assert!(!requires_verification(PacketKind::RelayedVoiceFrame));
        assert!(!is_unsourced(PacketKind::VoiceFrame));
        assert!(is_unsourced(PacketKind::RelayedVoiceFrame));
    }

    #[test]
    fn test_all_relayed_kinds_are_unsourced() {
        for kind in PacketKind::all() {
            if live_for(kind).is_some() {
                assert!(is_unsourced(kind), "{} is relayed but sourced", kind);
            }
        }
    }

    #[test]
    fn test_shutdown_is_both_unsourced_and_exempt() {
        // NodeShutdown sits in both tables; membership is independent
        assert!(is_unsourced(PacketKind::NodeShutdown));
        assert!(!requires_verification(PacketKind::NodeShutdown));
    }
}
