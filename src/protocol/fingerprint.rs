//! Protocol version fingerprint for mutual compatibility checks.
//!
//! Two peers are wire-compatible only if they agree on every packet
//! kind's current version. Rather than exchanging the whole table during
//! the handshake, each peer sends a single digest over it and the
//! receiver compares byte-for-byte; any mismatch means
//! incompatible-protocol rejection (enforced by the handshake layer, not
//! here).
//!
//! ## Serialization
//!
//! ```text
//! [kind_count:1][version(kind):1 for each code 0..kind_count]
//! ```
//!
//! digested with SHA-256. Including the count means appending a kind
//! changes the fingerprint even if every existing version is untouched.
//! This is an equality check between cooperating builds, not a security
//! boundary; collision resistance is all that is required of the digest.
//!
//! The fingerprint is a function of compiled-in tables, so it is computed
//! at most once per process and cached for the process's lifetime.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use sha2::{Digest, Sha256};
use std::sync::OnceLock;
use tracing::debug;

use super::{version_for, PacketKind, PacketVersion};

/// Fingerprint length in bytes (SHA-256 digest).
pub const FINGERPRINT_LEN: usize = 32;

// ============================================================================
// Fingerprint Value
// ============================================================================

/// A computed digest over the protocol's version surface.
///
/// Immutable once computed; the text form is standard base64 of the raw
/// digest and decodes back to exactly the raw bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionFingerprint {
    raw: [u8; FINGERPRINT_LEN],
    text: String,
}

impl VersionFingerprint {
    fn from_raw(raw: [u8; FINGERPRINT_LEN]) -> Self {
        let text = BASE64.encode(raw);
        Self { raw, text }
    }

    /// Raw digest bytes.
    pub fn raw(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.raw
    }

    /// Base64 text form, as carried in join requests.
    pub fn base64(&self) -> &str {
        &self.text
    }
}

/// Serialize a version surface and digest it.
///
/// Separated from the service so tests can digest toy registries and
/// known vectors without touching the real tables.
fn digest_version_surface(
    kind_count: u8,
    versions: impl IntoIterator<Item = PacketVersion>,
) -> [u8; FINGERPRINT_LEN] {
    let mut buffer = Vec::with_capacity(1 + kind_count as usize);
    buffer.push(kind_count);
    buffer.extend(versions);
    Sha256::digest(&buffer).into()
}

// ============================================================================
// Fingerprint Service
// ============================================================================

/// Compute-once holder for the protocol fingerprint.
///
/// The first caller runs the digest computation; concurrent first callers
/// block until it finishes and every caller observes the identical cached
/// value. All later accesses are plain reads.
///
/// Production code uses the process-wide instance through
/// [`protocol_fingerprint`] / [`protocol_fingerprint_base64`]. Distinct
/// instances exist so the handshake's rejection path can be driven with a
/// deliberately wrong fingerprint in tests; any two honestly-constructed
/// instances in builds with identical tables produce identical values.
pub struct FingerprintService {
    cell: OnceLock<VersionFingerprint>,
    #[cfg(any(test, feature = "fault-injection"))]
    force_mismatch: bool,
    #[cfg(test)]
    computations: std::sync::atomic::AtomicU32,
}

impl FingerprintService {
    /// Create an empty service; nothing is computed until first access.
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            #[cfg(any(test, feature = "fault-injection"))]
            force_mismatch: false,
            #[cfg(test)]
            computations: std::sync::atomic::AtomicU32::new(0),
        }
    }

    /// Create a service that yields a deliberately wrong fingerprint.
    ///
    /// Drives the handshake's incompatible-protocol rejection path in
    /// tests. Compiled only under `cfg(test)` or the off-by-default
    /// `fault-injection` feature, so no production build can reach it.
    #[cfg(any(test, feature = "fault-injection"))]
    pub const fn with_forced_mismatch() -> Self {
        Self {
            cell: OnceLock::new(),
            force_mismatch: true,
            #[cfg(test)]
            computations: std::sync::atomic::AtomicU32::new(0),
        }
    }

    fn get(&self) -> &VersionFingerprint {
        self.cell.get_or_init(|| {
            #[cfg(test)]
            self.computations
                .fetch_add(1, std::sync::atomic::Ordering::Relaxed);

            #[cfg(any(test, feature = "fault-injection"))]
            if self.force_mismatch {
                // digest of a fixed non-surface input: wrong in both raw
                // and text form, but still well-formed
                return VersionFingerprint::from_raw(
                    Sha256::digest(b"forced-wrong-fingerprint").into(),
                );
            }

            let raw = digest_version_surface(
                PacketKind::COUNT,
                PacketKind::all().map(version_for),
            );
            let fingerprint = VersionFingerprint::from_raw(raw);
            debug!(
                fingerprint = %fingerprint.base64(),
                kinds = PacketKind::COUNT,
                "computed protocol version fingerprint"
            );
            fingerprint
        })
    }

    /// Raw fingerprint bytes, computing them on first access.
    pub fn raw(&self) -> &[u8; FINGERPRINT_LEN] {
        self.get().raw()
    }

    /// Base64 fingerprint text, computing it on first access.
    pub fn base64(&self) -> &str {
        self.get().base64()
    }

    #[cfg(test)]
    fn computations(&self) -> u32 {
        self.computations.load(std::sync::atomic::Ordering::Relaxed)
    }
}

impl Default for FingerprintService {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Process-Wide Accessors
// ============================================================================

static PROCESS_FINGERPRINT: FingerprintService = FingerprintService::new();

/// Raw fingerprint of this build's protocol surface.
pub fn protocol_fingerprint() -> &'static [u8; FINGERPRINT_LEN] {
    PROCESS_FINGERPRINT.raw()
}

/// Base64 fingerprint of this build's protocol surface.
pub fn protocol_fingerprint_base64() -> &'static str {
    PROCESS_FINGERPRINT.base64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    // digest over the serialized toy registry [3, 1, 2, 1]:
    // three kinds at versions 1, 2, 1
    const TOY_DIGEST_BASE64: &str = "0qU+KlOVaElSesr1FsrsDwvFbjr/B1QZoDSLqVUOX9w=";

    // pinned fingerprint of the shipped registry; fails on any
    // accidental edit to the kind or version tables
    const REGISTRY_DIGEST_BASE64: &str = "jKVI/ZdMkGzDkpx40X4dXm/d0lLonQjiHWVzcqCZgZw=";

    #[test]
    fn test_toy_registry_known_vector() {
        let digest = digest_version_surface(3, [1, 2, 1]);
        assert_eq!(BASE64.encode(digest), TOY_DIGEST_BASE64);
    }

    #[test]
    fn test_single_version_bump_changes_digest() {
        let before = digest_version_surface(3, [1, 2, 1]);
        let after = digest_version_surface(3, [1, 3, 1]);
        assert_ne!(before, after);
    }

    #[test]
    fn test_appending_a_kind_changes_digest() {
        let before = digest_version_surface(3, [1, 2, 1]);
        let after = digest_version_surface(4, [1, 2, 1, crate::protocol::BASELINE_PACKET_VERSION]);
        assert_ne!(before, after);
    }

    #[test]
    fn test_registry_fingerprint_is_pinned() {
        assert_eq!(protocol_fingerprint_base64(), REGISTRY_DIGEST_BASE64);
    }

    #[test]
    fn test_text_decodes_to_raw() {
        let service = FingerprintService::new();
        let decoded = BASE64.decode(service.base64()).unwrap();
        assert_eq!(decoded.as_slice(), service.raw().as_slice());
    }

    #[test]
    fn test_repeated_access_is_idempotent() {
        let service = FingerprintService::new();
        let first = *service.raw();
        let second = *service.raw();
        assert_eq!(first, second);
        assert_eq!(service.base64(), service.base64());
        assert_eq!(service.computations(), 1);
    }

    #[test]
    fn test_independent_instances_agree() {
        let a = FingerprintService::new();
        let b = FingerprintService::new();
        assert_eq!(a.raw(), b.raw());
        assert_eq!(a.base64(), b.base64());
        assert_eq!(a.raw().as_slice(), protocol_fingerprint().as_slice());
    }

    #[test]
    fn test_concurrent_first_access_computes_once() {
        let service = FingerprintService::new();

        thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|_| scope.spawn(|| *service.raw()))
                .collect();
            let results: Vec<[u8; FINGERPRINT_LEN]> =
                handles.into_iter().map(|h| h.join().unwrap()).collect();

            for result in &results {
                assert_eq!(result, &results[0]);
            }
        });

        assert_eq!(service.computations(), 1);
    }

    #[test]
    fn test_forced_mismatch_differs_from_real() {
        let wrong = FingerprintService::with_forced_mismatch();
        let real = FingerprintService::new();
        assert_ne!(wrong.raw(), real.raw());
        assert_ne!(wrong.base64(), real.base64());
        // still well-formed: full length, decodable text
        assert_eq!(
            BASE64.decode(wrong.base64()).unwrap().as_slice(),
            wrong.raw().as_slice()
        );
    }
}
