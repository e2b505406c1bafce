//! Versioned bundle profiles: which files a sealed bundle must contain.

/// Verification profile for one protocol version.
///
/// The required-file set is configuration rather than a hardcoded literal,
/// so a protocol revision can change the set without touching the engine.
/// The set is constant across all bundles of the same version, never
/// per-invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleProfile {
    /// Protocol version this profile describes.
    pub mse_version: String,
    /// Files that must exist in every bundle of this version, in report
    /// order.
    pub required_files: Vec<String>,
}

impl BundleProfile {
    /// Profile for v1 replay bundles.
    ///
    /// `verify_replay.py` is the bundled copy of the verifier itself — the
    /// replay-bundle convention is self-contained, so the artifact must
    /// exist even though its content is only covered if the digest table
    /// declares it.
    pub fn v1() -> Self {
        Self {
            mse_version: "1.0".to_string(),
            required_files: [
                "README.md",
                "config.json",
                "regime_summary.json",
                "digests.json",
                "bundle_manifest.json",
                "verify_replay.py",
            ]
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
        }
    }
}

impl Default for BundleProfile {
    fn default() -> Self {
        Self::v1()
    }
}
