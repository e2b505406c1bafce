//! Control-file types: the per-file digest table and the bundle manifest.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared per-file digests from `digests.json`, in table order.
///
/// Keys are bundle-relative filenames, values lowercase-hex SHA-256
/// strings. This table is the source of truth for which files are
/// content-addressed; files in the bundle it never names are inert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigestTable {
    entries: Vec<(String, String)>,
}

impl DigestTable {
    pub fn from_entries(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// `(filename, declared_digest)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, d)| (n.as_str(), d.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The table as a JSON object, for content-equality comparison against
    /// `manifest.artifact_digests` (same keys, same values; order ignored).
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(n, d)| (n.clone(), Value::String(d.clone())))
                .collect(),
        )
    }
}

/// Parsed `bundle_manifest.json`.
///
/// Every load-bearing field is optional: a manifest missing one is still
/// well-formed, and the absent field rides along as null until the digest
/// comparison, where null can never equal a recomputed digest. Producers
/// may add further fields; they are ignored here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BundleManifest {
    /// Protocol version string the bundle was sealed under.
    #[serde(default)]
    pub mse_version: Option<String>,
    /// The producer's copy of the digest table. Expected to equal
    /// `digests.json` content exactly.
    #[serde(default)]
    pub artifact_digests: Option<Value>,
    /// Precomputed digest of the canonical `{mse_version, artifact_digests}`
    /// commitment, asserted by the producer.
    #[serde(default)]
    pub bundle_digest: Option<String>,
}

impl BundleManifest {
    /// The hash input the bundle digest commits to.
    ///
    /// Commits to the protocol version and the declared digest table only.
    /// The two control files' own bytes are excluded, so the commitment is
    /// not self-referential. Absent fields commit as null.
    pub fn commitment(&self) -> Value {
        serde_json::json!({
            "mse_version": self.mse_version,
            "artifact_digests": self.artifact_digests,
        })
    }
}
