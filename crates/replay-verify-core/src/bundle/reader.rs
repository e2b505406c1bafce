//! Loading the two control files from a bundle directory.

use crate::bundle::manifest::{BundleManifest, DigestTable};
use serde_json::Value;
use std::path::Path;

/// Filename of the per-file digest table.
pub const DIGESTS_FILE: &str = "digests.json";
/// Filename of the bundle manifest.
pub const MANIFEST_FILE: &str = "bundle_manifest.json";

/// Failure to load a control file. The engine renders these into
/// structural error messages; they are never mismatches.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Malformed(String),
}

/// Read and parse `digests.json`: a JSON object mapping bundle-relative
/// filenames to digest strings. Table order is preserved.
pub fn read_digest_table(root: &Path) -> Result<DigestTable, ReadError> {
    let text = std::fs::read_to_string(root.join(DIGESTS_FILE))?;
    let value: Value = serde_json::from_str(&text)?;
    let Value::Object(map) = value else {
        return Err(ReadError::Malformed("expected a JSON object".to_string()));
    };
    let mut entries = Vec::with_capacity(map.len());
    for (name, declared) in map {
        let Value::String(digest) = declared else {
            return Err(ReadError::Malformed(format!(
                "digest for {name} is not a string"
            )));
        };
        entries.push((name, digest));
    }
    Ok(DigestTable::from_entries(entries))
}

/// Read and parse `bundle_manifest.json`.
///
/// The load-bearing fields are all optional; a missing one is
/// present-but-null and fails at digest comparison rather than here.
pub fn read_manifest(root: &Path) -> Result<BundleManifest, ReadError> {
    let text = std::fs::read_to_string(root.join(MANIFEST_FILE))?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_table_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DIGESTS_FILE),
            r#"{"z.json": "11", "a.json": "22", "m.json": "33"}"#,
        )
        .unwrap();

        let table = read_digest_table(dir.path()).unwrap();
        let names: Vec<&str> = table.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["z.json", "a.json", "m.json"]);
    }

    #[test]
    fn test_digest_table_rejects_non_object() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DIGESTS_FILE), "[1, 2, 3]").unwrap();

        assert!(matches!(
            read_digest_table(dir.path()),
            Err(ReadError::Malformed(_))
        ));
    }

    #[test]
    fn test_digest_table_rejects_non_string_digest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DIGESTS_FILE), r#"{"a.json": 42}"#).unwrap();

        let err = read_digest_table(dir.path()).unwrap_err();
        assert!(err.to_string().contains("a.json"));
    }

    #[test]
    fn test_digest_table_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DIGESTS_FILE), "{not json").unwrap();

        assert!(matches!(
            read_digest_table(dir.path()),
            Err(ReadError::Json(_))
        ));
    }

    #[test]
    fn test_manifest_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"{"mse_version": "1.0", "artifact_digests": {}, "bundle_digest": "00"}"#,
        )
        .unwrap();

        let m = read_manifest(dir.path()).unwrap();
        assert_eq!(m.mse_version.as_deref(), Some("1.0"));
        assert_eq!(m.bundle_digest.as_deref(), Some("00"));
    }
}
