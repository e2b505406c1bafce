//! SHA-256 digests over raw bytes, whole files, and canonical JSON values.
//!
//! All digests render as bare lowercase hex, matching the wire format of
//! `digests.json` (64 hex chars, no algorithm prefix).

use crate::crypto::canon;
use anyhow::Result;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::io;
use std::path::Path;

/// Lowercase-hex SHA-256 of raw bytes.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Lowercase-hex SHA-256 of a file, read in full.
///
/// Bundles hold small report artifacts; whole-file reads are fine and keep
/// the digest trivially equal to `sha256_hex` of the file's bytes. An I/O
/// failure here is the caller's structural error, never a mismatch.
pub fn sha256_file(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(sha256_hex(&bytes))
}

/// Digest of the canonical encoding of a JSON value.
///
/// Invariant under key-construction order, because the canonical encoding
/// is.
pub fn canonical_hash(value: &Value) -> Result<String> {
    Ok(sha256_hex(&canon::to_vec(value)?))
}
