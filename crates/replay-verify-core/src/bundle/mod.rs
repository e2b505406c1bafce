//! Replay bundle control files, profiles, and the verification engine.
//!
//! A bundle is a plain directory sealed by an external producer. Two
//! control files carry its integrity claims:
//!
//! - `digests.json`: per-file SHA-256 table over the retained artifacts
//! - `bundle_manifest.json`: protocol version, the same table, and a
//!   bundle digest committing to both
//!
//! The control files are deliberately excluded from their own digest
//! coverage (no circular hashing); [`verify`] checks them separately.

pub mod manifest;
pub mod profile;
pub mod reader;
pub mod verify;

// Re-exports for convenience
pub use manifest::{BundleManifest, DigestTable};
pub use profile::BundleProfile;
pub use reader::{read_digest_table, read_manifest, ReadError, DIGESTS_FILE, MANIFEST_FILE};
pub use verify::{verify_bundle, verify_bundle_with_profile, VerificationReport};
