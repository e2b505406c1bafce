//! Integrity verification for sealed replay bundles.
//!
//! A replay bundle is a directory sealed by an external analysis process
//! with two control files: `digests.json` (a per-file SHA-256 table over
//! the retained artifacts) and `bundle_manifest.json` (the protocol
//! version, the producer's copy of that table, and a bundle digest
//! committing to both via a canonical JSON encoding). This crate answers
//! one question: has the bundle been tampered with or corrupted since it
//! was sealed?
//!
//! # Example
//!
//! ```no_run
//! use replay_verify_core::verify_bundle;
//! use std::path::Path;
//!
//! let report = verify_bundle(Path::new("./my_bundle"));
//! if !report.valid {
//!     for e in &report.errors {
//!         eprintln!("error: {e}");
//!     }
//!     for m in &report.digest_mismatches {
//!         eprintln!("mismatch: {m}");
//!     }
//! }
//! std::process::exit(report.exit_code());
//! ```

pub mod bundle;
pub mod crypto;

// Convenience re-exports
pub use bundle::{
    read_digest_table, read_manifest, verify_bundle, verify_bundle_with_profile, BundleManifest,
    BundleProfile, DigestTable, ReadError, VerificationReport, DIGESTS_FILE, MANIFEST_FILE,
};
