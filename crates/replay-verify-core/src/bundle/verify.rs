//! Bundle verification: the four-stage integrity pipeline.
//!
//! Stages run in order, accumulating into one report:
//!
//! 1. Existence — every profile-required file must be present. Any absence
//!    halts the run; digest checks over an incomplete bundle are not
//!    meaningful.
//! 2. Digests load — `digests.json` must parse. Failure halts.
//! 3. Per-file digests — each declared file is hashed and compared, in
//!    table order. Undeclared files are inert.
//! 4. Bundle digest — the canonical `{mse_version, artifact_digests}`
//!    commitment is rehashed and compared against the sealed
//!    `bundle_digest`, and the manifest's table is cross-checked against
//!    `digests.json` content.
//!
//! Two failure taxonomies stay distinct throughout: structural errors
//! (bundle not well-formed enough to check) and digest mismatches (content
//! or commitments differ from declarations). Expected failures accumulate
//! as messages; nothing here panics on malformed input.

use crate::bundle::profile::BundleProfile;
use crate::bundle::reader::{self, DIGESTS_FILE, MANIFEST_FILE};
use crate::crypto::digest;
use serde::Serialize;
use std::path::Path;

/// Structured outcome of one verification run.
///
/// Constructed fresh per invocation, never persisted. Serializes to the
/// machine-readable report the CLI prints.
#[derive(Debug, Clone, Serialize, Default)]
pub struct VerificationReport {
    pub valid: bool,
    /// Structural failures: missing required files, unparsable or
    /// unreadable control files.
    pub errors: Vec<String>,
    /// Content failures: per-file digests or commitments that do not match
    /// their declarations.
    pub digest_mismatches: Vec<String>,
    /// The bundle digest this run computed; absent when the manifest never
    /// parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_digest_recomputed: Option<String>,
    /// Digest of `digests.json` itself, for out-of-band pinning. The
    /// control files are excluded from their own table, so these two
    /// convenience digests are the only content handle on them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256_digests_json: Option<String>,
    /// Digest of `bundle_manifest.json` itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256_bundle_manifest_json: Option<String>,
    #[serde(skip)]
    halted: bool,
}

impl VerificationReport {
    /// True when the run stopped before the digest stages could execute
    /// (missing required file, unparsable `digests.json`).
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Process exit status contract: 0 valid, 1 halted on a structural
    /// error ("could not even run"), 2 ran to completion but invalid.
    pub fn exit_code(&self) -> i32 {
        if self.valid {
            0
        } else if self.halted {
            1
        } else {
            2
        }
    }
}

/// Verify a bundle directory against the v1 profile.
pub fn verify_bundle(root: &Path) -> VerificationReport {
    verify_bundle_with_profile(root, &BundleProfile::v1())
}

/// Verify a bundle directory against an explicit profile.
///
/// A pure function of the path's filesystem contents: single-threaded,
/// read-only with respect to the bundle, no state across invocations.
pub fn verify_bundle_with_profile(root: &Path, profile: &BundleProfile) -> VerificationReport {
    let mut report = VerificationReport::default();

    // Stage 1: existence.
    for name in &profile.required_files {
        if !root.join(name).exists() {
            report.errors.push(format!("Missing required file: {name}"));
        }
    }
    if !report.errors.is_empty() {
        tracing::debug!(
            bundle = %root.display(),
            missing = report.errors.len(),
            "bundle incomplete, halting before digest checks"
        );
        report.halted = true;
        return report;
    }

    // Stage 2: digest table load.
    let table = match reader::read_digest_table(root) {
        Ok(table) => table,
        Err(e) => {
            report
                .errors
                .push(format!("Failed to read {DIGESTS_FILE}: {e}"));
            report.halted = true;
            return report;
        }
    };
    tracing::debug!(declared = table.len(), "digest table loaded");

    // Stage 3: per-file digests, in table order.
    for (name, declared) in table.iter() {
        let path = root.join(name);
        if !path.exists() {
            report
                .digest_mismatches
                .push(format!("{name}: declared but missing"));
            continue;
        }
        match digest::sha256_file(&path) {
            Ok(actual) if actual == declared => {}
            Ok(actual) => report
                .digest_mismatches
                .push(format!("{name}: {declared} != {actual}")),
            // Present but unreadable: structural, not a mismatch.
            Err(e) => report.errors.push(format!("Failed to read {name}: {e}")),
        }
    }

    // Stage 4: bundle digest. A manifest that fails to parse does not undo
    // the per-file results, but the commitment can no longer be recomputed,
    // which fails validity on its own.
    let mut bundle_digest_ok = false;
    match reader::read_manifest(root) {
        Ok(manifest) => match digest::canonical_hash(&manifest.commitment()) {
            Ok(recomputed) => {
                bundle_digest_ok = manifest.bundle_digest.as_deref() == Some(recomputed.as_str());
                if !bundle_digest_ok {
                    let declared = manifest.bundle_digest.as_deref().unwrap_or("null");
                    report
                        .digest_mismatches
                        .push(format!("bundle_digest: {declared} != {recomputed}"));
                }
                if manifest.artifact_digests.as_ref() != Some(&table.to_value()) {
                    report
                        .digest_mismatches
                        .push(format!("manifest.artifact_digests != {DIGESTS_FILE} content"));
                }
                report.bundle_digest_recomputed = Some(recomputed);
            }
            Err(e) => report
                .errors
                .push(format!("Failed to hash manifest commitment: {e}")),
        },
        Err(e) => report
            .errors
            .push(format!("Failed to read {MANIFEST_FILE}: {e}")),
    }

    // Convenience digests of the control files themselves.
    match digest::sha256_file(&root.join(DIGESTS_FILE)) {
        Ok(h) => report.sha256_digests_json = Some(h),
        Err(e) => report
            .errors
            .push(format!("Failed to read {DIGESTS_FILE}: {e}")),
    }
    match digest::sha256_file(&root.join(MANIFEST_FILE)) {
        Ok(h) => report.sha256_bundle_manifest_json = Some(h),
        Err(e) => report
            .errors
            .push(format!("Failed to read {MANIFEST_FILE}: {e}")),
    }

    report.valid =
        report.errors.is_empty() && report.digest_mismatches.is_empty() && bundle_digest_ok;
    tracing::info!(
        bundle = %root.display(),
        valid = report.valid,
        errors = report.errors.len(),
        mismatches = report.digest_mismatches.len(),
        "verification complete"
    );
    report
}
