//! Unified exit codes for `replay-verify`.
//! These codes are part of the public contract: automation must be able to
//! tell "ran and failed" apart from "could not even run".

pub const SUCCESS: i32 = 0; // Bundle verified clean
pub const STRUCTURAL: i32 = 1; // Halted: missing required file or unparsable digests.json
pub const INVALID: i32 = 2; // Ran to completion, a digest or commitment did not match
