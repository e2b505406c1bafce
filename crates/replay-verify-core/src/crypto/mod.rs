//! Cryptographic primitives: canonical JSON encoding and SHA-256 digests.

pub mod canon;
pub mod digest;
