//! Canonical JSON encoding for bundle digests.
//!
//! The bundle digest commits to a canonical byte encoding of a JSON value:
//!
//! - Mapping keys sorted in strict ascending code-point order, at every
//!   nesting level
//! - Compact separators, no insignificant whitespace
//! - Non-ASCII characters as literal UTF-8, never `\uXXXX` escapes
//! - A single trailing newline
//!
//! Two semantically identical values always encode to identical bytes,
//! regardless of construction order. That determinism is what makes the
//! bundle digest portable across machines and implementations.
//!
//! The canonical form is never written into a bundle; it exists only
//! transiently as hash input. Note this is deliberately *not* RFC 8785
//! (which sorts by UTF-16 code units and has no trailing newline) — the
//! sealed-bundle wire format predates this crate and wins.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

/// Encode a value to canonical bytes.
///
/// # Example
///
/// ```
/// use replay_verify_core::crypto::canon;
/// use serde_json::json;
///
/// let value = json!({"b": 2, "a": 1});
/// let bytes = canon::to_vec(&value).unwrap();
/// assert_eq!(bytes, b"{\"a\":1,\"b\":2}\n");
/// ```
pub fn to_vec(value: &Value) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_value(&mut out, value)?;
    out.push(b'\n');
    Ok(out)
}

/// Encode a value to a canonical string, trailing newline included.
pub fn to_string(value: &Value) -> Result<String> {
    let bytes = to_vec(value)?;
    String::from_utf8(bytes).context("canonical encoding produced invalid utf-8")
}

fn write_value(out: &mut Vec<u8>, value: &Value) -> Result<()> {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            out.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_scalar(out, key)?;
                out.push(b':');
                write_value(out, item)?;
            }
            out.push(b'}');
        }
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_value(out, item)?;
            }
            out.push(b']');
        }
        scalar => write_scalar(out, scalar)?,
    }
    Ok(())
}

// Scalars go through serde_json so string escaping stays byte-compatible
// with ordinary JSON emitters (non-ASCII stays literal UTF-8).
fn write_scalar<T: Serialize>(out: &mut Vec<u8>, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value).context("failed to encode canonical json scalar")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_ordering() {
        let input = json!({
            "z": 3,
            "b": 2,
            "a": 1,
            "m": 4
        });

        let canonical = to_string(&input).unwrap();
        assert_eq!(canonical, "{\"a\":1,\"b\":2,\"m\":4,\"z\":3}\n");
    }

    #[test]
    fn test_nested_ordering() {
        let input = json!({
            "outer": {
                "z": 1,
                "a": 2
            },
            "first": true
        });

        let canonical = to_string(&input).unwrap();
        assert_eq!(canonical, "{\"first\":true,\"outer\":{\"a\":2,\"z\":1}}\n");
    }

    #[test]
    fn test_compact_separators() {
        let input = json!({
            "key": "value",
            "array": [1, 2, 3]
        });

        let canonical = to_string(&input).unwrap();
        assert!(!canonical.contains(' '));
        // Exactly the single terminator, nothing between tokens.
        assert_eq!(canonical.matches('\n').count(), 1);
        assert!(canonical.ends_with('\n'));
    }

    #[test]
    fn test_array_order_preserved() {
        let input = json!({
            "array": [3, 1, 2]
        });

        // Arrays maintain order (not sorted)
        let canonical = to_string(&input).unwrap();
        assert_eq!(canonical, "{\"array\":[3,1,2]}\n");
    }

    #[test]
    fn test_unicode_literal_utf8() {
        let input = json!({
            "note": "café ✓",
            "n": 3
        });

        // Pinned against an independent encoder: non-ASCII stays literal,
        // never \uXXXX-escaped.
        let canonical = to_string(&input).unwrap();
        assert_eq!(canonical, "{\"n\":3,\"note\":\"café ✓\"}\n");
    }

    #[test]
    fn test_null_and_bool() {
        let input = json!({
            "missing": null,
            "flag": false
        });

        let canonical = to_string(&input).unwrap();
        assert_eq!(canonical, "{\"flag\":false,\"missing\":null}\n");
    }

    #[test]
    fn test_determinism_under_construction_order() {
        // Same logical value, different construction order
        let input1 = json!({"a": 1, "b": 2});
        let input2 = json!({"b": 2, "a": 1});

        let canonical1 = to_vec(&input1).unwrap();
        let canonical2 = to_vec(&input2).unwrap();

        assert_eq!(canonical1, canonical2, "encoding must be deterministic");
    }

    #[test]
    fn test_commitment_shape() {
        // The exact byte shape of a bundle commitment input.
        let input = json!({
            "mse_version": "1.0",
            "artifact_digests": {"config.json": "a".repeat(64), "README.md": "b".repeat(64)},
        });

        let expected = format!(
            "{{\"artifact_digests\":{{\"README.md\":\"{}\",\"config.json\":\"{}\"}},\"mse_version\":\"1.0\"}}\n",
            "b".repeat(64),
            "a".repeat(64),
        );
        assert_eq!(to_string(&input).unwrap(), expected);
    }
}
