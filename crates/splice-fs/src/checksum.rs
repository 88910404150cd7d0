//! SHA-256 checksums in the canonical `sha256:<hex>` form
//!
//! Batch reports carry the checksum of each document before and after its
//! edits so a caller can tell which files actually changed.

use sha2::{Digest, Sha256};

const PREFIX: &str = "sha256:";

/// Compute the checksum of text content.
pub fn content_checksum(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    format!("{PREFIX}{digest:x}")
}

/// First `len` hex digits of a checksum, for human-readable output.
pub fn short(checksum: &str, len: usize) -> &str {
    let hex = checksum.strip_prefix(PREFIX).unwrap_or(checksum);
    let end = hex
        .char_indices()
        .nth(len)
        .map(|(idx, _)| idx)
        .unwrap_or(hex.len());
    &hex[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_has_prefix_and_is_deterministic() {
        let a = content_checksum("<div>a</div>");
        assert!(a.starts_with("sha256:"));
        assert_eq!(a, content_checksum("<div>a</div>"));
        assert_ne!(a, content_checksum("<div>b</div>"));
    }

    #[test]
    fn checksum_known_value() {
        assert_eq!(
            content_checksum("hello world"),
            "sha256:b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn short_strips_prefix() {
        let checksum = content_checksum("hello world");
        assert_eq!(short(&checksum, 8), "b94d27b9");
        assert_eq!(short("abc", 8), "abc");
    }
}
