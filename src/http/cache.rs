//! `ETag` generation and conditional request checks

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Quoted `ETag` derived from the file contents, e.g. `"9f2c..."`
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:x}\"", hasher.finish())
}

/// True when `If-None-Match` lists `etag` (or `*`), meaning a 304 is due.
pub fn check_etag_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|header| {
        header
            .split(',')
            .map(str::trim)
            .any(|candidate| candidate == etag || candidate == "*")
    })
}

/// `Cache-Control` value for public resources
pub fn public_cache_control(max_age: u32) -> String {
    format!("public, max-age={max_age}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_etag_is_quoted_and_stable() {
        let etag = generate_etag(b"body { color: red }");
        assert!(etag.starts_with('"') && etag.ends_with('"'));
        assert_eq!(etag, generate_etag(b"body { color: red }"));
        assert_ne!(etag, generate_etag(b"body { color: blue }"));
    }

    #[test]
    fn test_check_etag_match() {
        let etag = "\"abc123\"";
        assert!(check_etag_match(Some("\"abc123\""), etag));
        assert!(check_etag_match(Some("\"old\", \"abc123\""), etag));
        assert!(check_etag_match(Some("*"), etag));
        assert!(!check_etag_match(Some("\"old\""), etag));
        assert!(!check_etag_match(None, etag));
    }

    #[test]
    fn test_public_cache_control() {
        assert_eq!(public_cache_control(600), "public, max-age=600");
    }
}
