//! Input validation policies.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// URL pattern with optional `http(s)://` scheme, a dot-separated host
/// whose top-level label has at least two letters, and an optional path.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}(/.*)?$")
        .expect("URL pattern is a valid regex")
});

/// Bare `host.tld[/path]` pattern, e.g. `google.com`.
static BARE_HOST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9-]+\.[a-zA-Z]{2,}(/.*)?$").expect("host pattern is a valid regex")
});

/// Which inputs are accepted for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UrlPolicy {
    /// Only URL-like strings pass.
    #[default]
    Strict,

    /// Any non-blank text passes.
    Permissive,
}

/// Decide whether `text` is acceptable under `policy`.
///
/// Pure and deterministic; input is trimmed first, blank input never
/// passes.
pub fn validate(text: &str, policy: UrlPolicy) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    match policy {
        UrlPolicy::Permissive => true,
        UrlPolicy::Strict => URL_PATTERN.is_match(trimmed) || BARE_HOST_PATTERN.is_match(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_accepts_url_like_strings() {
        for input in [
            "google.com",
            "https://google.com",
            "https://google.com/path",
            "http://sub.example.org/a/b?q=1",
            "example-site.co",
            "a.io/",
        ] {
            assert!(validate(input, UrlPolicy::Strict), "should accept {input:?}");
        }
    }

    #[test]
    fn strict_rejects_non_urls() {
        for input in ["", "   ", "not a url", "hello world", "http://", "justtext", "trailingdot."] {
            assert!(!validate(input, UrlPolicy::Strict), "should reject {input:?}");
        }
    }

    #[test]
    fn strict_trims_before_matching() {
        assert!(validate("  https://google.com  ", UrlPolicy::Strict));
        assert!(validate("\tgoogle.com\n", UrlPolicy::Strict));
    }

    #[test]
    fn permissive_accepts_any_non_blank_text() {
        assert!(validate("hello world", UrlPolicy::Permissive));
        assert!(validate("not a url", UrlPolicy::Permissive));
        assert!(validate("https://google.com", UrlPolicy::Permissive));
    }

    #[test]
    fn permissive_rejects_blank_text() {
        assert!(!validate("", UrlPolicy::Permissive));
        assert!(!validate("   \t ", UrlPolicy::Permissive));
    }
}
