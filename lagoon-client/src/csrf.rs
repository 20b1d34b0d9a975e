//! CSRF token discovery
//!
//! Laravel renders the session token into the page as
//! `<meta name="csrf-token" content="...">`. Mutating requests echo it back
//! in `X-CSRF-TOKEN`.

use regex::Regex;
use std::sync::LazyLock;

static META_NAME_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<meta[^>]*\bname\s*=\s*["']csrf-token["'][^>]*\bcontent\s*=\s*["']([^"']*)["']"#)
        .expect("valid csrf-token regex")
});

static META_CONTENT_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<meta[^>]*\bcontent\s*=\s*["']([^"']*)["'][^>]*\bname\s*=\s*["']csrf-token["']"#)
        .expect("valid csrf-token regex")
});

/// Pull the CSRF token out of an HTML page, in either attribute order
pub fn extract_meta_token(html: &str) -> Option<String> {
    [&*META_NAME_FIRST, &*META_CONTENT_FIRST]
        .into_iter()
        .find_map(|re| re.captures(html))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|token| !token.is_empty())
}
