use std::sync::LazyLock;
use regex::Regex;

static EXPLICIT_SCHEME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?:").unwrap());

/// Canonicalize a raw site string into a scheme-qualified URL.
///
/// Never rejects input: anything without an `http:`/`https:` prefix is
/// treated as protocol-relative and pinned to `https:`.
pub fn normalize_url(raw: &str) -> String {
    let url = raw.trim();
    if EXPLICIT_SCHEME.is_match(url) {
        return url.to_string();
    }
    if url.starts_with("//") {
        format!("https:{}", url)
    } else {
        format!("https://{}", url)
    }
}
