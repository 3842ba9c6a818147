use regex::Regex;
use std::sync::LazyLock;

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static WHITESPACE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Replace every HTML tag with a space and collapse the remaining whitespace
pub fn strip_tags(html: &str) -> String {
    let without_tags = TAG_PATTERN.replace_all(html, " ");
    let normalized = WHITESPACE_PATTERN.replace_all(&without_tags, " ");
    normalized.trim().to_string()
}

/// Truncate to at most `max` characters without splitting a code point
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
