// src/util/text.rs

/// First non-blank line of `content`, trimmed.
///
/// # Examples
///
/// ```
/// use frogmemo::util::text::extract_first_line;
///
/// assert_eq!(extract_first_line("\n  SELECT *\nFROM t"), "SELECT *");
/// ```
pub fn extract_first_line(content: &str) -> &str {
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

/// Cut `text` to at most `max_chars` characters, marking the cut with `...`.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// One-line preview of a block's content.
pub fn preview(content: &str, max_chars: usize) -> String {
    truncate(extract_first_line(content), max_chars)
}
