/// Number of characters shown when logging pasted text
pub const PREVIEW_CHARS: usize = 50;

/// Character count as the client sees it (Unicode scalar values, not bytes)
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// First `PREVIEW_CHARS` characters of `text`, never splitting a code point
pub fn preview(text: &str) -> &str {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
