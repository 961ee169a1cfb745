/// Truncate text to `max_len` characters, appending an ellipsis when cut
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_cuts_with_ellipsis() {
        assert_eq!(truncate("a long caption here", 10), "a long ...");
    }
}
