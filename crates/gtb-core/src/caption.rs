//! Caption shaping for photo sends.
//!
//! Telegram truncates captions hard; instead of letting it, we cut at the
//! last sentence boundary inside the limit and ship the untruncated text as
//! a follow-up message.

/// Fit `text` into a photo caption of at most `limit` characters.
///
/// Returns `(caption, None)` when the whole text fits. Otherwise the caption
/// is the first `limit` chars cut after the last full stop within them (or
/// the raw prefix when there is none) plus a literal `"..."`, and the second
/// element carries the full text for a follow-up send. Counts are chars, not
/// bytes.
pub fn shape_caption(text: &str, limit: usize) -> (String, Option<String>) {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= limit {
        return (text.to_string(), None);
    }

    let head = &chars[..limit];
    let cut = head
        .iter()
        .rposition(|&c| c == '.')
        .map(|i| i + 1)
        .unwrap_or(limit);

    let mut caption: String = head[..cut].iter().collect();
    caption.push_str("...");

    (caption, Some(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::DEFAULT_CAPTION_LIMIT;

    #[test]
    fn short_text_is_untouched() {
        let (caption, tail) = shape_caption("Вот кот.", DEFAULT_CAPTION_LIMIT);
        assert_eq!(caption, "Вот кот.");
        assert!(tail.is_none());
    }

    #[test]
    fn text_at_exactly_the_limit_does_not_split() {
        let text = "х".repeat(DEFAULT_CAPTION_LIMIT);
        let (caption, tail) = shape_caption(&text, DEFAULT_CAPTION_LIMIT);
        assert_eq!(caption, text);
        assert!(tail.is_none());
    }

    #[test]
    fn one_char_over_with_no_full_stop_cuts_at_the_limit() {
        let text = "a".repeat(DEFAULT_CAPTION_LIMIT + 1);
        let (caption, tail) = shape_caption(&text, DEFAULT_CAPTION_LIMIT);
        assert_eq!(
            caption,
            format!("{}...", "a".repeat(DEFAULT_CAPTION_LIMIT))
        );
        assert_eq!(tail.as_deref(), Some(text.as_str()));
    }

    #[test]
    fn cuts_after_the_last_full_stop_inside_the_limit() {
        // 1500 chars, full stop at index 842.
        let mut text = "b".repeat(842);
        text.push('.');
        text.push_str(&"c".repeat(1500 - 843));
        assert_eq!(text.chars().count(), 1500);

        let (caption, tail) = shape_caption(&text, DEFAULT_CAPTION_LIMIT);
        let expected: String = text.chars().take(843).collect();
        assert_eq!(caption, format!("{expected}..."));
        assert_eq!(tail.as_deref(), Some(text.as_str()));
    }

    #[test]
    fn caption_never_exceeds_limit_plus_ellipsis() {
        for len in [901usize, 950, 1024, 5000] {
            let text = "д".repeat(len);
            let (caption, _) = shape_caption(&text, DEFAULT_CAPTION_LIMIT);
            assert!(caption.chars().count() <= DEFAULT_CAPTION_LIMIT + 3);
        }
    }

    #[test]
    fn counts_chars_not_bytes() {
        // Cyrillic chars are two bytes each; a byte-based cut would split at
        // half the limit or panic mid-codepoint.
        let text = "ы".repeat(DEFAULT_CAPTION_LIMIT + 1);
        let (caption, tail) = shape_caption(&text, DEFAULT_CAPTION_LIMIT);
        assert_eq!(caption.chars().count(), DEFAULT_CAPTION_LIMIT + 3);
        assert_eq!(tail.as_deref(), Some(text.as_str()));
    }
}
