//! Text helpers exposed to templates

pub mod filters;

/// Appended when text was shortened
pub const ELLIPSIS_MARKER: &str = " \u{2026}";

/// Crop `text` to `max_len` characters, pulling back to the last full stop.
///
/// Counts Unicode scalar values, not bytes. When no full stop falls inside
/// the budget the cut lands mid-word. The marker is only appended if
/// something was actually dropped.
pub fn truncate_at_sentence(text: &str, max_len: usize) -> String {
    let cut = text
        .char_indices()
        .nth(max_len)
        .map_or(text.len(), |(idx, _)| idx);
    let mut truncated = &text[..cut];

    if let Some(last_point) = truncated.rfind('.') {
        truncated = &truncated[..=last_point];
    }

    if truncated.len() < text.len() {
        let mut out = String::with_capacity(truncated.len() + ELLIPSIS_MARKER.len());
        out.push_str(truncated);
        out.push_str(ELLIPSIS_MARKER);
        out
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuts_at_last_full_stop() {
        assert_eq!(
            truncate_at_sentence("Hello world. Second sentence.", 20),
            "Hello world. \u{2026}"
        );
    }

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(
            truncate_at_sentence("No punctuation here", 100),
            "No punctuation here"
        );
        assert_eq!(truncate_at_sentence("Exact.", 6), "Exact.");
    }

    #[test]
    fn test_zero_length() {
        assert_eq!(truncate_at_sentence("abc", 0), ELLIPSIS_MARKER);
        assert_eq!(truncate_at_sentence("", 0), "");
    }

    #[test]
    fn test_no_full_stop_cuts_mid_word() {
        assert_eq!(
            truncate_at_sentence("No punctuation here", 8),
            "No punct \u{2026}"
        );
    }

    #[test]
    fn test_keeps_multiple_sentences_within_budget() {
        assert_eq!(
            truncate_at_sentence("One. Two. Three is long.", 12),
            "One. Two. \u{2026}"
        );
    }

    #[test]
    fn test_full_stop_at_end_of_text_not_marked() {
        // Whole text fits, trailing full stop found, nothing dropped
        assert_eq!(truncate_at_sentence("Done. Finished.", 15), "Done. Finished.");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(
            truncate_at_sentence("Café. Crème brûlée.", 6),
            "Café. \u{2026}"
        );
        assert_eq!(truncate_at_sentence("éé", 1), "é \u{2026}");
    }
}
