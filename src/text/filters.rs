//! Named text filters
//!
//! Template-facing callers look filters up by the name templates use. This is
//! library surface only; the server binary does not render templates.

use super::truncate_at_sentence;

/// A text filter taking the input and a character budget
pub type Filter = fn(&str, usize) -> String;

const FILTERS: &[(&str, Filter)] = &[("truncateAtSentence", truncate_at_sentence as Filter)];

/// Look up a filter by its template name
pub fn lookup(name: &str) -> Option<Filter> {
    FILTERS
        .iter()
        .find(|(filter_name, _)| *filter_name == name)
        .map(|(_, filter)| *filter)
}

/// Registered filter names, in registration order
pub fn names() -> impl Iterator<Item = &'static str> {
    FILTERS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_truncate_filter() {
        let filter = lookup("truncateAtSentence").unwrap();
        assert_eq!(filter("First. Second.", 8), "First. \u{2026}");
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup("truncate_at_sentence").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_names() {
        assert_eq!(names().collect::<Vec<_>>(), vec!["truncateAtSentence"]);
    }
}
