//! Tag Vocabulary & Option Filter.
//!
//! The vocabulary is every tag on a visible card that is not already active, sorted for
//! stable display. The option list narrows it by a text query and tracks the
//! keyboard-highlighted option.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::gallery::cards::Card;
use crate::gallery::labels::format_tag_label;
use crate::gallery::visibility::{ActiveTagSet, VisibilityFlags};

/// Union of tags over visible cards, minus the active set, sorted lexicographically.
pub fn compute_available(
    active: &ActiveTagSet,
    cards: &[Card],
    visibility: &VisibilityFlags,
) -> Vec<String> {
    let mut union: BTreeSet<&str> = visibility
        .visible_indices()
        .filter_map(|i| cards.get(i))
        .flat_map(|card| card.tags().iter().map(String::as_str))
        .collect();

    for tag in active.iter() {
        union.remove(tag);
    }

    union.into_iter().map(str::to_string).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagOption {
    pub tag: String,
    pub label: String,
}

impl TagOption {
    pub fn new(tag: &str) -> Self {
        TagOption {
            tag: tag.to_string(),
            label: format_tag_label(tag),
        }
    }
}

/// Placeholder text rendered when no option matches the query.
pub const NO_MATCHES_TEXT: &str = "No matching tags";

/// The filtered, ordered options plus the highlighted index (`None` = no highlight).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionList {
    options: Vec<TagOption>,
    active_index: Option<usize>,
}

impl OptionList {
    /// Narrows `vocabulary` by `query`. The query is trimmed and lower-cased; an option is
    /// kept when its token or its label contains it. Highlights the first result, if any.
    pub fn filter(vocabulary: &[String], query: &str) -> Self {
        let query = query.trim().to_lowercase();

        let options: Vec<TagOption> = vocabulary
            .iter()
            .map(|tag| TagOption::new(tag))
            .filter(|option| {
                query.is_empty()
                    || option.tag.contains(&query)
                    || option.label.to_lowercase().contains(&query)
            })
            .collect();

        let active_index = if options.is_empty() { None } else { Some(0) };
        OptionList {
            options,
            active_index,
        }
    }

    pub fn options(&self) -> &[TagOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn highlighted(&self) -> Option<&TagOption> {
        self.active_index.and_then(|i| self.options.get(i))
    }

    /// Moves the highlight one step down, clamped to the last option.
    pub fn move_down(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let last = self.options.len() - 1;
        self.active_index = Some(match self.active_index {
            Some(i) => (i + 1).min(last),
            None => 0,
        });
    }

    /// Moves the highlight one step up, clamped to the first option.
    pub fn move_up(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.active_index = Some(self.active_index.map_or(0, |i| i.saturating_sub(1)));
    }

    pub fn clear_highlight(&mut self) {
        self.active_index = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::cards::CardFactory;
    use crate::gallery::visibility::recompute;
    use crate::models::content::ContentRecord;

    fn vocab(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    fn cards(specs: &[(&str, &[&str])]) -> Vec<Card> {
        let records: Vec<_> = specs
            .iter()
            .map(|(id, tags)| ContentRecord {
                id: id.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                ..Default::default()
            })
            .collect();
        CardFactory::templated().build_all(&records)
    }

    #[test]
    fn test_available_excludes_active_and_hidden_cards() {
        let cards = cards(&[("a", &["gis", "html"]), ("b", &["gis"]), ("c", &["css"])]);
        let mut active = ActiveTagSet::new();
        active.insert("gis");
        let flags = recompute(&active, &cards);

        let available = compute_available(&active, &cards, &flags);
        assert_eq!(available, vocab(&["html"]), "css lives only on a hidden card");
    }

    #[test]
    fn test_available_is_sorted_union_when_nothing_active() {
        let cards = cards(&[("a", &["sql", "gis"]), ("b", &["css", "gis"])]);
        let active = ActiveTagSet::new();
        let flags = recompute(&active, &cards);
        assert_eq!(
            compute_available(&active, &cards, &flags),
            vocab(&["css", "gis", "sql"])
        );
    }

    #[test]
    fn test_query_matches_token_substring() {
        let list = OptionList::filter(&vocab(&["gis", "html"]), "gi");
        let tags: Vec<_> = list.options().iter().map(|o| o.tag.as_str()).collect();
        assert_eq!(tags, vec!["gis"]);
        assert_eq!(list.active_index(), Some(0));
    }

    #[test]
    fn test_query_matches_label_substring() {
        // "machine learning" only appears in the label, not the hyphenated token
        let list = OptionList::filter(&vocab(&["machine-learning", "gis"]), "  Machine L ");
        assert_eq!(list.len(), 1);
        assert_eq!(list.options()[0].label, "Machine Learning");
    }

    #[test]
    fn test_empty_query_keeps_full_vocabulary() {
        let list = OptionList::filter(&vocab(&["css", "gis"]), "   ");
        assert_eq!(list.len(), 2);
        assert_eq!(list.highlighted().map(|o| o.tag.as_str()), Some("css"));
    }

    #[test]
    fn test_no_match_resets_highlight() {
        let list = OptionList::filter(&vocab(&["css", "gis"]), "zzz");
        assert!(list.is_empty());
        assert_eq!(list.active_index(), None);
        assert!(list.highlighted().is_none());
    }

    #[test]
    fn test_highlight_moves_are_clamped() {
        let mut list = OptionList::filter(&vocab(&["a", "b", "c"]), "");
        list.move_up();
        assert_eq!(list.active_index(), Some(0), "up at top stays at 0");
        list.move_down();
        list.move_down();
        list.move_down();
        assert_eq!(list.active_index(), Some(2), "down at bottom stays at last");
        list.move_up();
        assert_eq!(list.active_index(), Some(1));
    }

    #[test]
    fn test_moves_from_no_highlight_land_on_first() {
        let mut list = OptionList::filter(&vocab(&["a", "b"]), "");
        list.clear_highlight();
        list.move_down();
        assert_eq!(list.active_index(), Some(0));
        list.clear_highlight();
        list.move_up();
        assert_eq!(list.active_index(), Some(0));
    }

    #[test]
    fn test_moves_on_empty_list_are_noops() {
        let mut list = OptionList::filter(&[], "");
        list.move_down();
        list.move_up();
        assert_eq!(list.active_index(), None);
    }
}
