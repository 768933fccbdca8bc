//! Card Visibility Engine.
//!
//! A card is visible iff every active tag is one of its tags; an empty active set shows
//! every card. Recomputing with unchanged inputs yields unchanged flags.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::gallery::cards::Card;

/// The tags a card must carry to stay visible. Insertion order is kept for chip display
/// only; matching ignores it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveTagSet {
    tags: Vec<String>,
}

impl ActiveTagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the tag was already active.
    pub fn insert(&mut self, tag: &str) -> bool {
        if self.contains(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Returns `false` when the tag was not active.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Active tags in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn is_subset_of(&self, tags: &BTreeSet<String>) -> bool {
        self.tags.iter().all(|t| tags.contains(t))
    }
}

pub fn card_matches(active: &ActiveTagSet, card: &Card) -> bool {
    active.is_subset_of(card.tags())
}

/// A visibility flag per card, parallel to the card collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityFlags {
    visible: Vec<bool>,
}

/// One card whose visibility flipped during a recompute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardVisibility {
    pub id: String,
    pub visible: bool,
}

impl VisibilityFlags {
    /// Every card visible.
    pub fn all_visible(count: usize) -> Self {
        VisibilityFlags {
            visible: vec![true; count],
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Indices of visible cards, in collection order.
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.visible
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(|(i, _)| i)
    }

    /// Cards whose flag differs between `previous` and `self`.
    pub fn changes_since(&self, previous: &VisibilityFlags, cards: &[Card]) -> Vec<CardVisibility> {
        cards
            .iter()
            .enumerate()
            .filter(|(i, _)| previous.visible.get(*i).copied() != Some(self.is_visible(*i)))
            .map(|(i, card)| CardVisibility {
                id: card.id().to_string(),
                visible: self.is_visible(i),
            })
            .collect()
    }
}

/// Applies the active tag set to every card.
pub fn recompute(active: &ActiveTagSet, cards: &[Card]) -> VisibilityFlags {
    VisibilityFlags {
        visible: cards.iter().map(|card| card_matches(active, card)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::cards::CardFactory;
    use crate::models::content::ContentRecord;

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

    fn active(tags: &[&str]) -> ActiveTagSet {
        let mut set = ActiveTagSet::new();
        for tag in tags {
            set.insert(tag);
        }
        set
    }

    #[test]
    fn test_empty_active_set_shows_all_cards() {
        let cards = cards(&[("a", &["gis"]), ("b", &[])]);
        let flags = recompute(&ActiveTagSet::new(), &cards);
        assert_eq!(flags, VisibilityFlags::all_visible(2));
    }

    #[test]
    fn test_visible_iff_active_is_subset_of_card_tags() {
        let cards = cards(&[("a", &["gis", "html"]), ("b", &["gis"]), ("c", &["css"])]);
        let sets: [&[&str]; 4] = [&["gis"], &["gis", "html"], &["css"], &["sql"]];

        for tags in sets {
            let set = active(tags);
            let flags = recompute(&set, &cards);
            for (i, card) in cards.iter().enumerate() {
                let expected = tags.iter().all(|t| card.tags().contains(*t));
                assert_eq!(
                    flags.is_visible(i),
                    expected,
                    "card {} with active {:?}",
                    card.id(),
                    tags
                );
            }
        }
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let cards = cards(&[("a", &["gis", "html"]), ("b", &["gis"])]);
        let set = active(&["html"]);
        let first = recompute(&set, &cards);
        let second = recompute(&set, &cards);
        assert_eq!(first, second);
        assert!(second.changes_since(&first, &cards).is_empty());
    }

    #[test]
    fn test_changes_since_reports_only_flipped_cards() {
        let cards = cards(&[("a", &["gis", "html"]), ("b", &["gis"])]);
        let before = recompute(&active(&["gis"]), &cards);
        let after = recompute(&active(&["gis", "html"]), &cards);
        assert_eq!(
            after.changes_since(&before, &cards),
            vec![CardVisibility {
                id: "b".to_string(),
                visible: false
            }]
        );
    }

    #[test]
    fn test_active_set_keeps_insertion_order() {
        let mut set = active(&["html", "gis"]);
        assert!(!set.insert("html"), "duplicate insert is rejected");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["html", "gis"]);
        assert!(set.remove("html"));
        assert!(!set.remove("html"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_visible_indices_skip_hidden_cards() {
        let cards = cards(&[("a", &["gis"]), ("b", &[]), ("c", &["gis"])]);
        let flags = recompute(&active(&["gis"]), &cards);
        assert_eq!(flags.visible_indices().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(flags.visible_count(), 2);
        assert!(!flags.is_visible(10), "out-of-range index is never visible");
    }
}
