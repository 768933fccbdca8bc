//! Navigation state machine for the tag search box and its option list.

use serde::Serialize;

use crate::gallery::vocabulary::OptionList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListState {
    Closed,
    Open,
}

/// Keys the search input reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// What a key press asks the owning controller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// List closed, or nothing to act on.
    Ignored,
    HighlightMoved,
    Closed,
    /// Enter on a highlighted option: add this tag.
    Commit(String),
}

#[derive(Debug, Clone)]
pub struct Combobox {
    query: String,
    state: ListState,
    options: OptionList,
}

impl Default for Combobox {
    fn default() -> Self {
        Self {
            query: String::new(),
            state: ListState::Closed,
            options: OptionList::default(),
        }
    }
}

impl Combobox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_string();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn state(&self) -> ListState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ListState::Open
    }

    pub fn options(&self) -> &OptionList {
        &self.options
    }

    /// Re-derives the option list from `vocabulary` using the current query.
    pub fn refilter(&mut self, vocabulary: &[String]) {
        self.options = OptionList::filter(vocabulary, &self.query);
    }

    pub fn open(&mut self) {
        self.state = ListState::Open;
    }

    /// Closing always drops the highlight.
    pub fn close(&mut self) {
        self.state = ListState::Closed;
        self.options.clear_highlight();
    }

    pub fn handle_key(&mut self, key: NavKey) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }

        match key {
            NavKey::ArrowDown | NavKey::ArrowUp if self.options.is_empty() => KeyOutcome::Ignored,
            NavKey::ArrowDown => {
                self.options.move_down();
                KeyOutcome::HighlightMoved
            }
            NavKey::ArrowUp => {
                self.options.move_up();
                KeyOutcome::HighlightMoved
            }
            NavKey::Enter => match self.options.highlighted() {
                Some(option) => KeyOutcome::Commit(option.tag.clone()),
                None => KeyOutcome::Ignored,
            },
            NavKey::Escape => {
                self.close();
                KeyOutcome::Closed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    fn open_box(tags: &[&str]) -> Combobox {
        let mut combo = Combobox::new();
        combo.refilter(&vocab(tags));
        combo.open();
        combo
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut combo = Combobox::new();
        combo.refilter(&vocab(&["gis"]));
        assert_eq!(combo.handle_key(NavKey::Enter), KeyOutcome::Ignored);
        assert_eq!(combo.handle_key(NavKey::ArrowDown), KeyOutcome::Ignored);
        assert_eq!(combo.options().active_index(), Some(0), "closed box is untouched");
    }

    #[test]
    fn test_escape_closes_and_drops_highlight() {
        let mut combo = open_box(&["css", "gis"]);
        assert_eq!(combo.handle_key(NavKey::Escape), KeyOutcome::Closed);
        assert_eq!(combo.state(), ListState::Closed);
        assert_eq!(combo.options().active_index(), None);
    }

    #[test]
    fn test_enter_commits_highlighted_option() {
        let mut combo = open_box(&["css", "gis"]);
        combo.handle_key(NavKey::ArrowDown);
        assert_eq!(
            combo.handle_key(NavKey::Enter),
            KeyOutcome::Commit("gis".to_string())
        );
    }

    #[test]
    fn test_enter_without_options_is_ignored() {
        let mut combo = Combobox::new();
        combo.set_query("zzz");
        combo.refilter(&vocab(&["gis"]));
        combo.open();
        assert_eq!(combo.handle_key(NavKey::Enter), KeyOutcome::Ignored);
        assert_eq!(combo.handle_key(NavKey::ArrowDown), KeyOutcome::Ignored);
    }

    #[test]
    fn test_refilter_uses_current_query() {
        let mut combo = Combobox::new();
        combo.set_query("ht");
        combo.refilter(&vocab(&["gis", "html"]));
        assert_eq!(combo.options().len(), 1);
        combo.clear_query();
        combo.refilter(&vocab(&["gis", "html"]));
        assert_eq!(combo.options().len(), 2);
    }
}
