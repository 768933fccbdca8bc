//! Portfolio controller — the single owner of page-scoped filter and selection state.
//!
//! Every mutation runs the recompute chain to completion before returning:
//! visibility → vocabulary → options → notifications. Renderers subscribe through
//! [`PortfolioObserver`] and redraw only what an event names.

use serde::Serialize;
use tracing::debug;

use crate::gallery::cards::Card;
use crate::gallery::combobox::{Combobox, KeyOutcome, NavKey};
use crate::gallery::labels::format_tag_label;
use crate::gallery::selection::{PanelContent, ScrollBehavior, SelectionChange, SelectionPanel};
use crate::gallery::visibility::{self, ActiveTagSet, CardVisibility, VisibilityFlags};
use crate::gallery::vocabulary::{compute_available, OptionList};
use crate::models::content::PageText;

/// A removable token for one active tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub tag: String,
    pub label: String,
}

impl Chip {
    fn new(tag: &str) -> Self {
        Chip {
            tag: tag.to_string(),
            label: format_tag_label(tag),
        }
    }

    pub fn text(&self) -> String {
        format!("{} ✕", self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PortfolioEvent {
    /// Only the cards whose flag flipped.
    VisibilityChanged { changes: Vec<CardVisibility> },
    SelectionChanged {
        deselected: Option<String>,
        selected: Option<String>,
        panel: PanelContent,
        scroll: Option<ScrollBehavior>,
    },
    ActiveTagsChanged { chips: Vec<Chip> },
    OptionListChanged { options: OptionList, open: bool },
}

/// Receives change notifications, in chain order, synchronously.
pub trait PortfolioObserver {
    fn notify(&mut self, event: &PortfolioEvent);
}

impl<F: FnMut(&PortfolioEvent)> PortfolioObserver for F {
    fn notify(&mut self, event: &PortfolioEvent) {
        self(event)
    }
}

/// How a card was activated on the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardActivation {
    Click,
    /// Click landed on a link inside the card; selection is left alone.
    LinkClick,
    Enter,
    Space,
}

/// Where a pointer press landed, relative to the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    Input,
    TagOption(String),
    Elsewhere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListIntent {
    Keep,
    Open,
    Close,
}

/// Tag filter component: active set, derived vocabulary, and the search box.
#[derive(Debug, Clone, Default)]
struct TagFilter {
    active: ActiveTagSet,
    vocabulary: Vec<String>,
    combobox: Combobox,
}

pub struct PortfolioController {
    cards: Vec<Card>,
    visibility: VisibilityFlags,
    filter: Option<TagFilter>,
    panel: Option<SelectionPanel>,
    page: PageText,
    observers: Vec<Box<dyn PortfolioObserver>>,
}

impl PortfolioController {
    /// `filter_enabled = false` or `panel = None` leaves that component uninitialized;
    /// its operations become no-ops.
    pub fn new(
        cards: Vec<Card>,
        filter_enabled: bool,
        panel: Option<SelectionPanel>,
        page: PageText,
    ) -> Self {
        let visibility = VisibilityFlags::all_visible(cards.len());
        Self {
            cards,
            visibility,
            filter: filter_enabled.then(TagFilter::default),
            panel,
            page,
            observers: Vec::new(),
        }
    }

    /// A controller with no content and no components.
    pub fn inert() -> Self {
        Self::new(Vec::new(), false, None, PageText::default())
    }

    pub fn is_inert(&self) -> bool {
        self.cards.is_empty() && self.filter.is_none() && self.panel.is_none()
    }

    pub fn subscribe(&mut self, observer: impl PortfolioObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // ── Read access ────────────────────────────────────────────────────────

    pub fn page_text(&self) -> &PageText {
        &self.page
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    pub fn has_panel(&self) -> bool {
        self.panel.is_some()
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.index_of(id)
            .map(|i| self.visibility.is_visible(i))
            .unwrap_or(false)
    }

    pub fn visible_ids(&self) -> Vec<&str> {
        self.visibility
            .visible_indices()
            .filter_map(|i| self.cards.get(i))
            .map(Card::id)
            .collect()
    }

    /// Active tags in chip order.
    pub fn active_tags(&self) -> Vec<&str> {
        self.filter
            .as_ref()
            .map(|f| f.active.iter().collect())
            .unwrap_or_default()
    }

    pub fn chips(&self) -> Vec<Chip> {
        self.active_tags().into_iter().map(Chip::new).collect()
    }

    pub fn vocabulary(&self) -> &[String] {
        self.filter
            .as_ref()
            .map(|f| f.vocabulary.as_slice())
            .unwrap_or(&[])
    }

    pub fn options(&self) -> Option<&OptionList> {
        self.filter.as_ref().map(|f| f.combobox.options())
    }

    pub fn query(&self) -> &str {
        self.filter
            .as_ref()
            .map(|f| f.combobox.query())
            .unwrap_or("")
    }

    pub fn is_list_open(&self) -> bool {
        self.filter
            .as_ref()
            .map(|f| f.combobox.is_open())
            .unwrap_or(false)
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.panel
            .as_ref()
            .and_then(SelectionPanel::selected)
            .and_then(|i| self.cards.get(i))
    }

    /// A card's `selected` flag. Its `expanded` flag always has the same value.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_card().map(|c| c.id() == id).unwrap_or(false)
    }

    pub fn panel_content(&self) -> Option<&PanelContent> {
        self.panel.as_ref().map(SelectionPanel::content)
    }

    // ── Tag mutations ──────────────────────────────────────────────────────

    /// Adds a tag to the active set, clears the query, and opens the option list.
    /// Empty, already active, or unknown tags are ignored.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() || !self.is_known_tag(&tag) {
            return false;
        }
        let Some(filter) = self.filter.as_mut() else {
            return false;
        };
        if !filter.active.insert(&tag) {
            return false;
        }
        filter.combobox.clear_query();

        debug!(tag = %tag, active = filter.active.len(), "tag added");
        self.run_recompute_chain(ListIntent::Open);
        true
    }

    /// Removes an active tag. Leaves the query and the list's open state alone.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();
        let Some(filter) = self.filter.as_mut() else {
            return false;
        };
        if !filter.active.remove(&tag) {
            return false;
        }

        debug!(tag = %tag, active = filter.active.len(), "tag removed");
        self.run_recompute_chain(ListIntent::Keep);
        true
    }

    /// Empties the active set and the query, then closes the option list.
    pub fn clear_all(&mut self) -> bool {
        let Some(filter) = self.filter.as_mut() else {
            return false;
        };
        filter.active.clear();
        filter.combobox.clear_query();

        debug!("active tags cleared");
        self.run_recompute_chain(ListIntent::Close);
        true
    }

    /// Runs the chain without changing anything. Used once after mounting.
    pub fn refresh(&mut self) {
        self.run_recompute_chain(ListIntent::Keep);
    }

    // ── Search box events ──────────────────────────────────────────────────

    pub fn focus_input(&mut self) {
        self.reopen_options();
    }

    pub fn input_changed(&mut self, text: &str) {
        let Some(filter) = self.filter.as_mut() else {
            return;
        };
        filter.combobox.set_query(text);
        self.reopen_options();
    }

    pub fn press_key(&mut self, key: NavKey) -> KeyOutcome {
        let Some(filter) = self.filter.as_mut() else {
            return KeyOutcome::Ignored;
        };

        let outcome = filter.combobox.handle_key(key);
        match &outcome {
            KeyOutcome::HighlightMoved | KeyOutcome::Closed => self.emit_options(),
            KeyOutcome::Commit(tag) => {
                let tag = tag.clone();
                self.add_tag(&tag);
            }
            KeyOutcome::Ignored => {}
        }
        outcome
    }

    pub fn pointer_down(&mut self, target: PointerTarget) {
        match target {
            PointerTarget::TagOption(tag) => {
                let offered = self.filter.as_ref().is_some_and(|f| {
                    f.combobox.is_open()
                        && f.combobox.options().options().iter().any(|o| o.tag == tag)
                });
                if offered {
                    self.add_tag(&tag);
                }
            }
            PointerTarget::Elsewhere => {
                let Some(filter) = self.filter.as_mut() else {
                    return;
                };
                if filter.combobox.is_open() {
                    filter.combobox.close();
                    self.emit_options();
                }
            }
            PointerTarget::Input => {}
        }
    }

    // ── Selection ──────────────────────────────────────────────────────────

    /// Selects the card with `id`, or toggles it off when it is already selected.
    /// Unknown and hidden cards are ignored.
    pub fn select_card(&mut self, id: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if !self.visibility.is_visible(index) {
            return false;
        }
        let Some(panel) = self.panel.as_mut() else {
            return false;
        };

        let change = panel.activate(index, &self.cards[index]);
        let panel_content = panel.content().clone();

        let event = match change {
            SelectionChange::Selected {
                previous,
                current,
                scroll,
            } => {
                debug!(card = %self.cards[current].id(), "card selected");
                PortfolioEvent::SelectionChanged {
                    deselected: previous.map(|i| self.cards[i].id().to_string()),
                    selected: Some(self.cards[current].id().to_string()),
                    panel: panel_content,
                    scroll: Some(scroll),
                }
            }
            SelectionChange::ToggledOff { previous } => {
                debug!(card = %self.cards[previous].id(), "card deselected");
                PortfolioEvent::SelectionChanged {
                    deselected: Some(self.cards[previous].id().to_string()),
                    selected: None,
                    panel: panel_content,
                    scroll: None,
                }
            }
        };
        self.emit(event);
        true
    }

    pub fn activate_card(&mut self, id: &str, activation: CardActivation) -> bool {
        match activation {
            CardActivation::LinkClick => false,
            CardActivation::Click | CardActivation::Enter | CardActivation::Space => {
                self.select_card(id)
            }
        }
    }

    // ── Internals ──────────────────────────────────────────────────────────

    fn index_of(&self, id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }

    fn is_known_tag(&self, tag: &str) -> bool {
        self.cards.iter().any(|c| c.tags().contains(tag))
    }

    fn run_recompute_chain(&mut self, list: ListIntent) {
        self.apply_visibility();

        if self.filter.is_some() {
            let chips = self.chips();
            self.emit(PortfolioEvent::ActiveTagsChanged { chips });
        }

        self.recompute_vocabulary();

        if let Some(filter) = self.filter.as_mut() {
            filter.combobox.refilter(&filter.vocabulary);
            match list {
                ListIntent::Open => filter.combobox.open(),
                ListIntent::Close => filter.combobox.close(),
                ListIntent::Keep => {}
            }
        }
        self.emit_options();
    }

    fn apply_visibility(&mut self) {
        let next = match &self.filter {
            Some(filter) => visibility::recompute(&filter.active, &self.cards),
            None => VisibilityFlags::all_visible(self.cards.len()),
        };
        let changes = next.changes_since(&self.visibility, &self.cards);
        self.visibility = next;

        if !changes.is_empty() {
            self.emit(PortfolioEvent::VisibilityChanged { changes });
        }

        let hidden_selection = self
            .panel
            .as_ref()
            .and_then(SelectionPanel::selected)
            .filter(|i| !self.visibility.is_visible(*i));

        if let Some(index) = hidden_selection {
            let Some(panel) = self.panel.as_mut() else {
                return;
            };
            panel.invalidate();
            let panel_content = panel.content().clone();

            debug!(card = %self.cards[index].id(), "selected card hidden by filter");
            self.emit(PortfolioEvent::SelectionChanged {
                deselected: Some(self.cards[index].id().to_string()),
                selected: None,
                panel: panel_content,
                scroll: None,
            });
        }
    }

    fn recompute_vocabulary(&mut self) {
        if let Some(filter) = self.filter.as_mut() {
            filter.vocabulary = compute_available(&filter.active, &self.cards, &self.visibility);
        }
    }

    fn reopen_options(&mut self) {
        self.recompute_vocabulary();
        let Some(filter) = self.filter.as_mut() else {
            return;
        };
        filter.combobox.refilter(&filter.vocabulary);
        filter.combobox.open();
        self.emit_options();
    }

    fn emit_options(&mut self) {
        let Some(filter) = self.filter.as_ref() else {
            return;
        };
        let event = PortfolioEvent::OptionListChanged {
            options: filter.combobox.options().clone(),
            open: filter.combobox.is_open(),
        };
        self.emit(event);
    }

    fn emit(&mut self, event: PortfolioEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}
