//! Selection Panel — at most one selected card, shown as a copy in the detail panel.
//!
//! The panel never owns a card. It remembers the selected card's position in the
//! collection and renders a deep copy of its title, image, and detail block.

use serde::Serialize;

use crate::gallery::cards::{Card, DetailBlock, ImageDescriptor};

pub const DEFAULT_PANEL_TITLE: &str = "Project Info";
const UNTITLED_CARD: &str = "Project";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelBody {
    /// Initial copy shown while nothing is selected.
    Message { text: String },
    Detail {
        image: Option<ImageDescriptor>,
        detail: DetailBlock,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelContent {
    pub title: String,
    pub body: PanelBody,
}

impl PanelContent {
    pub fn message(title: &str, text: &str) -> Self {
        PanelContent {
            title: title.to_string(),
            body: PanelBody::Message {
                text: text.to_string(),
            },
        }
    }

    fn for_card(card: &Card) -> Self {
        let title = match card.title().trim() {
            "" => UNTITLED_CARD.to_string(),
            t => t.to_string(),
        };
        let detail = if card.detail().is_empty() {
            DetailBlock::coming_soon()
        } else {
            card.detail().clone()
        };

        PanelContent {
            title,
            body: PanelBody::Detail {
                image: card.image().cloned(),
                detail,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

/// Result of a card activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Selected {
        previous: Option<usize>,
        current: usize,
        scroll: ScrollBehavior,
    },
    /// The selected card was activated again.
    ToggledOff { previous: usize },
}

#[derive(Debug, Clone)]
pub struct SelectionPanel {
    selected: Option<usize>,
    content: PanelContent,
    snapshot: Option<PanelContent>,
    reduced_motion: bool,
}

impl SelectionPanel {
    pub fn new(initial: PanelContent, reduced_motion: bool) -> Self {
        Self {
            selected: None,
            content: initial,
            snapshot: None,
            reduced_motion,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn content(&self) -> &PanelContent {
        &self.content
    }

    /// Replaces what the panel currently shows without touching the selection. Used
    /// while the page text is being applied, before the snapshot exists.
    pub fn set_content(&mut self, content: PanelContent) {
        self.content = content;
    }

    /// Records the current content as the restore point. Only the first call counts.
    pub fn capture_snapshot(&mut self) {
        if self.snapshot.is_none() {
            self.snapshot = Some(self.content.clone());
        }
    }

    /// Activates the card at `index`: toggles off when it is already selected, otherwise
    /// selects it and rebuilds the panel from a copy of the card.
    pub fn activate(&mut self, index: usize, card: &Card) -> SelectionChange {
        if self.selected == Some(index) {
            self.reset();
            return SelectionChange::ToggledOff { previous: index };
        }

        let previous = self.selected.replace(index);
        self.content = PanelContent::for_card(card);

        let scroll = if self.reduced_motion {
            ScrollBehavior::Instant
        } else {
            ScrollBehavior::Smooth
        };

        SelectionChange::Selected {
            previous,
            current: index,
            scroll,
        }
    }

    /// Drops the selection outright. Returns the index that was selected, if any.
    pub fn invalidate(&mut self) -> Option<usize> {
        let previous = self.selected?;
        self.reset();
        Some(previous)
    }

    fn reset(&mut self) {
        self.selected = None;
        if let Some(snapshot) = &self.snapshot {
            self.content = snapshot.clone();
        }
    }
}
