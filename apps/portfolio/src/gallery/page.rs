//! Mounting: wires the controller up once the content fetch has resolved.

use tracing::{error, info, warn};

use crate::content::ContentError;
use crate::gallery::cards::{CardFactory, CardTemplate};
use crate::gallery::controller::PortfolioController;
use crate::gallery::selection::{PanelContent, SelectionPanel, DEFAULT_PANEL_TITLE};
use crate::models::content::ProjectsDocument;

/// Which render targets exist on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTargets {
    pub card_container: bool,
    pub card_template: bool,
    pub tag_search: bool,
    pub tag_options: bool,
    pub active_tags: bool,
    pub clear_button: bool,
    pub panel_title: bool,
    pub panel_body: bool,
}

impl RenderTargets {
    pub fn all() -> Self {
        RenderTargets {
            card_container: true,
            card_template: true,
            tag_search: true,
            tag_options: true,
            active_tags: true,
            clear_button: true,
            panel_title: true,
            panel_body: true,
        }
    }

    fn filter_ready(&self) -> bool {
        self.tag_search && self.tag_options && self.active_tags && self.clear_button
    }

    fn panel_ready(&self) -> bool {
        self.panel_title && self.panel_body
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayPrefs {
    pub reduced_motion: bool,
}

/// Builds the page controller from the result of the one content fetch.
///
/// A failed fetch (or a page without a card container) yields an inert controller.
/// Missing filter or panel targets disable just that component.
pub fn mount(
    loaded: Result<ProjectsDocument, ContentError>,
    targets: RenderTargets,
    prefs: DisplayPrefs,
) -> PortfolioController {
    if !targets.card_container {
        error!("Card container missing; portfolio not initialized");
        return PortfolioController::inert();
    }

    let document = match loaded {
        Ok(document) => document,
        Err(e) => {
            error!("Failed to load projects content: {e}");
            return PortfolioController::inert();
        }
    };

    let template = targets.card_template.then(CardTemplate::default);
    let cards = CardFactory::new(template).build_all(&document.projects);

    let filter_enabled = targets.filter_ready();
    if !filter_enabled {
        warn!("Tag filter targets missing; filtering disabled");
    }

    let panel = if targets.panel_ready() {
        let title = document
            .page
            .info_title
            .as_deref()
            .unwrap_or(DEFAULT_PANEL_TITLE);
        let message = document.page.empty_message.as_deref().unwrap_or_default();

        let mut panel = SelectionPanel::new(
            PanelContent::message(title, message),
            prefs.reduced_motion,
        );
        panel.capture_snapshot();
        Some(panel)
    } else {
        warn!("Project info panel targets missing; selection disabled");
        None
    };

    let card_count = cards.len();
    let mut controller = PortfolioController::new(cards, filter_enabled, panel, document.page);
    controller.refresh();

    info!(
        cards = card_count,
        filter = controller.has_filter(),
        panel = controller.has_panel(),
        "Portfolio mounted"
    );
    controller
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::selection::PanelBody;
    use crate::models::content::{ContentRecord, PageText};

    fn document() -> ProjectsDocument {
        ProjectsDocument {
            page: PageText {
                info_title: Some("About this project".to_string()),
                empty_message: Some("Pick a card".to_string()),
                ..Default::default()
            },
            projects: vec![
                ContentRecord {
                    id: "a".to_string(),
                    title: "A".to_string(),
                    tags: vec!["gis".to_string(), "html".to_string()],
                    image: "img/a.png".to_string(),
                    ..Default::default()
                },
                ContentRecord {
                    id: "b".to_string(),
                    title: "B".to_string(),
                    tags: vec!["gis".to_string()],
                    ..Default::default()
                },
            ],
        }
    }

    #[test]
    fn test_mount_applies_page_text_to_snapshot() {
        let mut c = mount(Ok(document()), RenderTargets::all(), DisplayPrefs::default());
        let expected = PanelContent::message("About this project", "Pick a card");
        assert_eq!(c.panel_content(), Some(&expected));

        c.select_card("a");
        c.select_card("a");
        assert_eq!(c.panel_content(), Some(&expected), "toggle-off restores page text");
    }

    #[test]
    fn test_mount_starts_closed_with_full_vocabulary() {
        let c = mount(Ok(document()), RenderTargets::all(), DisplayPrefs::default());
        assert!(!c.is_list_open());
        assert_eq!(c.vocabulary(), &["gis".to_string(), "html".to_string()]);
        assert_eq!(c.visible_ids(), vec!["a", "b"]);
    }

    #[test]
    fn test_failed_load_is_inert() {
        let loaded = Err(ContentError::Malformed("top-level value is not an object".into()));
        let mut c = mount(loaded, RenderTargets::all(), DisplayPrefs::default());
        assert!(c.is_inert());
        assert!(!c.add_tag("gis"));
    }

    #[test]
    fn test_missing_container_is_inert() {
        let targets = RenderTargets {
            card_container: false,
            ..RenderTargets::all()
        };
        let c = mount(Ok(document()), targets, DisplayPrefs::default());
        assert!(c.is_inert());
    }

    #[test]
    fn test_missing_container_with_failed_load_is_inert() {
        let targets = RenderTargets {
            card_container: false,
            ..RenderTargets::all()
        };
        let loaded = Err(ContentError::Status { status: 500 });
        let c = mount(loaded, targets, DisplayPrefs::default());
        assert!(c.is_inert());
        assert!(c.panel_content().is_none());
    }

    #[test]
    fn test_missing_panel_keeps_filter_working() {
        let targets = RenderTargets {
            panel_body: false,
            ..RenderTargets::all()
        };
        let mut c = mount(Ok(document()), targets, DisplayPrefs::default());
        assert!(!c.has_panel());
        assert!(c.add_tag("html"));
        assert_eq!(c.visible_ids(), vec!["a"]);
        assert!(!c.select_card("a"));
    }

    #[test]
    fn test_missing_filter_keeps_selection_working() {
        let targets = RenderTargets {
            clear_button: false,
            ..RenderTargets::all()
        };
        let mut c = mount(Ok(document()), targets, DisplayPrefs::default());
        assert!(!c.has_filter());
        assert!(c.select_card("b"));
        assert!(c.is_selected("b"));
    }

    #[test]
    fn test_missing_template_uses_bare_cards() {
        let targets = RenderTargets {
            card_template: false,
            ..RenderTargets::all()
        };
        let mut c = mount(Ok(document()), targets, DisplayPrefs::default());
        assert!(c.cards()[0].image().is_none());

        c.select_card("a");
        match c.panel_content().map(|p| &p.body) {
            Some(PanelBody::Detail { image, .. }) => assert!(image.is_none()),
            other => panic!("expected detail body, got {other:?}"),
        }
    }
}
