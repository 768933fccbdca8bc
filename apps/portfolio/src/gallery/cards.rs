//! Card Factory — turns content records into immutable cards with normalized tag sets.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::models::content::ContentRecord;

const DEFAULT_LINK_TEXT: &str = "Link";
const DEFAULT_IMAGE_SUBJECT: &str = "Project";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageDescriptor {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    pub href: String,
    pub text: String,
}

/// One paragraph of a card's detail block, e.g. `Tools: QGIS, Python`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailLine {
    pub label: Option<String>,
    pub text: String,
    pub link: Option<ExternalLink>,
}

/// Ordered detail paragraphs shown in the expanded panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailBlock {
    pub lines: Vec<DetailLine>,
}

impl DetailBlock {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Stand-in block for cards that carry no detail paragraphs.
    pub fn coming_soon() -> Self {
        DetailBlock {
            lines: vec![DetailLine {
                label: None,
                text: "Details coming soon…".to_string(),
                link: None,
            }],
        }
    }

    fn push_labeled(&mut self, label: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        self.lines.push(DetailLine {
            label: Some(label.to_string()),
            text: value.to_string(),
            link: None,
        });
    }
}

/// A portfolio card. Built once at load time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    id: String,
    title: String,
    summary: String,
    tags: BTreeSet<String>,
    detail: DetailBlock,
    image: Option<ImageDescriptor>,
    link: Option<ExternalLink>,
}

impl Card {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn detail(&self) -> &DetailBlock {
        &self.detail
    }

    pub fn image(&self) -> Option<&ImageDescriptor> {
        self.image.as_ref()
    }

    pub fn link(&self) -> Option<&ExternalLink> {
        self.link.as_ref()
    }
}

/// Structural template for cards. When the page provides one, cards get an image slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardTemplate {
    pub image_slot: bool,
}

impl Default for CardTemplate {
    fn default() -> Self {
        CardTemplate { image_slot: true }
    }
}

/// Builds cards from content records.
///
/// Without a template the factory falls back to a bare card: title, summary, and detail
/// are still filled in, but no image is carried.
#[derive(Debug, Clone, Default)]
pub struct CardFactory {
    template: Option<CardTemplate>,
}

impl CardFactory {
    pub fn new(template: Option<CardTemplate>) -> Self {
        Self { template }
    }

    pub fn templated() -> Self {
        Self::new(Some(CardTemplate::default()))
    }

    /// Builds every card, keeping ids distinct. A repeated id gets the first free
    /// `-N` suffix, counting from 2, so earlier cards keep the id they asked for.
    pub fn build_all(&self, records: &[ContentRecord]) -> Vec<Card> {
        let mut taken = HashSet::new();
        records
            .iter()
            .enumerate()
            .map(|(position, record)| {
                let mut card = self.build(position, record);
                card.id = claim_id(&mut taken, card.id);
                card
            })
            .collect()
    }

    /// Builds one card. `position` is the record's zero-based index, used for ids that
    /// the content omitted.
    pub fn build(&self, position: usize, record: &ContentRecord) -> Card {
        let id = match record.id.trim() {
            "" => format!("project-{}", position + 1),
            id => id.to_string(),
        };

        let link = record
            .link
            .as_ref()
            .filter(|l| !l.href.is_empty())
            .map(|l| ExternalLink {
                href: l.href.clone(),
                text: if l.text.is_empty() {
                    DEFAULT_LINK_TEXT.to_string()
                } else {
                    l.text.clone()
                },
            });

        let image = match self.template {
            Some(CardTemplate { image_slot: true }) => image_descriptor(record),
            _ => None,
        };

        Card {
            id,
            title: record.title.clone(),
            summary: record.summary.clone(),
            tags: normalize_tags(&record.tags),
            detail: detail_block(record, link.as_ref()),
            image,
            link,
        }
    }
}

fn claim_id(taken: &mut HashSet<String>, id: String) -> String {
    if taken.insert(id.clone()) {
        return id;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{id}-{n}");
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

/// Trims and lower-cases every tag. Tags are whitespace-separated tokens, so a raw tag
/// with inner spaces contributes one tag per word.
pub fn normalize_tags<S: AsRef<str>>(raw: &[S]) -> BTreeSet<String> {
    raw.iter()
        .flat_map(|tag| tag.as_ref().split_whitespace())
        .map(str::to_lowercase)
        .collect()
}

fn image_descriptor(record: &ContentRecord) -> Option<ImageDescriptor> {
    if record.image.is_empty() {
        return None;
    }

    let alt = if record.image_alt.is_empty() {
        let subject = if record.title.is_empty() {
            DEFAULT_IMAGE_SUBJECT
        } else {
            record.title.as_str()
        };
        format!("{subject} Screenshot")
    } else {
        record.image_alt.clone()
    };

    Some(ImageDescriptor {
        src: record.image.clone(),
        alt,
    })
}

fn detail_block(record: &ContentRecord, link: Option<&ExternalLink>) -> DetailBlock {
    let mut block = DetailBlock::default();
    block.push_labeled("Tools:", &record.tools);
    block.push_labeled("Description:", &record.description);

    if !record.result.is_empty() || link.is_some() {
        block.lines.push(DetailLine {
            label: Some("Result:".to_string()),
            text: record.result.clone(),
            link: link.cloned(),
        });
    }

    block
}
