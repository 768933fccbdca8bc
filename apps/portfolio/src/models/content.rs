use serde::Serialize;
use serde_json::Value;

/// Page-level copy injected into the portfolio template before the panel snapshot is taken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageText {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_button: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordLink {
    pub href: String,
    pub text: String,
}

/// One project as supplied by the content document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub tools: String,
    pub description: String,
    pub result: String,
    pub image: String,
    pub image_alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<RecordLink>,
}

/// The whole `projects.json` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectsDocument {
    pub page: PageText,
    pub projects: Vec<ContentRecord>,
}

impl ProjectsDocument {
    /// Reads a document leniently. Returns `None` only when the top level is not an object;
    /// every field below that defaults instead of failing.
    pub fn from_value(value: &Value) -> Option<Self> {
        let root = value.as_object()?;

        let page = root
            .get("page")
            .map(PageText::from_value)
            .unwrap_or_default();

        let projects = root
            .get("projects")
            .and_then(|v| v.as_array())
            .map(|items| items.iter().map(ContentRecord::from_value).collect())
            .unwrap_or_default();

        Some(ProjectsDocument { page, projects })
    }
}

impl PageText {
    pub fn from_value(value: &Value) -> Self {
        PageText {
            filter_label: opt_str(value, "filterLabel"),
            search_placeholder: opt_str(value, "searchPlaceholder"),
            clear_button: opt_str(value, "clearButton"),
            info_title: opt_str(value, "infoTitle"),
            empty_message: opt_str(value, "emptyMessage"),
        }
    }
}

impl ContentRecord {
    pub fn from_value(value: &Value) -> Self {
        let tags = value
            .get("tags")
            .and_then(|v| v.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|t| t.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        let link = value.get("link").filter(|v| v.is_object()).map(|v| RecordLink {
            href: str_or_empty(v, "href"),
            text: str_or_empty(v, "text"),
        });

        ContentRecord {
            id: str_or_empty(value, "id"),
            title: str_or_empty(value, "title"),
            summary: str_or_empty(value, "summary"),
            tags,
            tools: str_or_empty(value, "tools"),
            description: str_or_empty(value, "description"),
            result: str_or_empty(value, "result"),
            image: str_or_empty(value, "image"),
            image_alt: str_or_empty(value, "imageAlt"),
            link,
        }
    }
}

fn str_or_empty(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

// Empty strings count as absent so page defaults survive.
fn opt_str(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
