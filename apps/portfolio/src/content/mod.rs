//! Content loading — the one asynchronous boundary in front of the portfolio core.
//!
//! A source is fetched exactly once per page load. There is no retry; a failure is
//! reported to the caller, which mounts the page inert.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::models::content::ProjectsDocument;

pub mod file;
pub mod http;

pub use file::FileContentSource;
pub use http::HttpContentSource;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Content request failed with status {status}")]
    Status { status: u16 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Malformed content: {0}")]
    Malformed(String),
}

/// Where the projects document comes from.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Returns the raw JSON body.
    async fn fetch(&self) -> Result<String, ContentError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Fetches and parses the projects document.
pub async fn load_document(source: &dyn ContentSource) -> Result<ProjectsDocument, ContentError> {
    debug!("Loading projects content from {}", source.describe());
    let body = source.fetch().await?;
    parse_document(&body)
}

/// Parses a projects payload. Only a non-JSON body or a non-object top level fails;
/// field-level problems fall back to defaults.
pub fn parse_document(body: &str) -> Result<ProjectsDocument, ContentError> {
    let value: Value = serde_json::from_str(body)?;
    ProjectsDocument::from_value(&value)
        .ok_or_else(|| ContentError::Malformed("top-level value is not an object".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticSource(&'static str);

    #[async_trait]
    impl ContentSource for StaticSource {
        async fn fetch(&self) -> Result<String, ContentError> {
            Ok(self.0.to_string())
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(matches!(parse_document("<html>"), Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_non_object_root() {
        assert!(matches!(parse_document("[]"), Err(ContentError::Malformed(_))));
    }

    #[test]
    fn test_parse_accepts_empty_object() {
        let doc = parse_document("{}").expect("empty object is a valid document");
        assert!(doc.projects.is_empty());
    }

    #[tokio::test]
    async fn test_load_document_parses_source_body() {
        let source = StaticSource(r#"{"projects":[{"id":"a","tags":["gis"]}]}"#);
        let doc = load_document(&source).await.expect("valid payload");
        assert_eq!(doc.projects.len(), 1);
        assert_eq!(doc.projects[0].id, "a");
    }
}
