//! Article container handed between pipeline stages.
//!
//! The cleaner only touches `doc`. Metadata travels with it for the
//! downstream scorer and is never read here.

use crate::dom::{self, Document};

/// Metadata carried alongside the document.
///
/// All fields are optional; they are filled by other pipeline stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Page title.
    pub title: Option<String>,

    /// Original URL of the document.
    pub url: Option<String>,

    /// Site name (e.g., "New York Times").
    pub sitename: Option<String>,

    /// Content language (ISO 639-1 code).
    pub language: Option<String>,
}

/// A parsed page plus its metadata.
#[derive(Default)]
pub struct Article {
    /// Parsed document. `None` until a parser stage has run.
    pub doc: Option<Document>,

    pub metadata: Metadata,
}

impl Article {
    /// Empty article with no document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `html` and wrap it in an article.
    #[must_use]
    pub fn from_html(html: &str) -> Self {
        Self {
            doc: Some(dom::parse(html)),
            metadata: Metadata::default(),
        }
    }

    pub fn set_doc(&mut self, doc: Document) {
        self.doc = Some(doc);
    }

    #[must_use]
    pub fn doc(&self) -> Option<&Document> {
        self.doc.as_ref()
    }
}

impl std::fmt::Debug for Article {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Article")
            .field("has_doc", &self.doc.is_some())
            .field("metadata", &self.metadata)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_article_has_no_document() {
        let article = Article::new();
        assert!(article.doc().is_none());
        assert_eq!(article.metadata, Metadata::default());
    }

    #[test]
    fn from_html_parses_document() {
        let article = Article::from_html("<p>hello</p>");
        let doc = article.doc().unwrap();
        assert_eq!(doc.select("p").text().to_string(), "hello");
    }
}
