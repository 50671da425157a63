pub mod document_source;
pub mod error;
pub mod front_matter;
pub mod loader;
pub mod markdown_renderer;

/// One blog post as loaded from its source document.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    pub slug: String,
    pub title: String,
    pub subhead: Option<String>,
    pub raw_date: Option<String>,
    pub year: Option<i32>,
    pub formatted_date: Option<String>,
    pub content: String,
}

impl PostRecord {
    /// Sort key for the collection. Undated posts compare as the empty string.
    pub fn date_key(&self) -> &str {
        self.raw_date.as_deref().unwrap_or("")
    }

    pub fn link(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}
