use thiserror::Error;

/// Per-document failure while loading posts. None of these abort the load.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LoadError {
    #[error("Malformed document {id}: {reason}")]
    MalformedDocument { id: String, reason: String },

    #[error("Invalid date '{date}' in {id}")]
    InvalidDate { id: String, date: String },

    #[error("Duplicate slug '{slug}' from {id}, keeping the first document")]
    DuplicateSlug { slug: String, id: String },
}

impl LoadError {
    pub fn malformed(id: &str, reason: impl Into<String>) -> Self {
        LoadError::MalformedDocument { id: id.to_string(), reason: reason.into() }
    }

    pub fn document_id(&self) -> &str {
        match self {
            LoadError::MalformedDocument { id, .. } => id,
            LoadError::InvalidDate { id, .. } => id,
            LoadError::DuplicateSlug { id, .. } => id,
        }
    }
}
