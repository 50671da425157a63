use std::collections::HashSet;
use std::io;
use std::path::Path;

use spdlog::{info, warn};

use crate::content::PostRecord;
use crate::content::document_source::{DocumentSource, RawDocument};
use crate::content::error::LoadError;
use crate::content::front_matter::parse_front_matter;
use crate::text_utils::derive_date_fields;

/// Outcome of one load: the posts that made it, in discovery order, and
/// every document that was left out.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub posts: Vec<PostRecord>,
    pub errors: Vec<LoadError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

pub struct ContentLoader {}

impl ContentLoader {
    /// Parses every document of `source`. Only a failure to enumerate the
    /// source is an error; bad documents are reported and skipped.
    pub fn load(source: &dyn DocumentSource) -> io::Result<LoadReport> {
        let documents = source.documents()?;
        let mut report = LoadReport::default();
        let mut seen_slugs = HashSet::new();

        for doc in documents.iter() {
            let doc = match doc {
                Ok(doc) => doc,
                Err(e) => {
                    warn!("Skipping post: {}", e);
                    report.errors.push(e.clone());
                    continue;
                }
            };
            let post = match Self::parse_document(doc) {
                Ok(post) => post,
                Err(e) => {
                    warn!("Skipping post: {}", e);
                    report.errors.push(e);
                    continue;
                }
            };

            if !seen_slugs.insert(post.slug.clone()) {
                let e = LoadError::DuplicateSlug { slug: post.slug, id: doc.id.clone() };
                warn!("Skipping post: {}", e);
                report.errors.push(e);
                continue;
            }

            report.posts.push(post);
        }

        info!("Loaded {} posts, {} skipped", report.posts.len(), report.errors.len());
        Ok(report)
    }

    pub fn parse_document(doc: &RawDocument) -> Result<PostRecord, LoadError> {
        let slug = slug_from_id(&doc.id)
            .ok_or_else(|| LoadError::malformed(&doc.id, "Could not derive a slug from the document name"))?;

        let front_matter = parse_front_matter(&doc.raw_text)
            .map_err(|reason| LoadError::malformed(&doc.id, reason))?;

        let raw_date = front_matter.get("date")
            .filter(|d| !d.is_empty())
            .map(|d| d.to_string());
        let (year, formatted_date) = match raw_date {
            Some(ref date) => {
                let (year, formatted) = derive_date_fields(date).map_err(|_| LoadError::InvalidDate {
                    id: doc.id.clone(),
                    date: date.clone(),
                })?;
                (Some(year), Some(formatted))
            }
            None => (None, None),
        };

        let title = match front_matter.get("title") {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => slug.clone(),
        };
        let subhead = front_matter.get("subhead")
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());

        Ok(PostRecord {
            slug,
            title,
            subhead,
            raw_date,
            year,
            formatted_date,
            content: front_matter.body,
        })
    }
}

/// `posts/2024/my-post.md` becomes `my-post`.
pub fn slug_from_id(id: &str) -> Option<String> {
    let file_name = id.rsplit(|c| c == '/' || c == '\\').next()?;
    let stem = Path::new(file_name).file_stem()?.to_str()?;
    let stem = stem.trim();
    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}
