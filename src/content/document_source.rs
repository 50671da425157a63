use std::path::{Path, PathBuf};
use std::{fs, io};

use crate::content::error::LoadError;

/// A source document before parsing. `id` is path-like (usually the file name).
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub id: String,
    pub raw_text: String,
}

impl RawDocument {
    pub fn new(id: &str, raw_text: &str) -> Self {
        RawDocument { id: id.to_string(), raw_text: raw_text.to_string() }
    }
}

/// Anything that can hand the loader its post documents, in discovery order.
/// The outer error means the source could not be listed at all; a document
/// that cannot be read is reported in its own slot.
pub trait DocumentSource {
    fn documents(&self) -> io::Result<Vec<Result<RawDocument, LoadError>>>;
}

/// Markdown files directly inside `root_dir`. Sub-directories are ignored.
pub struct DirectorySource {
    pub root_dir: PathBuf,
}

impl DirectorySource {
    pub fn new(root_dir: PathBuf) -> Self {
        DirectorySource { root_dir }
    }

    fn retrieve_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut posts = vec![];
        let entries = fs::read_dir(self.root_dir.as_path())?;
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("md") {
                posts.push(path);
            }
        }
        // read_dir order is platform dependent
        posts.sort();
        Ok(posts)
    }
}

fn read_document(id: String, path: &Path) -> Result<RawDocument, LoadError> {
    let bytes = fs::read(path)
        .map_err(|e| LoadError::malformed(&id, format!("Unable to read file: {}", e)))?;
    match String::from_utf8(bytes) {
        Ok(raw_text) => Ok(RawDocument { id, raw_text }),
        Err(e) => Err(LoadError::malformed(&id, format!("File is not valid UTF-8: {}", e))),
    }
}

impl DocumentSource for DirectorySource {
    fn documents(&self) -> io::Result<Vec<Result<RawDocument, LoadError>>> {
        let docs = self.retrieve_files()?
            .into_iter()
            .filter_map(|path| {
                let id = path.file_name()?.to_string_lossy().to_string();
                Some(read_document(id, &path))
            })
            .collect();
        Ok(docs)
    }
}

/// Documents kept in memory, e.g. embedded at compile time.
#[derive(Default)]
pub struct MemorySource {
    docs: Vec<RawDocument>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, raw_text: &str) -> Self {
        self.docs.push(RawDocument::new(id, raw_text));
        self
    }
}

impl DocumentSource for MemorySource {
    fn documents(&self) -> io::Result<Vec<Result<RawDocument, LoadError>>> {
        Ok(self.docs.iter().cloned().map(Ok).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_directory_source_lists_markdown_only() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("b-post.md"), "---\ndate: 2024-01-01\n---\nB")?;
        fs::write(dir.path().join("a-post.md"), "---\ndate: 2024-01-02\n---\nA")?;
        fs::write(dir.path().join("notes.txt"), "not a post")?;
        fs::create_dir(dir.path().join("drafts.md"))?;

        let source = DirectorySource::new(dir.path().to_path_buf());
        let docs: Vec<RawDocument> = source.documents()?.into_iter().map(|d| d.unwrap()).collect();
        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["a-post.md", "b-post.md"]);
        assert_eq!(docs[0].raw_text, "---\ndate: 2024-01-02\n---\nA");
        Ok(())
    }

    #[test]
    fn test_directory_source_isolates_bad_files() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("good.md"), "---\ntitle: Good\n---\nBody")?;
        fs::write(dir.path().join("latin1.md"), b"---\ntitle: Caf\xe9\n---\n")?;

        let source = DirectorySource::new(dir.path().to_path_buf());
        let docs = source.documents()?;
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].as_ref().unwrap().id, "good.md");
        let err = docs[1].as_ref().unwrap_err();
        assert!(matches!(err, LoadError::MalformedDocument { id, .. } if id == "latin1.md"));
        Ok(())
    }

    #[test]
    fn test_directory_source_missing_dir() {
        let source = DirectorySource::new(PathBuf::from("/this/does/not/exist"));
        assert!(source.documents().is_err());
    }

    #[test]
    fn test_memory_source_keeps_order() {
        let source = MemorySource::new().with("z.md", "z").with("a.md", "a");
        let docs = source.documents().unwrap();
        assert_eq!(docs[0].as_ref().unwrap().id, "z.md");
        assert_eq!(docs[1].as_ref().unwrap().id, "a.md");
    }
}
