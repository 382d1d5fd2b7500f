//! PDF directory loader producing page-level text units

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::types::SourcePage;

/// Loads every PDF under a directory into ordered, page-level text units.
///
/// Files are visited in sorted path order so repeated runs over the same
/// directory produce the same page sequence, which the downstream id
/// assignment depends on. A missing or unreadable directory is fatal to
/// the run; a page that yields no text is kept as an empty page and simply
/// produces no fragments.
pub struct PdfDirectoryLoader {
    data_dir: PathBuf,
}

impl PdfDirectoryLoader {
    /// Create a loader for the given directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load all PDF pages from the directory, in file order then page order
    pub fn load_pages(&self) -> Result<Vec<SourcePage>> {
        if !self.data_dir.is_dir() {
            return Err(Error::source_access(
                self.data_dir.display().to_string(),
                "not a readable directory",
            ));
        }

        let mut pages = Vec::new();
        for path in self.pdf_files()? {
            let source_path = path.display().to_string();
            tracing::info!("Loading {}", source_path);
            pages.extend(Self::load_pdf(&path, &source_path)?);
        }

        tracing::info!("Loaded {} pages from {}", pages.len(), self.data_dir.display());
        Ok(pages)
    }

    /// Collect PDF paths under the data directory, sorted for determinism
    fn pdf_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.data_dir).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                Error::source_access(self.data_dir.display().to_string(), e.to_string())
            })?;
            let path = entry.path();
            if path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
            {
                files.push(path.to_path_buf());
            }
        }
        Ok(files)
    }

    /// Extract text from a single PDF, one unit per page
    fn load_pdf(path: &Path, source_path: &str) -> Result<Vec<SourcePage>> {
        let doc = lopdf::Document::load(path)
            .map_err(|e| Error::pdf_parse(source_path, format!("Failed to load PDF: {}", e)))?;

        let mut pages = Vec::new();
        for (index, (&page_number, _)) in doc.get_pages().iter().enumerate() {
            // Pages that fail text extraction (scanned images, odd encodings)
            // become empty pages rather than aborting the whole file.
            let text = match doc.extract_text(&[page_number]) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("{} page {}: no text extracted ({})", source_path, index, e);
                    String::new()
                }
            };
            pages.push(SourcePage::new(source_path, index as u32, text));
        }

        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_is_fatal() {
        let loader = PdfDirectoryLoader::new("definitely/not/a/real/dir");
        let err = loader.load_pages().unwrap_err();
        assert!(matches!(err, Error::SourceAccess { .. }));
    }

    #[test]
    fn empty_directory_yields_no_pages() {
        let dir = tempfile::tempdir().unwrap();
        let loader = PdfDirectoryLoader::new(dir.path());
        let pages = loader.load_pages().unwrap();
        assert!(pages.is_empty());
    }

    #[test]
    fn non_pdf_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "plain text").unwrap();
        let loader = PdfDirectoryLoader::new(dir.path());
        assert!(loader.load_pages().unwrap().is_empty());
    }
}
