//! Page and fragment types with source tracking

use serde::{Deserialize, Serialize};

/// A single page of text extracted from a source document.
///
/// Produced by the loader and immutable afterwards. `page_number` is
/// zero-based, matching the page indices embedded in fragment ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcePage {
    /// Stable identifier of the originating file (relative path as loaded)
    pub source_path: String,
    /// Zero-based page number within the file
    pub page_number: u32,
    /// Text content of the page
    pub text: String,
}

impl SourcePage {
    /// Create a new source page
    pub fn new(source_path: impl Into<String>, page_number: u32, text: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            page_number,
            text: text.into(),
        }
    }
}

/// A contiguous slice of a page's text after splitting.
///
/// Fragments inherit their source path and page number from the owning
/// page; their position among siblings is assigned later, during
/// identification, not during splitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// Source file path, inherited from the owning page
    pub source_path: String,
    /// Zero-based page number, inherited from the owning page
    pub page_number: u32,
    /// Text content of the fragment
    pub content: String,
}

impl Fragment {
    /// Create a new fragment
    pub fn new(source_path: impl Into<String>, page_number: u32, content: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            page_number,
            content: content.into(),
        }
    }

    /// Page key shared by all fragments of the same page: `source_path:page_number`
    pub fn page_key(&self) -> String {
        format!("{}:{}", self.source_path, self.page_number)
    }
}

/// A fragment annotated with its stable id and position.
///
/// The id is derived, never stored on its own: `source_path:page:position`,
/// e.g. `data/monopoly.pdf:6:2`. Identical input yields identical ids on
/// every run, which is what makes re-indexing idempotent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifiedFragment {
    /// Stable fragment id, used as the storage key
    pub id: String,
    /// Zero-based position among fragments of the same page run
    pub position: u32,
    /// The underlying fragment
    pub fragment: Fragment,
}
