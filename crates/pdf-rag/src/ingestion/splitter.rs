//! Deterministic character-window text splitting

use crate::error::{Error, Result};
use crate::types::{Fragment, SourcePage};

/// Splits page text into overlapping fixed-size fragments.
///
/// Sizes are measured in characters, not tokens. Windows prefer to break at
/// whitespace so words stay intact, but never exceed `chunk_size`
/// characters. Splitting is a pure function of the input text, so the same
/// pages always produce the same fragment sequence.
pub struct CharacterSplitter {
    /// Target fragment size in characters
    chunk_size: usize,
    /// Characters shared between consecutive fragments
    overlap: usize,
}

impl CharacterSplitter {
    /// Create a new splitter. `overlap` must be smaller than `chunk_size`;
    /// both values come from user-editable config, so bad ones surface as
    /// a configuration error rather than a panic.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::Config("chunk_size must be positive".to_string()));
        }
        if overlap >= chunk_size {
            return Err(Error::Config(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                overlap, chunk_size
            )));
        }
        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Split a sequence of pages, preserving document and page order
    pub fn split_pages(&self, pages: &[SourcePage]) -> Vec<Fragment> {
        let mut fragments = Vec::new();
        for page in pages {
            for piece in self.split_text(&page.text) {
                fragments.push(Fragment::new(&page.source_path, page.page_number, piece));
            }
        }
        fragments
    }

    /// Split one text into overlapping windows
    pub fn split_text(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        // Byte offsets of every char boundary, plus the end of the text
        let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        boundaries.push(text.len());
        let total_chars = boundaries.len() - 1;

        if total_chars <= self.chunk_size {
            return vec![text.to_string()];
        }

        let mut pieces = Vec::new();
        let mut start = 0usize;

        while start < total_chars {
            let mut end = (start + self.chunk_size).min(total_chars);

            // Pull the cut back to whitespace when one exists in the second
            // half of the window, so fragments end on word boundaries.
            if end < total_chars {
                let floor = start + self.chunk_size / 2;
                let slice = &text[boundaries[floor]..boundaries[end]];
                if let Some(ws) = slice.rfind(char::is_whitespace) {
                    let ws_char = floor + text[boundaries[floor]..boundaries[floor] + ws].chars().count();
                    if ws_char > start {
                        end = ws_char;
                    }
                }
            }

            let piece = text[boundaries[start]..boundaries[end]].trim();
            if !piece.is_empty() {
                pieces.push(piece.to_string());
            }

            if end >= total_chars {
                break;
            }
            // Step forward by at least one char so splitting always terminates
            start = (end.saturating_sub(self.overlap)).max(start + 1);
        }

        pieces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splitter() -> CharacterSplitter {
        CharacterSplitter::new(100, 20).unwrap()
    }

    #[test]
    fn rejects_overlap_not_smaller_than_chunk_size() {
        // Values straight out of a [chunking] config section must come
        // back as a config error, never a panic.
        assert!(matches!(
            CharacterSplitter::new(800, 800),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            CharacterSplitter::new(800, 900),
            Err(Error::Config(_))
        ));
        assert!(matches!(CharacterSplitter::new(0, 0), Err(Error::Config(_))));
        assert!(CharacterSplitter::new(800, 80).is_ok());
    }

    #[test]
    fn empty_text_yields_no_fragments() {
        assert!(splitter().split_text("").is_empty());
        assert!(splitter().split_text("   \n  ").is_empty());
    }

    #[test]
    fn short_text_is_a_single_fragment() {
        let pieces = splitter().split_text("a short paragraph");
        assert_eq!(pieces, vec!["a short paragraph".to_string()]);
    }

    #[test]
    fn fragments_never_exceed_chunk_size() {
        let text = "word ".repeat(200);
        for piece in splitter().split_text(&text) {
            assert!(piece.chars().count() <= 100, "fragment too long: {}", piece.len());
        }
    }

    #[test]
    fn consecutive_fragments_share_overlap_text() {
        let text = "word ".repeat(200);
        let pieces = splitter().split_text(&text);
        assert!(pieces.len() > 1);
        for pair in pieces.windows(2) {
            let tail: String = pair[0].chars().rev().take(10).collect::<String>()
                .chars().rev().collect();
            assert!(pair[1].contains(tail.trim()) || pair[0].ends_with(pair[1].split(' ').next().unwrap_or("")),
                "no overlap between consecutive fragments");
        }
    }

    #[test]
    fn splitting_is_deterministic() {
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(30);
        assert_eq!(splitter().split_text(&text), splitter().split_text(&text));
    }

    #[test]
    fn pages_keep_their_source_and_order() {
        let pages = vec![
            SourcePage::new("a.pdf", 0, "first page text"),
            SourcePage::new("a.pdf", 1, ""),
            SourcePage::new("b.pdf", 0, "second file text"),
        ];
        let fragments = splitter().split_pages(&pages);
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].source_path, "a.pdf");
        assert_eq!(fragments[0].page_number, 0);
        assert_eq!(fragments[1].source_path, "b.pdf");
    }

    #[test]
    fn multibyte_text_splits_on_char_boundaries() {
        let text = "héllo wörld ünïcode ".repeat(50);
        let pieces = splitter().split_text(&text);
        assert!(pieces.len() > 1);
        // Reconstructing each piece must not panic on byte boundaries
        for piece in &pieces {
            assert!(!piece.is_empty());
        }
    }
}
