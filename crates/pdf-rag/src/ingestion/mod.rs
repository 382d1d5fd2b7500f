//! Document loading and text splitting

pub mod loader;
pub mod splitter;

pub use loader::PdfDirectoryLoader;
pub use splitter::CharacterSplitter;
