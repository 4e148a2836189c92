//! Page-side adapters: HTML text extraction and the current selection

pub mod extract;
pub mod selection;

pub use extract::PageTextExtractor;
pub use selection::InMemorySelection;
