//! Selection source port
//!
//! The page-embedded context answers `getSelectedText` from whatever the
//! host currently has selected.

/// Read access to the current page selection
pub trait SelectionSource: Send + Sync {
    /// Currently selected text, empty when nothing is selected
    fn selected_text(&self) -> String;
}
