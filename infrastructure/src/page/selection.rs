//! In-memory selection store

use risklens_application::SelectionSource;
use std::sync::RwLock;

/// Selection set by the host, served to the page context
#[derive(Debug, Default)]
pub struct InMemorySelection {
    text: RwLock<String>,
}

impl InMemorySelection {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: RwLock::new(text.into()),
        }
    }

    pub fn set(&self, text: impl Into<String>) {
        *self.text.write().unwrap_or_else(|e| e.into_inner()) = text.into();
    }

    pub fn clear(&self) {
        self.set(String::new());
    }
}

impl SelectionSource for InMemorySelection {
    fn selected_text(&self) -> String {
        self.text.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
