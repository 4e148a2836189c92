//! Readable text extraction from HTML pages

use scraper::{ElementRef, Html, Node};
use tracing::debug;

/// Content regions tried in order; the first one present wins
const CONTENT_REGIONS: [&str; 3] = ["article", "main", "body"];

/// Tags whose entire subtree is never visible text
const SKIP_TAGS: [&str; 5] = ["script", "style", "noscript", "template", "svg"];

/// Extracts the main readable text of an HTML document.
///
/// The text comes from the first `<article>`, else the first `<main>`,
/// else `<body>`, else the whole document. Whitespace is collapsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageTextExtractor;

impl PageTextExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, html: &str) -> String {
        let document = Html::parse_document(html);
        let root = document.root_element();

        let region = CONTENT_REGIONS.iter().find_map(|tag| {
            root.descendants()
                .filter_map(ElementRef::wrap)
                .find(|element| element.value().name() == *tag)
        });
        let region = match region {
            Some(element) => {
                debug!("Extracting page text from <{}>", element.value().name());
                element
            }
            None => root,
        };

        let mut parts = Vec::new();
        collect_text(region, &mut parts);
        parts.join(" ").split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

fn collect_text(element: ElementRef, parts: &mut Vec<String>) {
    if SKIP_TAGS.contains(&element.value().name()) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    parts.push(text.to_string());
                }
            }
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    collect_text(child, parts);
                }
            }
            _ => {}
        }
    }
}
