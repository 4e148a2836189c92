//! Analysis entities and text preparation

pub mod request;
pub mod result;
pub mod text;

pub use request::{
    AnalysisRequest, DEFAULT_CONTEXT, PAGE_CONTEXT, SELECTION_CONTEXT, SUMMARY_CONTEXT,
    USER_TEXT_CONTEXT,
};
pub use result::{AnalysisResult, DangerPoint, MAX_MATCHES, MAX_RATING, MIN_RATING, Severity};
pub use text::{MIN_SUMMARY_CHARS, clean_text, prepare_for_summary};
