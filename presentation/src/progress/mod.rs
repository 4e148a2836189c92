//! Progress display

pub mod reporter;

pub use reporter::{DownloadProgressReporter, SimpleDownloadProgress, progress_observer};
