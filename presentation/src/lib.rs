//! Presentation layer for risklens
//!
//! This crate contains CLI definitions, output formatters,
//! download progress reporters, and the follow-up question REPL.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::FollowUpRepl;
pub use cli::commands::{Cli, Command, InputArgs, MenuAction, SummaryArgs};
pub use output::{ConsoleFormatter, JsonFormatter, OutputFormatter, disable_color, formatter_for};
pub use progress::{DownloadProgressReporter, SimpleDownloadProgress, progress_observer};
