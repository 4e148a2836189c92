//! Interactive follow-up questions
//!
//! Provides a line-editor loop for asking about analyzed text.

mod repl;

pub use repl::FollowUpRepl;
