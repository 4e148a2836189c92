//! Follow-up question REPL
//!
//! After an analysis the user can keep asking questions about the same
//! text. Each question is answered independently; the REPL never fails on
//! an unanswerable question because answers always come back as text.

use crate::output::OutputFormatter;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::future::Future;
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 500;

/// What a line of input asks for
#[derive(Debug, PartialEq, Eq)]
enum ReplInput {
    Empty,
    Quit,
    Help,
    Unknown(String),
    Question(String),
}

impl ReplInput {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ReplInput::Empty;
        }
        if !line.starts_with('/') {
            return ReplInput::Question(line.to_string());
        }
        match line {
            "/quit" | "/exit" | "/q" => ReplInput::Quit,
            "/help" | "/h" | "/?" => ReplInput::Help,
            other => ReplInput::Unknown(other.to_string()),
        }
    }
}

/// Interactive follow-up question loop
pub struct FollowUpRepl {
    formatter: Box<dyn OutputFormatter>,
    history_path: Option<PathBuf>,
}

impl FollowUpRepl {
    pub fn new(formatter: Box<dyn OutputFormatter>) -> Self {
        Self {
            formatter,
            history_path: dirs::data_dir().map(|p| p.join("risklens").join("history.txt")),
        }
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.history_path else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                editor
            }
        }
    }

    /// Run until the user quits. Returns the number of questions asked.
    pub async fn run<F, Fut>(&self, mut ask: F) -> io::Result<usize>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = String>,
    {
        let mut editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("ask".to_string()),
            DefaultPromptSegment::Empty,
        );
        let mut asked = 0;

        Self::print_welcome();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => match ReplInput::parse(&line) {
                    ReplInput::Empty => continue,
                    ReplInput::Quit => break,
                    ReplInput::Help => Self::print_help(),
                    ReplInput::Unknown(cmd) => {
                        println!("Unknown command: {}", cmd);
                        println!("Type /help for available commands");
                    }
                    ReplInput::Question(question) => {
                        asked += 1;
                        debug!("Follow-up question #{}", asked);
                        let answer = ask(question.clone()).await;
                        println!();
                        println!("{}", self.formatter.format_answer(&question, &answer));
                    }
                },
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => break,
            }
        }

        println!("Bye!");
        Ok(asked)
    }

    fn print_welcome() {
        println!();
        println!("{}", "Ask follow-up questions about this text.".cyan().bold());
        println!("Type /help for commands, /quit to exit.");
        println!();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?    - Show this help");
        println!("  /quit, /exit, /q - Exit");
        println!();
        println!("Anything else is sent as a question about the analyzed text.");
        println!();
    }
}
