//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use risklens_domain::{OutputFormat, SummaryFormat, SummaryLength, SummaryType};
use std::path::PathBuf;

/// CLI arguments for risklens
#[derive(Parser, Debug)]
#[command(name = "risklens")]
#[command(author, version, about = "Summaries, danger points and translations for any text")]
#[command(long_about = r#"
risklens analyzes a piece of text (terms of service, privacy policies, articles)
with locally hosted AI models.

An analysis has three stages:
1. Summary: the text is summarized by the configured summarize model
2. Danger points: eight risk categories are scored from 1 to 10
3. Translations: the summary is translated into the target languages

Text is read from the positional argument, --file, --html (main article text
is extracted) or standard input.

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./risklens.toml        Project-level config
3. ~/.config/risklens/config.toml   Global config

Example:
  risklens analyze --html terms.html
  risklens summarize --type tldr --length short "Long article text..."
  risklens ask "Can they sell my data?" --file privacy.txt
  risklens serve
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format [default: text]
    #[arg(short, long, global = true, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize, score and translate text
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Describes where the text came from
        #[arg(long)]
        context: Option<String>,

        /// Skip the translation stage
        #[arg(long)]
        no_translate: bool,

        /// Ask follow-up questions about the text afterwards
        #[arg(short, long)]
        interactive: bool,
    },

    /// Summarize text only
    Summarize {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        summary: SummaryArgs,
    },

    /// Answer a question about text
    Ask {
        /// The question to answer
        question: String,

        #[command(flatten)]
        input: InputArgs,

        /// Context the answer is grounded on [default: the text itself]
        #[arg(long)]
        context: Option<String>,
    },

    /// Report the readiness of every capability
    Probe,

    /// Serve newline-delimited JSON requests on stdin/stdout
    Serve,

    /// Run a context-menu action
    Menu {
        #[arg(value_enum)]
        action: MenuAction,

        #[command(flatten)]
        input: InputArgs,
    },
}

/// Where to read the text from
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Text to process (reads stdin when no input is given)
    #[arg(conflicts_with_all = ["file", "html"])]
    pub text: Option<String>,

    /// Read plain text from a file
    #[arg(long, value_name = "PATH", conflicts_with = "html")]
    pub file: Option<PathBuf>,

    /// Read an HTML page and extract its main text
    #[arg(long, value_name = "PATH")]
    pub html: Option<PathBuf>,
}

/// Per-request summary overrides
#[derive(Args, Debug, Default, Clone)]
pub struct SummaryArgs {
    /// Summary type: key-points, tldr, teaser or headline
    #[arg(long = "type", value_name = "TYPE")]
    pub summary_type: Option<SummaryType>,

    /// Summary length: short, medium or long
    #[arg(long, value_name = "LENGTH")]
    pub length: Option<SummaryLength>,

    /// Summary format: markdown or plain-text
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<SummaryFormat>,
}

impl SummaryArgs {
    pub fn is_empty(&self) -> bool {
        self.summary_type.is_none() && self.length.is_none() && self.format.is_none()
    }
}

/// Context-menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MenuAction {
    /// Summarize the selection through the page context
    SummarizeSelection,
    /// Summarize the whole page through the control surface
    SummarizePage,
}
