//! Result formatting for the terminal and for scripts

pub mod console;
pub mod formatter;
pub mod json;

pub use console::ConsoleFormatter;
pub use formatter::OutputFormatter;
pub use json::JsonFormatter;

use risklens_domain::OutputFormat;

/// Formatter for the requested output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Turn terminal colors off for the rest of the process
pub fn disable_color() {
    colored::control::set_override(false);
}
