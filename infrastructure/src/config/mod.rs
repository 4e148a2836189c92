//! Configuration file loading for risklens
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `RISKLENS_<SECTION>__<KEY>` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./risklens.toml` or `./.risklens.toml`
//! 4. Global: `$XDG_CONFIG_HOME/risklens/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileBackendConfig, FileConfig, FileOutputConfig, FileQueryConfig,
    FileSummaryConfig, FileTranslationConfig,
};
pub use loader::ConfigLoader;
