//! Options passed to capability `availability` / `create` / operation calls.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output language requested from every capability
pub const DEFAULT_OUTPUT_LANGUAGE: &str = "en";

/// Source language value that asks the translator to detect the language
pub const AUTO_DETECT_LANGUAGE: &str = "auto";

/// Languages the analysis pipeline translates into, in attempt order
pub const TARGET_LANGUAGES: [&str; 11] = [
    "es", "fr", "de", "it", "pt", "ru", "ja", "ko", "zh", "ar", "hi",
];

/// Human-readable name for a language code, falling back to the upper-cased code
pub fn language_name(code: &str) -> String {
    match code {
        "en" => "English".to_string(),
        "es" => "Spanish".to_string(),
        "fr" => "French".to_string(),
        "de" => "German".to_string(),
        "it" => "Italian".to_string(),
        "pt" => "Portuguese".to_string(),
        "ru" => "Russian".to_string(),
        "ja" => "Japanese".to_string(),
        "ko" => "Korean".to_string(),
        "zh" => "Chinese".to_string(),
        "ar" => "Arabic".to_string(),
        "hi" => "Hindi".to_string(),
        other => other.to_uppercase(),
    }
}

/// Structural style of a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryType {
    #[default]
    KeyPoints,
    Tldr,
    Teaser,
    Headline,
}

impl SummaryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryType::KeyPoints => "key-points",
            SummaryType::Tldr => "tldr",
            SummaryType::Teaser => "teaser",
            SummaryType::Headline => "headline",
        }
    }
}

impl fmt::Display for SummaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SummaryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "key-points" | "keypoints" => Ok(SummaryType::KeyPoints),
            "tldr" | "tl;dr" => Ok(SummaryType::Tldr),
            "teaser" => Ok(SummaryType::Teaser),
            "headline" => Ok(SummaryType::Headline),
            _ => Err(format!("Invalid summary type: {}", s)),
        }
    }
}

/// Target length of a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl SummaryLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryLength::Short => "short",
            SummaryLength::Medium => "medium",
            SummaryLength::Long => "long",
        }
    }
}

impl fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SummaryLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(SummaryLength::Short),
            "medium" => Ok(SummaryLength::Medium),
            "long" => Ok(SummaryLength::Long),
            _ => Err(format!("Invalid summary length: {}", s)),
        }
    }
}

/// Markup of a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryFormat {
    #[default]
    Markdown,
    PlainText,
}

impl SummaryFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryFormat::Markdown => "markdown",
            SummaryFormat::PlainText => "plain-text",
        }
    }
}

impl fmt::Display for SummaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SummaryFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(SummaryFormat::Markdown),
            "plain-text" | "plain" | "text" => Ok(SummaryFormat::PlainText),
            _ => Err(format!("Invalid summary format: {}", s)),
        }
    }
}

/// Options for creating a summarizer instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizerOptions {
    #[serde(rename = "type")]
    pub summary_type: SummaryType,
    pub length: SummaryLength,
    pub format: SummaryFormat,
    pub output_language: String,
}

impl Default for SummarizerOptions {
    fn default() -> Self {
        Self {
            summary_type: SummaryType::default(),
            length: SummaryLength::default(),
            format: SummaryFormat::default(),
            output_language: DEFAULT_OUTPUT_LANGUAGE.to_string(),
        }
    }
}

/// Per-call translation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateOptions {
    pub source_language: String,
    pub target_language: String,
}

impl TranslateOptions {
    /// Translate into `target`, detecting the source language
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            source_language: AUTO_DETECT_LANGUAGE.to_string(),
            target_language: target.into(),
        }
    }
}

/// Per-call generation options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOptions {
    /// Upper bound on output length
    pub max_length: u32,
    pub temperature: f32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_length: 500,
            temperature: 0.7,
        }
    }
}
