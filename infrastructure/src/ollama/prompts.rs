//! Instructions that make a general model behave like each capability.

use risklens_domain::{
    AUTO_DETECT_LANGUAGE, SummarizerOptions, SummaryFormat, SummaryLength, SummaryType,
    TranslateOptions, language_name,
};

/// System prompt for a summarizer created with `options`
pub fn summarizer_system(options: &SummarizerOptions) -> String {
    let shape = match (options.summary_type, options.length) {
        (SummaryType::KeyPoints, SummaryLength::Short) => "Extract the 3 most important key points as a bulleted list.",
        (SummaryType::KeyPoints, SummaryLength::Medium) => "Extract the 5 most important key points as a bulleted list.",
        (SummaryType::KeyPoints, SummaryLength::Long) => "Extract the 7 most important key points as a bulleted list.",
        (SummaryType::Tldr, SummaryLength::Short) => "Write a TL;DR in one sentence.",
        (SummaryType::Tldr, SummaryLength::Medium) => "Write a TL;DR in three sentences.",
        (SummaryType::Tldr, SummaryLength::Long) => "Write a TL;DR in five sentences.",
        (SummaryType::Teaser, SummaryLength::Short) => "Write a one-sentence teaser that makes the reader want to read the full text.",
        (SummaryType::Teaser, SummaryLength::Medium) => "Write a three-sentence teaser that makes the reader want to read the full text.",
        (SummaryType::Teaser, SummaryLength::Long) => "Write a five-sentence teaser that makes the reader want to read the full text.",
        (SummaryType::Headline, SummaryLength::Short) => "Write a single headline of at most 12 words.",
        (SummaryType::Headline, SummaryLength::Medium) => "Write a single headline of at most 17 words.",
        (SummaryType::Headline, SummaryLength::Long) => "Write a single headline of at most 22 words.",
    };
    let format = match options.format {
        SummaryFormat::Markdown => "Format the output as Markdown.",
        SummaryFormat::PlainText => "Use plain text without any Markdown formatting.",
    };
    format!(
        "You summarize text. {} {} Respond in {}. Reply with the summary only.",
        shape,
        format,
        language_name(&options.output_language)
    )
}

/// User prompt for one summarize call
pub fn summarize_prompt(text: &str, context: &str) -> String {
    if context.trim().is_empty() {
        format!("TEXT:\n{}", text)
    } else {
        format!("CONTEXT: {}\n\nTEXT:\n{}", context, text)
    }
}

/// System prompt for one translate call
pub fn translator_system(options: &TranslateOptions) -> String {
    let source = if options.source_language == AUTO_DETECT_LANGUAGE {
        "Detect the source language automatically.".to_string()
    } else {
        format!("The source language is {}.", language_name(&options.source_language))
    };
    format!(
        "You translate text. {} Translate into {}. Reply with the translation only.",
        source,
        language_name(&options.target_language)
    )
}
