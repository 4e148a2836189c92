//! Prompt and fallback text templates for the analysis flow

/// Templates for prompts and the fixed strings that stand in for failed stages
pub struct PromptTemplate;

impl PromptTemplate {
    /// Summary placeholder used when no summarizer can be used
    pub const SUMMARY_UNAVAILABLE: &'static str =
        "Summary not available - Summarizer API not accessible";

    /// Prompt for answering a follow-up question about analyzed content
    pub fn query_prompt(context: &str, original_text: &str, question: &str) -> String {
        format!(
            r#"Based on the following analyzed content, answer the user's question:

CONTEXT: {}

ORIGINAL TEXT: {}

USER QUESTION: {}

Please provide a helpful, accurate response based on the content analysis. If the question is about specific risks or dangers, reference the danger ratings and provide actionable advice."#,
            context, original_text, question
        )
    }

    /// Summary placeholder for a failed summary stage
    pub fn summary_failed(reason: &str) -> String {
        format!("Failed to generate summary: {}", reason)
    }

    /// Answer returned when no generator is available
    pub fn query_unavailable(question: &str) -> String {
        format!(
            "I understand you're asking about: \"{}\". However, the Writer API is not available to provide a detailed response. Please refer to the analysis above for information about this content.",
            question
        )
    }

    /// Answer returned when generation failed
    pub fn query_failed(reason: &str) -> String {
        format!(
            "I'm sorry, I couldn't process your question due to a technical error: {}",
            reason
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_prompt_sections_in_order() {
        let prompt = PromptTemplate::query_prompt("ctx", "the text", "why?");
        let context = prompt.find("CONTEXT: ctx").unwrap();
        let original = prompt.find("ORIGINAL TEXT: the text").unwrap();
        let question = prompt.find("USER QUESTION: why?").unwrap();
        assert!(context < original && original < question);
    }

    #[test]
    fn test_query_unavailable_embeds_question() {
        let answer = PromptTemplate::query_unavailable("Can they sell my data?");
        assert!(answer.contains("\"Can they sell my data?\""));
    }

    #[test]
    fn test_failure_strings() {
        assert_eq!(
            PromptTemplate::summary_failed("boom"),
            "Failed to generate summary: boom"
        );
        assert!(PromptTemplate::query_failed("boom").starts_with("I'm sorry, I couldn't process your question"));
        assert!(PromptTemplate::query_failed("boom").ends_with(": boom"));
    }
}
