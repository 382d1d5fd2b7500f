//! Prompt templates for RAG generation

use crate::providers::ScoredFragment;

/// Separator between context fragments in the prompt
const CONTEXT_SEPARATOR: &str = "\n\n---\n\n";

/// Prompt builder for RAG queries
pub struct PromptBuilder;

impl PromptBuilder {
    /// Join retrieved fragment texts into a single context block,
    /// closest match first
    pub fn build_context(results: &[ScoredFragment]) -> String {
        results
            .iter()
            .map(|r| r.fragment.content.as_str())
            .collect::<Vec<_>>()
            .join(CONTEXT_SEPARATOR)
    }

    /// Build the question-answering prompt, grounded in the context only
    pub fn build_qa_prompt(question: &str, context: &str) -> String {
        format!(
            r#"Answer the question based only on the following context:

{context}

---

Answer the question based on the above context: {question}"#,
            context = context,
            question = question
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Fragment;

    fn scored(content: &str) -> ScoredFragment {
        ScoredFragment {
            id: "a.pdf:0:0".to_string(),
            fragment: Fragment::new("a.pdf", 0, content),
            similarity: 0.9,
        }
    }

    #[test]
    fn context_joins_fragments_with_separator() {
        let context = PromptBuilder::build_context(&[scored("first"), scored("second")]);
        assert_eq!(context, "first\n\n---\n\nsecond");
    }

    #[test]
    fn qa_prompt_contains_context_and_question() {
        let prompt = PromptBuilder::build_qa_prompt("How do I win?", "roll doubles");
        assert!(prompt.contains("roll doubles"));
        assert!(prompt.contains("How do I win?"));
        assert!(prompt.contains("based only on the following context"));
    }
}
