//! Prompt template for answer generation

use askpdf_core::{Error, Result};

const CONTEXT_SLOT: &str = "{context}";
const QUERY_SLOT: &str = "{query}";

/// Default instruction template
///
/// Wording is part of the product surface (tests and downstream marker
/// extraction rely on the `Answer:` cue and the literal inability
/// sentence), so it is kept verbatim.
pub const DEFAULT_TEMPLATE: &str = r#"you are an AI assistant tasked with answering question based on the provided PDF content.
Please analyze the following excerpt from the PDF and answer the question.
PDF content:
{context}

Question : {query}

Instructions:
- Answer only based on the information provided in the PDF content above.
- If the answer cannot be found in the provided content, say " I cannot find the answer to the question and provide a pdf documents"
- BE concise and specific.
- Include relevant quote or references from the PDF when applicable.

Answer:
"#;

/// Prompt template with `{context}` and `{query}` placeholders
///
/// Swappable at runtime; rendering validates that both placeholders are
/// present.
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    pub fn with_template(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Replace the template without restarting the system
    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = template.into();
    }

    /// Render the template with the retrieved context and the user's query
    ///
    /// Substitution happens in a single pass over the template, so
    /// placeholder-looking text inside the substituted values is never
    /// re-expanded.
    pub fn render(&self, context: &str, query: &str) -> Result<String> {
        if !self.template.contains(CONTEXT_SLOT) {
            return Err(Error::Template(format!(
                "template is missing the {} placeholder",
                CONTEXT_SLOT
            )));
        }
        if !self.template.contains(QUERY_SLOT) {
            return Err(Error::Template(format!(
                "template is missing the {} placeholder",
                QUERY_SLOT
            )));
        }

        let mut out =
            String::with_capacity(self.template.len() + context.len() + query.len());
        let mut rest = self.template.as_str();

        loop {
            match (rest.find(CONTEXT_SLOT), rest.find(QUERY_SLOT)) {
                (None, None) => {
                    out.push_str(rest);
                    break;
                }
                (Some(c), q) if q.is_none_or(|q| c < q) => {
                    out.push_str(&rest[..c]);
                    out.push_str(context);
                    rest = &rest[c + CONTEXT_SLOT.len()..];
                }
                (_, Some(q)) => {
                    out.push_str(&rest[..q]);
                    out.push_str(query);
                    rest = &rest[q + QUERY_SLOT.len()..];
                }
                // unreachable: at least one of the two was Some
                (Some(_), None) => unreachable!(),
            }
        }

        Ok(out)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_embeds_context_and_query_verbatim() {
        let template = PromptTemplate::new();
        let prompt = template
            .render("The capital of France is Paris.", "What is the capital of France?")
            .unwrap();

        assert!(prompt.contains("The capital of France is Paris."));
        assert!(prompt.contains("What is the capital of France?"));
        assert!(prompt.contains("Answer only based on the information provided"));
        assert!(prompt.trim_end().ends_with("Answer:"));
    }

    #[test]
    fn custom_template_is_swappable_at_runtime() {
        let mut template = PromptTemplate::new();
        template.set_template("Q: {query}\nDocs: {context}\nA:");
        let prompt = template.render("ctx", "why?").unwrap();
        assert_eq!(prompt, "Q: why?\nDocs: ctx\nA:");
    }

    #[test]
    fn missing_placeholders_fail_with_template_error() {
        let no_query = PromptTemplate::with_template("only {context} here");
        assert!(matches!(no_query.render("c", "q"), Err(Error::Template(_))));

        let no_context = PromptTemplate::with_template("only {query} here");
        assert!(matches!(no_context.render("c", "q"), Err(Error::Template(_))));
    }

    #[test]
    fn substituted_values_are_not_re_expanded() {
        let template = PromptTemplate::with_template("{context} | {query}");
        let prompt = template.render("has a {query} inside", "has a {context} inside").unwrap();
        assert_eq!(prompt, "has a {query} inside | has a {context} inside");
    }

    #[test]
    fn repeated_placeholders_are_all_substituted() {
        let template = PromptTemplate::with_template("{query} then {context} then {query}");
        let prompt = template.render("C", "Q").unwrap();
        assert_eq!(prompt, "Q then C then Q");
    }
}
