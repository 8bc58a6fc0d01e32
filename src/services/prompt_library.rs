//! Built-in prompt templates.
//!
//! Each entry demonstrates one prompting technique; `run --template <name>`
//! resolves names against this library.

use crate::domain::{AppError, PromptTemplate};

/// Listing entry for a built-in template.
#[derive(Debug, Clone)]
pub struct TemplateSummary {
    pub name: &'static str,
    pub description: &'static str,
    pub input_variable: &'static str,
}

struct BuiltinTemplate {
    name: &'static str,
    description: &'static str,
    input_variable: &'static str,
    source: &'static str,
}

const BUILTINS: &[BuiltinTemplate] = &[
    BuiltinTemplate {
        name: "support",
        description: "Answer as a data-platform support engineer, citing documentation",
        input_variable: "question",
        source: "You are a support engineer for a distributed data platform, tasked with \
                 answering questions about Spark. Include platform-relevant information in your \
                 response and be as prescriptive as possible. Cite platform documentation for \
                 your answers.\nUser Question: \"{{ question }}\"\n",
    },
    BuiltinTemplate {
        name: "zero-shot-sentiment",
        description: "Classify tweet sentiment with no examples",
        input_variable: "tweet",
        source: "For each tweet, describe its sentiment:\n[Tweet]: {{ tweet }}\n",
    },
    BuiltinTemplate {
        name: "few-shot-sentiment",
        description: "Classify tweet sentiment guided by three labeled examples",
        input_variable: "tweet",
        source: "For each tweet, describe its sentiment:\n\
                 [Tweet]: \"I hate it when my phone battery dies.\"\n\
                 [Sentiment]: Negative\n\
                 ###\n\
                 [Tweet]: \"My day has been 👍\"\n\
                 [Sentiment]: Positive\n\
                 ###\n\
                 [Tweet]: \"This is the link to the article\"\n\
                 [Sentiment]: Neutral\n\
                 ###\n\
                 [Tweet]: {{ tweet }}\n\
                 [Sentiment]:\n",
    },
    BuiltinTemplate {
        name: "chain-of-thought",
        description: "Answer while walking through the reasoning step by step",
        input_variable: "question",
        source: "For the following question, answer the question, but walk through your line of \
                 reasoning step by step to arrive at the answer:\n\n{{ question }}\n",
    },
    BuiltinTemplate {
        name: "grounded",
        description: "Answer only when confident; otherwise decline",
        input_variable: "question",
        source: "For the following question, only respond if you have sufficient information to \
                 generate a confident answer. If you cannot do so, then simply respond 'Sorry - \
                 I don't have enough information to answer that.'\n\nQuestion:\n{{ question }}\n",
    },
];

/// Resolve a built-in template by name.
pub fn builtin(name: &str) -> Result<PromptTemplate, AppError> {
    let entry = BUILTINS.iter().find(|t| t.name == name).ok_or_else(|| {
        AppError::TemplateNotFound {
            name: name.to_string(),
            available: BUILTINS.iter().map(|t| t.name).collect::<Vec<_>>().join(", "),
        }
    })?;

    Ok(PromptTemplate::new(entry.name, entry.source, entry.input_variable)?)
}

/// Summaries of all built-in templates, in listing order.
pub fn summaries() -> Vec<TemplateSummary> {
    BUILTINS
        .iter()
        .map(|t| TemplateSummary {
            name: t.name,
            description: t.description,
            input_variable: t.input_variable,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_constructs() {
        for summary in summaries() {
            let template = builtin(summary.name).unwrap();
            assert_eq!(template.input_variable(), summary.input_variable);
        }
    }

    #[test]
    fn unknown_name_lists_available_templates() {
        let err = builtin("does-not-exist").unwrap_err();
        match err {
            AppError::TemplateNotFound { name, available } => {
                assert_eq!(name, "does-not-exist");
                assert!(available.contains("few-shot-sentiment"));
            }
            other => panic!("unexpected error variant: {}", other),
        }
    }

    #[test]
    fn few_shot_fill_keeps_examples_intact() {
        let template = builtin("few-shot-sentiment").unwrap();
        let request = template.fill("My day has been ugh").unwrap();

        assert!(request.text().contains("[Sentiment]: Negative"));
        assert!(request.text().contains("[Tweet]: My day has been ugh"));
    }
}
