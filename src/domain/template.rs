//! Prompt template domain types.

use std::collections::BTreeMap;

use minijinja::{Environment, UndefinedBehavior};
use thiserror::Error;

/// Error raised while constructing or filling a prompt template.
#[derive(Debug, Clone, Error)]
pub enum TemplateError {
    /// Template source failed to parse.
    #[error("Template '{template}' failed to parse: {reason}")]
    Syntax { template: String, reason: String },

    /// Template source declares no placeholder.
    #[error("Template '{template}' declares no placeholder; exactly one is required")]
    NoPlaceholder { template: String },

    /// Template source declares more than one placeholder.
    #[error("Template '{template}' declares multiple placeholders ({found}); exactly one is required")]
    MultiplePlaceholders { template: String, found: String },

    /// The placeholder name does not match the key supplied at fill time.
    #[error("Template '{template}' has no value for placeholder '{placeholder}': fill supplied key '{supplied}'")]
    MissingVariable { template: String, placeholder: String, supplied: String },

    /// Rendering failed after substitution started.
    #[error("Template '{template}' failed to render: {reason}")]
    Render { template: String, reason: String },
}

/// An immutable prompt template with exactly one named placeholder.
///
/// The placeholder uses `{{ name }}` syntax. Construction verifies the
/// exactly-one invariant; the match between the placeholder and the declared
/// input variable is checked when the template is filled.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    name: String,
    source: String,
    input_variable: String,
    placeholder: String,
}

impl PromptTemplate {
    /// Create a template from a source string and its declared input variable.
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        input_variable: impl Into<String>,
    ) -> Result<Self, TemplateError> {
        let name = name.into();
        let source = source.into();
        let input_variable = input_variable.into();

        let env = template_environment();
        let template = env.template_from_str(&source).map_err(|e| TemplateError::Syntax {
            template: name.clone(),
            reason: e.to_string(),
        })?;

        let mut placeholders: Vec<String> =
            template.undeclared_variables(false).into_iter().collect();
        placeholders.sort();

        match placeholders.len() {
            0 => Err(TemplateError::NoPlaceholder { template: name }),
            1 => {
                let placeholder = placeholders.remove(0);
                Ok(Self { name, source, input_variable, placeholder })
            }
            _ => Err(TemplateError::MultiplePlaceholders {
                template: name,
                found: placeholders.join(", "),
            }),
        }
    }

    /// Template name, used in error reporting and run metadata.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw template source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The declared input variable, i.e. the key used at fill time.
    pub fn input_variable(&self) -> &str {
        &self.input_variable
    }

    /// Substitute `value` at the placeholder position.
    ///
    /// Fails with [`TemplateError::MissingVariable`] when the placeholder name
    /// does not match the declared input variable; no partial output is
    /// produced in that case.
    pub fn fill(&self, value: &str) -> Result<PromptRequest, TemplateError> {
        if self.placeholder != self.input_variable {
            return Err(TemplateError::MissingVariable {
                template: self.name.clone(),
                placeholder: self.placeholder.clone(),
                supplied: self.input_variable.clone(),
            });
        }

        let env = template_environment();
        let template = env.template_from_str(&self.source).map_err(|e| TemplateError::Syntax {
            template: self.name.clone(),
            reason: e.to_string(),
        })?;

        let mut context = BTreeMap::new();
        context.insert(self.input_variable.as_str(), value);

        let text = template.render(context).map_err(|e| TemplateError::Render {
            template: self.name.clone(),
            reason: e.to_string(),
        })?;

        Ok(PromptRequest { text })
    }
}

/// A filled prompt, constructed immediately before a remote call.
///
/// Never mutated once built and never persisted.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    text: String,
}

impl PromptRequest {
    /// The full prompt text sent to the endpoint.
    pub fn text(&self) -> &str {
        &self.text
    }
}

fn template_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env
}
