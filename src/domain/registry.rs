//! Catalog-qualified registry names.

use std::fmt;

use crate::domain::AppError;

/// A `catalog.schema.name` qualified model name for registry calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedModelName {
    catalog: String,
    schema: String,
    name: String,
}

impl QualifiedModelName {
    /// Build a qualified name from its three segments.
    pub fn new(
        catalog: impl Into<String>,
        schema: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, AppError> {
        let catalog = catalog.into();
        let schema = schema.into();
        let name = name.into();

        for segment in [&catalog, &schema, &name] {
            if !is_valid_segment(segment) {
                return Err(AppError::InvalidModelName(format!(
                    "{}.{}.{}",
                    catalog, schema, name
                )));
            }
        }

        Ok(Self { catalog, schema, name })
    }

    /// Parse a dotted `catalog.schema.name` string.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let segments: Vec<&str> = raw.split('.').collect();
        match segments.as_slice() {
            [catalog, schema, name] => Self::new(*catalog, *schema, *name),
            _ => Err(AppError::InvalidModelName(raw.to_string())),
        }
    }

    pub fn catalog(&self) -> &str {
        &self.catalog
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for QualifiedModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.catalog, self.schema, self.name)
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
