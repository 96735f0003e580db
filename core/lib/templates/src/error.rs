use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Placeholder '{{{{ {0} }}}}' is used in the template, but no value is provided for it")]
    UnresolvedPlaceholder(String),
    #[error("Cannot build the pattern for placeholder '{key}': {source}")]
    InvalidPattern {
        key: String,
        #[source]
        source: regex::Error,
    },
}
