use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Malformed deposit field {field}: expected {expected}, found {found}")]
    MalformedShape {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid deposit document: {0}")]
    InvalidDocument(String),

    #[error("Invalid work model: {0}")]
    InvalidWorkModel(String),
}

impl DomainError {
    pub fn malformed(field: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::MalformedShape {
            field: field.into(),
            expected,
            found,
        }
    }
}
