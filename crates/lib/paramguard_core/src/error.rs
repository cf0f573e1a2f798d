//! Validation error types.

use thiserror::Error;

/// Convenience alias for validation results.
pub type Result<T> = core::result::Result<T, ValidationError>;

/// Raised on the first unmet requirement found while validating arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required parameter or body property has no key in the arguments.
    #[error("{0} is a required parameter")]
    MissingRequiredParameter(String),
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingRequiredParameter(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_message_names_the_field() {
        let err = ValidationError::MissingRequiredParameter("repo".into());
        assert_eq!(err.to_string(), "repo is a required parameter");
        assert_eq!(err.field(), "repo");
    }
}
