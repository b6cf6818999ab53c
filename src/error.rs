//! Error types for option-list and alias operations.
//!
//! This module provides the [`OptionsError`] type for all library operations
//! and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all option-list and alias operations.
///
/// Absent keys are not errors: point lookups signal absence with `None`.
/// Failures from caller-supplied generators are carried unchanged in the
/// [`Generator`](OptionsError::Generator) variant.
#[derive(Error, Debug)]
pub enum OptionsError {
    /// Error parsing JSON row data.
    #[error("invalid row data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Error indicating a field value outside the supported scalar range.
    #[error("unsupported field value: {0}")]
    InvalidValue(String),

    /// Error indicating that no alias could be derived from the named
    /// source field.
    #[error("no alias could be derived from field '{0}'")]
    EmptyAlias(String),

    /// Failure reported by a caller-supplied alias generator.
    #[error("alias generation failed: {0}")]
    Generator(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Convenience type alias for [`std::result::Result`] with [`OptionsError`].
pub type Result<T> = std::result::Result<T, OptionsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = OptionsError::InvalidValue("non-integer number: 1.5".to_string());
        assert_eq!(
            err.to_string(),
            "unsupported field value: non-integer number: 1.5"
        );

        let err = OptionsError::EmptyAlias("title".to_string());
        assert_eq!(
            err.to_string(),
            "no alias could be derived from field 'title'"
        );
    }

    #[test]
    fn test_parse_error_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = OptionsError::from(json_err);
        assert!(err.to_string().starts_with("invalid row data:"));
    }

    #[test]
    fn test_generator_error_preserves_source() {
        let err = OptionsError::Generator("backend unavailable".into());
        assert_eq!(
            err.to_string(),
            "alias generation failed: backend unavailable"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
