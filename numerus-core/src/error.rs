//! Error types for plural-rule operations

use thiserror::Error;

/// Errors that can occur while detecting a plural category.
#[derive(Debug, Error)]
pub enum PluralError {
    /// Locale absent from the rule table
    #[error("locale {0} not supported")]
    LocaleNotSupported(String),

    /// Input string that is not a numeric literal
    #[error("invalid numeric literal {0}")]
    InvalidNumericLiteral(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PluralError::LocaleNotSupported("xx-FAKE".to_string());
        assert_eq!(err.to_string(), "locale xx-FAKE not supported");

        let err = PluralError::InvalidNumericLiteral("1.2.3".to_string());
        assert_eq!(err.to_string(), "invalid numeric literal 1.2.3");
    }
}
