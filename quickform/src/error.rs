//! Error types for signature conversion

use thiserror::Error;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConversionError>;

/// The declaration invariant a malformed parameter violated.
///
/// Carried inside [`ConversionError::InvalidDeclaration`] so callers can
/// match on the exact rule instead of parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeclarationRule {
    /// Booleans are rendered as toggles and are implicitly optional, so
    /// the declaration must say which state the toggle starts in.
    #[error("a boolean parameter must declare a default value")]
    BooleanWithoutDefault,

    /// Optional must wrap exactly one alternative type.
    #[error("an optional parameter must wrap exactly one alternative type")]
    OptionalAlternatives,

    /// Optional booleans are redundant: a boolean already expresses
    /// optionality through its default.
    #[error("optional booleans are not supported; declare a boolean with a default instead")]
    OptionalBool,

    /// An optional parameter's declared default may only be the explicit
    /// "no value provided" null.
    #[error("an optional parameter's default must be null")]
    OptionalNonNullDefault,
}

/// Errors that can occur while converting a signature into field descriptors
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The parameter declaration itself is malformed
    #[error("invalid declaration for parameter '{name}': {rule}")]
    InvalidDeclaration {
        /// Name of the offending parameter
        name: String,
        /// The declaration rule that was violated
        rule: DeclarationRule,
    },

    /// The declared type matches no registry entry and no registered base category
    #[error("parameter '{name}': type '{type_name}' cannot be translated into a widget")]
    UnsupportedType {
        /// Name of the offending parameter
        name: String,
        /// Display form of the declared type
        type_name: String,
    },

    /// A list-wrapped type whose element is not a supported multi-select shape
    #[error("parameter '{name}': a list of '{element}' cannot be translated into a multi-select widget")]
    UnsupportedListElement {
        /// Name of the offending parameter
        name: String,
        /// Display form of the list element type
        element: String,
    },

    /// Collected input text does not parse as the descriptor's value type
    #[error("input '{value}' is not a valid {expected}")]
    InvalidInput {
        /// The raw text that failed to parse
        value: String,
        /// What the parser expected
        expected: String,
    },

    /// Collected input text names no member of the descriptor's choices
    #[error("input '{value}' is not one of the allowed choices: {choices:?}")]
    InvalidChoice {
        /// The raw text that matched no choice
        value: String,
        /// The allowed choices
        choices: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_declaration_display() {
        let err = ConversionError::InvalidDeclaration {
            name: "verbose".into(),
            rule: DeclarationRule::BooleanWithoutDefault,
        };
        assert_eq!(
            err.to_string(),
            "invalid declaration for parameter 'verbose': a boolean parameter must declare a default value"
        );
    }

    #[test]
    fn test_unsupported_type_display() {
        let err = ConversionError::UnsupportedType {
            name: "mapping".into(),
            type_name: "map".into(),
        };
        assert!(err.to_string().contains("mapping"));
        assert!(err.to_string().contains("map"));
    }

    #[test]
    fn test_invalid_choice_display() {
        let err = ConversionError::InvalidChoice {
            value: "THREE".into(),
            choices: vec!["ONE".into(), "TWO".into()],
        };
        assert!(err.to_string().contains("THREE"));
        assert!(err.to_string().contains("ONE"));
    }
}
