//! The validated parameter model.
//!
//! A [`Parameter`] is the semantic record of one callable argument: its
//! name, declared type, harvested help text, and default state. Every
//! construction path runs the declaration invariants, so a `Parameter`
//! value is proof that the declaration is well formed. Malformed
//! declarations never reach classification.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ConversionError, DeclarationRule, Result};
use crate::types::TypeSpec;

/// One callable argument, validated at construction.
///
/// The default state distinguishes "no default declared" (`None`, the
/// absent-sentinel) from an explicit default of no value
/// (`Some(Value::Null)`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    name: String,
    type_spec: TypeSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<Value>,
}

impl Parameter {
    /// Create a parameter and run the declaration invariants.
    ///
    /// Fails with [`ConversionError::InvalidDeclaration`] when:
    /// - the type is boolean and no default is declared
    /// - an optional wraps anything other than exactly one alternative
    /// - an optional wraps a boolean
    /// - an optional declares a non-null default
    pub fn new(
        name: impl Into<String>,
        type_spec: TypeSpec,
        help: Option<String>,
        default: Option<Value>,
    ) -> Result<Self> {
        let parameter = Self {
            name: name.into(),
            type_spec,
            help,
            default,
        };
        parameter.validate()?;
        Ok(parameter)
    }

    fn validate(&self) -> Result<()> {
        if let Some(rule) = self.violated_rule() {
            return Err(ConversionError::InvalidDeclaration {
                name: self.name.clone(),
                rule,
            });
        }
        Ok(())
    }

    fn violated_rule(&self) -> Option<DeclarationRule> {
        match &self.type_spec {
            TypeSpec::Boolean if !self.has_default() => {
                Some(DeclarationRule::BooleanWithoutDefault)
            }
            TypeSpec::Optional { alternatives } => {
                if alternatives.len() != 1 {
                    Some(DeclarationRule::OptionalAlternatives)
                } else if alternatives[0].is_boolean() {
                    Some(DeclarationRule::OptionalBool)
                } else if matches!(&self.default, Some(value) if !value.is_null()) {
                    Some(DeclarationRule::OptionalNonNullDefault)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// The parameter name, unique within one signature.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type.
    pub fn type_spec(&self) -> &TypeSpec {
        &self.type_spec
    }

    /// Help text harvested from the callable's docstring, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// The declared default value. `None` means no default was declared.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// True when the parameter will not be required: booleans carry
    /// implicit optionality through their default, and optional wrappers
    /// are optional by definition.
    pub fn is_optional(&self) -> bool {
        self.type_spec.is_boolean() || self.type_spec.is_optional()
    }

    /// True for list-wrapped declarations.
    pub fn is_list(&self) -> bool {
        self.type_spec.is_list()
    }

    /// True when a default was declared, including an explicit null.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rule_of(result: Result<Parameter>) -> DeclarationRule {
        match result {
            Err(ConversionError::InvalidDeclaration { rule, .. }) => rule,
            other => panic!("expected invalid declaration, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_scalar_parameter() {
        let param = Parameter::new("count", TypeSpec::integer(), None, None).unwrap();
        assert_eq!(param.name(), "count");
        assert!(!param.is_optional());
        assert!(!param.is_list());
        assert!(!param.has_default());
    }

    #[test]
    fn test_boolean_without_default_is_rejected() {
        let result = Parameter::new("verbose", TypeSpec::Boolean, None, None);
        assert_eq!(rule_of(result), DeclarationRule::BooleanWithoutDefault);
    }

    #[test]
    fn test_boolean_with_default_is_optional() {
        let param = Parameter::new("verbose", TypeSpec::Boolean, None, Some(json!(false))).unwrap();
        assert!(param.is_optional());
        assert!(param.has_default());
    }

    #[test]
    fn test_optional_with_one_alternative() {
        let param = Parameter::new(
            "backup",
            TypeSpec::optional(TypeSpec::file()),
            None,
            None,
        )
        .unwrap();
        assert!(param.is_optional());
    }

    #[test]
    fn test_optional_with_two_alternatives_is_rejected() {
        let spec = TypeSpec::Optional {
            alternatives: vec![TypeSpec::string(), TypeSpec::integer()],
        };
        let result = Parameter::new("value", spec, None, None);
        assert_eq!(rule_of(result), DeclarationRule::OptionalAlternatives);
    }

    #[test]
    fn test_optional_with_no_alternatives_is_rejected() {
        let spec = TypeSpec::Optional {
            alternatives: vec![],
        };
        let result = Parameter::new("value", spec, None, None);
        assert_eq!(rule_of(result), DeclarationRule::OptionalAlternatives);
    }

    #[test]
    fn test_optional_bool_is_rejected_regardless_of_default() {
        for default in [None, Some(json!(null)), Some(json!(true))] {
            let result = Parameter::new(
                "flag",
                TypeSpec::optional(TypeSpec::Boolean),
                None,
                default,
            );
            assert_eq!(rule_of(result), DeclarationRule::OptionalBool);
        }
    }

    #[test]
    fn test_optional_with_null_default_is_accepted() {
        let param = Parameter::new(
            "note",
            TypeSpec::optional(TypeSpec::string()),
            None,
            Some(json!(null)),
        )
        .unwrap();
        assert!(param.has_default());
        assert_eq!(param.default(), Some(&json!(null)));
    }

    #[test]
    fn test_optional_with_non_null_default_is_rejected() {
        let result = Parameter::new(
            "note",
            TypeSpec::optional(TypeSpec::string()),
            None,
            Some(json!("hello")),
        );
        assert_eq!(rule_of(result), DeclarationRule::OptionalNonNullDefault);
    }

    #[test]
    fn test_scalar_default_does_not_make_parameter_optional() {
        let param = Parameter::new("count", TypeSpec::integer(), None, Some(json!(1))).unwrap();
        assert!(!param.is_optional());
        assert!(param.has_default());
    }
}
