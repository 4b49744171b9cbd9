//! Field descriptors: the output records of the conversion engine.
//!
//! One descriptor per parameter, in declaration order. The external form
//! builder renders one control per descriptor, pre-populates it from
//! `default` (or the boolean `initial_state` hint), and after user
//! interaction routes the collected value back to the callable under
//! `key`.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConversionError, Result};
use crate::registry::{ValueParser, WidgetKind};

/// Type-specific rendering and parsing hints for one input control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSpec {
    /// Widget to render
    pub kind: WidgetKind,
    /// How collected text parses back into a value
    pub parser: ValueParser,
    /// Allowed choices for enumeration widgets, declaration order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    /// File filter for path widgets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wildcard: Option<String>,
    /// True when the control collects several values
    #[serde(default)]
    pub multiple: bool,
    /// Starting state for boolean toggles. Boolean defaults live here,
    /// never in the descriptor's generic default channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_state: Option<bool>,
}

/// The normalized description of one input control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Routing identifier, equal to the parameter name
    pub key: String,
    /// Human-readable display name derived from the key
    pub label: String,
    /// False iff the parameter is boolean or optional-wrapped
    pub required: bool,
    /// The declared default, absent for booleans
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Help text harvested from the docstring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    /// Type-specific payload
    pub widget: WidgetSpec,
}

impl FieldDescriptor {
    /// The CLI switch form of the key: `person_name` becomes
    /// `--person-name`.
    pub fn cli_switch(&self) -> String {
        format!("--{}", self.key.replace('_', "-"))
    }

    /// Parse collected input text according to the descriptor's value
    /// parser. This is a convenience for the form builder; it parses
    /// values, it does not validate declarations.
    pub fn parse_input(&self, raw: &str) -> Result<Value> {
        match self.widget.parser {
            ValueParser::Identity => Ok(Value::String(raw.to_string())),
            ValueParser::Integer => {
                let parsed: i64 = raw.parse().map_err(|_| ConversionError::InvalidInput {
                    value: raw.to_string(),
                    expected: "integer".to_string(),
                })?;
                Ok(Value::Number(parsed.into()))
            }
            ValueParser::Decimal => {
                let parsed: f64 = raw.parse().map_err(|_| ConversionError::InvalidInput {
                    value: raw.to_string(),
                    expected: "decimal".to_string(),
                })?;
                serde_json::Number::from_f64(parsed)
                    .map(Value::Number)
                    .ok_or_else(|| ConversionError::InvalidInput {
                        value: raw.to_string(),
                        expected: "finite decimal".to_string(),
                    })
            }
            ValueParser::IsoDate => {
                let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                    ConversionError::InvalidInput {
                        value: raw.to_string(),
                        expected: "ISO date (YYYY-MM-DD)".to_string(),
                    }
                })?;
                Ok(Value::String(date.to_string()))
            }
            ValueParser::IsoTime => {
                let time = NaiveTime::parse_from_str(raw, "%H:%M:%S")
                    .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
                    .map_err(|_| ConversionError::InvalidInput {
                        value: raw.to_string(),
                        expected: "ISO time (HH:MM[:SS])".to_string(),
                    })?;
                Ok(Value::String(time.to_string()))
            }
            ValueParser::Path => Ok(Value::String(raw.to_string())),
            ValueParser::EnumMember => {
                let choices = self.widget.choices.as_deref().unwrap_or_default();
                if choices.iter().any(|choice| choice == raw) {
                    Ok(Value::String(raw.to_string()))
                } else {
                    Err(ConversionError::InvalidChoice {
                        value: raw.to_string(),
                        choices: choices.to_vec(),
                    })
                }
            }
        }
    }
}

/// Derive the display label from a parameter name: first letter
/// capitalized, underscores replaced with spaces.
pub(crate) fn humanize(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor(parser: ValueParser, choices: Option<Vec<String>>) -> FieldDescriptor {
        FieldDescriptor {
            key: "field".to_string(),
            label: "Field".to_string(),
            required: true,
            default: None,
            help: None,
            widget: WidgetSpec {
                kind: WidgetKind::TextField,
                parser,
                choices,
                wildcard: None,
                multiple: false,
                initial_state: None,
            },
        }
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("person_name"), "Person name");
        assert_eq!(humanize("file"), "File");
        assert_eq!(humanize("multi_word_param"), "Multi word param");
    }

    #[test]
    fn test_cli_switch() {
        let mut desc = descriptor(ValueParser::Identity, None);
        desc.key = "person_name".to_string();
        assert_eq!(desc.cli_switch(), "--person-name");
    }

    #[test]
    fn test_parse_integer_input() {
        let desc = descriptor(ValueParser::Integer, None);
        assert_eq!(desc.parse_input("42").unwrap(), json!(42));
        assert!(matches!(
            desc.parse_input("forty-two"),
            Err(ConversionError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_parse_decimal_input() {
        let desc = descriptor(ValueParser::Decimal, None);
        assert_eq!(desc.parse_input("1.5").unwrap(), json!(1.5));
        assert!(desc.parse_input("NaN").is_err());
    }

    #[test]
    fn test_parse_date_input() {
        let desc = descriptor(ValueParser::IsoDate, None);
        assert_eq!(desc.parse_input("2002-07-22").unwrap(), json!("2002-07-22"));
        assert!(desc.parse_input("22/07/2002").is_err());
    }

    #[test]
    fn test_parse_time_input() {
        let desc = descriptor(ValueParser::IsoTime, None);
        assert_eq!(desc.parse_input("21:37:10").unwrap(), json!("21:37:10"));
        assert_eq!(desc.parse_input("21:37").unwrap(), json!("21:37:00"));
        assert!(desc.parse_input("9 pm").is_err());
    }

    #[test]
    fn test_parse_enum_member_is_case_sensitive() {
        let desc = descriptor(
            ValueParser::EnumMember,
            Some(vec!["ONE".to_string(), "TWO".to_string()]),
        );
        assert_eq!(desc.parse_input("ONE").unwrap(), json!("ONE"));
        let err = desc.parse_input("one").unwrap_err();
        match err {
            ConversionError::InvalidChoice { value, choices } => {
                assert_eq!(value, "one");
                assert_eq!(choices, vec!["ONE", "TWO"]);
            }
            other => panic!("expected invalid choice, got {other:?}"),
        }
    }
}
