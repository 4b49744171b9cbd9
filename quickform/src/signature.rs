//! Signature extraction: from a callable description to validated
//! parameters.
//!
//! There is no runtime reflection over Rust function signatures, so the
//! callable is described explicitly with [`CallableSpec`]. The raw
//! parameter source stays pluggable through
//! [`extract_parameters_with`], which lets tests substitute their own
//! extraction just like swapping the reflection source.

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

use crate::error::Result;
use crate::parameter::Parameter;
use crate::types::TypeSpec;

static DOCSTRING_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":param\s+(\w+):\s*(.+)").expect("docstring param regex"));

/// Raw metadata for one declared parameter, before validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawParameter {
    /// Parameter name
    pub name: String,
    /// Declared type
    pub type_spec: TypeSpec,
    /// Declared default; `None` means no default was declared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

/// An explicit description of a callable: its name, docstring, and
/// ordered parameter declarations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallableSpec {
    /// Callable name, used as the form name
    pub name: String,
    /// Docstring; `:param name: text` lines become per-field help
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Parameter declarations, declaration order
    pub parameters: Vec<RawParameter>,
}

impl CallableSpec {
    /// Start describing a callable.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            parameters: Vec::new(),
        }
    }

    /// Attach the callable's docstring.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Declare a parameter without a default.
    pub fn parameter(mut self, name: impl Into<String>, type_spec: TypeSpec) -> Self {
        self.parameters.push(RawParameter {
            name: name.into(),
            type_spec,
            default: None,
        });
        self
    }

    /// Declare a parameter with a default value.
    pub fn parameter_with_default(
        mut self,
        name: impl Into<String>,
        type_spec: TypeSpec,
        default: Value,
    ) -> Self {
        self.parameters.push(RawParameter {
            name: name.into(),
            type_spec,
            default: Some(default),
        });
        self
    }

    /// The docstring summary: the first non-empty line that is not a
    /// `:param:` or `:returns:` directive.
    pub fn doc_summary(&self) -> Option<String> {
        self.doc.as_deref().and_then(|doc| {
            doc.lines()
                .map(str::trim)
                .find(|line| !line.is_empty() && !line.starts_with(':'))
                .map(ToString::to_string)
        })
    }
}

/// Harvest `:param name: text` lines into a name-to-help lookup.
fn docstring_help(doc: Option<&str>) -> HashMap<String, String> {
    let Some(doc) = doc else {
        return HashMap::new();
    };
    DOCSTRING_PARAM
        .captures_iter(doc)
        .map(|captures| {
            (
                captures[1].to_string(),
                captures[2].trim().to_string(),
            )
        })
        .collect()
}

/// Extract the validated, ordered parameter sequence from a callable
/// description, pairing each declaration with docstring help where a
/// matching `:param:` line exists.
///
/// Output order is declaration order, never docstring order. Docstring
/// lines naming no declared parameter are ignored. Fails on the first
/// malformed declaration.
pub fn extract_parameters(callable: &CallableSpec) -> Result<Vec<Parameter>> {
    extract_parameters_with(callable, |spec| spec.parameters.clone())
}

/// Like [`extract_parameters`], with a substitutable raw-parameter
/// source.
pub fn extract_parameters_with<F>(callable: &CallableSpec, source: F) -> Result<Vec<Parameter>>
where
    F: Fn(&CallableSpec) -> Vec<RawParameter>,
{
    let help = docstring_help(callable.doc.as_deref());
    let raw = source(callable);
    debug!(
        callable = %callable.name,
        parameters = raw.len(),
        "extracting signature parameters"
    );

    raw.into_iter()
        .map(|parameter| {
            let help_text = help.get(&parameter.name).cloned();
            Parameter::new(
                parameter.name,
                parameter.type_spec,
                help_text,
                parameter.default,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConversionError;
    use serde_json::json;

    fn copy_file_spec() -> CallableSpec {
        CallableSpec::new("copy_file")
            .doc(
                "Copy a file several times\n\
                 \n\
                 :param file: Filepath to copy from\n\
                 :param copy_count: How many copies to produce\n\
                 :returns: nothing\n",
            )
            .parameter("file", TypeSpec::file())
            .parameter("new_filename", TypeSpec::string())
            .parameter_with_default("copy_count", TypeSpec::integer(), json!(1))
    }

    #[test]
    fn test_extraction_preserves_declaration_order() {
        let parameters = extract_parameters(&copy_file_spec()).unwrap();
        let names: Vec<&str> = parameters.iter().map(Parameter::name).collect();
        assert_eq!(names, vec!["file", "new_filename", "copy_count"]);
    }

    #[test]
    fn test_docstring_help_is_matched_by_name() {
        let parameters = extract_parameters(&copy_file_spec()).unwrap();
        assert_eq!(parameters[0].help(), Some("Filepath to copy from"));
        assert_eq!(parameters[1].help(), None);
        assert_eq!(parameters[2].help(), Some("How many copies to produce"));
    }

    #[test]
    fn test_docstring_lines_without_declared_parameter_are_ignored() {
        let callable = CallableSpec::new("f")
            .doc(":param ghost: no such parameter\n:param real: exists")
            .parameter("real", TypeSpec::string());
        let parameters = extract_parameters(&callable).unwrap();
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters[0].help(), Some("exists"));
    }

    #[test]
    fn test_defaults_flow_through() {
        let parameters = extract_parameters(&copy_file_spec()).unwrap();
        assert_eq!(parameters[2].default(), Some(&json!(1)));
    }

    #[test]
    fn test_malformed_declaration_fails_extraction() {
        let callable = CallableSpec::new("f")
            .parameter("ok", TypeSpec::string())
            .parameter("bad_flag", TypeSpec::Boolean);
        let err = extract_parameters(&callable).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::InvalidDeclaration { ref name, .. } if name == "bad_flag"
        ));
    }

    #[test]
    fn test_pluggable_source_replaces_declared_parameters() {
        let callable = CallableSpec::new("f").doc(":param injected: from the source");
        let parameters = extract_parameters_with(&callable, |_| {
            vec![RawParameter {
                name: "injected".to_string(),
                type_spec: TypeSpec::string(),
                default: None,
            }]
        })
        .unwrap();
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters[0].name(), "injected");
        assert_eq!(parameters[0].help(), Some("from the source"));
    }

    #[test]
    fn test_doc_summary_skips_directives() {
        assert_eq!(
            copy_file_spec().doc_summary().as_deref(),
            Some("Copy a file several times")
        );
        assert_eq!(CallableSpec::new("f").doc_summary(), None);
    }
}
