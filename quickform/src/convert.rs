//! The conversion engine: composite handlers, descriptor assembly, and
//! the per-signature driver.
//!
//! Each parameter converts through a pure function chain: classify, then
//! resolve a widget spec (directly from the registry template or through
//! a composite handler), then merge in the cross-cutting attributes.
//! A signature converts sequentially in declaration order and stops at
//! the first failing parameter.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::classifier::{classify, Classification};
use crate::descriptor::{humanize, FieldDescriptor, WidgetSpec};
use crate::error::{ConversionError, Result};
use crate::parameter::Parameter;
use crate::registry::{ConversionRegistry, ValueParser, WidgetKind, WidgetTemplate};
use crate::signature::{extract_parameters, CallableSpec};
use crate::types::{PathKind, TypeSpec};

/// The converted form for one callable: its name, docstring summary, and
/// ordered field descriptors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSpec {
    /// Form name
    pub name: String,
    /// One-line description from the callable's docstring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Field descriptors, declaration order
    pub fields: Vec<FieldDescriptor>,
}

/// Convert one validated parameter into its field descriptor.
pub fn convert_parameter(
    registry: &ConversionRegistry,
    parameter: &Parameter,
) -> Result<FieldDescriptor> {
    match classify(registry, parameter.name(), parameter.type_spec())? {
        Classification::Boolean => Ok(assemble(parameter, boolean_widget(parameter))),
        Classification::Optional(inner) => convert_optional(registry, parameter, inner),
        Classification::List(element) => {
            let widget = list_widget(registry, parameter, element)?;
            Ok(assemble(parameter, widget))
        }
        Classification::Registered(template) => Ok(assemble(parameter, template_widget(template))),
        Classification::Enumeration { members, .. } => {
            Ok(assemble(parameter, enum_widget(members)))
        }
    }
}

/// Convert a whole callable signature, in declaration order, failing on
/// the first offending parameter.
pub fn convert_signature(
    registry: &ConversionRegistry,
    callable: &CallableSpec,
) -> Result<Vec<FieldDescriptor>> {
    let parameters = extract_parameters(callable)?;
    debug!(
        callable = %callable.name,
        parameters = parameters.len(),
        "converting signature"
    );
    parameters
        .iter()
        .map(|parameter| convert_parameter(registry, parameter))
        .collect()
}

/// Convert a callable into a named [`FormSpec`].
pub fn convert_callable(registry: &ConversionRegistry, callable: &CallableSpec) -> Result<FormSpec> {
    Ok(FormSpec {
        name: callable.name.clone(),
        description: callable.doc_summary(),
        fields: convert_signature(registry, callable)?,
    })
}

/// Convert several labeled callables into sub-forms, preserving label
/// order and failing on the first offending callable.
pub fn convert_group(
    registry: &ConversionRegistry,
    group: &[(String, CallableSpec)],
) -> Result<Vec<FormSpec>> {
    group
        .iter()
        .map(|(label, callable)| {
            Ok(FormSpec {
                name: label.clone(),
                description: callable.doc_summary(),
                fields: convert_signature(registry, callable)?,
            })
        })
        .collect()
}

/// Optional handler: convert a synthetic parameter of the inner type,
/// then mark the result not required. Never reached for booleans; those
/// are rejected at parameter construction.
fn convert_optional(
    registry: &ConversionRegistry,
    parameter: &Parameter,
    inner: &TypeSpec,
) -> Result<FieldDescriptor> {
    let synthetic = Parameter::new(
        parameter.name(),
        inner.clone(),
        parameter.help().map(ToString::to_string),
        parameter.default().cloned(),
    )?;
    let mut descriptor = convert_parameter(registry, &synthetic)?;
    descriptor.required = false;
    Ok(descriptor)
}

/// List handler: only generic files and extension-constrained files may
/// be collected as multi-select.
fn list_widget(
    registry: &ConversionRegistry,
    parameter: &Parameter,
    element: &TypeSpec,
) -> Result<WidgetSpec> {
    match element {
        TypeSpec::Path { path } if matches!(path, PathKind::File | PathKind::FileWith { .. }) => {
            let template = registry.path_template(path);
            Ok(WidgetSpec {
                kind: WidgetKind::MultiFileChooser,
                parser: template.parser,
                choices: None,
                wildcard: template.wildcard,
                multiple: true,
                initial_state: None,
            })
        }
        other => Err(ConversionError::UnsupportedListElement {
            name: parameter.name().to_string(),
            element: other.to_string(),
        }),
    }
}

/// Enum handler: the full ordered member set becomes the choices and the
/// value parser is a case-sensitive member lookup.
fn enum_widget(members: &[String]) -> WidgetSpec {
    WidgetSpec {
        kind: WidgetKind::Dropdown,
        parser: ValueParser::EnumMember,
        choices: Some(members.to_vec()),
        wildcard: None,
        multiple: false,
        initial_state: None,
    }
}

fn boolean_widget(parameter: &Parameter) -> WidgetSpec {
    WidgetSpec {
        kind: WidgetKind::CheckBox,
        parser: ValueParser::Identity,
        choices: None,
        wildcard: None,
        multiple: false,
        initial_state: parameter.default().and_then(Value::as_bool),
    }
}

fn template_widget(template: WidgetTemplate) -> WidgetSpec {
    WidgetSpec {
        kind: template.kind,
        parser: template.parser,
        choices: None,
        wildcard: template.wildcard,
        multiple: false,
        initial_state: None,
    }
}

/// Merge the cross-cutting attributes into the final descriptor.
///
/// Requiredness is false iff the parameter is boolean or optional; the
/// optional handler applies its override after recursion. A boolean's
/// default lives in the widget's `initial_state`, never in the generic
/// default channel.
fn assemble(parameter: &Parameter, widget: WidgetSpec) -> FieldDescriptor {
    let is_boolean = parameter.type_spec().is_boolean();
    FieldDescriptor {
        key: parameter.name().to_string(),
        label: humanize(parameter.name()),
        required: !parameter.is_optional(),
        default: if is_boolean {
            None
        } else {
            parameter.default().cloned()
        },
        help: parameter.help().map(ToString::to_string),
        widget,
    }
}
