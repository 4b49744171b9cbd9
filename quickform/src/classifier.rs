//! Ordered classification of declared types.
//!
//! `classify` sorts a declared type into exactly one closed tag. The
//! order is fixed and significant: booleans first (never unwrapped
//! further), then the optional wrapper, then the list wrapper, then a
//! direct registry lookup, then the registered base categories. Anything
//! left over is unsupported.

use crate::error::{ConversionError, Result};
use crate::registry::{BaseCategory, ConversionRegistry, WidgetTemplate};
use crate::types::TypeSpec;

/// The closed tag a declared type resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification<'a> {
    /// A boolean toggle
    Boolean,
    /// An optional wrapper around one inner type
    Optional(&'a TypeSpec),
    /// A list wrapper around one element type
    List(&'a TypeSpec),
    /// A direct registry hit with its widget template
    Registered(WidgetTemplate),
    /// An enumeration: member names in declaration order
    Enumeration {
        /// Enumeration type name
        name: &'a str,
        /// Members, declaration order
        members: &'a [String],
    },
}

/// Classify a declared type, using `parameter_name` only for error context.
///
/// Assumes the declaration already passed parameter validation; an
/// optional here always wraps exactly one alternative.
pub fn classify<'a>(
    registry: &ConversionRegistry,
    parameter_name: &str,
    type_spec: &'a TypeSpec,
) -> Result<Classification<'a>> {
    if type_spec.is_boolean() {
        return Ok(Classification::Boolean);
    }

    if let TypeSpec::Optional { alternatives } = type_spec {
        // Arity was enforced at Parameter construction.
        return Ok(Classification::Optional(&alternatives[0]));
    }

    if let TypeSpec::List { element } = type_spec {
        return Ok(Classification::List(element));
    }

    if let Some(template) = registry.template_for(type_spec) {
        return Ok(Classification::Registered(template));
    }

    for category in registry.base_categories() {
        match category {
            BaseCategory::Enumeration => {
                if let TypeSpec::Enum { name, members } = type_spec {
                    return Ok(Classification::Enumeration { name, members });
                }
            }
        }
    }

    Err(ConversionError::UnsupportedType {
        name: parameter_name.to_string(),
        type_name: type_spec.to_string(),
    })
}
