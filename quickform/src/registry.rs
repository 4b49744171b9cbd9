//! The conversion rule registry.
//!
//! A [`ConversionRegistry`] is the immutable table mapping each recognized
//! scalar and semantic path type to its base widget template. It is built
//! once, injected into the conversion entry points, and never mutated, so
//! it can be shared freely across concurrent conversions.

use serde::{Deserialize, Serialize};

use crate::types::{PathKind, ScalarKind, TypeSpec};

/// The wildcard arm that every file filter falls back to.
pub const ALL_FILES_WILDCARD: &str = "All files (*.*)|*.*";

/// The kind of input control a descriptor asks the form builder to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    /// Plain text entry
    TextField,
    /// Whole number entry
    IntegerField,
    /// Floating point entry
    DecimalField,
    /// Calendar date picker
    DateChooser,
    /// Time-of-day picker
    TimeChooser,
    /// Single file picker
    FileChooser,
    /// Directory picker
    DirChooser,
    /// Save-target picker
    FileSaver,
    /// Multi-select file picker
    MultiFileChooser,
    /// Boolean toggle
    CheckBox,
    /// Selection from a fixed set of choices
    Dropdown,
}

/// How collected input text parses back into a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueParser {
    /// Pass the text through unchanged
    Identity,
    /// Parse as a whole number
    Integer,
    /// Parse as a floating point number
    Decimal,
    /// Parse as an ISO 8601 date
    IsoDate,
    /// Parse as an ISO 8601 time
    IsoTime,
    /// Wrap the text as a filesystem path
    Path,
    /// Look the text up among the descriptor's choices, case-sensitive
    EnumMember,
}

/// A type-specific widget template before cross-cutting attributes are
/// merged in by the assembler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetTemplate {
    /// Widget to render
    pub kind: WidgetKind,
    /// How collected text parses
    pub parser: ValueParser,
    /// File filter for path widgets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wildcard: Option<String>,
}

impl WidgetTemplate {
    fn new(kind: WidgetKind, parser: ValueParser) -> Self {
        Self {
            kind,
            parser,
            wildcard: None,
        }
    }

    fn with_wildcard(mut self, wildcard: String) -> Self {
        self.wildcard = Some(wildcard);
        self
    }
}

/// Base categories recognized beyond the direct registry entries.
///
/// Resolved by the classifier after direct lookup fails, in registration
/// order. Currently only enumerations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaseCategory {
    /// Enumeration types: rendered as a dropdown over the declared members
    Enumeration,
}

/// Read-only mapping from recognized types to widget templates.
#[derive(Debug, Clone)]
pub struct ConversionRegistry {
    base_categories: Vec<BaseCategory>,
}

impl ConversionRegistry {
    /// The standard registry covering every recognized scalar and path
    /// type, with enumerations as the only registered base category.
    pub fn standard() -> Self {
        Self {
            base_categories: vec![BaseCategory::Enumeration],
        }
    }

    /// Base categories checked after direct lookup, in order.
    pub fn base_categories(&self) -> &[BaseCategory] {
        &self.base_categories
    }

    /// The template for a scalar kind. Every scalar kind has one.
    pub fn scalar_template(&self, kind: ScalarKind) -> WidgetTemplate {
        match kind {
            ScalarKind::String => WidgetTemplate::new(WidgetKind::TextField, ValueParser::Identity),
            ScalarKind::Integer => {
                WidgetTemplate::new(WidgetKind::IntegerField, ValueParser::Integer)
            }
            ScalarKind::Decimal => {
                WidgetTemplate::new(WidgetKind::DecimalField, ValueParser::Decimal)
            }
            ScalarKind::Date => WidgetTemplate::new(WidgetKind::DateChooser, ValueParser::IsoDate),
            ScalarKind::Time => WidgetTemplate::new(WidgetKind::TimeChooser, ValueParser::IsoTime),
        }
    }

    /// The template for a semantic path kind. File choosers carry a
    /// wildcard filter; extension-constrained files build theirs from the
    /// declared extensions with the all-files fallback appended.
    pub fn path_template(&self, kind: &PathKind) -> WidgetTemplate {
        match kind {
            PathKind::File => WidgetTemplate::new(WidgetKind::FileChooser, ValueParser::Path)
                .with_wildcard(ALL_FILES_WILDCARD.to_string()),
            PathKind::Directory => WidgetTemplate::new(WidgetKind::DirChooser, ValueParser::Path),
            PathKind::Save => WidgetTemplate::new(WidgetKind::FileSaver, ValueParser::Path),
            PathKind::FileWith { extensions } => {
                WidgetTemplate::new(WidgetKind::FileChooser, ValueParser::Path)
                    .with_wildcard(extension_wildcard(extensions))
            }
        }
    }

    /// Direct registry lookup: `Some` for scalars and paths, `None` for
    /// everything else.
    pub fn template_for(&self, type_spec: &TypeSpec) -> Option<WidgetTemplate> {
        match type_spec {
            TypeSpec::Scalar { scalar } => Some(self.scalar_template(*scalar)),
            TypeSpec::Path { path } => Some(self.path_template(path)),
            _ => None,
        }
    }

    /// The base category a type belongs to, if any.
    pub fn base_category_of(&self, type_spec: &TypeSpec) -> Option<BaseCategory> {
        self.base_categories
            .iter()
            .copied()
            .find(|category| match category {
                BaseCategory::Enumeration => matches!(type_spec, TypeSpec::Enum { .. }),
            })
    }
}

impl Default for ConversionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Build a Gooey-style wildcard filter from allowed extensions, always
/// terminated by the all-files fallback arm.
fn extension_wildcard(extensions: &[String]) -> String {
    let mut arms: Vec<String> = extensions
        .iter()
        .map(|ext| {
            format!(
                "{} files (*.{ext})|*.{ext}",
                ext.to_uppercase(),
            )
        })
        .collect();
    arms.push(ALL_FILES_WILDCARD.to_string());
    arms.join("|")
}
