//! Semantic type descriptors for callable parameters.
//!
//! Rust has no runtime reflection over a callable's signature, so callers
//! describe each parameter's declared type explicitly with [`TypeSpec`].
//! The set of representable types is closed: the classifier resolves a
//! `TypeSpec` by ordered pattern matching, never by open-ended "is-a"
//! checks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive scalar kinds the conversion registry knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScalarKind {
    /// Free-form text
    String,
    /// Whole numbers
    Integer,
    /// Floating point numbers
    Decimal,
    /// Calendar date (ISO 8601)
    Date,
    /// Time of day (ISO 8601)
    Time,
}

impl ScalarKind {
    /// Stable display name used in error messages and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Integer => "integer",
            ScalarKind::Decimal => "decimal",
            ScalarKind::Date => "date",
            ScalarKind::Time => "time",
        }
    }
}

/// A path type carrying extra meaning beyond "is a filesystem path".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PathKind {
    /// Any existing file
    File,
    /// A directory
    Directory,
    /// A save target; the file need not exist yet
    Save,
    /// A file restricted to a set of extensions
    FileWith {
        /// Allowed extensions, without the leading dot
        extensions: Vec<String>,
    },
}

/// The declared type of one callable parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TypeSpec {
    /// A primitive scalar
    Scalar {
        /// Which scalar
        scalar: ScalarKind,
    },
    /// A boolean toggle
    Boolean,
    /// A semantic path type
    Path {
        /// Which path flavor
        path: PathKind,
    },
    /// A union with null. `alternatives` holds the non-null arms; a valid
    /// declaration has exactly one.
    Optional {
        /// The non-null alternative types
        alternatives: Vec<TypeSpec>,
    },
    /// A homogeneous collection
    List {
        /// The element type
        element: Box<TypeSpec>,
    },
    /// An enumeration with named members in declaration order
    Enum {
        /// Type name of the enumeration
        name: String,
        /// Member names, declaration order
        members: Vec<String>,
    },
    /// A key-value mapping. Never convertible; kept representable so the
    /// classifier can reject it deliberately.
    Map,
    /// Any other named type this crate does not recognize
    Other {
        /// Display name of the unrecognized type
        name: String,
    },
}

impl TypeSpec {
    /// A free-form string parameter.
    pub fn string() -> Self {
        TypeSpec::Scalar {
            scalar: ScalarKind::String,
        }
    }

    /// An integer parameter.
    pub fn integer() -> Self {
        TypeSpec::Scalar {
            scalar: ScalarKind::Integer,
        }
    }

    /// A decimal parameter.
    pub fn decimal() -> Self {
        TypeSpec::Scalar {
            scalar: ScalarKind::Decimal,
        }
    }

    /// A calendar date parameter.
    pub fn date() -> Self {
        TypeSpec::Scalar {
            scalar: ScalarKind::Date,
        }
    }

    /// A time-of-day parameter.
    pub fn time() -> Self {
        TypeSpec::Scalar {
            scalar: ScalarKind::Time,
        }
    }

    /// An unrestricted file path parameter.
    pub fn file() -> Self {
        TypeSpec::Path {
            path: PathKind::File,
        }
    }

    /// A directory path parameter.
    pub fn directory() -> Self {
        TypeSpec::Path {
            path: PathKind::Directory,
        }
    }

    /// A save-target path parameter.
    pub fn save() -> Self {
        TypeSpec::Path {
            path: PathKind::Save,
        }
    }

    /// A file path restricted to the given extensions.
    pub fn file_with<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TypeSpec::Path {
            path: PathKind::FileWith {
                extensions: extensions.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// An optional wrapping of a single inner type.
    pub fn optional(inner: TypeSpec) -> Self {
        TypeSpec::Optional {
            alternatives: vec![inner],
        }
    }

    /// A list of the given element type.
    pub fn list(element: TypeSpec) -> Self {
        TypeSpec::List {
            element: Box::new(element),
        }
    }

    /// An enumeration with the given name and members.
    pub fn enumeration<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TypeSpec::Enum {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// True for the boolean type.
    pub fn is_boolean(&self) -> bool {
        matches!(self, TypeSpec::Boolean)
    }

    /// True for optional-wrapped types.
    pub fn is_optional(&self) -> bool {
        matches!(self, TypeSpec::Optional { .. })
    }

    /// True for list-wrapped types.
    pub fn is_list(&self) -> bool {
        matches!(self, TypeSpec::List { .. })
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSpec::Scalar { scalar } => f.write_str(scalar.as_str()),
            TypeSpec::Boolean => f.write_str("boolean"),
            TypeSpec::Path { path } => match path {
                PathKind::File => f.write_str("file"),
                PathKind::Directory => f.write_str("directory"),
                PathKind::Save => f.write_str("save-target"),
                PathKind::FileWith { extensions } => {
                    write!(f, "file[{}]", extensions.join(","))
                }
            },
            TypeSpec::Optional { alternatives } => {
                let inner: Vec<String> = alternatives.iter().map(ToString::to_string).collect();
                write!(f, "optional<{}>", inner.join(" | "))
            }
            TypeSpec::List { element } => write!(f, "list<{element}>"),
            TypeSpec::Enum { name, .. } => f.write_str(name),
            TypeSpec::Map => f.write_str("map"),
            TypeSpec::Other { name } => f.write_str(name),
        }
    }
}
