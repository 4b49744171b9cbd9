//! Form field descriptors from callable signature schemas
//!
//! `quickform` translates an explicit description of a callable's
//! parameter signature into a normalized, validated sequence of field
//! descriptors. An external form or argument-parser builder renders one
//! input control per descriptor and, after user interaction, routes the
//! collected values back into the callable by parameter name.
//!
//! The crate owns the tricky part only: the type algebra over scalars,
//! booleans, optionals, lists, enumerations, and semantic path types,
//! with fail-fast rejection of illegal declarations. It renders no UI,
//! parses no argument vector, and never validates end-user input values.
//!
//! # Architecture
//!
//! - **Schema in**: [`CallableSpec`] describes the callable (no runtime
//!   reflection in Rust, so the schema is explicit and the raw-parameter
//!   source stays pluggable for tests)
//! - **Validated model**: [`Parameter`] enforces the declaration
//!   invariants at construction
//! - **Closed classification**: [`classify`] resolves each declared type
//!   by ordered pattern matching against the immutable
//!   [`ConversionRegistry`]
//! - **Descriptors out**: [`FieldDescriptor`] values in declaration
//!   order, one per parameter
//!
//! # Example
//!
//! ```rust
//! use quickform::{convert_signature, CallableSpec, ConversionRegistry, TypeSpec};
//! use serde_json::json;
//!
//! let registry = ConversionRegistry::standard();
//! let callable = CallableSpec::new("upload_file")
//!     .doc(":param file: file to upload")
//!     .parameter("file", TypeSpec::file())
//!     .parameter_with_default("count", TypeSpec::integer(), json!(1))
//!     .parameter_with_default("verbose", TypeSpec::Boolean, json!(false));
//!
//! let descriptors = convert_signature(&registry, &callable).unwrap();
//! assert_eq!(descriptors.len(), 3);
//! assert!(descriptors[0].required);
//! assert!(!descriptors[2].required);
//! ```

pub mod classifier;
pub mod convert;
pub mod descriptor;
pub mod error;
pub mod parameter;
pub mod registry;
pub mod signature;
pub mod types;

pub use classifier::{classify, Classification};
pub use convert::{convert_callable, convert_group, convert_parameter, convert_signature, FormSpec};
pub use descriptor::{FieldDescriptor, WidgetSpec};
pub use error::{ConversionError, DeclarationRule, Result};
pub use parameter::Parameter;
pub use registry::{
    BaseCategory, ConversionRegistry, ValueParser, WidgetKind, WidgetTemplate, ALL_FILES_WILDCARD,
};
pub use signature::{extract_parameters, extract_parameters_with, CallableSpec, RawParameter};
pub use types::{PathKind, ScalarKind, TypeSpec};
