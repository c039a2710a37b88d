//! Nullable scalar attributes
//!
//! Numbers and booleans that must tell "unset" apart from zero or `false` are
//! carried as strings, where the empty string is null. This module provides
//! the wrapper types and the validators used on the raw attribute values.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use tagset::nullable::{Int, validate_type_string_nullable_int_between};
//!
//! assert_eq!(Int::from("").value().unwrap(), None);
//! assert_eq!(Int::from("5").value().unwrap(), Some(5));
//!
//! let validate = validate_type_string_nullable_int_between(1, 10);
//! let (_warnings, errors) = validate(&json!("11"), "retention_days");
//! assert_eq!(errors.len(), 1);
//! ```

pub mod error;
pub mod types;
pub mod validate;

pub use error::{NullableError, NullableKind};
pub use types::{Bool, Float, Int};
pub use validate::{
    Diagnostics, ValidateFn, validate_type_string_nullable_bool,
    validate_type_string_nullable_float, validate_type_string_nullable_float_at_least,
    validate_type_string_nullable_float_at_most, validate_type_string_nullable_float_between,
    validate_type_string_nullable_int, validate_type_string_nullable_int_at_least,
    validate_type_string_nullable_int_at_most, validate_type_string_nullable_int_between,
};
