//! Validators for nullable schema attributes
//!
//! A validator receives the raw, untyped attribute value and its key. It
//! collects warnings and errors instead of failing fast, so one pass over a
//! configuration can report every problem at once. An empty string is always
//! accepted because it means "unset".

use serde_json::Value;
use std::fmt::Display;
use std::str::FromStr;

use super::error::{NullableError, NullableKind};
use super::types::parse_bool;

/// Warnings and errors collected by a validator
pub type Diagnostics = (Vec<String>, Vec<NullableError>);

/// A validator for one attribute value
pub type ValidateFn = Box<dyn Fn(&Value, &str) -> Diagnostics + Send + Sync>;

#[derive(Debug, Clone, Copy)]
enum Range<T> {
    Any,
    AtLeast(T),
    AtMost(T),
    Between(T, T),
}

impl<T: PartialOrd + Copy> Range<T> {
    fn contains(self, v: T) -> bool {
        match self {
            Self::Any => true,
            Self::AtLeast(min) => v >= min,
            Self::AtMost(max) => v <= max,
            Self::Between(min, max) => v >= min && v <= max,
        }
    }

    fn describe(self, render: fn(T) -> String) -> String {
        match self {
            Self::Any => String::new(),
            Self::AtLeast(min) => format!("at least ({})", render(min)),
            Self::AtMost(max) => format!("at most ({})", render(max)),
            Self::Between(min, max) => format!("in the range ({} - {})", render(min), render(max)),
        }
    }
}

fn render_int(v: i64) -> String {
    v.to_string()
}

fn render_float(v: f64) -> String {
    format!("{v:.6}")
}

fn validate_number<T>(kind: NullableKind, range: Range<T>, render: fn(T) -> String) -> ValidateFn
where
    T: FromStr + PartialOrd + Copy + Send + Sync + 'static,
    T::Err: Display,
{
    Box::new(move |value: &Value, key: &str| -> Diagnostics {
        let Some(raw) = value.as_str() else {
            return (Vec::new(), vec![NullableError::WrongType { key: key.to_string() }]);
        };
        if raw.is_empty() {
            return (Vec::new(), Vec::new());
        }

        let errors = match raw.parse::<T>() {
            Err(e) => vec![NullableError::parse(key, raw, kind, &e.to_string())],
            Ok(v) if !range.contains(v) => vec![NullableError::OutOfRange {
                key: key.to_string(),
                bounds: range.describe(render),
                value: render(v),
            }],
            Ok(_) => Vec::new(),
        };
        (Vec::new(), errors)
    })
}

/// Accept null or any integer
#[must_use]
pub fn validate_type_string_nullable_int() -> ValidateFn {
    validate_number(NullableKind::Int, Range::Any, render_int)
}

/// Accept null or an integer no smaller than `min`
#[must_use]
pub fn validate_type_string_nullable_int_at_least(min: i64) -> ValidateFn {
    validate_number(NullableKind::Int, Range::AtLeast(min), render_int)
}

/// Accept null or an integer no larger than `max`
#[must_use]
pub fn validate_type_string_nullable_int_at_most(max: i64) -> ValidateFn {
    validate_number(NullableKind::Int, Range::AtMost(max), render_int)
}

/// Accept null or an integer within `min..=max`
#[must_use]
pub fn validate_type_string_nullable_int_between(min: i64, max: i64) -> ValidateFn {
    validate_number(NullableKind::Int, Range::Between(min, max), render_int)
}

/// Accept null or any float
#[must_use]
pub fn validate_type_string_nullable_float() -> ValidateFn {
    validate_number(NullableKind::Float, Range::Any, render_float)
}

/// Accept null or a float no smaller than `min`
#[must_use]
pub fn validate_type_string_nullable_float_at_least(min: f64) -> ValidateFn {
    validate_number(NullableKind::Float, Range::AtLeast(min), render_float)
}

/// Accept null or a float no larger than `max`
#[must_use]
pub fn validate_type_string_nullable_float_at_most(max: f64) -> ValidateFn {
    validate_number(NullableKind::Float, Range::AtMost(max), render_float)
}

/// Accept null or a float within `min..=max`
#[must_use]
pub fn validate_type_string_nullable_float_between(min: f64, max: f64) -> ValidateFn {
    validate_number(NullableKind::Float, Range::Between(min, max), render_float)
}

/// Accept null or a boolean literal
#[must_use]
pub fn validate_type_string_nullable_bool() -> ValidateFn {
    Box::new(|value: &Value, key: &str| -> Diagnostics {
        let Some(raw) = value.as_str() else {
            return (Vec::new(), vec![NullableError::WrongType { key: key.to_string() }]);
        };
        if raw.is_empty() || parse_bool(raw).is_some() {
            return (Vec::new(), Vec::new());
        }
        (
            Vec::new(),
            vec![NullableError::parse(key, raw, NullableKind::Bool, "invalid syntax")],
        )
    })
}
