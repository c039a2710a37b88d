//! String-encoded optional scalars
//!
//! Schema attributes that must distinguish "unset" from zero are stored as
//! strings, with the empty string meaning null.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{NullableError, NullableKind};

/// Parse a boolean the way the provider configuration language does
pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

macro_rules! nullable_type {
    ($(#[$meta:meta])* $name:ident, $inner:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// The null value
            #[must_use]
            pub const fn null() -> Self {
                Self(String::new())
            }

            /// Whether the value is unset
            #[must_use]
            pub fn is_null(&self) -> bool {
                self.0.is_empty()
            }

            /// The raw string, empty when null
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self::new(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

nullable_type!(
    /// Optional 64-bit integer
    Int,
    i64
);

nullable_type!(
    /// Optional 64-bit float
    Float,
    f64
);

nullable_type!(
    /// Optional boolean
    Bool,
    bool
);

impl Int {
    /// A non-null value
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value.to_string())
    }

    /// The integer value, or `None` when null
    ///
    /// # Errors
    ///
    /// Returns `NullableError::Parse` if the string is not a valid integer.
    pub fn value(&self) -> Result<Option<i64>, NullableError> {
        if self.is_null() {
            return Ok(None);
        }
        self.0
            .parse::<i64>()
            .map(Some)
            .map_err(|e| NullableError::parse("value", &self.0, NullableKind::Int, &e.to_string()))
    }
}

impl Float {
    /// A non-null value
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value.to_string())
    }

    /// The float value, or `None` when null
    ///
    /// # Errors
    ///
    /// Returns `NullableError::Parse` if the string is not a valid float.
    pub fn value(&self) -> Result<Option<f64>, NullableError> {
        if self.is_null() {
            return Ok(None);
        }
        self.0
            .parse::<f64>()
            .map(Some)
            .map_err(|e| NullableError::parse("value", &self.0, NullableKind::Float, &e.to_string()))
    }
}

impl Bool {
    /// A non-null value
    #[must_use]
    pub fn new(value: bool) -> Self {
        Self(value.to_string())
    }

    /// The boolean value, or `None` when null
    ///
    /// # Errors
    ///
    /// Returns `NullableError::Parse` if the string is not a recognised boolean.
    pub fn value(&self) -> Result<Option<bool>, NullableError> {
        if self.is_null() {
            return Ok(None);
        }
        parse_bool(&self.0).map(Some).ok_or_else(|| {
            NullableError::parse("value", &self.0, NullableKind::Bool, "invalid syntax")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_value() {
        assert_eq!(Int::null().value(), Ok(None));
        assert_eq!(Int::from("").value(), Ok(None));
        assert_eq!(Int::from("0").value(), Ok(Some(0)));
        assert_eq!(Int::from("-42").value(), Ok(Some(-42)));
        assert_eq!(Int::new(7).value(), Ok(Some(7)));
        assert!(matches!(Int::from("1.5").value(), Err(NullableError::Parse { .. })));
        assert!(matches!(Int::from("abc").value(), Err(NullableError::Parse { .. })));
    }

    #[test]
    fn test_float_value() {
        assert_eq!(Float::null().value(), Ok(None));
        assert_eq!(Float::from("0").value(), Ok(Some(0.0)));
        assert_eq!(Float::from("1.5").value(), Ok(Some(1.5)));
        assert_eq!(Float::new(-2.25).value(), Ok(Some(-2.25)));
        assert!(Float::from("one").value().is_err());
    }

    #[test]
    fn test_bool_value() {
        assert_eq!(Bool::null().value(), Ok(None));
        assert_eq!(Bool::from("true").value(), Ok(Some(true)));
        assert_eq!(Bool::from("F").value(), Ok(Some(false)));
        assert_eq!(Bool::from("1").value(), Ok(Some(true)));
        assert_eq!(Bool::new(false).value(), Ok(Some(false)));
        assert!(Bool::from("yes").value().is_err());
    }

    #[test]
    fn test_is_null() {
        assert!(Int::default().is_null());
        assert!(!Int::new(0).is_null());
        assert!(!Float::new(0.0).is_null());
        assert!(!Bool::new(false).is_null());
    }

    #[test]
    fn test_display_and_serde() {
        let value = Int::new(12);
        assert_eq!(value.to_string(), "12");
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"12\"");
        let restored: Int = serde_json::from_str("\"\"").unwrap();
        assert!(restored.is_null());
    }
}
