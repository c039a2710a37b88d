//! Validate command - check a nullable attribute value

use serde_json::Value;

use crate::{
    TagsetError,
    cli::ValueKind,
    nullable::{self, Float, Int, ValidateFn},
};

type Result<T> = std::result::Result<T, TagsetError>;

fn int_bound(raw: Option<&str>) -> Result<Option<i64>> {
    raw.map_or(Ok(None), |s| Ok(Int::from(s).value()?))
}

fn float_bound(raw: Option<&str>) -> Result<Option<f64>> {
    raw.map_or(Ok(None), |s| Ok(Float::from(s).value()?))
}

/// Pick the validator for a kind and optional inclusive bounds
///
/// # Errors
/// Returns an error if a bound does not parse as the kind, or if bounds are
/// given for booleans
pub fn validator(kind: ValueKind, min: Option<&str>, max: Option<&str>) -> Result<ValidateFn> {
    let validate = match kind {
        ValueKind::Int => match (int_bound(min)?, int_bound(max)?) {
            (None, None) => nullable::validate_type_string_nullable_int(),
            (Some(min), None) => nullable::validate_type_string_nullable_int_at_least(min),
            (None, Some(max)) => nullable::validate_type_string_nullable_int_at_most(max),
            (Some(min), Some(max)) => nullable::validate_type_string_nullable_int_between(min, max),
        },
        ValueKind::Float => match (float_bound(min)?, float_bound(max)?) {
            (None, None) => nullable::validate_type_string_nullable_float(),
            (Some(min), None) => nullable::validate_type_string_nullable_float_at_least(min),
            (None, Some(max)) => nullable::validate_type_string_nullable_float_at_most(max),
            (Some(min), Some(max)) => {
                nullable::validate_type_string_nullable_float_between(min, max)
            }
        },
        ValueKind::Bool => {
            if min.is_some() || max.is_some() {
                return Err(TagsetError::InvalidInput(
                    "--min and --max do not apply to bool values".to_string(),
                ));
            }
            nullable::validate_type_string_nullable_bool()
        }
    };
    Ok(validate)
}

/// Run a validator and collect its error messages
///
/// # Errors
/// Returns `TagsetError::Validation` with every message if the value is invalid
pub fn check(validate: &ValidateFn, value: &str, key: &str) -> Result<Vec<String>> {
    let (warnings, errors) = validate(&Value::String(value.to_string()), key);
    for warning in &warnings {
        tracing::warn!(key, "{warning}");
    }
    if errors.is_empty() {
        Ok(warnings)
    } else {
        Err(TagsetError::Validation(
            errors.iter().map(ToString::to_string).collect(),
        ))
    }
}

/// Execute the validate command
///
/// # Errors
/// Returns an error if the bounds are invalid or the value fails validation
pub fn execute(
    value: &str,
    kind: ValueKind,
    min: Option<&str>,
    max: Option<&str>,
    key: &str,
    quiet: bool,
) -> Result<()> {
    let validate = validator(kind, min, max)?;
    check(&validate, value, key)?;

    if !quiet {
        if value.is_empty() {
            println!("{key} is unset");
        } else {
            println!("{key} is valid");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_between_out_of_range() {
        let validate = validator(ValueKind::Int, Some("1"), Some("1")).unwrap();
        let err = check(&validate, "2", "test_property").unwrap_err();
        match err {
            TagsetError::Validation(messages) => assert_eq!(
                messages,
                vec!["expected test_property to be in the range (1 - 1), got 2"]
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_value_is_valid() {
        let validate = validator(ValueKind::Float, Some("0.5"), None).unwrap();
        assert!(check(&validate, "", "ratio").unwrap().is_empty());
    }

    #[test]
    fn test_at_most() {
        let validate = validator(ValueKind::Int, None, Some("10")).unwrap();
        assert!(check(&validate, "-4", "count").is_ok());
        assert!(check(&validate, "11", "count").is_err());
    }

    #[test]
    fn test_bad_bound() {
        let err = validator(ValueKind::Int, Some("x"), None).err().unwrap();
        assert!(matches!(err, TagsetError::NullableError(_)));
    }

    #[test]
    fn test_bool_rejects_bounds() {
        assert!(validator(ValueKind::Bool, Some("1"), None).is_err());
        let validate = validator(ValueKind::Bool, None, None).unwrap();
        assert!(check(&validate, "True", "enabled").is_ok());
        assert!(check(&validate, "yes", "enabled").is_err());
    }
}
