// SPDX-License-Identifier: Apache-2.0

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

/// Shared numeric input rule: required, finite, non-negative. Violations
/// name the offending field and are never silently corrected.
pub fn require_non_negative(field: &str, value: Option<f64>) -> Result<f64, ValidationError> {
    let v = value.ok_or_else(|| ValidationError(format!("{field} is required")))?;
    if !v.is_finite() {
        return Err(ValidationError(format!("{field} must be a finite number")));
    }
    if v < 0.0 {
        return Err(ValidationError(format!("{field} must not be negative")));
    }
    Ok(v)
}

/// Optional percentage in `0..=100`; absent means 0.
pub fn optional_percentage(field: &str, value: Option<f64>) -> Result<f64, ValidationError> {
    let Some(v) = value else { return Ok(0.0) };
    if !v.is_finite() {
        return Err(ValidationError(format!("{field} must be a finite number")));
    }
    if !(0.0..=100.0).contains(&v) {
        return Err(ValidationError(format!(
            "{field} must be between 0 and 100"
        )));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_names_the_field() {
        let err = require_non_negative("quantity", None).unwrap_err();
        assert_eq!(err.0, "quantity is required");
    }

    #[test]
    fn negative_and_non_finite_are_rejected_not_clamped() {
        assert!(require_non_negative("distance", Some(-1.0)).is_err());
        assert!(require_non_negative("distance", Some(f64::NAN)).is_err());
        assert!(require_non_negative("distance", Some(f64::INFINITY)).is_err());
        assert_eq!(require_non_negative("distance", Some(0.0)).unwrap(), 0.0);
    }

    #[test]
    fn percentage_bounds_are_enforced() {
        assert_eq!(optional_percentage("biofuel_blend", None).unwrap(), 0.0);
        assert_eq!(
            optional_percentage("biofuel_blend", Some(100.0)).unwrap(),
            100.0
        );
        assert!(optional_percentage("biofuel_blend", Some(100.1)).is_err());
        assert!(optional_percentage("biofuel_blend", Some(-0.1)).is_err());
    }
}
