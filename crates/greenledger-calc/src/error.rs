// SPDX-License-Identifier: Apache-2.0

use greenledger_model::ValidationError;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalcErrorCode {
    Validation,
    UnknownFactor,
}

impl CalcErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation_error",
            Self::UnknownFactor => "unknown_factor",
        }
    }
}

/// Fatal to the single calculation call; callers surface it (typically as a
/// 4xx-equivalent). Degraded resolution is logged upstream, never raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcError {
    pub code: CalcErrorCode,
    pub message: String,
}

impl CalcError {
    #[must_use]
    pub fn new(code: CalcErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(CalcErrorCode::Validation, message)
    }

    #[must_use]
    pub fn unknown_factor(category: &str, subtype: &str) -> Self {
        Self::new(
            CalcErrorCode::UnknownFactor,
            format!("no emission factor found for {category}/{subtype}"),
        )
    }
}

impl Display for CalcError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for CalcError {}

impl From<ValidationError> for CalcError {
    fn from(value: ValidationError) -> Self {
        Self::validation(value.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_convert_with_message_intact() {
        let err: CalcError = ValidationError("quantity is required".to_string()).into();
        assert_eq!(err.code, CalcErrorCode::Validation);
        assert_eq!(err.to_string(), "validation_error: quantity is required");
    }

    #[test]
    fn unknown_factor_names_category_and_subtype() {
        let err = CalcError::unknown_factor("fuels", "kerosene");
        assert_eq!(err.code, CalcErrorCode::UnknownFactor);
        assert!(err.message.contains("fuels/kerosene"));
    }
}
