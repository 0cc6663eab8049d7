//! Stable, machine-readable codes for summary spec diagnostics.

use serde::Serialize;

/// Diagnostic code attached to every [`SpecError`](super::errors::SpecError).
///
/// Serialized in `snake_case`; the names are part of the JSON contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// `v` is not a supported spec version
    UnsupportedVersion,
    /// `strategy` names no known strategy
    UnsupportedStrategy,
    /// A numeric value is outside its allowed range
    InvalidValue,
    /// An option has no effect with the selected strategy
    IgnoredOption,
    /// A field the schema does not know
    UnknownField,
    /// Catch-all for custom rules
    ValidationFailed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion => "unsupported_version",
            Self::UnsupportedStrategy => "unsupported_strategy",
            Self::InvalidValue => "invalid_value",
            Self::IgnoredOption => "ignored_option",
            Self::UnknownField => "unknown_field",
            Self::ValidationFailed => "validation_failed",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
