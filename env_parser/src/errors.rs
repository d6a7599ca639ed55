//! Error type returned by every getter.

use thiserror::Error;

/// Failure raised by an [`EnvParser`](crate::EnvParser) getter.
///
/// The `Display` text of every variant is stable; callers and tests match on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// A required variable is not set.
    #[error("environment variable {name} is missing")]
    Missing {
        /// Variable name.
        name: String,
    },

    /// The value is present but does not match the supplied pattern.
    ///
    /// `pattern` holds the rendered pattern, e.g. `/^[a-z]+$/`.
    #[error("environment variable {name} does not match pattern {pattern}")]
    PatternMismatch {
        /// Variable name.
        name: String,
        /// Rendered pattern.
        pattern: String,
    },

    /// The value is not a strict decimal integer within the safe range.
    #[error("environment variable {name} is not a safe integer")]
    NotAnInteger {
        /// Variable name.
        name: String,
    },

    /// The parsed integer is smaller than the configured minimum.
    #[error("environment variable {name} must be >= {min}")]
    BelowMinimum {
        /// Variable name.
        name: String,
        /// Inclusive lower bound.
        min: i64,
    },

    /// The parsed integer is larger than the configured maximum.
    #[error("environment variable {name} must be <= {max}")]
    AboveMaximum {
        /// Variable name.
        name: String,
        /// Inclusive upper bound.
        max: i64,
    },

    /// The value is not one of the allowed values.
    ///
    /// `allowed` is the JSON rendering of the allowed list, e.g. `["a","b"]`.
    #[error("environment variable {name} must be one of {allowed}")]
    NotAllowed {
        /// Variable name.
        name: String,
        /// JSON array of the allowed values.
        allowed: String,
    },
}

impl EnvError {
    /// Name of the variable the error refers to.
    pub fn name(&self) -> &str {
        match self {
            Self::Missing { name }
            | Self::PatternMismatch { name, .. }
            | Self::NotAnInteger { name }
            | Self::BelowMinimum { name, .. }
            | Self::AboveMaximum { name, .. }
            | Self::NotAllowed { name, .. } => name,
        }
    }

    pub(crate) fn not_allowed<T: AsRef<str>>(name: &str, allowed: &[T]) -> Self {
        let values: Vec<&str> = allowed.iter().map(AsRef::as_ref).collect();
        // Serializing a slice of &str cannot fail.
        let allowed = serde_json::to_string(&values).unwrap_or_default();
        Self::NotAllowed {
            name: name.to_string(),
            allowed,
        }
    }
}
