//! Error types for configuration handling.
//!
//! The numeric core is total: curves, matrices and the photometric operators
//! clamp or saturate instead of failing. What can go wrong is a malformed
//! configuration, and [`Error`] describes those cases so they are rejected
//! once, at construction time.
//!
//! # Usage
//!
//! ```rust
//! use grade_core::{Error, GammaType};
//!
//! let err = GammaType::from_index(42).unwrap_err();
//! assert!(matches!(err, Error::IndexOutOfRange { index: 42, .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a grading configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A curve name did not match any [`crate::GammaType`].
    #[error("unknown transfer curve: '{0}'")]
    UnknownGamma(String),

    /// A gamut name did not match any [`crate::Gamut`].
    #[error("unknown gamut: '{0}'")]
    UnknownGamut(String),

    /// An enumerated option was addressed by an index past its last member.
    ///
    /// # Example
    ///
    /// ```rust
    /// use grade_core::Error;
    ///
    /// let err = Error::IndexOutOfRange { kind: "gamut", index: 15, count: 15 };
    /// assert_eq!(err.to_string(), "gamut index 15 out of range (0..15)");
    /// ```
    #[error("{kind} index {index} out of range (0..{count})")]
    IndexOutOfRange {
        /// Which enumeration was addressed
        kind: &'static str,
        /// Offending index
        index: usize,
        /// Number of members
        count: usize,
    },

    /// A numeric parameter lies outside its accepted range.
    #[error("invalid {name} = {value}: expected {expected}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Rejected value
        value: f32,
        /// Human-readable accepted range
        expected: &'static str,
    },
}

impl Error {
    /// Shorthand for [`Error::InvalidParameter`].
    pub fn invalid(name: &'static str, value: f32, expected: &'static str) -> Self {
        Self::InvalidParameter { name, value, expected }
    }

    /// Returns true for name lookups that failed.
    pub fn is_unknown_name(&self) -> bool {
        matches!(self, Self::UnknownGamma(_) | Self::UnknownGamut(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::invalid("knee", 0.5, "> 1");
        assert_eq!(err.to_string(), "invalid knee = 0.5: expected > 1");

        let err = Error::UnknownGamma("s-log9".into());
        assert!(err.to_string().contains("s-log9"));
        assert!(err.is_unknown_name());
    }
}
