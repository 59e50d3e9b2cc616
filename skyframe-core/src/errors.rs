//! Error types for target coordinate handling.
//!
//! This module provides [`TargetError`], the single error type returned by the
//! unit system, the sexagesimal formats, the coordinate value types and the
//! frame model. Every failure is returned to the caller; nothing is retried or
//! swallowed internally because every operation is a deterministic computation.
//!
//! # Error Categories
//!
//! | Variant | Raised by | Typical cause |
//! |---------|-----------|---------------|
//! | [`InvalidUnit`](TargetError::InvalidUnit) | [`Quantity`](crate::Quantity), coordinates | Unit outside the parameter's legal set |
//! | [`InvalidFrameOption`](TargetError::InvalidFrameOption) | frame options | Option name not legal for the frame kind |
//! | [`Parse`](TargetError::Parse) | formats, quantities | Malformed numeric or sexagesimal text |
//! | [`UnsupportedConversion`](TargetError::UnsupportedConversion) | frame conversion | e.g. Az/Alt to J2000 |
//!
//! # Usage
//!
//! ```
//! use skyframe_core::{TargetError, Units};
//!
//! fn require_degrees(units: Units) -> Result<(), TargetError> {
//!     if units != Units::Degrees {
//!         return Err(TargetError::invalid_unit(units, "inclination"));
//!     }
//!     Ok(())
//! }
//!
//! let err = require_degrees(Units::Radians).unwrap_err();
//! assert_eq!(err.to_string(), "Units `radians' not supported for inclination");
//! ```

use crate::units::Units;
use thiserror::Error;

/// Unified error type for units, formats, coordinates and frames.
///
/// Use the constructor methods ([`invalid_unit`](Self::invalid_unit),
/// [`parse`](Self::parse), etc.) for consistent error creation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TargetError {
    /// A unit was supplied that is not in the parameter's legal set.
    #[error("Units `{units}' not supported for {param}")]
    InvalidUnit { units: String, param: String },

    /// A frame option was supplied that is not legal for the frame kind.
    #[error("Frame option `{option}' not supported by {system}")]
    InvalidFrameOption { option: String, system: String },

    /// Numeric or sexagesimal text could not be parsed.
    #[error("Parse error in {context} for '{input}': {message}")]
    Parse {
        context: String,
        input: String,
        message: String,
    },

    /// The requested frame conversion is not implemented.
    #[error("Unsupported conversion from {from} to {to}")]
    UnsupportedConversion { from: String, to: String },
}

/// Convenience alias for `Result<T, TargetError>`.
pub type TargetResult<T> = Result<T, TargetError>;

impl TargetError {
    /// Creates an [`InvalidUnit`](Self::InvalidUnit) error.
    pub fn invalid_unit(units: Units, param: &str) -> Self {
        Self::InvalidUnit {
            units: units.name().to_string(),
            param: param.to_string(),
        }
    }

    /// Creates an [`InvalidFrameOption`](Self::InvalidFrameOption) error.
    pub fn invalid_frame_option(option: &str, system: &str) -> Self {
        Self::InvalidFrameOption {
            option: option.to_string(),
            system: system.to_string(),
        }
    }

    /// Creates a [`Parse`](Self::Parse) error.
    pub fn parse(context: &str, input: &str, reason: &str) -> Self {
        Self::Parse {
            context: context.to_string(),
            input: input.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates an [`UnsupportedConversion`](Self::UnsupportedConversion) error.
    pub fn unsupported_conversion(from: &str, to: &str) -> Self {
        Self::UnsupportedConversion {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Returns `true` for text-parsing failures, which a caller can fix by
    /// re-entering the value.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
