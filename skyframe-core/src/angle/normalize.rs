//! Angle normalization for right ascension and declination, in degrees.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Right ascension, longitude | [0, 360) | [`normalize_ra`] |
//! | Declination, latitude | [-90, +90] | [`normalize_dec`] |
//!
//! # Folding vs Clamping
//!
//! Declination is *folded* rather than clamped: a declination of 100 degrees
//! becomes 80 degrees, which is the latitude reached by walking 10 degrees
//! past the pole. The longitude that goes with it is left alone, so callers
//! that fold a declination are responsible for the matching 180-degree shift
//! in right ascension if they need one.
//!
//! # Example
//!
//! ```
//! use skyframe_core::angle::{normalize_dec, normalize_ra};
//!
//! assert_eq!(normalize_ra(-90.0), 270.0);
//! assert_eq!(normalize_ra(359.9999999), 0.0);
//! assert_eq!(normalize_dec(100.0), 80.0);
//! assert_eq!(normalize_dec(-100.0), -80.0);
//! ```
//!
//! # Algorithm Notes
//!
//! Both functions reduce with `libm::fmod` (via [`crate::math::fmod`]) and then
//! shift negative remainders up by 360, since `fmod` keeps the sign of the
//! dividend.

use crate::constants::SNAP_TOLERANCE;
use crate::math::fmod;

/// Reduces an angle in degrees to [0, 360).
///
/// Results within [`SNAP_TOLERANCE`] of 0 or of 360 snap to exactly 0.0,
/// so values that differ from a full turn only by rounding noise compare
/// equal to zero.
#[inline]
pub fn normalize_ra(degrees: f64) -> f64 {
    let mut w = fmod(degrees, 360.0);
    if w < 0.0 {
        w += 360.0;
    }
    if w.abs() < SNAP_TOLERANCE || (360.0 - w).abs() < SNAP_TOLERANCE {
        0.0
    } else {
        w
    }
}

/// Folds an angle in degrees into [-90, +90].
///
/// The angle is first reduced to [0, 360). Above 270 it maps to `w - 360`;
/// between 90 and 270 it reflects through the pole to `180 - w`.
#[inline]
pub fn normalize_dec(degrees: f64) -> f64 {
    let mut w = fmod(degrees, 360.0);
    if w < 0.0 {
        w += 360.0;
    }
    if w > 270.0 {
        w - 360.0
    } else if w > 90.0 {
        180.0 - w
    } else {
        w
    }
}
