//! Angle helpers shared by the coordinate value types and frame kernels.
//!
//! Angles travel through this crate as plain `f64` degrees. This module holds
//! the unit conversions, the RA/Dec normalization rules and snapping trig
//! wrappers used around them.

mod normalize;
mod trig;

pub use normalize::{normalize_dec, normalize_ra};
pub use trig::{atan, atan2, cos, sin, snap_to_zero};

use crate::constants::{DEGREES_PER_HOUR, DEG_TO_RAD, RAD_TO_DEG};

#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}

#[inline]
pub fn hours_to_deg(hours: f64) -> f64 {
    hours * DEGREES_PER_HOUR
}

#[inline]
pub fn deg_to_hours(degrees: f64) -> f64 {
    degrees / DEGREES_PER_HOUR
}
