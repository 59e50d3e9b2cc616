//! Trigonometric wrappers that snap near-zero results to exactly zero.
//!
//! `sin(PI)` evaluates to about `1.2e-16` rather than zero, which then leaks
//! into formatted output as `-00:00:00.00`. These wrappers return exactly
//! `0.0` for any result within [`SNAP_TOLERANCE`] of zero. Arguments are in
//! radians.

use crate::constants::SNAP_TOLERANCE;

#[inline]
pub fn snap_to_zero(x: f64) -> f64 {
    if x.abs() < SNAP_TOLERANCE {
        0.0
    } else {
        x
    }
}

#[inline]
pub fn sin(radians: f64) -> f64 {
    snap_to_zero(libm::sin(radians))
}

#[inline]
pub fn cos(radians: f64) -> f64 {
    snap_to_zero(libm::cos(radians))
}

#[inline]
pub fn atan(x: f64) -> f64 {
    snap_to_zero(libm::atan(x))
}

#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    snap_to_zero(libm::atan2(y, x))
}
