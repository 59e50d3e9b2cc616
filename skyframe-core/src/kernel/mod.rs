//! Frame conversion kernels.
//!
//! A [`FrameKernel`] supplies the six primitive conversions that the target
//! types chain together to move a position into or out of FK5/J2000:
//!
//! | Method | From | To |
//! |--------|------|----|
//! | [`fk4_to_fk5`](FrameKernel::fk4_to_fk5) | FK4 B1950 | FK5 J2000 |
//! | [`fk5_to_fk4`](FrameKernel::fk5_to_fk4) | FK5 J2000 | FK4 B1950 |
//! | [`precess_fk5`](FrameKernel::precess_fk5) | FK5 at one Julian epoch | FK5 at another |
//! | [`precess_fk4`](FrameKernel::precess_fk4) | FK4 at one Besselian epoch | FK4 at another |
//! | [`gal_to_fk5`](FrameKernel::gal_to_fk5) | IAU 1958 Galactic | FK5 J2000 |
//! | [`fk5_to_gal`](FrameKernel::fk5_to_gal) | FK5 J2000 | IAU 1958 Galactic |
//!
//! All positions are [`SkyPoint`]s in degrees. Proper motion, parallax and
//! radial velocity are not propagated. [`ClassicKernel`] is the built-in
//! implementation; callers with a different numerical library can implement
//! the trait themselves and pass it to the conversion methods.

mod classic;
mod rotation;

pub use classic::ClassicKernel;
pub use rotation::RotationMatrix3;

use crate::angle::{deg_to_rad, normalize_ra, rad_to_deg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A direction on the sky in degrees: right ascension and declination, or
/// Galactic longitude and latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkyPoint {
    pub lon: f64,
    pub lat: f64,
}

impl SkyPoint {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Unit Cartesian vector for this direction.
    pub fn to_unit_vector(self) -> [f64; 3] {
        let (lon, lat) = (deg_to_rad(self.lon), deg_to_rad(self.lat));
        let cos_lat = libm::cos(lat);
        [
            cos_lat * libm::cos(lon),
            cos_lat * libm::sin(lon),
            libm::sin(lat),
        ]
    }

    /// Direction of a Cartesian vector of any length. Longitude is returned in
    /// [0, 360).
    pub fn from_vector(v: [f64; 3]) -> Self {
        let rxy = libm::sqrt(v[0] * v[0] + v[1] * v[1]);
        let lon = if rxy == 0.0 { 0.0 } else { libm::atan2(v[1], v[0]) };
        let lat = if rxy == 0.0 && v[2] == 0.0 {
            0.0
        } else {
            libm::atan2(v[2], rxy)
        };
        Self {
            lon: normalize_ra(rad_to_deg(lon)),
            lat: rad_to_deg(lat),
        }
    }

    /// Great-circle distance to `other` in degrees.
    pub fn separation(self, other: SkyPoint) -> f64 {
        let a = self.to_unit_vector();
        let b = other.to_unit_vector();
        let cross = [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ];
        let sin = libm::sqrt(cross[0] * cross[0] + cross[1] * cross[1] + cross[2] * cross[2]);
        let cos = a[0] * b[0] + a[1] * b[1] + a[2] * b[2];
        rad_to_deg(libm::atan2(sin, cos))
    }
}

/// The primitive frame conversions used by target frame dispatch.
///
/// Epoch arguments are in years: Julian years for FK5, Besselian years for
/// FK4.
pub trait FrameKernel: Send + Sync {
    fn fk4_to_fk5(&self, p: SkyPoint) -> SkyPoint;

    fn fk5_to_fk4(&self, p: SkyPoint) -> SkyPoint;

    fn precess_fk5(&self, p: SkyPoint, from_epoch: f64, to_epoch: f64) -> SkyPoint;

    fn precess_fk4(&self, p: SkyPoint, from_epoch: f64, to_epoch: f64) -> SkyPoint;

    fn gal_to_fk5(&self, p: SkyPoint) -> SkyPoint;

    fn fk5_to_gal(&self, p: SkyPoint) -> SkyPoint;
}
