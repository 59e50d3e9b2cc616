pub const DEGREES_PER_HOUR: f64 = 15.0;

pub const ARCSEC_PER_DEGREE: f64 = 3600.0;

pub const MILLIARCSEC_PER_ARCSEC: f64 = 1000.0;

pub const ANGSTROMS_PER_MICRON: f64 = 10_000.0;

/// Values within this distance of zero (or of a full turn) are snapped to zero.
pub const SNAP_TOLERANCE: f64 = 1e-6;

pub const J2000_EPOCH: f64 = 2000.0;

pub const B1950_EPOCH: f64 = 1950.0;

/// Reference epoch of the IAU 1958 Galactic system.
pub const IAU1958_EPOCH: f64 = 1958.0;

pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-6;
