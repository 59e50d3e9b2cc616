//! The closed set of physical units a target parameter can carry.
//!
//! Units are identified by their display name, which is also the token used
//! in the `value[units]` export form of a [`Quantity`](crate::Quantity).
//! The declaration order is stable and is used for sorting.
//!
//! | Variant | Name | Family |
//! |---------|------|--------|
//! | `Angstroms` | `angstroms` | wavelength |
//! | `Arcsecs` | `arcsecs` | angle |
//! | `ArcsecsPerYear` | `arcsecs/year` | proper motion |
//! | `Au` | `au` | distance |
//! | `Degrees` | `degrees` | angle |
//! | `DegreesPerDay` | `degrees/day` | angular rate |
//! | `Hms` | `hours/minutes/seconds` | angle (hours) |
//! | `KmPerSec` | `km/sec` | velocity |
//! | `Microns` | `microns` | wavelength |
//! | `Radians` | `radians` | angle |
//! | `SecondsPerYear` | `seconds/year` | proper motion in time-seconds |
//! | `Years` | `years` | epoch |
//! | `MilliArcsecsPerYear` | `milli-arcsecs/year` | proper motion |
//! | `MilliArcsecs` | `milli-arcsecs` | angle |
//! | `Jd` | `JD` | epoch |
//!
//! Only the angular family (degrees, arcseconds, radians and hours) converts
//! between members through [`convert_between`].

use crate::constants::{
    ANGSTROMS_PER_MICRON, ARCSEC_PER_DEGREE, DEGREES_PER_HOUR, DEG_TO_RAD,
    MILLIARCSEC_PER_ARCSEC, RAD_TO_DEG,
};
use crate::errors::{TargetError, TargetResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Units {
    Angstroms,
    Arcsecs,
    ArcsecsPerYear,
    Au,
    Degrees,
    DegreesPerDay,
    /// Hours of right ascension (1h = 15 degrees).
    Hms,
    KmPerSec,
    Microns,
    Radians,
    /// Seconds of time per year, the traditional RA proper-motion unit.
    SecondsPerYear,
    Years,
    MilliArcsecsPerYear,
    MilliArcsecs,
    /// Julian Date.
    Jd,
}

impl Units {
    pub const ALL: [Units; 15] = [
        Units::Angstroms,
        Units::Arcsecs,
        Units::ArcsecsPerYear,
        Units::Au,
        Units::Degrees,
        Units::DegreesPerDay,
        Units::Hms,
        Units::KmPerSec,
        Units::Microns,
        Units::Radians,
        Units::SecondsPerYear,
        Units::Years,
        Units::MilliArcsecsPerYear,
        Units::MilliArcsecs,
        Units::Jd,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Units::Angstroms => "angstroms",
            Units::Arcsecs => "arcsecs",
            Units::ArcsecsPerYear => "arcsecs/year",
            Units::Au => "au",
            Units::Degrees => "degrees",
            Units::DegreesPerDay => "degrees/day",
            Units::Hms => "hours/minutes/seconds",
            Units::KmPerSec => "km/sec",
            Units::Microns => "microns",
            Units::Radians => "radians",
            Units::SecondsPerYear => "seconds/year",
            Units::Years => "years",
            Units::MilliArcsecsPerYear => "milli-arcsecs/year",
            Units::MilliArcsecs => "milli-arcsecs",
            Units::Jd => "JD",
        }
    }

    /// Looks up a unit by its exact display name.
    pub fn from_name(name: &str) -> Option<Units> {
        Units::ALL.iter().copied().find(|u| u.name() == name)
    }

    /// Returns `true` for units that [`convert_between`] can translate.
    pub fn is_angular(self) -> bool {
        matches!(
            self,
            Units::Degrees | Units::Arcsecs | Units::Radians | Units::Hms
        )
    }

    /// Degrees represented by `value` in this unit, or `None` for units
    /// outside the angular family.
    #[inline]
    pub fn to_degrees(self, value: f64) -> Option<f64> {
        match self {
            Units::Degrees => Some(value),
            Units::Arcsecs => Some(value / ARCSEC_PER_DEGREE),
            Units::Radians => Some(value * RAD_TO_DEG),
            Units::Hms => Some(value * DEGREES_PER_HOUR),
            _ => None,
        }
    }

    /// Inverse of [`to_degrees`](Self::to_degrees).
    #[inline]
    pub fn convert_degrees(self, degrees: f64) -> Option<f64> {
        match self {
            Units::Degrees => Some(degrees),
            Units::Arcsecs => Some(degrees * ARCSEC_PER_DEGREE),
            Units::Radians => Some(degrees * DEG_TO_RAD),
            Units::Hms => Some(degrees / DEGREES_PER_HOUR),
            _ => None,
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Units {
    type Err = TargetError;

    fn from_str(s: &str) -> TargetResult<Self> {
        Units::from_name(s.trim())
            .ok_or_else(|| TargetError::parse("Units::from_str", s, "unknown unit name"))
    }
}

/// Converts `value` between two members of the angular family by pivoting
/// through degrees.
///
/// Pairs outside the angular family return `value` unchanged. Callers that
/// need a checked conversion within other families (milli-arcseconds,
/// wavelengths) should use [`Quantity::convert_to`](crate::Quantity::convert_to).
pub fn convert_between(value: f64, from: Units, to: Units) -> f64 {
    if from == to {
        return value;
    }
    match from.to_degrees(value).and_then(|deg| to.convert_degrees(deg)) {
        Some(converted) => converted,
        None => value,
    }
}

/// Scale factor between two units of the same non-angular family, used by
/// [`Quantity::convert_to`](crate::Quantity::convert_to).
pub(crate) fn scale_between(from: Units, to: Units) -> Option<f64> {
    use Units::*;
    match (from, to) {
        _ if from == to => Some(1.0),
        (MilliArcsecs, Arcsecs) | (MilliArcsecsPerYear, ArcsecsPerYear) => {
            Some(1.0 / MILLIARCSEC_PER_ARCSEC)
        }
        (Arcsecs, MilliArcsecs) | (ArcsecsPerYear, MilliArcsecsPerYear) => {
            Some(MILLIARCSEC_PER_ARCSEC)
        }
        (Angstroms, Microns) => Some(1.0 / ANGSTROMS_PER_MICRON),
        (Microns, Angstroms) => Some(ANGSTROMS_PER_MICRON),
        _ => None,
    }
}
