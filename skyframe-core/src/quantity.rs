//! Numeric target parameters tagged with a unit.
//!
//! A [`Quantity`] pairs an `f64` value with a [`Units`] tag and a
//! [`ParamKind`] that fixes which units are legal. Construction and unit
//! changes are validated against that legal set, so a proper motion can
//! never be stored in `au` and an epoch can never be stored in `degrees`.
//!
//! # Legal units per parameter
//!
//! | Kind | Legal units | Default |
//! |------|-------------|---------|
//! | `Epoch` | years, JD | years |
//! | `ProperMotionRa` | milli-arcsecs/year, arcsecs/year, seconds/year | milli-arcsecs/year |
//! | `ProperMotionDec` | milli-arcsecs/year, arcsecs/year | milli-arcsecs/year |
//! | `RadialVelocity` | km/sec | km/sec |
//! | `Parallax` | arcsecs, milli-arcsecs | milli-arcsecs |
//! | `EffectiveWavelength` | microns, angstroms | microns |
//! | `AscendingNode`, `Inclination`, `MeanAnomaly`, `Perihelion` | degrees | degrees |
//! | `SemiMajorAxis` | au | au |
//! | `DailyMotion` | degrees/day | degrees/day |
//! | `RightAscension` | hours/minutes/seconds, degrees, radians | degrees |
//! | `Declination`, `Longitude` | degrees, radians, arcsecs | degrees |
//!
//! # Export form
//!
//! Quantities round-trip through the compact text form `value[units]`, for
//! example `2000.0[years]` or `-12.5[milli-arcsecs/year]`. Text without any
//! brackets sets the value only and keeps the current unit.

use crate::constants::{DAYS_PER_JULIAN_YEAR, J2000_EPOCH, J2000_JD};
use crate::errors::{TargetError, TargetResult};
use crate::units::{convert_between, scale_between, Units};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static EXPORT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?P<value>[^\[\]]*?)\s*\[(?P<units>[^\[\]]*)\]\s*$")
        .unwrap_or_else(|e| panic!("invalid quantity export regex: {}", e))
});

/// The role a [`Quantity`] plays, which determines its legal units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParamKind {
    Epoch,
    ProperMotionRa,
    ProperMotionDec,
    RadialVelocity,
    Parallax,
    EffectiveWavelength,
    AscendingNode,
    SemiMajorAxis,
    Inclination,
    /// Mean anomaly or mean longitude of an orbit.
    MeanAnomaly,
    DailyMotion,
    Perihelion,
    RightAscension,
    Declination,
    Longitude,
}

impl ParamKind {
    pub fn name(self) -> &'static str {
        match self {
            ParamKind::Epoch => "epoch",
            ParamKind::ProperMotionRa => "pm1",
            ParamKind::ProperMotionDec => "pm2",
            ParamKind::RadialVelocity => "rv",
            ParamKind::Parallax => "parallax",
            ParamKind::EffectiveWavelength => "wavelength",
            ParamKind::AscendingNode => "anode",
            ParamKind::SemiMajorAxis => "aq",
            ParamKind::Inclination => "inclination",
            ParamKind::MeanAnomaly => "lm",
            ParamKind::DailyMotion => "n",
            ParamKind::Perihelion => "perihelion",
            ParamKind::RightAscension => "ra",
            ParamKind::Declination => "dec",
            ParamKind::Longitude => "longitude",
        }
    }

    pub fn legal_units(self) -> &'static [Units] {
        use Units::*;
        match self {
            ParamKind::Epoch => &[Years, Jd],
            ParamKind::ProperMotionRa => &[MilliArcsecsPerYear, ArcsecsPerYear, SecondsPerYear],
            ParamKind::ProperMotionDec => &[MilliArcsecsPerYear, ArcsecsPerYear],
            ParamKind::RadialVelocity => &[KmPerSec],
            ParamKind::Parallax => &[Arcsecs, MilliArcsecs],
            ParamKind::EffectiveWavelength => &[Microns, Angstroms],
            ParamKind::AscendingNode
            | ParamKind::Inclination
            | ParamKind::MeanAnomaly
            | ParamKind::Perihelion => &[Degrees],
            ParamKind::SemiMajorAxis => &[Au],
            ParamKind::DailyMotion => &[DegreesPerDay],
            ParamKind::RightAscension => &[Hms, Degrees, Radians],
            ParamKind::Declination | ParamKind::Longitude => &[Degrees, Radians, Arcsecs],
        }
    }

    pub fn default_units(self) -> Units {
        match self {
            ParamKind::Epoch => Units::Years,
            ParamKind::ProperMotionRa | ParamKind::ProperMotionDec => Units::MilliArcsecsPerYear,
            ParamKind::RadialVelocity => Units::KmPerSec,
            ParamKind::Parallax => Units::MilliArcsecs,
            ParamKind::EffectiveWavelength => Units::Microns,
            ParamKind::SemiMajorAxis => Units::Au,
            ParamKind::DailyMotion => Units::DegreesPerDay,
            _ => Units::Degrees,
        }
    }

    pub fn accepts(self, units: Units) -> bool {
        self.legal_units().contains(&units)
    }

    /// Returns `Ok(())` if `units` is legal for this kind.
    pub fn check_units(self, units: Units) -> TargetResult<()> {
        if self.accepts(units) {
            Ok(())
        } else {
            Err(TargetError::invalid_unit(units, self.name()))
        }
    }
}

/// A numeric value tagged with a unit drawn from its kind's legal set.
///
/// Equality is exact: two quantities are equal when their values have the
/// same bit pattern and their units match. This makes `Quantity` usable as a
/// hash key and keeps `NaN` values equal to themselves.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quantity {
    kind: ParamKind,
    value: f64,
    units: Units,
}

impl Quantity {
    /// Creates a quantity, validating `units` against `kind`.
    pub fn new(kind: ParamKind, value: f64, units: Units) -> TargetResult<Self> {
        kind.check_units(units)?;
        Ok(Self { kind, value, units })
    }

    /// Creates a quantity in the kind's default unit.
    pub fn with_default_units(kind: ParamKind, value: f64) -> Self {
        Self {
            kind,
            value,
            units: kind.default_units(),
        }
    }

    /// The zero value for `kind`; epochs default to 2000 years.
    pub fn zero(kind: ParamKind) -> Self {
        match kind {
            ParamKind::Epoch => Self::years(J2000_EPOCH),
            _ => Self::with_default_units(kind, 0.0),
        }
    }

    /// An epoch expressed in years.
    pub fn years(value: f64) -> Self {
        Self {
            kind: ParamKind::Epoch,
            value,
            units: Units::Years,
        }
    }

    #[inline]
    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn units(&self) -> Units {
        self.units
    }

    pub fn legal_units(&self) -> &'static [Units] {
        self.kind.legal_units()
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Parses `text` as a plain number and stores it, keeping the unit.
    pub fn set_value_from_text(&mut self, text: &str) -> TargetResult<()> {
        self.value = parse_value(text)?;
        Ok(())
    }

    /// Relabels the unit without converting the value.
    ///
    /// Setting the current unit again is a no-op. On error the stored unit is
    /// left unchanged.
    pub fn set_units(&mut self, units: Units) -> TargetResult<()> {
        if units == self.units {
            return Ok(());
        }
        self.kind.check_units(units)?;
        tracing::trace!(param = self.kind.name(), from = %self.units, to = %units, "units changed");
        self.units = units;
        Ok(())
    }

    /// Returns a copy relabelled with `units`; `self` is not modified.
    pub fn with_units(&self, units: Units) -> TargetResult<Self> {
        let mut copy = *self;
        copy.set_units(units)?;
        Ok(copy)
    }

    /// Converts the value into `units` and relabels.
    ///
    /// Supported conversions are the angular family, milli-arcseconds to
    /// arcseconds (and per year), angstroms to microns, and years to JD.
    pub fn convert_to(&mut self, units: Units) -> TargetResult<()> {
        if units == self.units {
            return Ok(());
        }
        self.kind.check_units(units)?;
        let converted = if self.units.is_angular() && units.is_angular() {
            convert_between(self.value, self.units, units)
        } else if let Some(scale) = scale_between(self.units, units) {
            self.value * scale
        } else {
            match (self.units, units) {
                (Units::Jd, Units::Years) => jd_to_years(self.value),
                (Units::Years, Units::Jd) => years_to_jd(self.value),
                (from, to) => {
                    return Err(TargetError::unsupported_conversion(from.name(), to.name()));
                }
            }
        };
        tracing::trace!(param = self.kind.name(), from = %self.units, to = %units, "value converted");
        self.value = converted;
        self.units = units;
        Ok(())
    }

    /// The value as a year number, for epochs stored in years or JD.
    pub fn as_years(&self) -> Option<f64> {
        match self.units {
            Units::Years => Some(self.value),
            Units::Jd => Some(jd_to_years(self.value)),
            _ => None,
        }
    }

    /// The `value[units]` export form.
    pub fn export_string(&self) -> String {
        format!("{:?}[{}]", self.value, self.units.name())
    }

    /// Parses an export string into a new quantity of `kind`.
    ///
    /// Text without brackets is a bare value in the kind's default unit.
    pub fn from_export(kind: ParamKind, text: &str) -> TargetResult<Self> {
        let mut q = Self::with_default_units(kind, 0.0);
        q.set_from_export(text)?;
        Ok(q)
    }

    /// Updates this quantity from an export string.
    ///
    /// With no brackets at all only the value is set. Brackets that are
    /// unbalanced or out of order are a parse error, as is an unknown unit
    /// name. A known but illegal unit is an [`InvalidUnit`](TargetError::InvalidUnit)
    /// error. Nothing is modified on error.
    pub fn set_from_export(&mut self, text: &str) -> TargetResult<()> {
        if !text.contains('[') && !text.contains(']') {
            return self.set_value_from_text(text);
        }
        let caps = EXPORT_REGEX
            .captures(text)
            .ok_or_else(|| TargetError::parse("Quantity::set_from_export", text, "malformed units brackets"))?;
        let units_text = caps.name("units").map_or("", |m| m.as_str()).trim();
        let units = Units::from_name(units_text)
            .ok_or_else(|| TargetError::parse("Quantity::set_from_export", text, "unknown unit name"))?;
        self.kind.check_units(units)?;
        let value = parse_value(caps.name("value").map_or("", |m| m.as_str()))?;
        self.value = value;
        self.units = units;
        Ok(())
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.value.to_bits() == other.value.to_bits()
            && self.units == other.units
    }
}

impl Eq for Quantity {}

impl Hash for Quantity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.value.to_bits().hash(state);
        self.units.hash(state);
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.units)
    }
}

fn parse_value(text: &str) -> TargetResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| TargetError::parse("Quantity", text, "not a number"))
}

#[inline]
fn jd_to_years(jd: f64) -> f64 {
    J2000_EPOCH + (jd - J2000_JD) / DAYS_PER_JULIAN_YEAR
}

#[inline]
fn years_to_jd(years: f64) -> f64 {
    J2000_JD + (years - J2000_EPOCH) * DAYS_PER_JULIAN_YEAR
}
