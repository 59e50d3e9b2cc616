//! Angular coordinate values: [`Hms`], [`Dms`] and [`DmsLong`].
//!
//! A [`Coordinate`] stores its angle in degrees together with a declared unit
//! and an optional per-instance format. The axis kind, a zero-sized marker
//! type, fixes the legal units, the normalization applied on read and the
//! registry entry used for display.
//!
//! | Alias | Axis | Normalized range | Legal units | Registry entry |
//! |-------|------|------------------|-------------|----------------|
//! | [`Hms`] | [`RaAxis`] | [0, 360) | hours, degrees, radians | `hms` |
//! | [`Dms`] | [`DecAxis`] | [-90, 90] | degrees, radians, arcsecs | `dms` |
//! | [`DmsLong`] | [`LongitudeAxis`] | [0, 360) | degrees, radians, arcsecs | `dms_long` |
//!
//! Writes store degrees as given. Normalization happens when the value is
//! read back through [`get_as`](Coordinate::get_as) or displayed, and when it
//! is parsed from text.
//!
//! ```
//! use skyframe_core::{Dms, Hms, Units};
//!
//! let ra = Hms::from_text("10:22:33.2").unwrap();
//! assert!((ra.get_as(Units::Degrees).unwrap() - 155.638333).abs() < 1e-6);
//! assert_eq!(ra.to_display_string(), "10:22:33.200");
//!
//! let dec = Dms::from_text("-00:30:00").unwrap();
//! assert_eq!(dec.get_as(Units::Degrees).unwrap(), -0.5);
//! assert_eq!(dec.to_string(), "-00:30:00.00");
//! ```

use crate::angle::{normalize_dec, normalize_ra};
use crate::errors::{TargetError, TargetResult};
use crate::format::{CoordinateFormat, DmsFormat, FormatterRegistry, HmsFormat};
use crate::quantity::ParamKind;
use crate::units::Units;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Behavior that differs between right ascension, declination and longitude.
pub trait AxisKind: fmt::Debug + Clone + Copy + PartialEq + Eq + Hash + Default + 'static {
    type Format: CoordinateFormat + fmt::Debug + Clone + PartialEq;

    const PARAM: ParamKind;

    fn normalize(degrees: f64) -> f64;

    fn registry_format(registry: &FormatterRegistry) -> Self::Format;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RaAxis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DecAxis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LongitudeAxis;

impl AxisKind for RaAxis {
    type Format = HmsFormat;
    const PARAM: ParamKind = ParamKind::RightAscension;

    #[inline]
    fn normalize(degrees: f64) -> f64 {
        normalize_ra(degrees)
    }

    fn registry_format(registry: &FormatterRegistry) -> HmsFormat {
        registry.hms
    }
}

impl AxisKind for DecAxis {
    type Format = DmsFormat;
    const PARAM: ParamKind = ParamKind::Declination;

    #[inline]
    fn normalize(degrees: f64) -> f64 {
        normalize_dec(degrees)
    }

    fn registry_format(registry: &FormatterRegistry) -> DmsFormat {
        registry.dms
    }
}

impl AxisKind for LongitudeAxis {
    type Format = DmsFormat;
    const PARAM: ParamKind = ParamKind::Longitude;

    #[inline]
    fn normalize(degrees: f64) -> f64 {
        normalize_ra(degrees)
    }

    fn registry_format(registry: &FormatterRegistry) -> DmsFormat {
        registry.dms_long
    }
}

/// Right ascension, formatted as hours-minutes-seconds.
pub type Hms = Coordinate<RaAxis>;
/// Declination or latitude, formatted as degrees-minutes-seconds.
pub type Dms = Coordinate<DecAxis>;
/// Longitude in [0, 360), formatted as degrees-minutes-seconds.
pub type DmsLong = Coordinate<LongitudeAxis>;

/// An angle on one coordinate axis.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "K::Format: Serialize",
        deserialize = "K::Format: Deserialize<'de>"
    ))
)]
pub struct Coordinate<K: AxisKind> {
    degrees: f64,
    units: Units,
    format: Option<K::Format>,
    #[cfg_attr(feature = "serde", serde(skip))]
    axis: PhantomData<K>,
}

impl<K: AxisKind> Coordinate<K> {
    pub fn new() -> Self {
        Self::from_degrees(0.0)
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            degrees,
            units: Units::Degrees,
            format: None,
            axis: PhantomData,
        }
    }

    /// Parses text with the process-wide default format for this axis.
    pub fn from_text(text: &str) -> TargetResult<Self> {
        let mut c = Self::new();
        c.set_from_text(text)?;
        Ok(c)
    }

    /// Parses text with an explicit format, which is kept as the override.
    pub fn from_text_with(text: &str, format: K::Format) -> TargetResult<Self> {
        let mut c = Self::new();
        c.format = Some(format);
        c.set_from_text(text)?;
        Ok(c)
    }

    /// The normalized angle in degrees.
    #[inline]
    pub fn degrees(&self) -> f64 {
        K::normalize(self.degrees)
    }

    /// The angle exactly as last written, before normalization.
    #[inline]
    pub fn raw_degrees(&self) -> f64 {
        self.degrees
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn legal_units(&self) -> &'static [Units] {
        K::PARAM.legal_units()
    }

    /// Sets the declared unit. The stored angle is not affected.
    pub fn set_units(&mut self, units: Units) -> TargetResult<()> {
        if units == self.units {
            return Ok(());
        }
        K::PARAM.check_units(units)?;
        self.units = units;
        Ok(())
    }

    /// The normalized angle expressed in `units`.
    pub fn get_as(&self, units: Units) -> TargetResult<f64> {
        K::PARAM.check_units(units)?;
        units
            .convert_degrees(self.degrees())
            .ok_or_else(|| TargetError::invalid_unit(units, K::PARAM.name()))
    }

    /// Stores `value`, given in `units`, as degrees.
    pub fn set_as(&mut self, value: f64, units: Units) -> TargetResult<()> {
        K::PARAM.check_units(units)?;
        self.degrees = units
            .to_degrees(value)
            .ok_or_else(|| TargetError::invalid_unit(units, K::PARAM.name()))?;
        Ok(())
    }

    /// Sets the angle to zero without touching the declared unit.
    pub fn clear(&mut self) {
        self.degrees = 0.0;
    }

    /// Parses sexagesimal text with the effective format and stores the
    /// normalized result. The value is unchanged on error.
    pub fn set_from_text(&mut self, text: &str) -> TargetResult<()> {
        let parsed = self.effective_format(&FormatterRegistry::global()).parse(text)?;
        self.degrees = K::normalize(parsed);
        Ok(())
    }

    pub fn format_override(&self) -> Option<&K::Format> {
        self.format.as_ref()
    }

    /// Replaces the per-instance format; `None` falls back to the registry.
    pub fn set_format(&mut self, format: Option<K::Format>) {
        self.format = format;
    }

    /// Formats with the override or the process-wide default.
    pub fn to_display_string(&self) -> String {
        self.to_display_string_with(&FormatterRegistry::global())
    }

    /// Formats with the override or the given registry's default.
    pub fn to_display_string_with(&self, registry: &FormatterRegistry) -> String {
        self.effective_format(registry).format(self.degrees())
    }

    fn effective_format(&self, registry: &FormatterRegistry) -> K::Format {
        match &self.format {
            Some(f) => f.clone(),
            None => K::registry_format(registry),
        }
    }
}

impl<K: AxisKind> Default for Coordinate<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Equality compares the stored angle bit for bit and the declared unit.
/// Format overrides do not take part.
impl<K: AxisKind> PartialEq for Coordinate<K> {
    fn eq(&self, other: &Self) -> bool {
        self.degrees.to_bits() == other.degrees.to_bits() && self.units == other.units
    }
}

impl<K: AxisKind> Eq for Coordinate<K> {}

impl<K: AxisKind> Hash for Coordinate<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.degrees.to_bits().hash(state);
        self.units.hash(state);
    }
}

impl<K: AxisKind> fmt::Display for Coordinate<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

/// Object-safe view of a coordinate, for code that handles either axis of a
/// target without knowing its kind.
pub trait AxisCoordinate {
    fn get_as(&self, units: Units) -> TargetResult<f64>;
    fn set_as(&mut self, value: f64, units: Units) -> TargetResult<()>;
    fn set_from_text(&mut self, text: &str) -> TargetResult<()>;
    fn clear(&mut self);
    fn to_display_string(&self) -> String;
    fn legal_units(&self) -> &'static [Units];
}

impl<K: AxisKind> AxisCoordinate for Coordinate<K> {
    fn get_as(&self, units: Units) -> TargetResult<f64> {
        Coordinate::get_as(self, units)
    }

    fn set_as(&mut self, value: f64, units: Units) -> TargetResult<()> {
        Coordinate::set_as(self, value, units)
    }

    fn set_from_text(&mut self, text: &str) -> TargetResult<()> {
        Coordinate::set_from_text(self, text)
    }

    fn clear(&mut self) {
        Coordinate::clear(self)
    }

    fn to_display_string(&self) -> String {
        Coordinate::to_display_string(self)
    }

    fn legal_units(&self) -> &'static [Units] {
        Coordinate::legal_units(self)
    }
}
