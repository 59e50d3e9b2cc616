//! Target variants and the [`Target`] union over them.
//!
//! | Variant | Kind | Axes | Converts to J2000 |
//! |---------|------|------|-------------------|
//! | [`HmsDegTarget`] | `HMS Deg` | RA / Dec | yes |
//! | [`DegDegTarget`] | `Deg Deg` | longitude / latitude | Galactic only |
//! | [`ConicTarget`] | `Conic` | last ephemeris RA / Dec | no |
//! | [`NamedTarget`] | `Named` | last ephemeris RA / Dec | no |

pub mod conic;
pub mod degdeg;
pub mod named;
pub mod nonsidereal;
pub mod sidereal;

pub use conic::ConicTarget;
pub use degdeg::{DegDegSystem, DegDegTarget};
pub use named::{NamedTarget, SolarObject};
pub use nonsidereal::{HorizonsLink, NonSiderealData};
pub use sidereal::{EquatorialSystem, HmsDegTarget};

use crate::errors::{CoordError, CoordResult};
use crate::frames::{ConicOption, DegDegOption, EquatorialOption, FrameOption, NamedOption, SystemOption};
use crate::transforms::J2000Frame;
use chrono::{DateTime, Utc};
use skyframe_core::constants::J2000_EPOCH;
use skyframe_core::{AxisCoordinate, FormatterRegistry, FrameKernel, ParamKind, Quantity, TargetResult, Units};
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Copies the value and unit of `q` into a quantity of role `kind`.
pub(crate) fn retag(kind: ParamKind, q: Quantity) -> TargetResult<Quantity> {
    Quantity::new(kind, q.value(), q.units())
}

pub(crate) fn describe(name: &str, body: String) -> String {
    if name.is_empty() {
        body
    } else {
        format!("{} {}", name, body)
    }
}

fn set_or_zero(axis: &mut dyn AxisCoordinate, label: &str, text: &str) {
    if let Err(err) = axis.set_from_text(text) {
        warn!(axis = label, input = text, error = %err, "unparseable coordinate, using 00:00:00");
        axis.clear();
    }
}

/// Any target, tagged by coordinate-system kind.
///
/// Equality is the per-variant `PartialEq`, which for [`ConicTarget`] and
/// [`NamedTarget`] leaves out the stored RA and Dec. [`identity_eq`](Self::identity_eq)
/// compares those too.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Target {
    Sidereal(HmsDegTarget),
    DegDeg(DegDegTarget),
    Conic(ConicTarget),
    Named(NamedTarget),
}

impl Target {
    /// A fresh target of the kind `option` belongs to.
    pub fn from_option(option: SystemOption) -> Target {
        match option {
            SystemOption::Equatorial(o) => Target::Sidereal(HmsDegTarget::with_option(o)),
            SystemOption::DegDeg(o) => Target::DegDeg(DegDegTarget::with_option(o)),
            SystemOption::Conic(o) => Target::Conic(ConicTarget::with_option(o)),
            SystemOption::Named(_) => Target::Named(NamedTarget::new()),
        }
    }

    /// A fresh target for a frame option display name, e.g. `"B1950"` or
    /// `"Galactic"`. `"Hipparcos"` gives a J2000 target.
    pub fn from_system_name(name: &str) -> CoordResult<Target> {
        SystemOption::from_name(name)
            .map(Self::from_option)
            .ok_or_else(|| CoordError::unknown_system(name))
    }

    /// Display name of this target's coordinate-system kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Target::Sidereal(_) => EquatorialOption::SYSTEM,
            Target::DegDeg(_) => DegDegOption::SYSTEM,
            Target::Conic(_) => ConicOption::SYSTEM,
            Target::Named(_) => NamedOption::SYSTEM,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Target::Sidereal(t) => t.name(),
            Target::DegDeg(t) => t.name(),
            Target::Conic(t) => t.name(),
            Target::Named(t) => t.name(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Target::Sidereal(t) => t.set_name(name),
            Target::DegDeg(t) => t.set_name(name),
            Target::Conic(t) => t.set_name(name),
            Target::Named(t) => t.set_name(name),
        }
    }

    pub fn brightness(&self) -> Option<&str> {
        match self {
            Target::Sidereal(t) => t.brightness(),
            Target::DegDeg(t) => t.brightness(),
            Target::Conic(t) => t.brightness(),
            Target::Named(t) => t.brightness(),
        }
    }

    pub fn set_brightness(&mut self, brightness: Option<String>) {
        match self {
            Target::Sidereal(t) => t.set_brightness(brightness),
            Target::DegDeg(t) => t.set_brightness(brightness),
            Target::Conic(t) => t.set_brightness(brightness),
            Target::Named(t) => t.set_brightness(brightness),
        }
    }

    pub fn system_option(&self) -> SystemOption {
        match self {
            Target::Sidereal(t) => t.system_option().into(),
            Target::DegDeg(t) => t.system_option().into(),
            Target::Conic(t) => t.system_option().into(),
            Target::Named(t) => t.system_option().into(),
        }
    }

    /// Sets an option of this target's own kind. Returns `false` when it is
    /// already current; an option of another kind is an `InvalidFrameOption`.
    pub fn set_system_option(&mut self, option: SystemOption) -> CoordResult<bool> {
        match (self, option) {
            (Target::Sidereal(t), SystemOption::Equatorial(o)) => Ok(t.set_system_option(o)),
            (Target::DegDeg(t), SystemOption::DegDeg(o)) => Ok(t.set_system_option(o)),
            (Target::Conic(t), SystemOption::Conic(o)) => Ok(t.set_system_option(o)),
            (Target::Named(_), SystemOption::Named(_)) => Ok(false),
            (t, o) => Err(CoordError::invalid_frame_option(o.name(), t.kind_name())),
        }
    }

    /// Switches to the named frame option. A name of another kind replaces
    /// the target with a fresh one of that kind, keeping name and brightness.
    pub fn set_system_by_name(&mut self, name: &str) -> CoordResult<()> {
        let option = SystemOption::from_name(name).ok_or_else(|| CoordError::unknown_system(name))?;
        if option.system() == self.kind_name() {
            self.set_system_option(option)?;
            return Ok(());
        }
        let mut replacement = Target::from_option(option);
        replacement.set_name(self.name());
        replacement.set_brightness(self.brightness().map(str::to_owned));
        debug!(from = self.kind_name(), to = replacement.kind_name(), option = option.name(), "target kind replaced");
        *self = replacement;
        Ok(())
    }

    /// First axis: RA, or longitude/azimuth.
    pub fn c1(&self) -> &dyn AxisCoordinate {
        match self {
            Target::Sidereal(t) => t.ra(),
            Target::DegDeg(t) => t.longitude(),
            Target::Conic(t) => t.nonsidereal().ra(),
            Target::Named(t) => t.nonsidereal().ra(),
        }
    }

    pub fn c1_mut(&mut self) -> &mut dyn AxisCoordinate {
        match self {
            Target::Sidereal(t) => t.ra_mut(),
            Target::DegDeg(t) => t.longitude_mut(),
            Target::Conic(t) => t.nonsidereal_mut().ra_mut(),
            Target::Named(t) => t.nonsidereal_mut().ra_mut(),
        }
    }

    /// Second axis: Dec, or latitude/altitude.
    pub fn c2(&self) -> &dyn AxisCoordinate {
        match self {
            Target::Sidereal(t) => t.dec(),
            Target::DegDeg(t) => t.latitude(),
            Target::Conic(t) => t.nonsidereal().dec(),
            Target::Named(t) => t.nonsidereal().dec(),
        }
    }

    pub fn c2_mut(&mut self) -> &mut dyn AxisCoordinate {
        match self {
            Target::Sidereal(t) => t.dec_mut(),
            Target::DegDeg(t) => t.latitude_mut(),
            Target::Conic(t) => t.nonsidereal_mut().dec_mut(),
            Target::Named(t) => t.nonsidereal_mut().dec_mut(),
        }
    }

    /// Parses both axes from text. Neither axis changes unless both parse.
    pub fn set_axes_from_text(&mut self, c1: &str, c2: &str) -> CoordResult<()> {
        match self {
            Target::Sidereal(t) => t.set_axes_from_text(c1, c2)?,
            Target::DegDeg(t) => t.set_axes_from_text(c1, c2)?,
            Target::Conic(t) => t.nonsidereal_mut().set_axes_from_text(c1, c2)?,
            Target::Named(t) => t.nonsidereal_mut().set_axes_from_text(c1, c2)?,
        }
        Ok(())
    }

    /// Parses each axis independently; an axis whose text does not parse
    /// is set to zero and a warning is logged.
    pub fn set_axes_from_text_lenient(&mut self, c1: &str, c2: &str) {
        set_or_zero(self.c1_mut(), "c1", c1);
        set_or_zero(self.c2_mut(), "c2", c2);
    }

    /// Stores both axes, given in degrees, in the target's own frame.
    pub fn set_xy(&mut self, c1: f64, c2: f64) -> CoordResult<()> {
        self.c1_mut().set_as(c1, Units::Degrees)?;
        self.c2_mut().set_as(c2, Units::Degrees)?;
        Ok(())
    }

    /// Moves the target to a J2000 position, converting into its own frame.
    pub fn set_target_with_j2000(&mut self, ra: f64, dec: f64) -> CoordResult<()> {
        let mut j2000 = HmsDegTarget::from_j2000_degrees(ra, dec)?;
        j2000.set_name(self.name());
        self.with_j2000(&j2000)
    }

    pub fn position(&self) -> String {
        self.position_with(&FormatterRegistry::global())
    }

    pub fn position_with(&self, registry: &FormatterRegistry) -> String {
        match self {
            Target::Sidereal(t) => t.position_with(registry),
            Target::DegDeg(t) => t.position_with(registry),
            Target::Conic(t) => t.position(),
            Target::Named(t) => t.position(),
        }
    }

    pub fn epoch(&self) -> Quantity {
        match self {
            Target::Sidereal(t) => t.epoch(),
            Target::DegDeg(t) => t.epoch(),
            Target::Conic(t) => t.nonsidereal().epoch(),
            Target::Named(t) => t.nonsidereal().epoch(),
        }
    }

    pub fn set_epoch(&mut self, epoch: Quantity) -> CoordResult<()> {
        match self {
            Target::Sidereal(t) => t.set_epoch(epoch)?,
            Target::DegDeg(t) => t.set_epoch(epoch)?,
            Target::Conic(t) => t.nonsidereal_mut().set_epoch(epoch)?,
            Target::Named(t) => t.nonsidereal_mut().set_epoch(epoch)?,
        }
        Ok(())
    }

    pub fn horizons(&self) -> Option<HorizonsLink> {
        match self {
            Target::Sidereal(t) => t.horizons(),
            Target::DegDeg(t) => t.horizons(),
            Target::Conic(t) => t.nonsidereal().horizons(),
            Target::Named(t) => t.nonsidereal().horizons(),
        }
    }

    /// Sets or clears the ephemeris link. Both parts must be given, or
    /// neither.
    pub fn set_horizons(&mut self, object_id: Option<i64>, object_type_ordinal: Option<i32>) -> CoordResult<()> {
        let link = HorizonsLink::from_parts(object_id, object_type_ordinal)?;
        match self {
            Target::Sidereal(t) => t.set_horizons(link),
            Target::DegDeg(t) => t.set_horizons(link),
            Target::Conic(t) => t.nonsidereal_mut().set_horizons(link),
            Target::Named(t) => t.nonsidereal_mut().set_horizons(link),
        }
        Ok(())
    }

    /// The instant the stored position is valid for. Always `None` for
    /// sidereal and degree/degree targets.
    pub fn valid_at(&self) -> Option<DateTime<Utc>> {
        self.nonsidereal().and_then(NonSiderealData::valid_at)
    }

    pub fn set_valid_at(&mut self, when: Option<DateTime<Utc>>) -> CoordResult<()> {
        let kind = self.kind_name();
        match self {
            Target::Conic(t) => t.nonsidereal_mut().set_valid_at(when),
            Target::Named(t) => t.nonsidereal_mut().set_valid_at(when),
            _ => return Err(CoordError::kind_mismatch("set_valid_at", kind)),
        }
        Ok(())
    }

    /// Equality that also compares the stored RA and Dec of non-sidereal
    /// targets.
    pub fn identity_eq(&self, other: &Target) -> bool {
        match (self, other) {
            (Target::Conic(a), Target::Conic(b)) => a.identity_eq(b),
            (Target::Named(a), Target::Named(b)) => a.identity_eq(b),
            _ => self == other,
        }
    }

    /// The `PartialEq` comparison, named for symmetry with
    /// [`identity_eq`](Self::identity_eq).
    pub fn struct_eq(&self, other: &Target) -> bool {
        self == other
    }

    // Tracking accessors. Text setters take the `value[units]` form.

    /// Name of the current frame option.
    pub fn tracking_system(&self) -> &'static str {
        self.system_option().name()
    }

    pub fn set_tracking_system(&mut self, name: &str) -> CoordResult<()> {
        self.set_system_by_name(name)
    }

    /// The epoch in years.
    pub fn tracking_epoch(&self) -> f64 {
        self.epoch().as_years().unwrap_or(J2000_EPOCH)
    }

    pub fn set_tracking_epoch(&mut self, text: &str) -> CoordResult<()> {
        let epoch = Quantity::from_export(ParamKind::Epoch, text)?;
        self.set_epoch(epoch)
    }

    pub fn tracking_parallax(&self) -> Option<Quantity> {
        self.sidereal().map(HmsDegTarget::parallax)
    }

    pub fn set_tracking_parallax(&mut self, text: &str) -> CoordResult<()> {
        let t = self.sidereal_mut("set_tracking_parallax")?;
        let mut q = t.parallax();
        q.set_from_export(text)?;
        t.set_parallax(q)?;
        Ok(())
    }

    pub fn tracking_radial_velocity(&self) -> Option<Quantity> {
        self.sidereal().map(HmsDegTarget::radial_velocity)
    }

    pub fn set_tracking_radial_velocity(&mut self, text: &str) -> CoordResult<()> {
        let t = self.sidereal_mut("set_tracking_radial_velocity")?;
        let mut q = t.radial_velocity();
        q.set_from_export(text)?;
        t.set_radial_velocity(q)?;
        Ok(())
    }

    pub fn tracking_proper_motion_ra(&self) -> Option<Quantity> {
        self.sidereal().map(HmsDegTarget::proper_motion_ra)
    }

    pub fn set_tracking_proper_motion_ra(&mut self, text: &str) -> CoordResult<()> {
        let t = self.sidereal_mut("set_tracking_proper_motion_ra")?;
        let mut q = t.proper_motion_ra();
        q.set_from_export(text)?;
        t.set_proper_motion_ra(q)?;
        Ok(())
    }

    pub fn tracking_proper_motion_dec(&self) -> Option<Quantity> {
        self.sidereal().map(HmsDegTarget::proper_motion_dec)
    }

    pub fn set_tracking_proper_motion_dec(&mut self, text: &str) -> CoordResult<()> {
        let t = self.sidereal_mut("set_tracking_proper_motion_dec")?;
        let mut q = t.proper_motion_dec();
        q.set_from_export(text)?;
        t.set_proper_motion_dec(q)?;
        Ok(())
    }

    /// The effective wavelength in `value[units]` form, or `"auto"`.
    /// `None` for non-sidereal targets.
    pub fn tracking_effective_wavelength(&self) -> Option<String> {
        self.sidereal().map(|t| match t.effective_wavelength() {
            Some(q) => q.export_string(),
            None => "auto".to_string(),
        })
    }

    pub fn set_tracking_effective_wavelength(&mut self, text: &str) -> CoordResult<()> {
        let t = self.sidereal_mut("set_tracking_effective_wavelength")?;
        let wavelength = if text.trim().eq_ignore_ascii_case("auto") {
            None
        } else {
            Some(Quantity::from_export(ParamKind::EffectiveWavelength, text)?)
        };
        t.set_effective_wavelength(wavelength)?;
        Ok(())
    }

    fn sidereal(&self) -> Option<&HmsDegTarget> {
        match self {
            Target::Sidereal(t) => Some(t),
            _ => None,
        }
    }

    fn sidereal_mut(&mut self, operation: &str) -> CoordResult<&mut HmsDegTarget> {
        let kind = self.kind_name();
        match self {
            Target::Sidereal(t) => Ok(t),
            _ => Err(CoordError::kind_mismatch(operation, kind)),
        }
    }

    fn nonsidereal(&self) -> Option<&NonSiderealData> {
        match self {
            Target::Conic(t) => Some(t.nonsidereal()),
            Target::Named(t) => Some(t.nonsidereal()),
            _ => None,
        }
    }
}

impl Default for Target {
    fn default() -> Self {
        Target::Sidereal(HmsDegTarget::new())
    }
}

impl J2000Frame for Target {
    fn to_j2000_using(&self, kernel: &dyn FrameKernel) -> CoordResult<HmsDegTarget> {
        let system = self.tracking_system();
        match self {
            Target::Sidereal(t) => t.to_j2000_using(kernel),
            Target::DegDeg(t) => t.to_j2000_using(kernel),
            Target::Conic(_) | Target::Named(_) => Err(CoordError::unsupported_conversion(
                system,
                EquatorialOption::J2000.name(),
            )),
        }
    }

    fn with_j2000_using(&mut self, position: &HmsDegTarget, kernel: &dyn FrameKernel) -> CoordResult<()> {
        let system = self.tracking_system();
        match self {
            Target::Sidereal(t) => t.with_j2000_using(position, kernel),
            Target::DegDeg(t) => t.with_j2000_using(position, kernel),
            Target::Conic(_) | Target::Named(_) => Err(CoordError::unsupported_conversion(
                EquatorialOption::J2000.name(),
                system,
            )),
        }
    }
}

impl From<HmsDegTarget> for Target {
    fn from(t: HmsDegTarget) -> Self {
        Target::Sidereal(t)
    }
}

impl From<DegDegTarget> for Target {
    fn from(t: DegDegTarget) -> Self {
        Target::DegDeg(t)
    }
}

impl From<ConicTarget> for Target {
    fn from(t: ConicTarget) -> Self {
        Target::Conic(t)
    }
}

impl From<NamedTarget> for Target {
    fn from(t: NamedTarget) -> Self {
        Target::Named(t)
    }
}
