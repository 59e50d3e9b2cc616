use super::{describe, retag, HorizonsLink};
use crate::errors::{CoordError, CoordResult};
use crate::frames::{CoordinateSystem, DegDegOption, EquatorialOption, FrameOption};
use crate::targets::HmsDegTarget;
use crate::transforms::J2000Frame;
use skyframe_core::constants::{IAU1958_EPOCH, J2000_EPOCH};
use skyframe_core::{
    DecAxis, Dms, DmsLong, FormatterRegistry, FrameKernel, LongitudeAxis, ParamKind, Quantity,
    SkyPoint, TargetResult, Units,
};
use std::borrow::Cow;
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type DegDegSystem = CoordinateSystem<DegDegOption, LongitudeAxis, DecAxis>;

/// A target given as a longitude/latitude pair in degrees: Galactic
/// coordinates, or azimuth and altitude.
///
/// Only the Galactic option converts to J2000; Az/Alt conversions fail with
/// [`UnsupportedConversion`](skyframe_core::TargetError::UnsupportedConversion)
/// and leave the target untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DegDegTarget {
    name: String,
    brightness: Option<String>,
    system: DegDegSystem,
    epoch: Quantity,
    horizons: Option<HorizonsLink>,
}

impl DegDegTarget {
    /// A Galactic target at (0, 0) with the IAU 1958 epoch.
    pub fn new() -> Self {
        Self::with_option(DegDegOption::Galactic)
    }

    pub fn with_option(option: DegDegOption) -> Self {
        let epoch = match option {
            DegDegOption::Galactic => IAU1958_EPOCH,
            DegDegOption::AzAlt => J2000_EPOCH,
        };
        Self {
            name: String::new(),
            brightness: None,
            system: DegDegSystem::new(option),
            epoch: Quantity::years(epoch),
            horizons: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn brightness(&self) -> Option<&str> {
        self.brightness.as_deref()
    }

    pub fn set_brightness(&mut self, brightness: Option<String>) {
        self.brightness = brightness;
    }

    pub fn system(&self) -> &DegDegSystem {
        &self.system
    }

    pub fn system_option(&self) -> DegDegOption {
        self.system.option()
    }

    pub fn set_system_option(&mut self, option: DegDegOption) -> bool {
        self.system.set_option(option)
    }

    pub fn set_system_option_by_name(&mut self, name: &str) -> TargetResult<bool> {
        self.system.set_option_by_name(name)
    }

    /// Galactic longitude or azimuth.
    pub fn longitude(&self) -> &DmsLong {
        self.system.c1()
    }

    pub fn longitude_mut(&mut self) -> &mut DmsLong {
        self.system.c1_mut()
    }

    /// Galactic latitude or altitude.
    pub fn latitude(&self) -> &Dms {
        self.system.c2()
    }

    pub fn latitude_mut(&mut self) -> &mut Dms {
        self.system.c2_mut()
    }

    pub fn sky_point(&self) -> SkyPoint {
        SkyPoint::new(self.longitude().degrees(), self.latitude().degrees())
    }

    pub fn set_position(&mut self, longitude: f64, latitude: f64) -> TargetResult<()> {
        self.system.c1_mut().set_as(longitude, Units::Degrees)?;
        self.system.c2_mut().set_as(latitude, Units::Degrees)
    }

    pub fn set_axes_from_text(&mut self, longitude: &str, latitude: &str) -> TargetResult<()> {
        self.system.set_axes_from_text(longitude, latitude)
    }

    pub fn epoch(&self) -> Quantity {
        self.epoch
    }

    pub fn set_epoch(&mut self, epoch: Quantity) -> TargetResult<()> {
        self.epoch = retag(ParamKind::Epoch, epoch)?;
        Ok(())
    }

    pub fn horizons(&self) -> Option<HorizonsLink> {
        self.horizons
    }

    pub fn set_horizons(&mut self, link: Option<HorizonsLink>) {
        self.horizons = link;
    }

    pub fn position(&self) -> String {
        self.position_with(&FormatterRegistry::global())
    }

    pub fn position_with(&self, registry: &FormatterRegistry) -> String {
        let (lon_label, lat_label) = match self.system_option() {
            DegDegOption::Galactic => ("Long", "Lat"),
            DegDegOption::AzAlt => ("Az", "Alt"),
        };
        describe(
            &self.name,
            format!(
                "{}: {} {}: {} ({})",
                lon_label,
                self.longitude().to_display_string_with(registry),
                lat_label,
                self.latitude().to_display_string_with(registry),
                self.system_option().name()
            ),
        )
    }

    fn require_galactic(&self) -> CoordResult<()> {
        match self.system_option() {
            DegDegOption::Galactic => Ok(()),
            DegDegOption::AzAlt => {
                warn!(target_name = %self.name, "Az/Alt to J2000 conversion is not supported");
                Err(CoordError::unsupported_conversion(
                    DegDegOption::AzAlt.name(),
                    EquatorialOption::J2000.name(),
                ))
            }
        }
    }
}

impl Default for DegDegTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl J2000Frame for DegDegTarget {
    fn to_j2000_using(&self, kernel: &dyn FrameKernel) -> CoordResult<HmsDegTarget> {
        self.require_galactic()?;
        debug!(option = self.system_option().name(), "gal_to_fk5");
        let p = kernel.gal_to_fk5(self.sky_point());

        let mut out = HmsDegTarget::new();
        out.set_name(self.name.clone());
        out.set_brightness(self.brightness.clone());
        out.set_position(p.lon, p.lat)?;
        Ok(out)
    }

    /// Converts into Galactic and takes the name of `position`. Az/Alt fails
    /// before anything is written.
    fn with_j2000_using(&mut self, position: &HmsDegTarget, kernel: &dyn FrameKernel) -> CoordResult<()> {
        self.require_galactic()?;
        let source = if position.system_option() == EquatorialOption::J2000 {
            Cow::Borrowed(position)
        } else {
            Cow::Owned(position.to_j2000_using(kernel)?)
        };
        debug!(option = self.system_option().name(), "fk5_to_gal");
        let p = kernel.fk5_to_gal(source.sky_point());
        self.set_position(p.lon, p.lat)?;
        self.name = position.name().to_string();
        Ok(())
    }
}
