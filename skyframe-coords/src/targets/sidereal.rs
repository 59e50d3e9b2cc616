use super::{describe, retag, HorizonsLink};
use crate::errors::CoordResult;
use crate::frames::{CoordinateSystem, EquatorialOption, FrameOption};
use crate::transforms::J2000Frame;
use skyframe_core::constants::{B1950_EPOCH, J2000_EPOCH};
use skyframe_core::{
    DecAxis, Dms, FormatterRegistry, FrameKernel, Hms, ParamKind, Quantity, RaAxis, SkyPoint,
    TargetResult, Units,
};
use std::borrow::Cow;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type EquatorialSystem = CoordinateSystem<EquatorialOption, RaAxis, DecAxis>;

/// A fixed-star target in an equatorial frame, with the catalog data that
/// travels with it.
///
/// Changing the frame option moves the epoch along with it: Besselian
/// options reset it to 1950.0 and Julian options to 2000.0 unless the caller
/// supplies one. Apparent leaves it alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HmsDegTarget {
    name: String,
    brightness: Option<String>,
    system: EquatorialSystem,
    epoch: Quantity,
    proper_motion_ra: Quantity,
    proper_motion_dec: Quantity,
    radial_velocity: Quantity,
    parallax: Quantity,
    effective_wavelength: Option<Quantity>,
    horizons: Option<HorizonsLink>,
}

impl HmsDegTarget {
    /// A J2000 target at RA 0, Dec 0 with zero motion.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            brightness: None,
            system: EquatorialSystem::default(),
            epoch: Quantity::years(J2000_EPOCH),
            proper_motion_ra: Quantity::zero(ParamKind::ProperMotionRa),
            proper_motion_dec: Quantity::zero(ParamKind::ProperMotionDec),
            radial_velocity: Quantity::zero(ParamKind::RadialVelocity),
            parallax: Quantity::zero(ParamKind::Parallax),
            effective_wavelength: None,
            horizons: None,
        }
    }

    /// A fresh target in `option`, with that option's default epoch.
    pub fn with_option(option: EquatorialOption) -> Self {
        let mut target = Self::new();
        target.set_system_option(option);
        target
    }

    /// A J2000 target at the given position in degrees.
    pub fn from_j2000_degrees(ra: f64, dec: f64) -> TargetResult<Self> {
        let mut target = Self::new();
        target.set_position(ra, dec)?;
        Ok(target)
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

    pub fn system(&self) -> &EquatorialSystem {
        &self.system
    }

    pub fn system_option(&self) -> EquatorialOption {
        self.system.option()
    }

    /// Switches frame option, resetting the epoch to the option's default.
    /// Returns `false` when `option` is already current.
    pub fn set_system_option(&mut self, option: EquatorialOption) -> bool {
        self.set_system_option_with_epoch(option, None)
    }

    /// Switches frame option with an explicit epoch in years.
    ///
    /// Besselian options default the epoch to 1950 and Julian ones to 2000.
    /// Apparent takes `epoch` if given and otherwise keeps the current one.
    /// When `option` is already current the frame is left alone, but a given
    /// `epoch` is still stored. Returns whether the option changed.
    pub fn set_system_option_with_epoch(&mut self, option: EquatorialOption, epoch: Option<f64>) -> bool {
        if !self.system.set_option(option) {
            if let Some(years) = epoch {
                self.epoch = Quantity::years(years);
                debug!(option = option.name(), epoch = %self.epoch, "equatorial epoch set");
            }
            return false;
        }
        let reset = match option {
            EquatorialOption::Apparent => epoch,
            o if o.is_besselian() => Some(epoch.unwrap_or(B1950_EPOCH)),
            _ => Some(epoch.unwrap_or(J2000_EPOCH)),
        };
        if let Some(years) = reset {
            self.epoch = Quantity::years(years);
        }
        debug!(option = option.name(), epoch = %self.epoch, "equatorial frame set");
        true
    }

    pub fn set_system_option_by_name(&mut self, name: &str) -> TargetResult<bool> {
        let option = EquatorialOption::parse_name(name)?;
        Ok(self.set_system_option(option))
    }

    pub fn ra(&self) -> &Hms {
        self.system.c1()
    }

    pub fn ra_mut(&mut self) -> &mut Hms {
        self.system.c1_mut()
    }

    pub fn dec(&self) -> &Dms {
        self.system.c2()
    }

    pub fn dec_mut(&mut self) -> &mut Dms {
        self.system.c2_mut()
    }

    /// The normalized position in degrees.
    pub fn sky_point(&self) -> SkyPoint {
        SkyPoint::new(self.ra().degrees(), self.dec().degrees())
    }

    /// Stores RA and Dec given in degrees.
    pub fn set_position(&mut self, ra: f64, dec: f64) -> TargetResult<()> {
        self.system.c1_mut().set_as(ra, Units::Degrees)?;
        self.system.c2_mut().set_as(dec, Units::Degrees)
    }

    pub fn set_axes_from_text(&mut self, ra: &str, dec: &str) -> TargetResult<()> {
        self.system.set_axes_from_text(ra, dec)
    }

    pub fn epoch(&self) -> Quantity {
        self.epoch
    }

    /// The epoch as a year number.
    pub fn epoch_years(&self) -> f64 {
        self.epoch.as_years().unwrap_or(J2000_EPOCH)
    }

    pub fn set_epoch(&mut self, epoch: Quantity) -> TargetResult<()> {
        self.epoch = retag(ParamKind::Epoch, epoch)?;
        Ok(())
    }

    pub fn proper_motion_ra(&self) -> Quantity {
        self.proper_motion_ra
    }

    pub fn set_proper_motion_ra(&mut self, pm: Quantity) -> TargetResult<()> {
        self.proper_motion_ra = retag(ParamKind::ProperMotionRa, pm)?;
        Ok(())
    }

    pub fn proper_motion_dec(&self) -> Quantity {
        self.proper_motion_dec
    }

    pub fn set_proper_motion_dec(&mut self, pm: Quantity) -> TargetResult<()> {
        self.proper_motion_dec = retag(ParamKind::ProperMotionDec, pm)?;
        Ok(())
    }

    pub fn radial_velocity(&self) -> Quantity {
        self.radial_velocity
    }

    pub fn set_radial_velocity(&mut self, rv: Quantity) -> TargetResult<()> {
        self.radial_velocity = retag(ParamKind::RadialVelocity, rv)?;
        Ok(())
    }

    pub fn parallax(&self) -> Quantity {
        self.parallax
    }

    pub fn set_parallax(&mut self, parallax: Quantity) -> TargetResult<()> {
        self.parallax = retag(ParamKind::Parallax, parallax)?;
        Ok(())
    }

    /// `None` means the wavelength is chosen automatically.
    pub fn effective_wavelength(&self) -> Option<Quantity> {
        self.effective_wavelength
    }

    pub fn set_effective_wavelength(&mut self, wavelength: Option<Quantity>) -> TargetResult<()> {
        self.effective_wavelength = wavelength
            .map(|q| retag(ParamKind::EffectiveWavelength, q))
            .transpose()?;
        Ok(())
    }

    pub fn horizons(&self) -> Option<HorizonsLink> {
        self.horizons
    }

    pub fn set_horizons(&mut self, link: Option<HorizonsLink>) {
        self.horizons = link;
    }

    /// `name RA: .. Dec: .. (option)` using the process-wide formats.
    pub fn position(&self) -> String {
        self.position_with(&FormatterRegistry::global())
    }

    pub fn position_with(&self, registry: &FormatterRegistry) -> String {
        describe(
            &self.name,
            format!(
                "RA: {} Dec: {} ({})",
                self.ra().to_display_string_with(registry),
                self.dec().to_display_string_with(registry),
                self.system_option().name()
            ),
        )
    }

    fn copy_axes_from(&mut self, other: &HmsDegTarget) -> TargetResult<()> {
        self.system.c1_mut().set_as(other.ra().raw_degrees(), Units::Degrees)?;
        self.system.c2_mut().set_as(other.dec().raw_degrees(), Units::Degrees)
    }
}

impl Default for HmsDegTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl J2000Frame for HmsDegTarget {
    fn to_j2000_using(&self, kernel: &dyn FrameKernel) -> CoordResult<HmsDegTarget> {
        let option = self.system_option();
        let epoch = self.epoch_years();
        let p = self.sky_point();

        let converted = match option {
            EquatorialOption::J2000 | EquatorialOption::Apparent => None,
            EquatorialOption::B1950 => {
                debug!(option = option.name(), "fk4_to_fk5");
                Some(kernel.fk4_to_fk5(p))
            }
            EquatorialOption::Jnnnn => {
                if epoch == J2000_EPOCH {
                    None
                } else {
                    debug!(option = option.name(), epoch, "precess_fk5 to 2000.0");
                    Some(kernel.precess_fk5(p, epoch, J2000_EPOCH))
                }
            }
            EquatorialOption::Bnnnn => {
                let b1950 = if epoch == B1950_EPOCH {
                    p
                } else {
                    debug!(option = option.name(), epoch, "precess_fk4 to 1950.0");
                    kernel.precess_fk4(p, epoch, B1950_EPOCH)
                };
                debug!(option = option.name(), "fk4_to_fk5");
                Some(kernel.fk4_to_fk5(b1950))
            }
        };

        let mut out = self.clone();
        out.set_system_option(EquatorialOption::J2000);
        if let Some(j2000) = converted {
            out.set_position(j2000.lon, j2000.lat)?;
        }
        Ok(out)
    }

    fn with_j2000_using(&mut self, position: &HmsDegTarget, kernel: &dyn FrameKernel) -> CoordResult<()> {
        let source = if position.system_option() == EquatorialOption::J2000 {
            Cow::Borrowed(position)
        } else {
            Cow::Owned(position.to_j2000_using(kernel)?)
        };
        let option = self.system_option();
        let epoch = self.epoch_years();
        let p = source.sky_point();

        let native = match option {
            EquatorialOption::J2000 | EquatorialOption::Apparent => None,
            EquatorialOption::B1950 => {
                debug!(option = option.name(), "fk5_to_fk4");
                Some(kernel.fk5_to_fk4(p))
            }
            EquatorialOption::Jnnnn => {
                if epoch == J2000_EPOCH {
                    None
                } else {
                    debug!(option = option.name(), epoch, "precess_fk5 from 2000.0");
                    Some(kernel.precess_fk5(p, J2000_EPOCH, epoch))
                }
            }
            EquatorialOption::Bnnnn => {
                debug!(option = option.name(), "fk5_to_fk4");
                let b1950 = kernel.fk5_to_fk4(p);
                if epoch == B1950_EPOCH {
                    Some(b1950)
                } else {
                    debug!(option = option.name(), epoch, "precess_fk4 from 1950.0");
                    Some(kernel.precess_fk4(b1950, B1950_EPOCH, epoch))
                }
            }
        };

        match native {
            Some(p) => self.set_position(p.lon, p.lat)?,
            None => self.copy_axes_from(&source)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyframe_core::ClassicKernel;
    use std::sync::Mutex;

    /// Records which kernel routines ran.
    #[derive(Default)]
    struct RecordingKernel {
        calls: Mutex<Vec<&'static str>>,
    }

    impl RecordingKernel {
        fn record(&self, name: &'static str) {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(name);
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().map(|c| c.clone()).unwrap_or_default()
        }
    }

    impl FrameKernel for RecordingKernel {
        fn fk4_to_fk5(&self, p: SkyPoint) -> SkyPoint {
            self.record("fk4_to_fk5");
            SkyPoint::new(p.lon + 1.0, p.lat)
        }

        fn fk5_to_fk4(&self, p: SkyPoint) -> SkyPoint {
            self.record("fk5_to_fk4");
            SkyPoint::new(p.lon - 1.0, p.lat)
        }

        fn precess_fk5(&self, p: SkyPoint, _from: f64, _to: f64) -> SkyPoint {
            self.record("precess_fk5");
            SkyPoint::new(p.lon, p.lat + 1.0)
        }

        fn precess_fk4(&self, p: SkyPoint, _from: f64, _to: f64) -> SkyPoint {
            self.record("precess_fk4");
            SkyPoint::new(p.lon, p.lat - 1.0)
        }

        fn gal_to_fk5(&self, p: SkyPoint) -> SkyPoint {
            self.record("gal_to_fk5");
            p
        }

        fn fk5_to_gal(&self, p: SkyPoint) -> SkyPoint {
            self.record("fk5_to_gal");
            p
        }
    }

    fn target(option: EquatorialOption, epoch: Option<f64>) -> HmsDegTarget {
        let mut t = HmsDegTarget::new();
        t.set_system_option_with_epoch(option, epoch);
        t.set_position(100.0, 20.0).unwrap();
        t
    }

    #[test]
    fn test_b1950_sets_epoch() {
        let mut t = HmsDegTarget::new();
        assert_eq!(t.epoch_years(), 2000.0);
        assert!(t.set_system_option(EquatorialOption::B1950));
        assert_eq!(t.epoch(), Quantity::years(1950.0));
        assert!(t.set_system_option(EquatorialOption::Jnnnn));
        assert_eq!(t.epoch_years(), 2000.0);
    }

    #[test]
    fn test_explicit_epoch_wins() {
        let mut t = HmsDegTarget::new();
        t.set_system_option_with_epoch(EquatorialOption::Bnnnn, Some(1975.0));
        assert_eq!(t.epoch_years(), 1975.0);
    }

    #[test]
    fn test_apparent_keeps_epoch() {
        let mut t = HmsDegTarget::with_option(EquatorialOption::B1950);
        t.set_system_option(EquatorialOption::Apparent);
        assert_eq!(t.epoch_years(), 1950.0);
        t.set_system_option(EquatorialOption::J2000);
        t.set_system_option_with_epoch(EquatorialOption::Apparent, Some(2024.5));
        assert_eq!(t.epoch_years(), 2024.5);
    }

    #[test]
    fn test_same_option_does_not_reset_epoch() {
        let mut t = HmsDegTarget::new();
        t.set_epoch(Quantity::years(2010.0)).unwrap();
        assert!(!t.set_system_option(EquatorialOption::J2000));
        assert_eq!(t.epoch_years(), 2010.0);
    }

    #[test]
    fn test_same_option_still_takes_explicit_epoch() {
        let mut t = HmsDegTarget::with_option(EquatorialOption::Bnnnn);
        assert!(!t.set_system_option_with_epoch(EquatorialOption::Bnnnn, Some(1900.0)));
        assert_eq!(t.system_option(), EquatorialOption::Bnnnn);
        assert_eq!(t.epoch_years(), 1900.0);
    }

    #[test]
    fn test_set_option_by_name() {
        let mut t = HmsDegTarget::new();
        assert!(t.set_system_option_by_name("BNNNN").unwrap());
        assert!(t.set_system_option_by_name("Galactic").is_err());
        assert_eq!(t.system_option(), EquatorialOption::Bnnnn);
    }

    #[test]
    fn test_to_j2000_dispatch() {
        let cases: [(EquatorialOption, Option<f64>, &[&str]); 7] = [
            (EquatorialOption::J2000, None, &[]),
            (EquatorialOption::Apparent, None, &[]),
            (EquatorialOption::B1950, None, &["fk4_to_fk5"]),
            (EquatorialOption::Jnnnn, None, &[]),
            (EquatorialOption::Jnnnn, Some(2050.0), &["precess_fk5"]),
            (EquatorialOption::Bnnnn, None, &["fk4_to_fk5"]),
            (EquatorialOption::Bnnnn, Some(1900.0), &["precess_fk4", "fk4_to_fk5"]),
        ];
        for (option, epoch, expected) in cases {
            let kernel = RecordingKernel::default();
            let out = target(option, epoch).to_j2000_using(&kernel).unwrap();
            assert_eq!(kernel.calls(), expected, "{:?} {:?}", option, epoch);
            assert_eq!(out.system_option(), EquatorialOption::J2000);
            assert_eq!(out.epoch_years(), 2000.0);
        }
    }

    #[test]
    fn test_with_j2000_dispatch() {
        let cases: [(EquatorialOption, Option<f64>, &[&str]); 6] = [
            (EquatorialOption::J2000, None, &[]),
            (EquatorialOption::Apparent, None, &[]),
            (EquatorialOption::B1950, None, &["fk5_to_fk4"]),
            (EquatorialOption::Jnnnn, Some(2050.0), &["precess_fk5"]),
            (EquatorialOption::Bnnnn, None, &["fk5_to_fk4"]),
            (EquatorialOption::Bnnnn, Some(1900.0), &["fk5_to_fk4", "precess_fk4"]),
        ];
        let j2000 = HmsDegTarget::from_j2000_degrees(10.0, 5.0).unwrap();
        for (option, epoch, expected) in cases {
            let kernel = RecordingKernel::default();
            let mut t = target(option, epoch);
            t.with_j2000_using(&j2000, &kernel).unwrap();
            assert_eq!(kernel.calls(), expected, "{:?} {:?}", option, epoch);
            assert_eq!(t.system_option(), option);
        }
    }

    #[test]
    fn test_with_j2000_converts_foreign_input() {
        let kernel = RecordingKernel::default();
        let b1950 = target(EquatorialOption::B1950, None);
        let mut t = HmsDegTarget::new();
        t.with_j2000_using(&b1950, &kernel).unwrap();
        assert_eq!(kernel.calls(), ["fk4_to_fk5"]);
        assert_eq!(t.ra().degrees(), 101.0);
    }

    #[test]
    fn test_to_j2000_keeps_catalog_data() {
        let mut t = target(EquatorialOption::B1950, None);
        t.set_name("Vega");
        let pm = Quantity::new(ParamKind::ProperMotionRa, 200.9, Units::MilliArcsecsPerYear).unwrap();
        t.set_proper_motion_ra(pm).unwrap();
        let out = t.to_j2000_using(&ClassicKernel).unwrap();
        assert_eq!(out.name(), "Vega");
        assert_eq!(out.proper_motion_ra(), pm);
    }

    #[test]
    fn test_j2000_identity_round_trip() {
        let mut t = HmsDegTarget::new();
        t.set_axes_from_text("18:36:56.336", "+38:47:01.28").unwrap();
        let before = t.clone();
        let j2000 = t.to_j2000().unwrap();
        t.with_j2000(&j2000).unwrap();
        assert_eq!(t, before);
    }

    #[test]
    fn test_position_string() {
        let mut t = HmsDegTarget::from_j2000_degrees(15.0, -0.5).unwrap();
        let registry = FormatterRegistry::default();
        assert_eq!(t.position_with(&registry), "RA: 01:00:00.000 Dec: -00:30:00.00 (J2000)");
        t.set_name("M31");
        assert!(t.position_with(&registry).starts_with("M31 RA: "));
    }

    #[test]
    fn test_setters_validate_role() {
        let mut t = HmsDegTarget::new();
        let kms = Quantity::new(ParamKind::RadialVelocity, -13.9, Units::KmPerSec).unwrap();
        assert!(t.set_parallax(kms).is_err());
        assert_eq!(t.parallax(), Quantity::zero(ParamKind::Parallax));
        t.set_radial_velocity(kms).unwrap();
        assert_eq!(t.radial_velocity().value(), -13.9);

        let microns = Quantity::new(ParamKind::EffectiveWavelength, 2.2, Units::Microns).unwrap();
        t.set_effective_wavelength(Some(microns)).unwrap();
        assert_eq!(t.effective_wavelength(), Some(microns));
        t.set_effective_wavelength(None).unwrap();
        assert_eq!(t.effective_wavelength(), None);
    }
}
