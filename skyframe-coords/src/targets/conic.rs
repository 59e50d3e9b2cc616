use super::{retag, NonSiderealData};
use crate::frames::{ConicOption, FrameOption};
use skyframe_core::{ParamKind, Quantity, TargetResult};
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A comet or minor body described by its osculating orbital elements.
///
/// The option records which convention the elements follow. It is purely
/// descriptive and nothing here computes a position from the elements.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConicTarget {
    name: String,
    brightness: Option<String>,
    option: ConicOption,
    nonsidereal: NonSiderealData,
    ascending_node: Quantity,
    semi_major_axis: Quantity,
    eccentricity: f64,
    inclination: Quantity,
    mean_anomaly: Quantity,
    daily_motion: Quantity,
    perihelion: Quantity,
    epoch_of_perihelion: Quantity,
}

impl ConicTarget {
    pub fn new() -> Self {
        Self::with_option(ConicOption::default())
    }

    pub fn with_option(option: ConicOption) -> Self {
        Self {
            name: String::new(),
            brightness: None,
            option,
            nonsidereal: NonSiderealData::new(),
            ascending_node: Quantity::zero(ParamKind::AscendingNode),
            semi_major_axis: Quantity::zero(ParamKind::SemiMajorAxis),
            eccentricity: 0.0,
            inclination: Quantity::zero(ParamKind::Inclination),
            mean_anomaly: Quantity::zero(ParamKind::MeanAnomaly),
            daily_motion: Quantity::zero(ParamKind::DailyMotion),
            perihelion: Quantity::zero(ParamKind::Perihelion),
            epoch_of_perihelion: Quantity::zero(ParamKind::Epoch),
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

    pub fn system_option(&self) -> ConicOption {
        self.option
    }

    pub fn set_system_option(&mut self, option: ConicOption) -> bool {
        if option == self.option {
            return false;
        }
        tracing::debug!(from = self.option.name(), to = option.name(), "conic option changed");
        self.option = option;
        true
    }

    pub fn set_system_option_by_name(&mut self, name: &str) -> TargetResult<bool> {
        let option = ConicOption::parse_name(name)?;
        Ok(self.set_system_option(option))
    }

    /// Last computed position, epoch and ephemeris link.
    pub fn nonsidereal(&self) -> &NonSiderealData {
        &self.nonsidereal
    }

    pub fn nonsidereal_mut(&mut self) -> &mut NonSiderealData {
        &mut self.nonsidereal
    }

    /// Longitude of the ascending node.
    pub fn ascending_node(&self) -> Quantity {
        self.ascending_node
    }

    pub fn set_ascending_node(&mut self, q: Quantity) -> TargetResult<()> {
        self.ascending_node = retag(ParamKind::AscendingNode, q)?;
        Ok(())
    }

    /// Semi-major axis, or perihelion distance for the comet conventions.
    pub fn semi_major_axis(&self) -> Quantity {
        self.semi_major_axis
    }

    pub fn set_semi_major_axis(&mut self, q: Quantity) -> TargetResult<()> {
        self.semi_major_axis = retag(ParamKind::SemiMajorAxis, q)?;
        Ok(())
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn set_eccentricity(&mut self, e: f64) {
        self.eccentricity = e;
    }

    pub fn inclination(&self) -> Quantity {
        self.inclination
    }

    pub fn set_inclination(&mut self, q: Quantity) -> TargetResult<()> {
        self.inclination = retag(ParamKind::Inclination, q)?;
        Ok(())
    }

    /// Mean anomaly, or mean longitude depending on the convention.
    pub fn mean_anomaly(&self) -> Quantity {
        self.mean_anomaly
    }

    pub fn set_mean_anomaly(&mut self, q: Quantity) -> TargetResult<()> {
        self.mean_anomaly = retag(ParamKind::MeanAnomaly, q)?;
        Ok(())
    }

    pub fn daily_motion(&self) -> Quantity {
        self.daily_motion
    }

    pub fn set_daily_motion(&mut self, q: Quantity) -> TargetResult<()> {
        self.daily_motion = retag(ParamKind::DailyMotion, q)?;
        Ok(())
    }

    /// Argument of perihelion.
    pub fn perihelion(&self) -> Quantity {
        self.perihelion
    }

    pub fn set_perihelion(&mut self, q: Quantity) -> TargetResult<()> {
        self.perihelion = retag(ParamKind::Perihelion, q)?;
        Ok(())
    }

    pub fn epoch_of_perihelion(&self) -> Quantity {
        self.epoch_of_perihelion
    }

    pub fn set_epoch_of_perihelion(&mut self, q: Quantity) -> TargetResult<()> {
        self.epoch_of_perihelion = retag(ParamKind::Epoch, q)?;
        Ok(())
    }

    pub fn position(&self) -> String {
        "Orbital Elements".to_string()
    }

    /// Equality that also compares the stored RA and Dec.
    pub fn identity_eq(&self, other: &Self) -> bool {
        self == other && self.nonsidereal.identity_eq(&other.nonsidereal)
    }
}

impl Default for ConicTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ConicTarget {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.brightness == other.brightness
            && self.option == other.option
            && self.nonsidereal == other.nonsidereal
            && self.ascending_node == other.ascending_node
            && self.semi_major_axis == other.semi_major_axis
            && self.eccentricity.to_bits() == other.eccentricity.to_bits()
            && self.inclination == other.inclination
            && self.mean_anomaly == other.mean_anomaly
            && self.daily_motion == other.daily_motion
            && self.perihelion == other.perihelion
            && self.epoch_of_perihelion == other.epoch_of_perihelion
    }
}

impl Eq for ConicTarget {}

impl Hash for ConicTarget {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.brightness.hash(state);
        self.option.hash(state);
        self.nonsidereal.hash(state);
        self.ascending_node.hash(state);
        self.semi_major_axis.hash(state);
        self.eccentricity.to_bits().hash(state);
        self.inclination.hash(state);
        self.mean_anomaly.hash(state);
        self.daily_motion.hash(state);
        self.perihelion.hash(state);
        self.epoch_of_perihelion.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyframe_core::{TargetError, Units};
    use std::collections::HashSet;

    fn halley() -> ConicTarget {
        let mut t = ConicTarget::with_option(ConicOption::JplMinorBody);
        t.set_name("1P/Halley");
        t.set_ascending_node(Quantity::new(ParamKind::AscendingNode, 59.396, Units::Degrees).unwrap())
            .unwrap();
        t.set_semi_major_axis(Quantity::new(ParamKind::SemiMajorAxis, 0.5859, Units::Au).unwrap())
            .unwrap();
        t.set_eccentricity(0.9671);
        t.set_inclination(Quantity::new(ParamKind::Inclination, 162.19, Units::Degrees).unwrap())
            .unwrap();
        t.set_perihelion(Quantity::new(ParamKind::Perihelion, 112.24, Units::Degrees).unwrap())
            .unwrap();
        t.set_epoch_of_perihelion(Quantity::new(ParamKind::Epoch, 2446470.5, Units::Jd).unwrap())
            .unwrap();
        t
    }

    #[test]
    fn test_defaults() {
        let t = ConicTarget::new();
        assert_eq!(t.system_option(), ConicOption::AsaComet);
        assert_eq!(t.epoch_of_perihelion(), Quantity::years(2000.0));
        assert_eq!(t.eccentricity(), 0.0);
        assert_eq!(t.position(), "Orbital Elements");
    }

    #[test]
    fn test_element_units_are_checked() {
        let mut t = halley();
        let err = t
            .set_semi_major_axis(Quantity::new(ParamKind::Inclination, 3.0, Units::Degrees).unwrap())
            .unwrap_err();
        assert!(matches!(err, TargetError::InvalidUnit { .. }));
        assert_eq!(t.semi_major_axis().value(), 0.5859);

        let motion = Quantity::new(ParamKind::DailyMotion, 0.013, Units::DegreesPerDay).unwrap();
        t.set_daily_motion(motion).unwrap();
        assert_eq!(t.daily_motion(), motion);
    }

    #[test]
    fn test_option_is_descriptive() {
        let mut t = halley();
        let elements = t.inclination();
        assert!(t.set_system_option_by_name("MPC comet").unwrap());
        assert!(!t.set_system_option(ConicOption::MpcComet));
        assert_eq!(t.inclination(), elements);
        assert!(t.set_system_option_by_name("J2000").is_err());
    }

    #[test]
    fn test_equality_ignores_position() {
        let a = halley();
        let mut b = a.clone();
        b.nonsidereal_mut().ra_mut().set_as(120.0, Units::Degrees).unwrap();
        assert_eq!(a, b);
        assert!(!a.identity_eq(&b));

        let set: HashSet<ConicTarget> = [a.clone(), b].into_iter().collect();
        assert_eq!(set.len(), 1);

        let mut c = a.clone();
        c.set_eccentricity(0.5);
        assert_ne!(a, c);
    }
}
