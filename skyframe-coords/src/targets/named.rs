use super::NonSiderealData;
use crate::frames::NamedOption;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Major solar-system bodies with a fixed ephemeris-service id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolarObject {
    #[default]
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl SolarObject {
    pub const ALL: [SolarObject; 9] = [
        SolarObject::Moon,
        SolarObject::Mercury,
        SolarObject::Venus,
        SolarObject::Mars,
        SolarObject::Jupiter,
        SolarObject::Saturn,
        SolarObject::Uranus,
        SolarObject::Neptune,
        SolarObject::Pluto,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            SolarObject::Moon => "Moon",
            SolarObject::Mercury => "Mercury",
            SolarObject::Venus => "Venus",
            SolarObject::Mars => "Mars",
            SolarObject::Jupiter => "Jupiter",
            SolarObject::Saturn => "Saturn",
            SolarObject::Uranus => "Uranus",
            SolarObject::Neptune => "Neptune",
            SolarObject::Pluto => "Pluto",
        }
    }

    /// The body's id in the external ephemeris service.
    pub fn horizons_id(self) -> &'static str {
        match self {
            SolarObject::Moon => "301",
            SolarObject::Mercury => "199",
            SolarObject::Venus => "299",
            SolarObject::Mars => "499",
            SolarObject::Jupiter => "599",
            SolarObject::Saturn => "699",
            SolarObject::Uranus => "799",
            SolarObject::Neptune => "899",
            SolarObject::Pluto => "999",
        }
    }

    /// Looks a body up by display name (`Jupiter`) or constant name
    /// (`JUPITER`).
    pub fn from_name(name: &str) -> Option<SolarObject> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|body| body.display_name() == name || body.display_name().to_ascii_uppercase() == name)
    }
}

impl fmt::Display for SolarObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A solar-system body tracked by name. Its RA and Dec are whatever an
/// ephemeris last supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedTarget {
    name: String,
    brightness: Option<String>,
    option: NamedOption,
    body: SolarObject,
    nonsidereal: NonSiderealData,
}

impl NamedTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_body(body: SolarObject) -> Self {
        Self {
            body,
            ..Self::default()
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

    pub fn system_option(&self) -> NamedOption {
        self.option
    }

    pub fn body(&self) -> SolarObject {
        self.body
    }

    pub fn set_body(&mut self, body: SolarObject) {
        self.body = body;
    }

    pub fn nonsidereal(&self) -> &NonSiderealData {
        &self.nonsidereal
    }

    pub fn nonsidereal_mut(&mut self) -> &mut NonSiderealData {
        &mut self.nonsidereal
    }

    pub fn position(&self) -> String {
        self.body.display_name().to_string()
    }

    pub fn identity_eq(&self, other: &Self) -> bool {
        self == other && self.nonsidereal.identity_eq(&other.nonsidereal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyframe_core::Units;

    #[test]
    fn test_horizons_ids() {
        assert_eq!(SolarObject::Moon.horizons_id(), "301");
        assert_eq!(SolarObject::Neptune.horizons_id(), "899");
        let ids: std::collections::HashSet<_> = SolarObject::ALL.iter().map(|b| b.horizons_id()).collect();
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(SolarObject::from_name("Saturn"), Some(SolarObject::Saturn));
        assert_eq!(SolarObject::from_name("URANUS"), Some(SolarObject::Uranus));
        assert_eq!(SolarObject::from_name(" Mars "), Some(SolarObject::Mars));
        assert_eq!(SolarObject::from_name("Sun"), None);
    }

    #[test]
    fn test_position_is_body_name() {
        let t = NamedTarget::for_body(SolarObject::Venus);
        assert_eq!(t.position(), "Venus");
        assert_eq!(NamedTarget::new().body(), SolarObject::Moon);
    }

    #[test]
    fn test_equality_modes() {
        let a = NamedTarget::for_body(SolarObject::Mars);
        let mut b = a.clone();
        b.nonsidereal_mut().dec_mut().set_as(-12.0, Units::Degrees).unwrap();
        assert_eq!(a, b);
        assert!(!a.identity_eq(&b));
        b.set_body(SolarObject::Jupiter);
        assert_ne!(a, b);
    }
}
