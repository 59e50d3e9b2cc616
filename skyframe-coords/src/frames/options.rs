//! Frame options for each coordinate-system kind.
//!
//! | Kind | System name | Options | Default |
//! |------|-------------|---------|---------|
//! | Equatorial | `HMS Deg` | J2000, B1950, JNNNN, BNNNN, Apparent | J2000 |
//! | Degree/degree | `Deg Deg` | Galactic, Az/Alt | Galactic |
//! | Conic | `Conic` | seven orbital-element conventions | AsA comet |
//! | Named | `Named` | Solar system object | Solar system object |

use super::FrameOption;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EquatorialOption {
    #[default]
    J2000,
    B1950,
    /// Julian epoch other than 2000.
    Jnnnn,
    /// Besselian epoch other than 1950.
    Bnnnn,
    Apparent,
}

impl EquatorialOption {
    /// True for the options whose epochs are Besselian (FK4).
    pub fn is_besselian(self) -> bool {
        matches!(self, EquatorialOption::B1950 | EquatorialOption::Bnnnn)
    }
}

impl FrameOption for EquatorialOption {
    const SYSTEM: &'static str = "HMS Deg";

    fn name(self) -> &'static str {
        match self {
            EquatorialOption::J2000 => "J2000",
            EquatorialOption::B1950 => "B1950",
            EquatorialOption::Jnnnn => "JNNNN",
            EquatorialOption::Bnnnn => "BNNNN",
            EquatorialOption::Apparent => "Apparent",
        }
    }

    fn options() -> &'static [Self] {
        &[
            EquatorialOption::J2000,
            EquatorialOption::B1950,
            EquatorialOption::Jnnnn,
            EquatorialOption::Bnnnn,
            EquatorialOption::Apparent,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DegDegOption {
    #[default]
    Galactic,
    AzAlt,
}

impl FrameOption for DegDegOption {
    const SYSTEM: &'static str = "Deg Deg";

    fn name(self) -> &'static str {
        match self {
            DegDegOption::Galactic => "Galactic",
            DegDegOption::AzAlt => "Az/Alt",
        }
    }

    fn options() -> &'static [Self] {
        &[DegDegOption::Galactic, DegDegOption::AzAlt]
    }
}

/// Orbital-element conventions for conic targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConicOption {
    AsaMajorPlanet,
    AsaMinorPlanet,
    #[default]
    AsaComet,
    JplMajorPlanet,
    JplMinorBody,
    MpcMinorPlanet,
    MpcComet,
}

impl FrameOption for ConicOption {
    const SYSTEM: &'static str = "Conic";

    fn name(self) -> &'static str {
        match self {
            ConicOption::AsaMajorPlanet => "AsA major planet",
            ConicOption::AsaMinorPlanet => "AsA minor planet",
            ConicOption::AsaComet => "AsA comet",
            ConicOption::JplMajorPlanet => "JPL major planet",
            ConicOption::JplMinorBody => "JPL minor body",
            ConicOption::MpcMinorPlanet => "MPC minor planet",
            ConicOption::MpcComet => "MPC comet",
        }
    }

    fn options() -> &'static [Self] {
        &[
            ConicOption::AsaMajorPlanet,
            ConicOption::AsaMinorPlanet,
            ConicOption::AsaComet,
            ConicOption::JplMajorPlanet,
            ConicOption::JplMinorBody,
            ConicOption::MpcMinorPlanet,
            ConicOption::MpcComet,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NamedOption {
    #[default]
    SolarObject,
}

impl FrameOption for NamedOption {
    const SYSTEM: &'static str = "Named";

    fn name(self) -> &'static str {
        "Solar system object"
    }

    fn options() -> &'static [Self] {
        &[NamedOption::SolarObject]
    }
}

/// A frame option of any kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SystemOption {
    Equatorial(EquatorialOption),
    DegDeg(DegDegOption),
    Conic(ConicOption),
    Named(NamedOption),
}

impl SystemOption {
    pub fn name(self) -> &'static str {
        match self {
            SystemOption::Equatorial(o) => o.name(),
            SystemOption::DegDeg(o) => o.name(),
            SystemOption::Conic(o) => o.name(),
            SystemOption::Named(o) => o.name(),
        }
    }

    /// Name of the coordinate-system kind this option belongs to.
    pub fn system(self) -> &'static str {
        match self {
            SystemOption::Equatorial(_) => EquatorialOption::SYSTEM,
            SystemOption::DegDeg(_) => DegDegOption::SYSTEM,
            SystemOption::Conic(_) => ConicOption::SYSTEM,
            SystemOption::Named(_) => NamedOption::SYSTEM,
        }
    }

    /// Looks an option up by display name across every kind.
    ///
    /// `Hipparcos` is accepted as an alias for J2000.
    pub fn from_name(name: &str) -> Option<SystemOption> {
        if name == "Hipparcos" {
            return Some(SystemOption::Equatorial(EquatorialOption::J2000));
        }
        EquatorialOption::from_name(name)
            .map(SystemOption::Equatorial)
            .or_else(|| DegDegOption::from_name(name).map(SystemOption::DegDeg))
            .or_else(|| ConicOption::from_name(name).map(SystemOption::Conic))
            .or_else(|| NamedOption::from_name(name).map(SystemOption::Named))
    }
}

impl fmt::Display for SystemOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<EquatorialOption> for SystemOption {
    fn from(o: EquatorialOption) -> Self {
        SystemOption::Equatorial(o)
    }
}

impl From<DegDegOption> for SystemOption {
    fn from(o: DegDegOption) -> Self {
        SystemOption::DegDeg(o)
    }
}

impl From<ConicOption> for SystemOption {
    fn from(o: ConicOption) -> Self {
        SystemOption::Conic(o)
    }
}

impl From<NamedOption> for SystemOption {
    fn from(o: NamedOption) -> Self {
        SystemOption::Named(o)
    }
}
