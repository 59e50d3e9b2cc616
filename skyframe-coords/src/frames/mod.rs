pub mod options;
pub mod system;

pub use options::{ConicOption, DegDegOption, EquatorialOption, NamedOption, SystemOption};
pub use system::CoordinateSystem;

use skyframe_core::{TargetError, TargetResult};
use std::fmt::Debug;
use std::hash::Hash;

/// A closed set of named frame options belonging to one coordinate-system kind.
pub trait FrameOption: Copy + Eq + Hash + Debug + Default + 'static {
    /// Display name of the coordinate-system kind.
    const SYSTEM: &'static str;

    fn name(self) -> &'static str;

    /// Every legal option, in presentation order.
    fn options() -> &'static [Self];

    fn from_name(name: &str) -> Option<Self> {
        Self::options().iter().copied().find(|o| o.name() == name)
    }

    /// Like [`from_name`](Self::from_name), failing with
    /// [`TargetError::InvalidFrameOption`] for names this kind does not know.
    fn parse_name(name: &str) -> TargetResult<Self> {
        Self::from_name(name).ok_or_else(|| TargetError::invalid_frame_option(name, Self::SYSTEM))
    }
}
