use super::FrameOption;
use skyframe_core::{AxisKind, Coordinate, TargetResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A frame option together with the two coordinate axes it governs.
///
/// The axis kinds are fixed by the type parameters, so an equatorial system
/// always holds an [`Hms`](skyframe_core::Hms) and a [`Dms`](skyframe_core::Dms)
/// and a mismatched axis cannot be assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "O: Serialize, Coordinate<A1>: Serialize, Coordinate<A2>: Serialize",
        deserialize = "O: Deserialize<'de>, Coordinate<A1>: Deserialize<'de>, Coordinate<A2>: Deserialize<'de>"
    ))
)]
pub struct CoordinateSystem<O: FrameOption, A1: AxisKind, A2: AxisKind> {
    option: O,
    c1: Coordinate<A1>,
    c2: Coordinate<A2>,
}

impl<O: FrameOption, A1: AxisKind, A2: AxisKind> CoordinateSystem<O, A1, A2> {
    pub fn new(option: O) -> Self {
        Self {
            option,
            c1: Coordinate::new(),
            c2: Coordinate::new(),
        }
    }

    pub fn option(&self) -> O {
        self.option
    }

    pub fn legal_options() -> &'static [O] {
        O::options()
    }

    /// Switches the frame option. Returns `false`, changing nothing, when
    /// `option` is already current.
    pub fn set_option(&mut self, option: O) -> bool {
        if option == self.option {
            return false;
        }
        tracing::debug!(
            system = O::SYSTEM,
            from = self.option.name(),
            to = option.name(),
            "frame option changed"
        );
        self.option = option;
        true
    }

    /// Switches the frame option by display name.
    pub fn set_option_by_name(&mut self, name: &str) -> TargetResult<bool> {
        let option = O::parse_name(name)?;
        Ok(self.set_option(option))
    }

    pub fn c1(&self) -> &Coordinate<A1> {
        &self.c1
    }

    pub fn c1_mut(&mut self) -> &mut Coordinate<A1> {
        &mut self.c1
    }

    pub fn c2(&self) -> &Coordinate<A2> {
        &self.c2
    }

    pub fn c2_mut(&mut self) -> &mut Coordinate<A2> {
        &mut self.c2
    }

    pub fn set_c1(&mut self, c1: Coordinate<A1>) {
        self.c1 = c1;
    }

    pub fn set_c2(&mut self, c2: Coordinate<A2>) {
        self.c2 = c2;
    }

    pub fn set_axes(&mut self, c1: Coordinate<A1>, c2: Coordinate<A2>) {
        self.c1 = c1;
        self.c2 = c2;
    }

    /// Parses both axes from text. Neither axis changes unless both parse.
    pub fn set_axes_from_text(&mut self, c1: &str, c2: &str) -> TargetResult<()> {
        let mut new_c1 = self.c1.clone();
        let mut new_c2 = self.c2.clone();
        new_c1.set_from_text(c1)?;
        new_c2.set_from_text(c2)?;
        self.c1 = new_c1;
        self.c2 = new_c2;
        Ok(())
    }
}

impl<O: FrameOption, A1: AxisKind, A2: AxisKind> Default for CoordinateSystem<O, A1, A2> {
    fn default() -> Self {
        Self::new(O::default())
    }
}
