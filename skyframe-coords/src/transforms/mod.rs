use crate::{targets::HmsDegTarget, CoordResult};
use skyframe_core::{ClassicKernel, FrameKernel};

/// Conversion to and from the canonical J2000 equatorial frame.
///
/// Every convertible target goes through J2000, so no pair of frames needs a
/// direct conversion. The `_using` forms take the numeric kernel explicitly;
/// the plain forms use [`ClassicKernel`].
pub trait J2000Frame {
    fn to_j2000_using(&self, kernel: &dyn FrameKernel) -> CoordResult<HmsDegTarget>;

    /// Writes a position, given as an equatorial target in any frame, into
    /// this target's own frame.
    fn with_j2000_using(&mut self, position: &HmsDegTarget, kernel: &dyn FrameKernel) -> CoordResult<()>;

    fn to_j2000(&self) -> CoordResult<HmsDegTarget> {
        self.to_j2000_using(&ClassicKernel)
    }

    fn with_j2000(&mut self, position: &HmsDegTarget) -> CoordResult<()> {
        self.with_j2000_using(position, &ClassicKernel)
    }
}
