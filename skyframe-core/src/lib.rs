pub mod angle;
pub mod constants;
pub mod coordinate;
pub mod errors;
pub mod format;
pub mod kernel;
pub mod math;
pub mod quantity;
pub mod units;

pub use coordinate::{
    AxisCoordinate, AxisKind, Coordinate, DecAxis, Dms, DmsLong, Hms, LongitudeAxis, RaAxis,
};
pub use errors::{TargetError, TargetResult};
pub use format::{CoordinateFormat, DmsFormat, FormatterRegistry, HmsFormat, Separator};
pub use kernel::{ClassicKernel, FrameKernel, RotationMatrix3, SkyPoint};
pub use quantity::{ParamKind, Quantity};
pub use units::Units;
