pub mod errors;
pub mod frames;
pub mod targets;
pub mod transforms;

pub use errors::{CoordError, CoordResult};

pub use frames::{
    ConicOption, CoordinateSystem, DegDegOption, EquatorialOption, FrameOption, NamedOption,
    SystemOption,
};

pub use targets::{
    ConicTarget, DegDegTarget, HmsDegTarget, HorizonsLink, NamedTarget, NonSiderealData,
    SolarObject, Target,
};

pub use transforms::J2000Frame;

pub use skyframe_core::{
    ClassicKernel, Dms, DmsLong, FormatterRegistry, FrameKernel, Hms, ParamKind, Quantity,
    TargetError, TargetResult, Units,
};
