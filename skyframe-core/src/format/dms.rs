use super::{combine, render, split, tokenize, CoordinateFormat, Separator};
use crate::errors::TargetResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Degrees-minutes-seconds notation for declination and longitude.
///
/// Values are formatted as given, without range reduction, so the same
/// format serves declinations in [-90, 90] and longitudes in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DmsFormat {
    pub separator: Separator,
    /// Decimal places of the arcseconds field.
    pub precision: u8,
}

impl DmsFormat {
    pub const fn new(separator: Separator, precision: u8) -> Self {
        Self {
            separator,
            precision,
        }
    }
}

impl Default for DmsFormat {
    fn default() -> Self {
        Self::new(Separator::Colon, 2)
    }
}

impl CoordinateFormat for DmsFormat {
    fn format(&self, degrees: f64) -> String {
        let fields = split(degrees.abs(), self.precision);
        render(degrees < 0.0, fields, self.precision, self.separator.markers(false))
    }

    fn parse(&self, text: &str) -> TargetResult<f64> {
        let (negative, fields) = tokenize(text, "DmsFormat::parse", true)?;
        let degrees = combine(fields);
        Ok(if negative { -degrees } else { degrees })
    }

    fn parse_parts(&self, whole: i32, minutes: i32, seconds: f64) -> f64 {
        let magnitude = combine([whole.unsigned_abs() as f64, minutes as f64, seconds]);
        if whole < 0 {
            -magnitude
        } else {
            magnitude
        }
    }
}
