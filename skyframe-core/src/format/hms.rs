use super::{combine, render, split, tokenize, CoordinateFormat, Separator};
use crate::angle::{deg_to_hours, hours_to_deg, normalize_ra};
use crate::errors::TargetResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hours-minutes-seconds notation for right ascension.
///
/// Output is always in [0, 24h); negative input wraps before formatting and
/// a value whose seconds round up to 24h prints as `00:00:00`.
///
/// ```
/// use skyframe_core::format::{CoordinateFormat, HmsFormat, Separator};
///
/// let fmt = HmsFormat::new(Separator::Letters, 1);
/// assert_eq!(fmt.format(-15.0), "23h00m00.0s");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HmsFormat {
    pub separator: Separator,
    /// Decimal places of the seconds field.
    pub precision: u8,
}

impl HmsFormat {
    pub const fn new(separator: Separator, precision: u8) -> Self {
        Self {
            separator,
            precision,
        }
    }
}

impl Default for HmsFormat {
    fn default() -> Self {
        Self::new(Separator::Colon, 3)
    }
}

impl CoordinateFormat for HmsFormat {
    fn format(&self, degrees: f64) -> String {
        let hours = deg_to_hours(normalize_ra(degrees));
        let mut fields = split(hours, self.precision);
        if fields.whole >= 24.0 {
            fields.whole -= 24.0;
        }
        render(false, fields, self.precision, self.separator.markers(true))
    }

    fn parse(&self, text: &str) -> TargetResult<f64> {
        let (negative, fields) = tokenize(text, "HmsFormat::parse", false)?;
        let hours = combine(fields);
        let signed = if negative { -hours } else { hours };
        Ok(normalize_ra(hours_to_deg(signed)))
    }

    fn parse_parts(&self, whole: i32, minutes: i32, seconds: f64) -> f64 {
        let magnitude = combine([whole.unsigned_abs() as f64, minutes as f64, seconds]);
        let hours = if whole < 0 { -magnitude } else { magnitude };
        normalize_ra(hours_to_deg(hours))
    }
}
