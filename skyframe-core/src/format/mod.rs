//! Sexagesimal formatting and parsing of angles.
//!
//! Two notations are supported:
//!
//! | Format | Domain | Example (colon) | Example (letters) |
//! |--------|--------|-----------------|-------------------|
//! | [`HmsFormat`] | right ascension, [0, 24h) | `10:22:33.200` | `10h22m33.200s` |
//! | [`DmsFormat`] | declination, longitude | `-00:30:00.00` | `-00d30m00.00s` |
//!
//! # Formatting
//!
//! The value is split into a whole part, whole minutes and fractional
//! seconds. Seconds are rounded to the configured precision and any carry
//! propagates upward: `59.996` seconds at precision 2 becomes `00.00` with the
//! minute incremented, and the minute carry can in turn increment the whole
//! part. For hours the whole part then wraps at 24. Every field is zero-padded
//! to two digits; a minus sign is printed only for negative values that do not
//! round to zero.
//!
//! # Parsing
//!
//! Parsing trims the input, accepts `,` as a decimal point and splits the text
//! on any run of `:`, `h`, `m`, `s`, `d` or whitespace. The first one to three
//! numeric tokens are read as whole, minutes and seconds; missing trailing
//! fields are zero. A leading `-` negates the whole value (DMS also accepts a
//! leading `+`). Hour values are converted to degrees and normalized into
//! [0, 360); degree values are returned as parsed.
//!
//! ```
//! use skyframe_core::format::{CoordinateFormat, DmsFormat, HmsFormat};
//!
//! let hms = HmsFormat::default();
//! let ra = hms.parse("10:22:33.2").unwrap();
//! assert_eq!(hms.format(ra), "10:22:33.200");
//!
//! let dms = DmsFormat::default();
//! assert_eq!(dms.parse("-00:30:00").unwrap(), -0.5);
//! assert_eq!(dms.format(-0.5), "-00:30:00.00");
//! ```

mod dms;
mod hms;
mod registry;

pub use dms::DmsFormat;
pub use hms::HmsFormat;
pub use registry::FormatterRegistry;

use crate::errors::{TargetError, TargetResult};
use crate::math::round_to;
use once_cell::sync::Lazy;
use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static FIELD_SEPARATORS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[:hmsd\s]+").unwrap_or_else(|e| panic!("invalid separator regex: {}", e))
});

static NUMERIC_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+(\.\d*)?|\.\d+)$")
        .unwrap_or_else(|e| panic!("invalid numeric field regex: {}", e))
});

/// A bidirectional text format for an angle held in degrees.
pub trait CoordinateFormat {
    /// Renders `degrees` as sexagesimal text.
    fn format(&self, degrees: f64) -> String;

    /// Parses sexagesimal text into degrees.
    fn parse(&self, text: &str) -> TargetResult<f64>;

    /// Combines already-split fields into degrees.
    ///
    /// The sign of `whole` applies to the entire value.
    fn parse_parts(&self, whole: i32, minutes: i32, seconds: f64) -> f64;
}

/// How the three sexagesimal fields are delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Separator {
    /// `10:22:33.200`
    #[default]
    Colon,
    /// `10 22 33.200`
    Spaces,
    /// `10h22m33.200s` or `10d22m33.20s`
    Letters,
}

impl Separator {
    fn markers(self, hours: bool) -> [&'static str; 3] {
        match self {
            Separator::Colon => [":", ":", ""],
            Separator::Spaces => [" ", " ", ""],
            Separator::Letters if hours => ["h", "m", "s"],
            Separator::Letters => ["d", "m", "s"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Fields {
    whole: f64,
    minutes: f64,
    seconds: f64,
}

impl Fields {
    fn is_zero(&self) -> bool {
        self.whole == 0.0 && self.minutes == 0.0 && self.seconds == 0.0
    }
}

/// Splits a non-negative value into rounded sexagesimal fields, carrying
/// rounded-up seconds into minutes and minutes into the whole part.
fn split(value: f64, precision: u8) -> Fields {
    let mut whole = libm::trunc(value);
    let rem = (value - whole) * 60.0;
    let mut minutes = libm::trunc(rem);
    let mut seconds = round_to((rem - minutes) * 60.0, precision);
    if seconds >= 60.0 {
        seconds -= 60.0;
        minutes += 1.0;
    }
    if minutes >= 60.0 {
        minutes -= 60.0;
        whole += 1.0;
    }
    Fields {
        whole,
        minutes,
        seconds,
    }
}

fn render(negative: bool, fields: Fields, precision: u8, markers: [&str; 3]) -> String {
    let sign = if negative && !fields.is_zero() { "-" } else { "" };
    let prec = precision as usize;
    let width = if prec > 0 { prec + 3 } else { 2 };
    format!(
        "{sign}{:02}{}{:02}{}{:0width$.prec$}{}",
        fields.whole as u64,
        markers[0],
        fields.minutes as u64,
        markers[1],
        fields.seconds,
        markers[2],
    )
}

/// Tokenizes sexagesimal text into a sign and up to three fields.
fn tokenize(text: &str, context: &str, allow_plus: bool) -> TargetResult<(bool, [f64; 3])> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TargetError::parse(context, text, "empty input"));
    }
    let cleaned = trimmed.replace(',', ".");
    let (negative, body) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => match cleaned.strip_prefix('+') {
            Some(rest) if allow_plus => (false, rest),
            _ => (false, cleaned.as_str()),
        },
    };

    let mut fields = [0.0; 3];
    let mut count = 0;
    for token in FIELD_SEPARATORS
        .split(body)
        .filter(|t| !t.is_empty())
        .take(3)
    {
        if token.starts_with('-') || token.starts_with('+') {
            return Err(TargetError::parse(context, text, "misplaced sign"));
        }
        // Only plain decimals; f64 parsing alone would admit "nan", "inf" and exponents.
        if !NUMERIC_FIELD.is_match(token) {
            return Err(TargetError::parse(context, text, "invalid numeric field"));
        }
        fields[count] = token
            .parse::<f64>()
            .map_err(|_| TargetError::parse(context, text, "invalid numeric field"))?;
        count += 1;
    }
    if count == 0 {
        return Err(TargetError::parse(context, text, "no numeric fields"));
    }
    Ok((negative, fields))
}

#[inline]
fn combine(fields: [f64; 3]) -> f64 {
    fields[0] + fields[1] / 60.0 + fields[2] / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_carries_rounded_seconds() {
        let f = split(1.0 + 59.0 / 60.0 + 59.996 / 3600.0, 2);
        assert_eq!(f.whole, 2.0);
        assert_eq!(f.minutes, 0.0);
        assert_eq!(f.seconds, 0.0);
    }

    #[test]
    fn test_render_padding() {
        let f = Fields {
            whole: 5.0,
            minutes: 7.0,
            seconds: 3.5,
        };
        assert_eq!(render(false, f, 2, Separator::Colon.markers(true)), "05:07:03.50");
        assert_eq!(render(false, f, 1, Separator::Letters.markers(false)), "05d07m03.5s");
        let whole_seconds = Fields { seconds: 4.0, ..f };
        assert_eq!(render(true, whole_seconds, 0, Separator::Spaces.markers(false)), "-05 07 04");
    }

    #[test]
    fn test_render_drops_sign_of_zero() {
        let f = Fields {
            whole: 0.0,
            minutes: 0.0,
            seconds: 0.0,
        };
        assert_eq!(render(true, f, 2, Separator::Colon.markers(false)), "00:00:00.00");
    }

    #[test]
    fn test_tokenize() {
        let (neg, f) = tokenize(" -12h30m15,5s ", "test", false).unwrap();
        assert!(neg);
        assert_eq!(f, [12.0, 30.0, 15.5]);

        let (neg, f) = tokenize("+45", "test", true).unwrap();
        assert!(!neg);
        assert_eq!(f, [45.0, 0.0, 0.0]);

        let (_, f) = tokenize("1:2:3:4", "test", true).unwrap();
        assert_eq!(f, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_tokenize_errors() {
        assert!(tokenize("", "test", true).is_err());
        assert!(tokenize("   ", "test", true).is_err());
        assert!(tokenize("-", "test", true).is_err());
        assert!(tokenize("12:ab:00", "test", true).is_err());
        assert!(tokenize("12:-3:00", "test", true).is_err());
        assert!(tokenize("12:+3:00", "test", true).is_err());
        assert!(tokenize("+12", "test", false).is_err());
    }

    #[test]
    fn test_tokenize_rejects_non_finite_fields() {
        for text in ["nan", "NaN", "inf", "-inf", "infinity", "10:inf", "10:20:nan", "1e3", "1.5e1:00"] {
            let err = tokenize(text, "test", true).unwrap_err();
            assert!(err.is_parse_error(), "{} -> {:?}", text, err);
        }
    }

    #[test]
    fn test_formatters_reject_non_finite_fields() {
        let dms = DmsFormat::new(Separator::Colon, 2);
        let hms = HmsFormat::new(Separator::Colon, 2);
        for text in ["nan", "inf", "10:inf", "Infinity", "00:00:NaN"] {
            assert!(dms.parse(text).is_err(), "dms {}", text);
            assert!(hms.parse(text).is_err(), "hms {}", text);
        }
    }

    #[test]
    fn test_tokenize_accepts_bare_decimal_forms() {
        let (_, f) = tokenize("10.:.5:7", "test", true).unwrap();
        assert_eq!(f, [10.0, 0.5, 7.0]);
    }
}
