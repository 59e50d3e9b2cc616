use proptest::prelude::*;
use skyframe_core::angle::{normalize_dec, normalize_ra};
use skyframe_core::format::{CoordinateFormat, DmsFormat, HmsFormat, Separator};
use skyframe_core::{ParamKind, Quantity, Units};

const KINDS: [ParamKind; 12] = [
    ParamKind::Epoch,
    ParamKind::ProperMotionRa,
    ParamKind::ProperMotionDec,
    ParamKind::RadialVelocity,
    ParamKind::Parallax,
    ParamKind::EffectiveWavelength,
    ParamKind::AscendingNode,
    ParamKind::SemiMajorAxis,
    ParamKind::Inclination,
    ParamKind::MeanAnomaly,
    ParamKind::DailyMotion,
    ParamKind::Perihelion,
];

fn separator() -> impl Strategy<Value = Separator> {
    prop_oneof![
        Just(Separator::Colon),
        Just(Separator::Spaces),
        Just(Separator::Letters),
    ]
}

/// A field token that is not a plain decimal. Letters that double as
/// separators (`d`, `h`, `m`, `s`) are left out so the token survives splitting.
fn bad_field() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("nan".to_string()),
        Just("NaN".to_string()),
        Just("inf".to_string()),
        Just("Infinity".to_string()),
        Just("1e5".to_string()),
        "[a-ce-gi-ln-rt-zA-Z]{1,6}",
    ]
}

/// Angular distance on the circle, so 359.99.. and 0.0 compare close.
fn circular_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

proptest! {
    #[test]
    fn normalize_ra_in_range_and_idempotent(deg in -1.0e6f64..1.0e6) {
        let n = normalize_ra(deg);
        prop_assert!((0.0..360.0).contains(&n), "{} -> {}", deg, n);
        prop_assert_eq!(normalize_ra(n), n);
    }

    #[test]
    fn normalize_dec_in_range(deg in -1.0e6f64..1.0e6) {
        let n = normalize_dec(deg);
        prop_assert!((-90.0..=90.0).contains(&n), "{} -> {}", deg, n);
    }

    #[test]
    fn hms_format_parse_round_trip(deg in 0.0f64..360.0, precision in 0u8..=4, sep in separator()) {
        let hms = HmsFormat::new(sep, precision);
        let text = hms.format(deg);
        let parsed = hms.parse(&text).unwrap();
        // One unit in the last seconds digit, as degrees.
        let tolerance = 15.0 * 10f64.powi(-(precision as i32)) / 3600.0;
        prop_assert!(circular_diff(parsed, deg) <= tolerance, "{} -> {} -> {}", deg, text, parsed);
    }

    #[test]
    fn dms_format_parse_round_trip(deg in -90.0f64..=90.0, precision in 0u8..=4, sep in separator()) {
        let dms = DmsFormat::new(sep, precision);
        let text = dms.format(deg);
        let parsed = dms.parse(&text).unwrap();
        let tolerance = 10f64.powi(-(precision as i32)) / 3600.0;
        prop_assert!((parsed - deg).abs() <= tolerance, "{} -> {} -> {}", deg, text, parsed);
    }

    #[test]
    fn non_numeric_field_is_rejected(
        bad in bad_field(),
        position in 0usize..3,
        whole in 0u32..24,
        minutes in 0u32..60,
    ) {
        let mut fields = vec![whole.to_string(), minutes.to_string(), "00".to_string()];
        fields[position] = bad;
        let text = fields.join(":");
        let hms = HmsFormat::default();
        let dms = DmsFormat::default();
        prop_assert!(hms.parse(&text).is_err(), "hms accepted {}", text);
        prop_assert!(dms.parse(&text).is_err(), "dms accepted {}", text);
    }

    #[test]
    fn export_round_trip(kind_index in 0usize..KINDS.len(), unit_index in 0usize..4, value in -1.0e9f64..1.0e9) {
        let kind = KINDS[kind_index];
        let legal = kind.legal_units();
        let units = legal[unit_index % legal.len()];
        let q = Quantity::new(kind, value, units).unwrap();
        let back = Quantity::from_export(kind, &q.export_string()).unwrap();
        prop_assert_eq!(back, q);
    }

    #[test]
    fn with_units_keeps_legal_unit(kind_index in 0usize..KINDS.len(), unit_index in 0usize..4) {
        let kind = KINDS[kind_index];
        let legal = kind.legal_units();
        let units = legal[unit_index % legal.len()];
        let q = Quantity::with_default_units(kind, 1.0);
        prop_assert_eq!(q.with_units(units).unwrap().units(), units);
        for other in Units::ALL.iter().filter(|u| !legal.contains(u)) {
            prop_assert!(q.with_units(*other).is_err());
        }
    }
}
