#![cfg(feature = "serde")]

use skyframe_core::format::{HmsFormat, Separator};
use skyframe_core::{Dms, FormatterRegistry, Hms, ParamKind, Quantity, Units};

#[test]
fn quantity_round_trip() {
    let q = Quantity::new(ParamKind::ProperMotionRa, -3.25, Units::SecondsPerYear).unwrap();
    let json = serde_json::to_string(&q).unwrap();
    let back: Quantity = serde_json::from_str(&json).unwrap();
    assert_eq!(back, q);
}

#[test]
fn coordinate_keeps_override() {
    let ra = Hms::from_text_with("01:02:03", HmsFormat::new(Separator::Spaces, 1)).unwrap();
    let json = serde_json::to_string(&ra).unwrap();
    let back: Hms = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ra);
    assert_eq!(back.format_override(), ra.format_override());

    let dec = Dms::from_degrees(-12.5);
    let back: Dms = serde_json::from_str(&serde_json::to_string(&dec).unwrap()).unwrap();
    assert_eq!(back.degrees(), -12.5);
}

#[test]
fn registry_round_trip() {
    let mut registry = FormatterRegistry::default();
    registry.hms = HmsFormat::new(Separator::Letters, 4);
    let back: FormatterRegistry =
        serde_json::from_str(&serde_json::to_string(&registry).unwrap()).unwrap();
    assert_eq!(back, registry);
}
