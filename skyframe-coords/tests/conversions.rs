use approx::assert_abs_diff_eq;
use skyframe_coords::{
    DegDegOption, DegDegTarget, EquatorialOption, HmsDegTarget, J2000Frame, Quantity, Target,
    TargetError, Units,
};

fn vega_j2000() -> HmsDegTarget {
    let mut t = HmsDegTarget::new();
    t.set_name("Vega");
    t.set_axes_from_text("18:36:56.336", "+38:47:01.28").unwrap();
    t
}

// --- Equatorial ---

#[test]
fn switching_to_b1950_sets_epoch() {
    let mut t = vega_j2000();
    t.set_system_option(EquatorialOption::B1950);
    assert_eq!(t.epoch(), Quantity::years(1950.0));
}

#[test]
fn j2000_identity_round_trip() {
    let t = vega_j2000();
    let j2000 = t.to_j2000().unwrap();
    assert_eq!(j2000, t);

    let mut copy = t.clone();
    copy.with_j2000(&j2000).unwrap();
    assert_eq!(copy.ra().get_as(Units::Degrees), t.ra().get_as(Units::Degrees));
    assert_eq!(copy.dec().get_as(Units::Degrees), t.dec().get_as(Units::Degrees));
}

#[test]
fn b1950_round_trip_through_j2000() {
    let vega = vega_j2000();
    let mut b1950 = HmsDegTarget::with_option(EquatorialOption::B1950);
    b1950.with_j2000(&vega).unwrap();

    // Vega moved about 0.4 degrees in RA between the two equinoxes.
    let d_ra = vega.ra().degrees() - b1950.ra().degrees();
    assert!(d_ra > 0.3 && d_ra < 0.5, "delta ra {}", d_ra);

    let back = b1950.to_j2000().unwrap();
    assert_abs_diff_eq!(back.ra().degrees(), vega.ra().degrees(), epsilon = 1e-4);
    assert_abs_diff_eq!(back.dec().degrees(), vega.dec().degrees(), epsilon = 1e-4);
}

#[test]
fn jnnnn_precession_round_trip() {
    let vega = vega_j2000();
    let mut of_date = HmsDegTarget::new();
    of_date.set_system_option_with_epoch(EquatorialOption::Jnnnn, Some(2025.0));
    of_date.with_j2000(&vega).unwrap();
    assert!(of_date.ra().degrees() > vega.ra().degrees());

    let back = of_date.to_j2000().unwrap();
    assert_abs_diff_eq!(back.ra().degrees(), vega.ra().degrees(), epsilon = 1e-7);
    assert_abs_diff_eq!(back.dec().degrees(), vega.dec().degrees(), epsilon = 1e-7);
}

#[test]
fn bnnnn_at_1950_matches_b1950() {
    let vega = vega_j2000();
    let mut b1950 = HmsDegTarget::with_option(EquatorialOption::B1950);
    b1950.with_j2000(&vega).unwrap();
    let mut bnnnn = HmsDegTarget::with_option(EquatorialOption::Bnnnn);
    bnnnn.with_j2000(&vega).unwrap();
    assert_eq!(bnnnn.epoch_years(), 1950.0);
    assert_eq!(bnnnn.ra().degrees(), b1950.ra().degrees());
    assert_eq!(bnnnn.dec().degrees(), b1950.dec().degrees());
}

#[test]
fn apparent_is_treated_as_j2000() {
    let vega = vega_j2000();
    let mut apparent = HmsDegTarget::with_option(EquatorialOption::Apparent);
    apparent.with_j2000(&vega).unwrap();
    assert_eq!(apparent.ra().degrees(), vega.ra().degrees());
}

// --- Galactic and Az/Alt ---

#[test]
fn galactic_pole_in_j2000() {
    let mut pole = DegDegTarget::new();
    pole.set_position(0.0, 90.0).unwrap();
    let j2000 = pole.to_j2000().unwrap();
    assert_abs_diff_eq!(j2000.ra().degrees(), 192.859, epsilon = 1e-2);
    assert_abs_diff_eq!(j2000.dec().degrees(), 27.128, epsilon = 1e-2);
}

#[test]
fn galactic_accepts_b1950_input() {
    let vega = vega_j2000();
    let mut b1950 = HmsDegTarget::with_option(EquatorialOption::B1950);
    b1950.with_j2000(&vega).unwrap();

    let mut from_j2000 = DegDegTarget::new();
    from_j2000.with_j2000(&vega).unwrap();
    let mut from_b1950 = DegDegTarget::new();
    from_b1950.with_j2000(&b1950).unwrap();

    assert_abs_diff_eq!(
        from_j2000.longitude().degrees(),
        from_b1950.longitude().degrees(),
        epsilon = 5e-4
    );
    assert_abs_diff_eq!(
        from_j2000.latitude().degrees(),
        from_b1950.latitude().degrees(),
        epsilon = 5e-4
    );
}

#[test]
fn az_alt_conversion_fails_without_touching_data() {
    let mut t = Target::from(DegDegTarget::with_option(DegDegOption::AzAlt));
    t.set_xy(180.0, 45.0).unwrap();
    let before = t.clone();

    let err = t.set_target_with_j2000(10.0, 10.0).unwrap_err();
    assert!(matches!(
        err.as_target_error(),
        Some(TargetError::UnsupportedConversion { .. })
    ));
    assert_eq!(t, before);
}

#[test]
fn target_union_dispatches_conversion() {
    let mut t = Target::from_system_name("Galactic").unwrap();
    t.set_target_with_j2000(266.405, -28.936).unwrap();
    let l = t.c1().get_as(Units::Degrees).unwrap();
    assert!(l < 0.05 || l > 359.95, "longitude {}", l);
    assert_abs_diff_eq!(t.c2().get_as(Units::Degrees).unwrap(), 0.0, epsilon = 0.05);
}
