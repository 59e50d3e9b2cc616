use skyframe_coords::{
    ConicOption, ConicTarget, CoordError, FormatterRegistry, HorizonsLink, NamedTarget, ParamKind,
    Quantity, SolarObject, SystemOption, Target, TargetError, Units,
};

// --- Factory and kind switching ---

#[test]
fn every_option_name_builds_a_target() {
    let names = [
        ("J2000", "HMS Deg"),
        ("B1950", "HMS Deg"),
        ("JNNNN", "HMS Deg"),
        ("BNNNN", "HMS Deg"),
        ("Apparent", "HMS Deg"),
        ("Hipparcos", "HMS Deg"),
        ("Galactic", "Deg Deg"),
        ("Az/Alt", "Deg Deg"),
        ("AsA major planet", "Conic"),
        ("JPL minor body", "Conic"),
        ("MPC minor planet", "Conic"),
        ("Solar system object", "Named"),
    ];
    for (name, kind) in names {
        let t = Target::from_system_name(name).unwrap();
        assert_eq!(t.kind_name(), kind, "{}", name);
    }
}

#[test]
fn unknown_system_name() {
    let err = Target::from_system_name("Supergalactic").unwrap_err();
    assert_eq!(err, CoordError::unknown_system("Supergalactic"));
}

#[test]
fn switching_kind_keeps_name_and_brightness() {
    let mut t = Target::default();
    t.set_name("C/2020 F3");
    t.set_brightness(Some("7.0".into()));
    t.set_tracking_system("MPC comet").unwrap();
    match &t {
        Target::Conic(c) => assert_eq!(c.system_option(), ConicOption::MpcComet),
        other => panic!("expected conic target, got {:?}", other),
    }
    assert_eq!(t.name(), "C/2020 F3");
    assert_eq!(t.brightness(), Some("7.0"));

    t.set_tracking_system("Solar system object").unwrap();
    assert_eq!(t.system_option(), SystemOption::from_name("Solar system object").unwrap());
    assert_eq!(t.position(), "Moon");
}

// --- Axis text ---

#[test]
fn strict_text_is_atomic() {
    let mut t = Target::from_system_name("Galactic").unwrap();
    t.set_axes_from_text("120:00:00", "-10:00:00").unwrap();
    let err = t.set_axes_from_text("130:00:00", "ten").unwrap_err();
    assert!(err.as_target_error().is_some_and(TargetError::is_parse_error));
    assert_eq!(t.c1().get_as(Units::Degrees).unwrap(), 120.0);
    assert_eq!(t.c2().get_as(Units::Degrees).unwrap(), -10.0);
}

#[test]
fn lenient_text_falls_back_per_axis() {
    let mut t = Target::default();
    t.set_axes_from_text_lenient("05:00:00", "");
    assert_eq!(t.c1().get_as(Units::Degrees).unwrap(), 75.0);
    assert_eq!(t.c2().get_as(Units::Degrees).unwrap(), 0.0);
}

#[test]
fn position_strings() {
    let registry = FormatterRegistry::default();
    let mut t = Target::default();
    t.set_name("Polaris");
    t.set_xy(37.95, 89.264).unwrap();
    assert_eq!(
        t.position_with(&registry),
        "Polaris RA: 02:31:48.000 Dec: 89:15:50.40 (J2000)"
    );
    assert_eq!(Target::from(ConicTarget::new()).position(), "Orbital Elements");
    assert_eq!(
        Target::from(NamedTarget::for_body(SolarObject::Saturn)).position(),
        "Saturn"
    );
}

// --- Tracking data ---

#[test]
fn tracking_values_use_export_form() {
    let mut t = Target::from_system_name("J2000").unwrap();
    t.set_tracking_parallax("130.23[milli-arcsecs]").unwrap();
    let parallax = t.tracking_parallax().unwrap();
    assert_eq!(parallax.units(), Units::MilliArcsecs);
    assert_eq!(parallax.export_string(), "130.23[milli-arcsecs]");

    let err = t.set_tracking_parallax("1[degrees]").unwrap_err();
    assert!(matches!(
        err.as_target_error(),
        Some(TargetError::InvalidUnit { .. })
    ));
    assert_eq!(t.tracking_parallax(), Some(parallax));

    assert!(t.set_tracking_radial_velocity("fast").is_err());
    assert_eq!(
        t.tracking_radial_velocity(),
        Some(Quantity::zero(ParamKind::RadialVelocity))
    );
}

#[test]
fn sidereal_only_setters_report_kind() {
    let mut t = Target::from_system_name("JPL minor body").unwrap();
    let err = t.set_tracking_proper_motion_ra("1.0").unwrap_err();
    assert_eq!(
        err.to_string(),
        "set_tracking_proper_motion_ra is not available for Conic targets"
    );
    assert!(t.set_tracking_effective_wavelength("auto").is_err());
}

#[test]
fn horizons_link_is_both_or_neither() {
    let mut t = Target::from(NamedTarget::for_body(SolarObject::Mars));
    assert!(matches!(
        t.set_horizons(None, Some(3)),
        Err(CoordError::IncompleteHorizonsLink { .. })
    ));
    t.set_horizons(Some(499), Some(0)).unwrap();
    assert_eq!(t.horizons(), Some(HorizonsLink::new(499, 0)));
}

// --- Equality ---

#[test]
fn non_sidereal_equality_ignores_position() {
    let mut a = Target::from(NamedTarget::for_body(SolarObject::Jupiter));
    a.set_xy(10.0, 10.0).unwrap();
    let mut b = a.clone();
    b.set_xy(11.0, 9.0).unwrap();
    assert_eq!(a, b);
    assert!(a.struct_eq(&b));
    assert!(!a.identity_eq(&b));
    assert!(a.identity_eq(&a.clone()));
}
