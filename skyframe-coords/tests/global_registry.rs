//! The process-wide format registry is shared by every test in a binary, so
//! everything that mutates it lives in this single test.

use skyframe_coords::{FormatterRegistry, HmsDegTarget, Target};
use skyframe_core::format::{DmsFormat, HmsFormat, Separator};

#[test]
fn global_registry_drives_unformatted_coordinates() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut t = HmsDegTarget::from_j2000_degrees(15.0, -0.5).unwrap();
    t.set_name("probe");
    assert_eq!(t.position(), "probe RA: 01:00:00.000 Dec: -00:30:00.00 (J2000)");

    FormatterRegistry::update(|r| {
        r.hms = HmsFormat::new(Separator::Letters, 1);
        r.dms = DmsFormat::new(Separator::Spaces, 0);
    });
    assert_eq!(t.position(), "probe RA: 01h00m00.0s Dec: -00 30 00 (J2000)");

    // An override is not affected by the registry.
    t.ra_mut().set_format(Some(HmsFormat::default()));
    assert_eq!(t.position(), "probe RA: 01:00:00.000 Dec: -00 30 00 (J2000)");

    // Text setters parse with the registry format too.
    let mut g = Target::from_system_name("Galactic").unwrap();
    g.set_axes_from_text("10d30m", "-5 15").unwrap();
    assert_eq!(g.position(), "Long: 10:30:00.00 Lat: -05 15 00 (Galactic)");

    FormatterRegistry::reset_global();
    assert_eq!(FormatterRegistry::global(), FormatterRegistry::default());
    t.ra_mut().set_format(None);
    assert_eq!(t.position(), "probe RA: 01:00:00.000 Dec: -00:30:00.00 (J2000)");
}
