//! The built-in frame kernel.
//!
//! | Conversion | Model |
//! |------------|-------|
//! | FK4 to FK5 | E-terms of aberration removed, then the standard B1950 to J2000 rotation |
//! | FK5 to FK4 | inverse rotation, then E-terms restored |
//! | FK5 precession | IAU 1976 (Lieske) |
//! | FK4 precession | Newcomb |
//! | Galactic | IAU 1958 pole and origin, FK5 J2000 rotation |
//!
//! The FK4/FK5 rotations are the position blocks of the Standish matrices
//! with zero proper motion in the source frame. Because a star fixed in FK4
//! has a small fictitious motion in FK5, a round trip through both agrees to
//! a few tenths of an arcsecond rather than exactly.

use super::{FrameKernel, RotationMatrix3, SkyPoint};
use crate::constants::ARCSEC_TO_RAD;

/// E-terms of aberration in the FK4 frame.
const E_TERMS: [f64; 3] = [-1.62557e-6, -0.31919e-6, -0.13843e-6];

#[allow(clippy::excessive_precision)]
const FK4_TO_FK5: RotationMatrix3 = RotationMatrix3::from_array([
    [0.9999256782, -0.0111820611, -0.0048579477],
    [0.0111820610, 0.9999374784, -0.0000271765],
    [0.0048579479, -0.0000271474, 0.9999881997],
]);

#[allow(clippy::excessive_precision)]
const FK5_TO_FK4: RotationMatrix3 = RotationMatrix3::from_array([
    [0.9999256795, 0.0111814828, 0.0048590039],
    [-0.0111814828, 0.9999374849, -0.0000271771],
    [-0.0048590040, -0.0000271557, 0.9999881946],
]);

/// FK5 J2000 to IAU 1958 Galactic; rows are the Galactic axes.
#[allow(clippy::excessive_precision)]
const FK5_TO_GALACTIC: RotationMatrix3 = RotationMatrix3::from_array([
    [-0.054875539726, -0.873437108010, -0.483834985808],
    [0.494109453312, -0.444829589425, 0.746982251810],
    [-0.867666135858, -0.198076386122, 0.455983795705],
]);

#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicKernel;

impl ClassicKernel {
    /// IAU 1976 precession matrix between two Julian epochs.
    pub fn fk5_precession_matrix(from_epoch: f64, to_epoch: f64) -> RotationMatrix3 {
        let t0 = (from_epoch - 2000.0) / 100.0;
        let t = (to_epoch - from_epoch) / 100.0;
        let w = 2306.2181 + (1.39656 - 0.000139 * t0) * t0;
        let zeta = (w + ((0.30188 - 0.000344 * t0) + 0.017998 * t) * t) * t;
        let z = (w + ((1.09468 + 0.000066 * t0) + 0.018203 * t) * t) * t;
        let theta = ((2004.3109 + (-0.85330 - 0.000217 * t0) * t0)
            + ((-0.42665 - 0.000217 * t0) - 0.041833 * t) * t)
            * t;
        zyz_matrix(zeta, theta, z)
    }

    /// Newcomb precession matrix between two Besselian epochs.
    pub fn fk4_precession_matrix(from_epoch: f64, to_epoch: f64) -> RotationMatrix3 {
        let bigt = (from_epoch - 1850.0) / 100.0;
        let t = (to_epoch - from_epoch) / 100.0;
        let w = 2303.5548 + (1.39720 + 0.000059 * bigt) * bigt;
        let zeta = (w + (0.30242 - 0.000269 * bigt + 0.017996 * t) * t) * t;
        let z = (w + (1.09478 + 0.000387 * bigt + 0.018324 * t) * t) * t;
        let theta = (2005.1120 + (-0.85294 - 0.000365 * bigt) * bigt
            + (-0.42647 - 0.000365 * bigt - 0.041802 * t) * t)
            * t;
        zyz_matrix(zeta, theta, z)
    }
}

/// `Rz(-z) * Ry(theta) * Rz(-zeta)` from angles in arcseconds.
fn zyz_matrix(zeta: f64, theta: f64, z: f64) -> RotationMatrix3 {
    let mut m = RotationMatrix3::identity();
    m.rotate_z(-zeta * ARCSEC_TO_RAD);
    m.rotate_y(theta * ARCSEC_TO_RAD);
    m.rotate_z(-z * ARCSEC_TO_RAD);
    m
}

#[inline]
fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

impl FrameKernel for ClassicKernel {
    fn fk4_to_fk5(&self, p: SkyPoint) -> SkyPoint {
        let r0 = p.to_unit_vector();
        let w = dot(r0, E_TERMS);
        let r1 = [
            r0[0] - E_TERMS[0] + w * r0[0],
            r0[1] - E_TERMS[1] + w * r0[1],
            r0[2] - E_TERMS[2] + w * r0[2],
        ];
        SkyPoint::from_vector(FK4_TO_FK5.apply_to_vector(r1))
    }

    fn fk5_to_fk4(&self, p: SkyPoint) -> SkyPoint {
        let v = FK5_TO_FK4.apply_to_vector(p.to_unit_vector());
        let norm = libm::sqrt(dot(v, v));
        let r = [v[0] / norm, v[1] / norm, v[2] / norm];
        let w = dot(r, E_TERMS);
        SkyPoint::from_vector([
            r[0] + E_TERMS[0] - w * r[0],
            r[1] + E_TERMS[1] - w * r[1],
            r[2] + E_TERMS[2] - w * r[2],
        ])
    }

    fn precess_fk5(&self, p: SkyPoint, from_epoch: f64, to_epoch: f64) -> SkyPoint {
        if from_epoch == to_epoch {
            return p;
        }
        let m = Self::fk5_precession_matrix(from_epoch, to_epoch);
        SkyPoint::from_vector(m.apply_to_vector(p.to_unit_vector()))
    }

    fn precess_fk4(&self, p: SkyPoint, from_epoch: f64, to_epoch: f64) -> SkyPoint {
        if from_epoch == to_epoch {
            return p;
        }
        let m = Self::fk4_precession_matrix(from_epoch, to_epoch);
        SkyPoint::from_vector(m.apply_to_vector(p.to_unit_vector()))
    }

    fn gal_to_fk5(&self, p: SkyPoint) -> SkyPoint {
        SkyPoint::from_vector(FK5_TO_GALACTIC.transpose().apply_to_vector(p.to_unit_vector()))
    }

    fn fk5_to_gal(&self, p: SkyPoint) -> SkyPoint {
        SkyPoint::from_vector(FK5_TO_GALACTIC.apply_to_vector(p.to_unit_vector()))
    }
}
