//! 3x3 rotation matrices used by the frame kernels.
//!
//! Rotations follow the passive (ERFA) convention: `rotate_z(psi)` rotates
//! the coordinate frame, so a positive rotation of 90 degrees about Z takes
//! `[1, 0, 0]` to `[0, -1, 0]`. Each `rotate_*` call premultiplies, so
//!
//! ```text
//! m.rotate_z(-zeta); m.rotate_y(theta); m.rotate_z(-z);
//! ```
//!
//! builds `Rz(-z) * Ry(theta) * Rz(-zeta)`, the classic equatorial
//! precession matrix.

use std::ops::Mul;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl RotationMatrix3 {
    pub const fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    pub const fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    /// Premultiplies by a rotation of `psi` radians about Z.
    pub fn rotate_z(&mut self, psi: f64) {
        let (s, c) = (libm::sin(psi), libm::cos(psi));
        for col in 0..3 {
            let a0 = self.elements[0][col];
            let a1 = self.elements[1][col];
            self.elements[0][col] = c * a0 + s * a1;
            self.elements[1][col] = -s * a0 + c * a1;
        }
    }

    /// Premultiplies by a rotation of `theta` radians about Y.
    pub fn rotate_y(&mut self, theta: f64) {
        let (s, c) = (libm::sin(theta), libm::cos(theta));
        for col in 0..3 {
            let a0 = self.elements[0][col];
            let a2 = self.elements[2][col];
            self.elements[0][col] = c * a0 - s * a2;
            self.elements[2][col] = s * a0 + c * a2;
        }
    }

    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }
        Self::from_array(result)
    }

    pub fn apply_to_vector(&self, v: [f64; 3]) -> [f64; 3] {
        let m = &self.elements;
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ]
    }

    /// The inverse of a proper rotation.
    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }
}

impl Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;

    #[test]
    fn test_rotate_z_passive() {
        let mut m = RotationMatrix3::identity();
        m.rotate_z(HALF_PI);
        let v = m.apply_to_vector([1.0, 0.0, 0.0]);
        assert!(v[0].abs() < 1e-15);
        assert!((v[1] + 1.0).abs() < 1e-15);
        assert!(v[2].abs() < 1e-15);
    }

    #[test]
    fn test_rotate_y_passive() {
        let mut m = RotationMatrix3::identity();
        m.rotate_y(HALF_PI);
        let v = m.apply_to_vector([0.0, 0.0, 1.0]);
        assert!((v[0] + 1.0).abs() < 1e-15);
        assert!(v[2].abs() < 1e-15);
    }

    #[test]
    fn test_transpose_inverts() {
        let mut m = RotationMatrix3::identity();
        m.rotate_z(0.4);
        m.rotate_y(-0.2);
        let p = m * m.transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((p.get(i, j) - expected).abs() < 1e-15);
            }
        }
    }
}
