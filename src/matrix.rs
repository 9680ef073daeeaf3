//! 2D affine matrices.
//!
//! Stored as six coefficients in canvas order:
//!
//! ```text
//! | a  c  e |
//! | b  d  f |
//! ```
//!
//! so a point maps to `(a*x + c*y + e, b*x + d*y + f)`. Angles are in degrees
//! to match object geometry.

#[cfg(test)]
#[path = "matrix_test.rs"]
mod matrix_test;

use serde::{Deserialize, Serialize};

use crate::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    #[must_use]
    pub fn translate(x: f64, y: f64) -> Self {
        Self { e: x, f: y, ..Self::IDENTITY }
    }

    /// Clockwise (screen) rotation by `degrees`.
    #[must_use]
    pub fn rotate(degrees: f64) -> Self {
        if degrees == 0.0 {
            return Self::IDENTITY;
        }
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self { a: cos, b: sin, c: -sin, d: cos, e: 0.0, f: 0.0 }
    }

    #[must_use]
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self { a: sx, d: sy, ..Self::IDENTITY }
    }

    /// Horizontal shear: x grows by `tan(degrees) * y`.
    #[must_use]
    pub fn skew_x(degrees: f64) -> Self {
        Self { c: degrees.to_radians().tan(), ..Self::IDENTITY }
    }

    /// Vertical shear: y grows by `tan(degrees) * x`.
    #[must_use]
    pub fn skew_y(degrees: f64) -> Self {
        Self { b: degrees.to_radians().tan(), ..Self::IDENTITY }
    }

    /// `self * rhs`: the result applies `rhs` first, then `self`.
    #[must_use]
    pub fn multiply(&self, rhs: &Matrix) -> Matrix {
        Matrix {
            a: self.a * rhs.a + self.c * rhs.b,
            b: self.b * rhs.a + self.d * rhs.b,
            c: self.a * rhs.c + self.c * rhs.d,
            d: self.b * rhs.c + self.d * rhs.d,
            e: self.a * rhs.e + self.c * rhs.f + self.e,
            f: self.b * rhs.e + self.d * rhs.f + self.f,
        }
    }

    /// Inverse matrix, or `None` when the matrix is singular (zero scale).
    #[must_use]
    pub fn invert(&self) -> Option<Matrix> {
        let det = self.a * self.d - self.b * self.c;
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        Some(Matrix {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            e: (self.c * self.f - self.d * self.e) / det,
            f: (self.b * self.e - self.a * self.f) / det,
        })
    }

    #[must_use]
    pub fn transform_point(&self, p: Point) -> Point {
        Point {
            x: self.a * p.x + self.c * p.y + self.e,
            y: self.b * p.x + self.d * p.y + self.f,
        }
    }

    /// Like [`Matrix::transform_point`] but ignores translation.
    #[must_use]
    pub fn transform_vector(&self, v: Point) -> Point {
        Point {
            x: self.a * v.x + self.c * v.y,
            y: self.b * v.x + self.d * v.y,
        }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}
