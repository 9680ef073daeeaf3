//! 2D point / vector type shared by every coordinate space in the crate.
//!
//! `Point` is a plain value: arithmetic returns new points and nothing in the
//! crate mutates one in place after construction.

#[cfg(test)]
#[path = "point_test.rs"]
mod point_test;

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::consts::POINT_EPSILON;

/// A point or vector in screen, world, group or local space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin of whatever plane the point lives in.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate this point by `radians` around `pivot`.
    ///
    /// Positive angles turn clockwise on screen (the y-axis points down).
    #[must_use]
    pub fn rotate(self, pivot: Point, radians: f64) -> Point {
        let (sin, cos) = radians.sin_cos();
        let d = self - pivot;
        Point {
            x: d.x * cos - d.y * sin + pivot.x,
            y: d.x * sin + d.y * cos + pivot.y,
        }
    }

    /// Angle of this vector from the positive x-axis, in radians.
    #[must_use]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Component-wise equality within [`POINT_EPSILON`].
    #[must_use]
    pub fn approx_eq(self, other: Point) -> bool {
        (self.x - other.x).abs() < POINT_EPSILON && (self.y - other.y).abs() < POINT_EPSILON
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}
