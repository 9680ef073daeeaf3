//! Target objects: the geometric state of anything the user can transform.
//!
//! A `TargetObject` is a snapshot of the attributes the control engine reads:
//! where the object sits in its parent's plane, its size, scale, rotation and
//! skew, the padding halo around its box, its lock flags and its controls.
//! Group membership is not stored here; [`crate::scene::Scene`] owns the
//! membership tree so a re-parent can never leave two parents pointing at the
//! same child.

#[cfg(test)]
#[path = "object_test.rs"]
mod object_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::control::ControlSet;
use crate::matrix::Matrix;
use crate::point::Point;

/// Unique identifier for an object.
pub type ObjectId = Uuid;

/// Whether an object can contain other objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// A leaf shape.
    #[default]
    Shape,
    /// A group whose transform applies to its children.
    Group,
}

/// One lock flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockKey {
    MovementX,
    MovementY,
    Rotation,
    ScalingX,
    ScalingY,
    SkewingX,
    SkewingY,
    ScalingFlip,
}

/// Per-axis / per-operation lock flags. A set flag vetoes that operation.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locks {
    pub movement_x: bool,
    pub movement_y: bool,
    pub rotation: bool,
    pub scaling_x: bool,
    pub scaling_y: bool,
    pub skewing_x: bool,
    pub skewing_y: bool,
    pub scaling_flip: bool,
}

impl Locks {
    #[must_use]
    pub fn get(&self, key: LockKey) -> bool {
        match key {
            LockKey::MovementX => self.movement_x,
            LockKey::MovementY => self.movement_y,
            LockKey::Rotation => self.rotation,
            LockKey::ScalingX => self.scaling_x,
            LockKey::ScalingY => self.scaling_y,
            LockKey::SkewingX => self.skewing_x,
            LockKey::SkewingY => self.skewing_y,
            LockKey::ScalingFlip => self.scaling_flip,
        }
    }
}

fn one() -> f64 {
    1.0
}

fn yes() -> bool {
    true
}

/// Geometric state of a transformable object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetObject {
    pub id: ObjectId,
    #[serde(default)]
    pub kind: ObjectKind,
    /// Center of the box in the parent plane (world space for root objects).
    pub position: Point,
    /// Unscaled box width.
    pub width: f64,
    /// Unscaled box height.
    pub height: f64,
    #[serde(default = "one")]
    pub scale_x: f64,
    #[serde(default = "one")]
    pub scale_y: f64,
    /// Clockwise rotation in degrees about the box center.
    #[serde(default)]
    pub angle: f64,
    /// Horizontal skew in degrees.
    #[serde(default)]
    pub skew_x: f64,
    /// Vertical skew in degrees.
    #[serde(default)]
    pub skew_y: f64,
    /// Halo around the box in screen pixels.
    #[serde(default)]
    pub padding: f64,
    #[serde(default)]
    pub locks: Locks,
    /// Scale gestures on this object pivot about its center.
    #[serde(default)]
    pub centered_scaling: bool,
    /// Rotate gestures on this object pivot about its center.
    #[serde(default = "yes")]
    pub centered_rotation: bool,
    /// Handles are defined by the object type, not persisted.
    #[serde(skip)]
    pub controls: ControlSet,
}

impl TargetObject {
    /// A shape of the given size centered on the plane origin, with the
    /// standard controls.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ObjectKind::Shape,
            position: Point::ZERO,
            width,
            height,
            scale_x: 1.0,
            scale_y: 1.0,
            angle: 0.0,
            skew_x: 0.0,
            skew_y: 0.0,
            padding: 0.0,
            locks: Locks::default(),
            centered_scaling: false,
            centered_rotation: true,
            controls: ControlSet::standard(),
        }
    }

    /// A group of the given size. Children are attached through the scene.
    #[must_use]
    pub fn group(width: f64, height: f64) -> Self {
        Self { kind: ObjectKind::Group, ..Self::new(width, height) }
    }

    /// Move the center to `(x, y)` in the parent plane.
    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Point::new(x, y);
        self
    }

    #[must_use]
    pub fn is_group(&self) -> bool {
        self.kind == ObjectKind::Group
    }

    /// Matrix from this object's local plane (origin at its center) into its
    /// parent's plane: translate · rotate · scale · skewX · skewY.
    #[must_use]
    pub fn own_matrix(&self) -> Matrix {
        Matrix::translate(self.position.x, self.position.y)
            .multiply(&Matrix::rotate(self.angle))
            .multiply(&self.dimensions_matrix())
    }

    /// Size of the box after scale and skew, before rotation.
    ///
    /// Unskewed boxes are simply `width * scale_x` by `height * scale_y`;
    /// skewed boxes report the bounding box of their sheared outline.
    #[must_use]
    pub fn transformed_dimensions(&self) -> Point {
        if self.skew_x == 0.0 && self.skew_y == 0.0 {
            return Point::new(self.width * self.scale_x, self.height * self.scale_y);
        }
        let m = self.dimensions_matrix();
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        let corners = [
            Point::new(-hw, -hh),
            Point::new(hw, -hh),
            Point::new(hw, hh),
            Point::new(-hw, hh),
        ]
        .map(|p| m.transform_vector(p));

        let (mut min, mut max) = (corners[0], corners[0]);
        for p in &corners[1..] {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        }
        max - min
    }

    fn dimensions_matrix(&self) -> Matrix {
        Matrix::scale(self.scale_x, self.scale_y)
            .multiply(&Matrix::skew_x(self.skew_x))
            .multiply(&Matrix::skew_y(self.skew_y))
    }
}
