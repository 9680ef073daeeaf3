//! Coordinate space mapping between world space, nested group planes and an
//! object's local unrotated frame.
//!
//! Every function here is a read-only query over a [`Scene`]: nothing writes
//! object geometry.

#[cfg(test)]
#[path = "space_test.rs"]
mod space_test;

use crate::matrix::Matrix;
use crate::object::TargetObject;
use crate::origin::Origin;
use crate::point::Point;
use crate::scene::Scene;

/// Rotation of `object` as seen in world space, in degrees: its own angle plus
/// the angle of every ancestor group.
#[must_use]
pub fn total_rotation(scene: &Scene, object: &TargetObject) -> f64 {
    scene.ancestors(&object.id).fold(object.angle, |acc, group| acc + group.angle)
}

/// Composed matrix from `object`'s parent plane to world space. Identity for
/// root objects.
#[must_use]
pub fn groups_matrix(scene: &Scene, object: &TargetObject) -> Matrix {
    scene
        .ancestors(&object.id)
        .fold(Matrix::IDENTITY, |acc, group| group.own_matrix().multiply(&acc))
}

/// Map a point in `object`'s parent plane into world space, applying the
/// closest group first.
#[must_use]
pub fn project_through_groups(scene: &Scene, object: &TargetObject, point: Point) -> Point {
    scene
        .ancestors(&object.id)
        .fold(point, |p, group| group.own_matrix().transform_point(p))
}

/// Map a world point back into `object`'s parent plane. `None` when some
/// ancestor has a zero scale.
#[must_use]
pub fn project_to_parent(scene: &Scene, object: &TargetObject, world: Point) -> Option<Point> {
    let m = groups_matrix(scene, object);
    if m.is_identity() {
        return Some(world);
    }
    m.invert().map(|inv| inv.transform_point(world))
}

/// World-space center of `object`.
#[must_use]
pub fn world_center(scene: &Scene, object: &TargetObject) -> Point {
    project_through_groups(scene, object, object.position)
}

/// Express `world` in `object`'s unrotated frame, relative to the point on the
/// object named by `(origin_x, origin_y)`.
///
/// The anchor is placed on the object's box (following its own angle),
/// projected into world space, and then both the anchor and `world` are
/// turned back by the total rotation about the world center, so the result is
/// measured along the object's own axes. With no total rotation the turn is
/// skipped entirely.
#[must_use]
pub fn normalize_point(
    scene: &Scene,
    object: &TargetObject,
    world: Point,
    origin_x: Origin,
    origin_y: Origin,
) -> Point {
    let dim = object.transformed_dimensions();
    let mut anchor = object.position + Point::new(origin_x.resolve() * dim.x, origin_y.resolve() * dim.y);
    if object.angle != 0.0 {
        anchor = anchor.rotate(object.position, object.angle.to_radians());
    }
    let anchor = project_through_groups(scene, object, anchor);

    let total = total_rotation(scene, object);
    if total == 0.0 {
        return world - anchor;
    }
    let center = world_center(scene, object);
    let back = -total.to_radians();
    world.rotate(center, back) - anchor.rotate(center, back)
}
