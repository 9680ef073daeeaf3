//! Control positions and hit-testing.
//!
//! Only handles are hit-tested here. Whether the pointer is over an object's
//! body depends on its shape, which the host knows and this crate does not.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Camera;
use crate::config::ControlsConfig;
use crate::control::{Control, Corner};
use crate::object::TargetObject;
use crate::point::Point;
use crate::scene::Scene;
use crate::space::{project_through_groups, total_rotation};

/// World-space center of `control` on `target`.
///
/// The unit-square position is placed on the transformed box and projected
/// through the target's groups. The padding halo and the control's pixel
/// offset are screen distances, so they are scaled by `1 / zoom` and turned
/// with the object's total rotation.
#[must_use]
pub fn control_position(scene: &Scene, zoom: f64, target: &TargetObject, control: &Control) -> Point {
    let dim = target.transformed_dimensions();
    let mut edge = target.position + Point::new(control.x * dim.x, control.y * dim.y);
    if target.angle != 0.0 {
        edge = edge.rotate(target.position, target.angle.to_radians());
    }
    let edge = project_through_groups(scene, target, edge);

    let padding = target.padding / zoom;
    let extra = Point::new(
        control.x * 2.0 * padding + control.offset_x / zoom,
        control.y * 2.0 * padding + control.offset_y / zoom,
    );
    edge + extra.rotate(Point::ZERO, total_rotation(scene, target).to_radians())
}

/// The first control (in hit-test priority order) whose square hit area
/// contains `world`. Hit areas are `corner_size` screen pixels wide and
/// aligned with the object's axes.
#[must_use]
pub fn find_target_corner(
    config: &ControlsConfig,
    scene: &Scene,
    camera: &Camera,
    target: &TargetObject,
    world: Point,
) -> Option<Corner> {
    let half = camera.screen_dist_to_world(config.corner_size) / 2.0;
    let back = -total_rotation(scene, target).to_radians();
    target
        .controls
        .iter()
        .find(|(_, control)| {
            let d = (world - control_position(scene, camera.zoom, target, control)).rotate(Point::ZERO, back);
            d.x.abs() <= half && d.y.abs() <= half
        })
        .map(|(corner, _)| corner)
}
