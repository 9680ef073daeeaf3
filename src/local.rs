//! Local pointer position for an active gesture.

#[cfg(test)]
#[path = "local_test.rs"]
mod local_test;

use crate::origin::Origin;
use crate::point::Point;
use crate::scene::{Scene, SceneError};
use crate::space::normalize_point;
use crate::transform::TransformContext;

/// Pointer position in the target's unrotated frame, relative to
/// `(origin_x, origin_y)`, with the padding halo and the control's pixel
/// offset taken out.
///
/// Padding is given in screen pixels, so it is divided by `zoom` to keep the
/// halo visually constant. A coordinate at least one padding away from the
/// origin is pulled toward it by the padding. The y-axis lower bound is tested
/// against `+padding` after the upper-bound step has already run; that
/// sequencing is part of the contract and differs from the x-axis.
///
/// NaN and infinite inputs propagate.
///
/// # Errors
///
/// Returns `ObjectNotFound` if the gesture's target has left the scene.
pub fn get_local_point(
    scene: &Scene,
    zoom: f64,
    transform: &TransformContext,
    origin_x: Origin,
    origin_y: Origin,
    world: Point,
) -> Result<Point, SceneError> {
    let target = scene.require(&transform.target)?;
    let padding = target.padding / zoom;
    let mut local = normalize_point(scene, target, world, origin_x, origin_y);

    if local.x >= padding {
        local.x -= padding;
    }
    if local.x <= -padding {
        local.x += padding;
    }
    if local.y >= padding {
        local.y -= padding;
    }
    if local.y <= padding {
        local.y += padding;
    }

    if let Some(control) = &transform.control {
        local = local - control.offset();
    }
    Ok(local)
}
