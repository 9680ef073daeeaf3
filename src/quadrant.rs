#[cfg(test)]
#[path = "quadrant_test.rs"]
mod quadrant_test;

use crate::consts::{FULL_TURN_DEG, OCTANT_COUNT, OCTANT_DEG};
use crate::control::Control;
use crate::object::TargetObject;
use crate::scene::Scene;
use crate::space::total_rotation;

/// Octant (0..=7) a control points toward once the object's total rotation
/// is applied, counting clockwise from east: 0 = e, 1 = se, 2 = s, … 7 = ne.
///
/// Rotating the object by 45° moves every control one octant on, so cursors
/// picked from this index turn with the object.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn find_corner_quadrant(scene: &Scene, object: &TargetObject, control: &Control) -> u8 {
    let angle = total_rotation(scene, object) + control.position().angle().to_degrees() + FULL_TURN_DEG;
    // Rounding the last half-octant yields 8, which is east again.
    let octant = (angle.rem_euclid(FULL_TURN_DEG) / OCTANT_DEG).round() as u8;
    octant % OCTANT_COUNT
}
