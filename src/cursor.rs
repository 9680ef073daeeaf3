//! Cursor selection for controls.
//!
//! Resize cursors are chosen from the control's octant, so a handle keeps an
//! arrow pointing the way it actually moves however the object is rotated.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use std::fmt;

use serde::{Serialize, Serializer};

use crate::action::is_locked;
use crate::config::ControlsConfig;
use crate::control::{Control, ControlKind};
use crate::input::PointerEvent;
use crate::object::{LockKey, TargetObject};
use crate::quadrant::find_corner_quadrant;
use crate::scene::Scene;

/// A CSS cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cursor {
    Default,
    Move,
    NotAllowed,
    Crosshair,
    EResize,
    SeResize,
    SResize,
    SwResize,
    WResize,
    NwResize,
    NResize,
    NeResize,
    NsResize,
    NeswResize,
    EwResize,
    NwseResize,
}

/// Scale cursors by octant, clockwise from east.
const SCALE_CURSORS: [Cursor; 8] = [
    Cursor::EResize,
    Cursor::SeResize,
    Cursor::SResize,
    Cursor::SwResize,
    Cursor::WResize,
    Cursor::NwResize,
    Cursor::NResize,
    Cursor::NeResize,
];

/// Skew cursors by octant modulo 4.
const SKEW_CURSORS: [Cursor; 4] = [Cursor::NsResize, Cursor::NeswResize, Cursor::EwResize, Cursor::NwseResize];

impl Cursor {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Move => "move",
            Self::NotAllowed => "not-allowed",
            Self::Crosshair => "crosshair",
            Self::EResize => "e-resize",
            Self::SeResize => "se-resize",
            Self::SResize => "s-resize",
            Self::SwResize => "sw-resize",
            Self::WResize => "w-resize",
            Self::NwResize => "nw-resize",
            Self::NResize => "n-resize",
            Self::NeResize => "ne-resize",
            Self::NsResize => "ns-resize",
            Self::NeswResize => "nesw-resize",
            Self::EwResize => "ew-resize",
            Self::NwseResize => "nwse-resize",
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

impl Serialize for Cursor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_css())
    }
}

/// Cursor to show while hovering `control` on `target`.
#[must_use]
pub fn cursor_for_control(
    config: &ControlsConfig,
    scene: &Scene,
    target: &TargetObject,
    control: &Control,
    event: &PointerEvent,
) -> Cursor {
    match control.kind {
        ControlKind::CornerScale => scale_cursor(config, scene, target, control, event),
        ControlKind::EdgeScale => {
            if event.modifiers.is_pressed(config.alt_action_key) {
                skew_cursor(scene, target, control)
            } else {
                scale_cursor(config, scene, target, control, event)
            }
        }
        ControlKind::Skew => skew_cursor(scene, target, control),
        ControlKind::Rotate => {
            if is_locked(target, LockKey::Rotation) {
                Cursor::NotAllowed
            } else {
                Cursor::Crosshair
            }
        }
    }
}

/// Whether corner handles currently scale proportionally.
#[must_use]
pub fn scale_is_proportional(config: &ControlsConfig, event: &PointerEvent) -> bool {
    config.uniform_scaling != event.modifiers.is_pressed(config.uni_scale_key)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Whether the locks on `target` leave nothing to scale.
///
/// `by` is the single axis an edge handle scales, or `None` for corners; a
/// proportional corner scale needs both axes free.
fn scaling_is_forbidden(target: &TargetObject, by: Option<Axis>, proportional: bool) -> bool {
    let lock_x = is_locked(target, LockKey::ScalingX);
    let lock_y = is_locked(target, LockKey::ScalingY);
    match by {
        _ if lock_x && lock_y => true,
        None => (lock_x || lock_y) && proportional,
        Some(Axis::X) => lock_x,
        Some(Axis::Y) => lock_y,
    }
}

fn scale_cursor(
    config: &ControlsConfig,
    scene: &Scene,
    target: &TargetObject,
    control: &Control,
    event: &PointerEvent,
) -> Cursor {
    let by = match (control.x == 0.0, control.y == 0.0) {
        (false, true) => Some(Axis::X),
        (true, false) => Some(Axis::Y),
        _ => None,
    };
    if scaling_is_forbidden(target, by, scale_is_proportional(config, event)) {
        return Cursor::NotAllowed;
    }
    SCALE_CURSORS[usize::from(find_corner_quadrant(scene, target, control))]
}

fn skew_cursor(scene: &Scene, target: &TargetObject, control: &Control) -> Cursor {
    if control.x != 0.0 && is_locked(target, LockKey::SkewingY) {
        return Cursor::NotAllowed;
    }
    if control.y != 0.0 && is_locked(target, LockKey::SkewingX) {
        return Cursor::NotAllowed;
    }
    SKEW_CURSORS[usize::from(find_corner_quadrant(scene, target, control) % 4)]
}
