//! Action resolution: which transform a pointer-down starts, lock policy, and
//! the payload shared by every transform notification.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::config::ControlsConfig;
use crate::control::{ControlError, Corner};
use crate::input::PointerEvent;
use crate::object::{LockKey, TargetObject};
use crate::point::Point;
use crate::transform::TransformContext;

/// The transform a gesture performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransformAction {
    /// Move the object.
    Drag,
    /// Scale both axes from a corner.
    Scale,
    ScaleX,
    ScaleY,
    SkewX,
    SkewY,
    Rotate,
}

impl TransformAction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Drag => "drag",
            Self::Scale => "scale",
            Self::ScaleX => "scaleX",
            Self::ScaleY => "scaleY",
            Self::SkewX => "skewX",
            Self::SkewY => "skewY",
            Self::Rotate => "rotate",
        }
    }

    /// Whether this action belongs to the scaling family.
    #[must_use]
    pub fn is_scale(self) -> bool {
        matches!(self, Self::Scale | Self::ScaleX | Self::ScaleY)
    }
}

impl fmt::Display for TransformAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide the action for a pointer-down on `target`.
///
/// A pointer-down that misses every handle, or that lands on an object that
/// was not already selected, always starts a drag. Otherwise the control at
/// `corner` decides, which lets modifier keys switch e.g. scaling to skewing.
///
/// # Errors
///
/// Returns `UnknownCorner` if `target` has no control at `corner`. That is a
/// caller bug: corners come from hit-testing the same control set.
pub fn action_from_corner(
    config: &ControlsConfig,
    already_selected: bool,
    corner: Option<Corner>,
    event: &PointerEvent,
    target: &TargetObject,
) -> Result<TransformAction, ControlError> {
    let Some(corner) = corner.filter(|_| already_selected) else {
        return Ok(TransformAction::Drag);
    };
    let Some(control) = target.controls.get(corner) else {
        error!(%corner, object = %target.id, "corner missing from control set");
        return Err(ControlError::UnknownCorner { corner, object: target.id });
    };
    Ok(control.action_name(event, config))
}

/// Read one of `target`'s lock flags.
#[must_use]
pub fn is_locked(target: &TargetObject, key: LockKey) -> bool {
    target.locks.get(key)
}

/// Whether `target`'s locks veto `action` entirely.
///
/// A drag is vetoed only when both axes are locked, and a proportional scale
/// only when both scaling axes are; single-axis actions follow their own flag.
#[must_use]
pub fn is_action_locked(target: &TargetObject, action: TransformAction) -> bool {
    match action {
        TransformAction::Drag => is_locked(target, LockKey::MovementX) && is_locked(target, LockKey::MovementY),
        TransformAction::Scale => is_locked(target, LockKey::ScalingX) && is_locked(target, LockKey::ScalingY),
        TransformAction::ScaleX => is_locked(target, LockKey::ScalingX),
        TransformAction::ScaleY => is_locked(target, LockKey::ScalingY),
        TransformAction::SkewX => is_locked(target, LockKey::SkewingX),
        TransformAction::SkewY => is_locked(target, LockKey::SkewingY),
        TransformAction::Rotate => is_locked(target, LockKey::Rotation),
    }
}

/// Payload shared by every transform notification.
#[derive(Debug, Clone, Copy)]
pub struct TransformEventInfo<'a> {
    pub event: &'a PointerEvent,
    pub transform: &'a TransformContext,
    /// Pointer position in world space.
    pub pointer: Point,
}

/// Bundle the source event, the active transform and the pointer position.
#[must_use]
pub fn common_event_info<'a>(
    event: &'a PointerEvent,
    transform: &'a TransformContext,
    x: f64,
    y: f64,
) -> TransformEventInfo<'a> {
    TransformEventInfo { event, transform, pointer: Point::new(x, y) }
}
