//! Transform context: the state of one drag / scale / skew / rotate gesture.
//!
//! A context is created on pointer-down, updated on every pointer-move and
//! dropped on pointer-up or cancel. It is owned by the gesture that created it
//! and passed explicitly to every geometry call; nothing about a gesture
//! survives into the next one.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use serde::Serialize;

use crate::action::{TransformAction, action_from_corner};
use crate::config::ControlsConfig;
use crate::control::{Control, ControlError, Corner};
use crate::input::PointerEvent;
use crate::object::{ObjectId, TargetObject};
use crate::origin::{Origin, is_transform_centered};
use crate::point::Point;
use crate::scene::{Scene, SceneError};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TransformError {
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error(transparent)]
    Control(#[from] ControlError),
}

impl TransformError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Scene(e) => e.error_code(),
            Self::Control(e) => e.error_code(),
        }
    }
}

/// Geometry of the target when the gesture started.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OriginalState {
    pub position: Point,
    pub width: f64,
    pub height: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub angle: f64,
    pub skew_x: f64,
    pub skew_y: f64,
    pub origin_x: Origin,
    pub origin_y: Origin,
}

/// State of one active gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformContext {
    /// Object being transformed.
    pub target: ObjectId,
    /// Grabbed corner; `None` for drags.
    pub corner: Option<Corner>,
    /// Snapshot of the grabbed control.
    pub control: Option<Control>,
    pub action: TransformAction,
    /// The most recent pointer event of the gesture.
    pub event: PointerEvent,
    /// Anchor the transform pivots about.
    pub origin_x: Origin,
    pub origin_y: Origin,
    pub original: OriginalState,
    /// World-space pointer at pointer-down.
    pub start: Point,
    /// World-space pointer at the latest event.
    pub last: Point,
    /// Object angle at pointer-down, in radians.
    pub theta: f64,
    /// Set once the pointer has moved away from `start`.
    pub action_performed: bool,
}

impl TransformContext {
    /// Start a gesture on `target_id` at world position `pointer`.
    ///
    /// # Errors
    ///
    /// Returns `Scene(ObjectNotFound)` when the target is not in the scene and
    /// `Control(UnknownCorner)` when the target has no control at `corner`.
    pub fn begin(
        config: &ControlsConfig,
        scene: &Scene,
        target_id: ObjectId,
        already_selected: bool,
        corner: Option<Corner>,
        event: PointerEvent,
        pointer: Point,
    ) -> Result<Self, TransformError> {
        let target = scene.require(&target_id)?;
        let action = action_from_corner(config, already_selected, corner, &event, target)?;
        let corner = corner.filter(|_| already_selected);
        let control = corner.and_then(|c| target.controls.get(c).copied());
        let (origin_x, origin_y) = transform_origin(config, target, action, control.as_ref(), &event);

        Ok(Self {
            target: target_id,
            corner,
            control,
            action,
            event,
            origin_x,
            origin_y,
            original: OriginalState {
                position: target.position,
                width: target.width,
                height: target.height,
                scale_x: target.scale_x,
                scale_y: target.scale_y,
                angle: target.angle,
                skew_x: target.skew_x,
                skew_y: target.skew_y,
                origin_x,
                origin_y,
            },
            start: pointer,
            last: pointer,
            theta: target.angle.to_radians(),
            action_performed: false,
        })
    }

    /// Record a pointer-move.
    pub fn update(&mut self, event: PointerEvent, pointer: Point) {
        self.event = event;
        self.last = pointer;
        if pointer != self.start {
            self.action_performed = true;
        }
    }

    /// Whether this gesture grows symmetrically about the object's center.
    #[must_use]
    pub fn is_centered(&self) -> bool {
        is_transform_centered(self.origin_x, self.origin_y)
    }
}

/// Anchor a gesture pivots about.
///
/// Each axis anchors on the side opposite the grabbed control (grabbing the
/// right edge pins the left edge); an axis the control sits centered on
/// stays centered. Drags and centered transforms use the object center.
#[must_use]
pub fn transform_origin(
    config: &ControlsConfig,
    target: &TargetObject,
    action: TransformAction,
    control: Option<&Control>,
    event: &PointerEvent,
) -> (Origin, Origin) {
    if should_center_transform(config, target, action, event) {
        return (Origin::Center, Origin::Center);
    }
    match control {
        Some(c) if action != TransformAction::Drag => (opposite(c.x), opposite(c.y)),
        _ => (Origin::Center, Origin::Center),
    }
}

/// Whether a gesture should pivot about the center.
///
/// Scale and rotate gestures center when the config or the object asks for
/// it; holding the centered key flips that. Other actions center only while
/// the key is held.
#[must_use]
pub fn should_center_transform(
    config: &ControlsConfig,
    target: &TargetObject,
    action: TransformAction,
    event: &PointerEvent,
) -> bool {
    let key_held = event.modifiers.is_pressed(config.centered_key);
    let centered = if action.is_scale() {
        config.centered_scaling || target.centered_scaling
    } else if action == TransformAction::Rotate {
        config.centered_rotation || target.centered_rotation
    } else {
        false
    };
    centered != key_held
}

fn opposite(coord: f64) -> Origin {
    if coord < 0.0 {
        Origin::End
    } else if coord > 0.0 {
        Origin::Start
    } else {
        Origin::Center
    }
}
