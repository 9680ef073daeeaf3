use tracing::{debug, error, trace, warn};

use crate::action::{TransformAction, is_action_locked};
use crate::camera::Camera;
use crate::config::ControlsConfig;
use crate::control::Corner;
use crate::cursor::{Cursor, cursor_for_control};
use crate::hit::find_target_corner;
use crate::input::{Button, PointerEvent, UiState};
use crate::local::get_local_point;
use crate::object::{ObjectId, TargetObject};
use crate::point::Point;
use crate::scene::Scene;
use crate::space::project_to_parent;
use crate::transform::TransformContext;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectionChanged(Option<ObjectId>),
    GestureStarted { id: ObjectId, action: TransformAction, corner: Option<Corner> },
    /// Pointer moved during a gesture. For drags `local` is the offset from
    /// the gesture start in the parent plane; otherwise it is the pointer in
    /// the target's unrotated frame relative to the transform origin.
    Transform { id: ObjectId, action: TransformAction, local: Point, pointer: Point },
    GestureEnded { id: ObjectId, action: TransformAction, performed: bool },
    GestureCancelled { id: ObjectId },
    SetCursor(Cursor),
}

/// Gesture engine: owns the scene, camera and selection, and turns pointer
/// events into [`Action`]s. At most one gesture is active at a time.
pub struct Engine {
    pub scene: Scene,
    pub camera: Camera,
    pub config: ControlsConfig,
    pub ui: UiState,
    gesture: Option<TransformContext>,
    cursor: Cursor,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(ControlsConfig::default())
    }
}

impl Engine {
    #[must_use]
    pub fn new(config: ControlsConfig) -> Self {
        Self {
            scene: Scene::new(),
            camera: Camera::default(),
            config,
            ui: UiState::default(),
            gesture: None,
            cursor: Cursor::Default,
        }
    }

    // --- Data inputs ---

    pub fn insert(&mut self, object: TargetObject) {
        self.scene.insert(object);
    }

    /// Remove an object, dropping the selection and any gesture on it.
    pub fn remove(&mut self, id: &ObjectId) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.gesture.as_ref().is_some_and(|g| g.target == *id) {
            actions.extend(self.cancel());
        }
        if self.ui.selected_id.as_ref() == Some(id) {
            self.ui.selected_id = None;
            actions.push(Action::SelectionChanged(None));
        }
        self.scene.remove(id);
        actions
    }

    /// Replace the selection. Any active gesture is cancelled.
    pub fn select(&mut self, id: Option<ObjectId>) -> Vec<Action> {
        let mut actions = self.cancel();
        if self.ui.selected_id != id {
            self.ui.selected_id = id;
            actions.push(Action::SelectionChanged(id));
        }
        actions
    }

    // --- Queries ---

    /// The currently selected object, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ObjectId> {
        self.ui.selected_id
    }

    /// The active gesture, if any.
    #[must_use]
    pub fn gesture(&self) -> Option<&TransformContext> {
        self.gesture.as_ref()
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Look up an object by ID.
    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&TargetObject> {
        self.scene.get(id)
    }

    // --- Input events ---

    /// Pointer pressed. `target` is the object whose body is under the
    /// pointer, as hit-tested by the host. Handles of the selected object are
    /// tested here first and win over any body.
    pub fn on_pointer_down(&mut self, event: PointerEvent, target: Option<ObjectId>) -> Vec<Action> {
        if event.button != Button::Primary {
            return Vec::new();
        }
        let mut actions = Vec::new();
        if let Some(previous) = self.gesture.take() {
            warn!(id = %previous.target, action = %previous.action, "pointer down during active gesture; cancelling");
            actions.push(Action::GestureCancelled { id: previous.target });
        }

        let world = self.camera.screen_to_world(event.screen);
        let (id, corner) = match (self.hovered_handle(world), target) {
            (Some((id, corner)), _) => (id, Some(corner)),
            (None, Some(id)) => (id, None),
            (None, None) => {
                if self.ui.selected_id.take().is_some() {
                    actions.push(Action::SelectionChanged(None));
                }
                return actions;
            }
        };

        let already_selected = self.ui.selected_id == Some(id);
        match TransformContext::begin(&self.config, &self.scene, id, already_selected, corner, event, world) {
            Ok(ctx) => {
                debug!(%id, action = %ctx.action, corner = ?ctx.corner, "gesture started");
                if !already_selected {
                    self.ui.selected_id = Some(id);
                    actions.push(Action::SelectionChanged(Some(id)));
                }
                actions.push(Action::GestureStarted { id, action: ctx.action, corner: ctx.corner });
                self.gesture = Some(ctx);
            }
            Err(e) => {
                error!(%id, error = %e, code = e.error_code(), "failed to start gesture");
            }
        }
        actions
    }

    /// Pointer moved. Updates the active gesture, or the hover cursor when
    /// there is none.
    pub fn on_pointer_move(&mut self, event: PointerEvent) -> Vec<Action> {
        let world = self.camera.screen_to_world(event.screen);
        let Some(ctx) = self.gesture.as_mut() else {
            return self.hover(world, &event);
        };
        ctx.update(event, world);

        let Some(target) = self.scene.get(&ctx.target) else {
            warn!(id = %ctx.target, "gesture target left the scene");
            return self.cancel();
        };
        if is_action_locked(target, ctx.action) {
            trace!(id = %ctx.target, action = %ctx.action, "transform vetoed by locks");
            return Vec::new();
        }

        let local = if ctx.action == TransformAction::Drag {
            match (project_to_parent(&self.scene, target, world), project_to_parent(&self.scene, target, ctx.start)) {
                (Some(now), Some(start)) => now - start,
                _ => {
                    warn!(id = %ctx.target, "degenerate group transform; drag skipped");
                    return Vec::new();
                }
            }
        } else {
            match get_local_point(&self.scene, self.camera.zoom, ctx, ctx.origin_x, ctx.origin_y, world) {
                Ok(local) => local,
                Err(e) => {
                    error!(error = %e, code = e.error_code(), "local point unavailable");
                    return Vec::new();
                }
            }
        };
        trace!(id = %ctx.target, action = %ctx.action, ?local, "transform");
        vec![Action::Transform { id: ctx.target, action: ctx.action, local, pointer: world }]
    }

    /// Pointer released. Ends the active gesture.
    pub fn on_pointer_up(&mut self, event: PointerEvent) -> Vec<Action> {
        let Some(mut ctx) = self.gesture.take() else {
            return Vec::new();
        };
        ctx.update(event, self.camera.screen_to_world(event.screen));
        debug!(id = %ctx.target, action = %ctx.action, performed = ctx.action_performed, "gesture ended");
        vec![Action::GestureEnded { id: ctx.target, action: ctx.action, performed: ctx.action_performed }]
    }

    /// Abort the active gesture, if any.
    pub fn cancel(&mut self) -> Vec<Action> {
        match self.gesture.take() {
            Some(ctx) => {
                debug!(id = %ctx.target, action = %ctx.action, "gesture cancelled");
                vec![Action::GestureCancelled { id: ctx.target }]
            }
            None => Vec::new(),
        }
    }

    // --- Internal ---

    fn hovered_handle(&self, world: Point) -> Option<(ObjectId, Corner)> {
        let id = self.ui.selected_id?;
        let object = self.scene.get(&id)?;
        find_target_corner(&self.config, &self.scene, &self.camera, object, world).map(|corner| (id, corner))
    }

    fn hover(&mut self, world: Point, event: &PointerEvent) -> Vec<Action> {
        let cursor = self
            .hovered_handle(world)
            .and_then(|(id, corner)| {
                let object = self.scene.get(&id)?;
                let control = object.controls.get(corner)?;
                Some(cursor_for_control(&self.config, &self.scene, object, control, event))
            })
            .unwrap_or(Cursor::Default);
        if cursor == self.cursor {
            return Vec::new();
        }
        self.cursor = cursor;
        vec![Action::SetCursor(cursor)]
    }
}
