use super::*;
use crate::input::Modifiers;
use crate::object::Locks;
use crate::scene::Scene;

// =============================================================
// Helpers
// =============================================================

fn plain() -> PointerEvent {
    PointerEvent::new(Point::ZERO)
}

fn shift() -> PointerEvent {
    plain().with_modifiers(Modifiers { shift: true, ..Default::default() })
}

fn resolve(selected: bool, corner: Option<Corner>, event: &PointerEvent) -> TransformAction {
    let target = TargetObject::new(100.0, 80.0);
    action_from_corner(&ControlsConfig::default(), selected, corner, event, &target).unwrap()
}

fn with_locks(locks: Locks) -> TargetObject {
    TargetObject { locks, ..TargetObject::new(100.0, 80.0) }
}

// =============================================================
// action_from_corner
// =============================================================

#[test]
fn unselected_target_always_drags() {
    assert_eq!(resolve(false, Some(Corner::Br), &plain()), TransformAction::Drag);
    assert_eq!(resolve(false, Some(Corner::Mtr), &shift()), TransformAction::Drag);
}

#[test]
fn missing_corner_drags() {
    assert_eq!(resolve(true, None, &plain()), TransformAction::Drag);
}

#[test]
fn selected_corner_uses_control() {
    assert_eq!(resolve(true, Some(Corner::Br), &plain()), TransformAction::Scale);
    assert_eq!(resolve(true, Some(Corner::Mr), &plain()), TransformAction::ScaleX);
    assert_eq!(resolve(true, Some(Corner::Mb), &plain()), TransformAction::ScaleY);
    assert_eq!(resolve(true, Some(Corner::Mtr), &plain()), TransformAction::Rotate);
}

#[test]
fn alt_action_key_switches_edges_to_skew() {
    assert_eq!(resolve(true, Some(Corner::Mr), &shift()), TransformAction::SkewY);
    assert_eq!(resolve(true, Some(Corner::Mt), &shift()), TransformAction::SkewX);
    assert_eq!(resolve(true, Some(Corner::Tl), &shift()), TransformAction::Scale);
}

#[test]
fn corner_absent_from_control_set_is_an_error() {
    let mut target = TargetObject::new(100.0, 80.0);
    target.controls.remove(Corner::Mtr);
    let err = action_from_corner(&ControlsConfig::default(), true, Some(Corner::Mtr), &plain(), &target)
        .unwrap_err();
    assert_eq!(err, ControlError::UnknownCorner { corner: Corner::Mtr, object: target.id });
}

#[test]
fn absent_corner_on_unselected_target_still_drags() {
    let mut target = TargetObject::new(100.0, 80.0);
    target.controls.remove(Corner::Mtr);
    let action = action_from_corner(&ControlsConfig::default(), false, Some(Corner::Mtr), &plain(), &target);
    assert_eq!(action, Ok(TransformAction::Drag));
}

// =============================================================
// TransformAction
// =============================================================

#[test]
fn action_names() {
    assert_eq!(TransformAction::Drag.as_str(), "drag");
    assert_eq!(TransformAction::ScaleX.to_string(), "scaleX");
    assert_eq!(TransformAction::SkewY.to_string(), "skewY");
    assert_eq!(serde_json::to_string(&TransformAction::SkewX).unwrap(), "\"skewX\"");
}

#[test]
fn scale_family() {
    assert!(TransformAction::Scale.is_scale());
    assert!(TransformAction::ScaleY.is_scale());
    assert!(!TransformAction::SkewX.is_scale());
    assert!(!TransformAction::Drag.is_scale());
}

// =============================================================
// Locks
// =============================================================

#[test]
fn is_locked_reads_flag() {
    let target = with_locks(Locks { rotation: true, ..Default::default() });
    assert!(is_locked(&target, LockKey::Rotation));
    assert!(!is_locked(&target, LockKey::ScalingX));
}

#[test]
fn drag_needs_both_movement_locks() {
    let one = with_locks(Locks { movement_x: true, ..Default::default() });
    let both = with_locks(Locks { movement_x: true, movement_y: true, ..Default::default() });
    assert!(!is_action_locked(&one, TransformAction::Drag));
    assert!(is_action_locked(&both, TransformAction::Drag));
}

#[test]
fn proportional_scale_needs_both_scaling_locks() {
    let one = with_locks(Locks { scaling_y: true, ..Default::default() });
    assert!(!is_action_locked(&one, TransformAction::Scale));
    assert!(is_action_locked(&one, TransformAction::ScaleY));
    assert!(!is_action_locked(&one, TransformAction::ScaleX));
}

#[test]
fn single_axis_actions_follow_their_flag() {
    let target = with_locks(Locks { skewing_x: true, rotation: true, ..Default::default() });
    assert!(is_action_locked(&target, TransformAction::SkewX));
    assert!(!is_action_locked(&target, TransformAction::SkewY));
    assert!(is_action_locked(&target, TransformAction::Rotate));
}

#[test]
fn unlocked_object_allows_everything() {
    let target = TargetObject::new(10.0, 10.0);
    for action in [
        TransformAction::Drag,
        TransformAction::Scale,
        TransformAction::ScaleX,
        TransformAction::ScaleY,
        TransformAction::SkewX,
        TransformAction::SkewY,
        TransformAction::Rotate,
    ] {
        assert!(!is_action_locked(&target, action), "{action} locked");
    }
}

// =============================================================
// common_event_info
// =============================================================

#[test]
fn event_info_bundles_inputs() {
    let mut scene = Scene::new();
    let target = TargetObject::new(100.0, 80.0);
    let id = target.id;
    scene.insert(target);
    let event = plain();
    let ctx = TransformContext::begin(&ControlsConfig::default(), &scene, id, true, Some(Corner::Br), event, Point::ZERO)
        .unwrap();

    let info = common_event_info(&event, &ctx, 12.0, -4.0);
    assert_eq!(info.pointer, Point::new(12.0, -4.0));
    assert_eq!(info.transform.target, id);
    assert_eq!(info.transform.action, TransformAction::Scale);
    assert_eq!(*info.event, event);
}
