use super::*;
use crate::control::Corner;
use crate::input::Modifiers;
use crate::object::Locks;
use crate::point::Point;

// =============================================================
// Helpers
// =============================================================

fn cursor(obj: &TargetObject, corner: Corner, modifiers: Modifiers) -> Cursor {
    let scene = Scene::new();
    let config = ControlsConfig::default();
    let control = *obj.controls.get(corner).unwrap();
    let event = PointerEvent::new(Point::ZERO).with_modifiers(modifiers);
    cursor_for_control(&config, &scene, obj, &control, &event)
}

fn plain() -> Modifiers {
    Modifiers::default()
}

fn shift() -> Modifiers {
    Modifiers { shift: true, ..Default::default() }
}

fn locked(locks: Locks) -> TargetObject {
    TargetObject { locks, ..TargetObject::new(100.0, 80.0) }
}

// =============================================================
// Scale cursors
// =============================================================

#[test]
fn unrotated_scale_cursors() {
    let obj = TargetObject::new(100.0, 80.0);
    assert_eq!(cursor(&obj, Corner::Mr, plain()), Cursor::EResize);
    assert_eq!(cursor(&obj, Corner::Br, plain()), Cursor::SeResize);
    assert_eq!(cursor(&obj, Corner::Mb, plain()), Cursor::SResize);
    assert_eq!(cursor(&obj, Corner::Tl, plain()), Cursor::NwResize);
    assert_eq!(cursor(&obj, Corner::Mt, plain()), Cursor::NResize);
}

#[test]
fn scale_cursors_follow_rotation() {
    let obj = TargetObject { angle: 90.0, ..TargetObject::new(100.0, 80.0) };
    assert_eq!(cursor(&obj, Corner::Mr, plain()), Cursor::SResize);
    assert_eq!(cursor(&obj, Corner::Br, plain()), Cursor::SwResize);
}

#[test]
fn edge_locked_on_its_axis_is_not_allowed() {
    let obj = locked(Locks { scaling_x: true, ..Default::default() });
    assert_eq!(cursor(&obj, Corner::Mr, plain()), Cursor::NotAllowed);
    assert_eq!(cursor(&obj, Corner::Mb, plain()), Cursor::SResize);
}

#[test]
fn corner_with_one_lock_depends_on_proportional_scaling() {
    let obj = locked(Locks { scaling_y: true, ..Default::default() });
    // Uniform scaling is on by default: a single lock blocks corners.
    assert_eq!(cursor(&obj, Corner::Br, plain()), Cursor::NotAllowed);
    // Shift toggles to free scaling, which can still move x.
    assert_eq!(cursor(&obj, Corner::Br, shift()), Cursor::SeResize);
}

#[test]
fn both_scaling_locks_block_everything() {
    let obj = locked(Locks { scaling_x: true, scaling_y: true, ..Default::default() });
    for corner in [Corner::Br, Corner::Mr, Corner::Mb] {
        assert_eq!(cursor(&obj, corner, plain()), Cursor::NotAllowed);
    }
}

#[test]
fn scale_is_proportional_xor_key() {
    let config = ControlsConfig::default();
    assert!(scale_is_proportional(&config, &PointerEvent::default()));
    assert!(!scale_is_proportional(&config, &PointerEvent::default().with_modifiers(shift())));
    let free = ControlsConfig { uniform_scaling: false, ..Default::default() };
    assert!(!scale_is_proportional(&free, &PointerEvent::default()));
    assert!(scale_is_proportional(&free, &PointerEvent::default().with_modifiers(shift())));
}

// =============================================================
// Skew cursors
// =============================================================

#[test]
fn edges_switch_to_skew_with_alt_action_key() {
    let obj = TargetObject::new(100.0, 80.0);
    assert_eq!(cursor(&obj, Corner::Mr, shift()), Cursor::NsResize);
    assert_eq!(cursor(&obj, Corner::Mb, shift()), Cursor::EwResize);
}

#[test]
fn skew_locks_block_skew_cursor() {
    let obj = locked(Locks { skewing_y: true, ..Default::default() });
    assert_eq!(cursor(&obj, Corner::Mr, shift()), Cursor::NotAllowed);
    assert_eq!(cursor(&obj, Corner::Mb, shift()), Cursor::EwResize);
}

#[test]
fn dedicated_skew_control() {
    let scene = Scene::new();
    let obj = TargetObject::new(100.0, 80.0);
    let control = Control::new(0.0, 0.5, ControlKind::Skew);
    let c = cursor_for_control(&ControlsConfig::default(), &scene, &obj, &control, &PointerEvent::default());
    assert_eq!(c, Cursor::EwResize);
}

// =============================================================
// Rotate cursor / formatting
// =============================================================

#[test]
fn rotate_cursor() {
    assert_eq!(cursor(&TargetObject::new(10.0, 10.0), Corner::Mtr, plain()), Cursor::Crosshair);
    let obj = locked(Locks { rotation: true, ..Default::default() });
    assert_eq!(cursor(&obj, Corner::Mtr, plain()), Cursor::NotAllowed);
}

#[test]
fn css_names() {
    assert_eq!(Cursor::NotAllowed.to_string(), "not-allowed");
    assert_eq!(Cursor::NwseResize.as_css(), "nwse-resize");
    assert_eq!(serde_json::to_value(Cursor::Move).unwrap(), serde_json::json!("move"));
}
