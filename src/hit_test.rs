use super::*;
use crate::control::{ControlKind, ControlSet};

// =============================================================
// Helpers
// =============================================================

fn obj() -> TargetObject {
    TargetObject::new(100.0, 80.0).at(200.0, 200.0)
}

fn position_of(scene: &Scene, zoom: f64, target: &TargetObject, corner: Corner) -> Point {
    control_position(scene, zoom, target, target.controls.get(corner).unwrap())
}

// =============================================================
// control_position
// =============================================================

#[test]
fn corner_positions_on_unrotated_box() {
    let scene = Scene::new();
    let o = obj();
    assert_eq!(position_of(&scene, 1.0, &o, Corner::Tl), Point::new(150.0, 160.0));
    assert_eq!(position_of(&scene, 1.0, &o, Corner::Br), Point::new(250.0, 240.0));
    assert_eq!(position_of(&scene, 1.0, &o, Corner::Mr), Point::new(250.0, 200.0));
}

#[test]
fn rotate_handle_floats_above_top_edge() {
    let scene = Scene::new();
    assert_eq!(position_of(&scene, 1.0, &obj(), Corner::Mtr), Point::new(200.0, 120.0));
}

#[test]
fn pixel_offset_shrinks_with_zoom() {
    let scene = Scene::new();
    assert_eq!(position_of(&scene, 2.0, &obj(), Corner::Mtr), Point::new(200.0, 140.0));
}

#[test]
fn padding_pushes_handles_outward() {
    let scene = Scene::new();
    let o = TargetObject { padding: 10.0, ..obj() };
    assert_eq!(position_of(&scene, 1.0, &o, Corner::Br), Point::new(260.0, 250.0));
    assert_eq!(position_of(&scene, 1.0, &o, Corner::Mt), Point::new(200.0, 150.0));
}

#[test]
fn positions_follow_rotation() {
    let scene = Scene::new();
    let o = TargetObject { angle: 90.0, ..obj() };
    assert!(position_of(&scene, 1.0, &o, Corner::Mr).approx_eq(Point::new(200.0, 250.0)));
    // Rotate handle offset turns with the object: it now sits to the right.
    assert!(position_of(&scene, 1.0, &o, Corner::Mtr).approx_eq(Point::new(280.0, 200.0)));
}

#[test]
fn positions_follow_groups() {
    let mut scene = Scene::new();
    let group = TargetObject::group(500.0, 500.0).at(1000.0, 0.0);
    let child = obj();
    let (g, c) = (group.id, child.id);
    scene.insert(group);
    scene.insert(child);
    scene.set_parent(c, Some(g)).unwrap();
    let child = scene.get(&c).unwrap();
    assert_eq!(position_of(&scene, 1.0, child, Corner::Br), Point::new(1250.0, 240.0));
}

// =============================================================
// find_target_corner
// =============================================================

#[test]
fn finds_corner_under_pointer() {
    let scene = Scene::new();
    let config = ControlsConfig::default();
    let camera = Camera::default();
    let o = obj();
    assert_eq!(find_target_corner(&config, &scene, &camera, &o, Point::new(252.0, 238.0)), Some(Corner::Br));
    assert_eq!(find_target_corner(&config, &scene, &camera, &o, Point::new(200.0, 121.0)), Some(Corner::Mtr));
}

#[test]
fn misses_outside_hit_area() {
    let scene = Scene::new();
    let config = ControlsConfig::default();
    let camera = Camera::default();
    assert_eq!(find_target_corner(&config, &scene, &camera, &obj(), Point::new(200.0, 200.0)), None);
    assert_eq!(find_target_corner(&config, &scene, &camera, &obj(), Point::new(258.0, 240.0)), None);
}

#[test]
fn hit_area_is_constant_on_screen() {
    let scene = Scene::new();
    let config = ControlsConfig::default();
    let camera = Camera::new(Point::ZERO, 4.0);
    // At 4x zoom the 13px hit area covers 3.25 world units.
    assert_eq!(find_target_corner(&config, &scene, &camera, &obj(), Point::new(254.0, 240.0)), None);
    assert_eq!(find_target_corner(&config, &scene, &camera, &obj(), Point::new(251.5, 240.0)), Some(Corner::Br));
}

#[test]
fn rotate_handle_wins_over_overlapping_edge() {
    let scene = Scene::new();
    let config = ControlsConfig::default();
    let mut o = TargetObject::new(100.0, 80.0);
    let mut controls = ControlSet::empty();
    controls.insert(Corner::Mt, Control::new(0.0, -0.5, ControlKind::EdgeScale));
    controls.insert(Corner::Mtr, Control::new(0.0, -0.5, ControlKind::Rotate));
    o.controls = controls;
    let hit = find_target_corner(&config, &scene, &Camera::default(), &o, Point::new(0.0, -40.0));
    assert_eq!(hit, Some(Corner::Mtr));
}

#[test]
fn no_controls_never_hit() {
    let scene = Scene::new();
    let o = TargetObject { controls: ControlSet::empty(), ..obj() };
    let hit = find_target_corner(&ControlsConfig::default(), &scene, &Camera::default(), &o, Point::new(250.0, 240.0));
    assert_eq!(hit, None);
}
