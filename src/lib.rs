//! Interactive control and transform geometry for objects on a 2D canvas.
//!
//! This crate owns the math behind on-screen handles: deciding which transform
//! a pointer-down on a control starts, mapping pointer positions from world
//! space into an object's local unrotated frame (through any nesting of
//! groups), and classifying each control's orientation so the host can pick a
//! matching cursor. Drawing shapes, serializing them and scheduling frames are
//! left to the host; the engine reports what the user is doing as
//! [`engine::Action`]s and never writes object geometry itself.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Gesture engine: pointer events in, [`engine::Action`]s out |
//! | [`transform`] | Per-gesture [`transform::TransformContext`] and origin selection |
//! | [`action`] | Action resolution from a corner, lock policy, event payloads |
//! | [`local`] | Padding- and offset-adjusted local pointer position |
//! | [`space`] | World / group / local coordinate mapping |
//! | [`quadrant`] | Octant classification of controls |
//! | [`cursor`] | Cursor selection per control |
//! | [`hit`] | Control positions and hit-testing |
//! | [`control`] | Corners, control kinds and control sets |
//! | [`object`] | Target object geometry, locks and dimensions |
//! | [`scene`] | Object store and group membership tree |
//! | [`origin`] | Symbolic and numeric transform origins |
//! | [`matrix`] | 2D affine matrices |
//! | [`point`] | 2D point / vector |
//! | [`camera`] | Pan/zoom camera and screen/world conversion |
//! | [`input`] | Pointer events, buttons and modifier keys |
//! | [`config`] | Interaction configuration |
//! | [`consts`] | Shared numeric constants |

pub mod action;
pub mod camera;
pub mod config;
pub mod consts;
pub mod control;
pub mod cursor;
pub mod engine;
pub mod hit;
pub mod input;
pub mod local;
pub mod matrix;
pub mod object;
pub mod origin;
pub mod point;
pub mod quadrant;
pub mod scene;
pub mod space;
pub mod transform;
