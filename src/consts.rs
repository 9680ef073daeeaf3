//! Shared numeric constants for the controls crate.

// ── Math ────────────────────────────────────────────────────────

/// Degrees in a full turn.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Angular width of one octant, in degrees.
pub const OCTANT_DEG: f64 = 45.0;

/// Number of octants used by the quadrant classifier.
pub const OCTANT_COUNT: u8 = 8;

/// Tolerance used by approximate point equality.
pub const POINT_EPSILON: f64 = 1e-9;

// ── Origins ─────────────────────────────────────────────────────

/// Numeric origin of the start edge (left / top).
pub const ORIGIN_START: f64 = -0.5;

/// Numeric origin of the center.
pub const ORIGIN_CENTER: f64 = 0.0;

/// Numeric origin of the end edge (right / bottom).
pub const ORIGIN_END: f64 = 0.5;

// ── Controls ────────────────────────────────────────────────────

/// Default side of a control's square hit area, in screen pixels.
pub const DEFAULT_CORNER_SIZE_PX: f64 = 13.0;

/// Distance from the top edge to the rotate handle, in screen pixels.
pub const ROTATE_HANDLE_OFFSET_PX: f64 = 40.0;
