#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// Camera state for pan/zoom on the canvas.
///
/// `pan` is in screen pixels. `zoom` is a scale factor (1.0 = no zoom).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub pan: Point,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan: Point::ZERO, zoom: 1.0 }
    }
}

impl Camera {
    #[must_use]
    pub fn new(pan: Point, zoom: f64) -> Self {
        Self { pan, zoom }
    }

    /// Convert a screen-space point (pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        (screen - self.pan) * self.zoom.recip()
    }

    /// Convert a world-space point to screen coordinates (pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        world * self.zoom + self.pan
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    ///
    /// Used for handle sizes, padding and pixel offsets, which stay visually
    /// constant as the user zooms.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }
}
