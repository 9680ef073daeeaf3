//! Controls: the named handles attached to an object.
//!
//! A control sits at a unit-square position on the object's unrotated,
//! unscaled box (`x`, `y` in `[-0.5, 0.5]`), optionally displaced by a pixel
//! offset (the rotate handle floats above the top edge). Its [`ControlKind`]
//! decides which [`TransformAction`] a drag on it starts.

#[cfg(test)]
#[path = "control_test.rs"]
mod control_test;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::action::TransformAction;
use crate::config::ControlsConfig;
use crate::consts::ROTATE_HANDLE_OFFSET_PX;
use crate::input::PointerEvent;
use crate::object::ObjectId;
use crate::point::Point;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ControlError {
    #[error("object {object} has no control at corner {corner}")]
    UnknownCorner { corner: Corner, object: ObjectId },
    #[error("unknown corner name: {0}")]
    UnknownCornerName(String),
}

impl ControlError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCorner { .. } => "E_UNKNOWN_CORNER",
            Self::UnknownCornerName(_) => "E_UNKNOWN_CORNER_NAME",
        }
    }
}

/// Corner identifier of a control.
///
/// Declaration order is hit-test priority: the rotate handle wins over the
/// corners, and corners win over edge midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Corner {
    /// Rotate handle above the top edge.
    Mtr,
    /// Top-left corner.
    Tl,
    /// Top-right corner.
    Tr,
    /// Bottom-left corner.
    Bl,
    /// Bottom-right corner.
    Br,
    /// Middle of the top edge.
    Mt,
    /// Middle of the bottom edge.
    Mb,
    /// Middle of the left edge.
    Ml,
    /// Middle of the right edge.
    Mr,
}

impl Corner {
    pub const ALL: [Corner; 9] = [
        Corner::Mtr,
        Corner::Tl,
        Corner::Tr,
        Corner::Bl,
        Corner::Br,
        Corner::Mt,
        Corner::Mb,
        Corner::Ml,
        Corner::Mr,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mtr => "mtr",
            Self::Tl => "tl",
            Self::Tr => "tr",
            Self::Bl => "bl",
            Self::Br => "br",
            Self::Mt => "mt",
            Self::Mb => "mb",
            Self::Ml => "ml",
            Self::Mr => "mr",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Corner {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Corner::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ControlError::UnknownCornerName(s.to_owned()))
    }
}

/// Behavior family of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlKind {
    /// Corner handle: scales both axes.
    CornerScale,
    /// Edge midpoint: scales one axis, or skews with the alt-action key.
    EdgeScale,
    /// Rotate handle.
    Rotate,
    /// Dedicated skew handle on an edge.
    Skew,
}

/// A handle on an object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Control {
    /// Unit-square x position, -0.5 (left) to 0.5 (right).
    pub x: f64,
    /// Unit-square y position, -0.5 (top) to 0.5 (bottom).
    pub y: f64,
    /// Extra horizontal displacement in pixels.
    pub offset_x: f64,
    /// Extra vertical displacement in pixels.
    pub offset_y: f64,
    pub kind: ControlKind,
}

impl Control {
    #[must_use]
    pub fn new(x: f64, y: f64, kind: ControlKind) -> Self {
        Self { x, y, offset_x: 0.0, offset_y: 0.0, kind }
    }

    #[must_use]
    pub fn with_offset(mut self, offset_x: f64, offset_y: f64) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// Unit-square position as a point.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Pixel offset as a vector.
    #[must_use]
    pub fn offset(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }

    /// Action a drag on this control starts, given the pointer event.
    ///
    /// Edge controls scale along their axis; holding the configured
    /// alt-action key turns them into skews along the perpendicular axis.
    #[must_use]
    pub fn action_name(&self, event: &PointerEvent, config: &ControlsConfig) -> TransformAction {
        match self.kind {
            ControlKind::CornerScale => TransformAction::Scale,
            ControlKind::Rotate => TransformAction::Rotate,
            ControlKind::Skew => self.skew_action(),
            ControlKind::EdgeScale => {
                if event.modifiers.is_pressed(config.alt_action_key) {
                    self.skew_action()
                } else if self.x == 0.0 {
                    TransformAction::ScaleY
                } else {
                    TransformAction::ScaleX
                }
            }
        }
    }

    // A handle on the top/bottom edge shears horizontally, one on the
    // left/right edge shears vertically.
    fn skew_action(&self) -> TransformAction {
        if self.x == 0.0 { TransformAction::SkewX } else { TransformAction::SkewY }
    }
}

/// The controls of one object, keyed by corner.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSet {
    controls: BTreeMap<Corner, Control>,
}

impl ControlSet {
    /// An empty set, for objects without handles.
    #[must_use]
    pub fn empty() -> Self {
        Self { controls: BTreeMap::new() }
    }

    /// The standard set: four corner scalers, four edge scalers and a rotate
    /// handle floating above the top edge.
    #[must_use]
    pub fn standard() -> Self {
        let mut set = Self::empty();
        set.insert(Corner::Ml, Control::new(-0.5, 0.0, ControlKind::EdgeScale));
        set.insert(Corner::Mr, Control::new(0.5, 0.0, ControlKind::EdgeScale));
        set.insert(Corner::Mt, Control::new(0.0, -0.5, ControlKind::EdgeScale));
        set.insert(Corner::Mb, Control::new(0.0, 0.5, ControlKind::EdgeScale));
        set.insert(Corner::Tl, Control::new(-0.5, -0.5, ControlKind::CornerScale));
        set.insert(Corner::Tr, Control::new(0.5, -0.5, ControlKind::CornerScale));
        set.insert(Corner::Bl, Control::new(-0.5, 0.5, ControlKind::CornerScale));
        set.insert(Corner::Br, Control::new(0.5, 0.5, ControlKind::CornerScale));
        set.insert(
            Corner::Mtr,
            Control::new(0.0, -0.5, ControlKind::Rotate).with_offset(0.0, -ROTATE_HANDLE_OFFSET_PX),
        );
        set
    }

    /// Insert or replace the control at `corner`.
    pub fn insert(&mut self, corner: Corner, control: Control) {
        self.controls.insert(corner, control);
    }

    pub fn remove(&mut self, corner: Corner) -> Option<Control> {
        self.controls.remove(&corner)
    }

    #[must_use]
    pub fn get(&self, corner: Corner) -> Option<&Control> {
        self.controls.get(&corner)
    }

    /// Controls in hit-test priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Corner, &Control)> {
        self.controls.iter().map(|(c, ctrl)| (*c, ctrl))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

impl Default for ControlSet {
    fn default() -> Self {
        Self::standard()
    }
}
