//! Input model: pointer events, buttons and modifier keys.
//!
//! These are the raw facts the host reports for each pointer event. Which
//! modifier means what (skew instead of scale, centered scaling, free
//! scaling) is decided by [`crate::config::ControlsConfig`], not here.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::object::ObjectId;
use crate::point::Point;

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Whether `key` is held.
    #[must_use]
    pub fn is_pressed(&self, key: ModifierKey) -> bool {
        match key {
            ModifierKey::Shift => self.shift,
            ModifierKey::Ctrl => self.ctrl,
            ModifierKey::Alt => self.alt,
            ModifierKey::Meta => self.meta,
            ModifierKey::None => false,
        }
    }
}

/// A single modifier key, as named in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKey {
    Shift,
    Ctrl,
    Alt,
    Meta,
    /// Never pressed; disables the behavior bound to it.
    None,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    #[default]
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A pointer event as delivered by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Pointer position in screen pixels.
    pub screen: Point,
    /// Button that changed state (for moves, the button held).
    pub button: Button,
    /// Modifier keys held at the time of the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    #[must_use]
    pub fn new(screen: Point) -> Self {
        Self { screen, ..Default::default() }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_button(mut self, button: Button) -> Self {
        self.button = button;
        self
    }
}

/// Persistent UI state that outlives individual gestures.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The id of the currently selected object, if any.
    pub selected_id: Option<ObjectId>,
}
