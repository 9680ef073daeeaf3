//! Transform origins.
//!
//! An origin names a point on an object's box along one axis: its start edge
//! (left / top), its center, its end edge (right / bottom), or a numeric
//! offset. Numerically the box spans `[-0.5, 0.5]` with 0 at the center, so an
//! origin times the box dimension gives the offset of the anchor from the
//! object's center.

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{ORIGIN_CENTER, ORIGIN_END, ORIGIN_START};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum OriginError {
    #[error("unknown origin name: {0}")]
    UnknownName(String),
    #[error("origin offset out of range [-0.5, 0.5]: {0}")]
    OutOfRange(f64),
}

impl OriginError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownName(_) => "E_ORIGIN_UNKNOWN_NAME",
            Self::OutOfRange(_) => "E_ORIGIN_OUT_OF_RANGE",
        }
    }
}

/// Anchor along one axis of an object's box.
///
/// Serialized as `"start"`, `"center"`, `"end"` or a bare number. Parsing also
/// accepts the axis names `left`/`top` and `right`/`bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "OriginRepr", into = "OriginRepr")]
pub enum Origin {
    /// Left or top edge.
    Start,
    /// Geometric center.
    #[default]
    Center,
    /// Right or bottom edge.
    End,
    /// Raw offset, normally in `[-0.5, 0.5]`.
    Offset(f64),
}

impl Origin {
    /// Numeric value of this origin. See [`resolve_origin`].
    #[must_use]
    pub fn resolve(self) -> f64 {
        match self {
            Self::Start => ORIGIN_START,
            Self::Center => ORIGIN_CENTER,
            Self::End => ORIGIN_END,
            Self::Offset(v) => v,
        }
    }

    /// Build a numeric origin, rejecting values outside the box.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for values outside `[-0.5, 0.5]` or non-finite values.
    pub fn offset(value: f64) -> Result<Self, OriginError> {
        if !(ORIGIN_START..=ORIGIN_END).contains(&value) {
            return Err(OriginError::OutOfRange(value));
        }
        Ok(Self::Offset(value))
    }
}

/// Map a symbolic origin to its offset: start → -0.5, center → 0, end → 0.5.
/// Numeric origins pass through unchanged.
#[must_use]
pub fn resolve_origin(origin: Origin) -> f64 {
    origin.resolve()
}

/// Complementary anchor, `-resolve_origin(origin) + 0.5`.
///
/// Used when a resize pivots from the edge opposite the one grabbed.
#[must_use]
pub fn invert_origin(origin: Origin) -> f64 {
    -origin.resolve() + 0.5
}

/// Whether a gesture with this origin grows symmetrically about the center.
#[must_use]
pub fn is_transform_centered(origin_x: Origin, origin_y: Origin) -> bool {
    origin_x.resolve() == ORIGIN_CENTER && origin_y.resolve() == ORIGIN_CENTER
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Center => f.write_str("center"),
            Self::End => f.write_str("end"),
            Self::Offset(v) => write!(f, "{v}"),
        }
    }
}

impl FromStr for Origin {
    type Err = OriginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "start" | "left" | "top" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" | "right" | "bottom" => Ok(Self::End),
            other => match other.parse::<f64>() {
                Ok(v) => Self::offset(v),
                Err(_) => Err(OriginError::UnknownName(other.to_owned())),
            },
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum OriginRepr {
    Value(f64),
    Name(String),
}

impl TryFrom<OriginRepr> for Origin {
    type Error = OriginError;

    fn try_from(repr: OriginRepr) -> Result<Self, Self::Error> {
        match repr {
            OriginRepr::Value(v) => Self::offset(v),
            OriginRepr::Name(name) => name.parse(),
        }
    }
}

impl From<Origin> for OriginRepr {
    fn from(origin: Origin) -> Self {
        match origin {
            Origin::Offset(v) => Self::Value(v),
            named => Self::Name(named.to_string()),
        }
    }
}
