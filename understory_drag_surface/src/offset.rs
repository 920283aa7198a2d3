// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor-offset resolution: decide which edge of the surface an axis offset is relative to.
//!
//! A child's position along one axis is stored as an [`OffsetPair`]: an optional
//! offset from the start edge (left or top) and an optional offset from the end
//! edge (right or bottom). A drag only ever writes one of the two. Resolution
//! collapses the pair into an [`Anchor`], which records both the side and the value.
//!
//! ## Rules
//!
//! | start   | end     | result         |
//! |---------|---------|----------------|
//! | unset   | unset   | `Start(0.0)`   |
//! | `s`     | unset   | `Start(s)`     |
//! | unset   | `e`     | `End(e)`       |
//! | `s`     | `e`     | `Start(s)`     |
//!
//! A `NaN` offset counts as unset.
//!
//! ## Minimal example
//!
//! ```
//! use understory_drag_surface::offset::{Anchor, OffsetPair, resolve_offset};
//!
//! assert_eq!(resolve_offset(None, Some(7.0)), Anchor::End(7.0));
//!
//! let mut pair = OffsetPair::end(7.0);
//! let moved = pair.resolve().translate(5.0);
//! pair.apply(moved);
//! // Moving right shrinks a right-edge offset.
//! assert_eq!(pair.end, Some(2.0));
//! assert_eq!(pair.start, None);
//! ```

/// The authoritative side of an axis and its offset from that side.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Anchor {
    /// Offset measured from the start edge (left or top).
    Start(f64),
    /// Offset measured from the end edge (right or bottom).
    End(f64),
}

impl Anchor {
    /// Returns the offset value regardless of side.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Start(v) | Self::End(v) => v,
        }
    }

    /// Returns `true` when the offset is measured from the start edge.
    #[must_use]
    pub const fn is_start(self) -> bool {
        matches!(self, Self::Start(_))
    }

    /// Returns an anchor on the same side with a different value.
    #[must_use]
    pub const fn with_value(self, value: f64) -> Self {
        match self {
            Self::Start(_) => Self::Start(value),
            Self::End(_) => Self::End(value),
        }
    }

    /// Moves the anchored edge by a pointer delta along this axis.
    ///
    /// Start offsets grow with the delta. End offsets shrink, since the element
    /// moves away from the end edge as the pointer moves toward it.
    #[must_use]
    pub fn translate(self, delta: f64) -> Self {
        match self {
            Self::Start(v) => Self::Start(v + delta),
            Self::End(v) => Self::End(v - delta),
        }
    }
}

/// Resolves one axis of a child's position into its authoritative [`Anchor`].
///
/// The start side wins when both sides are set. When neither is set the child
/// is anchored to the start edge at `0.0`.
#[must_use]
pub fn resolve_offset(start: Option<f64>, end: Option<f64>) -> Anchor {
    match (normalize(start), normalize(end)) {
        (Some(s), _) => Anchor::Start(s),
        (None, Some(e)) => Anchor::End(e),
        (None, None) => Anchor::Start(0.0),
    }
}

fn normalize(side: Option<f64>) -> Option<f64> {
    side.filter(|v| !v.is_nan())
}

/// Offsets of one axis relative to the two opposing edges of the surface.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OffsetPair {
    /// Offset from the start edge (left or top).
    pub start: Option<f64>,
    /// Offset from the end edge (right or bottom).
    pub end: Option<f64>,
}

impl OffsetPair {
    /// Neither side set.
    pub const UNSET: Self = Self {
        start: None,
        end: None,
    };

    /// Only the start side set.
    #[must_use]
    pub const fn start(value: f64) -> Self {
        Self {
            start: Some(value),
            end: None,
        }
    }

    /// Only the end side set.
    #[must_use]
    pub const fn end(value: f64) -> Self {
        Self {
            start: None,
            end: Some(value),
        }
    }

    /// Both sides set.
    #[must_use]
    pub const fn both(start: f64, end: f64) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// See [`resolve_offset`].
    #[must_use]
    pub fn resolve(&self) -> Anchor {
        resolve_offset(self.start, self.end)
    }

    /// Writes the anchored side and leaves the other side untouched.
    pub fn apply(&mut self, anchor: Anchor) {
        match anchor {
            Anchor::Start(v) => self.start = Some(v),
            Anchor::End(v) => self.end = Some(v),
        }
    }
}

/// Both axes of a child's position.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Offsets {
    /// Left / right pair.
    pub horizontal: OffsetPair,
    /// Top / bottom pair.
    pub vertical: OffsetPair,
}

impl Offsets {
    /// Creates offsets from a horizontal and a vertical pair.
    #[must_use]
    pub const fn new(horizontal: OffsetPair, vertical: OffsetPair) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Anchored to the top-left corner.
    #[must_use]
    pub const fn left_top(left: f64, top: f64) -> Self {
        Self::new(OffsetPair::start(left), OffsetPair::start(top))
    }

    /// Anchored to the top-right corner.
    #[must_use]
    pub const fn right_top(right: f64, top: f64) -> Self {
        Self::new(OffsetPair::end(right), OffsetPair::start(top))
    }

    /// Anchored to the bottom-left corner.
    #[must_use]
    pub const fn left_bottom(left: f64, bottom: f64) -> Self {
        Self::new(OffsetPair::start(left), OffsetPair::end(bottom))
    }

    /// Anchored to the bottom-right corner.
    #[must_use]
    pub const fn right_bottom(right: f64, bottom: f64) -> Self {
        Self::new(OffsetPair::end(right), OffsetPair::end(bottom))
    }

    /// Resolves both axes, horizontal first.
    #[must_use]
    pub fn resolve(&self) -> (Anchor, Anchor) {
        (self.horizontal.resolve(), self.vertical.resolve())
    }

    /// Writes both anchors; see [`OffsetPair::apply`].
    pub fn apply(&mut self, horizontal: Anchor, vertical: Anchor) {
        self.horizontal.apply(horizontal);
        self.vertical.apply(vertical);
    }
}
