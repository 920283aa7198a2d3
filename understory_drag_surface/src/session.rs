// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: the state recorded for one drag gesture.
//!
//! ## Usage
//!
//! 1) Start a session with [`DragSession::new`], giving the dragged key, the
//!    pointer position and the element's current [`Offsets`].
//! 2) On each move, call [`DragSession::offsets_at`] (unconstrained) or
//!    [`DragSession::constrained_offsets_at`] (kept inside the surface).
//! 3) Drop the session when the gesture ends.
//!
//! Anchors are resolved once, when the session is created. Offsets are always
//! computed from the initial pointer position rather than accumulated per move,
//! so clamping on one move never drifts later moves.
//!
//! Most hosts use [`DragSurface`](crate::surface::DragSurface), which owns the
//! single session slot; this type is public for hosts that keep their own child store.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_drag_surface::offset::{Anchor, Offsets};
//! use understory_drag_surface::session::DragSession;
//!
//! let session = DragSession::new(7_u32, Point::new(100.0, 100.0), &Offsets::left_top(10.0, 10.0));
//! let (h, v) = session.offsets_at(Point::new(130.0, 120.0));
//! assert_eq!((h, v), (Anchor::Start(40.0), Anchor::Start(30.0)));
//! ```

use kurbo::{Point, Size};

use crate::clamp::{clamp_to_bounds, element_rect};
use crate::offset::{Anchor, Offsets};

/// Phase of the drag state machine.
///
/// The "armed" step between pointer-down and dragging never outlives a single
/// call, so it has no variant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A child is being dragged.
    Dragging,
}

/// State of a single drag gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession<K> {
    target: K,
    origin: Point,
    horizontal: Anchor,
    vertical: Anchor,
}

impl<K: Copy> DragSession<K> {
    /// Starts a session for `target` with the pointer at `origin`.
    #[must_use]
    pub fn new(target: K, origin: Point, offsets: &Offsets) -> Self {
        let (horizontal, vertical) = offsets.resolve();
        Self {
            target,
            origin,
            horizontal,
            vertical,
        }
    }

    /// The child being dragged.
    #[must_use]
    pub fn target(&self) -> K {
        self.target
    }

    /// Pointer position when the gesture started.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Horizontal anchor resolved at the start of the gesture.
    #[must_use]
    pub fn initial_horizontal(&self) -> Anchor {
        self.horizontal
    }

    /// Vertical anchor resolved at the start of the gesture.
    #[must_use]
    pub fn initial_vertical(&self) -> Anchor {
        self.vertical
    }

    /// Offsets for the pointer at `cursor`, with no bounds applied.
    #[must_use]
    pub fn offsets_at(&self, cursor: Point) -> (Anchor, Anchor) {
        let delta = cursor - self.origin;
        (
            self.horizontal.translate(delta.x),
            self.vertical.translate(delta.y),
        )
    }

    /// Offsets for the pointer at `cursor`, clamped so an element of size
    /// `element` stays inside a surface of size `bounds`.
    #[must_use]
    pub fn constrained_offsets_at(
        &self,
        cursor: Point,
        element: Size,
        bounds: Size,
    ) -> (Anchor, Anchor) {
        let (horizontal, vertical) = self.offsets_at(cursor);
        let rect = element_rect(horizontal, vertical, element, bounds);
        clamp_to_bounds(rect, bounds, horizontal, vertical)
    }
}
