// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounds clamping: keep a dragged element inside the surface.
//!
//! [`element_rect`] turns a pair of anchors into the element's rectangle in
//! surface coordinates, and [`clamp_to_bounds`] corrects the anchors so that
//! rectangle stays within `0..width` and `0..height`.
//!
//! Each axis is checked independently. The start edge is checked first, so an
//! element larger than the surface ends up aligned to the start edge.
//!
//! ```
//! use kurbo::Size;
//! use understory_drag_surface::clamp::{clamp_to_bounds, element_rect};
//! use understory_drag_surface::offset::Anchor;
//!
//! let bounds = Size::new(100.0, 100.0);
//! let element = Size::new(20.0, 20.0);
//! let (h, v) = (Anchor::Start(-10.0), Anchor::Start(50.0));
//!
//! let rect = element_rect(h, v, element, bounds);
//! assert_eq!(clamp_to_bounds(rect, bounds, h, v), (Anchor::Start(0.0), Anchor::Start(50.0)));
//! ```

use kurbo::{Point, Rect, Size};

use crate::offset::Anchor;

/// Computes an element's rectangle in surface coordinates from its anchors.
///
/// End anchors are measured from the far edge: `x = bounds.width - value - element.width`.
#[must_use]
pub fn element_rect(horizontal: Anchor, vertical: Anchor, element: Size, bounds: Size) -> Rect {
    let x = match horizontal {
        Anchor::Start(left) => left,
        Anchor::End(right) => bounds.width - right - element.width,
    };
    let y = match vertical {
        Anchor::Start(top) => top,
        Anchor::End(bottom) => bounds.height - bottom - element.height,
    };
    Rect::from_origin_size(Point::new(x, y), element)
}

/// Corrects a candidate rectangle's anchors so that it lies inside `bounds`.
///
/// Returns `(horizontal, vertical)`. An axis that is already inside is returned
/// unchanged. Anchored sides never change; only values do.
#[must_use]
pub fn clamp_to_bounds(
    rect: Rect,
    bounds: Size,
    horizontal: Anchor,
    vertical: Anchor,
) -> (Anchor, Anchor) {
    (
        clamp_axis(horizontal, rect.x0, rect.x1, rect.width(), bounds.width),
        clamp_axis(vertical, rect.y0, rect.y1, rect.height(), bounds.height),
    )
}

fn clamp_axis(anchor: Anchor, min: f64, max: f64, extent: f64, span: f64) -> Anchor {
    let flush_start = if anchor.is_start() { 0.0 } else { span - extent };
    let flush_end = if anchor.is_start() { span - extent } else { 0.0 };
    if min < 0.0 {
        anchor.with_value(flush_start)
    } else if max > span {
        anchor.with_value(flush_end)
    } else {
        anchor
    }
}
