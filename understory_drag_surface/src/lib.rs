// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Drag Surface: pointer-driven repositioning of children within a container.
//!
//! A drag surface owns a set of children, each positioned by offsets from the
//! surface's edges (left or right, top or bottom). The user drags a child with
//! the pointer; the surface writes new offsets on every move, optionally keeps
//! the child inside its visible bounds, and maintains a dense stacking order
//! that can be changed with bring-to-front and send-to-back.
//!
//! The crate does not render, lay out, or route events. It consumes pointer
//! positions and an event-origin node, and produces [`DragEvent`]s telling the
//! host when to capture and release the pointer. Offsets and z-indices are plain
//! data the host reads back into its layout.
//!
//! ## Modules
//!
//! - [`offset`]: offset pairs and anchor resolution (which edge is authoritative).
//! - [`clamp`]: keeping a dragged element inside the surface.
//! - [`session`]: state of a single drag gesture.
//! - [`locate`]: mapping an event origin to a direct child through a [`ParentLookup`].
//! - [`surface`]: the [`DragSurface`] itself, including z-order management.
//! - [`child`] / [`error`]: supporting types.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_drag_surface::{
//!     ChildFlags, DragEvent, DragSurface, LocalChild, OffsetPair, Offsets,
//! };
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq)]
//! struct Node(u32);
//!
//! // Node(10) is a label inside the child Node(1).
//! let parents = |n: &Node| (n.0 == 10).then_some(Node(1));
//!
//! let mut surface = DragSurface::new(Size::new(200.0, 200.0));
//! surface.insert(
//!     Node(1),
//!     LocalChild {
//!         // Anchored to the right edge.
//!         offsets: Offsets::right_top(20.0, 20.0),
//!         size: Size::new(40.0, 40.0),
//!         flags: ChildFlags::default(),
//!     },
//! );
//!
//! let events = surface.pointer_down(Node(10), Point::new(150.0, 30.0), &parents);
//! assert_eq!(events.as_slice(), &[DragEvent::Started(Node(1))]);
//!
//! // Moving left grows the right-edge offset; the left offset stays unset.
//! surface.pointer_move(Point::new(120.0, 30.0));
//! let offsets = surface.child(Node(1)).unwrap().offsets();
//! assert_eq!(offsets.horizontal, OffsetPair::end(50.0));
//!
//! surface.pointer_up();
//! assert!(!surface.is_dragging());
//! ```
//!
//! ## Z-order
//!
//! Visible children always hold the indices `0..n`. New visible children go on
//! top. [`DragSurface::bring_to_front`] and [`DragSurface::send_to_back`] move
//! one child and shift only the children between its old and new slot.
//! Changing a child's visibility renumbers visible children in insertion order.
//!
//! ## Logging
//!
//! Gesture start/end and restacking are reported through the [`log`] facade at
//! `debug` level, individual moves at `trace` level.
//!
//! ## Features
//!
//! - `std` (default): forward `std` to Kurbo.
//! - `libm`: forward `libm` to Kurbo for `no_std` builds.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod child;
pub mod clamp;
pub mod error;
pub mod locate;
pub mod offset;
pub mod session;
pub mod surface;

mod z_order;

pub use child::{Child, ChildFlags, LocalChild};
pub use error::SurfaceError;
pub use locate::{NoParents, ParentLookup};
pub use offset::{Anchor, OffsetPair, Offsets};
pub use session::{DragPhase, DragSession};
pub use surface::{DragEvent, DragEvents, DragSurface, DragSurfaceConfig};
