// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag surface: children, configuration, and the single drag session slot.
//!
//! [`DragSurface`] receives raw pointer input and answers with [`DragEvent`]s
//! that tell the host what to do with pointer capture:
//!
//! - [`DragEvent::Started`]: capture the pointer on the child, and mark the
//!   triggering input as handled so the child itself does not react to it.
//! - [`DragEvent::Moved`]: the child's offsets were written; re-run layout.
//! - [`DragEvent::Ended`]: release pointer capture.
//!
//! ## Gesture lifecycle
//!
//! ```text
//! Idle --pointer_down on a draggable child--> Dragging
//! Dragging --pointer_move--> Dragging (offsets written)
//! Dragging --pointer_up / cancel / set_allow_dragging(false) / remove--> Idle
//! ```
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_drag_surface::child::LocalChild;
//! use understory_drag_surface::locate::NoParents;
//! use understory_drag_surface::offset::{OffsetPair, Offsets};
//! use understory_drag_surface::surface::{DragEvent, DragSurface};
//!
//! let mut surface = DragSurface::new(Size::new(400.0, 300.0));
//! surface.insert(
//!     1_u32,
//!     LocalChild {
//!         offsets: Offsets::left_top(10.0, 10.0),
//!         size: Size::new(50.0, 20.0),
//!         ..LocalChild::default()
//!     },
//! );
//!
//! let events = surface.pointer_down(1, Point::new(100.0, 100.0), &NoParents);
//! assert_eq!(events.as_slice(), &[DragEvent::Started(1)]);
//!
//! surface.pointer_move(Point::new(130.0, 120.0));
//! let offsets = surface.child(1).unwrap().offsets();
//! assert_eq!(offsets.horizontal, OffsetPair::start(40.0));
//! assert_eq!(offsets.vertical, OffsetPair::start(30.0));
//!
//! let events = surface.pointer_up();
//! assert_eq!(events.as_slice(), &[DragEvent::Ended(1)]);
//! ```

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use crate::child::{Child, ChildFlags, LocalChild};
use crate::clamp::element_rect;
use crate::error::SurfaceError;
use crate::locate::{ParentLookup, find_child};
use crate::offset::{Anchor, Offsets};
use crate::session::{DragPhase, DragSession};
use crate::z_order::{self, Restack};

/// Surface-level configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DragSurfaceConfig {
    /// Whether children can be dragged at all. Default `true`.
    pub allow_dragging: bool,
    /// Whether a drag may move a child partly or fully outside the surface.
    /// Default `false`.
    pub allow_drag_out_of_view: bool,
}

impl Default for DragSurfaceConfig {
    fn default() -> Self {
        Self {
            allow_dragging: true,
            allow_drag_out_of_view: false,
        }
    }
}

/// Instruction for the host produced by a drag transition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragEvent<K> {
    /// A drag started: capture the pointer on this child and consume the input.
    Started(K),
    /// The child's anchored offsets were updated.
    Moved {
        /// The dragged child.
        target: K,
        /// Horizontal anchor that was written.
        horizontal: Anchor,
        /// Vertical anchor that was written.
        vertical: Anchor,
    },
    /// The drag ended: release pointer capture on this child.
    Ended(K),
}

/// Events produced by a single input call; at most two (end a stale drag, start a new one).
pub type DragEvents<K> = SmallVec<[DragEvent<K>; 2]>;

/// A container whose children can be repositioned by pointer drag.
///
/// Children are kept in insertion order, which is also the order used by
/// [`reset_z_order`](Self::reset_z_order).
#[derive(Clone, Debug)]
pub struct DragSurface<K> {
    children: Vec<Child<K>>,
    size: Size,
    config: DragSurfaceConfig,
    session: Option<DragSession<K>>,
}

impl<K> DragSurface<K>
where
    K: Copy + Eq + Debug,
{
    /// Creates an empty surface of the given size with default configuration.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self::with_config(size, DragSurfaceConfig::default())
    }

    /// Creates an empty surface with an explicit configuration.
    #[must_use]
    pub fn with_config(size: Size, config: DragSurfaceConfig) -> Self {
        Self {
            children: Vec::new(),
            size,
            config,
            session: None,
        }
    }

    // --- configuration ---

    /// Current surface size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Sets the surface size used for clamping.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> DragSurfaceConfig {
        self.config
    }

    /// Whether children can be dragged.
    #[must_use]
    pub fn allow_dragging(&self) -> bool {
        self.config.allow_dragging
    }

    /// Enables or disables dragging.
    ///
    /// Disabling while a drag is in progress ends it; the returned events then
    /// contain the [`DragEvent::Ended`] the host needs to release capture.
    pub fn set_allow_dragging(&mut self, allow: bool) -> DragEvents<K> {
        self.config.allow_dragging = allow;
        if allow {
            DragEvents::new()
        } else {
            self.end_drag()
        }
    }

    /// Whether drags may leave the visible area.
    #[must_use]
    pub fn allow_drag_out_of_view(&self) -> bool {
        self.config.allow_drag_out_of_view
    }

    /// Sets whether drags may leave the visible area. Takes effect on the next move.
    pub fn set_allow_drag_out_of_view(&mut self, allow: bool) {
        self.config.allow_drag_out_of_view = allow;
    }

    // --- children ---

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` when the surface has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if `key` is a direct child of the surface.
    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.children.iter().any(|c| c.key == key)
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = &Child<K>> + '_ {
        self.children.iter()
    }

    /// Looks up a child by key.
    #[must_use]
    pub fn child(&self, key: K) -> Option<&Child<K>> {
        self.children.iter().find(|c| c.key == key)
    }

    fn child_mut(&mut self, key: K) -> Result<&mut Child<K>, SurfaceError<K>> {
        self.children
            .iter_mut()
            .find(|c| c.key == key)
            .ok_or(SurfaceError::InvalidTarget(key))
    }

    /// Number of visible children.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        z_order::visible_count(&self.children)
    }

    /// Appends a child. A visible child is placed on top of the z-order.
    ///
    /// Returns `false` (and changes nothing) if `key` is already a child.
    pub fn insert(&mut self, key: K, local: LocalChild) -> bool {
        if self.contains(key) {
            return false;
        }
        let z_index = if local.flags.contains(ChildFlags::VISIBLE) {
            i32::try_from(self.visible_count()).unwrap_or(i32::MAX)
        } else {
            0
        };
        self.children.push(Child::new(key, local, z_index));
        true
    }

    /// Removes a child, ending the drag if it was the one being dragged.
    ///
    /// The z-order of the remaining visible children is kept dense. Any
    /// [`DragEvent::Ended`] is returned alongside the removed child.
    pub fn remove(&mut self, key: K) -> Option<(Child<K>, DragEvents<K>)> {
        let index = self.children.iter().position(|c| c.key == key)?;
        let events = if self.dragged_key() == Some(key) {
            self.end_drag()
        } else {
            DragEvents::new()
        };
        let child = self.children.remove(index);
        if child.is_visible() {
            z_order::close_gap(&mut self.children, child.z_index);
        }
        Some((child, events))
    }

    /// Replaces a child's offsets.
    pub fn set_offsets(&mut self, key: K, offsets: Offsets) -> Result<(), SurfaceError<K>> {
        self.child_mut(key)?.offsets = offsets;
        Ok(())
    }

    /// Records a child's rendered size, as reported by layout.
    pub fn set_child_size(&mut self, key: K, size: Size) -> Result<(), SurfaceError<K>> {
        self.child_mut(key)?.size = size;
        Ok(())
    }

    /// Shows or hides a child.
    ///
    /// When visibility actually changes, visible children are renumbered
    /// densely in insertion order (see [`reset_z_order`](Self::reset_z_order)).
    pub fn set_visible(&mut self, key: K, visible: bool) -> Result<(), SurfaceError<K>> {
        let child = self.child_mut(key)?;
        if child.is_visible() == visible {
            return Ok(());
        }
        child.flags.set(ChildFlags::VISIBLE, visible);
        self.reset_z_order();
        Ok(())
    }

    /// Whether `key` accepts drags. Unknown keys are never draggable.
    #[must_use]
    pub fn can_be_dragged(&self, key: K) -> bool {
        self.child(key).is_some_and(Child::can_be_dragged)
    }

    /// Sets whether a child accepts drags.
    ///
    /// This is checked when a drag starts; a drag already in progress continues.
    pub fn set_can_be_dragged(&mut self, key: K, value: bool) -> Result<(), SurfaceError<K>> {
        self.child_mut(key)?.flags.set(ChildFlags::DRAGGABLE, value);
        Ok(())
    }

    /// Flips whether a child accepts drags, returning the new value.
    pub fn toggle_can_be_dragged(&mut self, key: K) -> Result<bool, SurfaceError<K>> {
        let child = self.child_mut(key)?;
        child.flags.toggle(ChildFlags::DRAGGABLE);
        Ok(child.can_be_dragged())
    }

    // --- location ---

    /// Walks up from `origin` to the direct child of this surface it belongs to.
    pub fn locate<P>(&self, origin: K, parents: &P) -> Option<K>
    where
        P: ParentLookup<K> + ?Sized,
    {
        find_child(origin, parents, |node| self.contains(*node))
    }

    /// The child a context action (restack, toggle draggable) should apply to.
    ///
    /// While dragging this is the dragged child, even if the origin lies over
    /// another child stacked above it.
    pub fn context_target<P>(&self, origin: K, parents: &P) -> Option<K>
    where
        P: ParentLookup<K> + ?Sized,
    {
        self.dragged().or_else(|| self.locate(origin, parents))
    }

    // --- drag state machine ---

    /// Current phase of the drag state machine.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        if self.session.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession<K>> {
        self.session.as_ref()
    }

    /// The child being dragged. Always `None` while dragging is disallowed.
    #[must_use]
    pub fn dragged(&self) -> Option<K> {
        if self.config.allow_dragging {
            self.dragged_key()
        } else {
            None
        }
    }

    fn dragged_key(&self) -> Option<K> {
        self.session.as_ref().map(DragSession::target)
    }

    /// Handles a primary pointer press at `position` whose event originated at `origin`.
    ///
    /// A drag left over from a missed release is ended first. A new drag starts
    /// only if `origin` resolves to a draggable child and dragging is allowed.
    pub fn pointer_down<P>(&mut self, origin: K, position: Point, parents: &P) -> DragEvents<K>
    where
        P: ParentLookup<K> + ?Sized,
    {
        let mut events = self.end_drag();

        if !self.config.allow_dragging {
            return events;
        }
        let Some(key) = self.locate(origin, parents) else {
            return events;
        };
        let Some(child) = self.child(key) else {
            return events;
        };
        if !child.can_be_dragged() {
            log::trace!("pointer down on {key:?} ignored: not draggable");
            return events;
        }

        let session = DragSession::new(key, position, &child.offsets);
        log::debug!(
            "drag started on {key:?} at ({}, {}), anchors {:?} / {:?}",
            position.x,
            position.y,
            session.initial_horizontal(),
            session.initial_vertical(),
        );
        self.session = Some(session);
        events.push(DragEvent::Started(key));
        events
    }

    /// Handles pointer movement. Does nothing unless a drag is in progress.
    pub fn pointer_move(&mut self, position: Point) -> DragEvents<K> {
        let mut events = DragEvents::new();
        if !self.config.allow_dragging {
            return events;
        }
        let Some(session) = self.session else {
            return events;
        };
        let Some(child) = self.children.iter_mut().find(|c| c.key == session.target()) else {
            self.session = None;
            return events;
        };

        let (horizontal, vertical) = if self.config.allow_drag_out_of_view {
            session.offsets_at(position)
        } else {
            session.constrained_offsets_at(position, child.size, self.size)
        };
        child.offsets.apply(horizontal, vertical);
        log::trace!(
            "drag move {:?} -> {horizontal:?} / {vertical:?}",
            session.target()
        );

        events.push(DragEvent::Moved {
            target: session.target(),
            horizontal,
            vertical,
        });
        events
    }

    /// Handles a pointer release (any button). Ends the drag if one is active.
    pub fn pointer_up(&mut self) -> DragEvents<K> {
        self.end_drag()
    }

    /// Ends the drag after an interrupted gesture (focus loss, capture lost).
    pub fn cancel(&mut self) -> DragEvents<K> {
        self.end_drag()
    }

    /// Ends the drag, if any. Safe to call when idle.
    pub fn end_drag(&mut self) -> DragEvents<K> {
        let mut events = DragEvents::new();
        if let Some(session) = self.session.take() {
            log::debug!("drag ended on {:?}", session.target());
            events.push(DragEvent::Ended(session.target()));
        }
        events
    }

    /// Offsets the dragged child would receive for the pointer at `position`.
    pub fn preview_offsets(&self, position: Point) -> Result<(Anchor, Anchor), SurfaceError<K>> {
        let session = self.session.as_ref().ok_or(SurfaceError::NotDragging)?;
        if self.config.allow_drag_out_of_view {
            return Ok(session.offsets_at(position));
        }
        let child = self
            .child(session.target())
            .ok_or(SurfaceError::NotDragging)?;
        Ok(session.constrained_offsets_at(position, child.size, self.size))
    }

    /// Bounds of the dragged child if it were placed at the given anchors.
    pub fn drag_element_rect(
        &self,
        horizontal: Anchor,
        vertical: Anchor,
    ) -> Result<Rect, SurfaceError<K>> {
        let key = self.dragged_key().ok_or(SurfaceError::NotDragging)?;
        let child = self.child(key).ok_or(SurfaceError::NotDragging)?;
        Ok(element_rect(horizontal, vertical, child.size, self.size))
    }

    // --- z-order ---

    /// Moves a child above every other visible child.
    ///
    /// Children that were above it move down by one. Returns its new index.
    pub fn bring_to_front(&mut self, key: K) -> Result<i32, SurfaceError<K>> {
        let index = z_order::restack(&mut self.children, key, Restack::Front)?;
        log::debug!("{key:?} brought to front at z {index}");
        Ok(index)
    }

    /// Moves a child below every other visible child.
    ///
    /// Children that were below it move up by one. Returns its new index (`0`).
    pub fn send_to_back(&mut self, key: K) -> Result<i32, SurfaceError<K>> {
        let index = z_order::restack(&mut self.children, key, Restack::Back)?;
        log::debug!("{key:?} sent to back");
        Ok(index)
    }

    /// Renumbers visible children `0..n` in insertion order.
    ///
    /// Hidden children keep their stored index; they are renumbered again when shown.
    pub fn reset_z_order(&mut self) {
        z_order::renumber_visible(&mut self.children);
    }
}
