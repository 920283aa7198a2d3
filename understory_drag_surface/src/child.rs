// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Children of a drag surface: key, offsets, size, stacking index and flags.

use kurbo::Size;

use crate::offset::Offsets;

bitflags::bitflags! {
    /// Per-child flags controlling painting and dragging.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ChildFlags: u8 {
        /// Child is visible (paints, and counts toward the z-order).
        const VISIBLE   = 0b0000_0001;
        /// Child may be dragged by the user.
        const DRAGGABLE = 0b0000_0010;
    }
}

impl Default for ChildFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::DRAGGABLE
    }
}

/// Host-provided description of a child, used on insertion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalChild {
    /// Position relative to the surface edges.
    pub offsets: Offsets,
    /// Rendered size, as reported by layout.
    pub size: Size,
    /// Visibility and drag flags.
    pub flags: ChildFlags,
}

/// A child of a [`DragSurface`](crate::surface::DragSurface).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Child<K> {
    pub(crate) key: K,
    pub(crate) offsets: Offsets,
    pub(crate) size: Size,
    pub(crate) z_index: i32,
    pub(crate) flags: ChildFlags,
}

impl<K: Copy> Child<K> {
    pub(crate) fn new(key: K, local: LocalChild, z_index: i32) -> Self {
        Self {
            key,
            offsets: local.offsets,
            size: local.size,
            z_index,
            flags: local.flags,
        }
    }

    /// The host key of this child.
    #[must_use]
    pub fn key(&self) -> K {
        self.key
    }

    /// Current offsets relative to the surface edges.
    #[must_use]
    pub fn offsets(&self) -> Offsets {
        self.offsets
    }

    /// Rendered size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Stacking index; higher paints on top.
    #[must_use]
    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    /// Visibility and drag flags.
    #[must_use]
    pub fn flags(&self) -> ChildFlags {
        self.flags
    }

    /// Whether the child paints.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.flags.contains(ChildFlags::VISIBLE)
    }

    /// Whether the child accepts drags.
    #[must_use]
    pub fn can_be_dragged(&self) -> bool {
        self.flags.contains(ChildFlags::DRAGGABLE)
    }
}
