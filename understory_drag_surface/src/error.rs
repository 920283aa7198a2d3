// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by drag surface operations.

use core::fmt;

/// Error returned by [`DragSurface`](crate::surface::DragSurface) operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceError<K> {
    /// The key is not a child of the surface.
    InvalidTarget(K),
    /// The child is collapsed and takes no part in the z-order.
    NotVisible(K),
    /// The operation needs an active drag gesture and none is in progress.
    NotDragging,
}

impl<K: fmt::Debug> fmt::Display for SurfaceError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTarget(key) => write!(f, "{key:?} is not a child of the drag surface"),
            Self::NotVisible(key) => write!(f, "{key:?} is not visible and cannot be restacked"),
            Self::NotDragging => f.write_str("no element is being dragged"),
        }
    }
}

impl<K: fmt::Debug> core::error::Error for SurfaceError<K> {}
