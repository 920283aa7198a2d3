// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element location: map a pointer-event origin to the surface child it belongs to.
//!
//! Pointer events usually originate deep inside a child (a label inside a
//! button, a glyph run inside a label). The host supplies a [`ParentLookup`],
//! and [`find_child`] walks upward from the origin until it reaches a node that
//! is a direct child of the surface.
//!
//! Scene graphs with several node kinds (for example visual nodes and purely
//! logical nodes, each with their own parent link) switch strategy inside their
//! `parent_of` implementation; the walk itself only ever asks for "the parent".
//!
//! ```
//! use understory_drag_surface::locate::find_child;
//!
//! // 30 -> 20 -> 10 -> 1 (surface root); 10 is a child of the surface.
//! let parent = |n: &u32| match n {
//!     30 => Some(20),
//!     20 => Some(10),
//!     10 => Some(1),
//!     _ => None,
//! };
//! assert_eq!(find_child(30_u32, &parent, |n| *n == 10), Some(10));
//! assert_eq!(find_child(99_u32, &parent, |n| *n == 10), None);
//! ```

/// Source of parent links in the host scene graph.
pub trait ParentLookup<N> {
    /// Returns the parent of `node`, or `None` at a root.
    fn parent_of(&self, node: &N) -> Option<N>;
}

impl<N, F> ParentLookup<N> for F
where
    F: Fn(&N) -> Option<N>,
{
    #[inline]
    fn parent_of(&self, node: &N) -> Option<N> {
        self(node)
    }
}

/// Parent lookup for flat scenes: only an origin that is itself a child is located.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoParents;

impl<N> ParentLookup<N> for NoParents {
    #[inline]
    fn parent_of(&self, _node: &N) -> Option<N> {
        None
    }
}

/// Walks from `origin` through its ancestors and returns the first node for
/// which `is_child` holds.
///
/// The origin itself is checked first. Returns `None` when the walk reaches a
/// root. The parent chain must be acyclic.
pub fn find_child<N, P>(origin: N, parents: &P, mut is_child: impl FnMut(&N) -> bool) -> Option<N>
where
    P: ParentLookup<N> + ?Sized,
{
    let mut node = origin;
    loop {
        if is_child(&node) {
            return Some(node);
        }
        node = parents.parent_of(&node)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    enum Node {
        Visual(u32),
        Logical(u32),
    }

    // Visual nodes link to their visual parent, logical nodes to a logical owner.
    struct Mixed;

    impl ParentLookup<Node> for Mixed {
        fn parent_of(&self, node: &Node) -> Option<Node> {
            match *node {
                Node::Logical(3) => Some(Node::Visual(2)),
                Node::Visual(2) => Some(Node::Visual(1)),
                Node::Visual(1) => Some(Node::Visual(0)),
                _ => None,
            }
        }
    }

    #[test]
    fn origin_that_is_a_child_is_returned() {
        assert_eq!(find_child(5_u32, &NoParents, |n| *n == 5), Some(5));
    }

    #[test]
    fn no_parents_finds_nothing_above_origin() {
        assert_eq!(find_child(5_u32, &NoParents, |n| *n == 4), None);
    }

    #[test]
    fn walks_across_node_kinds() {
        let found = find_child(Node::Logical(3), &Mixed, |n| *n == Node::Visual(1));
        assert_eq!(found, Some(Node::Visual(1)));
    }

    #[test]
    fn nearest_matching_ancestor_wins() {
        let found = find_child(Node::Logical(3), &Mixed, |n| matches!(n, Node::Visual(_)));
        assert_eq!(found, Some(Node::Visual(2)));
    }

    #[test]
    fn reaching_root_returns_none() {
        assert_eq!(find_child(Node::Logical(3), &Mixed, |_| false), None);
    }
}
