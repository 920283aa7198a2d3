// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense z-order renumbering over a surface's children.
//!
//! Visible children hold the indices `0..n` with no gaps or duplicates.
//! Restacking moves one child to the top or bottom slot and shifts only the
//! children between its old and new slot by one, so the relative order of
//! everything else is preserved.

use crate::child::Child;
use crate::error::SurfaceError;

/// Direction of a restack.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Restack {
    Front,
    Back,
}

pub(crate) fn visible_count<K: Copy>(children: &[Child<K>]) -> usize {
    children.iter().filter(|c| c.is_visible()).count()
}

fn as_index(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

/// Moves `key` to the top or bottom slot, returning its new index.
///
/// Nothing is renumbered when an error is returned.
pub(crate) fn restack<K: Copy + Eq>(
    children: &mut [Child<K>],
    key: K,
    direction: Restack,
) -> Result<i32, SurfaceError<K>> {
    let Some(target) = children.iter().position(|c| c.key == key) else {
        return Err(SurfaceError::InvalidTarget(key));
    };
    if !children[target].is_visible() {
        return Err(SurfaceError::NotVisible(key));
    }

    let new_index = match direction {
        Restack::Front => as_index(visible_count(children)) - 1,
        Restack::Back => 0,
    };
    let shift = if new_index == 0 { 1 } else { -1 };
    let old_index = children[target].z_index;

    for (i, child) in children.iter_mut().enumerate() {
        if i == target {
            child.z_index = new_index;
            continue;
        }
        let between = match direction {
            Restack::Front => old_index < child.z_index,
            Restack::Back => child.z_index < old_index,
        };
        if between {
            child.z_index += shift;
        }
    }

    Ok(new_index)
}

/// Renumbers visible children `0..n` in collection order.
///
/// Hidden children keep their stored index since they do not paint.
pub(crate) fn renumber_visible<K: Copy>(children: &mut [Child<K>]) {
    let mut next = 0;
    for child in children.iter_mut().filter(|c| c.is_visible()) {
        child.z_index = next;
        next += 1;
    }
}

/// Closes the slot left behind by a removed visible child.
pub(crate) fn close_gap<K: Copy>(children: &mut [Child<K>], removed: i32) {
    for child in children.iter_mut().filter(|c| c.is_visible()) {
        if child.z_index > removed {
            child.z_index -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::child::{ChildFlags, LocalChild};
    use alloc::vec::Vec;

    fn children(indices: &[i32]) -> Vec<Child<u32>> {
        indices
            .iter()
            .enumerate()
            .map(|(i, &z)| Child::new(u32::try_from(i).unwrap(), LocalChild::default(), z))
            .collect()
    }

    fn indices(children: &[Child<u32>]) -> Vec<i32> {
        children.iter().map(|c| c.z_index).collect()
    }

    fn is_dense(children: &[Child<u32>]) -> bool {
        let mut visible: Vec<i32> = children
            .iter()
            .filter(|c| c.is_visible())
            .map(|c| c.z_index)
            .collect();
        visible.sort_unstable();
        visible.iter().copied().eq(0..as_index(visible.len()))
    }

    #[test]
    fn bring_to_front_closes_the_gap_above() {
        let mut kids = children(&[0, 1, 2, 3]);
        assert_eq!(restack(&mut kids, 1, Restack::Front), Ok(3));
        assert_eq!(indices(&kids), [0, 3, 1, 2]);
    }

    #[test]
    fn send_to_back_makes_room_below() {
        let mut kids = children(&[0, 1, 2, 3]);
        assert_eq!(restack(&mut kids, 2, Restack::Back), Ok(0));
        assert_eq!(indices(&kids), [1, 2, 0, 3]);
    }

    #[test]
    fn restacking_the_current_top_is_stable() {
        let mut kids = children(&[0, 1, 2, 3]);
        restack(&mut kids, 3, Restack::Front).unwrap();
        assert_eq!(indices(&kids), [0, 1, 2, 3]);
        restack(&mut kids, 0, Restack::Back).unwrap();
        assert_eq!(indices(&kids), [0, 1, 2, 3]);
    }

    #[test]
    fn unknown_key_is_rejected_without_changes() {
        let mut kids = children(&[2, 0, 1]);
        assert_eq!(
            restack(&mut kids, 9, Restack::Front),
            Err(SurfaceError::InvalidTarget(9))
        );
        assert_eq!(indices(&kids), [2, 0, 1]);
    }

    #[test]
    fn hidden_key_is_rejected_without_changes() {
        let mut kids = children(&[0, 1, 2]);
        kids[1].flags.remove(ChildFlags::VISIBLE);
        assert_eq!(
            restack(&mut kids, 1, Restack::Back),
            Err(SurfaceError::NotVisible(1))
        );
        assert_eq!(indices(&kids), [0, 1, 2]);
    }

    #[test]
    fn front_slot_counts_only_visible_children() {
        let mut kids = children(&[0, 1, 2, 0]);
        kids[3].flags.remove(ChildFlags::VISIBLE);
        assert_eq!(restack(&mut kids, 0, Restack::Front), Ok(2));
        assert!(is_dense(&kids));
    }

    #[test]
    fn any_restack_sequence_stays_dense() {
        let mut kids = children(&[0, 1, 2, 3, 4, 5]);
        let steps = [
            (4, Restack::Front),
            (0, Restack::Back),
            (2, Restack::Front),
            (5, Restack::Back),
            (2, Restack::Back),
            (1, Restack::Front),
            (3, Restack::Front),
        ];
        for (key, direction) in steps {
            restack(&mut kids, key, direction).unwrap();
            assert!(is_dense(&kids), "not dense after {key} {direction:?}");
        }
    }

    #[test]
    fn renumber_follows_collection_order_and_skips_hidden() {
        let mut kids = children(&[3, 7, 1, 5]);
        kids[1].flags.remove(ChildFlags::VISIBLE);
        renumber_visible(&mut kids);
        assert_eq!(indices(&kids), [0, 7, 1, 2]);
    }

    #[test]
    fn close_gap_shifts_children_above() {
        let mut kids = children(&[0, 2, 3]);
        close_gap(&mut kids, 1);
        assert_eq!(indices(&kids), [0, 1, 2]);
    }
}
