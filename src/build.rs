use std::cmp::Ordering;

use crate::aabb::AABB;
use crate::bvh::{Node, NodeKind};
use crate::coord::Coord;

/// Scratch entry for one object during a build: the object id plus its
/// prefetched bounds. The bounds adapter runs once per object to fill
/// these; partitioning never re-queries it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LeafEntry<V> {
    pub object: u32,
    pub bounds: AABB<V>,
}

/// Union of the entries' boxes, ignoring invalid ones.
fn slice_bounds<V: Coord>(entries: &[LeafEntry<V>]) -> AABB<V> {
    let mut bounds = AABB::default();
    for entry in entries {
        bounds.grow(&entry.bounds);
    }
    bounds
}

/// Fast build: split at the spatial midpoint of the longest axis, falling
/// back to a count split when the partition leaves one side empty.
///
/// The node for `entries` is allocated before either child, so the root
/// lands at index 0 and children always follow their parent.
pub(crate) fn build_unbalanced_rec<V: Coord>(
    nodes: &mut Vec<Node<V>>,
    entries: &mut [LeafEntry<V>],
) -> u32 {
    debug_assert!(!entries.is_empty());
    let id = nodes.len() as u32;
    if let [entry] = entries {
        nodes.push(Node {
            bounds: entry.bounds,
            kind: NodeKind::Leaf { object: entry.object },
        });
        return id;
    }

    let bounds = slice_bounds(entries);
    nodes.push(Node {
        bounds,
        kind: NodeKind::Leaf { object: 0 },
    });

    let axis = bounds.longest_axis();
    let split = bounds.center_along(axis);

    // Two-pointer partition: centers below the split go left.
    let mut i = 0isize;
    let mut j = entries.len() as isize - 1;
    while i <= j {
        if entries[i as usize].bounds.center_along(axis) < split {
            i += 1;
        } else {
            entries.swap(i as usize, j as usize);
            j -= 1;
        }
    }

    let mut mid = i as usize;
    if mid == 0 || mid == entries.len() {
        mid = entries.len() / 2;
    }

    let (left_entries, right_entries) = entries.split_at_mut(mid);
    let left = build_unbalanced_rec(nodes, left_entries);
    let right = build_unbalanced_rec(nodes, right_entries);
    nodes[id as usize] = Node {
        bounds,
        kind: NodeKind::Internal { left, right },
    };
    id
}

/// Balanced build: split at the median box center along the longest axis,
/// partially sorting the slice per level. Depth is the ceiling of log2 of
/// the object count.
pub(crate) fn build_balanced_rec<V: Coord>(
    nodes: &mut Vec<Node<V>>,
    entries: &mut [LeafEntry<V>],
) -> u32 {
    debug_assert!(!entries.is_empty());
    let id = nodes.len() as u32;
    if let [entry] = entries {
        nodes.push(Node {
            bounds: entry.bounds,
            kind: NodeKind::Leaf { object: entry.object },
        });
        return id;
    }

    let bounds = slice_bounds(entries);
    nodes.push(Node {
        bounds,
        kind: NodeKind::Leaf { object: 0 },
    });

    let axis = bounds.longest_axis();
    let mid = entries.len() / 2;
    entries.select_nth_unstable_by(mid, |a, b| {
        let ca = a.bounds.center_along(axis);
        let cb = b.bounds.center_along(axis);
        ca.partial_cmp(&cb).unwrap_or(Ordering::Equal)
    });

    let (left_entries, right_entries) = entries.split_at_mut(mid);
    let left = build_balanced_rec(nodes, left_entries);
    let right = build_balanced_rec(nodes, right_entries);
    nodes[id as usize] = Node {
        bounds,
        kind: NodeKind::Internal { left, right },
    };
    id
}
