use std::mem;

use smallvec::SmallVec;

use crate::aabb::AABB;
use crate::build::{build_balanced_rec, build_unbalanced_rec, LeafEntry};
use crate::coord::Coord;
use crate::element::{Element, GeometryElement};
use crate::error::BvhError;
use crate::store::{ObjectRef, ObjectStore};

/// Inline traversal stack depth before spilling to the heap.
const TRAVERSAL_STACK: usize = 64;

/// Most objects a build accepts: node ids are u32 and a tree of n objects
/// has 2n - 1 nodes.
const MAX_OBJECTS: usize = (u32::MAX / 2) as usize + 1;

/// How [`Bvh::build`] partitions objects into the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Fast build: spatial midpoint splits along the longest axis, with a
    /// count split as fallback. The usual choice for frequently rebuilt
    /// trees.
    Unbalanced,
    /// Median splits for minimal depth. Slower to build, better for
    /// long-lived trees queried many times.
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Node<V> {
    pub bounds: AABB<V>,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Leaf { object: u32 },
    Internal { left: u32, right: u32 },
}

/// Spatial index over axis-aligned bounding boxes.
///
/// `V` fixes the coordinate vector (axis count and scalar) at compile
/// time, `T` is the stored object type and `U` is caller data the tree
/// holds verbatim and passes to every bounds adapter call.
///
/// Mutation requires `&mut self`; queries and getters take `&self` and may
/// run concurrently from any number of threads. The tree itself never
/// locks.
#[derive(Debug, Clone)]
pub struct Bvh<V: Coord, T, U = ()> {
    user_data: U,
    nodes: Vec<Node<V>>,
    store: ObjectStore<T>,
}

impl<V: Coord, T> Bvh<V, T> {
    /// Create an empty tree without user data.
    pub fn new() -> Self {
        Self::with_user_data(())
    }
}

impl<V: Coord, T, U: Default> Default for Bvh<V, T, U> {
    fn default() -> Self {
        Self::with_user_data(U::default())
    }
}

impl<V: Coord, T, U> Bvh<V, T, U> {
    /// Create an empty tree holding `user_data`.
    pub fn with_user_data(user_data: U) -> Self {
        Self {
            user_data,
            nodes: Vec::new(),
            store: ObjectStore::default(),
        }
    }

    /// Number of axes of the coordinate type, 2 or 3.
    #[inline]
    pub fn axis_count(&self) -> usize {
        V::AXIS_COUNT
    }

    /// Scalar tag of the coordinate type.
    #[inline]
    pub fn element(&self) -> GeometryElement {
        V::Elem::ELEMENT
    }

    #[inline]
    pub fn user_data(&self) -> &U {
        &self.user_data
    }

    #[inline]
    pub fn user_data_mut(&mut self) -> &mut U {
        &mut self.user_data
    }

    /// Replace the user data, returning the previous value.
    pub fn set_user_data(&mut self, user_data: U) -> U {
        mem::replace(&mut self.user_data, user_data)
    }

    /// If the tree holds no objects.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of stored objects.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Bounds enclosing every object, `None` when the tree is empty.
    #[inline]
    pub fn bounds(&self) -> Option<AABB<V>> {
        self.nodes.first().map(|node| node.bounds)
    }

    /// Drop all nodes and objects, keeping allocations and user data.
    pub fn clear(&mut self) {
        self.nodes.clear();
        match &mut self.store {
            ObjectStore::Embedded(objects) => objects.clear(),
            ObjectStore::Pointers(objects) => objects.clear(),
            ObjectStore::Indices(count) => *count = 0,
        }
    }

    /// Build the hierarchy from `objects`, discarding previous contents on
    /// success.
    ///
    /// `object_bounds` runs exactly once per object, receiving the tree's
    /// user data and the object's [`ObjectRef`]; returning `None` aborts
    /// with [`BvhError::ObjectBounds`] and the previous tree is kept.
    /// `objects` is consumed even by a failed build. Building from an
    /// empty store succeeds with an empty tree. Objects whose box is
    /// invalid are stored but never match queries.
    ///
    /// Later [`update`](Self::update) calls must be passed an adapter
    /// producing bounds for the same objects.
    pub fn build<F>(
        &mut self,
        objects: ObjectStore<T>,
        mode: BuildMode,
        mut object_bounds: F,
    ) -> Result<(), BvhError>
    where
        F: FnMut(&U, ObjectRef<'_, T>) -> Option<AABB<V>>,
    {
        let count = objects.len();
        if count == 0 {
            self.nodes.clear();
            self.store = objects;
            return Ok(());
        }
        if count > MAX_OBJECTS {
            return Err(BvhError::CapacityExceeded(count));
        }

        let mut entries = Vec::with_capacity(count);
        for i in 0..count {
            match object_bounds(&self.user_data, objects.object_ref(i as u32)) {
                Some(bounds) => entries.push(LeafEntry {
                    object: i as u32,
                    bounds,
                }),
                None => {
                    log::warn!("bounds adapter failed for object {i}, keeping previous tree");
                    return Err(BvhError::ObjectBounds(i));
                }
            }
        }

        let mut nodes = Vec::with_capacity(2 * count - 1);
        let root = match mode {
            BuildMode::Unbalanced => build_unbalanced_rec(&mut nodes, &mut entries),
            BuildMode::Balanced => build_balanced_rec(&mut nodes, &mut entries),
        };
        debug_assert_eq!(root, 0);
        debug_assert_eq!(nodes.len(), 2 * count - 1);
        log::debug!(
            "built {mode:?} tree: {count} objects, {} nodes",
            nodes.len()
        );

        self.nodes = nodes;
        self.store = objects;
        Ok(())
    }

    /// Refresh every box from `object_bounds` without changing topology.
    ///
    /// Leaves get fresh adapter bounds and internal nodes the union of
    /// their children, bottom-up. If the adapter returns `None` the walk
    /// stops with [`BvhError::ObjectBounds`]; subtrees refreshed so far
    /// keep their new boxes and the rest keep the old ones, so the tree
    /// stays queryable.
    ///
    /// Since topology is kept, a tree whose objects drifted far from
    /// their build-time positions partitions poorly until the next
    /// [`build`](Self::build).
    pub fn update<F>(&mut self, mut object_bounds: F) -> Result<(), BvhError>
    where
        F: FnMut(&U, ObjectRef<'_, T>) -> Option<AABB<V>>,
    {
        let Self {
            user_data,
            nodes,
            store,
        } = self;

        // Children always follow their parent in the arena, so reverse
        // index order is bottom-up.
        for i in (0..nodes.len()).rev() {
            match nodes[i].kind {
                NodeKind::Leaf { object } => {
                    match object_bounds(user_data, store.object_ref(object)) {
                        Some(bounds) => nodes[i].bounds = bounds,
                        None => {
                            log::warn!("bounds adapter failed for object {object} during update");
                            return Err(BvhError::ObjectBounds(object as usize));
                        }
                    }
                }
                NodeKind::Internal { left, right } => {
                    let bounds = nodes[left as usize]
                        .bounds
                        .union(&nodes[right as usize].bounds);
                    nodes[i].bounds = bounds;
                }
            }
        }
        Ok(())
    }

    /// Visit every stored object whose box intersects `bounds`.
    ///
    /// `visitor` receives the object's [`ObjectRef`] and the query box;
    /// returning `false` stops the whole query immediately. The return
    /// value counts the objects visited, including the one that stopped
    /// the query. Visit order is unspecified. Objects with invalid boxes
    /// are never visited, and an invalid query box visits nothing.
    pub fn intersect<F>(&self, bounds: &AABB<V>, mut visitor: F) -> u32
    where
        F: FnMut(ObjectRef<'_, T>, &AABB<V>) -> bool,
    {
        let mut visited = 0;
        if self.nodes.is_empty() {
            return visited;
        }

        let mut stack: SmallVec<[u32; TRAVERSAL_STACK]> = SmallVec::new();
        stack.push(0);
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id as usize];
            if !node.bounds.intersects(bounds) {
                continue;
            }
            match node.kind {
                NodeKind::Leaf { object } => {
                    visited += 1;
                    if !visitor(self.store.object_ref(object), bounds) {
                        return visited;
                    }
                }
                NodeKind::Internal { left, right } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        visited
    }

    /// Count intersecting objects without visiting them.
    #[inline]
    pub fn intersect_count(&self, bounds: &AABB<V>) -> u32 {
        self.intersect(bounds, |_, _| true)
    }
}
