use std::sync::Arc;

/// Object storage for a tree, chosen per build.
///
/// The same value is both the build input and the tree-owned storage; the
/// variant passed to [`Bvh::build`](crate::Bvh::build) decides which
/// [`ObjectRef`] variant adapters and visitors receive until the next
/// build.
#[derive(Debug, Clone)]
pub enum ObjectStore<T> {
    /// The tree owns the object values; visitors receive `&T`.
    Embedded(Vec<T>),
    /// The tree owns shared handles to caller-owned objects; visitors
    /// receive `&Arc<T>`.
    Pointers(Vec<Arc<T>>),
    /// The tree stores only a dense object count; visitors receive the
    /// indices `0..count` and resolve them through context of their own,
    /// typically the tree's user data. `T` is unused here and may be `()`.
    Indices(usize),
}

impl<T> ObjectStore<T> {
    /// Number of stored objects.
    pub fn len(&self) -> usize {
        match self {
            ObjectStore::Embedded(objects) => objects.len(),
            ObjectStore::Pointers(objects) => objects.len(),
            ObjectStore::Indices(count) => *count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn object_ref(&self, object: u32) -> ObjectRef<'_, T> {
        match self {
            ObjectStore::Embedded(objects) => ObjectRef::Object(&objects[object as usize]),
            ObjectStore::Pointers(objects) => ObjectRef::Pointer(&objects[object as usize]),
            ObjectStore::Indices(_) => ObjectRef::Index(object as usize),
        }
    }
}

impl<T> Default for ObjectStore<T> {
    fn default() -> Self {
        ObjectStore::Embedded(Vec::new())
    }
}

/// Handle to one stored object, delivered to bounds adapters and intersect
/// visitors. The variant matches the store the tree was last built with.
#[derive(Debug)]
pub enum ObjectRef<'a, T> {
    Object(&'a T),
    Pointer(&'a Arc<T>),
    Index(usize),
}

impl<T> Clone for ObjectRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ObjectRef<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refs_match_store_variant() {
        let store = ObjectStore::Embedded(vec![7u32, 8, 9]);
        assert_eq!(store.len(), 3);
        match store.object_ref(1) {
            ObjectRef::Object(v) => assert_eq!(*v, 8),
            other => panic!("unexpected ref {other:?}"),
        }

        let store = ObjectStore::Pointers(vec![Arc::new(5i32)]);
        match store.object_ref(0) {
            ObjectRef::Pointer(p) => assert_eq!(**p, 5),
            other => panic!("unexpected ref {other:?}"),
        }

        let store: ObjectStore<()> = ObjectStore::Indices(4);
        assert_eq!(store.len(), 4);
        assert!(!store.is_empty());
        match store.object_ref(3) {
            ObjectRef::Index(i) => assert_eq!(i, 3),
            other => panic!("unexpected ref {other:?}"),
        }
    }
}
