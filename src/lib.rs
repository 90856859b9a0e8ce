//! Bounding volume hierarchy over axis-aligned boxes with 2 or 3 axes and
//! `f32`, `f64` or `i32` coordinates.
//!
//! A [`Bvh`] is built over one of three object storage modes
//! ([`ObjectStore`]), queried with box-overlap visitors and refreshed in
//! place with [`Bvh::update`] when object bounds change but membership
//! does not.
//!
//! ```
//! use bvh_tree::{Bvh, BuildMode, ObjectRef, ObjectStore, AABB};
//! use glam::Vec2;
//!
//! let boxes = vec![
//!     AABB::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)),
//!     AABB::new(Vec2::new(4.0, 0.0), Vec2::new(5.0, 1.0)),
//! ];
//!
//! let mut bvh: Bvh<Vec2, AABB<Vec2>> = Bvh::new();
//! bvh.build(ObjectStore::Embedded(boxes), BuildMode::Balanced, |_, object_ref| {
//!     match object_ref {
//!         ObjectRef::Object(bounds) => Some(*bounds),
//!         _ => None,
//!     }
//! })?;
//!
//! let query = AABB::new(Vec2::new(3.0, 0.0), Vec2::new(6.0, 2.0));
//! assert_eq!(bvh.intersect_count(&query), 1);
//! # Ok::<(), bvh_tree::BvhError>(())
//! ```

pub mod aabb;
pub use aabb::*;

pub mod axis;
pub use axis::*;

mod build;

pub mod bvh;
pub use bvh::*;

pub mod coord;
pub use coord::*;

pub mod element;
pub use element::*;

pub mod error;
pub use error::*;

pub mod store;
pub use store::*;
