#![warn(missing_docs)]
//! # point_octree
//!
//! point_octree is a crate providing an octree over 3D points: a tree that recursively partitions
//! a cuboid of space into eight octants so that points can be inserted one at a time and queried
//! by axis-aligned box efficiently.
//!
//! ## Goals
//!
//! The main goal of this crate is to provide a small spatial index that can easily be integrated
//! into existing game engines, visualisers and simulations. It does not draw anything; instead it
//! exposes the geometry of every node through [`Octree::for_each_node`] so that callers can render
//! the partition however they like.
//!
//! Each leaf stores at most one point. A leaf receiving a second point splits into eight children
//! and both points move down, splitting again as long as they share an octant. Splits stop at a
//! configurable maximum depth, so inserting duplicate points always terminates.
//!
//! ## Using point_octree
//!
//! ### Getting started
//!
//! Any vector type that converts into `[S; 3]` can be stored directly: plain arrays, and the 3D
//! vectors of `glam`, `ultraviolet` and `nalgebra` with the corresponding features enabled (`glam`
//! is enabled by default).
//!
//! ```
//! use point_octree::prelude::*;
//! use glam::DVec3;
//!
//! let mut octree: Octree<DVec3, f64> = Octree::new(DVec3::ZERO, DVec3::splat(400.0));
//!
//! octree.insert(DVec3::new(100.0, 100.0, 100.0))?;
//! octree.insert(DVec3::new(-50.0, -50.0, -50.0))?;
//! octree.insert(DVec3::new(100.0, 100.0, 101.0))?;
//!
//! let mut found = Vec::new();
//! octree.query(DVec3::splat(90.0), DVec3::splat(110.0), &mut found)?;
//!
//! assert_eq!(found.len(), 2);
//! assert!(!found.contains(&DVec3::splat(-50.0)));
//! # Ok::<(), OctreeError>(())
//! ```
//!
//! ### Storing your own types
//!
//! The [`Position`] trait locates an item in space. When the type has a field named `position`,
//! you can derive it.
//!
//! ```
//! use point_octree::prelude::*;
//! use glam::Vec3;
//!
//! #[derive(Position, Clone)]
//! struct Dot {
//!     position: Vec3,
//!     radius: f32,
//! }
//!
//! let mut octree: Octree<Dot, f32> = Octree::new(Vec3::ZERO, Vec3::splat(400.0));
//! octree.insert(Dot { position: Vec3::new(1.0, 2.0, 3.0), radius: 2.0 })?;
//!
//! let near_origin = octree.points_in(&BoundingBox::new([-5.0; 3], [5.0; 3]))?;
//! assert_eq!(near_origin[0].radius, 2.0);
//! # Ok::<(), OctreeError>(())
//! ```
//!
//! ### Configuration
//!
//! [`OctreeConfig`] sets the maximum depth and how the octree reacts to points outside its root
//! cuboid ([`BoundsPolicy`]) or points that cannot be separated above the maximum depth
//! ([`DepthPolicy`]). By default out-of-domain inserts fail with [`OctreeError::OutOfBounds`] and
//! leaves at the maximum depth keep every point they receive.
//!
//! ```
//! use point_octree::prelude::*;
//!
//! let config = OctreeConfig::default().with_depth_policy(DepthPolicy::Reject);
//! let mut octree = Octree::<[f64; 3], f64>::with_config([0.0; 3], [1.0; 3], config);
//!
//! assert!(matches!(octree.insert([2.0, 0.0, 0.0]), Err(OctreeError::OutOfBounds { .. })));
//!
//! octree.insert([0.5; 3])?;
//! assert_eq!(
//!     octree.insert([0.5; 3]),
//!     Err(OctreeError::DepthLimitExceeded { max_depth: DEFAULT_MAX_DEPTH })
//! );
//! # Ok::<(), OctreeError>(())
//! ```
//!
//! Batches of queries can run on multiple threads with [rayon](https://github.com/rayon-rs/rayon)
//! by enabling the `parallel` feature.
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade and never installs a logger.

/// Configuration of an octree.
pub mod config;
/// Error type returned by fallible operations.
pub mod error;
/// The octree and its traversal.
pub mod octree;
/// Batch queries using multiple CPU threads.
#[cfg(feature = "parallel")]
pub mod parallel;
/// Traits locating items in space.
pub mod position;
/// Arena tree and space partitioning implementation.
pub mod tree;

pub use config::*;
pub use error::{OctreeError, Result};
pub use octree::*;
pub use position::{coordinates, IntoArray, Position};

/// Commonly used types, re-exported.
pub mod prelude {
    pub use crate::{
        config::{BoundsPolicy, DepthPolicy, OctreeConfig, DEFAULT_MAX_DEPTH},
        error::OctreeError,
        octree::{NodeView, Octree, QueryStats},
        position::{IntoArray, Position},
        tree::{BoundingBox, Cuboid},
    };
    pub use point_octree_derive::Position;
}
