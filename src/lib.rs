//! Oriented bounding boxes (OBBs) for spatial filtering of point-cloud tiles.
//!
//! An [`Obb`] is built from the `{center, halfSize, quaternion}` description
//! carried in tile metadata, can have its center reprojected with a
//! [`CoordinateTransform`], and can be tested for overlap against a query
//! box with [`Obb::intersect`].
//!
//! ```
//! use obb_clip::Obb;
//!
//! let tile: Obb = r#"{"center": [0, 0, 0], "halfSize": [2, 1, 1.5], "quaternion": [0, 0, 0, 1]}"#
//!     .parse()
//!     .unwrap();
//! let query: Obb = r#"{"center": [3, 0, 0], "halfSize": [1.5, 1, 1], "quaternion": [0, 0, 0, 1]}"#
//!     .parse()
//!     .unwrap();
//! assert!(tile.intersect(&query));
//! ```

mod bounds;
mod description;
mod error;
mod intersect;
mod obb;
mod transform;
mod types;

pub use crate::{
    description::ObbDescription,
    error::ValidationError,
    obb::Obb,
    transform::CoordinateTransform,
    types::{Segment, CORNER_COUNT, SEGMENT_COUNT},
};

use nalgebra as na;

/// Absolute slack allowed when deciding whether a point lies on or inside a
/// box or face.
pub const CONTAINMENT_TOLERANCE: f64 = 1e-9;

/// Rotates `vector` by `rotation`, normalizing the quaternion first.
pub fn rotate(vector: &na::Vector3<f64>, rotation: &na::Quaternion<f64>) -> na::Vector3<f64> {
    na::UnitQuaternion::new_normalize(*rotation).transform_vector(vector)
}
