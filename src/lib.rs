//! # normbox
//!
//! Fits mesh vertex positions into a canonical, origin-centered bounding box
//! before they are handed to a renderer.
//!
//! The pipeline works in place on a caller-owned slice of points and runs in
//! three passes, recomputing the bounds before each one:
//!
//! 1. Recenter the points so that the minimum corner of their bounds is the origin.
//! 2. Map every axis into `[-1, 1]`.
//! 3. Scale to the requested side length.
//!
//! By default each axis is stretched independently, so a flat box becomes a
//! cube; [`Scaling::Uniform`] keeps the aspect ratio instead. Axes along which
//! every point has the same coordinate are rejected unless
//! [`DegenerateAxisPolicy::Collapse`] is set.
//!
//! With the `obj` feature (on by default), [`read_obj_points`] pulls vertex
//! positions out of Wavefront OBJ text.
//!
//! ## Example
//!
//! ```
//! use normbox::{compute_bounds, normalize_to_box, Point3};
//!
//! let mut points = vec![
//!     Point3::new(10.0, -4.0, 0.0),
//!     Point3::new(12.0, 4.0, 3.0),
//!     Point3::new(11.0, 0.0, 1.5),
//! ];
//!
//! // Fit the points into a box with side length 2, centered on the origin.
//! let original = normalize_to_box(2.0, &mut points).unwrap();
//! assert_eq!(original.min, Point3::new(10.0, -4.0, 0.0));
//!
//! let bounds = compute_bounds(&points).unwrap();
//! assert_eq!(bounds.min, Point3::splat(-1.0));
//! assert_eq!(bounds.max, Point3::splat(1.0));
//! assert_eq!(points[2], Point3::ZERO);
//! ```

#![warn(missing_docs)]

mod bounds;
mod error;
mod normalize;
#[cfg(feature = "obj")]
mod obj;
pub mod vector;

pub use bounds::{compute_bounds, Bounds};
pub use error::{Axis, NormalizeError};
pub use normalize::{
    normalize_to_box, normalize_with, recover_from_box, DegenerateAxisPolicy, NormalizeConfig,
    Scaling,
};
#[cfg(feature = "obj")]
pub use obj::{read_normalized_obj, read_obj_points, ObjError};

/// A point or vector in 3D space.
pub type Point3 = glam::Vec3A;
