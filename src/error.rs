use core::fmt;

use thiserror::Error;

/// One of the three coordinate axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x-axis.
    X,
    /// The y-axis.
    Y,
    /// The z-axis.
    Z,
}

impl Axis {
    /// All axes in x, y, z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the lane index of the axis in a [`Point3`](crate::Point3).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
            Axis::Z => f.write_str("z"),
        }
    }
}

/// An error returned by [`compute_bounds`](crate::compute_bounds) and the
/// normalization pipeline.
///
/// Every error is reported before the point buffer is modified.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizeError {
    /// The point buffer contains no points, so it has no bounds.
    #[error("Cannot compute bounds of an empty point buffer.")]
    EmptyInput,
    /// A point has a NaN or infinite coordinate.
    #[error("Point {index} has a non-finite coordinate.")]
    NonFinitePoint {
        /// Index of the first offending point.
        index: usize,
    },
    /// The extent of the input overflows `f32`.
    #[error("The extent of the point buffer is not representable as a finite f32.")]
    NonFiniteExtent,
    /// All points share the same coordinate on this axis, and the configured
    /// policy rejects degenerate axes.
    #[error("The point buffer is flat along the {0}-axis.")]
    DegenerateAxis(Axis),
    /// Every point has the same coordinates, so uniform scaling has no
    /// extent to scale by.
    #[error("All points coincide; there is no extent to scale by.")]
    CoincidentPoints,
    /// The requested side length is zero, negative or not finite.
    #[error("Target side length must be finite and positive, got {0}.")]
    InvalidSideLength(f32),
}
