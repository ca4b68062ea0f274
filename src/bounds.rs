use crate::{Axis, NormalizeError, Point3};

/// The axis-aligned bounding box of a point buffer.
///
/// A `Bounds` is a snapshot: it does not follow later changes to the points it
/// was computed from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// The minimum corner, `(xmin, ymin, zmin)`.
    pub min: Point3,
    /// The maximum corner, `(xmax, ymax, zmax)`.
    pub max: Point3,
}

impl Bounds {
    /// Creates new bounds with the given corners.
    #[inline]
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Creates bounds containing only `point`.
    #[inline]
    pub fn from_point(point: Point3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Computes the bounds of `points`. Same as [`compute_bounds`].
    ///
    /// # Errors
    ///
    /// - [`NormalizeError::EmptyInput`] if `points` is empty.
    /// - [`NormalizeError::NonFinitePoint`] if any coordinate is NaN or infinite.
    pub fn from_points(points: &[Point3]) -> Result<Self, NormalizeError> {
        let (first, rest) = points.split_first().ok_or(NormalizeError::EmptyInput)?;
        if !first.is_finite() {
            return Err(NormalizeError::NonFinitePoint { index: 0 });
        }

        let mut bounds = Bounds::from_point(*first);
        for (i, point) in rest.iter().enumerate() {
            if !point.is_finite() {
                return Err(NormalizeError::NonFinitePoint { index: i + 1 });
            }
            bounds.extend(*point);
        }
        Ok(bounds)
    }

    /// Extends the bounds to include the given point.
    #[inline]
    pub fn extend(&mut self, point: Point3) -> &mut Self {
        *self = self.union(&Self::from_point(point));
        self
    }

    /// Returns the smallest bounds containing both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Returns `max - min` on every axis.
    #[inline]
    pub fn extent(&self) -> Point3 {
        self.max - self.min
    }

    /// Returns the center point of the box.
    #[inline]
    pub fn center(&self) -> Point3 {
        (self.max + self.min) * 0.5
    }

    /// Returns `true` if `point` lies inside the box or on its boundary.
    #[inline]
    pub fn contains(&self, point: Point3) -> bool {
        (point.cmpge(self.min) & point.cmple(self.max)).all()
    }

    /// Returns `(min, max)` along `axis`.
    #[inline]
    pub fn range(&self, axis: Axis) -> (f32, f32) {
        (self.min[axis.index()], self.max[axis.index()])
    }

    /// Returns `true` if the box has zero extent along `axis`.
    #[inline]
    pub fn is_degenerate(&self, axis: Axis) -> bool {
        let (min, max) = self.range(axis);
        min == max
    }

    /// Returns the first axis, in x, y, z order, with zero extent.
    pub fn first_degenerate_axis(&self) -> Option<Axis> {
        Axis::ALL.into_iter().find(|&axis| self.is_degenerate(axis))
    }

    /// Minimum x coordinate.
    #[inline]
    pub fn xmin(&self) -> f32 {
        self.min.x
    }

    /// Maximum x coordinate.
    #[inline]
    pub fn xmax(&self) -> f32 {
        self.max.x
    }

    /// Minimum y coordinate.
    #[inline]
    pub fn ymin(&self) -> f32 {
        self.min.y
    }

    /// Maximum y coordinate.
    #[inline]
    pub fn ymax(&self) -> f32 {
        self.max.y
    }

    /// Minimum z coordinate.
    #[inline]
    pub fn zmin(&self) -> f32 {
        self.min.z
    }

    /// Maximum z coordinate.
    #[inline]
    pub fn zmax(&self) -> f32 {
        self.max.z
    }
}

/// Computes the axis-aligned bounds of `points`.
///
/// Each axis is scanned independently, so the minimum x and the minimum y may
/// come from different points.
///
/// # Errors
///
/// - [`NormalizeError::EmptyInput`] if `points` is empty.
/// - [`NormalizeError::NonFinitePoint`] if any coordinate is NaN or infinite.
#[inline]
pub fn compute_bounds(points: &[Point3]) -> Result<Bounds, NormalizeError> {
    Bounds::from_points(points)
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn empty_points() {
        assert_eq!(compute_bounds(&[]), Err(NormalizeError::EmptyInput));
    }

    #[test]
    fn single_point() {
        let p = Point3::new(1.0, -2.0, 3.0);
        let bounds = compute_bounds(&[p]).unwrap();
        assert_eq!(bounds, Bounds::from_point(p));
        assert_eq!(bounds.extent(), Point3::ZERO);
        assert_eq!(bounds.first_degenerate_axis(), Some(Axis::X));
    }

    #[test]
    fn axes_are_independent() {
        let points = [
            Point3::new(-1.0, 5.0, 0.0),
            Point3::new(4.0, -3.0, 2.0),
            Point3::new(0.0, 0.0, -7.0),
        ];
        let bounds = compute_bounds(&points).unwrap();
        assert_eq!(bounds.min, Point3::new(-1.0, -3.0, -7.0));
        assert_eq!(bounds.max, Point3::new(4.0, 5.0, 2.0));
        assert_eq!(
            [bounds.xmin(), bounds.xmax(), bounds.ymin(), bounds.ymax(), bounds.zmin(), bounds.zmax()],
            [-1.0, 4.0, -3.0, 5.0, -7.0, 2.0]
        );
        assert_eq!(bounds.range(Axis::Y), (-3.0, 5.0));
        assert_eq!(bounds.center(), Point3::new(1.5, 1.0, -2.5));
        assert_eq!(bounds.extent(), Point3::new(5.0, 8.0, 9.0));
        assert_eq!(bounds.first_degenerate_axis(), None);
    }

    #[test]
    fn non_finite_points() {
        let points = [Point3::ONE, Point3::new(0.0, f32::NAN, 0.0)];
        assert_eq!(
            compute_bounds(&points),
            Err(NormalizeError::NonFinitePoint { index: 1 })
        );

        let points = [Point3::splat(f32::INFINITY), Point3::ONE];
        assert_eq!(
            compute_bounds(&points),
            Err(NormalizeError::NonFinitePoint { index: 0 })
        );
    }

    #[test]
    fn flat_axis() {
        let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 5.0, 5.0)];
        let bounds = compute_bounds(&points).unwrap();
        assert!(bounds.is_degenerate(Axis::X));
        assert!(!bounds.is_degenerate(Axis::Y));
        assert_eq!(bounds.first_degenerate_axis(), Some(Axis::X));
        assert!(bounds.is_degenerate(Axis::X) && !bounds.is_degenerate(Axis::Z));
    }

    #[test]
    fn union_and_contains() {
        let a = Bounds::new(Point3::ZERO, Point3::ONE);
        let b = Bounds::new(Point3::splat(-1.0), Point3::new(0.5, 0.5, 2.0));
        let u = a.union(&b);
        assert_eq!(u, Bounds::new(Point3::splat(-1.0), Point3::new(1.0, 1.0, 2.0)));
        assert!(u.contains(Point3::ONE));
        assert!(u.contains(Point3::splat(-1.0)));
        assert!(!a.contains(Point3::new(0.5, 0.5, 1.5)));
    }

    #[test]
    fn random_cloud_is_enclosed() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let points: Vec<Point3> = (0..500)
            .map(|_| {
                Point3::new(
                    rng.random_range(-50.0..50.0),
                    rng.random_range(-1.0..1.0),
                    rng.random_range(100.0..300.0),
                )
            })
            .collect();
        let bounds = compute_bounds(&points).unwrap();

        assert!(points.iter().all(|&p| bounds.contains(p)));
        for axis in Axis::ALL {
            let (min, max) = bounds.range(axis);
            let i = axis.index();
            assert!(points.iter().any(|p| p[i] == min));
            assert!(points.iter().any(|p| p[i] == max));
        }
    }
}
