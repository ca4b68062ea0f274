use glam::BVec3A;
use tracing::{debug, warn};

use crate::{
    bounds::Bounds,
    vector::{scale_in_place, translate_in_place},
    NormalizeError, Point3,
};

/// How stage 2 of the pipeline maps the recentered points into `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scaling {
    /// Every axis is divided by its own extent, so each axis fills `[-1, 1]`.
    ///
    /// Non-cubic input is stretched into a cube.
    #[default]
    PerAxis,
    /// Every axis is divided by the largest extent, preserving aspect ratio.
    ///
    /// The longest axis fills `[-1, 1]`; shorter axes are centered on the origin.
    Uniform,
}

/// What to do with an axis along which every point has the same coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DegenerateAxisPolicy {
    /// Fail with [`NormalizeError::DegenerateAxis`] without modifying the points.
    #[default]
    Reject,
    /// Place every point at coordinate 0 on that axis.
    Collapse,
}

/// Parameters of [`normalize_with`] and [`recover_from_box`].
///
/// # Example
///
/// ```
/// use normbox::{DegenerateAxisPolicy, NormalizeConfig, Scaling};
///
/// let config = NormalizeConfig::new(10.0)
///     .with_scaling(Scaling::Uniform)
///     .with_degenerate_axis_policy(DegenerateAxisPolicy::Collapse);
/// assert_eq!(config.target_side_length, 10.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizeConfig {
    /// Side length of the output box. Must be finite and positive.
    pub target_side_length: f32,
    /// How axes are scaled relative to each other.
    pub scaling: Scaling,
    /// How axes with zero extent are treated.
    pub degenerate_axes: DegenerateAxisPolicy,
}

impl Default for NormalizeConfig {
    /// A box of side 2, spanning `[-1, 1]` on every axis.
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl NormalizeConfig {
    /// Creates a config with the given side length, per-axis scaling and
    /// rejection of degenerate axes.
    #[inline]
    pub fn new(target_side_length: f32) -> Self {
        Self {
            target_side_length,
            scaling: Scaling::PerAxis,
            degenerate_axes: DegenerateAxisPolicy::Reject,
        }
    }

    /// Sets the scaling mode.
    #[inline]
    #[must_use]
    pub fn with_scaling(mut self, scaling: Scaling) -> Self {
        self.scaling = scaling;
        self
    }

    /// Sets the degenerate axis policy.
    #[inline]
    #[must_use]
    pub fn with_degenerate_axis_policy(mut self, policy: DegenerateAxisPolicy) -> Self {
        self.degenerate_axes = policy;
        self
    }

    fn validate(&self) -> Result<(), NormalizeError> {
        let l = self.target_side_length;
        if l.is_finite() && l > 0.0 {
            Ok(())
        } else {
            Err(NormalizeError::InvalidSideLength(l))
        }
    }
}

/// Per-axis parameters of stage 2, derived from the extent of the input.
///
/// Stage 2 maps a recentered coordinate `r` in `[0, extent]` to
/// `2 * r / divisor - offset`. Collapsed lanes use a divisor of 1 and are
/// overwritten with 0 afterwards.
#[derive(Clone, Copy, Debug)]
struct AxisFit {
    divisor: Point3,
    offset: Point3,
    collapsed: BVec3A,
}

impl AxisFit {
    fn new(extent: Point3, scaling: Scaling) -> Self {
        let collapsed = extent.cmpeq(Point3::ZERO);
        let (divisor, offset) = match scaling {
            Scaling::PerAxis => (extent, Point3::ONE),
            Scaling::Uniform => {
                let largest = Point3::splat(extent.max_element());
                (largest, extent / largest)
            }
        };
        Self {
            divisor: Point3::select(collapsed, Point3::ONE, divisor),
            offset: Point3::select(collapsed, Point3::ZERO, offset),
            collapsed,
        }
    }

    /// The reason the fit is impossible without collapsing, if any.
    fn rejection(&self, scaling: Scaling, bounds: &Bounds) -> Option<NormalizeError> {
        match scaling {
            Scaling::PerAxis => bounds.first_degenerate_axis().map(NormalizeError::DegenerateAxis),
            // Only coincident points leave nothing to scale by.
            Scaling::Uniform => self.collapsed.all().then_some(NormalizeError::CoincidentPoints),
        }
    }
}

/// Normalizes `points` in place into an origin-centered box with side
/// `target_side_length` on every axis.
///
/// Each axis is stretched independently, and axes with zero extent are
/// rejected. See [`normalize_with`] for the configurable version.
///
/// Returns the bounds of the points before normalization.
///
/// # Errors
///
/// See [`normalize_with`]. On error the points are left unchanged.
///
/// # Example
///
/// ```
/// use normbox::{normalize_to_box, Point3};
///
/// let mut points = [Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 4.0, 6.0)];
/// normalize_to_box(2.0, &mut points).unwrap();
/// assert_eq!(points, [Point3::splat(-1.0), Point3::splat(1.0)]);
/// ```
#[inline]
pub fn normalize_to_box(
    target_side_length: f32,
    points: &mut [Point3],
) -> Result<Bounds, NormalizeError> {
    normalize_with(points, &NormalizeConfig::new(target_side_length))
}

/// Normalizes `points` in place according to `config`.
///
/// The points go through three passes, and the bounds are recomputed before
/// each one:
///
/// 1. Shift so that the minimum corner of the bounds sits at the origin.
/// 2. Map every axis into `[-1, 1]` (see [`Scaling`]).
/// 3. Scale by `target_side_length / 2`.
///
/// Returns the bounds of the points before normalization, which
/// [`recover_from_box`] uses to undo the transform.
///
/// Unlike [`normalize_to_box`], the points come first and the side length is
/// read from `config`.
///
/// # Errors
///
/// Nothing is written to `points` if any of these is returned:
///
/// - [`NormalizeError::InvalidSideLength`] if the side length is not finite and positive.
/// - [`NormalizeError::EmptyInput`] if `points` is empty.
/// - [`NormalizeError::NonFinitePoint`] if a coordinate is NaN or infinite.
/// - [`NormalizeError::NonFiniteExtent`] if the extent overflows `f32`.
/// - [`NormalizeError::DegenerateAxis`] if an axis has zero extent, the policy is
///   [`DegenerateAxisPolicy::Reject`] and scaling is [`Scaling::PerAxis`].
/// - [`NormalizeError::CoincidentPoints`] if all points coincide, the policy is
///   [`DegenerateAxisPolicy::Reject`] and scaling is [`Scaling::Uniform`].
pub fn normalize_with(
    points: &mut [Point3],
    config: &NormalizeConfig,
) -> Result<Bounds, NormalizeError> {
    config.validate()?;

    let original = Bounds::from_points(points)?;
    let extent = original.extent();
    if !extent.is_finite() {
        return Err(NormalizeError::NonFiniteExtent);
    }

    let fit = AxisFit::new(extent, config.scaling);
    if fit.collapsed.any() {
        match config.degenerate_axes {
            DegenerateAxisPolicy::Reject => {
                if let Some(err) = fit.rejection(config.scaling, &original) {
                    return Err(err);
                }
            }
            DegenerateAxisPolicy::Collapse => {
                warn!(
                    axes = ?fit.collapsed,
                    "Collapsing flat axes to the center of the box"
                );
            }
        }
    }

    debug!(
        points = points.len(),
        min = ?original.min,
        max = ?original.max,
        "Normalizing points"
    );

    shift_to_origin(points, &original);
    let bounds = recompute_bounds(points);

    fit_unit_range(points, &bounds, config.scaling);
    let bounds = recompute_bounds(points);
    debug!(min = ?bounds.min, max = ?bounds.max, "Fitted points into unit range");

    scale_to_side(points, config.target_side_length);

    Ok(original)
}

/// Maps points produced by [`normalize_with`] back into the coordinate frame
/// described by `original`, the bounds it returned.
///
/// `config` must be the one used for normalization. Axes collapsed by
/// [`DegenerateAxisPolicy::Collapse`] recover to their original constant.
///
/// # Errors
///
/// [`NormalizeError::InvalidSideLength`] if the side length in `config` is not
/// finite and positive. The points are left unchanged in that case.
pub fn recover_from_box(
    points: &mut [Point3],
    original: &Bounds,
    config: &NormalizeConfig,
) -> Result<(), NormalizeError> {
    config.validate()?;

    let fit = AxisFit::new(original.extent(), config.scaling);
    let half_side = config.target_side_length / 2.0;

    for p in points.iter_mut() {
        let unit = *p / half_side;
        let recentered = (unit + fit.offset) * fit.divisor * 0.5;
        *p = Point3::select(fit.collapsed, Point3::ZERO, recentered) + original.min;
    }

    Ok(())
}

/// Bounds of points that already passed [`Bounds::from_points`]. The stages
/// keep them non-empty and finite, so there is nothing left to check.
fn recompute_bounds(points: &[Point3]) -> Bounds {
    let mut bounds = Bounds::from_point(points[0]);
    for p in &points[1..] {
        bounds.extend(*p);
    }
    bounds
}

/// Moves the minimum corner of `bounds` to the origin.
fn shift_to_origin(points: &mut [Point3], bounds: &Bounds) {
    let min = bounds.min;
    for p in points.iter_mut() {
        translate_in_place(p, -min.x, -min.y, -min.z);
    }
}

/// Maps recentered points (minimum corner at the origin) into `[-1, 1]`.
fn fit_unit_range(points: &mut [Point3], bounds: &Bounds, scaling: Scaling) {
    // After recentering the minimum is zero, so the maximum is the extent.
    let fit = AxisFit::new(bounds.max, scaling);

    for p in points.iter_mut() {
        *p /= fit.divisor;
        scale_in_place(p, 2.0);
        translate_in_place(p, -fit.offset.x, -fit.offset.y, -fit.offset.z);
        *p = Point3::select(fit.collapsed, Point3::ZERO, *p);
    }
}

/// Scales points in `[-1, 1]` to `[-side / 2, side / 2]`.
fn scale_to_side(points: &mut [Point3], side: f32) {
    let half_side = side / 2.0;
    for p in points.iter_mut() {
        scale_in_place(p, half_side);
    }
}
