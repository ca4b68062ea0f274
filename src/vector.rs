//! Arithmetic on single points.
//!
//! These are thin, allocation-free helpers over [`Point3`]. The in-place
//! variants take `&mut Point3`, so there is no "missing point" case to check.

use tracing::trace;

use crate::Point3;

/// Returns the component-wise sum of `a` and `b`.
#[inline]
pub fn add(a: Point3, b: Point3) -> Point3 {
    a + b
}

/// Returns `v` with every component multiplied by `k`.
#[inline]
pub fn scale(v: Point3, k: f32) -> Point3 {
    v * k
}

/// Multiplies every component of `v` by `k`.
#[inline]
pub fn scale_in_place(v: &mut Point3, k: f32) {
    *v *= k;
}

/// Adds `dx`, `dy` and `dz` to the respective components of `v`.
#[inline]
pub fn translate_in_place(v: &mut Point3, dx: f32, dy: f32, dz: f32) {
    *v += Point3::new(dx, dy, dz);
}

/// Returns the Euclidean length of `v`.
#[inline]
pub fn magnitude(v: Point3) -> f32 {
    (v.x * v.x + v.y * v.y + v.z * v.z).sqrt()
}

/// Returns `v` divided by its [`magnitude`].
///
/// The result is undefined for a zero vector: IEEE division makes every
/// component NaN. Use [`try_normalize`] when the input may be zero.
#[inline]
pub fn normalize(v: Point3) -> Point3 {
    v / magnitude(v)
}

/// Returns `v` divided by its [`magnitude`], or `None` if the result is not
/// finite (zero, tiny or non-finite input).
#[inline]
pub fn try_normalize(v: Point3) -> Option<Point3> {
    let n = normalize(v);
    n.is_finite().then_some(n)
}

/// Returns the cross product `a × b`.
#[inline]
pub fn cross(a: Point3, b: Point3) -> Point3 {
    Point3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Returns the dot product of `a` and `b`.
#[inline]
pub fn dot(a: Point3, b: Point3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Returns `true` if every component of `a` equals the matching component of
/// `b` exactly.
///
/// No tolerance is applied, so values that differ only by rounding compare
/// unequal. `0.0` and `-0.0` compare equal; NaN never does.
pub fn equals(a: Point3, b: Point3) -> bool {
    trace!(?a, ?b, "Comparing points");
    a.x == b.x && a.y == b.y && a.z == b.z
}
