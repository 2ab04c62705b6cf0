//! Vector algebra over [`Vec3`].
//!
//! Free functions, all pure and total. Degenerate inputs (zero vectors)
//! have defined results rather than failing: [`norm`] of a zero vector is
//! the zero vector, and so is any [`project`] onto a zero axis.

use crate::gp::Vec3;
use crate::precision;

/// Component-wise approximate equality within [`precision::EPSILON`].
#[inline]
pub fn eq(a: Vec3, b: Vec3) -> bool {
    precision::is_close(a.x(), b.x())
        && precision::is_close(a.y(), b.y())
        && precision::is_close(a.z(), b.z())
}

#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x() + b.x(), a.y() + b.y(), a.z() + b.z())
}

#[inline]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x() - b.x(), a.y() - b.y(), a.z() - b.z())
}

/// Scales `v` by `k`.
#[inline]
pub fn mul(v: Vec3, k: f64) -> Vec3 {
    Vec3::new(v.x() * k, v.y() * k, v.z() * k)
}

#[inline]
pub fn neg(v: Vec3) -> Vec3 {
    mul(v, -1.0)
}

#[inline]
pub fn pos(v: Vec3) -> Vec3 {
    mul(v, 1.0)
}

#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a.x() * b.x() + a.y() * b.y() + a.z() * b.z()
}

/// Euclidean length.
#[inline]
pub fn len(v: Vec3) -> f64 {
    dot(v, v).sqrt()
}

/// True if the squared length is approximately zero.
#[inline]
pub fn is_zero(v: Vec3) -> bool {
    precision::is_zero(dot(v, v))
}

/// True if the squared length is approximately one.
#[inline]
pub fn is_unit(v: Vec3) -> bool {
    precision::is_close(dot(v, v), 1.0)
}

/// Returns `v` scaled to unit length, or the zero vector if `v` has
/// approximately zero length.
pub fn norm(v: Vec3) -> Vec3 {
    let length = len(v);
    if precision::is_zero(length) {
        return Vec3::ZERO;
    }
    mul(v, 1.0 / length)
}

#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(
        a.y() * b.z() - a.z() * b.y(),
        a.z() * b.x() - a.x() * b.z(),
        a.x() * b.y() - a.y() * b.x(),
    )
}

/// Angle between `a` and `b` in radians, in `[0, PI]`.
///
/// The cosine is clamped to `[-1, 1]` before `acos`, so rounding error on
/// (anti)parallel inputs cannot produce NaN. If either vector is zero the
/// cosine is zero and the result is `PI / 2`.
pub fn angle(a: Vec3, b: Vec3) -> f64 {
    dot(norm(a), norm(b)).clamp(-1.0, 1.0).acos()
}

#[inline]
pub fn orthogonal(a: Vec3, b: Vec3) -> bool {
    precision::is_zero(dot(a, b))
}

#[inline]
pub fn collinear(a: Vec3, b: Vec3) -> bool {
    is_zero(cross(a, b))
}

/// Rotates `v` about `axis` by `angle` radians (right-hand rule).
///
/// Rodrigues' formula written out as the rotation matrix
/// `R = cI + s[k]x + t kk^T` with `k = norm(axis)`, `c = cos`, `s = sin`,
/// `t = 1 - c`. `axis` does not need to be unit length.
pub fn rotate(v: Vec3, axis: Vec3, angle: f64) -> Vec3 {
    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;
    let k = norm(axis);
    let (x, y, z) = (k.x(), k.y(), k.z());

    Vec3::new(
        v.x() * (x * x * t + c) + v.y() * (x * y * t - z * s) + v.z() * (x * z * t + y * s),
        v.x() * (y * x * t + z * s) + v.y() * (y * y * t + c) + v.z() * (y * z * t - x * s),
        v.x() * (z * x * t - y * s) + v.y() * (z * y * t + x * s) + v.z() * (z * z * t + c),
    )
}

/// Component of `v` along `axis`: `norm(axis) * dot(v, norm(axis))`.
/// Zero when `axis` is approximately zero.
pub fn project(v: Vec3, axis: Vec3) -> Vec3 {
    let unit = norm(axis);
    mul(unit, dot(v, unit))
}
