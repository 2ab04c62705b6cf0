//! Plane in 3D space.
//!
//! Stored as a normal vector and a signed distance from the origin,
//! measured along the *normalized* normal:
//! `{ x : dot(norm(normal), x) = distance }`.
//!
//! The normal is never assumed to be unit length. Every consumer of
//! `distance` normalizes the normal first.

use serde::{Deserialize, Serialize};

use super::Vec3;
use crate::algebra;
use crate::precision::{self, Tolerance};
use crate::{GeomError, Result};

/// An infinite plane in 3D space.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Plane {
    normal: Vec3,
    distance: f64,
}

impl Plane {
    /// The OXY plane (z = 0).
    pub const XOY: Plane = Plane::new(Vec3::Z_UNIT, 0.0);
    /// The OYZ plane (x = 0).
    pub const YOZ: Plane = Plane::new(Vec3::X_UNIT, 0.0);
    /// The OZX plane (y = 0).
    pub const ZOX: Plane = Plane::new(Vec3::Y_UNIT, 0.0);

    /// Creates a plane from a normal and a signed offset along the
    /// normalized normal. The normal must not be zero.
    #[inline]
    pub const fn new(normal: Vec3, distance: f64) -> Self {
        Self { normal, distance }
    }

    /// Creates a plane, rejecting an approximately zero normal.
    pub fn try_new(normal: Vec3, distance: f64) -> Result<Self> {
        if algebra::is_zero(normal) {
            return Err(GeomError::DegenerateNormal);
        }
        Ok(Self::new(normal, distance))
    }

    /// Creates the plane through `point` orthogonal to `normal`.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Result<Self> {
        if algebra::is_zero(normal) {
            return Err(GeomError::DegenerateNormal);
        }
        let distance = algebra::dot(point, algebra::norm(normal));
        Ok(Self::new(normal, distance))
    }

    #[inline]
    pub const fn normal(&self) -> Vec3 {
        self.normal
    }

    #[inline]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// The point of the plane closest to the origin.
    #[inline]
    pub fn point(&self) -> Vec3 {
        algebra::mul(algebra::norm(self.normal), self.distance)
    }

    /// Signed distance from the plane to `p`, positive on the side the
    /// normal points to.
    #[inline]
    pub fn signed_distance(&self, p: Vec3) -> f64 {
        algebra::dot(p, algebra::norm(self.normal)) - self.distance
    }

    /// Returns true if `p` lies in the plane.
    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        precision::is_zero(self.signed_distance(p))
    }

    /// Equality of normal and distance within a caller-supplied tolerance.
    pub fn is_equal(&self, other: &Plane, tolerance: &Tolerance) -> bool {
        self.normal.is_equal(&other.normal, tolerance)
            && tolerance.is_close(self.distance, other.distance)
    }
}

/// Approximate equality of normal and distance.
///
/// Representational, like [`super::eq_line`]: `(n, d)` and `(2n, d)`
/// describe the same plane but are not equal.
#[inline]
pub fn eq_plane(a: &Plane, b: &Plane) -> bool {
    algebra::eq(a.normal, b.normal) && precision::is_close(a.distance, b.distance)
}

impl PartialEq for Plane {
    #[inline]
    fn eq(&self, other: &Plane) -> bool {
        eq_plane(self, other)
    }
}
