//! Line in 3D space.
//!
//! An infinite line through an anchor point along a direction vector:
//! `{ anchor + t * direction : t in R }`.

use serde::{Deserialize, Serialize};

use super::Vec3;
use crate::algebra;
use crate::precision::{self, Tolerance};
use crate::{GeomError, Result};

/// An infinite line in 3D space.
///
/// The direction does not have to be unit length, but it must not be
/// zero. [`Line::new`] does not check this; use [`Line::try_new`] for
/// untrusted input.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Line {
    anchor: Vec3,
    direction: Vec3,
}

impl Line {
    /// The X axis.
    pub const OX: Line = Line::new(Vec3::ZERO, Vec3::X_UNIT);
    /// The Y axis.
    pub const OY: Line = Line::new(Vec3::ZERO, Vec3::Y_UNIT);
    /// The Z axis.
    pub const OZ: Line = Line::new(Vec3::ZERO, Vec3::Z_UNIT);

    /// Creates a line through `anchor` along `direction`.
    #[inline]
    pub const fn new(anchor: Vec3, direction: Vec3) -> Self {
        Self { anchor, direction }
    }

    /// Creates a line, rejecting an approximately zero direction.
    pub fn try_new(anchor: Vec3, direction: Vec3) -> Result<Self> {
        if algebra::is_zero(direction) {
            return Err(GeomError::DegenerateDirection);
        }
        Ok(Self::new(anchor, direction))
    }

    /// Creates the line through `a` and `b`, anchored at `a`.
    pub fn from_points(a: Vec3, b: Vec3) -> Result<Self> {
        Self::try_new(a, algebra::sub(b, a))
    }

    #[inline]
    pub const fn anchor(&self) -> Vec3 {
        self.anchor
    }

    #[inline]
    pub const fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Returns `anchor + t * direction`.
    #[inline]
    pub fn point_at(&self, t: f64) -> Vec3 {
        algebra::add(self.anchor, algebra::mul(self.direction, t))
    }

    /// Returns true if `p` is within [`precision::EPSILON`] of the line,
    /// matching [`super::Plane::contains`].
    pub fn contains(&self, p: Vec3) -> bool {
        let offset = algebra::sub(p, self.anchor);
        let unit = algebra::norm(self.direction);
        precision::is_zero(algebra::len(algebra::cross(offset, unit)))
    }

    /// Equality of anchor and direction within a caller-supplied tolerance.
    ///
    /// This compares representations, not point sets: two lines covering
    /// the same points with different anchors are not equal.
    pub fn is_equal(&self, other: &Line, tolerance: &Tolerance) -> bool {
        self.anchor.is_equal(&other.anchor, tolerance)
            && self.direction.is_equal(&other.direction, tolerance)
    }
}

/// Approximate equality of anchor and direction.
#[inline]
pub fn eq_line(a: &Line, b: &Line) -> bool {
    algebra::eq(a.anchor, b.anchor) && algebra::eq(a.direction, b.direction)
}

impl PartialEq for Line {
    #[inline]
    fn eq(&self, other: &Line) -> bool {
        eq_line(self, other)
    }
}
