//! 3D vector.
//!
//! Plain value type for points and free vectors alike. The arithmetic
//! lives in [`crate::algebra`]; the methods and operators here delegate
//! to it.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Index, Mul, Neg, Sub, SubAssign};

use crate::algebra;
use crate::precision::{self, Tolerance};

/// A vector (or point) in 3D cartesian space.
///
/// `==` is approximate: components are compared within
/// [`precision::EPSILON`].
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Vec3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vec3 {
    /// The zero vector (0, 0, 0).
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    /// The all-ones vector (1, 1, 1).
    pub const UNIT: Vec3 = Vec3::new(1.0, 1.0, 1.0);
    pub const X_UNIT: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y_UNIT: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z_UNIT: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    /// Creates a vector from coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the X coordinate.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Y coordinate.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the Z coordinate.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Returns all three coordinates as a tuple.
    #[inline]
    pub const fn coords(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Returns the magnitude (length).
    #[inline]
    pub fn magnitude(&self) -> f64 {
        algebra::len(*self)
    }

    #[inline]
    pub fn dot(&self, other: &Vec3) -> f64 {
        algebra::dot(*self, *other)
    }

    #[inline]
    pub fn cross(&self, other: &Vec3) -> Vec3 {
        algebra::cross(*self, *other)
    }

    /// Returns the unit vector, or [`Vec3::ZERO`] for a zero-length vector.
    #[inline]
    pub fn normalized(&self) -> Vec3 {
        algebra::norm(*self)
    }

    /// Returns angle to other vector (radians, 0 to PI).
    #[inline]
    pub fn angle(&self, other: &Vec3) -> f64 {
        algebra::angle(*self, *other)
    }

    /// Returns this vector rotated about `axis` by `angle` radians.
    #[inline]
    pub fn rotated(&self, axis: &Vec3, angle: f64) -> Vec3 {
        algebra::rotate(*self, *axis, angle)
    }

    /// Returns the component of this vector along `axis`.
    #[inline]
    pub fn projected(&self, axis: &Vec3) -> Vec3 {
        algebra::project(*self, *axis)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        algebra::is_zero(*self)
    }

    #[inline]
    pub fn is_unit(&self) -> bool {
        algebra::is_unit(*self)
    }

    #[inline]
    pub fn is_orthogonal(&self, other: &Vec3) -> bool {
        algebra::orthogonal(*self, *other)
    }

    #[inline]
    pub fn is_collinear(&self, other: &Vec3) -> bool {
        algebra::collinear(*self, *other)
    }

    /// Component-wise equality within a caller-supplied tolerance.
    pub fn is_equal(&self, other: &Vec3, tolerance: &Tolerance) -> bool {
        tolerance.is_close(self.x, other.x)
            && tolerance.is_close(self.y, other.y)
            && tolerance.is_close(self.z, other.z)
    }
}

impl PartialEq for Vec3 {
    #[inline]
    fn eq(&self, other: &Vec3) -> bool {
        algebra::eq(*self, *other)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, other: Vec3) -> Vec3 {
        algebra::add(self, other)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, other: Vec3) {
        *self = algebra::add(*self, other);
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, other: Vec3) -> Vec3 {
        algebra::sub(self, other)
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, other: Vec3) {
        *self = algebra::sub(*self, other);
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, scalar: f64) -> Vec3 {
        algebra::mul(self, scalar)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        algebra::mul(v, self)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        algebra::neg(self)
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", index),
        }
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        precision::EPSILON
    }

    fn abs_diff_eq(&self, other: &Vec3, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vec3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Vec3, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(arr: [f64; 3]) -> Self {
        Vec3::new(arr[0], arr[1], arr[2])
    }
}

impl From<(f64, f64, f64)> for Vec3 {
    #[inline]
    fn from(tuple: (f64, f64, f64)) -> Self {
        Vec3::new(tuple.0, tuple.1, tuple.2)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

// nalgebra interop

impl From<nalgebra::Vector3<f64>> for Vec3 {
    #[inline]
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for nalgebra::Vector3<f64> {
    #[inline]
    fn from(v: Vec3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Point3<f64>> for Vec3 {
    #[inline]
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

impl From<Vec3> for nalgebra::Point3<f64> {
    #[inline]
    fn from(v: Vec3) -> Self {
        nalgebra::Point3::new(v.x, v.y, v.z)
    }
}
