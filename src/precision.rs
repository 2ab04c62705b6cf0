//! Precision constants and tolerance configuration.
//!
//! Every "approximately equal" test in the crate goes through this module.
//! Comparisons are absolute: two reals are close when `|a - b| < epsilon`.

use serde::{Deserialize, Serialize};

use crate::{GeomError, Result};

/// Absolute tolerance for all geometric comparisons.
/// Value: 1.0e-8
pub const EPSILON: f64 = 1.0e-8;

/// Returns true if `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true if `value` is within [`EPSILON`] of zero.
#[inline]
pub fn is_zero(value: f64) -> bool {
    is_close(value, 0.0)
}

/// A validated comparison tolerance.
///
/// Deserializes from `{"epsilon": 1e-6}`; a missing field falls back to
/// [`EPSILON`]. Deserialization goes through [`Tolerance::new`], so a
/// non-positive or non-finite value is rejected there.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTolerance")]
pub struct Tolerance {
    epsilon: f64,
}

/// Unchecked wire form of [`Tolerance`].
#[derive(Deserialize)]
struct RawTolerance {
    #[serde(default = "default_epsilon")]
    epsilon: f64,
}

fn default_epsilon() -> f64 {
    EPSILON
}

impl TryFrom<RawTolerance> for Tolerance {
    type Error = GeomError;

    fn try_from(raw: RawTolerance) -> Result<Self> {
        Tolerance::new(raw.epsilon)
    }
}

impl Tolerance {
    /// Creates a tolerance. Fails unless `epsilon` is finite and strictly
    /// positive.
    pub fn new(epsilon: f64) -> Result<Self> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(GeomError::InvalidTolerance(epsilon));
        }
        Ok(Self { epsilon })
    }

    #[inline]
    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[inline]
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.epsilon
    }

    #[inline]
    pub fn is_zero(&self, value: f64) -> bool {
        self.is_close(value, 0.0)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { epsilon: EPSILON }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_values() {
        assert_eq!(EPSILON, 1.0e-8);
        assert_eq!(Tolerance::default().epsilon(), EPSILON);
    }

    #[test]
    fn test_is_close() {
        assert!(is_close(1.0, 1.0 + 1e-9));
        assert!(!is_close(1.0, 1.0 + 1e-7));
        assert!(is_zero(-5e-9));
        assert!(!is_zero(2e-8));
    }

    #[test]
    fn test_tolerance_rejects_bad_values() {
        assert!(Tolerance::new(0.0).is_err());
        assert!(Tolerance::new(-1e-3).is_err());
        assert!(Tolerance::new(f64::NAN).is_err());
        assert!(Tolerance::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_custom_tolerance() {
        let tol = Tolerance::new(1e-3).unwrap();
        assert!(tol.is_close(2.0, 2.0005));
        assert!(!tol.is_close(2.0, 2.002));
        assert!(tol.is_zero(1e-4));
    }
}
