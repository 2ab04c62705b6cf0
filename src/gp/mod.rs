//! Geometric primitives package.
//!
//! The three value types everything else is built from. All are `Copy`,
//! immutable once built, and compare approximately under `==`.

mod vec;
mod lin;
mod pln;

pub use vec::Vec3;
pub use lin::{eq_line, Line};
pub use pln::{eq_plane, Plane};
