//! # vector2d
//!
//! Two dimensional cartesian vectors as plain `f64` values.
//!
//! [`Vector2D`] carries an `(x, y)` pair and a fixed set of pure geometric
//! operations: length, angle, normalization, truncation, dot product, angle
//! between vectors, perpendicular, distance, and arithmetic with scalars and
//! other vectors. Every operation returns a new value.
//!
//! ## Quick Start
//!
//! ```rust
//! use vector2d::Vector2D;
//! use std::f64::consts::PI;
//!
//! let v = Vector2D::new(3.0, 4.0);
//! assert_eq!(v.length(), 5.0);
//!
//! let capped = v.truncated(2.0);
//! assert!((capped.length() - 2.0).abs() < 1e-9);
//!
//! let a = Vector2D::new(1.0, 0.0).angle_between(&Vector2D::new(-1.0, 0.0));
//! assert!((a - PI).abs() < 1e-9);
//! ```
//!
//! ## Degenerate input
//!
//! Operations never fail. Division by zero yields infinities or `NaN`, while
//! [`Vector2D::normalized`] maps the zero vector to `(1, 0)`. The checked
//! companions ([`Vector2D::checked_divide`], [`Vector2D::try_normalized`],
//! [`Vector2D::ensure_finite`]) report these cases as [`VectorError`].

#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod types;

pub use error::{Result, VectorError};
pub use types::{Vector2D, DEFAULT_TOLERANCE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports() {
        let v = Vector2D::new(6.0, 8.0);
        let r: Result<Vector2D> = v.checked_divide(0.0);
        assert_eq!(r, Err(VectorError::DivisionByZero));
        assert!(v.normalized().approx_eq(&Vector2D::new(0.6, 0.8), DEFAULT_TOLERANCE));
    }
}
