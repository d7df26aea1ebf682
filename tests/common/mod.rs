//! Shared test utilities for vector2d integration tests.
//!
//! Tolerance-based scalar and vector assertions used by every test crate
//! via `mod common;`.

#![allow(dead_code)]

use vector2d::Vector2D;

/// Default tolerance for floating-point comparisons.
pub const TOL: f64 = 1e-9;

/// Check approximate equality of two f64 values within `tol`.
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Assert two f64 values are approximately equal.
pub fn assert_f64_eq(a: f64, b: f64, tol: f64) {
    assert!(
        approx_eq(a, b, tol),
        "f64 mismatch: {a} vs {b} (delta={}, tol={tol})",
        (a - b).abs()
    );
}

/// Assert two Vector2D values are approximately equal component-wise.
pub fn assert_vec2_eq(a: &Vector2D, b: &Vector2D, tol: f64) {
    assert!(
        approx_eq(a.x, b.x, tol) && approx_eq(a.y, b.y, tol),
        "Vector2D mismatch: {a} vs {b} tol={tol}"
    );
}

/// Tolerance scaled to the magnitude being compared.
pub fn scaled_tol(magnitude: f64) -> f64 {
    TOL * magnitude.abs().max(1.0)
}
