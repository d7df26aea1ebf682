//! Two dimensional cartesian vector

use crate::error::{Result, VectorError};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use tracing::{debug, trace};

/// Tolerance used by the crate's approximate comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// A point or direction in the plane.
///
/// `Vector2D` is a plain `Copy` value: every transformation returns a new
/// vector and leaves the receiver untouched. Any pair of `f64` values is a
/// legal vector, including infinities and `NaN`.
///
/// Nothing here fails. Degenerate inputs produce degenerate floating point
/// results, with one exception: [`normalized`](Vector2D::normalized) maps the
/// zero vector to [`UNIT_X`](Vector2D::UNIT_X). Use the `checked_*` / `try_*`
/// methods when a [`VectorError`] is preferable to a non-finite value.
///
/// # Examples
///
/// ```
/// use vector2d::Vector2D;
///
/// let v = Vector2D::new(3.0, 4.0);
/// assert_eq!(v.length(), 5.0);
///
/// let w = v.with_length(10.0);
/// assert!(w.approx_eq(&Vector2D::new(6.0, 8.0), 1e-9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    /// Create a new 2D vector
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    /// Zero vector
    pub const ZERO: Vector2D = Vector2D::new(0.0, 0.0);

    /// Unit X vector
    pub const UNIT_X: Vector2D = Vector2D::new(1.0, 0.0);

    /// Unit Y vector
    pub const UNIT_Y: Vector2D = Vector2D::new(0.0, 1.0);

    /// Whether both components are exactly zero
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Whether the length is exactly `1.0`.
    ///
    /// No tolerance is applied. A vector produced by [`normalized`](Self::normalized)
    /// may miss by one ulp; compare `length()` against `1.0` with
    /// [`DEFAULT_TOLERANCE`] when that matters.
    pub fn is_normalized(&self) -> bool {
        self.length() == 1.0
    }

    /// Whether both components are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Calculate the length (magnitude) of the vector
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Calculate the squared length (avoids sqrt for performance)
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Signed angle to the positive X axis in radians, in `(-π, π]`.
    ///
    /// The zero vector has angle `0`. Follows `atan2` on signed zeros, so a
    /// negative-zero `y` with negative `x` gives `-π`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Dot product
    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Squared distance to another point
    pub fn distance_squared(&self, other: &Vector2D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Distance to another point
    pub fn distance(&self, other: &Vector2D) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Unsigned angle between two vectors in radians, in `[0, π]`.
    ///
    /// Both operands are normalized first, so a zero vector behaves like
    /// [`UNIT_X`](Self::UNIT_X). The cosine is clamped to `[-1, 1]` before
    /// `acos` so rounding after normalization cannot turn a parallel pair
    /// into `NaN`.
    pub fn angle_between(&self, other: &Vector2D) -> f64 {
        let a = if self.is_normalized() { *self } else { self.normalized() };
        let b = if other.is_normalized() { *other } else { other.normalized() };

        let cos = a.dot(&b);
        if !(-1.0..=1.0).contains(&cos) {
            trace!(cos, "clamping cosine in angle_between");
        }
        cos.clamp(-1.0, 1.0).acos()
    }

    /// Vector with the same length pointing at angle `a` (radians)
    pub fn with_angle(&self, a: f64) -> Vector2D {
        let len = self.length();
        Vector2D::new(a.cos() * len, a.sin() * len)
    }

    /// Vector with the same angle and length `len`.
    ///
    /// The direction comes from [`angle`](Self::angle), so the zero vector
    /// yields `(len, 0)`.
    pub fn with_length(&self, len: f64) -> Vector2D {
        let a = self.angle();
        Vector2D::new(a.cos() * len, a.sin() * len)
    }

    /// Unit vector with the same angle.
    ///
    /// The zero vector normalizes to `(1, 0)` rather than `(NaN, NaN)`.
    pub fn normalized(&self) -> Vector2D {
        let len = self.length();
        if len == 0.0 {
            return Vector2D::UNIT_X;
        }
        Vector2D::new(self.x / len, self.y / len)
    }

    /// Cap the length at `max_length`, keeping the direction.
    ///
    /// The result is always rebuilt from angle and length, so a vector that
    /// is already short enough comes back equal up to rounding.
    pub fn truncated(&self, max_length: f64) -> Vector2D {
        self.with_length(max_length.min(self.length()))
    }

    /// Vector pointing the opposite way
    pub fn reversed(&self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }

    /// The perpendicular `(x, -y)`.
    ///
    /// This is the single orientation the crate defines; no signed or
    /// opposite-handed variant is provided.
    pub fn perpendicular(&self) -> Vector2D {
        Vector2D::new(self.x, -self.y)
    }

    /// Multiply both components by `k`
    pub fn scale(&self, k: f64) -> Vector2D {
        Vector2D::new(self.x * k, self.y * k)
    }

    /// Component-wise comparison within an absolute `tolerance`
    pub fn approx_eq(&self, other: &Vector2D, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    /// `Ok(self)` when both components are finite
    pub fn ensure_finite(self) -> Result<Vector2D> {
        if self.is_finite() {
            Ok(self)
        } else {
            debug!(x = self.x, y = self.y, "rejecting non-finite vector");
            Err(VectorError::NonFinite {
                x: self.x,
                y: self.y,
            })
        }
    }

    /// Division that reports a zero divisor or a non-finite result
    pub fn checked_divide(&self, k: f64) -> Result<Vector2D> {
        if k == 0.0 {
            debug!(x = self.x, y = self.y, "rejecting division by zero");
            return Err(VectorError::DivisionByZero);
        }
        (*self / k).ensure_finite()
    }

    /// Normalization without the `(1, 0)` fallback for the zero vector.
    ///
    /// The input is rescaled by its largest component first, so lengths that
    /// would underflow to zero or overflow to infinity still give the right
    /// direction.
    pub fn try_normalized(&self) -> Result<Vector2D> {
        let v = self.ensure_finite()?;
        let largest = v.x.abs().max(v.y.abs());
        if largest == 0.0 {
            debug!("rejecting normalization of zero vector");
            return Err(VectorError::ZeroLength);
        }
        Ok((v / largest).normalized())
    }
}

impl Default for Vector2D {
    fn default() -> Self {
        Vector2D::ZERO
    }
}

impl Add for Vector2D {
    type Output = Vector2D;
    fn add(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, other: Vector2D) {
        *self = *self + other;
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;
    fn sub(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, other: Vector2D) {
        *self = *self - other;
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;
    fn mul(self, scalar: f64) -> Vector2D {
        self.scale(scalar)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;
    fn mul(self, v: Vector2D) -> Vector2D {
        v.scale(self)
    }
}

impl MulAssign<f64> for Vector2D {
    fn mul_assign(&mut self, scalar: f64) {
        *self = self.scale(scalar);
    }
}

// IEEE semantics: a zero divisor gives infinities or NaN.
impl Div<f64> for Vector2D {
    type Output = Vector2D;
    fn div(self, scalar: f64) -> Vector2D {
        Vector2D::new(self.x / scalar, self.y / scalar)
    }
}

impl DivAssign<f64> for Vector2D {
    fn div_assign(&mut self, scalar: f64) {
        *self = *self / scalar;
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;
    fn neg(self) -> Vector2D {
        self.reversed()
    }
}

impl Sum for Vector2D {
    fn sum<I: Iterator<Item = Vector2D>>(iter: I) -> Vector2D {
        iter.fold(Vector2D::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Vector2D> for Vector2D {
    fn sum<I: Iterator<Item = &'a Vector2D>>(iter: I) -> Vector2D {
        iter.copied().sum()
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2D::new(x, y)
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Vector2D::new(x, y)
    }
}

impl From<Vector2D> for (f64, f64) {
    fn from(v: Vector2D) -> Self {
        (v.x, v.y)
    }
}

impl From<Vector2D> for [f64; 2] {
    fn from(v: Vector2D) -> Self {
        [v.x, v.y]
    }
}

impl From<nalgebra::Vector2<f64>> for Vector2D {
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Vector2D::new(v.x, v.y)
    }
}

impl From<Vector2D> for nalgebra::Vector2<f64> {
    fn from(v: Vector2D) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

impl From<nalgebra::Point2<f64>> for Vector2D {
    fn from(p: nalgebra::Point2<f64>) -> Self {
        Vector2D::new(p.x, p.y)
    }
}

impl From<Vector2D> for nalgebra::Point2<f64> {
    fn from(v: Vector2D) -> Self {
        nalgebra::Point2::new(v.x, v.y)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
