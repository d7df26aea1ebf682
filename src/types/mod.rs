//! Core value types

mod vector;

pub use vector::{Vector2D, DEFAULT_TOLERANCE};
