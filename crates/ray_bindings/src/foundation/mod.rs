//! Foundation module - Value types and marshalling helpers
//!
//! This module provides the plain-data types that cross the native boundary
//! by value, plus the helpers used to marshal Rust data into native form:
//! - Vector, matrix and rectangle mirrors (with nalgebra conversions)
//! - Colors and the default palette
//! - Camera and n-patch descriptors
//! - String and length marshalling
//! - Logging utilities

pub mod color;
pub mod logging;
pub mod math;
pub mod strings;

pub use color::Color;
pub use math::{Camera2D, Camera3D, Matrix, NPatchInfo, Rectangle, Vector2, Vector3, Vector4};
