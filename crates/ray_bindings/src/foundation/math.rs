//! Math value types mirrored from the native library
//!
//! Every type here is `#[repr(C)]` with the native field order, so it can be
//! passed across the boundary by value. Conversions to and from nalgebra keep
//! application math in the usual types.

use nalgebra::Matrix4;

pub use nalgebra::{Vector2 as NVector2, Vector3 as NVector3, Vector4 as NVector4};

/// 2D vector
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

/// 3D vector
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

/// 4D vector
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector4 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// W component
    pub w: f32,
}

impl Vector2 {
    /// Zero vector
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    /// Unit vector
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    /// Create a new vector
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Vector3 {
    /// Zero vector
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    /// Up axis
    pub const UP: Self = Self { x: 0.0, y: 1.0, z: 0.0 };

    /// Create a new vector
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Vector4 {
    /// Create a new vector
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

impl From<NVector2<f32>> for Vector2 {
    fn from(v: NVector2<f32>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for NVector2<f32> {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<NVector3<f32>> for Vector3 {
    fn from(v: NVector3<f32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for NVector3<f32> {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<NVector4<f32>> for Vector4 {
    fn from(v: NVector4<f32>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vector4> for NVector4<f32> {
    fn from(v: Vector4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

/// 4x4 matrix in native field order
///
/// The native struct declares `m0, m4, m8, m12` first, so memory holds the
/// matrix row by row: element `(row, col)` lives at `m[row * 4 + col]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    /// Elements, row-major
    pub m: [f32; 16],
}

impl Matrix {
    /// Identity matrix
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Element at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[row * 4 + col]
    }

    /// Translation matrix
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Matrix4::new_translation(&NVector3::new(x, y, z)).into()
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Matrix4<f32>> for Matrix {
    fn from(mat: Matrix4<f32>) -> Self {
        let mut m = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                m[row * 4 + col] = mat[(row, col)];
            }
        }
        Self { m }
    }
}

impl From<Matrix> for Matrix4<f32> {
    fn from(mat: Matrix) -> Self {
        Self::from_row_slice(&mat.m)
    }
}

/// Axis-aligned rectangle
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rectangle {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rectangle {
    /// Create a new rectangle
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Whether the rectangle covers no area
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// 2D camera
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    /// Camera offset (displacement from target)
    pub offset: Vector2,
    /// Camera target (rotation and zoom origin)
    pub target: Vector2,
    /// Camera rotation in degrees
    pub rotation: f32,
    /// Camera zoom (scaling), should be 1.0 by default
    pub zoom: f32,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self {
            offset: Vector2::ZERO,
            target: Vector2::ZERO,
            rotation: 0.0,
            zoom: 1.0,
        }
    }
}

/// 3D camera
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera3D {
    /// Camera position
    pub position: Vector3,
    /// Camera target it looks at
    pub target: Vector3,
    /// Camera up vector (rotation over its axis)
    pub up: Vector3,
    /// Field of view in degrees (perspective) or near plane width (orthographic)
    pub fovy: f32,
    /// Projection type, see [`crate::ffi::CameraProjection`]
    pub projection: i32,
}

impl Default for Camera3D {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 10.0, 10.0),
            target: Vector3::ZERO,
            up: Vector3::UP,
            fovy: 45.0,
            projection: crate::ffi::CameraProjection::Perspective as i32,
        }
    }
}

/// N-patch layout descriptor
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NPatchInfo {
    /// Texture source rectangle
    pub source: Rectangle,
    /// Left border offset
    pub left: i32,
    /// Top border offset
    pub top: i32,
    /// Right border offset
    pub right: i32,
    /// Bottom border offset
    pub bottom: i32,
    /// Layout of the n-patch: 3x3, 1x3 or 3x1
    pub layout: i32,
}

// SAFETY: all of these are `#[repr(C)]` aggregates of f32/i32 with no padding.
unsafe impl bytemuck::Zeroable for Vector2 {}
unsafe impl bytemuck::Pod for Vector2 {}
unsafe impl bytemuck::Zeroable for Vector3 {}
unsafe impl bytemuck::Pod for Vector3 {}
unsafe impl bytemuck::Zeroable for Vector4 {}
unsafe impl bytemuck::Pod for Vector4 {}
unsafe impl bytemuck::Zeroable for Matrix {}
unsafe impl bytemuck::Pod for Matrix {}
unsafe impl bytemuck::Zeroable for Rectangle {}
unsafe impl bytemuck::Pod for Rectangle {}
unsafe impl bytemuck::Zeroable for Camera2D {}
unsafe impl bytemuck::Pod for Camera2D {}
unsafe impl bytemuck::Zeroable for Camera3D {}
unsafe impl bytemuck::Pod for Camera3D {}
unsafe impl bytemuck::Zeroable for NPatchInfo {}
unsafe impl bytemuck::Pod for NPatchInfo {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_value_type_sizes() {
        assert_eq!(std::mem::size_of::<Vector2>(), 8);
        assert_eq!(std::mem::size_of::<Vector3>(), 12);
        assert_eq!(std::mem::size_of::<Matrix>(), 64);
        assert_eq!(std::mem::size_of::<Rectangle>(), 16);
        assert_eq!(std::mem::size_of::<Camera2D>(), 24);
        assert_eq!(std::mem::size_of::<Camera3D>(), 44);
        assert_eq!(std::mem::size_of::<NPatchInfo>(), 36);
    }

    #[test]
    fn test_matrix_row_major_layout() {
        let mat = Matrix::translation(3.0, 4.0, 5.0);
        // Translation sits in the last column, which the native struct
        // stores as m12, m13, m14 (indices 3, 7, 11 in field order)
        assert_relative_eq!(mat.m[3], 3.0);
        assert_relative_eq!(mat.m[7], 4.0);
        assert_relative_eq!(mat.m[11], 5.0);
        assert_relative_eq!(mat.get(3, 3), 1.0);
    }

    #[test]
    fn test_matrix_nalgebra_conversion_preserves_elements() {
        let source = Matrix4::new(
            1.0, 2.0, 3.0, 4.0, //
            5.0, 6.0, 7.0, 8.0, //
            9.0, 10.0, 11.0, 12.0, //
            13.0, 14.0, 15.0, 16.0,
        );
        let native: Matrix = source.into();
        assert_relative_eq!(native.get(1, 2), 7.0);
        assert_relative_eq!(native.get(3, 0), 13.0);

        let back: Matrix4<f32> = native.into();
        assert_eq!(back, source);
    }

    #[test]
    fn test_vector_conversion() {
        let v: Vector3 = NVector3::new(1.0, 2.0, 3.0).into();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        let n: NVector2<f32> = Vector2::new(0.5, -1.0).into();
        assert_relative_eq!(n.x, 0.5);
        assert_relative_eq!(n.y, -1.0);
    }

    #[test]
    fn test_rectangle_emptiness() {
        assert!(Rectangle::new(0.0, 0.0, 0.0, 10.0).is_empty());
        assert!(!Rectangle::new(1.0, 1.0, 2.0, 2.0).is_empty());
    }
}
