//! RGBA8 color and the library's default palette

/// Color, 4 components, R8G8B8A8 (32bit)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Color {
    /// Create a color from components
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Convert to normalized `[r, g, b, a]` floats
    pub fn to_normalized(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        ]
    }

    /// Build from normalized floats, clamping each channel to `[0, 1]`
    pub fn from_normalized(rgba: [f32; 4]) -> Self {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(channel(rgba[0]), channel(rgba[1]), channel(rgba[2]), channel(rgba[3]))
    }

    pub const LIGHTGRAY: Self = Self::new(200, 200, 200, 255);
    pub const GRAY: Self = Self::new(130, 130, 130, 255);
    pub const DARKGRAY: Self = Self::new(80, 80, 80, 255);
    pub const YELLOW: Self = Self::new(253, 249, 0, 255);
    pub const GOLD: Self = Self::new(255, 203, 0, 255);
    pub const ORANGE: Self = Self::new(255, 161, 0, 255);
    pub const PINK: Self = Self::new(255, 109, 194, 255);
    pub const RED: Self = Self::new(230, 41, 55, 255);
    pub const MAROON: Self = Self::new(190, 33, 55, 255);
    pub const GREEN: Self = Self::new(0, 228, 48, 255);
    pub const LIME: Self = Self::new(0, 158, 47, 255);
    pub const DARKGREEN: Self = Self::new(0, 117, 44, 255);
    pub const SKYBLUE: Self = Self::new(102, 191, 255, 255);
    pub const BLUE: Self = Self::new(0, 121, 241, 255);
    pub const DARKBLUE: Self = Self::new(0, 82, 172, 255);
    pub const PURPLE: Self = Self::new(200, 122, 255, 255);
    pub const VIOLET: Self = Self::new(135, 60, 190, 255);
    pub const DARKPURPLE: Self = Self::new(112, 31, 126, 255);
    pub const BEIGE: Self = Self::new(211, 176, 131, 255);
    pub const BROWN: Self = Self::new(127, 106, 79, 255);
    pub const DARKBROWN: Self = Self::new(76, 63, 47, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Fully transparent
    pub const BLANK: Self = Self::new(0, 0, 0, 0);
    pub const MAGENTA: Self = Self::new(255, 0, 255, 255);
    /// Off-white used by the library's examples as a background
    pub const RAYWHITE: Self = Self::new(245, 245, 245, 255);
}

impl From<[u8; 4]> for Color {
    fn from(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Color> for [u8; 4] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

// SAFETY: four u8 fields, `#[repr(C)]`, no padding.
unsafe impl bytemuck::Zeroable for Color {}
unsafe impl bytemuck::Pod for Color {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_color_normalization() {
        let n = Color::WHITE.to_normalized();
        assert_relative_eq!(n[0], 1.0);
        assert_relative_eq!(n[3], 1.0);

        let c = Color::from_normalized([0.0, 0.5, 2.0, -1.0]);
        assert_eq!(c, Color::new(0, 128, 255, 0));
    }

    #[test]
    fn test_color_byte_view() {
        let pixels = [Color::RED, Color::BLANK];
        let bytes: &[u8] = bytemuck::cast_slice(&pixels);
        assert_eq!(bytes, &[230, 41, 55, 255, 0, 0, 0, 0]);
    }
}
