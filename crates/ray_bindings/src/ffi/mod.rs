//! Raw mirrors of native structs and enums
//!
//! Field order and widths match the native headers exactly; the layout tests
//! at the bottom pin the sizes on 64-bit targets. Nothing in this module owns
//! native memory. Ownership lives in [`crate::resource`].

use std::ffi::c_void;
use std::ptr;

pub use crate::foundation::{Color, Rectangle};

/// Number of material maps allocated by the native material loader
pub const MAX_MATERIAL_MAPS: usize = 12;

/// Number of shader locations allocated by the native shader loader
pub const MAX_SHADER_LOCATIONS: usize = 32;

/// Image, pixel data stored in CPU memory (RAM)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Image {
    /// Image raw data
    pub data: *mut c_void,
    /// Image base width
    pub width: i32,
    /// Image base height
    pub height: i32,
    /// Mipmap levels, 1 by default
    pub mipmaps: i32,
    /// Data format (`PixelFormat`)
    pub format: i32,
}

/// Texture, tex data stored in GPU memory (VRAM)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Texture {
    /// OpenGL texture id
    pub id: u32,
    /// Texture base width
    pub width: i32,
    /// Texture base height
    pub height: i32,
    /// Mipmap levels, 1 by default
    pub mipmaps: i32,
    /// Data format (`PixelFormat`)
    pub format: i32,
}

/// RenderTexture, fbo for texture rendering
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderTexture {
    /// OpenGL framebuffer object id
    pub id: u32,
    /// Color buffer attachment texture
    pub texture: Texture,
    /// Depth buffer attachment texture
    pub depth: Texture,
}

/// Shader program
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shader {
    /// Shader program id
    pub id: u32,
    /// Shader locations array (`MAX_SHADER_LOCATIONS`)
    pub locs: *mut i32,
}

/// One texture slot of a material
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MaterialMap {
    /// Material map texture
    pub texture: Texture,
    /// Material map color
    pub color: Color,
    /// Material map value
    pub value: f32,
}

/// Material, includes shader and maps
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Material shader
    pub shader: Shader,
    /// Material maps array (`MAX_MATERIAL_MAPS`)
    pub maps: *mut MaterialMap,
    /// Material generic parameters (if required)
    pub params: [f32; 4],
}

/// Vertex data uploaded to GPU buffers
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mesh {
    /// Number of vertices stored in arrays
    pub vertex_count: i32,
    /// Number of triangles stored (indexed or not)
    pub triangle_count: i32,
    /// Vertex position (XYZ - 3 components per vertex)
    pub vertices: *mut f32,
    /// Vertex texture coordinates (UV - 2 components per vertex)
    pub texcoords: *mut f32,
    /// Vertex second texture coordinates
    pub texcoords2: *mut f32,
    /// Vertex normals (XYZ - 3 components per vertex)
    pub normals: *mut f32,
    /// Vertex tangents (XYZW - 4 components per vertex)
    pub tangents: *mut f32,
    /// Vertex colors (RGBA - 4 components per vertex)
    pub colors: *mut u8,
    /// Vertex indices (in case vertex data comes indexed)
    pub indices: *mut u16,
    /// Animated vertex positions (after bones transformations)
    pub anim_vertices: *mut f32,
    /// Animated normals (after bones transformations)
    pub anim_normals: *mut f32,
    /// Vertex bone ids, up to 4 bones influence by vertex
    pub bone_ids: *mut i32,
    /// Vertex bone weight, up to 4 bones influence by vertex
    pub bone_weights: *mut f32,
    /// OpenGL Vertex Array Object id
    pub vao_id: u32,
    /// OpenGL Vertex Buffer Objects id (default vertex data)
    pub vbo_id: *mut u32,
}

/// Font character info
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharInfo {
    /// Character value (Unicode)
    pub value: i32,
    /// Character offset X when drawing
    pub offset_x: i32,
    /// Character offset Y when drawing
    pub offset_y: i32,
    /// Character advance position X
    pub advance_x: i32,
    /// Character image data
    pub image: Image,
}

/// Font, font texture and CharInfo array data
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    /// Base size (default chars height)
    pub base_size: i32,
    /// Number of characters
    pub chars_count: i32,
    /// Padding around the chars
    pub chars_padding: i32,
    /// Characters texture atlas
    pub texture: Texture,
    /// Characters rectangles in texture
    pub recs: *mut Rectangle,
    /// Characters info data
    pub chars: *mut CharInfo,
}

/// Wave type, defines audio wave data
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    /// Total number of samples (considering channels!)
    pub sample_count: u32,
    /// Frequency (samples per second)
    pub sample_rate: u32,
    /// Bit depth (bits per sample): 8, 16, 32 (24 not supported)
    pub sample_size: u32,
    /// Number of channels (1-mono, 2-stereo)
    pub channels: u32,
    /// Buffer data pointer
    pub data: *mut c_void,
}

/// Opaque native audio buffer
#[repr(C)]
pub struct AudioBuffer {
    _private: [u8; 0],
}

/// Audio stream type
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioStream {
    /// Pointer to internal data used by the audio system
    pub buffer: *mut AudioBuffer,
    /// Frequency (samples per second)
    pub sample_rate: u32,
    /// Bit depth (bits per sample): 8, 16, 32 (24 not supported)
    pub sample_size: u32,
    /// Number of channels (1-mono, 2-stereo)
    pub channels: u32,
}

/// Sound source type
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sound {
    /// Audio stream
    pub stream: AudioStream,
    /// Total number of samples
    pub sample_count: u32,
}

/// Music stream type (audio file streaming from memory)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Music {
    /// Audio stream
    pub stream: AudioStream,
    /// Total number of samples
    pub sample_count: u32,
    /// Music looping enable
    pub looping: bool,
    /// Type of music context (audio filetype)
    pub ctx_type: i32,
    /// Audio context data, depends on type
    pub ctx_data: *mut c_void,
}

macro_rules! zeroed_default {
    ($($ty:ty),* $(,)?) => {
        $(
            // SAFETY: null pointers, zero integers and `false` are valid for every field.
            unsafe impl bytemuck::Zeroable for $ty {}
        )*
    };
}

zeroed_default!(
    Image,
    Texture,
    RenderTexture,
    Shader,
    MaterialMap,
    Material,
    Mesh,
    CharInfo,
    Font,
    Wave,
    AudioStream,
    Sound,
    Music,
);

// SAFETY: plain integers, `#[repr(C)]`, no padding.
unsafe impl bytemuck::Pod for Texture {}

impl Default for Image {
    fn default() -> Self {
        Self { data: ptr::null_mut(), width: 0, height: 0, mipmaps: 0, format: 0 }
    }
}

/// Pixel formats
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 8 bit per pixel (no alpha)
    UncompressedGrayscale = 1,
    /// 8*2 bpp (2 channels)
    UncompressedGrayAlpha = 2,
    /// 16 bpp
    UncompressedR5G6B5 = 3,
    /// 24 bpp
    UncompressedR8G8B8 = 4,
    /// 16 bpp (1 bit alpha)
    UncompressedR5G5B5A1 = 5,
    /// 16 bpp (4 bit alpha)
    UncompressedR4G4B4A4 = 6,
    /// 32 bpp
    UncompressedR8G8B8A8 = 7,
    /// 32 bpp (1 channel - float)
    UncompressedR32 = 8,
    /// 32*3 bpp (3 channels - float)
    UncompressedR32G32B32 = 9,
    /// 32*4 bpp (4 channels - float)
    UncompressedR32G32B32A32 = 10,
    /// 4 bpp (no alpha)
    CompressedDxt1Rgb = 11,
    /// 4 bpp (1 bit alpha)
    CompressedDxt1Rgba = 12,
    /// 8 bpp
    CompressedDxt3Rgba = 13,
    /// 8 bpp
    CompressedDxt5Rgba = 14,
    /// 4 bpp
    CompressedEtc1Rgb = 15,
    /// 4 bpp
    CompressedEtc2Rgb = 16,
    /// 8 bpp
    CompressedEtc2EacRgba = 17,
    /// 4 bpp
    CompressedPvrtRgb = 18,
    /// 4 bpp
    CompressedPvrtRgba = 19,
    /// 8 bpp
    CompressedAstc4x4Rgba = 20,
    /// 2 bpp
    CompressedAstc8x8Rgba = 21,
}

impl PixelFormat {
    const ALL: [Self; 21] = [
        Self::UncompressedGrayscale,
        Self::UncompressedGrayAlpha,
        Self::UncompressedR5G6B5,
        Self::UncompressedR8G8B8,
        Self::UncompressedR5G5B5A1,
        Self::UncompressedR4G4B4A4,
        Self::UncompressedR8G8B8A8,
        Self::UncompressedR32,
        Self::UncompressedR32G32B32,
        Self::UncompressedR32G32B32A32,
        Self::CompressedDxt1Rgb,
        Self::CompressedDxt1Rgba,
        Self::CompressedDxt3Rgba,
        Self::CompressedDxt5Rgba,
        Self::CompressedEtc1Rgb,
        Self::CompressedEtc2Rgb,
        Self::CompressedEtc2EacRgba,
        Self::CompressedPvrtRgb,
        Self::CompressedPvrtRgba,
        Self::CompressedAstc4x4Rgba,
        Self::CompressedAstc8x8Rgba,
    ];

    /// Map a raw native format value back to the enum
    pub fn from_raw(raw: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| *f as i32 == raw)
    }

    /// Bits per pixel
    pub fn bits_per_pixel(self) -> usize {
        use PixelFormat::*;
        match self {
            UncompressedGrayscale => 8,
            UncompressedGrayAlpha | UncompressedR5G6B5 | UncompressedR5G5B5A1
            | UncompressedR4G4B4A4 => 16,
            UncompressedR8G8B8A8 | UncompressedR32 => 32,
            UncompressedR8G8B8 => 24,
            UncompressedR32G32B32 => 96,
            UncompressedR32G32B32A32 => 128,
            CompressedDxt1Rgb | CompressedDxt1Rgba | CompressedEtc1Rgb | CompressedEtc2Rgb
            | CompressedPvrtRgb | CompressedPvrtRgba => 4,
            CompressedDxt3Rgba | CompressedDxt5Rgba | CompressedEtc2EacRgba
            | CompressedAstc4x4Rgba => 8,
            CompressedAstc8x8Rgba => 2,
        }
    }

    /// Byte size of a `width` x `height` pixel buffer in this format
    ///
    /// Compressed formats smaller than one 4x4 block still occupy a full block.
    pub fn data_size(self, width: i32, height: i32) -> usize {
        let width = width.max(0) as usize;
        let height = height.max(0) as usize;
        let mut size = width * height * self.bits_per_pixel() / 8;

        if width < 4 && height < 4 {
            let raw = self as i32;
            if (Self::CompressedDxt1Rgb as i32..Self::CompressedDxt3Rgba as i32).contains(&raw) {
                size = 8;
            } else if (Self::CompressedDxt3Rgba as i32..Self::CompressedAstc8x8Rgba as i32)
                .contains(&raw)
            {
                size = 16;
            }
        }
        size
    }

    /// Whether the format is block compressed
    pub fn is_compressed(self) -> bool {
        self as i32 >= Self::CompressedDxt1Rgb as i32
    }
}

/// Texture parameters: filter mode
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFilter {
    /// No filter, just pixel approximation
    Point = 0,
    /// Linear filtering
    Bilinear = 1,
    /// Trilinear filtering (linear with mipmaps)
    Trilinear = 2,
    /// Anisotropic filtering 4x
    Anisotropic4x = 3,
    /// Anisotropic filtering 8x
    Anisotropic8x = 4,
    /// Anisotropic filtering 16x
    Anisotropic16x = 5,
}

/// Texture parameters: wrap mode
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureWrap {
    /// Repeats texture in tiled mode
    Repeat = 0,
    /// Clamps texture to edge pixel in tiled mode
    Clamp = 1,
    /// Mirrors and repeats the texture in tiled mode
    MirrorRepeat = 2,
    /// Mirrors and clamps to border the texture in tiled mode
    MirrorClamp = 3,
}

/// Color blending modes (pre-defined)
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Blend textures considering alpha (default)
    Alpha = 0,
    /// Blend textures adding colors
    Additive = 1,
    /// Blend textures multiplying colors
    Multiplied = 2,
    /// Blend textures adding colors (alternative)
    AddColors = 3,
    /// Blend textures subtracting colors (alternative)
    SubtractColors = 4,
    /// Blend textures using custom src/dst factors
    Custom = 5,
}

/// Cubemap layouts
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubemapLayout {
    /// Automatically detect layout type
    AutoDetect = 0,
    /// Layout is defined by a vertical line with faces
    LineVertical = 1,
    /// Layout is defined by a horizontal line with faces
    LineHorizontal = 2,
    /// Layout is defined by a 3x4 cross with cubemap faces
    CrossThreeByFour = 3,
    /// Layout is defined by a 4x3 cross with cubemap faces
    CrossFourByThree = 4,
    /// Layout is defined by a panorama image (equirectangular map)
    Panorama = 5,
}

/// Material map index
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialMapIndex {
    /// Albedo (same as diffuse)
    Albedo = 0,
    /// Metalness (same as specular)
    Metalness = 1,
    Normal = 2,
    Roughness = 3,
    Occlusion = 4,
    Emission = 5,
    Height = 6,
    /// Uses a cube map texture
    Cubemap = 7,
    /// Uses a cube map texture
    Irradiance = 8,
    /// Uses a cube map texture
    Prefilter = 9,
    Brdf = 10,
}

/// Shader location index
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ShaderLocationIndex {
    VertexPosition = 0,
    VertexTexcoord01 = 1,
    VertexTexcoord02 = 2,
    VertexNormal = 3,
    VertexTangent = 4,
    VertexColor = 5,
    MatrixMvp = 6,
    MatrixView = 7,
    MatrixProjection = 8,
    MatrixModel = 9,
    MatrixNormal = 10,
    VectorView = 11,
    ColorDiffuse = 12,
    ColorSpecular = 13,
    ColorAmbient = 14,
    MapAlbedo = 15,
    MapMetalness = 16,
    MapNormal = 17,
    MapRoughness = 18,
    MapOcclusion = 19,
    MapEmission = 20,
    MapHeight = 21,
    MapCubemap = 22,
    MapIrradiance = 23,
    MapPrefilter = 24,
    MapBrdf = 25,
}

/// Shader uniform data type
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ShaderUniformDataType {
    Float = 0,
    Vec2 = 1,
    Vec3 = 2,
    Vec4 = 3,
    Int = 4,
    Ivec2 = 5,
    Ivec3 = 6,
    Ivec4 = 7,
    Sampler2D = 8,
}

/// Camera projection
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraProjection {
    /// Perspective projection
    Perspective = 0,
    /// Orthographic projection
    Orthographic = 1,
}

/// N-patch layout
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NPatchLayout {
    /// Npatch defined by 3x3 tiles
    NinePatch = 0,
    /// Npatch defined by 1x3 tiles
    ThreePatchVertical = 1,
    /// Npatch defined by 3x1 tiles
    ThreePatchHorizontal = 2,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_struct_sizes_match_native_layout() {
        assert_eq!(size_of::<Texture>(), 20);
        assert_eq!(size_of::<Image>(), 24);
        assert_eq!(size_of::<RenderTexture>(), 44);
        assert_eq!(size_of::<Shader>(), 16);
        assert_eq!(size_of::<Color>(), 4);
        assert_eq!(size_of::<Rectangle>(), 16);
        assert_eq!(size_of::<MaterialMap>(), 28);
        assert_eq!(size_of::<Material>(), 40);
        assert_eq!(size_of::<Mesh>(), 112);
        assert_eq!(size_of::<CharInfo>(), 40);
        assert_eq!(size_of::<Font>(), 48);
        assert_eq!(size_of::<Wave>(), 24);
        assert_eq!(size_of::<AudioStream>(), 24);
        assert_eq!(size_of::<Sound>(), 32);
        assert_eq!(size_of::<Music>(), 48);
    }

    #[test]
    fn test_zeroed_structs_are_null() {
        let image: Image = bytemuck::Zeroable::zeroed();
        assert!(image.data.is_null());
        let music: Music = bytemuck::Zeroable::zeroed();
        assert!(music.stream.buffer.is_null());
        assert!(!music.looping);
    }

    #[test]
    fn test_pixel_data_size() {
        let rgba = PixelFormat::UncompressedR8G8B8A8;
        assert_eq!(rgba.data_size(2, 2), 16);
        assert_eq!(PixelFormat::UncompressedR8G8B8.data_size(3, 1), 9);
        assert_eq!(PixelFormat::UncompressedR32G32B32A32.data_size(1, 1), 16);
        assert_eq!(PixelFormat::CompressedDxt1Rgb.data_size(8, 8), 32);
    }

    #[test]
    fn test_small_compressed_images_use_one_block() {
        assert_eq!(PixelFormat::CompressedDxt1Rgba.data_size(2, 2), 8);
        assert_eq!(PixelFormat::CompressedDxt5Rgba.data_size(1, 1), 16);
        assert_eq!(PixelFormat::CompressedAstc4x4Rgba.data_size(2, 2), 16);
        // ASTC 8x8 is outside both block ranges
        assert_eq!(PixelFormat::CompressedAstc8x8Rgba.data_size(2, 2), 1);
    }

    #[test]
    fn test_pixel_format_from_raw() {
        assert_eq!(PixelFormat::from_raw(7), Some(PixelFormat::UncompressedR8G8B8A8));
        assert_eq!(PixelFormat::from_raw(0), None);
        assert_eq!(PixelFormat::from_raw(22), None);
        assert!(PixelFormat::CompressedEtc1Rgb.is_compressed());
        assert!(!PixelFormat::UncompressedR32.is_compressed());
    }
}
