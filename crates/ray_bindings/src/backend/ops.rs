//! Operation enums for native entry point families
//!
//! Each enum groups native functions that share a target and a calling shape.
//! `symbol()` names the exact native entry point a variant binds to, which is
//! also what the recording backend logs.

use crate::ffi::{self, BlendMode, PixelFormat};
use crate::foundation::{Camera2D, Camera3D, Color, NPatchInfo, Rectangle, Vector2, Vector3};

/// In-place image mutators, all called with `Image *`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageOp {
    /// Convert image data to desired format
    Format(PixelFormat),
    /// Convert image to POT (power-of-two), padding with the fill color
    ToPot(Color),
    /// Crop an image to a defined rectangle
    Crop(Rectangle),
    /// Crop image depending on alpha value
    AlphaCrop(f32),
    /// Clear alpha channel to desired color
    AlphaClear {
        /// Replacement color
        color: Color,
        /// Alpha threshold
        threshold: f32,
    },
    /// Apply alpha mask to image
    AlphaMask(ffi::Image),
    /// Premultiply alpha channel
    AlphaPremultiply,
    /// Resize image (bicubic scaling algorithm)
    Resize {
        /// New width
        width: i32,
        /// New height
        height: i32,
    },
    /// Resize image (nearest-neighbor scaling algorithm)
    ResizeNn {
        /// New width
        width: i32,
        /// New height
        height: i32,
    },
    /// Resize canvas and fill with color
    ResizeCanvas {
        /// New width
        width: i32,
        /// New height
        height: i32,
        /// Horizontal offset of the old content
        offset_x: i32,
        /// Vertical offset of the old content
        offset_y: i32,
        /// Fill color
        fill: Color,
    },
    /// Generate all mipmap levels for a provided image
    Mipmaps,
    /// Dither image data to 16bpp or lower (Floyd-Steinberg dithering)
    Dither {
        /// Red bits
        r_bpp: i32,
        /// Green bits
        g_bpp: i32,
        /// Blue bits
        b_bpp: i32,
        /// Alpha bits
        a_bpp: i32,
    },
    /// Flip image vertically
    FlipVertical,
    /// Flip image horizontally
    FlipHorizontal,
    /// Rotate image clockwise 90deg
    RotateCw,
    /// Rotate image counter-clockwise 90deg
    RotateCcw,
    /// Modify image color: tint
    ColorTint(Color),
    /// Modify image color: invert
    ColorInvert,
    /// Modify image color: grayscale
    ColorGrayscale,
    /// Modify image color: contrast (-100 to 100)
    ColorContrast(f32),
    /// Modify image color: brightness (-255 to 255)
    ColorBrightness(i32),
    /// Modify image color: replace color
    ColorReplace {
        /// Color to look for
        color: Color,
        /// Color written instead
        replace: Color,
    },
    /// Clear image background with given color
    ClearBackground(Color),
    /// Draw pixel within an image
    DrawPixel {
        /// X
        x: i32,
        /// Y
        y: i32,
        /// Pixel color
        color: Color,
    },
    /// Draw line within an image
    DrawLine {
        /// Start X
        start_x: i32,
        /// Start Y
        start_y: i32,
        /// End X
        end_x: i32,
        /// End Y
        end_y: i32,
        /// Line color
        color: Color,
    },
    /// Draw circle within an image
    DrawCircle {
        /// Center X
        center_x: i32,
        /// Center Y
        center_y: i32,
        /// Radius in pixels
        radius: i32,
        /// Fill color
        color: Color,
    },
    /// Draw rectangle within an image
    DrawRectangle {
        /// Left edge
        x: i32,
        /// Top edge
        y: i32,
        /// Width
        width: i32,
        /// Height
        height: i32,
        /// Fill color
        color: Color,
    },
    /// Draw rectangle lines within an image
    DrawRectangleLines {
        /// Outline rectangle
        rec: Rectangle,
        /// Line thickness
        thick: i32,
        /// Line color
        color: Color,
    },
    /// Draw a source image within a destination image (tint applied to source)
    Draw {
        /// Source image
        src: ffi::Image,
        /// Region of the source
        src_rec: Rectangle,
        /// Region of the destination
        dst_rec: Rectangle,
        /// Tint applied to the source
        tint: Color,
    },
}

impl ImageOp {
    /// Native entry point
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Format(_) => "ImageFormat",
            Self::ToPot(_) => "ImageToPOT",
            Self::Crop(_) => "ImageCrop",
            Self::AlphaCrop(_) => "ImageAlphaCrop",
            Self::AlphaClear { .. } => "ImageAlphaClear",
            Self::AlphaMask(_) => "ImageAlphaMask",
            Self::AlphaPremultiply => "ImageAlphaPremultiply",
            Self::Resize { .. } => "ImageResize",
            Self::ResizeNn { .. } => "ImageResizeNN",
            Self::ResizeCanvas { .. } => "ImageResizeCanvas",
            Self::Mipmaps => "ImageMipmaps",
            Self::Dither { .. } => "ImageDither",
            Self::FlipVertical => "ImageFlipVertical",
            Self::FlipHorizontal => "ImageFlipHorizontal",
            Self::RotateCw => "ImageRotateCW",
            Self::RotateCcw => "ImageRotateCCW",
            Self::ColorTint(_) => "ImageColorTint",
            Self::ColorInvert => "ImageColorInvert",
            Self::ColorGrayscale => "ImageColorGrayscale",
            Self::ColorContrast(_) => "ImageColorContrast",
            Self::ColorBrightness(_) => "ImageColorBrightness",
            Self::ColorReplace { .. } => "ImageColorReplace",
            Self::ClearBackground(_) => "ImageClearBackground",
            Self::DrawPixel { .. } => "ImageDrawPixel",
            Self::DrawLine { .. } => "ImageDrawLine",
            Self::DrawCircle { .. } => "ImageDrawCircle",
            Self::DrawRectangle { .. } => "ImageDrawRectangle",
            Self::DrawRectangleLines { .. } => "ImageDrawRectangleLines",
            Self::Draw { .. } => "ImageDraw",
        }
    }

    /// Whether the native side may reallocate the pixel buffer
    pub fn reallocates(&self) -> bool {
        matches!(
            self,
            Self::Format(_)
                | Self::ToPot(_)
                | Self::Crop(_)
                | Self::AlphaCrop(_)
                | Self::Resize { .. }
                | Self::ResizeNn { .. }
                | Self::ResizeCanvas { .. }
                | Self::Mipmaps
                | Self::Dither { .. }
                | Self::RotateCw
                | Self::RotateCcw
        )
    }
}

/// Procedural image generators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageGen {
    /// Plain color
    Color {
        /// Width
        width: i32,
        /// Height
        height: i32,
        /// Fill color
        color: Color,
    },
    /// Vertical gradient
    GradientV {
        /// Width
        width: i32,
        /// Height
        height: i32,
        /// Top color
        top: Color,
        /// Bottom color
        bottom: Color,
    },
    /// Horizontal gradient
    GradientH {
        /// Width
        width: i32,
        /// Height
        height: i32,
        /// Left color
        left: Color,
        /// Right color
        right: Color,
    },
    /// Radial gradient
    GradientRadial {
        /// Width
        width: i32,
        /// Height
        height: i32,
        /// Gradient density
        density: f32,
        /// Center color
        inner: Color,
        /// Edge color
        outer: Color,
    },
    /// Checkerboard
    Checked {
        /// Width
        width: i32,
        /// Height
        height: i32,
        /// Checks per row
        checks_x: i32,
        /// Checks per column
        checks_y: i32,
        /// First color
        col1: Color,
        /// Second color
        col2: Color,
    },
    /// White noise
    WhiteNoise {
        /// Width
        width: i32,
        /// Height
        height: i32,
        /// Probability of a white pixel
        factor: f32,
    },
    /// Perlin noise
    PerlinNoise {
        /// Width
        width: i32,
        /// Height
        height: i32,
        /// Noise offset X
        offset_x: i32,
        /// Noise offset Y
        offset_y: i32,
        /// Noise scale
        scale: f32,
    },
    /// Cellular (Voronoi) noise
    Cellular {
        /// Width
        width: i32,
        /// Height
        height: i32,
        /// Cell size in pixels
        tile_size: i32,
    },
}

impl ImageGen {
    /// Native entry point
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Color { .. } => "GenImageColor",
            Self::GradientV { .. } => "GenImageGradientV",
            Self::GradientH { .. } => "GenImageGradientH",
            Self::GradientRadial { .. } => "GenImageGradientRadial",
            Self::Checked { .. } => "GenImageChecked",
            Self::WhiteNoise { .. } => "GenImageWhiteNoise",
            Self::PerlinNoise { .. } => "GenImagePerlinNoise",
            Self::Cellular { .. } => "GenImageCellular",
        }
    }

    /// Requested dimensions
    pub fn size(&self) -> (i32, i32) {
        match *self {
            Self::Color { width, height, .. }
            | Self::GradientV { width, height, .. }
            | Self::GradientH { width, height, .. }
            | Self::GradientRadial { width, height, .. }
            | Self::Checked { width, height, .. }
            | Self::WhiteNoise { width, height, .. }
            | Self::PerlinNoise { width, height, .. }
            | Self::Cellular { width, height, .. } => (width, height),
        }
    }
}

/// Procedural mesh generators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshShape {
    /// Polygonal mesh
    Poly {
        /// Number of sides
        sides: i32,
        /// Radius
        radius: f32,
    },
    /// Plane mesh (with subdivisions)
    Plane {
        /// Width
        width: f32,
        /// Length
        length: f32,
        /// Subdivisions along X
        res_x: i32,
        /// Subdivisions along Z
        res_z: i32,
    },
    /// Cuboid mesh
    Cube {
        /// Width
        width: f32,
        /// Height
        height: f32,
        /// Length
        length: f32,
    },
    /// Sphere mesh (standard sphere)
    Sphere {
        /// Radius
        radius: f32,
        /// Rings
        rings: i32,
        /// Slices
        slices: i32,
    },
    /// Half-sphere mesh (no bottom cap)
    HemiSphere {
        /// Radius
        radius: f32,
        /// Rings
        rings: i32,
        /// Slices
        slices: i32,
    },
    /// Cylinder mesh
    Cylinder {
        /// Radius
        radius: f32,
        /// Height
        height: f32,
        /// Slices
        slices: i32,
    },
    /// Torus mesh
    Torus {
        /// Radius
        radius: f32,
        /// Tube size
        size: f32,
        /// Radial segments
        rad_seg: i32,
        /// Sides
        sides: i32,
    },
    /// Trefoil knot mesh
    Knot {
        /// Radius
        radius: f32,
        /// Tube size
        size: f32,
        /// Radial segments
        rad_seg: i32,
        /// Sides
        sides: i32,
    },
    /// Heightmap mesh from image data
    Heightmap {
        /// Source image, read only
        heightmap: ffi::Image,
        /// World size of the mesh
        size: Vector3,
    },
    /// Cubes-based map mesh from image data
    Cubicmap {
        /// Source image, read only
        cubicmap: ffi::Image,
        /// World size of one cube
        cube_size: Vector3,
    },
}

impl MeshShape {
    /// Native entry point
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Poly { .. } => "GenMeshPoly",
            Self::Plane { .. } => "GenMeshPlane",
            Self::Cube { .. } => "GenMeshCube",
            Self::Sphere { .. } => "GenMeshSphere",
            Self::HemiSphere { .. } => "GenMeshHemiSphere",
            Self::Cylinder { .. } => "GenMeshCylinder",
            Self::Torus { .. } => "GenMeshTorus",
            Self::Knot { .. } => "GenMeshKnot",
            Self::Heightmap { .. } => "GenMeshHeightmap",
            Self::Cubicmap { .. } => "GenMeshCubicmap",
        }
    }
}

/// In-place wave mutators, all called with `Wave *`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveOp {
    /// Convert wave data to desired format
    Format {
        /// Target sample rate
        sample_rate: i32,
        /// Target bit depth
        sample_size: i32,
        /// Target channel count
        channels: i32,
    },
    /// Crop a wave to defined samples range
    Crop {
        /// First frame kept
        init_sample: i32,
        /// Frame after the last one kept
        final_sample: i32,
    },
}

impl WaveOp {
    /// Native entry point
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Format { .. } => "WaveFormat",
            Self::Crop { .. } => "WaveCrop",
        }
    }
}

/// Audio object a playback call targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackTarget {
    /// `Sound`
    Sound,
    /// `Music`
    Music,
    /// `AudioStream`
    Stream,
}

/// Playback controls shared by sounds, music and raw streams
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    /// Start playing
    Play,
    /// Stop and rewind
    Stop,
    /// Pause
    Pause,
    /// Resume a paused object
    Resume,
}

impl Playback {
    /// Native entry point for this control on `target`
    pub fn symbol(&self, target: PlaybackTarget) -> &'static str {
        use PlaybackTarget::*;
        match (self, target) {
            (Self::Play, Sound) => "PlaySound",
            (Self::Stop, Sound) => "StopSound",
            (Self::Pause, Sound) => "PauseSound",
            (Self::Resume, Sound) => "ResumeSound",
            (Self::Play, Music) => "PlayMusicStream",
            (Self::Stop, Music) => "StopMusicStream",
            (Self::Pause, Music) => "PauseMusicStream",
            (Self::Resume, Music) => "ResumeMusicStream",
            (Self::Play, Stream) => "PlayAudioStream",
            (Self::Stop, Stream) => "StopAudioStream",
            (Self::Pause, Stream) => "PauseAudioStream",
            (Self::Resume, Stream) => "ResumeAudioStream",
        }
    }
}

/// Textured draw calls
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextureDraw<'a> {
    /// Draw at integer coordinates
    Basic {
        /// X
        x: i32,
        /// Y
        y: i32,
        /// Tint
        tint: Color,
    },
    /// Draw at a position vector
    V {
        /// Top-left corner
        position: Vector2,
        /// Tint
        tint: Color,
    },
    /// Draw with rotation and scale
    Ex {
        /// Top-left corner
        position: Vector2,
        /// Rotation in degrees
        rotation: f32,
        /// Uniform scale
        scale: f32,
        /// Tint
        tint: Color,
    },
    /// Draw a part of the texture
    Rec {
        /// Source region
        source: Rectangle,
        /// Top-left corner
        position: Vector2,
        /// Tint
        tint: Color,
    },
    /// Draw with tiling and offset parameters
    Quad {
        /// Tiling factors
        tiling: Vector2,
        /// Texture offset
        offset: Vector2,
        /// Destination quad
        quad: Rectangle,
        /// Tint
        tint: Color,
    },
    /// Draw a part of the texture tiled over a destination rectangle
    Tiled {
        /// Source region
        source: Rectangle,
        /// Destination region
        dest: Rectangle,
        /// Rotation origin
        origin: Vector2,
        /// Rotation in degrees
        rotation: f32,
        /// Tile scale
        scale: f32,
        /// Tint
        tint: Color,
    },
    /// Draw a part of the texture into a destination rectangle
    Pro {
        /// Source region
        source: Rectangle,
        /// Destination region
        dest: Rectangle,
        /// Rotation origin
        origin: Vector2,
        /// Rotation in degrees
        rotation: f32,
        /// Tint
        tint: Color,
    },
    /// Draw a stretchable n-patch
    NPatch {
        /// Patch layout
        info: NPatchInfo,
        /// Destination region
        dest: Rectangle,
        /// Rotation origin
        origin: Vector2,
        /// Rotation in degrees
        rotation: f32,
        /// Tint
        tint: Color,
    },
    /// Draw a textured polygon
    Poly {
        /// Polygon center
        center: Vector2,
        /// Vertex positions
        points: &'a [Vector2],
        /// Texture coordinates, one per point
        texcoords: &'a [Vector2],
        /// Tint
        tint: Color,
    },
}

impl TextureDraw<'_> {
    /// Native entry point
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Basic { .. } => "DrawTexture",
            Self::V { .. } => "DrawTextureV",
            Self::Ex { .. } => "DrawTextureEx",
            Self::Rec { .. } => "DrawTextureRec",
            Self::Quad { .. } => "DrawTextureQuad",
            Self::Tiled { .. } => "DrawTextureTiled",
            Self::Pro { .. } => "DrawTexturePro",
            Self::NPatch { .. } => "DrawTextureNPatch",
            Self::Poly { .. } => "DrawTexturePoly",
        }
    }
}

/// Begin/end pair categories sharing the native mode stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    /// Frame drawing
    Drawing,
    /// 2D camera
    Mode2D,
    /// 3D camera
    Mode3D,
    /// Render texture target
    Texture,
    /// Custom shader
    Shader,
    /// Blending mode
    Blend,
    /// Scissor rectangle
    Scissor,
}

impl ModeKind {
    /// Native entry point that opens this mode
    pub fn begin_symbol(&self) -> &'static str {
        match self {
            Self::Drawing => "BeginDrawing",
            Self::Mode2D => "BeginMode2D",
            Self::Mode3D => "BeginMode3D",
            Self::Texture => "BeginTextureMode",
            Self::Shader => "BeginShaderMode",
            Self::Blend => "BeginBlendMode",
            Self::Scissor => "BeginScissorMode",
        }
    }

    /// Native entry point that closes this mode
    pub fn end_symbol(&self) -> &'static str {
        match self {
            Self::Drawing => "EndDrawing",
            Self::Mode2D => "EndMode2D",
            Self::Mode3D => "EndMode3D",
            Self::Texture => "EndTextureMode",
            Self::Shader => "EndShaderMode",
            Self::Blend => "EndBlendMode",
            Self::Scissor => "EndScissorMode",
        }
    }
}

/// Arguments of a begin call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModeBegin {
    /// `BeginDrawing()`
    Drawing,
    /// `BeginMode2D(camera)`
    Mode2D(Camera2D),
    /// `BeginMode3D(camera)`
    Mode3D(Camera3D),
    /// `BeginTextureMode(target)`
    Texture(ffi::RenderTexture),
    /// `BeginShaderMode(shader)`
    Shader(ffi::Shader),
    /// `BeginBlendMode(mode)`
    Blend(BlendMode),
    /// `BeginScissorMode(x, y, width, height)`
    Scissor {
        /// Left edge
        x: i32,
        /// Top edge
        y: i32,
        /// Width
        width: i32,
        /// Height
        height: i32,
    },
}

impl ModeBegin {
    /// Category of this begin call
    pub fn kind(&self) -> ModeKind {
        match self {
            Self::Drawing => ModeKind::Drawing,
            Self::Mode2D(_) => ModeKind::Mode2D,
            Self::Mode3D(_) => ModeKind::Mode3D,
            Self::Texture(_) => ModeKind::Texture,
            Self::Shader(_) => ModeKind::Shader,
            Self::Blend(_) => ModeKind::Blend,
            Self::Scissor { .. } => ModeKind::Scissor,
        }
    }

    /// Native entry point
    pub fn symbol(&self) -> &'static str {
        self.kind().begin_symbol()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renamed_entry_points() {
        // Rust-side names that differ from the native symbol
        assert_eq!(ImageOp::ToPot(Color::BLANK).symbol(), "ImageToPOT");
        assert_eq!(ImageOp::ResizeNn { width: 1, height: 1 }.symbol(), "ImageResizeNN");
        assert_eq!(ImageOp::RotateCcw.symbol(), "ImageRotateCCW");
        assert_eq!(
            MeshShape::HemiSphere { radius: 1.0, rings: 4, slices: 4 }.symbol(),
            "GenMeshHemiSphere"
        );
        assert_eq!(Playback::Play.symbol(PlaybackTarget::Music), "PlayMusicStream");
        assert_eq!(Playback::Stop.symbol(PlaybackTarget::Stream), "StopAudioStream");
    }

    #[test]
    fn test_mode_symbols_pair_up() {
        let begin = ModeBegin::Scissor { x: 0, y: 0, width: 8, height: 8 };
        assert_eq!(begin.kind(), ModeKind::Scissor);
        assert_eq!(begin.symbol(), "BeginScissorMode");
        assert_eq!(begin.kind().end_symbol(), "EndScissorMode");
        assert_eq!(ModeBegin::Blend(BlendMode::Additive).symbol(), "BeginBlendMode");
    }

    #[test]
    fn test_generator_size() {
        let gen = ImageGen::Checked {
            width: 64,
            height: 32,
            checks_x: 8,
            checks_y: 8,
            col1: Color::RED,
            col2: Color::BLUE,
        };
        assert_eq!(gen.size(), (64, 32));
        assert_eq!(gen.symbol(), "GenImageChecked");
    }

    #[test]
    fn test_texture_draw_symbols() {
        let points = [Vector2::ZERO];
        let poly = TextureDraw::Poly {
            center: Vector2::ZERO,
            points: &points,
            texcoords: &points,
            tint: Color::WHITE,
        };
        assert_eq!(poly.symbol(), "DrawTexturePoly");
        assert_eq!(TextureDraw::Basic { x: 0, y: 0, tint: Color::WHITE }.symbol(), "DrawTexture");
    }
}
