//! GPU textures
//!
//! [`Texture2D`] owns a texture; [`TextureView`] borrows one embedded in a
//! render texture, font or material. Both draw through [`DrawTexture`].
//!
//! Field accessors are snapshots taken when the texture was loaded (or last
//! changed through this wrapper). Filter and wrap are write-only.

use std::fmt;
use std::path::Path;

use bytemuck::Pod;
use log::debug;

use super::Image;
use crate::backend::{NativeBackend, TextureDraw};
use crate::core::Context;
use crate::error::{BindingError, BindingResult};
use crate::ffi::{self, CubemapLayout, PixelFormat, TextureFilter, TextureWrap};
use crate::foundation::strings::{native_len, path_to_cstring};
use crate::foundation::{Color, NPatchInfo, Rectangle, Vector2};
use crate::resource::{native_wrapper, Resource};

/// Texture in GPU memory
pub struct Texture2D<'a> {
    res: Resource<'a, ffi::Texture>,
}

native_wrapper!(Texture2D, ffi::Texture, Context<'_>);

impl<'a> Texture2D<'a> {
    pub(crate) fn acquire(
        backend: &'a dyn NativeBackend,
        raw: ffi::Texture,
        origin: impl fmt::Display,
    ) -> BindingResult<Self> {
        Ok(Self {
            res: Resource::acquire(backend, raw, origin)?,
        })
    }

    /// Load a texture from an image file
    pub fn load(ctx: &'a Context<'_>, path: impl AsRef<Path>) -> BindingResult<Self> {
        let path = path.as_ref();
        let file = path_to_cstring(path)?;
        let raw = ctx.backend().load_texture(&file);
        Self::acquire(ctx.backend(), raw, path.display())
    }

    /// Upload an image to the GPU
    pub fn from_image(image: &Image<'a>) -> BindingResult<Self> {
        let backend = image.backend();
        let raw = backend.load_texture_from_image(*image.raw());
        Self::acquire(backend, raw, format_args!("image {:#x}", image.handle()))
    }

    /// Build a cubemap from an image holding all six faces
    pub fn cubemap(image: &Image<'a>, layout: CubemapLayout) -> BindingResult<Self> {
        let backend = image.backend();
        let raw = backend.load_texture_cubemap(*image.raw(), layout);
        Self::acquire(backend, raw, format_args!("cubemap {:?}", layout))
    }

    /// OpenGL texture id
    pub fn id(&self) -> u32 {
        self.raw().id
    }

    /// Width in pixels
    pub fn width(&self) -> i32 {
        self.raw().width
    }

    /// Height in pixels
    pub fn height(&self) -> i32 {
        self.raw().height
    }

    /// Number of mipmap levels
    pub fn mipmaps(&self) -> i32 {
        self.raw().mipmaps
    }

    /// Pixel format, `None` for values this crate does not know
    pub fn format(&self) -> Option<PixelFormat> {
        PixelFormat::from_raw(self.raw().format)
    }

    /// Non-owning view of this texture
    pub fn view(&self) -> TextureView<'_> {
        TextureView::new(*self.raw(), self.backend())
    }

    /// Replace the whole texture's pixels
    ///
    /// `pixels` must hold exactly one full image in the texture's format.
    pub fn update<T: Pod>(&self, pixels: &[T]) -> BindingResult<()> {
        let bytes: &[u8] = bytemuck::cast_slice(pixels);
        let expected = self.pixel_format()?.data_size(self.width(), self.height());
        check_pixel_bytes(bytes.len(), expected)?;
        self.backend().update_texture(*self.raw(), bytes);
        Ok(())
    }

    /// Replace the pixels inside `rec`
    pub fn update_rec<T: Pod>(&self, rec: Rectangle, pixels: &[T]) -> BindingResult<()> {
        let inside = rec.x >= 0.0
            && rec.y >= 0.0
            && rec.width >= 0.0
            && rec.height >= 0.0
            && rec.x + rec.width <= self.width() as f32
            && rec.y + rec.height <= self.height() as f32;
        if !inside {
            return Err(BindingError::InvalidArgument(format!(
                "rectangle {:?} is outside the {}x{} texture",
                rec,
                self.width(),
                self.height()
            )));
        }

        let bytes: &[u8] = bytemuck::cast_slice(pixels);
        let expected = self
            .pixel_format()?
            .data_size(rec.width as i32, rec.height as i32);
        check_pixel_bytes(bytes.len(), expected)?;
        self.backend().update_texture_rec(*self.raw(), rec, bytes);
        Ok(())
    }

    /// Generate mipmaps on the GPU
    pub fn gen_mipmaps(&mut self) {
        let backend = self.backend();
        backend.gen_texture_mipmaps(self.res.raw_mut());
        debug!("Texture {} now has {} mipmaps", self.id(), self.mipmaps());
    }

    /// Set the scaling filter
    pub fn set_filter(&self, filter: TextureFilter) {
        self.backend().set_texture_filter(*self.raw(), filter);
    }

    /// Set the wrapping mode
    pub fn set_wrap(&self, wrap: TextureWrap) {
        self.backend().set_texture_wrap(*self.raw(), wrap);
    }

    /// Read the texture back into a CPU image
    pub fn to_image(&self) -> BindingResult<Image<'a>> {
        let backend = self.backend();
        let raw = backend.texture_to_image(*self.raw());
        Image::acquire(backend, raw, format_args!("texture {}", self.id()))
    }

    fn pixel_format(&self) -> BindingResult<PixelFormat> {
        self.format().ok_or_else(|| {
            BindingError::InvalidArgument(format!("unknown pixel format {}", self.raw().format))
        })
    }
}

fn check_pixel_bytes(actual: usize, expected: usize) -> BindingResult<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(BindingError::InvalidArgument(format!(
            "pixel buffer holds {} bytes, the texture format needs {}",
            actual, expected
        )))
    }
}

/// Borrowed texture owned by something else
///
/// Dropping a view never unloads anything.
#[derive(Clone, Copy)]
pub struct TextureView<'v> {
    raw: ffi::Texture,
    backend: &'v dyn NativeBackend,
}

impl<'v> TextureView<'v> {
    pub(crate) fn new(raw: ffi::Texture, backend: &'v dyn NativeBackend) -> Self {
        Self { raw, backend }
    }

    /// Raw native struct
    pub fn raw(&self) -> &ffi::Texture {
        &self.raw
    }

    /// OpenGL texture id
    pub fn id(&self) -> u32 {
        self.raw.id
    }

    /// Width in pixels
    pub fn width(&self) -> i32 {
        self.raw.width
    }

    /// Height in pixels
    pub fn height(&self) -> i32 {
        self.raw.height
    }

    /// Number of mipmap levels
    pub fn mipmaps(&self) -> i32 {
        self.raw.mipmaps
    }

    /// Pixel format, `None` for values this crate does not know
    pub fn format(&self) -> Option<PixelFormat> {
        PixelFormat::from_raw(self.raw.format)
    }
}

impl fmt::Debug for TextureView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextureView").field(&self.raw).finish()
    }
}

/// Textured draw calls shared by owned textures and views
pub trait DrawTexture {
    /// Raw texture handed to the draw call
    fn raw_texture(&self) -> ffi::Texture;

    /// Backend the texture lives in
    fn native(&self) -> &dyn NativeBackend;

    /// Draw at integer coordinates
    fn draw(&self, x: i32, y: i32, tint: Color) {
        self.native()
            .draw_texture(self.raw_texture(), TextureDraw::Basic { x, y, tint });
    }

    /// Draw at a position
    fn draw_v(&self, position: Vector2, tint: Color) {
        self.native()
            .draw_texture(self.raw_texture(), TextureDraw::V { position, tint });
    }

    /// Draw with rotation (degrees) and uniform scale
    fn draw_ex(&self, position: Vector2, rotation: f32, scale: f32, tint: Color) {
        self.native().draw_texture(
            self.raw_texture(),
            TextureDraw::Ex { position, rotation, scale, tint },
        );
    }

    /// Draw the `source` part of the texture
    fn draw_rec(&self, source: Rectangle, position: Vector2, tint: Color) {
        self.native().draw_texture(
            self.raw_texture(),
            TextureDraw::Rec { source, position, tint },
        );
    }

    /// Draw into `quad` with tiling and offset
    fn draw_quad(&self, tiling: Vector2, offset: Vector2, quad: Rectangle, tint: Color) {
        self.native().draw_texture(
            self.raw_texture(),
            TextureDraw::Quad { tiling, offset, quad, tint },
        );
    }

    /// Tile the `source` part over `dest`
    fn draw_tiled(
        &self,
        source: Rectangle,
        dest: Rectangle,
        origin: Vector2,
        rotation: f32,
        scale: f32,
        tint: Color,
    ) {
        self.native().draw_texture(
            self.raw_texture(),
            TextureDraw::Tiled { source, dest, origin, rotation, scale, tint },
        );
    }

    /// Draw the `source` part into `dest`
    fn draw_pro(&self, source: Rectangle, dest: Rectangle, origin: Vector2, rotation: f32, tint: Color) {
        self.native().draw_texture(
            self.raw_texture(),
            TextureDraw::Pro { source, dest, origin, rotation, tint },
        );
    }

    /// Draw a stretchable n-patch into `dest`
    fn draw_npatch(&self, info: NPatchInfo, dest: Rectangle, origin: Vector2, rotation: f32, tint: Color) {
        self.native().draw_texture(
            self.raw_texture(),
            TextureDraw::NPatch { info, dest, origin, rotation, tint },
        );
    }

    /// Draw a textured polygon, one texture coordinate per point
    fn draw_poly(
        &self,
        center: Vector2,
        points: &[Vector2],
        texcoords: &[Vector2],
        tint: Color,
    ) -> BindingResult<()> {
        if points.len() != texcoords.len() {
            return Err(BindingError::InvalidArgument(format!(
                "{} points but {} texture coordinates",
                points.len(),
                texcoords.len()
            )));
        }
        native_len(points.len())?;
        self.native().draw_texture(
            self.raw_texture(),
            TextureDraw::Poly { center, points, texcoords, tint },
        );
        Ok(())
    }
}

impl DrawTexture for Texture2D<'_> {
    fn raw_texture(&self) -> ffi::Texture {
        *self.raw()
    }

    fn native(&self) -> &dyn NativeBackend {
        self.backend()
    }
}

impl DrawTexture for TextureView<'_> {
    fn raw_texture(&self) -> ffi::Texture {
        self.raw
    }

    fn native(&self) -> &dyn NativeBackend {
        self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;
    use crate::config::WindowConfig;

    fn context(backend: &RecordingBackend) -> Context<'_> {
        Context::init(backend, &WindowConfig::new(320, 200, "textures")).unwrap()
    }

    #[test]
    fn test_load_failure_reports_path() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        backend.set_fail_loads(true);

        let err = Texture2D::load(&ctx, "missing.png").unwrap_err();
        assert!(err.to_string().contains("missing.png"));
        assert_eq!(backend.unload_count("UnloadTexture"), 0);
    }

    #[test]
    fn test_update_checks_byte_length() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        backend.set_next_texture(ffi::Texture {
            id: 5,
            width: 2,
            height: 2,
            mipmaps: 1,
            format: PixelFormat::UncompressedR8G8B8A8 as i32,
        });
        let texture = Texture2D::load(&ctx, "a.png").unwrap();

        assert!(texture.update(&[0u8; 15]).is_err());
        assert!(backend.uploads().is_empty());

        texture.update(&[Color::RED; 4]).unwrap();
        let uploads = backend.uploads();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].handle, 5);
        assert_eq!(uploads[0].bytes.len(), 16);
        assert_eq!(&uploads[0].bytes[..4], &[230, 41, 55, 255]);
    }

    #[test]
    fn test_update_rec_bounds() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        let texture = Texture2D::load(&ctx, "a.png").unwrap();

        let outside = Rectangle::new(texture.width() as f32 - 1.0, 0.0, 2.0, 2.0);
        assert!(texture.update_rec(outside, &[Color::WHITE; 4]).is_err());

        let inside = Rectangle::new(1.0, 1.0, 2.0, 1.0);
        texture.update_rec(inside, &[Color::WHITE; 2]).unwrap();
        assert_eq!(backend.count("UpdateTextureRec"), 1);
    }

    #[test]
    fn test_gen_mipmaps_rereads_fields() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        backend.set_next_texture(ffi::Texture { id: 3, width: 8, height: 8, mipmaps: 1, format: 7 });
        let mut texture = Texture2D::load(&ctx, "a.png").unwrap();

        texture.gen_mipmaps();
        assert_eq!(texture.mipmaps(), 4);
    }

    #[test]
    fn test_draw_poly_requires_matching_lengths() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        let texture = Texture2D::load(&ctx, "a.png").unwrap();
        let points = [Vector2::ZERO, Vector2::ONE, Vector2::new(1.0, 0.0)];

        assert!(texture
            .draw_poly(Vector2::ZERO, &points, &points[..2], Color::WHITE)
            .is_err());
        assert_eq!(backend.count("DrawTexturePoly"), 0);

        texture
            .draw_poly(Vector2::ZERO, &points, &points, Color::WHITE)
            .unwrap();
        assert_eq!(backend.count("DrawTexturePoly"), 1);
    }

    #[test]
    fn test_filter_and_wrap_forwarded() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        let texture = Texture2D::load(&ctx, "a.png").unwrap();

        texture.set_filter(TextureFilter::Trilinear);
        texture.set_wrap(TextureWrap::MirrorClamp);
        assert_eq!(backend.values("SetTextureFilter"), vec![2.0]);
        assert_eq!(backend.values("SetTextureWrap"), vec![3.0]);
    }

    #[test]
    fn test_view_draws_without_owning() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        let texture = Texture2D::load(&ctx, "a.png").unwrap();
        {
            let view = texture.view();
            view.draw(0, 0, Color::WHITE);
            assert_eq!(view.id(), texture.id());
        }
        assert_eq!(backend.unload_count("UnloadTexture"), 0);
        texture.unload();
        assert_eq!(backend.unload_count("UnloadTexture"), 1);
    }
}
