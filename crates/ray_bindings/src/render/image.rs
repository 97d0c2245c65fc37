//! CPU-side images
//!
//! Every in-place mutator goes through [`Image::apply`], which hands the raw
//! struct to the native function by reference and keeps whatever the native
//! side wrote back (new size, format, data pointer).

use std::fmt;
use std::path::Path;

use super::{TextFont, Texture2D};
use crate::backend::{ImageGen, ImageOp, NativeBackend};
use crate::core::Context;
use crate::error::{BindingError, BindingResult};
use crate::ffi::{self, CubemapLayout, PixelFormat};
use crate::foundation::strings::{native_len, path_to_cstring, to_cstring};
use crate::foundation::{Color, Rectangle, Vector2};
use crate::resource::{native_wrapper, Resource};

/// Pixel data in CPU memory
pub struct Image<'a> {
    res: Resource<'a, ffi::Image>,
}

native_wrapper!(Image, ffi::Image, Context<'_>);

impl<'a> Image<'a> {
    pub(crate) fn acquire(
        backend: &'a dyn NativeBackend,
        raw: ffi::Image,
        origin: impl fmt::Display,
    ) -> BindingResult<Self> {
        Ok(Self {
            res: Resource::acquire(backend, raw, origin)?,
        })
    }

    /// Load an image file
    pub fn load(ctx: &'a Context<'_>, path: impl AsRef<Path>) -> BindingResult<Self> {
        let path = path.as_ref();
        let file = path_to_cstring(path)?;
        let raw = ctx.backend().load_image(&file);
        Self::acquire(ctx.backend(), raw, path.display())
    }

    /// Load headerless pixel data, skipping `header_size` bytes
    pub fn load_raw(
        ctx: &'a Context<'_>,
        path: impl AsRef<Path>,
        width: i32,
        height: i32,
        format: PixelFormat,
        header_size: i32,
    ) -> BindingResult<Self> {
        let path = path.as_ref();
        let file = path_to_cstring(path)?;
        let raw = ctx
            .backend()
            .load_image_raw(&file, width, height, format as i32, header_size);
        Self::acquire(ctx.backend(), raw, path.display())
    }

    /// Load every frame of an animated image, returning the frame count
    ///
    /// Frames are stacked vertically in one pixel buffer.
    pub fn load_anim(ctx: &'a Context<'_>, path: impl AsRef<Path>) -> BindingResult<(Self, i32)> {
        let path = path.as_ref();
        let file = path_to_cstring(path)?;
        let (raw, frames) = ctx.backend().load_image_anim(&file);
        Ok((Self::acquire(ctx.backend(), raw, path.display())?, frames))
    }

    /// Decode an in-memory file, `file_type` is the extension such as `".png"`
    pub fn load_from_memory(ctx: &'a Context<'_>, file_type: &str, data: &[u8]) -> BindingResult<Self> {
        let kind = to_cstring(file_type)?;
        native_len(data.len())?;
        let raw = ctx.backend().load_image_from_memory(&kind, data);
        Self::acquire(ctx.backend(), raw, format_args!("memory ({})", file_type))
    }

    /// Generate an image procedurally
    pub fn generate(ctx: &'a Context<'_>, gen: ImageGen) -> BindingResult<Self> {
        let raw = ctx.backend().gen_image(gen);
        Self::acquire(ctx.backend(), raw, gen.symbol())
    }

    /// Render text with the default font
    pub fn text(ctx: &'a Context<'_>, text: &str, font_size: i32, color: Color) -> BindingResult<Self> {
        let text_c = to_cstring(text)?;
        let raw = ctx.backend().image_text(&text_c, font_size, color);
        Self::acquire(ctx.backend(), raw, format_args!("text {:?}", text))
    }

    /// Render text with `font`
    pub fn text_with_font(
        ctx: &'a Context<'_>,
        font: &impl TextFont,
        text: &str,
        font_size: f32,
        spacing: f32,
        tint: Color,
    ) -> BindingResult<Self> {
        let text_c = to_cstring(text)?;
        let raw = ctx
            .backend()
            .image_text_ex(font.raw_font(), &text_c, font_size, spacing, tint);
        Self::acquire(ctx.backend(), raw, format_args!("text {:?}", text))
    }

    /// Duplicate the pixel buffer
    pub fn copy(&self) -> BindingResult<Image<'a>> {
        let backend = self.backend();
        let raw = backend.image_copy(*self.raw());
        Self::acquire(backend, raw, format_args!("copy of {:#x}", self.handle()))
    }

    /// New image holding the `rec` part of this one
    pub fn from_region(&self, rec: Rectangle) -> BindingResult<Image<'a>> {
        let backend = self.backend();
        let raw = backend.image_from_image(*self.raw(), rec);
        Self::acquire(backend, raw, format_args!("region of {:#x}", self.handle()))
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

    /// Run an in-place native mutator
    pub fn apply(&mut self, op: ImageOp) {
        let backend = self.backend();
        backend.image_op(self.res.raw_mut(), op);
    }

    /// Convert to another pixel format
    pub fn set_format(&mut self, format: PixelFormat) {
        self.apply(ImageOp::Format(format));
    }

    /// Grow to power-of-two dimensions, filling with `fill`
    pub fn to_pot(&mut self, fill: Color) {
        self.apply(ImageOp::ToPot(fill));
    }

    /// Crop to `rec`
    pub fn crop(&mut self, rec: Rectangle) {
        self.apply(ImageOp::Crop(rec));
    }

    /// Crop away borders whose alpha is below `threshold`
    pub fn alpha_crop(&mut self, threshold: f32) {
        self.apply(ImageOp::AlphaCrop(threshold));
    }

    /// Replace pixels whose alpha is below `threshold` with `color`
    pub fn alpha_clear(&mut self, color: Color, threshold: f32) {
        self.apply(ImageOp::AlphaClear { color, threshold });
    }

    /// Use `mask` as this image's alpha channel
    pub fn alpha_mask(&mut self, mask: &Image<'_>) {
        self.apply(ImageOp::AlphaMask(*mask.raw()));
    }

    /// Premultiply alpha
    pub fn alpha_premultiply(&mut self) {
        self.apply(ImageOp::AlphaPremultiply);
    }

    /// Resize with bicubic scaling
    pub fn resize(&mut self, width: i32, height: i32) {
        self.apply(ImageOp::Resize { width, height });
    }

    /// Resize with nearest-neighbor scaling
    pub fn resize_nn(&mut self, width: i32, height: i32) {
        self.apply(ImageOp::ResizeNn { width, height });
    }

    /// Resize the canvas, placing the old pixels at the offset
    pub fn resize_canvas(&mut self, width: i32, height: i32, offset_x: i32, offset_y: i32, fill: Color) {
        self.apply(ImageOp::ResizeCanvas { width, height, offset_x, offset_y, fill });
    }

    /// Generate all mipmap levels
    pub fn gen_mipmaps(&mut self) {
        self.apply(ImageOp::Mipmaps);
    }

    /// Dither to 16 bpp or lower
    pub fn dither(&mut self, r_bpp: i32, g_bpp: i32, b_bpp: i32, a_bpp: i32) {
        self.apply(ImageOp::Dither { r_bpp, g_bpp, b_bpp, a_bpp });
    }

    /// Flip top to bottom
    pub fn flip_vertical(&mut self) {
        self.apply(ImageOp::FlipVertical);
    }

    /// Flip left to right
    pub fn flip_horizontal(&mut self) {
        self.apply(ImageOp::FlipHorizontal);
    }

    /// Rotate 90 degrees clockwise
    pub fn rotate_cw(&mut self) {
        self.apply(ImageOp::RotateCw);
    }

    /// Rotate 90 degrees counter-clockwise
    pub fn rotate_ccw(&mut self) {
        self.apply(ImageOp::RotateCcw);
    }

    /// Multiply every pixel by `color`
    pub fn color_tint(&mut self, color: Color) {
        self.apply(ImageOp::ColorTint(color));
    }

    /// Invert colors
    pub fn color_invert(&mut self) {
        self.apply(ImageOp::ColorInvert);
    }

    /// Convert to grayscale
    pub fn color_grayscale(&mut self) {
        self.apply(ImageOp::ColorGrayscale);
    }

    /// Adjust contrast, -100 to 100
    pub fn color_contrast(&mut self, contrast: f32) {
        self.apply(ImageOp::ColorContrast(contrast));
    }

    /// Adjust brightness, -255 to 255
    pub fn color_brightness(&mut self, brightness: i32) {
        self.apply(ImageOp::ColorBrightness(brightness));
    }

    /// Replace every `color` pixel with `replace`
    pub fn color_replace(&mut self, color: Color, replace: Color) {
        self.apply(ImageOp::ColorReplace { color, replace });
    }

    /// Fill the whole image
    pub fn clear_background(&mut self, color: Color) {
        self.apply(ImageOp::ClearBackground(color));
    }

    /// Set one pixel
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.apply(ImageOp::DrawPixel { x, y, color });
    }

    /// Draw a line
    pub fn draw_line(&mut self, start_x: i32, start_y: i32, end_x: i32, end_y: i32, color: Color) {
        self.apply(ImageOp::DrawLine { start_x, start_y, end_x, end_y, color });
    }

    /// Draw a filled circle
    pub fn draw_circle(&mut self, center_x: i32, center_y: i32, radius: i32, color: Color) {
        self.apply(ImageOp::DrawCircle { center_x, center_y, radius, color });
    }

    /// Draw a filled rectangle
    pub fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.apply(ImageOp::DrawRectangle { x, y, width, height, color });
    }

    /// Draw a rectangle outline
    pub fn draw_rectangle_lines(&mut self, rec: Rectangle, thick: i32, color: Color) {
        self.apply(ImageOp::DrawRectangleLines { rec, thick, color });
    }

    /// Draw the `src_rec` part of `src` into `dst_rec`
    pub fn draw(&mut self, src: &Image<'_>, src_rec: Rectangle, dst_rec: Rectangle, tint: Color) {
        self.apply(ImageOp::Draw {
            src: *src.raw(),
            src_rec,
            dst_rec,
            tint,
        });
    }

    /// Draw text with the default font
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color) -> BindingResult<()> {
        let text = to_cstring(text)?;
        let backend = self.backend();
        backend.image_draw_text(self.res.raw_mut(), &text, x, y, font_size, color);
        Ok(())
    }

    /// Draw text with `font`
    pub fn draw_text_with_font(
        &mut self,
        font: &impl TextFont,
        text: &str,
        position: Vector2,
        font_size: f32,
        spacing: f32,
        tint: Color,
    ) -> BindingResult<()> {
        let text = to_cstring(text)?;
        let backend = self.backend();
        backend.image_draw_text_ex(
            self.res.raw_mut(),
            font.raw_font(),
            &text,
            position,
            font_size,
            spacing,
            tint,
        );
        Ok(())
    }

    /// Bounding box of pixels whose alpha exceeds `threshold`
    pub fn alpha_border(&self, threshold: f32) -> Rectangle {
        self.backend().image_alpha_border(*self.raw(), threshold)
    }

    /// Every pixel as RGBA8, row by row
    pub fn colors(&self) -> Vec<Color> {
        self.backend().load_image_colors(*self.raw())
    }

    /// Distinct colors, at most `max_size` of them
    pub fn palette(&self, max_size: usize) -> BindingResult<Vec<Color>> {
        let max = native_len(max_size)?;
        Ok(self.backend().load_image_palette(*self.raw(), max))
    }

    /// Write the image to a file, format chosen by extension
    pub fn export(&self, path: impl AsRef<Path>) -> BindingResult<()> {
        let path = path.as_ref();
        let file = path_to_cstring(path)?;
        if self.backend().export_image(*self.raw(), &file) {
            Ok(())
        } else {
            Err(BindingError::ExportFailed(path.display().to_string()))
        }
    }

    /// Write the pixels as a C source array
    pub fn export_as_code(&self, path: impl AsRef<Path>) -> BindingResult<()> {
        let path = path.as_ref();
        let file = path_to_cstring(path)?;
        if self.backend().export_image_as_code(*self.raw(), &file) {
            Ok(())
        } else {
            Err(BindingError::ExportFailed(path.display().to_string()))
        }
    }

    /// Upload as a texture
    pub fn to_texture(&self) -> BindingResult<Texture2D<'a>> {
        Texture2D::from_image(self)
    }

    /// Upload as a cubemap texture
    pub fn to_cubemap(&self, layout: CubemapLayout) -> BindingResult<Texture2D<'a>> {
        Texture2D::cubemap(self, layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;
    use crate::config::WindowConfig;

    fn context(backend: &RecordingBackend) -> Context<'_> {
        Context::init(backend, &WindowConfig::new(320, 200, "images")).unwrap()
    }

    fn checked() -> ImageGen {
        ImageGen::Checked {
            width: 32,
            height: 16,
            checks_x: 4,
            checks_y: 4,
            col1: Color::RED,
            col2: Color::BLUE,
        }
    }

    #[test]
    fn test_generate_copies_dimensions() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        let image = Image::generate(&ctx, checked()).unwrap();

        assert_eq!((image.width(), image.height()), (32, 16));
        assert_eq!(image.format(), Some(PixelFormat::UncompressedR8G8B8A8));
        assert_eq!(backend.count("GenImageChecked"), 1);
    }

    #[test]
    fn test_empty_memory_buffer_fails_to_load() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);

        let err = Image::load_from_memory(&ctx, ".png", &[]).unwrap_err();
        assert!(matches!(err, BindingError::LoadFailed { .. }));
        assert_eq!(backend.unload_count("UnloadImage"), 0);
    }

    #[test]
    fn test_resize_keeps_native_write_back() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        let mut image = Image::generate(&ctx, checked()).unwrap();
        let before = image.handle();

        image.resize(64, 8);

        assert_eq!((image.width(), image.height()), (64, 8));
        assert_ne!(image.handle(), before);
        assert_eq!(
            backend.image_ops(),
            vec![(before, ImageOp::Resize { width: 64, height: 8 })]
        );

        // Only the reallocated buffer is freed
        drop(image);
        assert_eq!(backend.unloads().len(), 1);
        assert_ne!(backend.unloads()[0].handle, before);
    }

    #[test]
    fn test_ops_forwarded_unchanged() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        let mut image = Image::generate(&ctx, checked()).unwrap();
        let rec = Rectangle::new(1.0, 2.0, 3.0, 4.0);

        image.draw_rectangle_lines(rec, 2, Color::GOLD);
        image.color_contrast(-12.5);
        image.alpha_clear(Color::BLANK, 0.25);

        let ops: Vec<ImageOp> = backend.image_ops().into_iter().map(|(_, op)| op).collect();
        assert_eq!(
            ops,
            vec![
                ImageOp::DrawRectangleLines { rec, thick: 2, color: Color::GOLD },
                ImageOp::ColorContrast(-12.5),
                ImageOp::AlphaClear { color: Color::BLANK, threshold: 0.25 },
            ]
        );
    }

    #[test]
    fn test_draw_passes_source_image() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        let mut dst = Image::generate(&ctx, checked()).unwrap();
        let src = Image::text(&ctx, "hi", 10, Color::BLACK).unwrap();
        let rec = Rectangle::new(0.0, 0.0, 10.0, 10.0);

        dst.draw(&src, rec, rec, Color::WHITE);

        match backend.image_ops().last() {
            Some((_, ImageOp::Draw { src: raw, .. })) => assert_eq!(raw, src.raw()),
            other => panic!("expected ImageDraw, got {:?}", other),
        }
    }

    #[test]
    fn test_colors_and_palette_are_owned() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        backend.live_mut().image_fill = Color::MAROON;
        let image = Image::generate(&ctx, checked()).unwrap();

        let colors = image.colors();
        assert_eq!(colors.len(), 32 * 16);
        assert!(colors.iter().all(|c| *c == Color::MAROON));
        assert_eq!(image.palette(1).unwrap(), vec![Color::MAROON]);

        let calls = backend.calls();
        assert!(calls.contains(&"UnloadImageColors"));
        assert!(calls.contains(&"UnloadImagePalette"));
    }

    #[test]
    fn test_export_failure_is_an_error() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        let image = Image::generate(&ctx, checked()).unwrap();

        assert!(image.export("out.png").is_ok());
        backend.live_mut().export_succeeds = false;
        match image.export_as_code("out.h") {
            Err(BindingError::ExportFailed(path)) => assert_eq!(path, "out.h"),
            other => panic!("expected ExportFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_draw_text_rejects_nul() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        let mut image = Image::generate(&ctx, checked()).unwrap();

        assert!(image.draw_text("a\0b", 0, 0, 10, Color::BLACK).is_err());
        assert_eq!(backend.count("ImageDrawText"), 0);
        image.draw_text("ab", 0, 0, 10, Color::BLACK).unwrap();
        assert_eq!(backend.count("ImageDrawText"), 1);
    }

    #[test]
    fn test_texture_from_image_copies_size() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        let image = Image::generate(&ctx, checked()).unwrap();
        let texture = image.to_texture().unwrap();

        assert_eq!((texture.width(), texture.height()), (32, 16));
        drop(image);
        assert_eq!(texture.width(), 32);
    }
}
