//! Glyph atlases and text drawing
//!
//! [`Font`] owns a loaded atlas. The library's built-in font is owned by the
//! native side and only ever reachable as a [`FontView`]. Both draw through
//! [`TextFont`].

use std::fmt;
use std::path::Path;

use super::{Image, TextureView};
use crate::backend::NativeBackend;
use crate::core::Context;
use crate::error::{BindingError, BindingResult};
use crate::ffi::{self, CharInfo};
use crate::foundation::strings::{native_len, path_to_cstring, to_cstring};
use crate::foundation::{Color, Rectangle, Vector2};
use crate::resource::{native_wrapper, NativeResource, Resource, ResourceKind};

/// Glyph atlas in GPU memory
pub struct Font<'a> {
    res: Resource<'a, ffi::Font>,
}

native_wrapper!(Font, ffi::Font, Context<'_>);

impl<'a> Font<'a> {
    pub(crate) fn acquire(
        backend: &'a dyn NativeBackend,
        raw: ffi::Font,
        origin: impl fmt::Display,
    ) -> BindingResult<Self> {
        Ok(Self {
            res: Resource::acquire(backend, raw, origin)?,
        })
    }

    /// The library's built-in font
    pub fn default_font<'v>(ctx: &'v Context<'_>) -> BindingResult<FontView<'v>> {
        let raw = ctx.backend().font_default();
        if !raw.is_loaded() {
            return Err(BindingError::LoadFailed {
                kind: ResourceKind::Font,
                origin: "default font".to_string(),
            });
        }
        Ok(FontView::new(raw, ctx.backend()))
    }

    /// Load a font file with its default size and character set
    pub fn load(ctx: &'a Context<'_>, path: impl AsRef<Path>) -> BindingResult<Self> {
        let path = path.as_ref();
        let file = path_to_cstring(path)?;
        let raw = ctx.backend().load_font(&file);
        Self::acquire(ctx.backend(), raw, path.display())
    }

    /// Load a font file at `size` pixels
    ///
    /// `None` loads the 95 printable ASCII characters.
    pub fn load_ex(
        ctx: &'a Context<'_>,
        path: impl AsRef<Path>,
        size: i32,
        codepoints: Option<&[i32]>,
    ) -> BindingResult<Self> {
        let path = path.as_ref();
        let file = path_to_cstring(path)?;
        if let Some(cps) = codepoints {
            native_len(cps.len())?;
        }
        let raw = ctx.backend().load_font_ex(&file, size, codepoints);
        Self::acquire(ctx.backend(), raw, path.display())
    }

    /// Build a font from an XNA-style glyph sheet separated by `key` pixels
    pub fn from_image(image: &Image<'a>, key: Color, first_char: i32) -> BindingResult<Self> {
        let backend = image.backend();
        let raw = backend.load_font_from_image(*image.raw(), key, first_char);
        Self::acquire(backend, raw, format_args!("image {:#x}", image.handle()))
    }

    /// Decode an in-memory font file, `file_type` is the extension such as `".ttf"`
    pub fn from_memory(
        ctx: &'a Context<'_>,
        file_type: &str,
        data: &[u8],
        size: i32,
        codepoints: Option<&[i32]>,
    ) -> BindingResult<Self> {
        let kind = to_cstring(file_type)?;
        native_len(data.len())?;
        if let Some(cps) = codepoints {
            native_len(cps.len())?;
        }
        let raw = ctx
            .backend()
            .load_font_from_memory(&kind, data, size, codepoints);
        Self::acquire(ctx.backend(), raw, format_args!("memory ({})", file_type))
    }

    /// Non-owning view of this font
    pub fn view(&self) -> FontView<'_> {
        FontView::new(*self.raw(), self.backend())
    }
}

/// Font owned by someone else
#[derive(Clone, Copy)]
pub struct FontView<'v> {
    raw: ffi::Font,
    backend: &'v dyn NativeBackend,
}

impl<'v> FontView<'v> {
    fn new(raw: ffi::Font, backend: &'v dyn NativeBackend) -> Self {
        Self { raw, backend }
    }
}

impl fmt::Debug for FontView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FontView").field(&self.raw).finish()
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Font<'_> {}
    impl Sealed for super::FontView<'_> {}
}

/// Glyph data and text drawing shared by owned fonts and views
///
/// Sealed: the glyph accessors read native arrays that only this crate's
/// font types keep alive.
pub trait TextFont: sealed::Sealed {
    /// Raw native struct
    fn raw_font(&self) -> ffi::Font;

    /// Backend the font lives in
    fn native(&self) -> &dyn NativeBackend;

    /// Size the glyphs were rasterized at
    fn base_size(&self) -> i32 {
        self.raw_font().base_size
    }

    /// Number of glyphs
    fn glyph_count(&self) -> i32 {
        self.raw_font().chars_count
    }

    /// Padding around each glyph in the atlas
    fn glyph_padding(&self) -> i32 {
        self.raw_font().chars_padding
    }

    /// Atlas rectangle of each glyph
    fn recs(&self) -> &[Rectangle] {
        let raw = self.raw_font();
        // SAFETY: the native loader allocates `chars_count` rectangles that
        // live until the font is unloaded, which cannot happen while `self`
        // is borrowed.
        unsafe { glyph_slice(raw.recs, raw.chars_count) }
    }

    /// Metrics of each glyph
    fn glyphs(&self) -> &[CharInfo] {
        let raw = self.raw_font();
        // SAFETY: as for `recs`.
        unsafe { glyph_slice(raw.chars, raw.chars_count) }
    }

    /// Atlas texture
    fn texture(&self) -> TextureView<'_> {
        TextureView::new(self.raw_font().texture, self.native())
    }

    /// Draw text at `position`
    fn draw_text(&self, text: &str, position: Vector2, font_size: f32, spacing: f32, tint: Color) -> BindingResult<()> {
        let text = to_cstring(text)?;
        self.native()
            .draw_text_ex(self.raw_font(), &text, position, font_size, spacing, tint);
        Ok(())
    }

    /// Size `text` would occupy when drawn
    fn measure_text(&self, text: &str, font_size: f32, spacing: f32) -> BindingResult<Vector2> {
        let text = to_cstring(text)?;
        Ok(self
            .native()
            .measure_text_ex(self.raw_font(), &text, font_size, spacing))
    }
}

unsafe fn glyph_slice<'s, T>(ptr: *const T, count: i32) -> &'s [T] {
    if ptr.is_null() || count <= 0 {
        &[]
    } else {
        std::slice::from_raw_parts(ptr, count as usize)
    }
}

impl TextFont for Font<'_> {
    fn raw_font(&self) -> ffi::Font {
        *self.raw()
    }

    fn native(&self) -> &dyn NativeBackend {
        self.backend()
    }
}

impl TextFont for FontView<'_> {
    fn raw_font(&self) -> ffi::Font {
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

    #[test]
    fn test_default_font_is_never_unloaded() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &WindowConfig::default()).unwrap();
        {
            let font = Font::default_font(&ctx).unwrap();
            assert_eq!(font.glyph_count(), 95);
            assert_eq!(font.recs().len(), 95);
            font.draw_text("hello", Vector2::ZERO, 10.0, 1.0, Color::BLACK).unwrap();
        }
        assert!(backend.unloads().is_empty());
    }

    #[test]
    fn test_codepoints_define_glyphs() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &WindowConfig::default()).unwrap();
        let codepoints = [0x41, 0x42, 0x263A];
        let font = Font::load_ex(&ctx, "font.ttf", 24, Some(&codepoints)).unwrap();

        assert_eq!(font.base_size(), 24);
        let values: Vec<i32> = font.glyphs().iter().map(|g| g.value).collect();
        assert_eq!(values, codepoints);
        assert_eq!(font.recs()[2].x, 48.0);
    }

    #[test]
    fn test_atlas_texture_freed_with_font() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &WindowConfig::default()).unwrap();
        let font = Font::load(&ctx, "font.ttf").unwrap();
        let atlas_id = font.texture().id();
        assert_ne!(atlas_id, 0);

        font.unload();
        assert_eq!(backend.unload_count("UnloadFont"), 1);
        assert_eq!(backend.unload_count("UnloadTexture"), 0);
    }

    #[test]
    fn test_empty_memory_font_fails() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &WindowConfig::default()).unwrap();

        assert!(Font::from_memory(&ctx, ".ttf", &[], 16, None).is_err());
        let font = Font::from_memory(&ctx, ".ttf", &[0u8; 4], 16, None).unwrap();
        let size = font.measure_text("abcd", 16.0, 2.0).unwrap();
        assert_eq!(size, Vector2::new(38.0, 16.0));
    }
}
