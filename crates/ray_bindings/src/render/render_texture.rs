//! Off-screen render targets

use std::fmt;

use super::TextureView;
use crate::backend::NativeBackend;
use crate::core::Context;
use crate::error::BindingResult;
use crate::ffi;
use crate::resource::{native_wrapper, Resource};

/// Framebuffer with a color and a depth attachment
///
/// Both attachments are freed together by `UnloadRenderTexture`; they are only
/// reachable as views.
pub struct RenderTexture2D<'a> {
    res: Resource<'a, ffi::RenderTexture>,
}

native_wrapper!(RenderTexture2D, ffi::RenderTexture, Context<'_>);

impl<'a> RenderTexture2D<'a> {
    pub(crate) fn acquire(
        backend: &'a dyn NativeBackend,
        raw: ffi::RenderTexture,
        origin: impl fmt::Display,
    ) -> BindingResult<Self> {
        Ok(Self {
            res: Resource::acquire(backend, raw, origin)?,
        })
    }

    /// Create a render target of the given size
    pub fn load(ctx: &'a Context<'_>, width: i32, height: i32) -> BindingResult<Self> {
        let raw = ctx.backend().load_render_texture(width, height);
        Self::acquire(ctx.backend(), raw, format_args!("{}x{} target", width, height))
    }

    /// Framebuffer object id
    pub fn id(&self) -> u32 {
        self.raw().id
    }

    /// Color attachment
    pub fn texture(&self) -> TextureView<'_> {
        TextureView::new(self.raw().texture, self.backend())
    }

    /// Depth attachment
    pub fn depth(&self) -> TextureView<'_> {
        TextureView::new(self.raw().depth, self.backend())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;
    use crate::config::WindowConfig;
    use crate::foundation::Color;
    use crate::render::DrawTexture;

    #[test]
    fn test_views_share_one_unload() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &WindowConfig::default()).unwrap();
        let target = RenderTexture2D::load(&ctx, 128, 64).unwrap();

        assert_eq!(target.texture().width(), 128);
        assert_eq!(target.depth().height(), 64);
        assert_ne!(target.texture().id(), target.depth().id());
        target.texture().draw(0, 0, Color::WHITE);

        target.unload();
        assert_eq!(backend.unload_count("UnloadRenderTexture"), 1);
        assert_eq!(backend.unload_count("UnloadTexture"), 0);
    }

    #[test]
    fn test_failed_target() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &WindowConfig::default()).unwrap();
        backend.set_fail_loads(true);

        assert!(RenderTexture2D::load(&ctx, 16, 16).is_err());
        assert!(backend.unloads().is_empty());
    }
}
