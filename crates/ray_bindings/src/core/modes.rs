//! Scoped begin/end pairs
//!
//! Each `begin_*` call on [`Context`] returns a [`ModeGuard`]; dropping the
//! guard issues the matching native end call. The context keeps a stack of
//! open modes so an end that does not close the innermost mode is reported.

use std::cell::RefCell;

use log::{error, trace};

use super::Context;
use crate::backend::{ModeBegin, ModeKind, NativeBackend};
use crate::ffi::BlendMode;
use crate::foundation::{Camera2D, Camera3D};
use crate::render::{RenderTexture2D, Shader};

/// An open begin/end pair, closed on drop
#[must_use = "the mode ends as soon as the guard is dropped"]
pub struct ModeGuard<'c> {
    backend: &'c dyn NativeBackend,
    modes: &'c RefCell<Vec<ModeKind>>,
    kind: ModeKind,
}

impl ModeGuard<'_> {
    /// Mode this guard closes
    pub fn kind(&self) -> ModeKind {
        self.kind
    }

    /// Close the mode now
    pub fn end(self) {}
}

impl Drop for ModeGuard<'_> {
    fn drop(&mut self) {
        {
            let mut modes = self.modes.borrow_mut();
            match modes.iter().rposition(|open| *open == self.kind) {
                Some(pos) if pos + 1 == modes.len() => {
                    modes.pop();
                }
                Some(pos) => {
                    error!(
                        "{} issued while {:?} is still open",
                        self.kind.end_symbol(),
                        &modes[pos + 1..]
                    );
                    modes.remove(pos);
                }
                None => error!("{} issued without a matching begin", self.kind.end_symbol()),
            }
        }
        trace!("{}", self.kind.end_symbol());
        self.backend.end_mode(self.kind);
    }
}

impl<'b> Context<'b> {
    fn begin(&self, mode: ModeBegin) -> ModeGuard<'_> {
        let kind = mode.kind();
        trace!("{}", kind.begin_symbol());
        self.modes.borrow_mut().push(kind);
        self.backend().begin_mode(mode);
        ModeGuard {
            backend: self.backend(),
            modes: &self.modes,
            kind,
        }
    }

    /// Modes currently open, outermost first
    pub fn active_modes(&self) -> Vec<ModeKind> {
        self.modes.borrow().clone()
    }

    /// Start a frame
    pub fn begin_drawing(&self) -> ModeGuard<'_> {
        self.begin(ModeBegin::Drawing)
    }

    /// Draw through a 2D camera
    pub fn begin_mode_2d(&self, camera: Camera2D) -> ModeGuard<'_> {
        self.begin(ModeBegin::Mode2D(camera))
    }

    /// Draw through a 3D camera
    pub fn begin_mode_3d(&self, camera: Camera3D) -> ModeGuard<'_> {
        self.begin(ModeBegin::Mode3D(camera))
    }

    /// Draw into `target` instead of the screen
    ///
    /// The target stays borrowed until the guard is dropped.
    pub fn begin_texture_mode<'c>(&'c self, target: &'c RenderTexture2D<'_>) -> ModeGuard<'c> {
        self.begin(ModeBegin::Texture(*target.raw()))
    }

    /// Draw with a custom shader
    ///
    /// The shader stays borrowed until the guard is dropped.
    pub fn begin_shader_mode<'c>(&'c self, shader: &'c Shader<'_>) -> ModeGuard<'c> {
        self.begin(ModeBegin::Shader(*shader.raw()))
    }

    /// Draw with a blending mode
    pub fn begin_blend_mode(&self, mode: BlendMode) -> ModeGuard<'_> {
        self.begin(ModeBegin::Blend(mode))
    }

    /// Restrict drawing to a screen rectangle
    pub fn begin_scissor_mode(&self, x: i32, y: i32, width: i32, height: i32) -> ModeGuard<'_> {
        self.begin(ModeBegin::Scissor { x, y, width, height })
    }
}

#[cfg(test)]
mod tests {
    use crate::backend::recording::ModeEvent;
    use crate::backend::{ModeBegin, ModeKind, RecordingBackend};
    use crate::config::WindowConfig;
    use crate::core::Context;
    use crate::ffi::BlendMode;
    use crate::foundation::{Camera2D, Color};
    use crate::render::RenderTexture2D;

    fn context(backend: &RecordingBackend) -> Context<'_> {
        Context::init(backend, &WindowConfig::new(320, 200, "modes")).unwrap()
    }

    #[test]
    fn test_guards_end_in_reverse_order() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        {
            let _frame = ctx.begin_drawing();
            let _camera = ctx.begin_mode_2d(Camera2D::default());
            ctx.clear_background(Color::RAYWHITE);
            assert_eq!(ctx.active_modes(), vec![ModeKind::Drawing, ModeKind::Mode2D]);
        }

        let modes = backend.modes();
        assert_eq!(modes.len(), 4);
        assert_eq!(modes[0], ModeEvent::Begin(ModeBegin::Drawing));
        assert_eq!(modes[2], ModeEvent::End(ModeKind::Mode2D));
        assert_eq!(modes[3], ModeEvent::End(ModeKind::Drawing));
        assert!(ctx.active_modes().is_empty());
    }

    #[test]
    fn test_out_of_order_end_still_closes() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);

        let frame = ctx.begin_drawing();
        let blend = ctx.begin_blend_mode(BlendMode::Additive);
        drop(frame);
        assert_eq!(ctx.active_modes(), vec![ModeKind::Blend]);
        blend.end();

        assert_eq!(backend.count("EndDrawing"), 1);
        assert_eq!(backend.count("EndBlendMode"), 1);
        assert!(ctx.active_modes().is_empty());
    }

    #[test]
    fn test_texture_mode_passes_target() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        let target = RenderTexture2D::load(&ctx, 64, 64).unwrap();
        {
            let _guard = ctx.begin_texture_mode(&target);
        }

        match backend.modes()[0] {
            ModeEvent::Begin(ModeBegin::Texture(raw)) => assert_eq!(raw.id, target.id()),
            ref other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(backend.count("EndTextureMode"), 1);
    }

    #[test]
    fn test_scissor_arguments_forwarded() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        ctx.begin_scissor_mode(1, 2, 30, 40).end();

        assert_eq!(
            backend.modes()[0],
            ModeEvent::Begin(ModeBegin::Scissor { x: 1, y: 2, width: 30, height: 40 })
        );
    }
}
