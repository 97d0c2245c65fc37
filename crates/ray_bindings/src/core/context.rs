//! Window and graphics context
//!
//! [`Context`] is the single owner of the native window. Every graphics
//! resource borrows it, so the window cannot be closed while a texture,
//! shader or font is still alive.

use std::cell::{Cell, RefCell};

use log::{debug, error, info, trace};

use super::monitor::MonitorInfo;
use crate::backend::{ModeKind, NativeBackend};
use crate::config::WindowConfig;
use crate::error::{BindingError, BindingResult};
use crate::foundation::strings::to_cstring;
use crate::foundation::{Color, Vector2};

bitflags::bitflags! {
    /// Window configuration and state flags (`FLAG_*`)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ConfigFlags: u32 {
        /// Set to try enabling V-Sync on GPU
        const VSYNC_HINT = 0x0000_0040;
        /// Set to run program in fullscreen
        const FULLSCREEN_MODE = 0x0000_0002;
        /// Set to allow resizable window
        const WINDOW_RESIZABLE = 0x0000_0004;
        /// Set to disable window decoration (frame and buttons)
        const WINDOW_UNDECORATED = 0x0000_0008;
        /// Set to hide window
        const WINDOW_HIDDEN = 0x0000_0080;
        /// Set to minimize window (iconify)
        const WINDOW_MINIMIZED = 0x0000_0200;
        /// Set to maximize window (expanded to monitor)
        const WINDOW_MAXIMIZED = 0x0000_0400;
        /// Set to window non focused
        const WINDOW_UNFOCUSED = 0x0000_0800;
        /// Set to window always on top
        const WINDOW_TOPMOST = 0x0000_1000;
        /// Set to allow windows running while minimized
        const WINDOW_ALWAYS_RUN = 0x0000_0100;
        /// Set to allow transparent framebuffer
        const WINDOW_TRANSPARENT = 0x0000_0010;
        /// Set to support HighDPI
        const WINDOW_HIGHDPI = 0x0000_2000;
        /// Set to try enabling MSAA 4X
        const MSAA_4X_HINT = 0x0000_0020;
        /// Set to try enabling interlaced video format (for V3D)
        const INTERLACED_HINT = 0x0001_0000;
    }
}

/// Owner of the native window and OpenGL context
///
/// Values the native library can only set are cached here so they can be
/// read back: title, minimum size, cursor lock, mouse offset and scale.
pub struct Context<'b> {
    backend: &'b dyn NativeBackend,
    title: RefCell<String>,
    min_size: Cell<(i32, i32)>,
    cursor_enabled: Cell<bool>,
    mouse_offset: Cell<(i32, i32)>,
    mouse_scale: Cell<(f32, f32)>,
    pub(super) modes: RefCell<Vec<ModeKind>>,
}

impl<'b> Context<'b> {
    /// Open the window described by `settings`
    ///
    /// Fails with [`BindingError::AlreadyInitialized`] when a window is
    /// already open and [`BindingError::WindowInitFailed`] when the window
    /// does not report ready afterwards.
    pub fn init(backend: &'b dyn NativeBackend, settings: &WindowConfig) -> BindingResult<Self> {
        if backend.is_window_ready() {
            return Err(BindingError::AlreadyInitialized);
        }

        let flags = settings.config_flags()?;
        let title = to_cstring(&settings.title)?;

        backend.set_config_flags(flags.bits());
        backend.init_window(settings.width, settings.height, &title);
        if !backend.is_window_ready() {
            error!(
                "Window {}x{} \"{}\" did not open",
                settings.width, settings.height, settings.title
            );
            return Err(BindingError::WindowInitFailed);
        }
        backend.set_target_fps(settings.target_fps);

        info!(
            "Window opened: {}x{} \"{}\" flags={:?}",
            settings.width, settings.height, settings.title, flags
        );
        Ok(Self {
            backend,
            title: RefCell::new(settings.title.clone()),
            min_size: Cell::new((0, 0)),
            cursor_enabled: Cell::new(true),
            mouse_offset: Cell::new((0, 0)),
            mouse_scale: Cell::new((1.0, 1.0)),
            modes: RefCell::new(Vec::new()),
        })
    }

    /// Backend every resource created from this context goes through
    pub fn backend(&self) -> &dyn NativeBackend {
        self.backend
    }

    // ---- Window state ---------------------------------------------------

    /// Whether the close button or escape key was pressed
    pub fn window_should_close(&self) -> bool {
        self.backend.window_should_close()
    }

    /// Whether the window initialized successfully
    pub fn is_ready(&self) -> bool {
        self.backend.is_window_ready()
    }

    /// Whether the window is fullscreen
    pub fn is_fullscreen(&self) -> bool {
        self.backend.is_window_fullscreen()
    }

    /// Switch between fullscreen and windowed
    pub fn toggle_fullscreen(&self) {
        self.backend.toggle_fullscreen();
    }

    /// Enter or leave fullscreen, doing nothing when already there
    pub fn set_fullscreen(&self, fullscreen: bool) {
        if self.is_fullscreen() != fullscreen {
            self.toggle_fullscreen();
        }
    }

    /// Whether the window is hidden
    pub fn is_hidden(&self) -> bool {
        self.backend.is_window_hidden()
    }

    /// Whether the window is minimized
    pub fn is_minimized(&self) -> bool {
        self.backend.is_window_minimized()
    }

    /// Whether the window is maximized
    pub fn is_maximized(&self) -> bool {
        self.backend.is_window_maximized()
    }

    /// Maximize a resizable window
    pub fn maximize(&self) {
        self.backend.maximize_window();
    }

    /// Minimize a resizable window
    pub fn minimize(&self) {
        self.backend.minimize_window();
    }

    /// Leave the minimized or maximized state
    pub fn restore(&self) {
        self.backend.restore_window();
    }

    /// Whether the window has input focus
    pub fn is_focused(&self) -> bool {
        self.backend.is_window_focused()
    }

    /// Whether the window was resized during the last frame
    pub fn is_resized(&self) -> bool {
        self.backend.is_window_resized()
    }

    /// Whether every flag in `flags` is currently set
    pub fn is_state(&self, flags: ConfigFlags) -> bool {
        flags.iter().all(|flag| self.backend.is_window_state(flag.bits()))
    }

    /// Set window state flags
    pub fn set_state(&self, flags: ConfigFlags) {
        self.backend.set_window_state(flags.bits());
    }

    /// Clear window state flags
    pub fn clear_state(&self, flags: ConfigFlags) {
        self.backend.clear_window_state(flags.bits());
    }

    // ---- Geometry -------------------------------------------------------

    /// Current client area size
    pub fn screen_size(&self) -> (i32, i32) {
        (self.backend.screen_width(), self.backend.screen_height())
    }

    /// Current client area width
    pub fn screen_width(&self) -> i32 {
        self.backend.screen_width()
    }

    /// Current client area height
    pub fn screen_height(&self) -> i32 {
        self.backend.screen_height()
    }

    /// Resize the window
    pub fn set_size(&self, width: i32, height: i32) {
        self.backend.set_window_size(width, height);
    }

    /// Minimum size last set through [`Context::set_min_size`]
    pub fn min_size(&self) -> (i32, i32) {
        self.min_size.get()
    }

    /// Set the minimum size of a resizable window
    pub fn set_min_size(&self, width: i32, height: i32) {
        self.backend.set_window_min_size(width, height);
        self.min_size.set((width, height));
    }

    /// Window position on the monitor
    pub fn position(&self) -> Vector2 {
        self.backend.window_position()
    }

    /// Move the window
    pub fn set_position(&self, x: i32, y: i32) {
        self.backend.set_window_position(x, y);
    }

    /// Move a fullscreen window to another monitor
    pub fn set_monitor(&self, monitor: i32) {
        self.backend.set_window_monitor(monitor);
    }

    /// DPI scale factor of the window
    pub fn scale_dpi(&self) -> Vector2 {
        self.backend.window_scale_dpi()
    }

    /// Title last set on this window
    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }

    /// Change the window title
    pub fn set_title(&self, title: &str) -> BindingResult<()> {
        let native = to_cstring(title)?;
        self.backend.set_window_title(&native);
        *self.title.borrow_mut() = title.to_string();
        Ok(())
    }

    // ---- Monitors -------------------------------------------------------

    /// Number of connected monitors
    pub fn monitor_count(&self) -> i32 {
        self.backend.monitor_count()
    }

    /// Monitor the window is on
    pub fn current_monitor(&self) -> i32 {
        self.backend.current_monitor()
    }

    /// Snapshot of one monitor, `None` when `index` is not connected
    pub fn monitor(&self, index: i32) -> Option<MonitorInfo> {
        (0..self.monitor_count())
            .contains(&index)
            .then(|| MonitorInfo::query(self.backend, index))
    }

    /// Snapshot of every connected monitor
    pub fn monitors(&self) -> Vec<MonitorInfo> {
        (0..self.monitor_count())
            .map(|index| MonitorInfo::query(self.backend, index))
            .collect()
    }

    // ---- Clipboard ------------------------------------------------------

    /// Replace the clipboard text
    pub fn set_clipboard_text(&self, text: &str) -> BindingResult<()> {
        let native = to_cstring(text)?;
        self.backend.set_clipboard_text(&native);
        Ok(())
    }

    /// Clipboard text, `None` when it holds no text
    pub fn clipboard_text(&self) -> Option<String> {
        self.backend.clipboard_text()
    }

    // ---- Timing ---------------------------------------------------------

    /// Cap the frame rate
    pub fn set_target_fps(&self, fps: i32) {
        self.backend.set_target_fps(fps);
    }

    /// Current frames per second
    pub fn fps(&self) -> i32 {
        self.backend.fps()
    }

    /// Seconds spent on the last frame
    pub fn frame_time(&self) -> f32 {
        self.backend.frame_time()
    }

    /// Seconds since the window opened
    pub fn time(&self) -> f64 {
        self.backend.time()
    }

    // ---- Cursor and mouse -----------------------------------------------

    /// Show the cursor
    pub fn show_cursor(&self) {
        self.backend.show_cursor();
    }

    /// Hide the cursor
    pub fn hide_cursor(&self) {
        self.backend.hide_cursor();
    }

    /// Whether the cursor is hidden
    pub fn is_cursor_hidden(&self) -> bool {
        self.backend.is_cursor_hidden()
    }

    /// Unlock the cursor
    pub fn enable_cursor(&self) {
        self.backend.enable_cursor();
        self.cursor_enabled.set(true);
    }

    /// Lock the cursor to the window
    pub fn disable_cursor(&self) {
        self.backend.disable_cursor();
        self.cursor_enabled.set(false);
    }

    /// Whether the cursor was last enabled rather than disabled
    pub fn is_cursor_enabled(&self) -> bool {
        self.cursor_enabled.get()
    }

    /// Whether the cursor is over the window
    pub fn is_cursor_on_screen(&self) -> bool {
        self.backend.is_cursor_on_screen()
    }

    /// Mouse position with offset and scale applied
    pub fn mouse_position(&self) -> Vector2 {
        self.backend.mouse_position()
    }

    /// Warp the mouse
    pub fn set_mouse_position(&self, x: i32, y: i32) {
        self.backend.set_mouse_position(x, y);
    }

    /// Offset last set through [`Context::set_mouse_offset`]
    pub fn mouse_offset(&self) -> (i32, i32) {
        self.mouse_offset.get()
    }

    /// Offset added to reported mouse positions
    pub fn set_mouse_offset(&self, offset_x: i32, offset_y: i32) {
        self.backend.set_mouse_offset(offset_x, offset_y);
        self.mouse_offset.set((offset_x, offset_y));
    }

    /// Scale last set through [`Context::set_mouse_scale`]
    pub fn mouse_scale(&self) -> (f32, f32) {
        self.mouse_scale.get()
    }

    /// Scale applied to reported mouse positions
    pub fn set_mouse_scale(&self, scale_x: f32, scale_y: f32) {
        self.backend.set_mouse_scale(scale_x, scale_y);
        self.mouse_scale.set((scale_x, scale_y));
    }

    /// Wheel movement during the last frame
    pub fn mouse_wheel_move(&self) -> f32 {
        self.backend.mouse_wheel_move()
    }

    // ---- Frame ----------------------------------------------------------

    /// Clear the current framebuffer
    pub fn clear_background(&self, color: Color) {
        self.backend.clear_background(color);
    }
}

impl Drop for Context<'_> {
    fn drop(&mut self) {
        let open = self.modes.get_mut();
        if !open.is_empty() {
            error!("Closing window with open modes: {:?}", open);
        }
        trace!("CloseWindow");
        self.backend.close_window();
        debug!("Window \"{}\" closed", self.title.get_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;

    fn settings() -> WindowConfig {
        WindowConfig::new(640, 480, "test").with_flags(ConfigFlags::VSYNC_HINT)
    }

    #[test]
    fn test_init_sequence() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &settings()).unwrap();

        assert_eq!(
            backend.calls(),
            vec!["IsWindowReady", "SetConfigFlags", "InitWindow", "IsWindowReady", "SetTargetFPS"]
        );
        assert_eq!(backend.live_mut().window_state, ConfigFlags::VSYNC_HINT.bits());
        assert_eq!(ctx.screen_size(), (640, 480));
        assert_eq!(backend.values("SetTargetFPS"), vec![60.0]);
    }

    #[test]
    fn test_second_context_is_rejected() {
        let backend = RecordingBackend::new();
        let _ctx = Context::init(&backend, &settings()).unwrap();

        assert!(matches!(
            Context::init(&backend, &settings()),
            Err(BindingError::AlreadyInitialized)
        ));
    }

    #[test]
    fn test_window_failure() {
        let backend = RecordingBackend::new();
        backend.live_mut().window_init_succeeds = false;

        assert!(matches!(
            Context::init(&backend, &settings()),
            Err(BindingError::WindowInitFailed)
        ));
        assert_eq!(backend.count("CloseWindow"), 0);
    }

    #[test]
    fn test_drop_closes_window() {
        let backend = RecordingBackend::new();
        {
            let _ctx = Context::init(&backend, &settings()).unwrap();
        }
        assert_eq!(backend.count("CloseWindow"), 1);
        assert!(!backend.is_window_ready());
    }

    #[test]
    fn test_cached_values() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &settings()).unwrap();

        assert_eq!(ctx.title(), "test");
        ctx.set_title("renamed").unwrap();
        assert_eq!(ctx.title(), "renamed");
        assert!(matches!(ctx.set_title("a\0b"), Err(BindingError::InteriorNul(_))));
        assert_eq!(ctx.title(), "renamed");

        assert_eq!(ctx.mouse_scale(), (1.0, 1.0));
        ctx.set_mouse_scale(2.0, 0.5);
        ctx.set_mouse_offset(-4, 8);
        assert_eq!(ctx.mouse_scale(), (2.0, 0.5));
        assert_eq!(ctx.mouse_offset(), (-4, 8));

        ctx.set_min_size(100, 50);
        assert_eq!(ctx.min_size(), (100, 50));

        assert!(ctx.is_cursor_enabled());
        ctx.disable_cursor();
        assert!(!ctx.is_cursor_enabled());
        assert!(ctx.is_cursor_hidden());
    }

    #[test]
    fn test_set_fullscreen_toggles_only_on_change() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &settings()).unwrap();

        ctx.set_fullscreen(false);
        assert_eq!(backend.count("ToggleFullscreen"), 0);

        ctx.set_fullscreen(true);
        assert_eq!(backend.count("ToggleFullscreen"), 1);
    }

    #[test]
    fn test_monitor_snapshots() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &settings()).unwrap();

        assert_eq!(ctx.monitors().len(), 1);
        assert!(ctx.monitor(0).is_some());
        assert!(ctx.monitor(1).is_none());
        assert!(ctx.monitor(-1).is_none());
    }

    #[test]
    fn test_clipboard() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &settings()).unwrap();

        assert_eq!(ctx.clipboard_text(), None);
        ctx.set_clipboard_text("copied").unwrap();
        assert_eq!(ctx.clipboard_text().as_deref(), Some("copied"));
    }
}
