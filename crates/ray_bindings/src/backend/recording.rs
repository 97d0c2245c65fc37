//! Recording backend
//!
//! An in-process stand-in for the native library. Loaders synthesize plausible
//! results with fresh ids and fake handles, by-reference mutators update the
//! struct they are given the way the native functions do, and every call is
//! recorded so tests can assert on what crossed the boundary.
//!
//! Fake data pointers are never dereferenced. Arrays that the safe wrappers do
//! read (shader locations, material maps, font glyph tables) are real
//! allocations kept alive by the backend.

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::ffi::{c_void, CStr};

use super::{
    ImageGen, ImageOp, MeshShape, ModeBegin, ModeKind, NativeBackend, Playback, PlaybackTarget,
    TextureDraw, WaveOp,
};
use crate::ffi::{
    self, CubemapLayout, MaterialMapIndex, PixelFormat, ShaderUniformDataType, TextureFilter,
    TextureWrap, MAX_MATERIAL_MAPS, MAX_SHADER_LOCATIONS,
};
use crate::foundation::{Color, Matrix, Rectangle, Vector2};
use crate::resource::NativeResource;

const DEFAULT_IMAGE_SIZE: i32 = 16;
const DEFAULT_GLYPH_COUNT: usize = 95;
const DEVICE_SAMPLE_RATE: u32 = 44100;

/// One native unload call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unload {
    /// Native function called
    pub symbol: &'static str,
    /// Handle of the freed resource
    pub handle: u64,
}

/// One begin or end call on the mode stack
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModeEvent {
    /// Begin call with its arguments
    Begin(ModeBegin),
    /// End call
    End(ModeKind),
}

/// A buffer handed to a native update call
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    /// Native function called
    pub symbol: &'static str,
    /// Handle of the target resource
    pub handle: u64,
    /// Bytes passed
    pub bytes: Vec<u8>,
    /// Element count passed alongside the bytes
    pub count: i32,
}

/// Everything recorded so far
#[derive(Debug, Default, Clone)]
pub struct CallLog {
    /// Every native symbol, in call order
    pub calls: Vec<&'static str>,
    /// Unload calls
    pub unloads: Vec<Unload>,
    /// Image mutators with the image handle they were applied to
    pub image_ops: Vec<(u64, ImageOp)>,
    /// Wave mutators with the wave handle they were applied to
    pub wave_ops: Vec<(u64, WaveOp)>,
    /// Begin/end order
    pub modes: Vec<ModeEvent>,
    /// Buffers uploaded to textures, meshes, shaders and audio
    pub uploads: Vec<Upload>,
    /// Scalar setters (volume, pitch, target fps, ...)
    pub values: Vec<(&'static str, f32)>,
}

/// Monitor answered by the stub
#[derive(Debug, Clone, PartialEq)]
pub struct FakeMonitor {
    /// Monitor name
    pub name: String,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
    /// Width in millimetres
    pub physical_width: i32,
    /// Height in millimetres
    pub physical_height: i32,
    /// Position in the virtual desktop
    pub position: Vector2,
    /// Refresh rate in Hz
    pub refresh_rate: i32,
}

impl Default for FakeMonitor {
    fn default() -> Self {
        Self {
            name: "Recording Monitor".to_string(),
            width: 1920,
            height: 1080,
            physical_width: 527,
            physical_height: 296,
            position: Vector2::ZERO,
            refresh_rate: 60,
        }
    }
}

/// Answers served by live queries
///
/// Tests change these between calls to observe which accessors re-query.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub struct LiveState {
    pub window_init_succeeds: bool,
    pub audio_init_succeeds: bool,
    pub window_should_close: bool,
    pub window_fullscreen: bool,
    pub window_hidden: bool,
    pub window_minimized: bool,
    pub window_maximized: bool,
    pub window_focused: bool,
    pub window_resized: bool,
    pub window_state: u32,
    pub screen_width: i32,
    pub screen_height: i32,
    pub window_position: Vector2,
    pub window_scale_dpi: Vector2,
    pub monitors: Vec<FakeMonitor>,
    pub current_monitor: i32,
    pub clipboard: Option<String>,
    pub fps: i32,
    pub frame_time: f32,
    pub time: f64,
    pub cursor_hidden: bool,
    pub cursor_on_screen: bool,
    pub mouse_position: Vector2,
    pub mouse_wheel_move: f32,
    pub sound_playing: bool,
    pub sounds_playing: i32,
    pub music_playing: bool,
    pub music_time_length: f32,
    pub music_time_played: f32,
    pub stream_playing: bool,
    pub stream_processed: bool,
    pub image_fill: Color,
    pub alpha_border: Rectangle,
    pub shader_location: i32,
    pub export_succeeds: bool,
    pub material_file_count: usize,
}

impl Default for LiveState {
    fn default() -> Self {
        Self {
            window_init_succeeds: true,
            audio_init_succeeds: true,
            window_should_close: false,
            window_fullscreen: false,
            window_hidden: false,
            window_minimized: false,
            window_maximized: false,
            window_focused: true,
            window_resized: false,
            window_state: 0,
            screen_width: 0,
            screen_height: 0,
            window_position: Vector2::ZERO,
            window_scale_dpi: Vector2::ONE,
            monitors: vec![FakeMonitor::default()],
            current_monitor: 0,
            clipboard: None,
            fps: 60,
            frame_time: 1.0 / 60.0,
            time: 0.0,
            cursor_hidden: false,
            cursor_on_screen: true,
            mouse_position: Vector2::ZERO,
            mouse_wheel_move: 0.0,
            sound_playing: false,
            sounds_playing: 0,
            music_playing: false,
            music_time_length: 180.0,
            music_time_played: 0.0,
            stream_playing: false,
            stream_processed: true,
            image_fill: Color::WHITE,
            alpha_border: Rectangle::default(),
            shader_location: 0,
            export_succeeds: true,
            material_file_count: 1,
        }
    }
}

/// Backing storage for arrays the wrappers read through raw pointers
#[derive(Default)]
struct Arena {
    shader_locs: Vec<Box<[i32]>>,
    material_maps: Vec<Box<[ffi::MaterialMap]>>,
    font_recs: Vec<Box<[Rectangle]>>,
    font_chars: Vec<Box<[ffi::CharInfo]>>,
}

/// Recording stand-in for the native library
pub struct RecordingBackend {
    log: RefCell<CallLog>,
    live: RefCell<LiveState>,
    arena: RefCell<Arena>,
    next_id: Cell<u32>,
    next_addr: Cell<usize>,
    fail_loads: Cell<bool>,
    next_texture: Cell<Option<ffi::Texture>>,
    default_font: Cell<Option<ffi::Font>>,
    window_open: Cell<bool>,
    audio_open: Cell<bool>,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingBackend {
    /// Create a backend with default live answers
    pub fn new() -> Self {
        Self {
            log: RefCell::new(CallLog::default()),
            live: RefCell::new(LiveState::default()),
            arena: RefCell::new(Arena::default()),
            // Id 1 is the default white texture of the native library
            next_id: Cell::new(2),
            next_addr: Cell::new(0x1000),
            fail_loads: Cell::new(false),
            next_texture: Cell::new(None),
            default_font: Cell::new(None),
            window_open: Cell::new(false),
            audio_open: Cell::new(false),
        }
    }

    // ---- Configuration --------------------------------------------------

    /// Make every loader return its zeroed sentinel
    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.set(fail);
    }

    /// Return exactly this struct from the next texture loader
    pub fn set_next_texture(&self, texture: ffi::Texture) {
        self.next_texture.set(Some(texture));
    }

    /// Mutable access to the live query answers
    pub fn live_mut(&self) -> RefMut<'_, LiveState> {
        self.live.borrow_mut()
    }

    // ---- Inspection -----------------------------------------------------

    /// Full call log
    pub fn log(&self) -> Ref<'_, CallLog> {
        self.log.borrow()
    }

    /// Every symbol called, in order
    pub fn calls(&self) -> Vec<&'static str> {
        self.log.borrow().calls.clone()
    }

    /// Number of calls to `symbol`
    pub fn count(&self, symbol: &str) -> usize {
        self.log.borrow().calls.iter().filter(|s| **s == symbol).count()
    }

    /// Unload calls, in order
    pub fn unloads(&self) -> Vec<Unload> {
        self.log.borrow().unloads.clone()
    }

    /// Number of unload calls through `symbol`
    pub fn unload_count(&self, symbol: &str) -> usize {
        self.log.borrow().unloads.iter().filter(|u| u.symbol == symbol).count()
    }

    /// Image mutators, in order
    pub fn image_ops(&self) -> Vec<(u64, ImageOp)> {
        self.log.borrow().image_ops.clone()
    }

    /// Wave mutators, in order
    pub fn wave_ops(&self) -> Vec<(u64, WaveOp)> {
        self.log.borrow().wave_ops.clone()
    }

    /// Mode begin/end order
    pub fn modes(&self) -> Vec<ModeEvent> {
        self.log.borrow().modes.clone()
    }

    /// Uploaded buffers, in order
    pub fn uploads(&self) -> Vec<Upload> {
        self.log.borrow().uploads.clone()
    }

    /// Values passed to `symbol`, in order
    pub fn values(&self, symbol: &str) -> Vec<f32> {
        self.log
            .borrow()
            .values
            .iter()
            .filter(|(s, _)| *s == symbol)
            .map(|(_, v)| *v)
            .collect()
    }

    // ---- Internals ------------------------------------------------------

    fn call(&self, symbol: &'static str) {
        self.log.borrow_mut().calls.push(symbol);
    }

    fn value(&self, symbol: &'static str, value: f32) {
        self.call(symbol);
        self.log.borrow_mut().values.push((symbol, value));
    }

    fn upload(&self, symbol: &'static str, handle: u64, bytes: &[u8], count: i32) {
        self.call(symbol);
        self.log.borrow_mut().uploads.push(Upload {
            symbol,
            handle,
            bytes: bytes.to_vec(),
            count,
        });
    }

    fn unload<R: NativeResource>(&self, raw: R) {
        self.call(R::UNLOAD_SYMBOL);
        self.log.borrow_mut().unloads.push(Unload {
            symbol: R::UNLOAD_SYMBOL,
            handle: raw.handle(),
        });
    }

    fn failing(&self) -> bool {
        self.fail_loads.get()
    }

    fn fresh_id(&self) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn fresh_addr(&self) -> usize {
        let addr = self.next_addr.get();
        self.next_addr.set(addr + 0x100);
        addr
    }

    fn fake_ptr<T>(&self) -> *mut T {
        self.fresh_addr() as *mut T
    }

    fn image(&self, width: i32, height: i32, format: i32) -> ffi::Image {
        if self.failing() {
            return bytemuck::Zeroable::zeroed();
        }
        ffi::Image {
            data: self.fake_ptr::<c_void>(),
            width,
            height,
            mipmaps: 1,
            format,
        }
    }

    fn texture(&self, width: i32, height: i32, mipmaps: i32, format: i32) -> ffi::Texture {
        if let Some(texture) = self.next_texture.take() {
            return texture;
        }
        if self.failing() {
            return ffi::Texture::default();
        }
        ffi::Texture {
            id: self.fresh_id(),
            width,
            height,
            mipmaps,
            format,
        }
    }

    fn shader(&self) -> ffi::Shader {
        if self.failing() {
            return bytemuck::Zeroable::zeroed();
        }
        let mut locs = vec![-1; MAX_SHADER_LOCATIONS].into_boxed_slice();
        let ptr = locs.as_mut_ptr();
        self.arena.borrow_mut().shader_locs.push(locs);
        ffi::Shader {
            id: self.fresh_id(),
            locs: ptr,
        }
    }

    fn material(&self) -> ffi::Material {
        if self.failing() {
            return bytemuck::Zeroable::zeroed();
        }
        let shader = self.shader();
        let mut maps = vec![ffi::MaterialMap::default(); MAX_MATERIAL_MAPS].into_boxed_slice();
        maps[MaterialMapIndex::Albedo as usize] = ffi::MaterialMap {
            texture: ffi::Texture {
                id: 1,
                width: 1,
                height: 1,
                mipmaps: 1,
                format: PixelFormat::UncompressedR8G8B8A8 as i32,
            },
            color: Color::WHITE,
            value: 0.0,
        };
        maps[MaterialMapIndex::Metalness as usize].color = Color::WHITE;
        let ptr = maps.as_mut_ptr();
        self.arena.borrow_mut().material_maps.push(maps);
        ffi::Material {
            shader,
            maps: ptr,
            params: [0.0; 4],
        }
    }

    fn font(&self, base_size: i32, codepoints: Option<&[i32]>) -> ffi::Font {
        if self.failing() {
            return bytemuck::Zeroable::zeroed();
        }
        let values: Vec<i32> = match codepoints {
            Some(cps) => cps.to_vec(),
            None => (32..32 + DEFAULT_GLYPH_COUNT as i32).collect(),
        };
        let mut recs: Box<[Rectangle]> = values
            .iter()
            .enumerate()
            .map(|(i, _)| {
                Rectangle::new((i as f32) * base_size as f32, 0.0, base_size as f32, base_size as f32)
            })
            .collect();
        let mut chars: Box<[ffi::CharInfo]> = values
            .iter()
            .map(|&value| ffi::CharInfo {
                value,
                offset_x: 0,
                offset_y: 0,
                advance_x: base_size / 2,
                image: ffi::Image::default(),
            })
            .collect();
        let recs_ptr = recs.as_mut_ptr();
        let chars_ptr = chars.as_mut_ptr();
        {
            let mut arena = self.arena.borrow_mut();
            arena.font_recs.push(recs);
            arena.font_chars.push(chars);
        }
        ffi::Font {
            base_size,
            chars_count: values.len() as i32,
            chars_padding: 4,
            texture: ffi::Texture {
                id: self.fresh_id(),
                width: 512,
                height: 512,
                mipmaps: 1,
                format: PixelFormat::UncompressedGrayAlpha as i32,
            },
            recs: recs_ptr,
            chars: chars_ptr,
        }
    }

    fn wave(&self, sample_count: u32, sample_rate: u32, sample_size: u32, channels: u32) -> ffi::Wave {
        if self.failing() {
            return bytemuck::Zeroable::zeroed();
        }
        ffi::Wave {
            sample_count,
            sample_rate,
            sample_size,
            channels,
            data: self.fake_ptr::<c_void>(),
        }
    }

    fn stream(&self, sample_rate: u32, sample_size: u32, channels: u32) -> ffi::AudioStream {
        if self.failing() {
            return bytemuck::Zeroable::zeroed();
        }
        ffi::AudioStream {
            buffer: self.fake_ptr::<ffi::AudioBuffer>(),
            sample_rate,
            sample_size,
            channels,
        }
    }

    fn sound(&self, sample_count: u32) -> ffi::Sound {
        ffi::Sound {
            stream: self.stream(DEVICE_SAMPLE_RATE, 32, 2),
            sample_count,
        }
    }

    fn music(&self) -> ffi::Music {
        if self.failing() {
            return bytemuck::Zeroable::zeroed();
        }
        ffi::Music {
            stream: self.stream(DEVICE_SAMPLE_RATE, 16, 2),
            sample_count: DEVICE_SAMPLE_RATE * 2 * 180,
            looping: true,
            ctx_type: 1,
            ctx_data: self.fake_ptr::<c_void>(),
        }
    }

    fn mesh(&self, vertex_count: i32, triangle_count: i32) -> ffi::Mesh {
        let mut mesh: ffi::Mesh = bytemuck::Zeroable::zeroed();
        if self.failing() {
            return mesh;
        }
        mesh.vertex_count = vertex_count;
        mesh.triangle_count = triangle_count;
        mesh.vertices = self.fake_ptr();
        mesh.texcoords = self.fake_ptr();
        mesh.normals = self.fake_ptr();
        // Every GenMesh* ends with UploadMesh(&mesh, false)
        self.upload_mesh(&mut mesh, false);
        mesh
    }

    fn set_playing_flag(&self, target: PlaybackTarget, op: Playback) {
        let playing = matches!(op, Playback::Play | Playback::Resume);
        let mut live = self.live.borrow_mut();
        match target {
            PlaybackTarget::Sound => live.sound_playing = playing,
            PlaybackTarget::Music => live.music_playing = playing,
            PlaybackTarget::Stream => live.stream_playing = playing,
        }
    }
}

fn mip_levels(width: i32, height: i32) -> i32 {
    let mut size = width.max(height).max(1);
    let mut levels = 1;
    while size > 1 {
        size /= 2;
        levels += 1;
    }
    levels
}

fn next_pot(v: i32) -> i32 {
    (v.max(1) as u32).next_power_of_two() as i32
}

fn text_len(text: &CStr) -> i32 {
    text.to_bytes().len() as i32
}

impl NativeBackend for RecordingBackend {
    // ---- Window and context -------------------------------------------------

    fn set_config_flags(&self, flags: u32) {
        self.call("SetConfigFlags");
        self.live.borrow_mut().window_state = flags;
    }

    fn init_window(&self, width: i32, height: i32, _title: &CStr) {
        self.call("InitWindow");
        let mut live = self.live.borrow_mut();
        if live.window_init_succeeds {
            live.screen_width = width;
            live.screen_height = height;
            self.window_open.set(true);
        }
    }

    fn close_window(&self) {
        self.call("CloseWindow");
        self.window_open.set(false);
    }

    fn window_should_close(&self) -> bool {
        self.call("WindowShouldClose");
        self.live.borrow().window_should_close
    }

    fn is_window_ready(&self) -> bool {
        self.call("IsWindowReady");
        self.window_open.get()
    }

    fn is_window_fullscreen(&self) -> bool {
        self.call("IsWindowFullscreen");
        self.live.borrow().window_fullscreen
    }

    fn is_window_hidden(&self) -> bool {
        self.call("IsWindowHidden");
        self.live.borrow().window_hidden
    }

    fn is_window_minimized(&self) -> bool {
        self.call("IsWindowMinimized");
        self.live.borrow().window_minimized
    }

    fn is_window_maximized(&self) -> bool {
        self.call("IsWindowMaximized");
        self.live.borrow().window_maximized
    }

    fn is_window_focused(&self) -> bool {
        self.call("IsWindowFocused");
        self.live.borrow().window_focused
    }

    fn is_window_resized(&self) -> bool {
        self.call("IsWindowResized");
        self.live.borrow().window_resized
    }

    fn is_window_state(&self, flag: u32) -> bool {
        self.call("IsWindowState");
        self.live.borrow().window_state & flag != 0
    }

    fn set_window_state(&self, flags: u32) {
        self.call("SetWindowState");
        self.live.borrow_mut().window_state |= flags;
    }

    fn clear_window_state(&self, flags: u32) {
        self.call("ClearWindowState");
        self.live.borrow_mut().window_state &= !flags;
    }

    fn toggle_fullscreen(&self) {
        self.call("ToggleFullscreen");
        let mut live = self.live.borrow_mut();
        live.window_fullscreen = !live.window_fullscreen;
    }

    fn maximize_window(&self) {
        self.call("MaximizeWindow");
        let mut live = self.live.borrow_mut();
        live.window_maximized = true;
        live.window_minimized = false;
    }

    fn minimize_window(&self) {
        self.call("MinimizeWindow");
        let mut live = self.live.borrow_mut();
        live.window_minimized = true;
        live.window_maximized = false;
    }

    fn restore_window(&self) {
        self.call("RestoreWindow");
        let mut live = self.live.borrow_mut();
        live.window_minimized = false;
        live.window_maximized = false;
    }

    fn set_window_title(&self, _title: &CStr) {
        self.call("SetWindowTitle");
    }

    fn set_window_position(&self, x: i32, y: i32) {
        self.call("SetWindowPosition");
        self.live.borrow_mut().window_position = Vector2::new(x as f32, y as f32);
    }

    fn set_window_monitor(&self, monitor: i32) {
        self.call("SetWindowMonitor");
        self.live.borrow_mut().current_monitor = monitor;
    }

    fn set_window_min_size(&self, _width: i32, _height: i32) {
        self.call("SetWindowMinSize");
    }

    fn set_window_size(&self, width: i32, height: i32) {
        self.call("SetWindowSize");
        let mut live = self.live.borrow_mut();
        live.screen_width = width;
        live.screen_height = height;
    }

    fn screen_width(&self) -> i32 {
        self.call("GetScreenWidth");
        self.live.borrow().screen_width
    }

    fn screen_height(&self) -> i32 {
        self.call("GetScreenHeight");
        self.live.borrow().screen_height
    }

    fn window_position(&self) -> Vector2 {
        self.call("GetWindowPosition");
        self.live.borrow().window_position
    }

    fn window_scale_dpi(&self) -> Vector2 {
        self.call("GetWindowScaleDPI");
        self.live.borrow().window_scale_dpi
    }

    fn monitor_count(&self) -> i32 {
        self.call("GetMonitorCount");
        self.live.borrow().monitors.len() as i32
    }

    fn current_monitor(&self) -> i32 {
        self.call("GetCurrentMonitor");
        self.live.borrow().current_monitor
    }

    fn monitor_position(&self, monitor: i32) -> Vector2 {
        self.call("GetMonitorPosition");
        self.live
            .borrow()
            .monitors
            .get(monitor as usize)
            .map_or(Vector2::ZERO, |m| m.position)
    }

    fn monitor_width(&self, monitor: i32) -> i32 {
        self.call("GetMonitorWidth");
        self.live.borrow().monitors.get(monitor as usize).map_or(0, |m| m.width)
    }

    fn monitor_height(&self, monitor: i32) -> i32 {
        self.call("GetMonitorHeight");
        self.live.borrow().monitors.get(monitor as usize).map_or(0, |m| m.height)
    }

    fn monitor_physical_width(&self, monitor: i32) -> i32 {
        self.call("GetMonitorPhysicalWidth");
        self.live
            .borrow()
            .monitors
            .get(monitor as usize)
            .map_or(0, |m| m.physical_width)
    }

    fn monitor_physical_height(&self, monitor: i32) -> i32 {
        self.call("GetMonitorPhysicalHeight");
        self.live
            .borrow()
            .monitors
            .get(monitor as usize)
            .map_or(0, |m| m.physical_height)
    }

    fn monitor_refresh_rate(&self, monitor: i32) -> i32 {
        self.call("GetMonitorRefreshRate");
        self.live
            .borrow()
            .monitors
            .get(monitor as usize)
            .map_or(0, |m| m.refresh_rate)
    }

    fn monitor_name(&self, monitor: i32) -> String {
        self.call("GetMonitorName");
        self.live
            .borrow()
            .monitors
            .get(monitor as usize)
            .map(|m| m.name.clone())
            .unwrap_or_default()
    }

    fn set_clipboard_text(&self, text: &CStr) {
        self.call("SetClipboardText");
        self.live.borrow_mut().clipboard = Some(text.to_string_lossy().into_owned());
    }

    fn clipboard_text(&self) -> Option<String> {
        self.call("GetClipboardText");
        self.live.borrow().clipboard.clone()
    }

    // ---- Timing -------------------------------------------------------------

    fn set_target_fps(&self, fps: i32) {
        self.value("SetTargetFPS", fps as f32);
    }

    fn fps(&self) -> i32 {
        self.call("GetFPS");
        self.live.borrow().fps
    }

    fn frame_time(&self) -> f32 {
        self.call("GetFrameTime");
        self.live.borrow().frame_time
    }

    fn time(&self) -> f64 {
        self.call("GetTime");
        self.live.borrow().time
    }

    // ---- Cursor and mouse ---------------------------------------------------

    fn show_cursor(&self) {
        self.call("ShowCursor");
        self.live.borrow_mut().cursor_hidden = false;
    }

    fn hide_cursor(&self) {
        self.call("HideCursor");
        self.live.borrow_mut().cursor_hidden = true;
    }

    fn is_cursor_hidden(&self) -> bool {
        self.call("IsCursorHidden");
        self.live.borrow().cursor_hidden
    }

    fn enable_cursor(&self) {
        self.call("EnableCursor");
        self.live.borrow_mut().cursor_hidden = false;
    }

    fn disable_cursor(&self) {
        self.call("DisableCursor");
        self.live.borrow_mut().cursor_hidden = true;
    }

    fn is_cursor_on_screen(&self) -> bool {
        self.call("IsCursorOnScreen");
        self.live.borrow().cursor_on_screen
    }

    fn mouse_position(&self) -> Vector2 {
        self.call("GetMousePosition");
        self.live.borrow().mouse_position
    }

    fn set_mouse_position(&self, x: i32, y: i32) {
        self.call("SetMousePosition");
        self.live.borrow_mut().mouse_position = Vector2::new(x as f32, y as f32);
    }

    fn set_mouse_offset(&self, offset_x: i32, offset_y: i32) {
        self.call("SetMouseOffset");
        let mut log = self.log.borrow_mut();
        log.values.push(("SetMouseOffset", offset_x as f32));
        log.values.push(("SetMouseOffset", offset_y as f32));
    }

    fn set_mouse_scale(&self, scale_x: f32, scale_y: f32) {
        self.call("SetMouseScale");
        let mut log = self.log.borrow_mut();
        log.values.push(("SetMouseScale", scale_x));
        log.values.push(("SetMouseScale", scale_y));
    }

    fn mouse_wheel_move(&self) -> f32 {
        self.call("GetMouseWheelMove");
        self.live.borrow().mouse_wheel_move
    }

    // ---- Drawing modes ------------------------------------------------------

    fn clear_background(&self, _color: Color) {
        self.call("ClearBackground");
    }

    fn begin_mode(&self, mode: ModeBegin) {
        self.call(mode.symbol());
        self.log.borrow_mut().modes.push(ModeEvent::Begin(mode));
    }

    fn end_mode(&self, kind: ModeKind) {
        self.call(kind.end_symbol());
        self.log.borrow_mut().modes.push(ModeEvent::End(kind));
    }

    // ---- Images -------------------------------------------------------------

    fn load_image(&self, _file_name: &CStr) -> ffi::Image {
        self.call("LoadImage");
        self.image(
            DEFAULT_IMAGE_SIZE,
            DEFAULT_IMAGE_SIZE,
            PixelFormat::UncompressedR8G8B8A8 as i32,
        )
    }

    fn load_image_raw(
        &self,
        _file_name: &CStr,
        width: i32,
        height: i32,
        format: i32,
        _header_size: i32,
    ) -> ffi::Image {
        self.call("LoadImageRaw");
        self.image(width, height, format)
    }

    fn load_image_anim(&self, _file_name: &CStr) -> (ffi::Image, i32) {
        self.call("LoadImageAnim");
        let image = self.image(
            DEFAULT_IMAGE_SIZE,
            DEFAULT_IMAGE_SIZE,
            PixelFormat::UncompressedR8G8B8A8 as i32,
        );
        let frames = if image.data.is_null() { 0 } else { 4 };
        (image, frames)
    }

    fn load_image_from_memory(&self, _file_type: &CStr, data: &[u8]) -> ffi::Image {
        self.call("LoadImageFromMemory");
        if data.is_empty() {
            return ffi::Image::default();
        }
        self.image(
            DEFAULT_IMAGE_SIZE,
            DEFAULT_IMAGE_SIZE,
            PixelFormat::UncompressedR8G8B8A8 as i32,
        )
    }

    fn gen_image(&self, gen: ImageGen) -> ffi::Image {
        self.call(gen.symbol());
        let (width, height) = gen.size();
        self.image(width, height, PixelFormat::UncompressedR8G8B8A8 as i32)
    }

    fn image_copy(&self, image: ffi::Image) -> ffi::Image {
        self.call("ImageCopy");
        let mut copy = self.image(image.width, image.height, image.format);
        if !copy.data.is_null() {
            copy.mipmaps = image.mipmaps;
        }
        copy
    }

    fn image_from_image(&self, image: ffi::Image, rec: Rectangle) -> ffi::Image {
        self.call("ImageFromImage");
        self.image(rec.width as i32, rec.height as i32, image.format)
    }

    fn image_text(&self, text: &CStr, font_size: i32, _color: Color) -> ffi::Image {
        self.call("ImageText");
        let width = text_len(text) * font_size / 2;
        self.image(width, font_size, PixelFormat::UncompressedR8G8B8A8 as i32)
    }

    fn image_text_ex(
        &self,
        _font: ffi::Font,
        text: &CStr,
        font_size: f32,
        spacing: f32,
        _tint: Color,
    ) -> ffi::Image {
        self.call("ImageTextEx");
        let len = text_len(text) as f32;
        let width = len * font_size / 2.0 + (len - 1.0).max(0.0) * spacing;
        self.image(width as i32, font_size as i32, PixelFormat::UncompressedR8G8B8A8 as i32)
    }

    fn image_op(&self, image: &mut ffi::Image, op: ImageOp) {
        self.call(op.symbol());
        self.log
            .borrow_mut()
            .image_ops
            .push((image.handle(), op));

        match op {
            ImageOp::Format(format) => image.format = format as i32,
            ImageOp::ToPot(_) => {
                image.width = next_pot(image.width);
                image.height = next_pot(image.height);
            }
            ImageOp::Crop(rec) => {
                image.width = rec.width as i32;
                image.height = rec.height as i32;
            }
            ImageOp::Resize { width, height }
            | ImageOp::ResizeNn { width, height }
            | ImageOp::ResizeCanvas { width, height, .. } => {
                image.width = width;
                image.height = height;
            }
            ImageOp::Mipmaps => image.mipmaps = mip_levels(image.width, image.height),
            ImageOp::RotateCw | ImageOp::RotateCcw => {
                std::mem::swap(&mut image.width, &mut image.height);
            }
            _ => {}
        }
        if op.reallocates() {
            image.data = self.fake_ptr();
        }
    }

    fn image_draw_text(
        &self,
        _dst: &mut ffi::Image,
        _text: &CStr,
        _x: i32,
        _y: i32,
        _font_size: i32,
        _color: Color,
    ) {
        self.call("ImageDrawText");
    }

    fn image_draw_text_ex(
        &self,
        _dst: &mut ffi::Image,
        _font: ffi::Font,
        _text: &CStr,
        _position: Vector2,
        _font_size: f32,
        _spacing: f32,
        _tint: Color,
    ) {
        self.call("ImageDrawTextEx");
    }

    fn image_alpha_border(&self, _image: ffi::Image, _threshold: f32) -> Rectangle {
        self.call("GetImageAlphaBorder");
        self.live.borrow().alpha_border
    }

    fn load_image_colors(&self, image: ffi::Image) -> Vec<Color> {
        self.call("LoadImageColors");
        self.call("UnloadImageColors");
        let count = (image.width.max(0) * image.height.max(0)) as usize;
        vec![self.live.borrow().image_fill; count]
    }

    fn load_image_palette(&self, _image: ffi::Image, max_palette_size: i32) -> Vec<Color> {
        self.call("LoadImagePalette");
        self.call("UnloadImagePalette");
        let fill = self.live.borrow().image_fill;
        [fill, Color::BLANK]
            .into_iter()
            .take(max_palette_size.max(0) as usize)
            .collect()
    }

    fn export_image(&self, _image: ffi::Image, _file_name: &CStr) -> bool {
        self.call("ExportImage");
        self.live.borrow().export_succeeds
    }

    fn export_image_as_code(&self, _image: ffi::Image, _file_name: &CStr) -> bool {
        self.call("ExportImageAsCode");
        self.live.borrow().export_succeeds
    }

    fn unload_image(&self, image: ffi::Image) {
        self.unload(image);
    }

    // ---- Textures -----------------------------------------------------------

    fn load_texture(&self, _file_name: &CStr) -> ffi::Texture {
        self.call("LoadTexture");
        self.texture(
            DEFAULT_IMAGE_SIZE,
            DEFAULT_IMAGE_SIZE,
            1,
            PixelFormat::UncompressedR8G8B8A8 as i32,
        )
    }

    fn load_texture_from_image(&self, image: ffi::Image) -> ffi::Texture {
        self.call("LoadTextureFromImage");
        self.texture(image.width, image.height, image.mipmaps, image.format)
    }

    fn load_texture_cubemap(&self, image: ffi::Image, layout: CubemapLayout) -> ffi::Texture {
        self.call("LoadTextureCubemap");
        let face = match layout {
            CubemapLayout::LineVertical => image.width,
            CubemapLayout::LineHorizontal => image.height,
            CubemapLayout::CrossThreeByFour => image.width / 3,
            CubemapLayout::CrossFourByThree => image.width / 4,
            CubemapLayout::AutoDetect | CubemapLayout::Panorama => image.width.min(image.height),
        };
        self.texture(face, face, 1, image.format)
    }

    fn load_render_texture(&self, width: i32, height: i32) -> ffi::RenderTexture {
        self.call("LoadRenderTexture");
        if self.failing() {
            return ffi::RenderTexture::default();
        }
        ffi::RenderTexture {
            id: self.fresh_id(),
            texture: ffi::Texture {
                id: self.fresh_id(),
                width,
                height,
                mipmaps: 1,
                format: PixelFormat::UncompressedR8G8B8A8 as i32,
            },
            depth: ffi::Texture {
                id: self.fresh_id(),
                width,
                height,
                mipmaps: 1,
                format: 19,
            },
        }
    }

    fn update_texture(&self, texture: ffi::Texture, pixels: &[u8]) {
        self.upload("UpdateTexture", texture.handle(), pixels, 0);
    }

    fn update_texture_rec(&self, texture: ffi::Texture, _rec: Rectangle, pixels: &[u8]) {
        self.upload("UpdateTextureRec", texture.handle(), pixels, 0);
    }

    fn texture_to_image(&self, texture: ffi::Texture) -> ffi::Image {
        self.call("GetTextureData");
        self.image(texture.width, texture.height, texture.format)
    }

    fn gen_texture_mipmaps(&self, texture: &mut ffi::Texture) {
        self.call("GenTextureMipmaps");
        texture.mipmaps = mip_levels(texture.width, texture.height);
    }

    fn set_texture_filter(&self, _texture: ffi::Texture, filter: TextureFilter) {
        self.value("SetTextureFilter", filter as i32 as f32);
    }

    fn set_texture_wrap(&self, _texture: ffi::Texture, wrap: TextureWrap) {
        self.value("SetTextureWrap", wrap as i32 as f32);
    }

    fn draw_texture(&self, _texture: ffi::Texture, draw: TextureDraw<'_>) {
        self.call(draw.symbol());
    }

    fn unload_texture(&self, texture: ffi::Texture) {
        self.unload(texture);
    }

    fn unload_render_texture(&self, target: ffi::RenderTexture) {
        self.unload(target);
    }

    // ---- Shaders ------------------------------------------------------------

    fn load_shader(&self, _vs_file_name: Option<&CStr>, _fs_file_name: Option<&CStr>) -> ffi::Shader {
        self.call("LoadShader");
        self.shader()
    }

    fn load_shader_from_memory(&self, _vs_code: Option<&CStr>, _fs_code: Option<&CStr>) -> ffi::Shader {
        self.call("LoadShaderFromMemory");
        self.shader()
    }

    fn shader_location(&self, _shader: ffi::Shader, _uniform_name: &CStr) -> i32 {
        self.call("GetShaderLocation");
        self.live.borrow().shader_location
    }

    fn shader_location_attrib(&self, _shader: ffi::Shader, _attrib_name: &CStr) -> i32 {
        self.call("GetShaderLocationAttrib");
        self.live.borrow().shader_location
    }

    fn set_shader_value(
        &self,
        shader: ffi::Shader,
        loc: i32,
        value: &[u8],
        uniform_type: ShaderUniformDataType,
    ) {
        self.upload("SetShaderValue", shader.handle(), value, 1);
        self.log
            .borrow_mut()
            .values
            .extend([("SetShaderValue", loc as f32), ("SetShaderValue", uniform_type as i32 as f32)]);
    }

    fn set_shader_value_v(
        &self,
        shader: ffi::Shader,
        loc: i32,
        value: &[u8],
        uniform_type: ShaderUniformDataType,
        count: i32,
    ) {
        self.upload("SetShaderValueV", shader.handle(), value, count);
        self.log.borrow_mut().values.extend([
            ("SetShaderValueV", loc as f32),
            ("SetShaderValueV", uniform_type as i32 as f32),
        ]);
    }

    fn set_shader_value_matrix(&self, shader: ffi::Shader, loc: i32, mat: Matrix) {
        self.upload("SetShaderValueMatrix", shader.handle(), bytemuck::bytes_of(&mat), loc);
    }

    fn set_shader_value_texture(&self, shader: ffi::Shader, loc: i32, texture: ffi::Texture) {
        self.upload("SetShaderValueTexture", shader.handle(), bytemuck::bytes_of(&texture), loc);
    }

    fn unload_shader(&self, shader: ffi::Shader) {
        self.unload(shader);
    }

    // ---- Meshes and materials -----------------------------------------------

    fn gen_mesh(&self, shape: MeshShape) -> ffi::Mesh {
        self.call(shape.symbol());
        match shape {
            MeshShape::Poly { sides, .. } => self.mesh(sides * 3, sides),
            MeshShape::Plane { res_x, res_z, .. } => {
                self.mesh((res_x + 1) * (res_z + 1), res_x * res_z * 2)
            }
            MeshShape::Cube { .. } => self.mesh(24, 12),
            MeshShape::Heightmap { heightmap, .. } => {
                let quads = (heightmap.width - 1).max(0) * (heightmap.height - 1).max(0);
                self.mesh(quads * 6, quads * 2)
            }
            MeshShape::Cubicmap { cubicmap, .. } => {
                let cells = cubicmap.width.max(0) * cubicmap.height.max(0);
                self.mesh(cells * 36, cells * 12)
            }
            MeshShape::Sphere { rings, slices, .. }
            | MeshShape::HemiSphere { rings, slices, .. } => {
                self.mesh((rings + 1) * (slices + 1), rings * slices * 2)
            }
            MeshShape::Cylinder { slices, .. } => self.mesh(slices * 12, slices * 4),
            MeshShape::Torus { rad_seg, sides, .. } | MeshShape::Knot { rad_seg, sides, .. } => {
                self.mesh((rad_seg + 1) * (sides + 1), rad_seg * sides * 2)
            }
        }
    }

    fn upload_mesh(&self, mesh: &mut ffi::Mesh, dynamic: bool) {
        self.value("UploadMesh", if dynamic { 1.0 } else { 0.0 });
        if mesh.vao_id > 0 {
            return;
        }
        mesh.vao_id = self.fresh_id();
        mesh.vbo_id = self.fake_ptr();
    }

    fn update_mesh_buffer(&self, mesh: ffi::Mesh, index: i32, data: &[u8], offset: i32) {
        self.upload("UpdateMeshBuffer", mesh.handle(), data, index);
        self.log.borrow_mut().values.push(("UpdateMeshBuffer", offset as f32));
    }

    fn gen_mesh_tangents(&self, mesh: &mut ffi::Mesh) {
        self.call("GenMeshTangents");
        mesh.tangents = self.fake_ptr();
    }

    fn export_mesh(&self, _mesh: ffi::Mesh, _file_name: &CStr) -> bool {
        self.call("ExportMesh");
        self.live.borrow().export_succeeds
    }

    fn draw_mesh(&self, _mesh: ffi::Mesh, _material: ffi::Material, _transform: Matrix) {
        self.call("DrawMesh");
    }

    fn draw_mesh_instanced(&self, mesh: ffi::Mesh, _material: ffi::Material, transforms: &[Matrix]) {
        self.upload(
            "DrawMeshInstanced",
            mesh.handle(),
            bytemuck::cast_slice(transforms),
            transforms.len() as i32,
        );
    }

    fn unload_mesh(&self, mesh: ffi::Mesh) {
        self.unload(mesh);
    }

    fn load_material_default(&self) -> ffi::Material {
        self.call("LoadMaterialDefault");
        self.material()
    }

    fn load_materials(&self, _file_name: &CStr) -> Vec<ffi::Material> {
        self.call("LoadMaterials");
        self.call("MemFree");
        if self.failing() {
            return Vec::new();
        }
        let count = self.live.borrow().material_file_count;
        (0..count).map(|_| self.material()).collect()
    }

    fn set_material_texture(
        &self,
        material: &mut ffi::Material,
        map_type: MaterialMapIndex,
        texture: ffi::Texture,
    ) {
        self.call("SetMaterialTexture");
        let mut arena = self.arena.borrow_mut();
        let maps = arena
            .material_maps
            .iter_mut()
            .find(|maps| maps.as_ptr() == material.maps.cast_const());
        if let Some(slot) = maps.and_then(|maps| maps.get_mut(map_type as usize)) {
            slot.texture = texture;
        }
    }

    fn unload_material(&self, material: ffi::Material) {
        self.unload(material);
    }

    // ---- Fonts --------------------------------------------------------------

    fn font_default(&self) -> ffi::Font {
        self.call("GetFontDefault");
        if let Some(font) = self.default_font.get() {
            return font;
        }
        let was_failing = self.fail_loads.replace(false);
        let font = self.font(10, None);
        self.fail_loads.set(was_failing);
        self.default_font.set(Some(font));
        font
    }

    fn load_font(&self, _file_name: &CStr) -> ffi::Font {
        self.call("LoadFont");
        self.font(32, None)
    }

    fn load_font_ex(&self, _file_name: &CStr, font_size: i32, codepoints: Option<&[i32]>) -> ffi::Font {
        self.call("LoadFontEx");
        self.font(font_size, codepoints)
    }

    fn load_font_from_image(&self, image: ffi::Image, _key: Color, _first_char: i32) -> ffi::Font {
        self.call("LoadFontFromImage");
        self.font(image.height, None)
    }

    fn load_font_from_memory(
        &self,
        _file_type: &CStr,
        data: &[u8],
        font_size: i32,
        codepoints: Option<&[i32]>,
    ) -> ffi::Font {
        self.call("LoadFontFromMemory");
        if data.is_empty() {
            return bytemuck::Zeroable::zeroed();
        }
        self.font(font_size, codepoints)
    }

    fn draw_text_ex(
        &self,
        _font: ffi::Font,
        _text: &CStr,
        _position: Vector2,
        _font_size: f32,
        _spacing: f32,
        _tint: Color,
    ) {
        self.call("DrawTextEx");
    }

    fn measure_text_ex(&self, _font: ffi::Font, text: &CStr, font_size: f32, spacing: f32) -> Vector2 {
        self.call("MeasureTextEx");
        let len = text_len(text) as f32;
        Vector2::new(len * font_size / 2.0 + (len - 1.0).max(0.0) * spacing, font_size)
    }

    fn unload_font(&self, font: ffi::Font) {
        self.unload(font);
    }

    // ---- Audio device -------------------------------------------------------

    fn init_audio_device(&self) {
        self.call("InitAudioDevice");
        if self.live.borrow().audio_init_succeeds {
            self.audio_open.set(true);
        }
    }

    fn close_audio_device(&self) {
        self.call("CloseAudioDevice");
        self.audio_open.set(false);
    }

    fn is_audio_device_ready(&self) -> bool {
        self.call("IsAudioDeviceReady");
        self.audio_open.get()
    }

    fn set_master_volume(&self, volume: f32) {
        self.value("SetMasterVolume", volume);
    }

    fn set_audio_stream_buffer_size_default(&self, size: i32) {
        self.value("SetAudioStreamBufferSizeDefault", size as f32);
    }

    fn sounds_playing(&self) -> i32 {
        self.call("GetSoundsPlaying");
        self.live.borrow().sounds_playing
    }

    fn stop_sound_multi(&self) {
        self.call("StopSoundMulti");
        self.live.borrow_mut().sounds_playing = 0;
    }

    // ---- Waves --------------------------------------------------------------

    fn load_wave(&self, _file_name: &CStr) -> ffi::Wave {
        self.call("LoadWave");
        self.wave(DEVICE_SAMPLE_RATE * 2, DEVICE_SAMPLE_RATE, 16, 2)
    }

    fn load_wave_from_memory(&self, _file_type: &CStr, data: &[u8]) -> ffi::Wave {
        self.call("LoadWaveFromMemory");
        if data.is_empty() {
            return bytemuck::Zeroable::zeroed();
        }
        self.wave(DEVICE_SAMPLE_RATE * 2, DEVICE_SAMPLE_RATE, 16, 2)
    }

    fn wave_copy(&self, wave: ffi::Wave) -> ffi::Wave {
        self.call("WaveCopy");
        self.wave(wave.sample_count, wave.sample_rate, wave.sample_size, wave.channels)
    }

    fn wave_op(&self, wave: &mut ffi::Wave, op: WaveOp) {
        self.call(op.symbol());
        self.log.borrow_mut().wave_ops.push((wave.handle(), op));

        let channels = wave.channels.max(1);
        match op {
            WaveOp::Format { sample_rate, sample_size, channels: new_channels } => {
                let frames = u64::from(wave.sample_count / channels);
                let rate = u64::from(wave.sample_rate.max(1));
                let new_frames = frames * sample_rate.max(0) as u64 / rate;
                wave.sample_rate = sample_rate.max(0) as u32;
                wave.sample_size = sample_size.max(0) as u32;
                wave.channels = new_channels.max(0) as u32;
                wave.sample_count = (new_frames * u64::from(wave.channels)) as u32;
            }
            WaveOp::Crop { init_sample, final_sample } => {
                let frames = (wave.sample_count / channels) as i32;
                if init_sample >= 0 && init_sample < final_sample && final_sample < frames {
                    wave.sample_count = (final_sample - init_sample) as u32 * channels;
                }
            }
        }
        wave.data = self.fake_ptr();
    }

    fn load_wave_samples(&self, wave: ffi::Wave) -> Vec<f32> {
        self.call("LoadWaveSamples");
        self.call("UnloadWaveSamples");
        vec![0.0; wave.sample_count as usize]
    }

    fn export_wave(&self, _wave: ffi::Wave, _file_name: &CStr) -> bool {
        self.call("ExportWave");
        self.live.borrow().export_succeeds
    }

    fn export_wave_as_code(&self, _wave: ffi::Wave, _file_name: &CStr) -> bool {
        self.call("ExportWaveAsCode");
        self.live.borrow().export_succeeds
    }

    fn unload_wave(&self, wave: ffi::Wave) {
        self.unload(wave);
    }

    // ---- Sounds -------------------------------------------------------------

    fn load_sound(&self, _file_name: &CStr) -> ffi::Sound {
        self.call("LoadSound");
        self.sound(DEVICE_SAMPLE_RATE * 2)
    }

    fn load_sound_from_wave(&self, wave: ffi::Wave) -> ffi::Sound {
        self.call("LoadSoundFromWave");
        self.sound(wave.sample_count)
    }

    fn update_sound(&self, sound: ffi::Sound, data: &[u8], sample_count: i32) {
        self.upload("UpdateSound", sound.handle(), data, sample_count);
    }

    fn sound_playback(&self, _sound: ffi::Sound, op: Playback) {
        self.call(op.symbol(PlaybackTarget::Sound));
        self.set_playing_flag(PlaybackTarget::Sound, op);
    }

    fn play_sound_multi(&self, _sound: ffi::Sound) {
        self.call("PlaySoundMulti");
        self.live.borrow_mut().sounds_playing += 1;
    }

    fn is_sound_playing(&self, _sound: ffi::Sound) -> bool {
        self.call("IsSoundPlaying");
        self.live.borrow().sound_playing
    }

    fn set_sound_volume(&self, _sound: ffi::Sound, volume: f32) {
        self.value("SetSoundVolume", volume);
    }

    fn set_sound_pitch(&self, _sound: ffi::Sound, pitch: f32) {
        self.value("SetSoundPitch", pitch);
    }

    fn unload_sound(&self, sound: ffi::Sound) {
        self.unload(sound);
    }

    // ---- Music --------------------------------------------------------------

    fn load_music_stream(&self, _file_name: &CStr) -> ffi::Music {
        self.call("LoadMusicStream");
        self.music()
    }

    fn load_music_stream_from_memory(&self, _file_type: &CStr, data: &[u8]) -> ffi::Music {
        self.call("LoadMusicStreamFromMemory");
        if data.is_empty() {
            return bytemuck::Zeroable::zeroed();
        }
        self.music()
    }

    fn music_playback(&self, _music: ffi::Music, op: Playback) {
        self.call(op.symbol(PlaybackTarget::Music));
        self.set_playing_flag(PlaybackTarget::Music, op);
    }

    fn update_music_stream(&self, _music: ffi::Music) {
        self.call("UpdateMusicStream");
    }

    fn is_music_playing(&self, _music: ffi::Music) -> bool {
        self.call("IsMusicPlaying");
        self.live.borrow().music_playing
    }

    fn set_music_volume(&self, _music: ffi::Music, volume: f32) {
        self.value("SetMusicVolume", volume);
    }

    fn set_music_pitch(&self, _music: ffi::Music, pitch: f32) {
        self.value("SetMusicPitch", pitch);
    }

    fn music_time_length(&self, _music: ffi::Music) -> f32 {
        self.call("GetMusicTimeLength");
        self.live.borrow().music_time_length
    }

    fn music_time_played(&self, _music: ffi::Music) -> f32 {
        self.call("GetMusicTimePlayed");
        self.live.borrow().music_time_played
    }

    fn unload_music_stream(&self, music: ffi::Music) {
        self.unload(music);
    }

    // ---- Raw audio streams --------------------------------------------------

    fn init_audio_stream(&self, sample_rate: u32, sample_size: u32, channels: u32) -> ffi::AudioStream {
        self.call("InitAudioStream");
        self.stream(sample_rate, sample_size, channels)
    }

    fn update_audio_stream(&self, stream: ffi::AudioStream, data: &[u8], sample_count: i32) {
        self.upload("UpdateAudioStream", stream.handle(), data, sample_count);
    }

    fn is_audio_stream_processed(&self, _stream: ffi::AudioStream) -> bool {
        self.call("IsAudioStreamProcessed");
        self.live.borrow().stream_processed
    }

    fn is_audio_stream_playing(&self, _stream: ffi::AudioStream) -> bool {
        self.call("IsAudioStreamPlaying");
        self.live.borrow().stream_playing
    }

    fn stream_playback(&self, _stream: ffi::AudioStream, op: Playback) {
        self.call(op.symbol(PlaybackTarget::Stream));
        self.set_playing_flag(PlaybackTarget::Stream, op);
    }

    fn set_audio_stream_volume(&self, _stream: ffi::AudioStream, volume: f32) {
        self.value("SetAudioStreamVolume", volume);
    }

    fn set_audio_stream_pitch(&self, _stream: ffi::AudioStream, pitch: f32) {
        self.value("SetAudioStreamPitch", pitch);
    }

    fn close_audio_stream(&self, stream: ffi::AudioStream) {
        self.unload(stream);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failing_loads_return_sentinels() {
        let backend = RecordingBackend::new();
        backend.set_fail_loads(true);
        let name = CStr::from_bytes_with_nul(b"x.png\0").unwrap();

        assert!(backend.load_image(name).data.is_null());
        assert_eq!(backend.load_texture(name).id, 0);
        assert!(backend.load_sound(name).stream.buffer.is_null());
        assert!(backend.load_material_default().maps.is_null());
    }

    #[test]
    fn test_next_texture_is_used_once() {
        let backend = RecordingBackend::new();
        let configured = ffi::Texture { id: 7, width: 2, height: 2, mipmaps: 1, format: 7 };
        backend.set_next_texture(configured);
        let name = CStr::from_bytes_with_nul(b"a.png\0").unwrap();

        assert_eq!(backend.load_texture(name), configured);
        assert_ne!(backend.load_texture(name).id, 7);
    }

    #[test]
    fn test_image_resize_rewrites_fields() {
        let backend = RecordingBackend::new();
        let mut image = backend.gen_image(ImageGen::Color { width: 4, height: 4, color: Color::RED });
        let before = image.data;

        backend.image_op(&mut image, ImageOp::Resize { width: 8, height: 2 });

        assert_eq!((image.width, image.height), (8, 2));
        assert_ne!(image.data, before);
        assert_eq!(backend.image_ops()[0].0, before as usize as u64);
    }

    #[test]
    fn test_material_texture_written_to_maps() {
        let backend = RecordingBackend::new();
        let mut material = backend.load_material_default();
        let texture = ffi::Texture { id: 42, width: 1, height: 1, mipmaps: 1, format: 7 };

        backend.set_material_texture(&mut material, MaterialMapIndex::Normal, texture);

        let arena = backend.arena.borrow();
        assert_eq!(arena.material_maps[0][MaterialMapIndex::Normal as usize].texture.id, 42);
    }

    #[test]
    fn test_playback_updates_live_flag() {
        let backend = RecordingBackend::new();
        let name = CStr::from_bytes_with_nul(b"s.wav\0").unwrap();
        let sound = backend.load_sound(name);

        backend.sound_playback(sound, Playback::Play);
        assert!(backend.is_sound_playing(sound));
        backend.sound_playback(sound, Playback::Pause);
        assert!(!backend.is_sound_playing(sound));
    }
}
