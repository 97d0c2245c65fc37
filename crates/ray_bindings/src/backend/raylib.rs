//! raylib C ABI backend
//!
//! Declares every native symbol the crate binds to and forwards each
//! [`NativeBackend`] method to it. Native heap arrays are copied into owned
//! Rust values here and freed with the matching native free call, so no raw
//! array ever leaves this module.

use std::ffi::{c_char, c_void, CStr};
use std::marker::PhantomData;
use std::ptr;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{
    ImageGen, ImageOp, MeshShape, ModeBegin, ModeKind, NativeBackend, Playback, TextureDraw, WaveOp,
};
use crate::error::{BindingError, BindingResult};
use crate::ffi::{
    AudioStream, CubemapLayout, Font, Image, Material, MaterialMapIndex, Mesh, Music,
    RenderTexture, Shader, ShaderUniformDataType, Sound, Texture, TextureFilter, TextureWrap, Wave,
};
use crate::foundation::{
    Camera2D, Camera3D, Color, Matrix, NPatchInfo, Rectangle, Vector2, Vector3,
};

extern "C" {
    // Window and context
    fn SetConfigFlags(flags: u32);
    fn InitWindow(width: i32, height: i32, title: *const c_char);
    fn CloseWindow();
    fn WindowShouldClose() -> bool;
    fn IsWindowReady() -> bool;
    fn IsWindowFullscreen() -> bool;
    fn IsWindowHidden() -> bool;
    fn IsWindowMinimized() -> bool;
    fn IsWindowMaximized() -> bool;
    fn IsWindowFocused() -> bool;
    fn IsWindowResized() -> bool;
    fn IsWindowState(flag: u32) -> bool;
    fn SetWindowState(flags: u32);
    fn ClearWindowState(flags: u32);
    fn ToggleFullscreen();
    fn MaximizeWindow();
    fn MinimizeWindow();
    fn RestoreWindow();
    fn SetWindowTitle(title: *const c_char);
    fn SetWindowPosition(x: i32, y: i32);
    fn SetWindowMonitor(monitor: i32);
    fn SetWindowMinSize(width: i32, height: i32);
    fn SetWindowSize(width: i32, height: i32);
    fn GetScreenWidth() -> i32;
    fn GetScreenHeight() -> i32;
    fn GetWindowPosition() -> Vector2;
    fn GetWindowScaleDPI() -> Vector2;
    fn GetMonitorCount() -> i32;
    fn GetCurrentMonitor() -> i32;
    fn GetMonitorPosition(monitor: i32) -> Vector2;
    fn GetMonitorWidth(monitor: i32) -> i32;
    fn GetMonitorHeight(monitor: i32) -> i32;
    fn GetMonitorPhysicalWidth(monitor: i32) -> i32;
    fn GetMonitorPhysicalHeight(monitor: i32) -> i32;
    fn GetMonitorRefreshRate(monitor: i32) -> i32;
    fn GetMonitorName(monitor: i32) -> *const c_char;
    fn SetClipboardText(text: *const c_char);
    fn GetClipboardText() -> *const c_char;

    // Timing
    fn SetTargetFPS(fps: i32);
    fn GetFPS() -> i32;
    fn GetFrameTime() -> f32;
    fn GetTime() -> f64;

    // Cursor and mouse
    fn ShowCursor();
    fn HideCursor();
    fn IsCursorHidden() -> bool;
    fn EnableCursor();
    fn DisableCursor();
    fn IsCursorOnScreen() -> bool;
    fn GetMousePosition() -> Vector2;
    fn SetMousePosition(x: i32, y: i32);
    fn SetMouseOffset(offset_x: i32, offset_y: i32);
    fn SetMouseScale(scale_x: f32, scale_y: f32);
    fn GetMouseWheelMove() -> f32;

    // Drawing modes
    fn ClearBackground(color: Color);
    fn BeginDrawing();
    fn EndDrawing();
    fn BeginMode2D(camera: Camera2D);
    fn EndMode2D();
    fn BeginMode3D(camera: Camera3D);
    fn EndMode3D();
    fn BeginTextureMode(target: RenderTexture);
    fn EndTextureMode();
    fn BeginShaderMode(shader: Shader);
    fn EndShaderMode();
    fn BeginBlendMode(mode: i32);
    fn EndBlendMode();
    fn BeginScissorMode(x: i32, y: i32, width: i32, height: i32);
    fn EndScissorMode();

    // Images
    fn LoadImage(file_name: *const c_char) -> Image;
    fn LoadImageRaw(file_name: *const c_char, width: i32, height: i32, format: i32, header_size: i32) -> Image;
    fn LoadImageAnim(file_name: *const c_char, frames: *mut i32) -> Image;
    fn LoadImageFromMemory(file_type: *const c_char, file_data: *const u8, data_size: i32) -> Image;
    fn GenImageColor(width: i32, height: i32, color: Color) -> Image;
    fn GenImageGradientV(width: i32, height: i32, top: Color, bottom: Color) -> Image;
    fn GenImageGradientH(width: i32, height: i32, left: Color, right: Color) -> Image;
    fn GenImageGradientRadial(width: i32, height: i32, density: f32, inner: Color, outer: Color) -> Image;
    fn GenImageChecked(width: i32, height: i32, checks_x: i32, checks_y: i32, col1: Color, col2: Color) -> Image;
    fn GenImageWhiteNoise(width: i32, height: i32, factor: f32) -> Image;
    fn GenImagePerlinNoise(width: i32, height: i32, offset_x: i32, offset_y: i32, scale: f32) -> Image;
    fn GenImageCellular(width: i32, height: i32, tile_size: i32) -> Image;
    fn ImageCopy(image: Image) -> Image;
    fn ImageFromImage(image: Image, rec: Rectangle) -> Image;
    fn ImageText(text: *const c_char, font_size: i32, color: Color) -> Image;
    fn ImageTextEx(font: Font, text: *const c_char, font_size: f32, spacing: f32, tint: Color) -> Image;
    fn ImageFormat(image: *mut Image, new_format: i32);
    fn ImageToPOT(image: *mut Image, fill: Color);
    fn ImageCrop(image: *mut Image, crop: Rectangle);
    fn ImageAlphaCrop(image: *mut Image, threshold: f32);
    fn ImageAlphaClear(image: *mut Image, color: Color, threshold: f32);
    fn ImageAlphaMask(image: *mut Image, alpha_mask: Image);
    fn ImageAlphaPremultiply(image: *mut Image);
    fn ImageResize(image: *mut Image, new_width: i32, new_height: i32);
    fn ImageResizeNN(image: *mut Image, new_width: i32, new_height: i32);
    fn ImageResizeCanvas(image: *mut Image, new_width: i32, new_height: i32, offset_x: i32, offset_y: i32, fill: Color);
    fn ImageMipmaps(image: *mut Image);
    fn ImageDither(image: *mut Image, r_bpp: i32, g_bpp: i32, b_bpp: i32, a_bpp: i32);
    fn ImageFlipVertical(image: *mut Image);
    fn ImageFlipHorizontal(image: *mut Image);
    fn ImageRotateCW(image: *mut Image);
    fn ImageRotateCCW(image: *mut Image);
    fn ImageColorTint(image: *mut Image, color: Color);
    fn ImageColorInvert(image: *mut Image);
    fn ImageColorGrayscale(image: *mut Image);
    fn ImageColorContrast(image: *mut Image, contrast: f32);
    fn ImageColorBrightness(image: *mut Image, brightness: i32);
    fn ImageColorReplace(image: *mut Image, color: Color, replace: Color);
    fn ImageClearBackground(dst: *mut Image, color: Color);
    fn ImageDrawPixel(dst: *mut Image, x: i32, y: i32, color: Color);
    fn ImageDrawLine(dst: *mut Image, start_x: i32, start_y: i32, end_x: i32, end_y: i32, color: Color);
    fn ImageDrawCircle(dst: *mut Image, center_x: i32, center_y: i32, radius: i32, color: Color);
    fn ImageDrawRectangle(dst: *mut Image, x: i32, y: i32, width: i32, height: i32, color: Color);
    fn ImageDrawRectangleLines(dst: *mut Image, rec: Rectangle, thick: i32, color: Color);
    fn ImageDraw(dst: *mut Image, src: Image, src_rec: Rectangle, dst_rec: Rectangle, tint: Color);
    fn ImageDrawText(dst: *mut Image, text: *const c_char, x: i32, y: i32, font_size: i32, color: Color);
    fn ImageDrawTextEx(dst: *mut Image, font: Font, text: *const c_char, position: Vector2, font_size: f32, spacing: f32, tint: Color);
    fn GetImageAlphaBorder(image: Image, threshold: f32) -> Rectangle;
    fn LoadImageColors(image: Image) -> *mut Color;
    fn UnloadImageColors(colors: *mut Color);
    fn LoadImagePalette(image: Image, max_palette_size: i32, colors_count: *mut i32) -> *mut Color;
    fn UnloadImagePalette(colors: *mut Color);
    fn ExportImage(image: Image, file_name: *const c_char) -> bool;
    fn ExportImageAsCode(image: Image, file_name: *const c_char) -> bool;
    fn UnloadImage(image: Image);

    // Textures
    fn LoadTexture(file_name: *const c_char) -> Texture;
    fn LoadTextureFromImage(image: Image) -> Texture;
    fn LoadTextureCubemap(image: Image, layout: i32) -> Texture;
    fn LoadRenderTexture(width: i32, height: i32) -> RenderTexture;
    fn UpdateTexture(texture: Texture, pixels: *const c_void);
    fn UpdateTextureRec(texture: Texture, rec: Rectangle, pixels: *const c_void);
    fn GetTextureData(texture: Texture) -> Image;
    fn GenTextureMipmaps(texture: *mut Texture);
    fn SetTextureFilter(texture: Texture, filter: i32);
    fn SetTextureWrap(texture: Texture, wrap: i32);
    fn DrawTexture(texture: Texture, x: i32, y: i32, tint: Color);
    fn DrawTextureV(texture: Texture, position: Vector2, tint: Color);
    fn DrawTextureEx(texture: Texture, position: Vector2, rotation: f32, scale: f32, tint: Color);
    fn DrawTextureRec(texture: Texture, source: Rectangle, position: Vector2, tint: Color);
    fn DrawTextureQuad(texture: Texture, tiling: Vector2, offset: Vector2, quad: Rectangle, tint: Color);
    fn DrawTextureTiled(texture: Texture, source: Rectangle, dest: Rectangle, origin: Vector2, rotation: f32, scale: f32, tint: Color);
    fn DrawTexturePro(texture: Texture, source: Rectangle, dest: Rectangle, origin: Vector2, rotation: f32, tint: Color);
    fn DrawTextureNPatch(texture: Texture, info: NPatchInfo, dest: Rectangle, origin: Vector2, rotation: f32, tint: Color);
    fn DrawTexturePoly(texture: Texture, center: Vector2, points: *mut Vector2, texcoords: *mut Vector2, points_count: i32, tint: Color);
    fn UnloadTexture(texture: Texture);
    fn UnloadRenderTexture(target: RenderTexture);

    // Shaders
    fn LoadShader(vs_file_name: *const c_char, fs_file_name: *const c_char) -> Shader;
    fn LoadShaderFromMemory(vs_code: *const c_char, fs_code: *const c_char) -> Shader;
    fn GetShaderLocation(shader: Shader, uniform_name: *const c_char) -> i32;
    fn GetShaderLocationAttrib(shader: Shader, attrib_name: *const c_char) -> i32;
    fn SetShaderValue(shader: Shader, loc_index: i32, value: *const c_void, uniform_type: i32);
    fn SetShaderValueV(shader: Shader, loc_index: i32, value: *const c_void, uniform_type: i32, count: i32);
    fn SetShaderValueMatrix(shader: Shader, loc_index: i32, mat: Matrix);
    fn SetShaderValueTexture(shader: Shader, loc_index: i32, texture: Texture);
    fn UnloadShader(shader: Shader);

    // Meshes and materials
    fn GenMeshPoly(sides: i32, radius: f32) -> Mesh;
    fn GenMeshPlane(width: f32, length: f32, res_x: i32, res_z: i32) -> Mesh;
    fn GenMeshCube(width: f32, height: f32, length: f32) -> Mesh;
    fn GenMeshSphere(radius: f32, rings: i32, slices: i32) -> Mesh;
    fn GenMeshHemiSphere(radius: f32, rings: i32, slices: i32) -> Mesh;
    fn GenMeshCylinder(radius: f32, height: f32, slices: i32) -> Mesh;
    fn GenMeshTorus(radius: f32, size: f32, rad_seg: i32, sides: i32) -> Mesh;
    fn GenMeshKnot(radius: f32, size: f32, rad_seg: i32, sides: i32) -> Mesh;
    fn GenMeshHeightmap(heightmap: Image, size: Vector3) -> Mesh;
    fn GenMeshCubicmap(cubicmap: Image, cube_size: Vector3) -> Mesh;
    fn UploadMesh(mesh: *mut Mesh, dynamic: bool);
    fn UpdateMeshBuffer(mesh: Mesh, index: i32, data: *mut c_void, data_size: i32, offset: i32);
    fn GenMeshTangents(mesh: *mut Mesh);
    fn ExportMesh(mesh: Mesh, file_name: *const c_char) -> bool;
    fn DrawMesh(mesh: Mesh, material: Material, transform: Matrix);
    fn DrawMeshInstanced(mesh: Mesh, material: Material, transforms: *mut Matrix, instances: i32);
    fn UnloadMesh(mesh: Mesh);
    fn LoadMaterialDefault() -> Material;
    fn LoadMaterials(file_name: *const c_char, material_count: *mut i32) -> *mut Material;
    fn SetMaterialTexture(material: *mut Material, map_type: i32, texture: Texture);
    fn UnloadMaterial(material: Material);
    fn MemFree(ptr: *mut c_void);

    // Fonts
    fn GetFontDefault() -> Font;
    fn LoadFont(file_name: *const c_char) -> Font;
    fn LoadFontEx(file_name: *const c_char, font_size: i32, font_chars: *mut i32, chars_count: i32) -> Font;
    fn LoadFontFromImage(image: Image, key: Color, first_char: i32) -> Font;
    fn LoadFontFromMemory(file_type: *const c_char, file_data: *const u8, data_size: i32, font_size: i32, font_chars: *mut i32, chars_count: i32) -> Font;
    fn DrawTextEx(font: Font, text: *const c_char, position: Vector2, font_size: f32, spacing: f32, tint: Color);
    fn MeasureTextEx(font: Font, text: *const c_char, font_size: f32, spacing: f32) -> Vector2;
    fn UnloadFont(font: Font);

    // Audio device
    fn InitAudioDevice();
    fn CloseAudioDevice();
    fn IsAudioDeviceReady() -> bool;
    fn SetMasterVolume(volume: f32);
    fn SetAudioStreamBufferSizeDefault(size: i32);
    fn GetSoundsPlaying() -> i32;
    fn StopSoundMulti();

    // Waves
    fn LoadWave(file_name: *const c_char) -> Wave;
    fn LoadWaveFromMemory(file_type: *const c_char, file_data: *const u8, data_size: i32) -> Wave;
    fn WaveCopy(wave: Wave) -> Wave;
    fn WaveCrop(wave: *mut Wave, init_sample: i32, final_sample: i32);
    fn WaveFormat(wave: *mut Wave, sample_rate: i32, sample_size: i32, channels: i32);
    fn LoadWaveSamples(wave: Wave) -> *mut f32;
    fn UnloadWaveSamples(samples: *mut f32);
    fn ExportWave(wave: Wave, file_name: *const c_char) -> bool;
    fn ExportWaveAsCode(wave: Wave, file_name: *const c_char) -> bool;
    fn UnloadWave(wave: Wave);

    // Sounds
    fn LoadSound(file_name: *const c_char) -> Sound;
    fn LoadSoundFromWave(wave: Wave) -> Sound;
    fn UpdateSound(sound: Sound, data: *const c_void, samples_count: i32);
    fn PlaySound(sound: Sound);
    fn StopSound(sound: Sound);
    fn PauseSound(sound: Sound);
    fn ResumeSound(sound: Sound);
    fn PlaySoundMulti(sound: Sound);
    fn IsSoundPlaying(sound: Sound) -> bool;
    fn SetSoundVolume(sound: Sound, volume: f32);
    fn SetSoundPitch(sound: Sound, pitch: f32);
    fn UnloadSound(sound: Sound);

    // Music
    fn LoadMusicStream(file_name: *const c_char) -> Music;
    fn LoadMusicStreamFromMemory(file_type: *const c_char, data: *const u8, data_size: i32) -> Music;
    fn PlayMusicStream(music: Music);
    fn StopMusicStream(music: Music);
    fn PauseMusicStream(music: Music);
    fn ResumeMusicStream(music: Music);
    fn UpdateMusicStream(music: Music);
    fn IsMusicPlaying(music: Music) -> bool;
    fn SetMusicVolume(music: Music, volume: f32);
    fn SetMusicPitch(music: Music, pitch: f32);
    fn GetMusicTimeLength(music: Music) -> f32;
    fn GetMusicTimePlayed(music: Music) -> f32;
    fn UnloadMusicStream(music: Music);

    // Raw audio streams
    fn InitAudioStream(sample_rate: u32, sample_size: u32, channels: u32) -> AudioStream;
    fn UpdateAudioStream(stream: AudioStream, data: *const c_void, samples_count: i32);
    fn IsAudioStreamProcessed(stream: AudioStream) -> bool;
    fn IsAudioStreamPlaying(stream: AudioStream) -> bool;
    fn PlayAudioStream(stream: AudioStream);
    fn StopAudioStream(stream: AudioStream);
    fn PauseAudioStream(stream: AudioStream);
    fn ResumeAudioStream(stream: AudioStream);
    fn SetAudioStreamVolume(stream: AudioStream, volume: f32);
    fn SetAudioStreamPitch(stream: AudioStream, pitch: f32);
    fn CloseAudioStream(stream: AudioStream);
}

static INSTANCE_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Backend calling into the linked raylib library
///
/// raylib keeps its window, GL context and audio device in process globals,
/// so only one backend may exist at a time. The backend is neither `Send` nor
/// `Sync`: GL and GLFW calls must stay on the thread that opened the window.
pub struct RaylibBackend {
    _not_send: PhantomData<*const ()>,
}

impl RaylibBackend {
    /// Claim the process-wide native library
    pub fn new() -> BindingResult<Self> {
        INSTANCE_ACTIVE
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| BindingError::AlreadyInitialized)?;
        log::debug!("raylib backend claimed");
        Ok(Self { _not_send: PhantomData })
    }
}

impl Drop for RaylibBackend {
    fn drop(&mut self) {
        INSTANCE_ACTIVE.store(false, Ordering::Release);
        log::debug!("raylib backend released");
    }
}

fn opt_ptr(s: Option<&CStr>) -> *const c_char {
    s.map_or(ptr::null(), CStr::as_ptr)
}

fn len_i32(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

/// Copy a native string owned by the library
///
/// # Safety
///
/// `raw` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
unsafe fn borrowed_string(raw: *const c_char) -> Option<String> {
    if raw.is_null() {
        None
    } else {
        Some(CStr::from_ptr(raw).to_string_lossy().into_owned())
    }
}

/// Copy `len` elements out of a native array
///
/// # Safety
///
/// `raw` must be null or point to at least `len` initialized elements.
unsafe fn copy_array<T: Copy>(raw: *const T, len: usize) -> Vec<T> {
    if raw.is_null() || len == 0 {
        Vec::new()
    } else {
        std::slice::from_raw_parts(raw, len).to_vec()
    }
}

impl NativeBackend for RaylibBackend {
    // ---- Window and context -------------------------------------------------

    fn set_config_flags(&self, flags: u32) {
        unsafe { SetConfigFlags(flags) }
    }

    fn init_window(&self, width: i32, height: i32, title: &CStr) {
        unsafe { InitWindow(width, height, title.as_ptr()) }
    }

    fn close_window(&self) {
        unsafe { CloseWindow() }
    }

    fn window_should_close(&self) -> bool {
        unsafe { WindowShouldClose() }
    }

    fn is_window_ready(&self) -> bool {
        unsafe { IsWindowReady() }
    }

    fn is_window_fullscreen(&self) -> bool {
        unsafe { IsWindowFullscreen() }
    }

    fn is_window_hidden(&self) -> bool {
        unsafe { IsWindowHidden() }
    }

    fn is_window_minimized(&self) -> bool {
        unsafe { IsWindowMinimized() }
    }

    fn is_window_maximized(&self) -> bool {
        unsafe { IsWindowMaximized() }
    }

    fn is_window_focused(&self) -> bool {
        unsafe { IsWindowFocused() }
    }

    fn is_window_resized(&self) -> bool {
        unsafe { IsWindowResized() }
    }

    fn is_window_state(&self, flag: u32) -> bool {
        unsafe { IsWindowState(flag) }
    }

    fn set_window_state(&self, flags: u32) {
        unsafe { SetWindowState(flags) }
    }

    fn clear_window_state(&self, flags: u32) {
        unsafe { ClearWindowState(flags) }
    }

    fn toggle_fullscreen(&self) {
        unsafe { ToggleFullscreen() }
    }

    fn maximize_window(&self) {
        unsafe { MaximizeWindow() }
    }

    fn minimize_window(&self) {
        unsafe { MinimizeWindow() }
    }

    fn restore_window(&self) {
        unsafe { RestoreWindow() }
    }

    fn set_window_title(&self, title: &CStr) {
        unsafe { SetWindowTitle(title.as_ptr()) }
    }

    fn set_window_position(&self, x: i32, y: i32) {
        unsafe { SetWindowPosition(x, y) }
    }

    fn set_window_monitor(&self, monitor: i32) {
        unsafe { SetWindowMonitor(monitor) }
    }

    fn set_window_min_size(&self, width: i32, height: i32) {
        unsafe { SetWindowMinSize(width, height) }
    }

    fn set_window_size(&self, width: i32, height: i32) {
        unsafe { SetWindowSize(width, height) }
    }

    fn screen_width(&self) -> i32 {
        unsafe { GetScreenWidth() }
    }

    fn screen_height(&self) -> i32 {
        unsafe { GetScreenHeight() }
    }

    fn window_position(&self) -> Vector2 {
        unsafe { GetWindowPosition() }
    }

    fn window_scale_dpi(&self) -> Vector2 {
        unsafe { GetWindowScaleDPI() }
    }

    fn monitor_count(&self) -> i32 {
        unsafe { GetMonitorCount() }
    }

    fn current_monitor(&self) -> i32 {
        unsafe { GetCurrentMonitor() }
    }

    fn monitor_position(&self, monitor: i32) -> Vector2 {
        unsafe { GetMonitorPosition(monitor) }
    }

    fn monitor_width(&self, monitor: i32) -> i32 {
        unsafe { GetMonitorWidth(monitor) }
    }

    fn monitor_height(&self, monitor: i32) -> i32 {
        unsafe { GetMonitorHeight(monitor) }
    }

    fn monitor_physical_width(&self, monitor: i32) -> i32 {
        unsafe { GetMonitorPhysicalWidth(monitor) }
    }

    fn monitor_physical_height(&self, monitor: i32) -> i32 {
        unsafe { GetMonitorPhysicalHeight(monitor) }
    }

    fn monitor_refresh_rate(&self, monitor: i32) -> i32 {
        unsafe { GetMonitorRefreshRate(monitor) }
    }

    fn monitor_name(&self, monitor: i32) -> String {
        // Owned by GLFW, valid until the monitor is disconnected
        unsafe { borrowed_string(GetMonitorName(monitor)) }.unwrap_or_default()
    }

    fn set_clipboard_text(&self, text: &CStr) {
        unsafe { SetClipboardText(text.as_ptr()) }
    }

    fn clipboard_text(&self) -> Option<String> {
        // Owned by GLFW, valid until the next clipboard call
        unsafe { borrowed_string(GetClipboardText()) }
    }

    // ---- Timing -------------------------------------------------------------

    fn set_target_fps(&self, fps: i32) {
        unsafe { SetTargetFPS(fps) }
    }

    fn fps(&self) -> i32 {
        unsafe { GetFPS() }
    }

    fn frame_time(&self) -> f32 {
        unsafe { GetFrameTime() }
    }

    fn time(&self) -> f64 {
        unsafe { GetTime() }
    }

    // ---- Cursor and mouse ---------------------------------------------------

    fn show_cursor(&self) {
        unsafe { ShowCursor() }
    }

    fn hide_cursor(&self) {
        unsafe { HideCursor() }
    }

    fn is_cursor_hidden(&self) -> bool {
        unsafe { IsCursorHidden() }
    }

    fn enable_cursor(&self) {
        unsafe { EnableCursor() }
    }

    fn disable_cursor(&self) {
        unsafe { DisableCursor() }
    }

    fn is_cursor_on_screen(&self) -> bool {
        unsafe { IsCursorOnScreen() }
    }

    fn mouse_position(&self) -> Vector2 {
        unsafe { GetMousePosition() }
    }

    fn set_mouse_position(&self, x: i32, y: i32) {
        unsafe { SetMousePosition(x, y) }
    }

    fn set_mouse_offset(&self, offset_x: i32, offset_y: i32) {
        unsafe { SetMouseOffset(offset_x, offset_y) }
    }

    fn set_mouse_scale(&self, scale_x: f32, scale_y: f32) {
        unsafe { SetMouseScale(scale_x, scale_y) }
    }

    fn mouse_wheel_move(&self) -> f32 {
        unsafe { GetMouseWheelMove() }
    }

    // ---- Drawing modes ------------------------------------------------------

    fn clear_background(&self, color: Color) {
        unsafe { ClearBackground(color) }
    }

    fn begin_mode(&self, mode: ModeBegin) {
        unsafe {
            match mode {
                ModeBegin::Drawing => BeginDrawing(),
                ModeBegin::Mode2D(camera) => BeginMode2D(camera),
                ModeBegin::Mode3D(camera) => BeginMode3D(camera),
                ModeBegin::Texture(target) => BeginTextureMode(target),
                ModeBegin::Shader(shader) => BeginShaderMode(shader),
                ModeBegin::Blend(blend) => BeginBlendMode(blend as i32),
                ModeBegin::Scissor { x, y, width, height } => BeginScissorMode(x, y, width, height),
            }
        }
    }

    fn end_mode(&self, kind: ModeKind) {
        unsafe {
            match kind {
                ModeKind::Drawing => EndDrawing(),
                ModeKind::Mode2D => EndMode2D(),
                ModeKind::Mode3D => EndMode3D(),
                ModeKind::Texture => EndTextureMode(),
                ModeKind::Shader => EndShaderMode(),
                ModeKind::Blend => EndBlendMode(),
                ModeKind::Scissor => EndScissorMode(),
            }
        }
    }

    // ---- Images -------------------------------------------------------------

    fn load_image(&self, file_name: &CStr) -> Image {
        unsafe { LoadImage(file_name.as_ptr()) }
    }

    fn load_image_raw(
        &self,
        file_name: &CStr,
        width: i32,
        height: i32,
        format: i32,
        header_size: i32,
    ) -> Image {
        unsafe { LoadImageRaw(file_name.as_ptr(), width, height, format, header_size) }
    }

    fn load_image_anim(&self, file_name: &CStr) -> (Image, i32) {
        let mut frames = 0;
        let image = unsafe { LoadImageAnim(file_name.as_ptr(), &mut frames) };
        (image, frames)
    }

    fn load_image_from_memory(&self, file_type: &CStr, data: &[u8]) -> Image {
        unsafe { LoadImageFromMemory(file_type.as_ptr(), data.as_ptr(), len_i32(data.len())) }
    }

    fn gen_image(&self, gen: ImageGen) -> Image {
        unsafe {
            match gen {
                ImageGen::Color { width, height, color } => GenImageColor(width, height, color),
                ImageGen::GradientV { width, height, top, bottom } => {
                    GenImageGradientV(width, height, top, bottom)
                }
                ImageGen::GradientH { width, height, left, right } => {
                    GenImageGradientH(width, height, left, right)
                }
                ImageGen::GradientRadial { width, height, density, inner, outer } => {
                    GenImageGradientRadial(width, height, density, inner, outer)
                }
                ImageGen::Checked { width, height, checks_x, checks_y, col1, col2 } => {
                    GenImageChecked(width, height, checks_x, checks_y, col1, col2)
                }
                ImageGen::WhiteNoise { width, height, factor } => {
                    GenImageWhiteNoise(width, height, factor)
                }
                ImageGen::PerlinNoise { width, height, offset_x, offset_y, scale } => {
                    GenImagePerlinNoise(width, height, offset_x, offset_y, scale)
                }
                ImageGen::Cellular { width, height, tile_size } => {
                    GenImageCellular(width, height, tile_size)
                }
            }
        }
    }

    fn image_copy(&self, image: Image) -> Image {
        unsafe { ImageCopy(image) }
    }

    fn image_from_image(&self, image: Image, rec: Rectangle) -> Image {
        unsafe { ImageFromImage(image, rec) }
    }

    fn image_text(&self, text: &CStr, font_size: i32, color: Color) -> Image {
        unsafe { ImageText(text.as_ptr(), font_size, color) }
    }

    fn image_text_ex(&self, font: Font, text: &CStr, font_size: f32, spacing: f32, tint: Color) -> Image {
        unsafe { ImageTextEx(font, text.as_ptr(), font_size, spacing, tint) }
    }

    fn image_op(&self, image: &mut Image, op: ImageOp) {
        let image: *mut Image = image;
        unsafe {
            match op {
                ImageOp::Format(format) => ImageFormat(image, format as i32),
                ImageOp::ToPot(fill) => ImageToPOT(image, fill),
                ImageOp::Crop(rec) => ImageCrop(image, rec),
                ImageOp::AlphaCrop(threshold) => ImageAlphaCrop(image, threshold),
                ImageOp::AlphaClear { color, threshold } => ImageAlphaClear(image, color, threshold),
                ImageOp::AlphaMask(mask) => ImageAlphaMask(image, mask),
                ImageOp::AlphaPremultiply => ImageAlphaPremultiply(image),
                ImageOp::Resize { width, height } => ImageResize(image, width, height),
                ImageOp::ResizeNn { width, height } => ImageResizeNN(image, width, height),
                ImageOp::ResizeCanvas { width, height, offset_x, offset_y, fill } => {
                    ImageResizeCanvas(image, width, height, offset_x, offset_y, fill)
                }
                ImageOp::Mipmaps => ImageMipmaps(image),
                ImageOp::Dither { r_bpp, g_bpp, b_bpp, a_bpp } => {
                    ImageDither(image, r_bpp, g_bpp, b_bpp, a_bpp)
                }
                ImageOp::FlipVertical => ImageFlipVertical(image),
                ImageOp::FlipHorizontal => ImageFlipHorizontal(image),
                ImageOp::RotateCw => ImageRotateCW(image),
                ImageOp::RotateCcw => ImageRotateCCW(image),
                ImageOp::ColorTint(color) => ImageColorTint(image, color),
                ImageOp::ColorInvert => ImageColorInvert(image),
                ImageOp::ColorGrayscale => ImageColorGrayscale(image),
                ImageOp::ColorContrast(contrast) => ImageColorContrast(image, contrast),
                ImageOp::ColorBrightness(brightness) => ImageColorBrightness(image, brightness),
                ImageOp::ColorReplace { color, replace } => ImageColorReplace(image, color, replace),
                ImageOp::ClearBackground(color) => ImageClearBackground(image, color),
                ImageOp::DrawPixel { x, y, color } => ImageDrawPixel(image, x, y, color),
                ImageOp::DrawLine { start_x, start_y, end_x, end_y, color } => {
                    ImageDrawLine(image, start_x, start_y, end_x, end_y, color)
                }
                ImageOp::DrawCircle { center_x, center_y, radius, color } => {
                    ImageDrawCircle(image, center_x, center_y, radius, color)
                }
                ImageOp::DrawRectangle { x, y, width, height, color } => {
                    ImageDrawRectangle(image, x, y, width, height, color)
                }
                ImageOp::DrawRectangleLines { rec, thick, color } => {
                    ImageDrawRectangleLines(image, rec, thick, color)
                }
                ImageOp::Draw { src, src_rec, dst_rec, tint } => {
                    ImageDraw(image, src, src_rec, dst_rec, tint)
                }
            }
        }
    }

    fn image_draw_text(&self, dst: &mut Image, text: &CStr, x: i32, y: i32, font_size: i32, color: Color) {
        unsafe { ImageDrawText(dst, text.as_ptr(), x, y, font_size, color) }
    }

    fn image_draw_text_ex(
        &self,
        dst: &mut Image,
        font: Font,
        text: &CStr,
        position: Vector2,
        font_size: f32,
        spacing: f32,
        tint: Color,
    ) {
        unsafe { ImageDrawTextEx(dst, font, text.as_ptr(), position, font_size, spacing, tint) }
    }

    fn image_alpha_border(&self, image: Image, threshold: f32) -> Rectangle {
        unsafe { GetImageAlphaBorder(image, threshold) }
    }

    fn load_image_colors(&self, image: Image) -> Vec<Color> {
        let count = (image.width.max(0) as usize) * (image.height.max(0) as usize);
        unsafe {
            let raw = LoadImageColors(image);
            let colors = copy_array(raw, count);
            if !raw.is_null() {
                UnloadImageColors(raw);
            }
            colors
        }
    }

    fn load_image_palette(&self, image: Image, max_palette_size: i32) -> Vec<Color> {
        let mut count = 0;
        unsafe {
            let raw = LoadImagePalette(image, max_palette_size, &mut count);
            let colors = copy_array(raw, count.max(0) as usize);
            if !raw.is_null() {
                UnloadImagePalette(raw);
            }
            colors
        }
    }

    fn export_image(&self, image: Image, file_name: &CStr) -> bool {
        unsafe { ExportImage(image, file_name.as_ptr()) }
    }

    fn export_image_as_code(&self, image: Image, file_name: &CStr) -> bool {
        unsafe { ExportImageAsCode(image, file_name.as_ptr()) }
    }

    fn unload_image(&self, image: Image) {
        unsafe { UnloadImage(image) }
    }

    // ---- Textures -----------------------------------------------------------

    fn load_texture(&self, file_name: &CStr) -> Texture {
        unsafe { LoadTexture(file_name.as_ptr()) }
    }

    fn load_texture_from_image(&self, image: Image) -> Texture {
        unsafe { LoadTextureFromImage(image) }
    }

    fn load_texture_cubemap(&self, image: Image, layout: CubemapLayout) -> Texture {
        unsafe { LoadTextureCubemap(image, layout as i32) }
    }

    fn load_render_texture(&self, width: i32, height: i32) -> RenderTexture {
        unsafe { LoadRenderTexture(width, height) }
    }

    fn update_texture(&self, texture: Texture, pixels: &[u8]) {
        unsafe { UpdateTexture(texture, pixels.as_ptr().cast()) }
    }

    fn update_texture_rec(&self, texture: Texture, rec: Rectangle, pixels: &[u8]) {
        unsafe { UpdateTextureRec(texture, rec, pixels.as_ptr().cast()) }
    }

    fn texture_to_image(&self, texture: Texture) -> Image {
        unsafe { GetTextureData(texture) }
    }

    fn gen_texture_mipmaps(&self, texture: &mut Texture) {
        unsafe { GenTextureMipmaps(texture) }
    }

    fn set_texture_filter(&self, texture: Texture, filter: TextureFilter) {
        unsafe { SetTextureFilter(texture, filter as i32) }
    }

    fn set_texture_wrap(&self, texture: Texture, wrap: TextureWrap) {
        unsafe { SetTextureWrap(texture, wrap as i32) }
    }

    fn draw_texture(&self, texture: Texture, draw: TextureDraw<'_>) {
        unsafe {
            match draw {
                TextureDraw::Basic { x, y, tint } => DrawTexture(texture, x, y, tint),
                TextureDraw::V { position, tint } => DrawTextureV(texture, position, tint),
                TextureDraw::Ex { position, rotation, scale, tint } => {
                    DrawTextureEx(texture, position, rotation, scale, tint)
                }
                TextureDraw::Rec { source, position, tint } => {
                    DrawTextureRec(texture, source, position, tint)
                }
                TextureDraw::Quad { tiling, offset, quad, tint } => {
                    DrawTextureQuad(texture, tiling, offset, quad, tint)
                }
                TextureDraw::Tiled { source, dest, origin, rotation, scale, tint } => {
                    DrawTextureTiled(texture, source, dest, origin, rotation, scale, tint)
                }
                TextureDraw::Pro { source, dest, origin, rotation, tint } => {
                    DrawTexturePro(texture, source, dest, origin, rotation, tint)
                }
                TextureDraw::NPatch { info, dest, origin, rotation, tint } => {
                    DrawTextureNPatch(texture, info, dest, origin, rotation, tint)
                }
                TextureDraw::Poly { center, points, texcoords, tint } => {
                    // Only read by the native side despite the mutable pointer types
                    let count = len_i32(points.len().min(texcoords.len()));
                    DrawTexturePoly(
                        texture,
                        center,
                        points.as_ptr().cast_mut(),
                        texcoords.as_ptr().cast_mut(),
                        count,
                        tint,
                    )
                }
            }
        }
    }

    fn unload_texture(&self, texture: Texture) {
        unsafe { UnloadTexture(texture) }
    }

    fn unload_render_texture(&self, target: RenderTexture) {
        unsafe { UnloadRenderTexture(target) }
    }

    // ---- Shaders ------------------------------------------------------------

    fn load_shader(&self, vs_file_name: Option<&CStr>, fs_file_name: Option<&CStr>) -> Shader {
        unsafe { LoadShader(opt_ptr(vs_file_name), opt_ptr(fs_file_name)) }
    }

    fn load_shader_from_memory(&self, vs_code: Option<&CStr>, fs_code: Option<&CStr>) -> Shader {
        unsafe { LoadShaderFromMemory(opt_ptr(vs_code), opt_ptr(fs_code)) }
    }

    fn shader_location(&self, shader: Shader, uniform_name: &CStr) -> i32 {
        unsafe { GetShaderLocation(shader, uniform_name.as_ptr()) }
    }

    fn shader_location_attrib(&self, shader: Shader, attrib_name: &CStr) -> i32 {
        unsafe { GetShaderLocationAttrib(shader, attrib_name.as_ptr()) }
    }

    fn set_shader_value(&self, shader: Shader, loc: i32, value: &[u8], uniform_type: ShaderUniformDataType) {
        unsafe { SetShaderValue(shader, loc, value.as_ptr().cast(), uniform_type as i32) }
    }

    fn set_shader_value_v(
        &self,
        shader: Shader,
        loc: i32,
        value: &[u8],
        uniform_type: ShaderUniformDataType,
        count: i32,
    ) {
        unsafe { SetShaderValueV(shader, loc, value.as_ptr().cast(), uniform_type as i32, count) }
    }

    fn set_shader_value_matrix(&self, shader: Shader, loc: i32, mat: Matrix) {
        unsafe { SetShaderValueMatrix(shader, loc, mat) }
    }

    fn set_shader_value_texture(&self, shader: Shader, loc: i32, texture: Texture) {
        unsafe { SetShaderValueTexture(shader, loc, texture) }
    }

    fn unload_shader(&self, shader: Shader) {
        unsafe { UnloadShader(shader) }
    }

    // ---- Meshes and materials -----------------------------------------------

    fn gen_mesh(&self, shape: MeshShape) -> Mesh {
        unsafe {
            match shape {
                MeshShape::Poly { sides, radius } => GenMeshPoly(sides, radius),
                MeshShape::Plane { width, length, res_x, res_z } => {
                    GenMeshPlane(width, length, res_x, res_z)
                }
                MeshShape::Cube { width, height, length } => GenMeshCube(width, height, length),
                MeshShape::Sphere { radius, rings, slices } => GenMeshSphere(radius, rings, slices),
                MeshShape::HemiSphere { radius, rings, slices } => {
                    GenMeshHemiSphere(radius, rings, slices)
                }
                MeshShape::Cylinder { radius, height, slices } => {
                    GenMeshCylinder(radius, height, slices)
                }
                MeshShape::Torus { radius, size, rad_seg, sides } => {
                    GenMeshTorus(radius, size, rad_seg, sides)
                }
                MeshShape::Knot { radius, size, rad_seg, sides } => {
                    GenMeshKnot(radius, size, rad_seg, sides)
                }
                MeshShape::Heightmap { heightmap, size } => GenMeshHeightmap(heightmap, size),
                MeshShape::Cubicmap { cubicmap, cube_size } => GenMeshCubicmap(cubicmap, cube_size),
            }
        }
    }

    fn upload_mesh(&self, mesh: &mut Mesh, dynamic: bool) {
        unsafe { UploadMesh(mesh, dynamic) }
    }

    fn update_mesh_buffer(&self, mesh: Mesh, index: i32, data: &[u8], offset: i32) {
        // Only read by the native side despite the mutable pointer type
        unsafe {
            UpdateMeshBuffer(
                mesh,
                index,
                data.as_ptr().cast_mut().cast(),
                len_i32(data.len()),
                offset,
            )
        }
    }

    fn gen_mesh_tangents(&self, mesh: &mut Mesh) {
        unsafe { GenMeshTangents(mesh) }
    }

    fn export_mesh(&self, mesh: Mesh, file_name: &CStr) -> bool {
        unsafe { ExportMesh(mesh, file_name.as_ptr()) }
    }

    fn draw_mesh(&self, mesh: Mesh, material: Material, transform: Matrix) {
        unsafe { DrawMesh(mesh, material, transform) }
    }

    fn draw_mesh_instanced(&self, mesh: Mesh, material: Material, transforms: &[Matrix]) {
        unsafe {
            DrawMeshInstanced(
                mesh,
                material,
                transforms.as_ptr().cast_mut(),
                len_i32(transforms.len()),
            )
        }
    }

    fn unload_mesh(&self, mesh: Mesh) {
        unsafe { UnloadMesh(mesh) }
    }

    fn load_material_default(&self) -> Material {
        unsafe { LoadMaterialDefault() }
    }

    fn load_materials(&self, file_name: &CStr) -> Vec<Material> {
        let mut count = 0;
        unsafe {
            let raw = LoadMaterials(file_name.as_ptr(), &mut count);
            let materials = copy_array(raw, count.max(0) as usize);
            // The array is ours, the materials inside now belong to the caller
            if !raw.is_null() {
                MemFree(raw.cast());
            }
            materials
        }
    }

    fn set_material_texture(&self, material: &mut Material, map_type: MaterialMapIndex, texture: Texture) {
        unsafe { SetMaterialTexture(material, map_type as i32, texture) }
    }

    fn unload_material(&self, material: Material) {
        unsafe { UnloadMaterial(material) }
    }

    // ---- Fonts --------------------------------------------------------------

    fn font_default(&self) -> Font {
        unsafe { GetFontDefault() }
    }

    fn load_font(&self, file_name: &CStr) -> Font {
        unsafe { LoadFont(file_name.as_ptr()) }
    }

    fn load_font_ex(&self, file_name: &CStr, font_size: i32, codepoints: Option<&[i32]>) -> Font {
        let (chars, count) = codepoints.map_or((ptr::null_mut(), 0), |cps| {
            (cps.as_ptr().cast_mut(), len_i32(cps.len()))
        });
        unsafe { LoadFontEx(file_name.as_ptr(), font_size, chars, count) }
    }

    fn load_font_from_image(&self, image: Image, key: Color, first_char: i32) -> Font {
        unsafe { LoadFontFromImage(image, key, first_char) }
    }

    fn load_font_from_memory(
        &self,
        file_type: &CStr,
        data: &[u8],
        font_size: i32,
        codepoints: Option<&[i32]>,
    ) -> Font {
        let (chars, count) = codepoints.map_or((ptr::null_mut(), 0), |cps| {
            (cps.as_ptr().cast_mut(), len_i32(cps.len()))
        });
        unsafe {
            LoadFontFromMemory(
                file_type.as_ptr(),
                data.as_ptr(),
                len_i32(data.len()),
                font_size,
                chars,
                count,
            )
        }
    }

    fn draw_text_ex(&self, font: Font, text: &CStr, position: Vector2, font_size: f32, spacing: f32, tint: Color) {
        unsafe { DrawTextEx(font, text.as_ptr(), position, font_size, spacing, tint) }
    }

    fn measure_text_ex(&self, font: Font, text: &CStr, font_size: f32, spacing: f32) -> Vector2 {
        unsafe { MeasureTextEx(font, text.as_ptr(), font_size, spacing) }
    }

    fn unload_font(&self, font: Font) {
        unsafe { UnloadFont(font) }
    }

    // ---- Audio device -------------------------------------------------------

    fn init_audio_device(&self) {
        unsafe { InitAudioDevice() }
    }

    fn close_audio_device(&self) {
        unsafe { CloseAudioDevice() }
    }

    fn is_audio_device_ready(&self) -> bool {
        unsafe { IsAudioDeviceReady() }
    }

    fn set_master_volume(&self, volume: f32) {
        unsafe { SetMasterVolume(volume) }
    }

    fn set_audio_stream_buffer_size_default(&self, size: i32) {
        unsafe { SetAudioStreamBufferSizeDefault(size) }
    }

    fn sounds_playing(&self) -> i32 {
        unsafe { GetSoundsPlaying() }
    }

    fn stop_sound_multi(&self) {
        unsafe { StopSoundMulti() }
    }

    // ---- Waves --------------------------------------------------------------

    fn load_wave(&self, file_name: &CStr) -> Wave {
        unsafe { LoadWave(file_name.as_ptr()) }
    }

    fn load_wave_from_memory(&self, file_type: &CStr, data: &[u8]) -> Wave {
        unsafe { LoadWaveFromMemory(file_type.as_ptr(), data.as_ptr(), len_i32(data.len())) }
    }

    fn wave_copy(&self, wave: Wave) -> Wave {
        unsafe { WaveCopy(wave) }
    }

    fn wave_op(&self, wave: &mut Wave, op: WaveOp) {
        unsafe {
            match op {
                WaveOp::Format { sample_rate, sample_size, channels } => {
                    WaveFormat(wave, sample_rate, sample_size, channels)
                }
                WaveOp::Crop { init_sample, final_sample } => WaveCrop(wave, init_sample, final_sample),
            }
        }
    }

    fn load_wave_samples(&self, wave: Wave) -> Vec<f32> {
        unsafe {
            let raw = LoadWaveSamples(wave);
            let samples = copy_array(raw, wave.sample_count as usize);
            if !raw.is_null() {
                UnloadWaveSamples(raw);
            }
            samples
        }
    }

    fn export_wave(&self, wave: Wave, file_name: &CStr) -> bool {
        unsafe { ExportWave(wave, file_name.as_ptr()) }
    }

    fn export_wave_as_code(&self, wave: Wave, file_name: &CStr) -> bool {
        unsafe { ExportWaveAsCode(wave, file_name.as_ptr()) }
    }

    fn unload_wave(&self, wave: Wave) {
        unsafe { UnloadWave(wave) }
    }

    // ---- Sounds -------------------------------------------------------------

    fn load_sound(&self, file_name: &CStr) -> Sound {
        unsafe { LoadSound(file_name.as_ptr()) }
    }

    fn load_sound_from_wave(&self, wave: Wave) -> Sound {
        unsafe { LoadSoundFromWave(wave) }
    }

    fn update_sound(&self, sound: Sound, data: &[u8], sample_count: i32) {
        unsafe { UpdateSound(sound, data.as_ptr().cast(), sample_count) }
    }

    fn sound_playback(&self, sound: Sound, op: Playback) {
        unsafe {
            match op {
                Playback::Play => PlaySound(sound),
                Playback::Stop => StopSound(sound),
                Playback::Pause => PauseSound(sound),
                Playback::Resume => ResumeSound(sound),
            }
        }
    }

    fn play_sound_multi(&self, sound: Sound) {
        unsafe { PlaySoundMulti(sound) }
    }

    fn is_sound_playing(&self, sound: Sound) -> bool {
        unsafe { IsSoundPlaying(sound) }
    }

    fn set_sound_volume(&self, sound: Sound, volume: f32) {
        unsafe { SetSoundVolume(sound, volume) }
    }

    fn set_sound_pitch(&self, sound: Sound, pitch: f32) {
        unsafe { SetSoundPitch(sound, pitch) }
    }

    fn unload_sound(&self, sound: Sound) {
        unsafe { UnloadSound(sound) }
    }

    // ---- Music --------------------------------------------------------------

    fn load_music_stream(&self, file_name: &CStr) -> Music {
        unsafe { LoadMusicStream(file_name.as_ptr()) }
    }

    fn load_music_stream_from_memory(&self, file_type: &CStr, data: &[u8]) -> Music {
        unsafe { LoadMusicStreamFromMemory(file_type.as_ptr(), data.as_ptr(), len_i32(data.len())) }
    }

    fn music_playback(&self, music: Music, op: Playback) {
        unsafe {
            match op {
                Playback::Play => PlayMusicStream(music),
                Playback::Stop => StopMusicStream(music),
                Playback::Pause => PauseMusicStream(music),
                Playback::Resume => ResumeMusicStream(music),
            }
        }
    }

    fn update_music_stream(&self, music: Music) {
        unsafe { UpdateMusicStream(music) }
    }

    fn is_music_playing(&self, music: Music) -> bool {
        unsafe { IsMusicPlaying(music) }
    }

    fn set_music_volume(&self, music: Music, volume: f32) {
        unsafe { SetMusicVolume(music, volume) }
    }

    fn set_music_pitch(&self, music: Music, pitch: f32) {
        unsafe { SetMusicPitch(music, pitch) }
    }

    fn music_time_length(&self, music: Music) -> f32 {
        unsafe { GetMusicTimeLength(music) }
    }

    fn music_time_played(&self, music: Music) -> f32 {
        unsafe { GetMusicTimePlayed(music) }
    }

    fn unload_music_stream(&self, music: Music) {
        unsafe { UnloadMusicStream(music) }
    }

    // ---- Raw audio streams --------------------------------------------------

    fn init_audio_stream(&self, sample_rate: u32, sample_size: u32, channels: u32) -> AudioStream {
        unsafe { InitAudioStream(sample_rate, sample_size, channels) }
    }

    fn update_audio_stream(&self, stream: AudioStream, data: &[u8], sample_count: i32) {
        unsafe { UpdateAudioStream(stream, data.as_ptr().cast(), sample_count) }
    }

    fn is_audio_stream_processed(&self, stream: AudioStream) -> bool {
        unsafe { IsAudioStreamProcessed(stream) }
    }

    fn is_audio_stream_playing(&self, stream: AudioStream) -> bool {
        unsafe { IsAudioStreamPlaying(stream) }
    }

    fn stream_playback(&self, stream: AudioStream, op: Playback) {
        unsafe {
            match op {
                Playback::Play => PlayAudioStream(stream),
                Playback::Stop => StopAudioStream(stream),
                Playback::Pause => PauseAudioStream(stream),
                Playback::Resume => ResumeAudioStream(stream),
            }
        }
    }

    fn set_audio_stream_volume(&self, stream: AudioStream, volume: f32) {
        unsafe { SetAudioStreamVolume(stream, volume) }
    }

    fn set_audio_stream_pitch(&self, stream: AudioStream, pitch: f32) {
        unsafe { SetAudioStreamPitch(stream, pitch) }
    }

    fn close_audio_stream(&self, stream: AudioStream) {
        unsafe { CloseAudioStream(stream) }
    }
}
