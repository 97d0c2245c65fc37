//! # Backend Module
//!
//! The seam between safe wrappers and the native library. Every native entry
//! point the crate uses is a method on [`NativeBackend`], so the wrappers can be
//! driven by the real library or by a recording stub.
//!
//! ## Organization
//!
//! - **ops**: operation enums naming native entry points
//! - **raylib**: `extern "C"` backend linking the native library (feature `native`)
//! - **recording**: in-process stub that records calls (tests, feature `recording`)
//!
//! ## Conventions
//!
//! - Arguments are raw mirrors from [`crate::ffi`], `&CStr`, and slices whose
//!   length becomes the native element count
//! - Native functions taking `T *` for in-place mutation take `&mut T`
//! - Native heap arrays are copied into owned values and freed before returning

pub mod ops;

#[cfg(feature = "native")]
pub mod raylib;

#[cfg(any(test, feature = "recording"))]
pub mod recording;

use std::ffi::CStr;

use crate::ffi::{
    self, CubemapLayout, MaterialMapIndex, ShaderUniformDataType, TextureFilter, TextureWrap,
};
use crate::foundation::{Color, Matrix, Rectangle, Vector2};

pub use ops::{
    ImageGen, ImageOp, MeshShape, ModeBegin, ModeKind, Playback, PlaybackTarget, TextureDraw,
    WaveOp,
};

#[cfg(feature = "native")]
pub use raylib::RaylibBackend;

#[cfg(any(test, feature = "recording"))]
pub use recording::RecordingBackend;

/// Native library entry points
///
/// All methods take `&self`: the native library keeps its own global state, so
/// there is nothing for Rust to borrow mutably. Handles passed in must come from
/// the same backend instance.
pub trait NativeBackend {
    // ---- Window and context -------------------------------------------------

    /// Setup init configuration flags (`SetConfigFlags`)
    fn set_config_flags(&self, flags: u32);

    /// Initialize window and OpenGL context (`InitWindow`)
    fn init_window(&self, width: i32, height: i32, title: &CStr);

    /// Close window and unload OpenGL context (`CloseWindow`)
    fn close_window(&self);

    /// Check if KEY_ESCAPE pressed or close icon clicked
    fn window_should_close(&self) -> bool;

    /// Check if window has been initialized successfully
    fn is_window_ready(&self) -> bool;

    /// Check if window is currently fullscreen
    fn is_window_fullscreen(&self) -> bool;

    /// Check if window is currently hidden
    fn is_window_hidden(&self) -> bool;

    /// Check if window is currently minimized
    fn is_window_minimized(&self) -> bool;

    /// Check if window is currently maximized
    fn is_window_maximized(&self) -> bool;

    /// Check if window is currently focused
    fn is_window_focused(&self) -> bool;

    /// Check if window has been resized last frame
    fn is_window_resized(&self) -> bool;

    /// Check if one specific window flag is enabled
    fn is_window_state(&self, flag: u32) -> bool;

    /// Set window configuration state using flags
    fn set_window_state(&self, flags: u32);

    /// Clear window configuration state flags
    fn clear_window_state(&self, flags: u32);

    /// Toggle window state: fullscreen/windowed
    fn toggle_fullscreen(&self);

    /// Set window state: maximized, if resizable
    fn maximize_window(&self);

    /// Set window state: minimized, if resizable
    fn minimize_window(&self);

    /// Set window state: not minimized/maximized
    fn restore_window(&self);

    /// Set title for window
    fn set_window_title(&self, title: &CStr);

    /// Set window position on screen
    fn set_window_position(&self, x: i32, y: i32);

    /// Set monitor for the current window (fullscreen mode)
    fn set_window_monitor(&self, monitor: i32);

    /// Set window minimum dimensions (for FLAG_WINDOW_RESIZABLE)
    fn set_window_min_size(&self, width: i32, height: i32);

    /// Set window dimensions
    fn set_window_size(&self, width: i32, height: i32);

    /// Current screen width
    fn screen_width(&self) -> i32;

    /// Current screen height
    fn screen_height(&self) -> i32;

    /// Window position XY on monitor
    fn window_position(&self) -> Vector2;

    /// Window scale DPI factor
    fn window_scale_dpi(&self) -> Vector2;

    /// Number of connected monitors
    fn monitor_count(&self) -> i32;

    /// Current connected monitor
    fn current_monitor(&self) -> i32;

    /// Specified monitor position
    fn monitor_position(&self, monitor: i32) -> Vector2;

    /// Specified monitor width (max available by monitor)
    fn monitor_width(&self, monitor: i32) -> i32;

    /// Specified monitor height (max available by monitor)
    fn monitor_height(&self, monitor: i32) -> i32;

    /// Specified monitor physical width in millimetres
    fn monitor_physical_width(&self, monitor: i32) -> i32;

    /// Specified monitor physical height in millimetres
    fn monitor_physical_height(&self, monitor: i32) -> i32;

    /// Specified monitor refresh rate
    fn monitor_refresh_rate(&self, monitor: i32) -> i32;

    /// Human-readable name of the specified monitor
    fn monitor_name(&self, monitor: i32) -> String;

    /// Set clipboard text content
    fn set_clipboard_text(&self, text: &CStr);

    /// Clipboard text content, `None` when the clipboard holds no text
    fn clipboard_text(&self) -> Option<String>;

    // ---- Timing -------------------------------------------------------------

    /// Set target FPS (maximum)
    fn set_target_fps(&self, fps: i32);

    /// Current FPS
    fn fps(&self) -> i32;

    /// Time in seconds for last frame drawn (delta time)
    fn frame_time(&self) -> f32;

    /// Elapsed time in seconds since InitWindow()
    fn time(&self) -> f64;

    // ---- Cursor and mouse ---------------------------------------------------

    /// Shows cursor
    fn show_cursor(&self);

    /// Hides cursor
    fn hide_cursor(&self);

    /// Check if cursor is not visible
    fn is_cursor_hidden(&self) -> bool;

    /// Enables cursor (unlock cursor)
    fn enable_cursor(&self);

    /// Disables cursor (lock cursor)
    fn disable_cursor(&self);

    /// Check if cursor is on the screen
    fn is_cursor_on_screen(&self) -> bool;

    /// Mouse position XY
    fn mouse_position(&self) -> Vector2;

    /// Set mouse position XY
    fn set_mouse_position(&self, x: i32, y: i32);

    /// Set mouse offset
    fn set_mouse_offset(&self, offset_x: i32, offset_y: i32);

    /// Set mouse scaling
    fn set_mouse_scale(&self, scale_x: f32, scale_y: f32);

    /// Mouse wheel movement Y
    fn mouse_wheel_move(&self) -> f32;

    // ---- Drawing modes ------------------------------------------------------

    /// Set background color (framebuffer clear color)
    fn clear_background(&self, color: Color);

    /// Open a begin/end pair
    fn begin_mode(&self, mode: ModeBegin);

    /// Close a begin/end pair
    fn end_mode(&self, kind: ModeKind);

    // ---- Images -------------------------------------------------------------

    /// Load image from file into CPU memory (RAM)
    fn load_image(&self, file_name: &CStr) -> ffi::Image;

    /// Load image from RAW file data
    fn load_image_raw(
        &self,
        file_name: &CStr,
        width: i32,
        height: i32,
        format: i32,
        header_size: i32,
    ) -> ffi::Image;

    /// Load image sequence from file (frames appended to image.data), returns the frame count
    fn load_image_anim(&self, file_name: &CStr) -> (ffi::Image, i32);

    /// Load image from memory buffer, `file_type` refers to extension: i.e. ".png"
    fn load_image_from_memory(&self, file_type: &CStr, data: &[u8]) -> ffi::Image;

    /// Generate an image procedurally
    fn gen_image(&self, gen: ImageGen) -> ffi::Image;

    /// Create an image duplicate (useful for transformations)
    fn image_copy(&self, image: ffi::Image) -> ffi::Image;

    /// Create an image from another image piece
    fn image_from_image(&self, image: ffi::Image, rec: Rectangle) -> ffi::Image;

    /// Create an image from text (default font)
    fn image_text(&self, text: &CStr, font_size: i32, color: Color) -> ffi::Image;

    /// Create an image from text (custom sprite font)
    fn image_text_ex(
        &self,
        font: ffi::Font,
        text: &CStr,
        font_size: f32,
        spacing: f32,
        tint: Color,
    ) -> ffi::Image;

    /// Apply an in-place image mutator
    fn image_op(&self, image: &mut ffi::Image, op: ImageOp);

    /// Draw text (using default font) within an image (destination)
    fn image_draw_text(
        &self,
        dst: &mut ffi::Image,
        text: &CStr,
        x: i32,
        y: i32,
        font_size: i32,
        color: Color,
    );

    /// Draw text (custom sprite font) within an image (destination)
    #[allow(clippy::too_many_arguments)]
    fn image_draw_text_ex(
        &self,
        dst: &mut ffi::Image,
        font: ffi::Font,
        text: &CStr,
        position: Vector2,
        font_size: f32,
        spacing: f32,
        tint: Color,
    );

    /// Get image alpha border rectangle
    fn image_alpha_border(&self, image: ffi::Image, threshold: f32) -> Rectangle;

    /// Load color data from image as a Color array (RGBA - 32bit)
    fn load_image_colors(&self, image: ffi::Image) -> Vec<Color>;

    /// Load colors palette from image as a Color array (RGBA - 32bit)
    fn load_image_palette(&self, image: ffi::Image, max_palette_size: i32) -> Vec<Color>;

    /// Export image data to file, returns true on success
    fn export_image(&self, image: ffi::Image, file_name: &CStr) -> bool;

    /// Export image as code file defining an array of bytes, returns true on success
    fn export_image_as_code(&self, image: ffi::Image, file_name: &CStr) -> bool;

    /// Unload image from CPU memory (RAM)
    fn unload_image(&self, image: ffi::Image);

    // ---- Textures -----------------------------------------------------------

    /// Load texture from file into GPU memory (VRAM)
    fn load_texture(&self, file_name: &CStr) -> ffi::Texture;

    /// Load texture from image data
    fn load_texture_from_image(&self, image: ffi::Image) -> ffi::Texture;

    /// Load cubemap from image, multiple image cubemap layouts supported
    fn load_texture_cubemap(&self, image: ffi::Image, layout: CubemapLayout) -> ffi::Texture;

    /// Load texture for rendering (framebuffer)
    fn load_render_texture(&self, width: i32, height: i32) -> ffi::RenderTexture;

    /// Update GPU texture with new data
    fn update_texture(&self, texture: ffi::Texture, pixels: &[u8]);

    /// Update GPU texture rectangle with new data
    fn update_texture_rec(&self, texture: ffi::Texture, rec: Rectangle, pixels: &[u8]);

    /// Get pixel data from GPU texture and return an Image (`GetTextureData`)
    fn texture_to_image(&self, texture: ffi::Texture) -> ffi::Image;

    /// Generate GPU mipmaps for a texture
    fn gen_texture_mipmaps(&self, texture: &mut ffi::Texture);

    /// Set texture scaling filter mode
    fn set_texture_filter(&self, texture: ffi::Texture, filter: TextureFilter);

    /// Set texture wrapping mode
    fn set_texture_wrap(&self, texture: ffi::Texture, wrap: TextureWrap);

    /// Issue a textured draw call
    fn draw_texture(&self, texture: ffi::Texture, draw: TextureDraw<'_>);

    /// Unload texture from GPU memory (VRAM)
    fn unload_texture(&self, texture: ffi::Texture);

    /// Unload render texture from GPU memory (VRAM)
    fn unload_render_texture(&self, target: ffi::RenderTexture);

    // ---- Shaders ------------------------------------------------------------

    /// Load shader from files, `None` selects the default stage
    fn load_shader(&self, vs_file_name: Option<&CStr>, fs_file_name: Option<&CStr>) -> ffi::Shader;

    /// Load shader from code strings, `None` selects the default stage
    fn load_shader_from_memory(&self, vs_code: Option<&CStr>, fs_code: Option<&CStr>) -> ffi::Shader;

    /// Get shader uniform location
    fn shader_location(&self, shader: ffi::Shader, uniform_name: &CStr) -> i32;

    /// Get shader attribute location
    fn shader_location_attrib(&self, shader: ffi::Shader, attrib_name: &CStr) -> i32;

    /// Set shader uniform value
    fn set_shader_value(
        &self,
        shader: ffi::Shader,
        loc: i32,
        value: &[u8],
        uniform_type: ShaderUniformDataType,
    );

    /// Set shader uniform value vector
    fn set_shader_value_v(
        &self,
        shader: ffi::Shader,
        loc: i32,
        value: &[u8],
        uniform_type: ShaderUniformDataType,
        count: i32,
    );

    /// Set shader uniform value (matrix 4x4)
    fn set_shader_value_matrix(&self, shader: ffi::Shader, loc: i32, mat: Matrix);

    /// Set shader uniform value for texture (sampler2d)
    fn set_shader_value_texture(&self, shader: ffi::Shader, loc: i32, texture: ffi::Texture);

    /// Unload shader from GPU memory (VRAM)
    fn unload_shader(&self, shader: ffi::Shader);

    // ---- Meshes and materials -----------------------------------------------

    /// Generate a mesh procedurally
    fn gen_mesh(&self, shape: MeshShape) -> ffi::Mesh;

    /// Upload mesh vertex data in GPU and provide VAO/VBO ids
    fn upload_mesh(&self, mesh: &mut ffi::Mesh, dynamic: bool);

    /// Update mesh vertex data in GPU for a specific buffer index
    fn update_mesh_buffer(&self, mesh: ffi::Mesh, index: i32, data: &[u8], offset: i32);

    /// Compute mesh tangents
    fn gen_mesh_tangents(&self, mesh: &mut ffi::Mesh);

    /// Export mesh data to file, returns true on success
    fn export_mesh(&self, mesh: ffi::Mesh, file_name: &CStr) -> bool;

    /// Draw a 3d mesh with material and transform
    fn draw_mesh(&self, mesh: ffi::Mesh, material: ffi::Material, transform: Matrix);

    /// Draw multiple mesh instances with material and different transforms
    fn draw_mesh_instanced(&self, mesh: ffi::Mesh, material: ffi::Material, transforms: &[Matrix]);

    /// Unload mesh data from CPU and GPU
    fn unload_mesh(&self, mesh: ffi::Mesh);

    /// Load default material (Supports: DIFFUSE, SPECULAR, NORMAL maps)
    fn load_material_default(&self) -> ffi::Material;

    /// Load materials from model file
    fn load_materials(&self, file_name: &CStr) -> Vec<ffi::Material>;

    /// Set texture for a material map type
    fn set_material_texture(
        &self,
        material: &mut ffi::Material,
        map_type: MaterialMapIndex,
        texture: ffi::Texture,
    );

    /// Unload material from GPU memory (VRAM)
    fn unload_material(&self, material: ffi::Material);

    // ---- Fonts --------------------------------------------------------------

    /// Get the default Font
    fn font_default(&self) -> ffi::Font;

    /// Load font from file into GPU memory (VRAM)
    fn load_font(&self, file_name: &CStr) -> ffi::Font;

    /// Load font from file with extended parameters, `None` loads the default character set
    fn load_font_ex(&self, file_name: &CStr, font_size: i32, codepoints: Option<&[i32]>) -> ffi::Font;

    /// Load font from Image (XNA style)
    fn load_font_from_image(&self, image: ffi::Image, key: Color, first_char: i32) -> ffi::Font;

    /// Load font from memory buffer, `file_type` refers to extension: i.e. ".ttf"
    fn load_font_from_memory(
        &self,
        file_type: &CStr,
        data: &[u8],
        font_size: i32,
        codepoints: Option<&[i32]>,
    ) -> ffi::Font;

    /// Draw text using font and additional parameters
    fn draw_text_ex(
        &self,
        font: ffi::Font,
        text: &CStr,
        position: Vector2,
        font_size: f32,
        spacing: f32,
        tint: Color,
    );

    /// Measure string size for Font
    fn measure_text_ex(&self, font: ffi::Font, text: &CStr, font_size: f32, spacing: f32) -> Vector2;

    /// Unload Font from GPU memory (VRAM)
    fn unload_font(&self, font: ffi::Font);

    // ---- Audio device -------------------------------------------------------

    /// Initialize audio device and context
    fn init_audio_device(&self);

    /// Close the audio device and context
    fn close_audio_device(&self);

    /// Check if audio device has been initialized successfully
    fn is_audio_device_ready(&self) -> bool;

    /// Set master volume (listener)
    fn set_master_volume(&self, volume: f32);

    /// Default size for new audio streams
    fn set_audio_stream_buffer_size_default(&self, size: i32);

    /// Number of sounds playing in the multichannel pool
    fn sounds_playing(&self) -> i32;

    /// Stop any sound playing (using multichannel buffer pool)
    fn stop_sound_multi(&self);

    // ---- Waves --------------------------------------------------------------

    /// Load wave data from file
    fn load_wave(&self, file_name: &CStr) -> ffi::Wave;

    /// Load wave from memory buffer, `file_type` refers to extension: i.e. ".wav"
    fn load_wave_from_memory(&self, file_type: &CStr, data: &[u8]) -> ffi::Wave;

    /// Copy a wave to a new wave
    fn wave_copy(&self, wave: ffi::Wave) -> ffi::Wave;

    /// Apply an in-place wave mutator
    fn wave_op(&self, wave: &mut ffi::Wave, op: WaveOp);

    /// Load samples data from wave as a floats array
    fn load_wave_samples(&self, wave: ffi::Wave) -> Vec<f32>;

    /// Export wave data to file, returns true on success
    fn export_wave(&self, wave: ffi::Wave, file_name: &CStr) -> bool;

    /// Export wave sample data to code (.h), returns true on success
    fn export_wave_as_code(&self, wave: ffi::Wave, file_name: &CStr) -> bool;

    /// Unload wave data
    fn unload_wave(&self, wave: ffi::Wave);

    // ---- Sounds -------------------------------------------------------------

    /// Load sound from file
    fn load_sound(&self, file_name: &CStr) -> ffi::Sound;

    /// Load sound from wave data
    fn load_sound_from_wave(&self, wave: ffi::Wave) -> ffi::Sound;

    /// Update sound buffer with new data
    fn update_sound(&self, sound: ffi::Sound, data: &[u8], sample_count: i32);

    /// Play, stop, pause or resume a sound
    fn sound_playback(&self, sound: ffi::Sound, op: Playback);

    /// Play a sound (using multichannel buffer pool)
    fn play_sound_multi(&self, sound: ffi::Sound);

    /// Check if a sound is currently playing
    fn is_sound_playing(&self, sound: ffi::Sound) -> bool;

    /// Set volume for a sound (1.0 is max level)
    fn set_sound_volume(&self, sound: ffi::Sound, volume: f32);

    /// Set pitch for a sound (1.0 is base level)
    fn set_sound_pitch(&self, sound: ffi::Sound, pitch: f32);

    /// Unload sound
    fn unload_sound(&self, sound: ffi::Sound);

    // ---- Music --------------------------------------------------------------

    /// Load music stream from file
    fn load_music_stream(&self, file_name: &CStr) -> ffi::Music;

    /// Load music stream from data
    fn load_music_stream_from_memory(&self, file_type: &CStr, data: &[u8]) -> ffi::Music;

    /// Play, stop, pause or resume a music stream
    fn music_playback(&self, music: ffi::Music, op: Playback);

    /// Updates buffers for music streaming
    fn update_music_stream(&self, music: ffi::Music);

    /// Check if music is playing
    fn is_music_playing(&self, music: ffi::Music) -> bool;

    /// Set volume for music (1.0 is max level)
    fn set_music_volume(&self, music: ffi::Music, volume: f32);

    /// Set pitch for a music (1.0 is base level)
    fn set_music_pitch(&self, music: ffi::Music, pitch: f32);

    /// Music time length (in seconds)
    fn music_time_length(&self, music: ffi::Music) -> f32;

    /// Current music time played (in seconds)
    fn music_time_played(&self, music: ffi::Music) -> f32;

    /// Unload music stream
    fn unload_music_stream(&self, music: ffi::Music);

    // ---- Raw audio streams --------------------------------------------------

    /// Init audio stream (to stream raw audio pcm data)
    fn init_audio_stream(&self, sample_rate: u32, sample_size: u32, channels: u32) -> ffi::AudioStream;

    /// Update audio stream buffers with data
    fn update_audio_stream(&self, stream: ffi::AudioStream, data: &[u8], sample_count: i32);

    /// Check if any audio stream buffers requires refill
    fn is_audio_stream_processed(&self, stream: ffi::AudioStream) -> bool;

    /// Check if audio stream is playing
    fn is_audio_stream_playing(&self, stream: ffi::AudioStream) -> bool;

    /// Play, stop, pause or resume an audio stream
    fn stream_playback(&self, stream: ffi::AudioStream, op: Playback);

    /// Set volume for audio stream (1.0 is max level)
    fn set_audio_stream_volume(&self, stream: ffi::AudioStream, volume: f32);

    /// Set pitch for audio stream (1.0 is base level)
    fn set_audio_stream_pitch(&self, stream: ffi::AudioStream, pitch: f32);

    /// Close audio stream and free memory
    fn close_audio_stream(&self, stream: ffi::AudioStream);
}
