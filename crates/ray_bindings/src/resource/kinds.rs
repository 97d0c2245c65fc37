//! Sentinel and unload bindings for each raw resource struct

use super::{NativeResource, ResourceKind};
use crate::backend::NativeBackend;
use crate::ffi;

impl NativeResource for ffi::Image {
    const KIND: ResourceKind = ResourceKind::Image;
    const UNLOAD_SYMBOL: &'static str = "UnloadImage";

    fn is_loaded(&self) -> bool {
        !self.data.is_null()
    }

    fn handle(&self) -> u64 {
        self.data as usize as u64
    }

    fn unload(self, backend: &dyn NativeBackend) {
        backend.unload_image(self);
    }
}

impl NativeResource for ffi::Texture {
    const KIND: ResourceKind = ResourceKind::Texture;
    const UNLOAD_SYMBOL: &'static str = "UnloadTexture";

    fn is_loaded(&self) -> bool {
        self.id != 0
    }

    fn handle(&self) -> u64 {
        u64::from(self.id)
    }

    fn unload(self, backend: &dyn NativeBackend) {
        backend.unload_texture(self);
    }
}

impl NativeResource for ffi::RenderTexture {
    const KIND: ResourceKind = ResourceKind::RenderTexture;
    const UNLOAD_SYMBOL: &'static str = "UnloadRenderTexture";

    fn is_loaded(&self) -> bool {
        self.id != 0
    }

    fn handle(&self) -> u64 {
        u64::from(self.id)
    }

    // Frees the framebuffer and both attachments
    fn unload(self, backend: &dyn NativeBackend) {
        backend.unload_render_texture(self);
    }
}

impl NativeResource for ffi::Shader {
    const KIND: ResourceKind = ResourceKind::Shader;
    const UNLOAD_SYMBOL: &'static str = "UnloadShader";

    fn is_loaded(&self) -> bool {
        self.id != 0
    }

    fn handle(&self) -> u64 {
        u64::from(self.id)
    }

    fn unload(self, backend: &dyn NativeBackend) {
        backend.unload_shader(self);
    }
}

impl NativeResource for ffi::Material {
    const KIND: ResourceKind = ResourceKind::Material;
    const UNLOAD_SYMBOL: &'static str = "UnloadMaterial";

    fn is_loaded(&self) -> bool {
        !self.maps.is_null()
    }

    fn handle(&self) -> u64 {
        self.maps as usize as u64
    }

    // Frees the shader (unless default) and the map textures (unless default)
    fn unload(self, backend: &dyn NativeBackend) {
        backend.unload_material(self);
    }
}

impl NativeResource for ffi::Mesh {
    const KIND: ResourceKind = ResourceKind::Mesh;
    const UNLOAD_SYMBOL: &'static str = "UnloadMesh";

    fn is_loaded(&self) -> bool {
        !self.vertices.is_null()
    }

    fn handle(&self) -> u64 {
        self.vertices as usize as u64
    }

    fn unload(self, backend: &dyn NativeBackend) {
        backend.unload_mesh(self);
    }
}

impl NativeResource for ffi::Font {
    const KIND: ResourceKind = ResourceKind::Font;
    const UNLOAD_SYMBOL: &'static str = "UnloadFont";

    fn is_loaded(&self) -> bool {
        self.texture.id != 0
    }

    fn handle(&self) -> u64 {
        u64::from(self.texture.id)
    }

    fn unload(self, backend: &dyn NativeBackend) {
        backend.unload_font(self);
    }
}

impl NativeResource for ffi::Wave {
    const KIND: ResourceKind = ResourceKind::Wave;
    const UNLOAD_SYMBOL: &'static str = "UnloadWave";

    fn is_loaded(&self) -> bool {
        !self.data.is_null()
    }

    fn handle(&self) -> u64 {
        self.data as usize as u64
    }

    fn unload(self, backend: &dyn NativeBackend) {
        backend.unload_wave(self);
    }
}

impl NativeResource for ffi::Sound {
    const KIND: ResourceKind = ResourceKind::Sound;
    const UNLOAD_SYMBOL: &'static str = "UnloadSound";

    fn is_loaded(&self) -> bool {
        !self.stream.buffer.is_null()
    }

    fn handle(&self) -> u64 {
        self.stream.buffer as usize as u64
    }

    fn unload(self, backend: &dyn NativeBackend) {
        backend.unload_sound(self);
    }
}

impl NativeResource for ffi::Music {
    const KIND: ResourceKind = ResourceKind::Music;
    const UNLOAD_SYMBOL: &'static str = "UnloadMusicStream";

    fn is_loaded(&self) -> bool {
        !self.stream.buffer.is_null()
    }

    fn handle(&self) -> u64 {
        self.stream.buffer as usize as u64
    }

    fn unload(self, backend: &dyn NativeBackend) {
        backend.unload_music_stream(self);
    }
}

impl NativeResource for ffi::AudioStream {
    const KIND: ResourceKind = ResourceKind::AudioStream;
    const UNLOAD_SYMBOL: &'static str = "CloseAudioStream";

    fn is_loaded(&self) -> bool {
        !self.buffer.is_null()
    }

    fn handle(&self) -> u64 {
        self.buffer as usize as u64
    }

    fn unload(self, backend: &dyn NativeBackend) {
        backend.close_audio_stream(self);
    }
}
