//! Lifecycle contract shared by every native-backed resource
//!
//! Release zeroes every field, unloads exactly once per construction on
//! every exit path, mutators forward their arguments unchanged, and
//! accessors keep their snapshot or live classification.

use std::ffi::CString;

use crate::audio::{AudioDevice, Music, Sound, Wave};
use crate::backend::{ImageGen, ImageOp, MeshShape, NativeBackend, RecordingBackend, WaveOp};
use crate::config::WindowConfig;
use crate::core::Context;
use crate::error::{BindingError, BindingResult};
use crate::ffi::{self, PixelFormat};
use crate::foundation::{Color, Vector3};
use crate::render::{Image, Material, Mesh, Texture2D};
use crate::resource::{Lifecycle, NativeResource, Resource};

#[cfg(test)]
mod tests {
    use super::*;

    fn cstr(text: &str) -> CString {
        CString::new(text).unwrap()
    }

    fn context(backend: &RecordingBackend) -> Context<'_> {
        Context::init(backend, &WindowConfig::new(320, 240, "contract")).unwrap()
    }

    /// Acquire, release, and check the released state
    fn assert_release_zeroes<R: NativeResource + PartialEq>(backend: &RecordingBackend, raw: R) {
        let before = backend.unload_count(R::UNLOAD_SYMBOL);
        let handle = raw.handle();

        let mut res = Resource::acquire(backend, raw, "contract").unwrap();
        res.release();

        assert_eq!(res.state(), Lifecycle::Released, "{}", R::KIND);
        assert_eq!(*res.raw(), R::zeroed(), "{} fields not zeroed", R::KIND);
        assert!(!res.raw().is_loaded(), "{}", R::KIND);

        drop(res);
        assert_eq!(backend.unload_count(R::UNLOAD_SYMBOL), before + 1, "{}", R::KIND);
        assert_eq!(
            backend.unloads().last().map(|u| u.handle),
            Some(handle),
            "{} unloaded the wrong handle",
            R::KIND
        );
    }

    #[test]
    fn test_release_zeroes_every_kind() {
        let backend = RecordingBackend::new();
        let file = cstr("asset");
        let gen = ImageGen::Color { width: 4, height: 4, color: Color::RED };

        assert_release_zeroes(&backend, backend.load_image(&file));
        assert_release_zeroes(&backend, backend.load_texture(&file));
        assert_release_zeroes(&backend, backend.load_render_texture(8, 8));
        assert_release_zeroes(&backend, backend.load_shader(None, None));
        assert_release_zeroes(&backend, backend.load_material_default());
        assert_release_zeroes(&backend, backend.gen_mesh(MeshShape::Cube { width: 1.0, height: 1.0, length: 1.0 }));
        assert_release_zeroes(&backend, backend.load_font(&file));
        assert_release_zeroes(&backend, backend.load_wave(&file));
        assert_release_zeroes(&backend, backend.load_sound(&file));
        assert_release_zeroes(&backend, backend.load_music_stream(&file));
        assert_release_zeroes(&backend, backend.init_audio_stream(44100, 16, 2));
        assert_release_zeroes(&backend, backend.gen_image(gen));
    }

    #[test]
    fn test_sentinels_never_unloaded() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        backend.set_fail_loads(true);

        assert!(Image::load(&ctx, "a.png").is_err());
        assert!(Texture2D::load(&ctx, "a.png").is_err());
        assert!(Material::default_material(&ctx).is_err());
        assert!(Mesh::generate(&ctx, MeshShape::Poly { sides: 5, radius: 1.0 }).is_err());

        backend.set_fail_loads(false);
        let device = AudioDevice::init(&backend).unwrap();
        backend.set_fail_loads(true);
        assert!(Wave::load(&device, "a.wav").is_err());
        assert!(Sound::load(&device, "a.wav").is_err());
        assert!(Music::load(&device, "a.ogg").is_err());

        assert!(backend.unloads().is_empty());
    }

    #[test]
    fn test_one_unload_per_construct_on_error_path() {
        fn build_then_fail(ctx: &Context<'_>, device: &AudioDevice<'_>) -> BindingResult<()> {
            let image = Image::generate(ctx, ImageGen::Color { width: 2, height: 2, color: Color::BLUE })?;
            let _texture = Texture2D::from_image(&image)?;
            let _sound = Sound::load(device, "hit.wav")?;
            // Interior NUL fails before the native call
            let _font = crate::render::Font::load(ctx, "bad\0name.ttf")?;
            unreachable!("font load must fail");
        }

        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        let device = AudioDevice::init(&backend).unwrap();

        let err = build_then_fail(&ctx, &device).unwrap_err();
        assert!(matches!(err, BindingError::InteriorNul(_)));

        assert_eq!(backend.unload_count("UnloadImage"), 1);
        assert_eq!(backend.unload_count("UnloadTexture"), 1);
        assert_eq!(backend.unload_count("UnloadSound"), 1);
        assert_eq!(backend.unload_count("UnloadFont"), 0);
        assert_eq!(backend.unloads().len(), 3);
    }

    #[test]
    fn test_explicit_unload_then_scope_exit() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        {
            let texture = Texture2D::load(&ctx, "a.png").unwrap();
            let _image = Image::load(&ctx, "a.png").unwrap();
            texture.unload();
            assert_eq!(backend.unload_count("UnloadImage"), 0);
        }
        assert_eq!(backend.unload_count("UnloadTexture"), 1);
        assert_eq!(backend.unload_count("UnloadImage"), 1);
    }

    #[test]
    fn test_mutators_forward_arguments_and_write_back() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        let mut image = Image::generate(&ctx, ImageGen::Color { width: 10, height: 6, color: Color::WHITE }).unwrap();
        let original = image.handle();

        image.resize_canvas(16, 12, -2, 3, Color::BLANK);
        assert_eq!(
            backend.image_ops(),
            vec![(
                original,
                ImageOp::ResizeCanvas { width: 16, height: 12, offset_x: -2, offset_y: 3, fill: Color::BLANK }
            )]
        );
        assert_eq!((image.width(), image.height()), (16, 12));
        assert_ne!(image.handle(), original);

        image.set_format(PixelFormat::UncompressedGrayscale);
        assert_eq!(image.format(), Some(PixelFormat::UncompressedGrayscale));

        let mut texture = Texture2D::from_image(&image).unwrap();
        texture.gen_mipmaps();
        assert_eq!(texture.mipmaps(), 5);

        let device = AudioDevice::init(&backend).unwrap();
        let mut wave = Wave::load(&device, "a.wav").unwrap();
        wave.crop(100, 300);
        assert_eq!(backend.wave_ops()[0].1, WaveOp::Crop { init_sample: 100, final_sample: 300 });
        assert_eq!(wave.sample_count(), 400);
    }

    #[test]
    fn test_snapshot_and_live_accessors() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);

        // Texture size is copied at load time
        let mut image = Image::generate(&ctx, ImageGen::Color { width: 8, height: 8, color: Color::RED }).unwrap();
        let texture = Texture2D::from_image(&image).unwrap();
        image.resize(32, 32);
        assert_eq!(texture.width(), 8);
        assert_eq!(image.width(), 32);

        // Window size is queried every time
        backend.live_mut().screen_width = 1024;
        assert_eq!(ctx.screen_width(), 1024);

        // Sound playing state is queried every time
        let device = AudioDevice::init(&backend).unwrap();
        let sound = Sound::load(&device, "a.wav").unwrap();
        assert!(!sound.is_playing());
        backend.live_mut().sound_playing = true;
        assert!(sound.is_playing());
        let samples = sound.sample_count();
        backend.live_mut().sound_playing = false;
        assert!(!sound.is_playing());
        assert_eq!(sound.sample_count(), samples);
    }

    #[test]
    fn test_two_by_two_texture_scenario() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        let image = Image::generate(&ctx, ImageGen::Color { width: 2, height: 2, color: Color::GREEN }).unwrap();
        backend.set_next_texture(ffi::Texture {
            id: 7,
            width: 2,
            height: 2,
            mipmaps: 1,
            format: PixelFormat::UncompressedR8G8B8A8 as i32,
        });

        let raw = backend.load_texture_from_image(*image.raw());
        let mut texture = Resource::acquire(&backend, raw, "2x2 pixels").unwrap();
        assert_eq!(texture.raw().id, 7);
        assert_eq!((texture.raw().width, texture.raw().height), (2, 2));

        texture.release();
        let released = texture.raw();
        assert_eq!(
            (released.id, released.width, released.height, released.mipmaps, released.format),
            (0, 0, 0, 0, 0)
        );
        assert_eq!(backend.unloads().last().map(|u| u.handle), Some(7));
    }

    #[test]
    fn test_adopting_one_handle_twice_unloads_twice() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        let raw = Texture2D::load(&ctx, "a.png").unwrap().into_raw();
        assert!(backend.unloads().is_empty());

        // SAFETY: deliberately violated to observe the aliasing hazard; the
        // recording backend does not free anything.
        let first = unsafe { Texture2D::from_raw(&ctx, raw) };
        let second = unsafe { Texture2D::from_raw(&ctx, raw) };
        first.unload();
        second.unload();

        let unloads = backend.unloads();
        assert_eq!(unloads.len(), 2);
        assert!(unloads.iter().all(|u| u.handle == u64::from(raw.id)));
    }

    #[test]
    fn test_mesh_upload_write_back() {
        let backend = RecordingBackend::new();
        let ctx = context(&backend);
        let generated = Mesh::generate(&ctx, MeshShape::Cylinder { radius: 1.0, height: 2.0, slices: 8 }).unwrap();
        assert!(generated.is_uploaded());

        let mut raw = generated.into_raw();
        let vertices = raw.vertices;
        raw.vao_id = 0;
        raw.vbo_id = std::ptr::null_mut();
        // SAFETY: the recording backend frees nothing and `raw` has one owner
        let mut mesh = unsafe { Mesh::from_raw(&ctx, raw) };

        assert!(mesh.upload(false));
        assert_ne!(mesh.vao_id(), 0);
        assert!(!mesh.raw().vbo_id.is_null());
        assert_eq!(mesh.raw().vertices, vertices);

        let heightmap = Image::generate(&ctx, ImageGen::Color { width: 3, height: 3, color: Color::GRAY }).unwrap();
        let terrain = Mesh::heightmap(&heightmap, Vector3::new(1.0, 1.0, 1.0)).unwrap();
        assert_eq!(terrain.triangle_count(), 8);
    }
}
