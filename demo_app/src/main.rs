//! Bindings demo application
//!
//! Opens a window, builds a checkerboard texture and a cube mesh, and draws
//! them for a fixed number of frames. Without the `native` feature every
//! native call goes to the recording backend and is summarized at exit.

use std::path::Path;

use ray_bindings::backend::{ImageGen, MeshShape};
use ray_bindings::foundation::logging;
use ray_bindings::prelude::*;
use ray_bindings::render::FontView;

const CONFIG_PATH: &str = "config.toml";
const DEMO_FRAMES: u32 = 120;

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Binding(#[from] BindingError),
    #[error("No backend feature enabled, build with `native` or `recording`")]
    NoBackend,
}

fn load_config() -> BindingConfig {
    let path = Path::new(CONFIG_PATH);
    if !path.exists() {
        return BindingConfig::default();
    }
    match BindingConfig::load_from_file(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Ignoring {}: {}", CONFIG_PATH, e);
            BindingConfig::default()
        }
    }
}

struct Scene<'a> {
    texture: Texture2D<'a>,
    cube: Mesh<'a>,
    material: Material<'a>,
    font: FontView<'a>,
    camera: Camera3D,
    rotation: f32,
}

impl<'a> Scene<'a> {
    fn build(ctx: &'a Context<'_>) -> BindingResult<Self> {
        let mut image = Image::generate(
            ctx,
            ImageGen::Checked {
                width: 64,
                height: 64,
                checks_x: 8,
                checks_y: 8,
                col1: Color::DARKBLUE,
                col2: Color::SKYBLUE,
            },
        )?;
        image.draw_rectangle_lines(Rectangle::new(0.0, 0.0, 64.0, 64.0), 2, Color::GOLD);
        let mut texture = Texture2D::from_image(&image)?;
        texture.gen_mipmaps();

        let cube = Mesh::generate(ctx, MeshShape::Cube { width: 2.0, height: 2.0, length: 2.0 })?;

        let mut material = Material::default_material(ctx)?;
        material.set_texture(
            ray_bindings::ffi::MaterialMapIndex::Albedo,
            Texture2D::from_image(&image)?,
        );

        log::info!(
            "Scene ready: texture {}x{} ({} mips), cube with {} triangles",
            texture.width(),
            texture.height(),
            texture.mipmaps(),
            cube.triangle_count()
        );

        Ok(Self {
            texture,
            cube,
            material,
            font: Font::default_font(ctx)?,
            camera: Camera3D::default(),
            rotation: 0.0,
        })
    }

    fn frame(&mut self, ctx: &Context<'_>) -> BindingResult<()> {
        self.rotation = (self.rotation + 1.5) % 360.0;

        let _drawing = ctx.begin_drawing();
        ctx.clear_background(Color::RAYWHITE);
        {
            let _mode = ctx.begin_mode_3d(self.camera);
            self.cube.draw(&self.material, Matrix::translation(0.0, 1.0, 0.0));
        }
        self.texture
            .draw_ex(Vector2::new(16.0, 16.0), self.rotation, 1.0, Color::WHITE);
        self.font.draw_text(
            &format!("{} fps", ctx.fps()),
            Vector2::new(16.0, 96.0),
            20.0,
            2.0,
            Color::DARKGRAY,
        )
    }
}

fn run(backend: &dyn NativeBackend, config: &BindingConfig) -> Result<(), DemoError> {
    let ctx = Context::init(backend, &config.window)?;

    let audio = if config.audio.enabled {
        match AudioDevice::from_config(backend, &config.audio) {
            Ok(device) => Some(device),
            Err(e) => {
                log::warn!("Continuing without audio: {}", e);
                None
            }
        }
    } else {
        None
    };

    let chime = match &audio {
        Some(device) => match Sound::load(device, "resources/chime.wav") {
            Ok(sound) => Some(sound),
            Err(e) => {
                log::warn!("No chime: {}", e);
                None
            }
        },
        None => None,
    };

    let mut scene = Scene::build(&ctx)?;
    let mut frames = 0;
    while !ctx.window_should_close() && frames < DEMO_FRAMES {
        scene.frame(&ctx)?;
        if frames == 0 {
            if let Some(sound) = &chime {
                sound.play();
            }
        }
        frames += 1;
    }

    log::info!("Drew {} frames in {:.2}s", frames, ctx.time());
    Ok(())
}

#[cfg(feature = "native")]
fn main() -> Result<(), DemoError> {
    let config = load_config();
    logging::init_with_level(&config.log_level);
    log::info!("Starting bindings demo on raylib");

    let backend = ray_bindings::backend::RaylibBackend::new()?;
    run(&backend, &config)
}

#[cfg(all(feature = "recording", not(feature = "native")))]
fn main() -> Result<(), DemoError> {
    let config = load_config();
    logging::init_with_level(&config.log_level);
    log::info!("Starting bindings demo on the recording backend");

    let backend = ray_bindings::backend::RecordingBackend::new();
    run(&backend, &config)?;

    log::info!(
        "{} native calls, {} unloads",
        backend.calls().len(),
        backend.unloads().len()
    );
    Ok(())
}

#[cfg(not(any(feature = "native", feature = "recording")))]
fn main() -> Result<(), DemoError> {
    let _ = load_config();
    Err(DemoError::NoBackend)
}
