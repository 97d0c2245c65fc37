//! # ray_bindings
//!
//! Safe Rust bindings for raylib 3.7.
//!
//! ## Features
//!
//! - **Owned resources**: every native allocation (images, textures, shaders,
//!   meshes, fonts, waves, sounds, music, streams) is unloaded exactly once
//! - **Scoped modes**: drawing, camera, blend and scissor modes end when their
//!   guard goes out of scope
//! - **Swappable backends**: the native library behind a trait, with a
//!   recording backend for tests
//! - **Configuration**: window, audio and logging settings from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ray_bindings::prelude::*;
//!
//! fn main() -> BindingResult<()> {
//!     let backend = RaylibBackend::new()?;
//!     let ctx = Context::init(&backend, &WindowConfig::new(800, 450, "demo"))?;
//!     let texture = Texture2D::load(&ctx, "resources/logo.png")?;
//!
//!     while !ctx.window_should_close() {
//!         let _frame = ctx.begin_drawing();
//!         ctx.clear_background(Color::RAYWHITE);
//!         texture.draw(10, 10, Color::WHITE);
//!     }
//!     Ok(())
//! }
//! ```

pub mod foundation;
pub mod error;
pub mod config;
pub mod ffi;
pub mod backend;
pub mod resource;
pub mod core;
pub mod render;
pub mod audio;

#[cfg(test)]
mod tests;

pub use error::{BindingError, BindingResult};

/// Common imports for binding users
pub mod prelude {
    pub use crate::{
        audio::{AudioDevice, AudioStream, Music, Sample, Sound, Wave},
        backend::NativeBackend,
        config::{AudioConfig, BindingConfig, Config, WindowConfig},
        core::{ConfigFlags, Context, ModeGuard},
        error::{BindingError, BindingResult},
        foundation::{Camera2D, Camera3D, Color, Matrix, Rectangle, Vector2, Vector3, Vector4},
        render::{
            DrawTexture, Font, Image, Material, Mesh, RenderTexture2D, Shader, TextFont, Texture2D,
        },
    };

    #[cfg(feature = "native")]
    pub use crate::backend::RaylibBackend;

    #[cfg(feature = "recording")]
    pub use crate::backend::RecordingBackend;
}
