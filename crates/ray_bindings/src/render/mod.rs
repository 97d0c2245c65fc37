//! # Render Module
//!
//! GPU and CPU graphics resources. Each type owns one native allocation and
//! frees it on drop; see [`crate::resource`] for the lifecycle rules.
//!
//! ## Organization
//!
//! - **image**: CPU pixel buffers and their in-place mutators
//! - **texture**: GPU textures, borrowed texture views, textured draw calls
//! - **render_texture**: off-screen framebuffers
//! - **shader**: shader programs and typed uniforms
//! - **mesh** / **material**: 3D geometry and what it is drawn with
//! - **font**: glyph atlases and text drawing
//!
//! Every constructor borrows the [`crate::core::Context`] (or a resource
//! derived from it), so the window cannot close while a resource is alive.

mod font;
mod image;
mod material;
mod mesh;
mod render_texture;
mod shader;
mod texture;

pub use font::{Font, FontView, TextFont};
pub use image::Image;
pub use material::Material;
pub use mesh::{Mesh, MeshBuffer};
pub use render_texture::RenderTexture2D;
pub use shader::{Shader, ShaderView, UniformValue};
pub use texture::{DrawTexture, Texture2D, TextureView};

pub use crate::backend::{ImageGen, ImageOp, MeshShape};
