//! Shader programs and uniforms
//!
//! Uniform setters derive the native uniform type from the Rust value type
//! through [`UniformValue`], so a `[f32; 3]` is always sent as `vec3`.

use std::fmt;
use std::path::Path;

use bytemuck::Pod;

use super::DrawTexture;
use crate::backend::NativeBackend;
use crate::core::Context;
use crate::error::BindingResult;
use crate::ffi::{self, ShaderLocationIndex, ShaderUniformDataType, MAX_SHADER_LOCATIONS};
use crate::foundation::strings::{native_len, path_to_cstring, to_cstring};
use crate::foundation::{Matrix, Vector2, Vector3, Vector4};
use crate::resource::{native_wrapper, Resource};

/// Value types accepted by the uniform setters
pub trait UniformValue: Pod {
    /// Native uniform type for this value
    const DATA_TYPE: ShaderUniformDataType;
}

macro_rules! uniform_value {
    ($($ty:ty => $data:ident),* $(,)?) => {
        $(
            impl UniformValue for $ty {
                const DATA_TYPE: ShaderUniformDataType = ShaderUniformDataType::$data;
            }
        )*
    };
}

uniform_value!(
    f32 => Float,
    [f32; 2] => Vec2,
    [f32; 3] => Vec3,
    [f32; 4] => Vec4,
    Vector2 => Vec2,
    Vector3 => Vec3,
    Vector4 => Vec4,
    i32 => Int,
    [i32; 2] => Ivec2,
    [i32; 3] => Ivec3,
    [i32; 4] => Ivec4,
);

/// Compiled shader program
pub struct Shader<'a> {
    res: Resource<'a, ffi::Shader>,
}

native_wrapper!(Shader, ffi::Shader, Context<'_>);

impl<'a> Shader<'a> {
    pub(crate) fn acquire(
        backend: &'a dyn NativeBackend,
        raw: ffi::Shader,
        origin: impl fmt::Display,
    ) -> BindingResult<Self> {
        Ok(Self {
            res: Resource::acquire(backend, raw, origin)?,
        })
    }

    /// Compile a shader from source files
    ///
    /// `None` for a stage keeps the library's default vertex or fragment stage.
    pub fn load(ctx: &'a Context<'_>, vertex: Option<&Path>, fragment: Option<&Path>) -> BindingResult<Self> {
        let vs = vertex.map(path_to_cstring).transpose()?;
        let fs = fragment.map(path_to_cstring).transpose()?;
        let raw = ctx.backend().load_shader(vs.as_deref(), fs.as_deref());
        Self::acquire(
            ctx.backend(),
            raw,
            format_args!(
                "{} + {}",
                vertex.map_or("default".into(), |p| p.display().to_string()),
                fragment.map_or("default".into(), |p| p.display().to_string()),
            ),
        )
    }

    /// Compile a shader from source code
    pub fn load_from_memory(
        ctx: &'a Context<'_>,
        vertex: Option<&str>,
        fragment: Option<&str>,
    ) -> BindingResult<Self> {
        let vs = vertex.map(to_cstring).transpose()?;
        let fs = fragment.map(to_cstring).transpose()?;
        let raw = ctx.backend().load_shader_from_memory(vs.as_deref(), fs.as_deref());
        Self::acquire(ctx.backend(), raw, "shader source")
    }

    /// Program id
    pub fn id(&self) -> u32 {
        self.raw().id
    }

    /// Default locations filled in by the loader, indexed by [`ShaderLocationIndex`]
    pub fn locs(&self) -> &[i32] {
        // SAFETY: a live shader's `locs` points at MAX_SHADER_LOCATIONS ints
        // owned by the native side until UnloadShader, which needs `self`.
        unsafe { shader_locs(self.raw()) }
    }

    /// Non-owning view for uniform setters
    pub fn view(&self) -> ShaderView<'_> {
        ShaderView::new(*self.raw(), self.backend())
    }

    /// See [`ShaderView::location`]
    pub fn location(&self, uniform: &str) -> BindingResult<Option<i32>> {
        self.view().location(uniform)
    }

    /// See [`ShaderView::set_value`]
    pub fn set_value<U: UniformValue>(&self, loc: i32, value: &U) {
        self.view().set_value(loc, value);
    }

    /// See [`ShaderView::set_values`]
    pub fn set_values<U: UniformValue>(&self, loc: i32, values: &[U]) -> BindingResult<()> {
        self.view().set_values(loc, values)
    }

    /// See [`ShaderView::set_matrix`]
    pub fn set_matrix(&self, loc: i32, mat: Matrix) {
        self.view().set_matrix(loc, mat);
    }

    /// See [`ShaderView::set_texture`]
    pub fn set_texture(&self, loc: i32, texture: &impl DrawTexture) {
        self.view().set_texture(loc, texture);
    }
}

unsafe fn shader_locs(raw: &ffi::Shader) -> &[i32] {
    if raw.locs.is_null() {
        &[]
    } else {
        std::slice::from_raw_parts(raw.locs, MAX_SHADER_LOCATIONS)
    }
}

/// Borrowed shader, such as the one inside a material
#[derive(Clone, Copy)]
pub struct ShaderView<'v> {
    raw: ffi::Shader,
    backend: &'v dyn NativeBackend,
}

impl<'v> ShaderView<'v> {
    pub(crate) fn new(raw: ffi::Shader, backend: &'v dyn NativeBackend) -> Self {
        Self { raw, backend }
    }

    /// Raw native struct
    pub fn raw(&self) -> &ffi::Shader {
        &self.raw
    }

    /// Program id
    pub fn id(&self) -> u32 {
        self.raw.id
    }

    /// Location stored by the loader for a standard slot
    pub fn default_location(&self, index: ShaderLocationIndex) -> Option<i32> {
        // SAFETY: the owner of this view keeps the native locs array alive
        // for `'v`.
        let locs = unsafe { shader_locs(&self.raw) };
        locs.get(index as usize).copied().filter(|loc| *loc >= 0)
    }

    /// Uniform location, `None` if the program has no such active uniform
    pub fn location(&self, uniform: &str) -> BindingResult<Option<i32>> {
        let name = to_cstring(uniform)?;
        let loc = self.backend.shader_location(self.raw, &name);
        Ok((loc >= 0).then_some(loc))
    }

    /// Attribute location, `None` if the program has no such attribute
    pub fn attrib_location(&self, attrib: &str) -> BindingResult<Option<i32>> {
        let name = to_cstring(attrib)?;
        let loc = self.backend.shader_location_attrib(self.raw, &name);
        Ok((loc >= 0).then_some(loc))
    }

    /// Set a single uniform
    pub fn set_value<U: UniformValue>(&self, loc: i32, value: &U) {
        self.backend
            .set_shader_value(self.raw, loc, bytemuck::bytes_of(value), U::DATA_TYPE);
    }

    /// Set a uniform array
    pub fn set_values<U: UniformValue>(&self, loc: i32, values: &[U]) -> BindingResult<()> {
        let count = native_len(values.len())?;
        self.backend.set_shader_value_v(
            self.raw,
            loc,
            bytemuck::cast_slice(values),
            U::DATA_TYPE,
            count,
        );
        Ok(())
    }

    /// Set a `mat4` uniform
    pub fn set_matrix(&self, loc: i32, mat: Matrix) {
        self.backend.set_shader_value_matrix(self.raw, loc, mat);
    }

    /// Bind a texture to a `sampler2D` uniform
    pub fn set_texture(&self, loc: i32, texture: &impl DrawTexture) {
        self.backend
            .set_shader_value_texture(self.raw, loc, texture.raw_texture());
    }
}

impl fmt::Debug for ShaderView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ShaderView").field(&self.raw).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;
    use crate::config::WindowConfig;
    use crate::render::Texture2D;

    #[test]
    fn test_default_stages_pass_null() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &WindowConfig::default()).unwrap();
        let shader = Shader::load(&ctx, None, Some(Path::new("glow.fs"))).unwrap();

        assert_eq!(shader.locs().len(), MAX_SHADER_LOCATIONS);
        assert_eq!(shader.view().default_location(ShaderLocationIndex::MatrixMvp), None);
    }

    #[test]
    fn test_missing_uniform_is_none() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &WindowConfig::default()).unwrap();
        let shader = Shader::load_from_memory(&ctx, None, Some("void main() {}")).unwrap();

        backend.live_mut().shader_location = -1;
        assert_eq!(shader.location("time").unwrap(), None);
        backend.live_mut().shader_location = 3;
        assert_eq!(shader.location("time").unwrap(), Some(3));
        assert!(shader.location("ti\0me").is_err());
    }

    #[test]
    fn test_uniform_type_follows_value_type() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &WindowConfig::default()).unwrap();
        let shader = Shader::load_from_memory(&ctx, None, None).unwrap();

        shader.set_value(4, &Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(
            backend.values("SetShaderValue"),
            vec![4.0, ShaderUniformDataType::Vec3 as i32 as f32]
        );
        let upload = &backend.uploads()[0];
        assert_eq!(upload.bytes.len(), 12);

        shader.set_values(2, &[[1i32, 2]; 5]).unwrap();
        let upload = &backend.uploads()[1];
        assert_eq!(upload.symbol, "SetShaderValueV");
        assert_eq!(upload.count, 5);
        assert_eq!(upload.bytes.len(), 40);
        assert_eq!(
            backend.values("SetShaderValueV"),
            vec![2.0, ShaderUniformDataType::Ivec2 as i32 as f32]
        );
    }

    #[test]
    fn test_set_texture_binds_texture_id() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &WindowConfig::default()).unwrap();
        let shader = Shader::load_from_memory(&ctx, None, None).unwrap();
        let texture = Texture2D::load(&ctx, "mask.png").unwrap();

        shader.set_texture(1, &texture);
        let upload = backend.uploads().pop().unwrap();
        assert_eq!(upload.symbol, "SetShaderValueTexture");
        assert_eq!(upload.count, 1);
        assert_eq!(&upload.bytes[..4], &texture.id().to_ne_bytes());
    }
}
