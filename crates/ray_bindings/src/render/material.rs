//! Materials: a shader plus texture maps

use std::fmt;
use std::path::Path;

use super::{ShaderView, Texture2D, TextureView};
use crate::backend::NativeBackend;
use crate::core::Context;
use crate::error::{BindingError, BindingResult};
use crate::ffi::{self, MaterialMapIndex, MAX_MATERIAL_MAPS};
use crate::foundation::strings::path_to_cstring;
use crate::resource::{native_wrapper, Resource, ResourceKind};

/// Shader and texture maps used to draw meshes
///
/// `UnloadMaterial` frees the map textures and a non-default shader, so both
/// are exposed as views only.
pub struct Material<'a> {
    res: Resource<'a, ffi::Material>,
}

native_wrapper!(Material, ffi::Material, Context<'_>);

impl<'a> Material<'a> {
    pub(crate) fn acquire(
        backend: &'a dyn NativeBackend,
        raw: ffi::Material,
        origin: impl fmt::Display,
    ) -> BindingResult<Self> {
        Ok(Self {
            res: Resource::acquire(backend, raw, origin)?,
        })
    }

    /// Material with the default shader and a white albedo map
    pub fn default_material(ctx: &'a Context<'_>) -> BindingResult<Self> {
        let raw = ctx.backend().load_material_default();
        Self::acquire(ctx.backend(), raw, "default material")
    }

    /// Every material defined in a model or `.mtl` file
    pub fn load_all(ctx: &'a Context<'_>, path: impl AsRef<Path>) -> BindingResult<Vec<Self>> {
        let path = path.as_ref();
        let file = path_to_cstring(path)?;
        let raws = ctx.backend().load_materials(&file);
        if raws.is_empty() {
            log::warn!("No materials found in {}", path.display());
            return Err(BindingError::LoadFailed {
                kind: ResourceKind::Material,
                origin: path.display().to_string(),
            });
        }

        let count = raws.len();
        let materials = raws
            .into_iter()
            .enumerate()
            .map(|(i, raw)| {
                Self::acquire(
                    ctx.backend(),
                    raw,
                    format_args!("{} ({}/{})", path.display(), i + 1, count),
                )
            })
            .collect::<BindingResult<Vec<_>>>()?;
        log::debug!("Loaded {} materials from {}", count, path.display());
        Ok(materials)
    }

    /// Shader used by this material
    pub fn shader(&self) -> ShaderView<'_> {
        ShaderView::new(self.raw().shader, self.backend())
    }

    /// All texture maps, indexed by [`MaterialMapIndex`]
    pub fn maps(&self) -> &[ffi::MaterialMap] {
        let maps = self.raw().maps;
        if maps.is_null() {
            return &[];
        }
        // SAFETY: a live material's `maps` points at MAX_MATERIAL_MAPS entries
        // that stay allocated until UnloadMaterial, which needs `self`.
        unsafe { std::slice::from_raw_parts(maps, MAX_MATERIAL_MAPS) }
    }

    /// Texture bound to one map slot
    pub fn map_texture(&self, index: MaterialMapIndex) -> Option<TextureView<'_>> {
        self.maps()
            .get(index as usize)
            .filter(|map| map.texture.id != 0)
            .map(|map| TextureView::new(map.texture, self.backend()))
    }

    /// Generic shader parameters
    pub fn params(&self) -> [f32; 4] {
        self.raw().params
    }

    /// Bind `texture` to a map slot, handing its ownership to the material
    ///
    /// The texture is freed with the material. A texture previously bound to
    /// the slot is left to the native side.
    pub fn set_texture(&mut self, index: MaterialMapIndex, texture: Texture2D<'a>) {
        let raw = texture.into_raw();
        log::debug!("Material map {:?} now uses texture {}", index, raw.id);
        let backend = self.backend();
        backend.set_material_texture(self.res.raw_mut(), index, raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;
    use crate::config::WindowConfig;

    #[test]
    fn test_default_material_maps() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &WindowConfig::default()).unwrap();
        let material = Material::default_material(&ctx).unwrap();

        assert_eq!(material.maps().len(), MAX_MATERIAL_MAPS);
        assert_eq!(material.map_texture(MaterialMapIndex::Albedo).map(|t| t.id()), Some(1));
        assert!(material.map_texture(MaterialMapIndex::Normal).is_none());
        assert_ne!(material.shader().id(), 0);
    }

    #[test]
    fn test_set_texture_transfers_ownership() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &WindowConfig::default()).unwrap();
        let mut material = Material::default_material(&ctx).unwrap();
        let texture = Texture2D::load(&ctx, "diffuse.png").unwrap();
        let id = texture.id();

        material.set_texture(MaterialMapIndex::Albedo, texture);
        assert_eq!(material.map_texture(MaterialMapIndex::Albedo).map(|t| t.id()), Some(id));

        drop(material);
        assert_eq!(backend.unload_count("UnloadTexture"), 0);
        assert_eq!(backend.unload_count("UnloadMaterial"), 1);
        assert_eq!(backend.unload_count("UnloadShader"), 0);
    }

    #[test]
    fn test_load_all() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &WindowConfig::default()).unwrap();
        backend.live_mut().material_file_count = 3;

        let materials = Material::load_all(&ctx, "scene.mtl").unwrap();
        assert_eq!(materials.len(), 3);
        drop(materials);
        assert_eq!(backend.unload_count("UnloadMaterial"), 3);
    }

    #[test]
    fn test_load_all_empty_file() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &WindowConfig::default()).unwrap();
        backend.live_mut().material_file_count = 0;

        match Material::load_all(&ctx, "empty.mtl") {
            Err(BindingError::LoadFailed { kind, .. }) => assert_eq!(kind, ResourceKind::Material),
            other => panic!("expected LoadFailed, got {:?}", other.map(|m| m.len())),
        };
    }
}
