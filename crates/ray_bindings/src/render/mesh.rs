//! Vertex data in CPU and GPU memory

use std::fmt;
use std::path::Path;

use bytemuck::Pod;

use super::{Image, Material};
use crate::backend::{MeshShape, NativeBackend};
use crate::core::Context;
use crate::error::{BindingError, BindingResult};
use crate::ffi;
use crate::foundation::strings::{native_len, path_to_cstring};
use crate::foundation::{Matrix, Vector3};
use crate::resource::{native_wrapper, Resource};

/// GPU vertex buffer slots, in native order
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshBuffer {
    /// `vec3` positions
    Positions = 0,
    /// `vec2` texture coordinates
    Texcoords = 1,
    /// `vec3` normals
    Normals = 2,
    /// RGBA8 colors
    Colors = 3,
    /// `vec4` tangents
    Tangents = 4,
    /// Second set of `vec2` texture coordinates
    Texcoords2 = 5,
    /// `u16` indices
    Indices = 6,
}

/// Mesh geometry
pub struct Mesh<'a> {
    res: Resource<'a, ffi::Mesh>,
}

native_wrapper!(Mesh, ffi::Mesh, Context<'_>);

impl<'a> Mesh<'a> {
    pub(crate) fn acquire(
        backend: &'a dyn NativeBackend,
        raw: ffi::Mesh,
        origin: impl fmt::Display,
    ) -> BindingResult<Self> {
        Ok(Self {
            res: Resource::acquire(backend, raw, origin)?,
        })
    }

    /// Generate a mesh procedurally
    ///
    /// Generated meshes come back already uploaded as static buffers.
    pub fn generate(ctx: &'a Context<'_>, shape: MeshShape) -> BindingResult<Self> {
        let source = match shape {
            MeshShape::Heightmap { heightmap: image, .. } | MeshShape::Cubicmap { cubicmap: image, .. } => {
                Some(image)
            }
            _ => None,
        };
        if source.map_or(false, |image| image.data.is_null()) {
            return Err(BindingError::InvalidArgument(format!(
                "{} needs a loaded source image",
                shape.symbol()
            )));
        }

        let raw = ctx.backend().gen_mesh(shape);
        Self::acquire(ctx.backend(), raw, shape.symbol())
    }

    /// Terrain mesh from a grayscale heightmap
    pub fn heightmap(heightmap: &Image<'a>, size: Vector3) -> BindingResult<Self> {
        let shape = MeshShape::Heightmap { heightmap: *heightmap.raw(), size };
        let backend = heightmap.backend();
        Self::acquire(backend, backend.gen_mesh(shape), shape.symbol())
    }

    /// Block mesh from a cubicmap image, one cube per white pixel
    pub fn cubicmap(cubicmap: &Image<'a>, cube_size: Vector3) -> BindingResult<Self> {
        let shape = MeshShape::Cubicmap { cubicmap: *cubicmap.raw(), cube_size };
        let backend = cubicmap.backend();
        Self::acquire(backend, backend.gen_mesh(shape), shape.symbol())
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> i32 {
        self.raw().vertex_count
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> i32 {
        self.raw().triangle_count
    }

    /// Vertex array object id, 0 when the mesh has no GPU copy
    pub fn vao_id(&self) -> u32 {
        self.raw().vao_id
    }

    /// Whether the vertex data lives on the GPU
    pub fn is_uploaded(&self) -> bool {
        self.raw().vao_id != 0 && !self.raw().vbo_id.is_null()
    }

    /// Whether tangents have been generated
    pub fn has_tangents(&self) -> bool {
        !self.raw().tangents.is_null()
    }

    /// Upload vertex data to the GPU
    ///
    /// Only meshes adopted without a GPU copy need this; generated meshes
    /// are uploaded as static when created and the native side ignores a
    /// second upload. Returns whether an upload happened.
    pub fn upload(&mut self, dynamic: bool) -> bool {
        if self.is_uploaded() {
            log::warn!(
                "Mesh {:#x} is already uploaded, dynamic={} ignored",
                self.handle(),
                dynamic
            );
            return false;
        }
        let backend = self.backend();
        backend.upload_mesh(self.res.raw_mut(), dynamic);
        true
    }

    /// Overwrite part of one GPU buffer, starting `offset` bytes in
    pub fn update_buffer<T: Pod>(&self, buffer: MeshBuffer, data: &[T], offset: usize) -> BindingResult<()> {
        if !self.is_uploaded() {
            return Err(BindingError::InvalidArgument(
                "mesh buffers can only be updated after upload".to_string(),
            ));
        }
        let bytes: &[u8] = bytemuck::cast_slice(data);
        native_len(bytes.len())?;
        let offset = native_len(offset)?;
        self.backend()
            .update_mesh_buffer(*self.raw(), buffer as i32, bytes, offset);
        Ok(())
    }

    /// Compute tangents from positions, normals and texture coordinates
    pub fn gen_tangents(&mut self) {
        let backend = self.backend();
        backend.gen_mesh_tangents(self.res.raw_mut());
    }

    /// Write the mesh to a file
    pub fn export(&self, path: impl AsRef<Path>) -> BindingResult<()> {
        let path = path.as_ref();
        let file = path_to_cstring(path)?;
        if self.backend().export_mesh(*self.raw(), &file) {
            Ok(())
        } else {
            Err(BindingError::ExportFailed(path.display().to_string()))
        }
    }

    /// Draw once with `material`
    pub fn draw(&self, material: &Material<'_>, transform: Matrix) {
        self.backend().draw_mesh(*self.raw(), *material.raw(), transform);
    }

    /// Draw once per transform
    pub fn draw_instanced(&self, material: &Material<'_>, transforms: &[Matrix]) -> BindingResult<()> {
        native_len(transforms.len())?;
        self.backend()
            .draw_mesh_instanced(*self.raw(), *material.raw(), transforms);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{ImageGen, RecordingBackend};
    use crate::config::WindowConfig;
    use crate::foundation::Color;

    /// Same vertex data with the GPU copy stripped
    fn cpu_only<'a>(ctx: &'a Context<'_>, mesh: Mesh<'a>) -> Mesh<'a> {
        let mut raw = mesh.into_raw();
        raw.vao_id = 0;
        raw.vbo_id = std::ptr::null_mut();
        // SAFETY: the recording backend frees nothing and `raw` has one owner
        unsafe { Mesh::from_raw(ctx, raw) }
    }

    #[test]
    fn test_generated_counts() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &WindowConfig::default()).unwrap();
        let mesh = Mesh::generate(&ctx, MeshShape::Cube { width: 1.0, height: 1.0, length: 1.0 }).unwrap();

        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.is_uploaded());
        assert_eq!(backend.values("UploadMesh"), vec![0.0]);
    }

    #[test]
    fn test_second_upload_is_skipped() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &WindowConfig::default()).unwrap();
        let mut mesh = Mesh::generate(&ctx, MeshShape::Plane { width: 2.0, length: 2.0, res_x: 2, res_z: 2 }).unwrap();
        let vao = mesh.vao_id();

        assert!(!mesh.upload(true));
        assert_eq!(mesh.vao_id(), vao);
        assert_eq!(backend.values("UploadMesh"), vec![0.0]);
    }

    #[test]
    fn test_heightmap_needs_image_data() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &WindowConfig::default()).unwrap();
        let shape = MeshShape::Heightmap {
            heightmap: ffi::Image::default(),
            size: Vector3::new(4.0, 1.0, 4.0),
        };

        assert!(matches!(Mesh::generate(&ctx, shape), Err(BindingError::InvalidArgument(_))));
        assert_eq!(backend.count("GenMeshHeightmap"), 0);

        let image = Image::generate(
            &ctx,
            ImageGen::Color { width: 5, height: 5, color: Color::GRAY },
        )
        .unwrap();
        let terrain = Mesh::heightmap(&image, Vector3::new(4.0, 1.0, 4.0)).unwrap();
        assert_eq!(terrain.triangle_count(), 32);
    }

    #[test]
    fn test_update_buffer_after_upload() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &WindowConfig::default()).unwrap();
        let generated = Mesh::generate(&ctx, MeshShape::Poly { sides: 3, radius: 1.0 }).unwrap();
        let mut mesh = cpu_only(&ctx, generated);
        let positions = [Vector3::ZERO; 3];

        assert!(mesh.update_buffer(MeshBuffer::Positions, &positions, 0).is_err());

        assert!(mesh.upload(true));
        assert!(mesh.is_uploaded());
        assert_eq!(backend.values("UploadMesh"), vec![0.0, 1.0]);

        mesh.update_buffer(MeshBuffer::Normals, &positions, 12).unwrap();
        let upload = backend.uploads().pop().unwrap();
        assert_eq!(upload.count, MeshBuffer::Normals as i32);
        assert_eq!(upload.bytes.len(), 36);
        assert_eq!(backend.values("UpdateMeshBuffer"), vec![12.0]);
    }

    #[test]
    fn test_draw_instanced_count_from_slice() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &WindowConfig::default()).unwrap();
        let mesh = Mesh::generate(&ctx, MeshShape::Cube { width: 1.0, height: 1.0, length: 1.0 }).unwrap();
        let material = Material::default_material(&ctx).unwrap();
        let transforms = [
            Matrix::IDENTITY,
            Matrix::translation(1.0, 0.0, 0.0),
            Matrix::translation(2.0, 0.0, 0.0),
        ];

        mesh.draw_instanced(&material, &transforms).unwrap();
        let upload = backend.uploads().pop().unwrap();
        assert_eq!(upload.count, 3);
        assert_eq!(upload.bytes.len(), 3 * 64);
    }

    #[test]
    fn test_gen_tangents_writes_back() {
        let backend = RecordingBackend::new();
        let ctx = Context::init(&backend, &WindowConfig::default()).unwrap();
        let mut mesh = Mesh::generate(&ctx, MeshShape::Sphere { radius: 1.0, rings: 8, slices: 8 }).unwrap();

        assert!(!mesh.has_tangents());
        mesh.gen_tangents();
        assert!(mesh.has_tangents());
        assert_eq!(backend.unload_count("UnloadMesh"), 0);
    }
}
