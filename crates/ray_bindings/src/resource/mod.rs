//! Native-backed resource lifecycle
//!
//! Every GPU or audio allocation made by the native library is owned by exactly
//! one [`Resource`]. A resource is either live (the native allocation exists and
//! the raw fields describe it) or released (the native unload has run and every
//! raw field is zero). Construction validates the loader output, so a live
//! resource is never a sentinel.
//!
//! ```text
//! acquire --ok--> [Live] --release / drop--> [Released]
//!    \--sentinel--> Err(LoadFailed), nothing to unload
//! ```
//!
//! The typed wrappers in [`crate::render`] and [`crate::audio`] hold a
//! `Resource` and are neither `Copy` nor `Clone`, so a native handle cannot be
//! duplicated through them.

mod kinds;

use std::fmt;

use crate::backend::NativeBackend;
use crate::error::{BindingError, BindingResult};

/// Resource kinds managed by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// CPU pixel buffer
    Image,
    /// GPU texture
    Texture,
    /// Framebuffer with color and depth attachments
    RenderTexture,
    /// Compiled shader program
    Shader,
    /// Shader plus texture maps
    Material,
    /// Vertex buffers
    Mesh,
    /// Glyph atlas
    Font,
    /// Decoded audio samples
    Wave,
    /// Audio buffer loaded in full
    Sound,
    /// Streamed audio file
    Music,
    /// Raw PCM stream
    AudioStream,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Image => "image",
            Self::Texture => "texture",
            Self::RenderTexture => "render texture",
            Self::Shader => "shader",
            Self::Material => "material",
            Self::Mesh => "mesh",
            Self::Font => "font",
            Self::Wave => "wave",
            Self::Sound => "sound",
            Self::Music => "music stream",
            Self::AudioStream => "audio stream",
        };
        f.write_str(name)
    }
}

/// A raw native struct that owns a native allocation
///
/// The all-zero value is the native "nothing loaded" sentinel for every kind.
pub trait NativeResource: Copy + bytemuck::Zeroable + fmt::Debug {
    /// Kind reported in errors and logs
    const KIND: ResourceKind;

    /// Native function that frees this kind
    const UNLOAD_SYMBOL: &'static str;

    /// Whether the loader produced a usable result
    fn is_loaded(&self) -> bool;

    /// Opaque identifier for logs and unload records
    fn handle(&self) -> u64;

    /// Free the native allocation
    fn unload(self, backend: &dyn NativeBackend);
}

/// Lifecycle state of a [`Resource`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Native allocation exists
    Live,
    /// Native allocation freed, raw fields zeroed
    Released,
}

/// Exclusive owner of one native allocation
///
/// Released exactly once: explicitly through [`Resource::release`] or
/// implicitly on drop, whichever comes first.
pub struct Resource<'a, R: NativeResource> {
    raw: R,
    state: Lifecycle,
    backend: &'a dyn NativeBackend,
}

impl<'a, R: NativeResource> Resource<'a, R> {
    /// Take ownership of a loader result
    ///
    /// A sentinel result is reported as [`BindingError::LoadFailed`] and never
    /// unloaded, since the native side allocated nothing for it.
    pub fn acquire(
        backend: &'a dyn NativeBackend,
        raw: R,
        origin: impl fmt::Display,
    ) -> BindingResult<Self> {
        if !raw.is_loaded() {
            log::warn!("Native loader returned an empty {} for {}", R::KIND, origin);
            return Err(BindingError::LoadFailed {
                kind: R::KIND,
                origin: origin.to_string(),
            });
        }

        log::debug!("Loaded {} {:#x} from {}", R::KIND, raw.handle(), origin);
        Ok(Self {
            raw,
            state: Lifecycle::Live,
            backend,
        })
    }

    /// Adopt a raw handle obtained outside this crate
    ///
    /// # Safety
    ///
    /// `raw` must be a live allocation from `backend` that nothing else will
    /// unload. Adopting the same handle twice leads to a double unload.
    pub unsafe fn from_raw(backend: &'a dyn NativeBackend, raw: R) -> Self {
        Self {
            raw,
            state: Lifecycle::Live,
            backend,
        }
    }

    /// Give up ownership without unloading
    pub fn into_raw(mut self) -> R {
        let raw = self.raw;
        self.raw = R::zeroed();
        self.state = Lifecycle::Released;
        raw
    }

    /// Unload the native allocation and zero every field
    ///
    /// Calling this on a released resource does nothing.
    pub fn release(&mut self) {
        if self.state == Lifecycle::Released {
            return;
        }

        log::trace!(
            "{} {} {:#x}",
            R::UNLOAD_SYMBOL,
            R::KIND,
            self.raw.handle()
        );
        self.raw.unload(self.backend);
        self.raw = R::zeroed();
        self.state = Lifecycle::Released;
    }

    /// Raw native struct
    pub fn raw(&self) -> &R {
        &self.raw
    }

    /// Raw native struct for by-reference native mutators
    pub(crate) fn raw_mut(&mut self) -> &mut R {
        &mut self.raw
    }

    /// Current lifecycle state
    pub fn state(&self) -> Lifecycle {
        self.state
    }

    /// Whether the native allocation still exists
    pub fn is_live(&self) -> bool {
        self.state == Lifecycle::Live
    }

    /// Backend the resource was loaded through
    pub fn backend(&self) -> &'a dyn NativeBackend {
        self.backend
    }
}

impl<R: NativeResource> Drop for Resource<'_, R> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<R: NativeResource> fmt::Debug for Resource<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("kind", &R::KIND)
            .field("state", &self.state)
            .field("raw", &self.raw)
            .finish()
    }
}

/// Ownership accessors shared by every typed wrapper
///
/// `$wrapper` must be a struct with a single `res: Resource<'a, $raw>` field.
/// `$owner` is the type whose `backend()` the wrapper loads through.
macro_rules! native_wrapper {
    ($wrapper:ident, $raw:ty, $owner:ty) => {
        impl<'a> $wrapper<'a> {
            /// Raw native struct, valid while `self` is alive
            pub fn raw(&self) -> &$raw {
                self.res.raw()
            }

            /// Opaque native handle, as recorded in logs
            pub fn handle(&self) -> u64 {
                $crate::resource::NativeResource::handle(self.res.raw())
            }

            #[allow(dead_code)]
            pub(crate) fn backend(&self) -> &'a dyn $crate::backend::NativeBackend {
                self.res.backend()
            }

            /// Free the native allocation now instead of at end of scope
            pub fn unload(mut self) {
                self.res.release();
            }

            /// Give up ownership without unloading
            pub fn into_raw(self) -> $raw {
                self.res.into_raw()
            }

            /// Adopt a raw struct obtained outside this crate
            ///
            /// # Safety
            ///
            /// `raw` must be a live allocation made through `owner`'s backend
            /// that nothing else will unload. Adopting the same handle twice
            /// unloads it twice.
            pub unsafe fn from_raw(owner: &'a $owner, raw: $raw) -> Self {
                Self {
                    res: $crate::resource::Resource::from_raw(owner.backend(), raw),
                }
            }
        }

        impl std::fmt::Debug for $wrapper<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($wrapper)).field(self.res.raw()).finish()
            }
        }
    };
}

pub(crate) use native_wrapper;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;
    use crate::ffi;

    fn texture(id: u32) -> ffi::Texture {
        ffi::Texture { id, width: 4, height: 4, mipmaps: 1, format: 7 }
    }

    #[test]
    fn test_acquire_rejects_sentinel_without_unloading() {
        let backend = RecordingBackend::new();
        let result = Resource::acquire(&backend, ffi::Texture::default(), "missing.png");

        match result {
            Err(BindingError::LoadFailed { kind, origin }) => {
                assert_eq!(kind, ResourceKind::Texture);
                assert_eq!(origin, "missing.png");
            }
            other => panic!("expected LoadFailed, got {:?}", other),
        }
        assert!(backend.unloads().is_empty());
    }

    #[test]
    fn test_release_is_idempotent() {
        let backend = RecordingBackend::new();
        let mut res = Resource::acquire(&backend, texture(3), "test").unwrap();
        assert!(res.is_live());

        res.release();
        res.release();
        drop(res);

        assert_eq!(backend.unload_count("UnloadTexture"), 1);
    }

    #[test]
    fn test_release_zeroes_fields() {
        let backend = RecordingBackend::new();
        let mut res = Resource::acquire(&backend, texture(9), "test").unwrap();
        res.release();

        assert_eq!(res.state(), Lifecycle::Released);
        assert_eq!(*res.raw(), ffi::Texture::default());
    }

    #[test]
    fn test_into_raw_skips_unload() {
        let backend = RecordingBackend::new();
        let res = Resource::acquire(&backend, texture(5), "test").unwrap();
        let raw = res.into_raw();

        assert_eq!(raw.id, 5);
        assert!(backend.unloads().is_empty());
    }

    #[test]
    fn test_drop_on_early_return_path() {
        fn load_then_bail(backend: &RecordingBackend) -> BindingResult<()> {
            let _res = Resource::acquire(backend, texture(11), "test")?;
            Err(BindingError::InvalidArgument("bail".into()))
        }

        let backend = RecordingBackend::new();
        assert!(load_then_bail(&backend).is_err());
        assert_eq!(backend.unloads().len(), 1);
        assert_eq!(backend.unloads()[0].handle, 11);
    }
}
