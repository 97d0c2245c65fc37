//! Decoded audio in CPU memory

use std::fmt;
use std::path::Path;

use super::AudioDevice;
use crate::backend::{NativeBackend, WaveOp};
use crate::error::{BindingError, BindingResult};
use crate::ffi;
use crate::foundation::strings::{native_len, path_to_cstring, to_cstring};
use crate::resource::{native_wrapper, Resource};

/// Audio samples loaded in full
pub struct Wave<'a> {
    res: Resource<'a, ffi::Wave>,
}

native_wrapper!(Wave, ffi::Wave, AudioDevice<'_>);

impl<'a> Wave<'a> {
    fn acquire(backend: &'a dyn NativeBackend, raw: ffi::Wave, origin: impl fmt::Display) -> BindingResult<Self> {
        Ok(Self {
            res: Resource::acquire(backend, raw, origin)?,
        })
    }

    /// Decode an audio file
    pub fn load(device: &'a AudioDevice<'_>, path: impl AsRef<Path>) -> BindingResult<Self> {
        let path = path.as_ref();
        let file = path_to_cstring(path)?;
        let raw = device.backend().load_wave(&file);
        Self::acquire(device.backend(), raw, path.display())
    }

    /// Decode an in-memory file, `file_type` is the extension such as `".wav"`
    pub fn load_from_memory(device: &'a AudioDevice<'_>, file_type: &str, data: &[u8]) -> BindingResult<Self> {
        let kind = to_cstring(file_type)?;
        native_len(data.len())?;
        let raw = device.backend().load_wave_from_memory(&kind, data);
        Self::acquire(device.backend(), raw, format_args!("memory ({})", file_type))
    }

    /// Duplicate the samples
    pub fn copy(&self) -> BindingResult<Wave<'a>> {
        let backend = self.backend();
        let raw = backend.wave_copy(*self.raw());
        Self::acquire(backend, raw, format_args!("copy of {:#x}", self.handle()))
    }

    /// Total samples across all channels
    pub fn sample_count(&self) -> u32 {
        self.raw().sample_count
    }

    /// Samples per second
    pub fn sample_rate(&self) -> u32 {
        self.raw().sample_rate
    }

    /// Bits per sample
    pub fn sample_size(&self) -> u32 {
        self.raw().sample_size
    }

    /// Interleaved channel count
    pub fn channels(&self) -> u32 {
        self.raw().channels
    }

    /// Resample and convert in place
    pub fn format(&mut self, sample_rate: i32, sample_size: i32, channels: i32) {
        self.apply(WaveOp::Format { sample_rate, sample_size, channels });
    }

    /// Keep only the frames in `init_sample..final_sample`
    pub fn crop(&mut self, init_sample: i32, final_sample: i32) {
        self.apply(WaveOp::Crop { init_sample, final_sample });
    }

    fn apply(&mut self, op: WaveOp) {
        let backend = self.backend();
        backend.wave_op(self.res.raw_mut(), op);
    }

    /// Samples converted to `f32`, interleaved
    pub fn samples(&self) -> Vec<f32> {
        self.backend().load_wave_samples(*self.raw())
    }

    /// Write a `.wav` file
    pub fn export(&self, path: impl AsRef<Path>) -> BindingResult<()> {
        let path = path.as_ref();
        let file = path_to_cstring(path)?;
        if self.backend().export_wave(*self.raw(), &file) {
            Ok(())
        } else {
            Err(BindingError::ExportFailed(path.display().to_string()))
        }
    }

    /// Write the samples as a C source array
    pub fn export_as_code(&self, path: impl AsRef<Path>) -> BindingResult<()> {
        let path = path.as_ref();
        let file = path_to_cstring(path)?;
        if self.backend().export_wave_as_code(*self.raw(), &file) {
            Ok(())
        } else {
            Err(BindingError::ExportFailed(path.display().to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;

    #[test]
    fn test_format_forwarded_and_written_back() {
        let backend = RecordingBackend::new();
        let device = AudioDevice::init(&backend).unwrap();
        let mut wave = Wave::load(&device, "jump.wav").unwrap();
        let before = wave.handle();

        wave.format(22050, 8, 1);

        assert_eq!(
            backend.wave_ops(),
            vec![(before, WaveOp::Format { sample_rate: 22050, sample_size: 8, channels: 1 })]
        );
        assert_eq!(wave.sample_rate(), 22050);
        assert_eq!(wave.sample_size(), 8);
        assert_eq!(wave.channels(), 1);
        assert_eq!(wave.sample_count(), 22050);
    }

    #[test]
    fn test_invalid_crop_is_forwarded_unchanged() {
        let backend = RecordingBackend::new();
        let device = AudioDevice::init(&backend).unwrap();
        let mut wave = Wave::load(&device, "jump.wav").unwrap();
        let count = wave.sample_count();

        wave.crop(500, 100);

        assert_eq!(backend.wave_ops()[0].1, WaveOp::Crop { init_sample: 500, final_sample: 100 });
        assert_eq!(wave.sample_count(), count);
    }

    #[test]
    fn test_samples_are_owned() {
        let backend = RecordingBackend::new();
        let device = AudioDevice::init(&backend).unwrap();
        let wave = Wave::load(&device, "jump.wav").unwrap();

        assert_eq!(wave.samples().len(), wave.sample_count() as usize);
        assert!(backend.calls().contains(&"UnloadWaveSamples"));
    }

    #[test]
    fn test_copy_is_released_separately() {
        let backend = RecordingBackend::new();
        let device = AudioDevice::init(&backend).unwrap();
        let wave = Wave::load(&device, "jump.wav").unwrap();
        let copy = wave.copy().unwrap();

        assert_ne!(copy.handle(), wave.handle());
        drop(copy);
        drop(wave);
        assert_eq!(backend.unload_count("UnloadWave"), 2);
    }
}
