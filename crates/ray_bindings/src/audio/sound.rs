//! Sounds loaded fully into an audio buffer

use std::fmt;
use std::path::Path;

use super::stream::check_sample_size;
use super::{AudioDevice, Sample, Wave};
use crate::backend::{NativeBackend, Playback};
use crate::error::{BindingError, BindingResult};
use crate::ffi;
use crate::foundation::strings::{native_len, path_to_cstring};
use crate::resource::{native_wrapper, Resource};

/// Short sound effect
///
/// The embedded stream is freed by `UnloadSound` and only exposed by reference.
pub struct Sound<'a> {
    res: Resource<'a, ffi::Sound>,
}

native_wrapper!(Sound, ffi::Sound, AudioDevice<'_>);

impl<'a> Sound<'a> {
    fn acquire(backend: &'a dyn NativeBackend, raw: ffi::Sound, origin: impl fmt::Display) -> BindingResult<Self> {
        Ok(Self {
            res: Resource::acquire(backend, raw, origin)?,
        })
    }

    /// Load a sound file
    pub fn load(device: &'a AudioDevice<'_>, path: impl AsRef<Path>) -> BindingResult<Self> {
        let path = path.as_ref();
        let file = path_to_cstring(path)?;
        let raw = device.backend().load_sound(&file);
        Self::acquire(device.backend(), raw, path.display())
    }

    /// Copy a wave into a new sound; the wave stays usable
    pub fn from_wave(wave: &Wave<'a>) -> BindingResult<Self> {
        let backend = wave.backend();
        let raw = backend.load_sound_from_wave(*wave.raw());
        Self::acquire(backend, raw, format_args!("wave {:#x}", wave.handle()))
    }

    /// Total samples across all channels
    pub fn sample_count(&self) -> u32 {
        self.raw().sample_count
    }

    /// Stream the sound plays through
    pub fn stream(&self) -> &ffi::AudioStream {
        &self.raw().stream
    }

    /// Replace the sound's samples
    ///
    /// `S` must match the stream's bit depth, `samples` must hold whole
    /// interleaved frames and must fit in the sound's buffer.
    pub fn update<S: Sample>(&self, samples: &[S]) -> BindingResult<()> {
        let stream = self.stream();
        check_sample_size::<S>(stream)?;
        // The native copy is unbounded
        if samples.len() > self.sample_count() as usize {
            return Err(BindingError::InvalidArgument(format!(
                "{} samples exceed the sound's capacity of {}",
                samples.len(),
                self.sample_count()
            )));
        }
        let channels = stream.channels.max(1) as usize;
        if samples.len() % channels != 0 {
            return Err(BindingError::InvalidArgument(format!(
                "{} samples do not split into {} channels",
                samples.len(),
                channels
            )));
        }
        let frames = native_len(samples.len() / channels)?;
        self.backend()
            .update_sound(*self.raw(), bytemuck::cast_slice(samples), frames);
        Ok(())
    }

    /// Start playback from the beginning
    pub fn play(&self) {
        self.backend().sound_playback(*self.raw(), Playback::Play);
    }

    /// Stop playback
    pub fn stop(&self) {
        self.backend().sound_playback(*self.raw(), Playback::Stop);
    }

    /// Pause playback
    pub fn pause(&self) {
        self.backend().sound_playback(*self.raw(), Playback::Pause);
    }

    /// Resume paused playback
    pub fn resume(&self) {
        self.backend().sound_playback(*self.raw(), Playback::Resume);
    }

    /// Play on a free channel of the multichannel pool
    pub fn play_multi(&self) {
        self.backend().play_sound_multi(*self.raw());
    }

    /// Whether the sound is playing
    pub fn is_playing(&self) -> bool {
        self.backend().is_sound_playing(*self.raw())
    }

    /// Set volume, 1.0 is full
    pub fn set_volume(&self, volume: f32) {
        self.backend().set_sound_volume(*self.raw(), volume);
    }

    /// Set pitch, 1.0 is unchanged
    pub fn set_pitch(&self, pitch: f32) {
        self.backend().set_sound_pitch(*self.raw(), pitch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;

    #[test]
    fn test_update_counts_frames() {
        let backend = RecordingBackend::new();
        let device = AudioDevice::init(&backend).unwrap();
        let sound = Sound::load(&device, "coin.ogg").unwrap();
        assert_eq!(sound.stream().channels, 2);

        assert!(sound.update(&[0i16; 8]).is_err());
        assert!(sound.update(&[0.0f32; 7]).is_err());

        sound.update(&[0.5f32; 8]).unwrap();
        let upload = backend.uploads().pop().unwrap();
        assert_eq!(upload.count, 4);
        assert_eq!(upload.bytes.len(), 32);
    }

    #[test]
    fn test_update_rejects_more_than_capacity() {
        let backend = RecordingBackend::new();
        let device = AudioDevice::init(&backend).unwrap();
        let sound = Sound::load(&device, "coin.ogg").unwrap();
        let capacity = sound.sample_count() as usize;

        let err = sound.update(&vec![0.0f32; capacity + 2000]).unwrap_err();
        assert!(matches!(err, BindingError::InvalidArgument(_)));
        assert!(backend.uploads().is_empty());

        sound.update(&vec![0.0f32; capacity]).unwrap();
        assert_eq!(backend.uploads().pop().unwrap().count, (capacity / 2) as i32);
    }

    #[test]
    fn test_from_wave_keeps_wave() {
        let backend = RecordingBackend::new();
        let device = AudioDevice::init(&backend).unwrap();
        let wave = Wave::load(&device, "coin.wav").unwrap();
        let sound = Sound::from_wave(&wave).unwrap();

        assert_eq!(sound.sample_count(), wave.sample_count());
        drop(wave);
        assert_eq!(backend.unload_count("UnloadWave"), 1);
        assert_eq!(backend.unload_count("UnloadSound"), 0);
        sound.play();
        assert!(sound.is_playing());
    }

    #[test]
    fn test_play_multi_uses_pool() {
        let backend = RecordingBackend::new();
        let device = AudioDevice::init(&backend).unwrap();
        let sound = Sound::load(&device, "coin.ogg").unwrap();

        sound.play_multi();
        sound.play_multi();
        assert_eq!(device.sounds_playing(), 2);
        device.stop_sound_multi();
        assert_eq!(device.sounds_playing(), 0);
    }

    #[test]
    fn test_setters_forward_values() {
        let backend = RecordingBackend::new();
        let device = AudioDevice::init(&backend).unwrap();
        let sound = Sound::load(&device, "coin.ogg").unwrap();

        sound.set_volume(0.5);
        sound.set_pitch(1.25);
        assert_eq!(backend.values("SetSoundVolume"), vec![0.5]);
        assert_eq!(backend.values("SetSoundPitch"), vec![1.25]);
    }
}
