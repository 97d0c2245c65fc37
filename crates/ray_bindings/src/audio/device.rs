//! Audio device lifetime

use std::cell::Cell;

use log::{debug, error, info, warn};

use crate::backend::NativeBackend;
use crate::config::AudioConfig;
use crate::error::{BindingError, BindingResult};

/// Open audio device
///
/// Every audio resource borrows the device, so it cannot close while one is
/// alive. Dropping the device closes it.
pub struct AudioDevice<'b> {
    backend: &'b dyn NativeBackend,
    master_volume: Cell<f32>,
}

impl<'b> AudioDevice<'b> {
    /// Open the default playback device
    pub fn init(backend: &'b dyn NativeBackend) -> BindingResult<Self> {
        if backend.is_audio_device_ready() {
            return Err(BindingError::AlreadyInitialized);
        }

        backend.init_audio_device();
        if !backend.is_audio_device_ready() {
            error!("Audio device did not open");
            return Err(BindingError::AudioInitFailed);
        }

        info!("Audio device opened");
        Ok(Self {
            backend,
            master_volume: Cell::new(1.0),
        })
    }

    /// Open the device and apply `settings`
    pub fn from_config(backend: &'b dyn NativeBackend, settings: &AudioConfig) -> BindingResult<Self> {
        settings.validate()?;
        let device = Self::init(backend)?;
        device.set_master_volume(settings.master_volume);
        if settings.stream_buffer_size > 0 {
            device.set_stream_buffer_size_default(settings.stream_buffer_size);
        }
        Ok(device)
    }

    /// Backend every audio resource created from this device goes through
    pub fn backend(&self) -> &dyn NativeBackend {
        self.backend
    }

    /// Whether the device is still open
    pub fn is_ready(&self) -> bool {
        self.backend.is_audio_device_ready()
    }

    /// Master volume last set through this device
    pub fn master_volume(&self) -> f32 {
        self.master_volume.get()
    }

    /// Set master volume, clamped to [0, 1]
    pub fn set_master_volume(&self, volume: f32) {
        let clamped = volume.clamp(0.0, 1.0);
        if clamped != volume {
            warn!("Master volume {} clamped to {}", volume, clamped);
        }
        self.backend.set_master_volume(clamped);
        self.master_volume.set(clamped);
    }

    /// Buffer size in frames for streams created afterwards
    pub fn set_stream_buffer_size_default(&self, size: i32) {
        self.backend.set_audio_stream_buffer_size_default(size);
    }

    /// Sounds playing in the multichannel pool
    pub fn sounds_playing(&self) -> i32 {
        self.backend.sounds_playing()
    }

    /// Stop every sound started with [`crate::audio::Sound::play_multi`]
    pub fn stop_sound_multi(&self) {
        self.backend.stop_sound_multi();
    }
}

impl Drop for AudioDevice<'_> {
    fn drop(&mut self) {
        self.backend.close_audio_device();
        debug!("Audio device closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;

    #[test]
    fn test_second_device_rejected() {
        let backend = RecordingBackend::new();
        let _device = AudioDevice::init(&backend).unwrap();

        assert!(matches!(AudioDevice::init(&backend), Err(BindingError::AlreadyInitialized)));
    }

    #[test]
    fn test_init_failure() {
        let backend = RecordingBackend::new();
        backend.live_mut().audio_init_succeeds = false;

        assert!(matches!(AudioDevice::init(&backend), Err(BindingError::AudioInitFailed)));
        assert_eq!(backend.count("CloseAudioDevice"), 0);
    }

    #[test]
    fn test_master_volume_cached_and_clamped() {
        let backend = RecordingBackend::new();
        let device = AudioDevice::init(&backend).unwrap();
        assert_eq!(device.master_volume(), 1.0);

        device.set_master_volume(1.7);
        device.set_master_volume(0.3);
        assert_eq!(backend.values("SetMasterVolume"), vec![1.0, 0.3]);
        assert_eq!(device.master_volume(), 0.3);
    }

    #[test]
    fn test_from_config() {
        let backend = RecordingBackend::new();
        let settings = AudioConfig {
            enabled: true,
            master_volume: 0.5,
            stream_buffer_size: 4096,
        };
        let device = AudioDevice::from_config(&backend, &settings).unwrap();

        assert_eq!(device.master_volume(), 0.5);
        assert_eq!(backend.values("SetAudioStreamBufferSizeDefault"), vec![4096.0]);
    }

    #[test]
    fn test_drop_closes_device() {
        let backend = RecordingBackend::new();
        let device = AudioDevice::init(&backend).unwrap();
        assert!(device.is_ready());
        drop(device);

        assert_eq!(backend.count("CloseAudioDevice"), 1);
        assert!(!backend.is_audio_device_ready());
    }
}
