//! Music streamed from a file while it plays

use std::fmt;
use std::path::Path;

use super::AudioDevice;
use crate::backend::{NativeBackend, Playback};
use crate::error::BindingResult;
use crate::ffi;
use crate::foundation::strings::{native_len, path_to_cstring, to_cstring};
use crate::resource::{native_wrapper, Resource};

/// Streamed music
///
/// Call [`Music::update`] every frame while playing to refill the stream.
pub struct Music<'a> {
    res: Resource<'a, ffi::Music>,
}

native_wrapper!(Music, ffi::Music, AudioDevice<'_>);

impl<'a> Music<'a> {
    fn acquire(backend: &'a dyn NativeBackend, raw: ffi::Music, origin: impl fmt::Display) -> BindingResult<Self> {
        Ok(Self {
            res: Resource::acquire(backend, raw, origin)?,
        })
    }

    /// Open a music file for streaming
    pub fn load(device: &'a AudioDevice<'_>, path: impl AsRef<Path>) -> BindingResult<Self> {
        let path = path.as_ref();
        let file = path_to_cstring(path)?;
        let raw = device.backend().load_music_stream(&file);
        Self::acquire(device.backend(), raw, path.display())
    }

    /// Stream from an in-memory file, `file_type` is the extension such as `".ogg"`
    ///
    /// The native decoder keeps reading `data`, so it must outlive the music.
    pub fn load_from_memory(device: &'a AudioDevice<'_>, file_type: &str, data: &'a [u8]) -> BindingResult<Self> {
        let kind = to_cstring(file_type)?;
        native_len(data.len())?;
        let raw = device.backend().load_music_stream_from_memory(&kind, data);
        Self::acquire(device.backend(), raw, format_args!("memory ({})", file_type))
    }

    /// Total samples across all channels
    pub fn sample_count(&self) -> u32 {
        self.raw().sample_count
    }

    /// Stream the music plays through
    pub fn stream(&self) -> &ffi::AudioStream {
        &self.raw().stream
    }

    /// Decoder kind chosen by the loader
    pub fn ctx_type(&self) -> i32 {
        self.raw().ctx_type
    }

    /// Whether playback restarts at the end
    pub fn looping(&self) -> bool {
        self.raw().looping
    }

    /// Enable or disable looping
    pub fn set_looping(&mut self, looping: bool) {
        self.res.raw_mut().looping = looping;
    }

    /// Start playback
    pub fn play(&self) {
        self.backend().music_playback(*self.raw(), Playback::Play);
    }

    /// Stop playback and rewind
    pub fn stop(&self) {
        self.backend().music_playback(*self.raw(), Playback::Stop);
    }

    /// Pause playback
    pub fn pause(&self) {
        self.backend().music_playback(*self.raw(), Playback::Pause);
    }

    /// Resume paused playback
    pub fn resume(&self) {
        self.backend().music_playback(*self.raw(), Playback::Resume);
    }

    /// Refill the stream buffers
    pub fn update(&self) {
        self.backend().update_music_stream(*self.raw());
    }

    /// Whether the music is playing
    pub fn is_playing(&self) -> bool {
        self.backend().is_music_playing(*self.raw())
    }

    /// Set volume, 1.0 is full
    pub fn set_volume(&self, volume: f32) {
        self.backend().set_music_volume(*self.raw(), volume);
    }

    /// Set pitch, 1.0 is unchanged
    pub fn set_pitch(&self, pitch: f32) {
        self.backend().set_music_pitch(*self.raw(), pitch);
    }

    /// Length in seconds
    pub fn time_length(&self) -> f32 {
        self.backend().music_time_length(*self.raw())
    }

    /// Seconds played so far
    pub fn time_played(&self) -> f32 {
        self.backend().music_time_played(*self.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;

    #[test]
    fn test_time_played_is_live() {
        let backend = RecordingBackend::new();
        let device = AudioDevice::init(&backend).unwrap();
        let music = Music::load(&device, "theme.ogg").unwrap();

        assert_eq!(music.time_played(), 0.0);
        backend.live_mut().music_time_played = 12.5;
        assert_eq!(music.time_played(), 12.5);
        assert_eq!(music.time_length(), 180.0);
    }

    #[test]
    fn test_looping_is_a_field() {
        let backend = RecordingBackend::new();
        let device = AudioDevice::init(&backend).unwrap();
        let mut music = Music::load(&device, "theme.ogg").unwrap();
        let calls = backend.calls().len();

        assert!(music.looping());
        music.set_looping(false);
        assert!(!music.looping());
        assert_eq!(backend.calls().len(), calls);
    }

    #[test]
    fn test_playback_cycle() {
        let backend = RecordingBackend::new();
        let device = AudioDevice::init(&backend).unwrap();
        let music = Music::load(&device, "theme.ogg").unwrap();

        music.play();
        music.update();
        assert!(music.is_playing());
        music.stop();
        assert!(!music.is_playing());

        let calls = backend.calls();
        let tail: Vec<_> = calls.iter().rev().take(3).rev().copied().collect();
        assert_eq!(tail, ["IsMusicPlaying", "StopMusicStream", "IsMusicPlaying"]);
    }

    #[test]
    fn test_empty_memory_music_fails() {
        let backend = RecordingBackend::new();
        let device = AudioDevice::init(&backend).unwrap();

        assert!(Music::load_from_memory(&device, ".ogg", &[]).is_err());
        assert!(backend.unloads().is_empty());
    }
}
