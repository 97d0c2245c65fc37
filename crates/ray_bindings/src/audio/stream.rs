//! Raw PCM streams and typed samples

use super::AudioDevice;
use crate::backend::{NativeBackend, Playback};
use crate::error::{BindingError, BindingResult};
use crate::ffi;
use crate::foundation::strings::native_len;
use crate::resource::{native_wrapper, Resource};

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for f32 {}
}

/// PCM sample types the native mixer understands
pub trait Sample: bytemuck::Pod + sealed::Sealed {
    /// Bit depth, matched against a stream's `sample_size`
    const BITS: u32;
}

impl Sample for u8 {
    const BITS: u32 = 8;
}

impl Sample for i8 {
    const BITS: u32 = 8;
}

impl Sample for i16 {
    const BITS: u32 = 16;
}

impl Sample for f32 {
    const BITS: u32 = 32;
}

/// Check that `S` matches a stream's bit depth
pub(crate) fn check_sample_size<S: Sample>(stream: &ffi::AudioStream) -> BindingResult<()> {
    if S::BITS == stream.sample_size {
        Ok(())
    } else {
        Err(BindingError::SampleSizeMismatch {
            expected: stream.sample_size,
            actual: S::BITS,
        })
    }
}

/// Stream fed with samples by the application
pub struct AudioStream<'a> {
    res: Resource<'a, ffi::AudioStream>,
}

native_wrapper!(AudioStream, ffi::AudioStream, AudioDevice<'_>);

impl<'a> AudioStream<'a> {
    /// Open a stream
    ///
    /// `sample_size` is the bit depth and must be 8, 16 or 32.
    pub fn init(device: &'a AudioDevice<'_>, sample_rate: u32, sample_size: u32, channels: u32) -> BindingResult<Self> {
        if !matches!(sample_size, 8 | 16 | 32) {
            return Err(BindingError::InvalidArgument(format!(
                "sample size must be 8, 16 or 32 bits, got {}",
                sample_size
            )));
        }

        let backend = device.backend();
        let raw = backend.init_audio_stream(sample_rate, sample_size, channels);
        Ok(Self {
            res: Resource::acquire(
                backend,
                raw,
                format_args!("{} Hz, {} bit, {} ch", sample_rate, sample_size, channels),
            )?,
        })
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

    /// Queue samples for playback
    ///
    /// `S` must have the stream's bit depth. Channels are interleaved.
    pub fn update<S: Sample>(&self, samples: &[S]) -> BindingResult<()> {
        check_sample_size::<S>(self.raw())?;
        let count = native_len(samples.len())?;
        self.backend()
            .update_audio_stream(*self.raw(), bytemuck::cast_slice(samples), count);
        Ok(())
    }

    /// Whether a buffer is free for [`AudioStream::update`]
    pub fn is_processed(&self) -> bool {
        self.backend().is_audio_stream_processed(*self.raw())
    }

    /// Whether the stream is playing
    pub fn is_playing(&self) -> bool {
        self.backend().is_audio_stream_playing(*self.raw())
    }

    /// Start playback
    pub fn play(&self) {
        self.backend().stream_playback(*self.raw(), Playback::Play);
    }

    /// Pause playback
    pub fn pause(&self) {
        self.backend().stream_playback(*self.raw(), Playback::Pause);
    }

    /// Resume paused playback
    pub fn resume(&self) {
        self.backend().stream_playback(*self.raw(), Playback::Resume);
    }

    /// Stop playback
    pub fn stop(&self) {
        self.backend().stream_playback(*self.raw(), Playback::Stop);
    }

    /// Set volume, 1.0 is full
    pub fn set_volume(&self, volume: f32) {
        self.backend().set_audio_stream_volume(*self.raw(), volume);
    }

    /// Set pitch, 1.0 is unchanged
    pub fn set_pitch(&self, pitch: f32) {
        self.backend().set_audio_stream_pitch(*self.raw(), pitch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;

    #[test]
    fn test_sample_size_checked_before_native_call() {
        let backend = RecordingBackend::new();
        let device = AudioDevice::init(&backend).unwrap();

        assert!(matches!(
            AudioStream::init(&device, 44100, 24, 2),
            Err(BindingError::InvalidArgument(_))
        ));
        assert_eq!(backend.count("InitAudioStream"), 0);
    }

    #[test]
    fn test_update_requires_matching_bit_depth() {
        let backend = RecordingBackend::new();
        let device = AudioDevice::init(&backend).unwrap();
        let stream = AudioStream::init(&device, 22050, 16, 1).unwrap();

        match stream.update(&[0.0f32; 4]) {
            Err(BindingError::SampleSizeMismatch { expected, actual }) => {
                assert_eq!((expected, actual), (16, 32));
            }
            other => panic!("expected SampleSizeMismatch, got {:?}", other),
        }

        stream.update(&[1i16, -1, 2, -2, 3, -3]).unwrap();
        let upload = backend.uploads().pop().unwrap();
        assert_eq!(upload.symbol, "UpdateAudioStream");
        assert_eq!(upload.count, 6);
        assert_eq!(upload.bytes.len(), 12);
    }

    #[test]
    fn test_playing_is_live() {
        let backend = RecordingBackend::new();
        let device = AudioDevice::init(&backend).unwrap();
        let stream = AudioStream::init(&device, 44100, 32, 2).unwrap();

        assert!(!stream.is_playing());
        stream.play();
        assert!(stream.is_playing());
        stream.pause();
        assert!(!stream.is_playing());

        stream.unload();
        assert_eq!(backend.unload_count("CloseAudioStream"), 1);
    }
}
