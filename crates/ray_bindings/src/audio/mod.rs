//! # Audio Module
//!
//! The audio device and the resources played through it.
//!
//! - **device**: [`AudioDevice`], opened once and closed on drop
//! - **wave**: decoded samples in CPU memory
//! - **sound**: short effects held in an audio buffer
//! - **music**: files streamed while they play
//! - **stream**: raw PCM streams fed by the application, typed by [`Sample`]

mod device;
mod music;
mod sound;
mod stream;
mod wave;

pub use device::AudioDevice;
pub use music::Music;
pub use sound::Sound;
pub use stream::{AudioStream, Sample};
pub use wave::Wave;
