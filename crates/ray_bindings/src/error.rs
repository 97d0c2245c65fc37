//! Error types for the binding layer

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::resource::ResourceKind;

/// Errors raised at the native boundary
///
/// Every variant is decided on the Rust side, either before a native call is
/// issued (argument checks) or right after a loader returns (sentinel checks).
#[derive(thiserror::Error, Debug)]
pub enum BindingError {
    /// A native loader returned its all-zero sentinel
    #[error("Failed to load {kind} from {origin}")]
    LoadFailed {
        /// Resource kind the loader was producing
        kind: ResourceKind,
        /// File name, file type or generator the load was requested from
        origin: String,
    },

    /// Text destined for a native `char*` contained a NUL byte
    #[error("String contains an interior NUL byte: {0:?}")]
    InteriorNul(String),

    /// Path cannot be expressed as a narrow native string
    #[error("Path is not valid UTF-8: {0:?}")]
    NonUtf8Path(PathBuf),

    /// Argument violates a native precondition
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Typed sample buffer does not match the stream's bit depth
    #[error("Sample size mismatch: stream expects {expected} bits, got {actual} bits")]
    SampleSizeMismatch {
        /// Bit depth the stream was created with
        expected: u32,
        /// Bit depth of the supplied samples
        actual: u32,
    },

    /// Element count does not fit the native `int`
    #[error("Buffer too large for native call: {0} elements")]
    BufferTooLarge(usize),

    /// Native export call reported failure
    #[error("Export failed: {0}")]
    ExportFailed(String),

    /// Window did not report ready after opening
    #[error("Window initialization failed")]
    WindowInitFailed,

    /// Audio device did not report ready after opening
    #[error("Audio device initialization failed")]
    AudioInitFailed,

    /// The native library allows only one instance of this object
    #[error("Already initialized")]
    AlreadyInitialized,

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for binding operations
pub type BindingResult<T> = Result<T, BindingError>;
