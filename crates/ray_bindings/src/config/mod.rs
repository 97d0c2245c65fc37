//! Configuration system
//!
//! Settings for the window, the audio device and logging, loadable from TOML
//! or RON. Window flags are written the way `bitflags` prints them, e.g.
//! `flags = "VSYNC_HINT | WINDOW_RESIZABLE"`.

use std::path::Path;

pub use serde::{Deserialize, Serialize};

use crate::core::ConfigFlags;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file, format chosen by extension
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = Format::of(path)?;
        let contents = std::fs::read_to_string(path)?;

        match format {
            Format::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Format::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Save configuration to file, format chosen by extension
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match Format::of(path)? {
            Format::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Format::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents)?;
        Ok(())
    }
}

enum Format {
    Toml,
    Ron,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value is outside its allowed range
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Top-level settings for an application using the bindings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    /// `env_logger` filter string, overridden by `RUST_LOG`
    pub log_level: String,
    /// Window settings
    pub window: WindowConfig,
    /// Audio device settings
    pub audio: AudioConfig,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            window: WindowConfig::default(),
            audio: AudioConfig::default(),
        }
    }
}

impl Config for BindingConfig {}

impl BindingConfig {
    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "log_level",
                reason: "must not be empty".to_string(),
            });
        }
        self.window.validate()?;
        self.audio.validate()
    }
}

/// Window settings applied by [`crate::core::Context::init`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Client area width in pixels
    pub width: i32,
    /// Client area height in pixels
    pub height: i32,
    /// Window title
    pub title: String,
    /// Flags applied before the window opens, as a `bitflags` expression
    pub flags: String,
    /// Frame rate cap, 0 for uncapped
    pub target_fps: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 450,
            title: "raylib".to_string(),
            flags: String::new(),
            target_fps: 60,
        }
    }
}

impl WindowConfig {
    /// Window of the given size and title with default flags and frame rate
    pub fn new(width: i32, height: i32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
            ..Self::default()
        }
    }

    /// Replace the flags expression with `flags`
    #[must_use]
    pub fn with_flags(mut self, flags: ConfigFlags) -> Self {
        let mut text = String::new();
        // Writing into a String cannot fail
        let _ = bitflags::parser::to_writer(&flags, &mut text);
        self.flags = text;
        self
    }

    /// Parsed window flags
    pub fn config_flags(&self) -> Result<ConfigFlags, ConfigError> {
        if self.flags.trim().is_empty() {
            return Ok(ConfigFlags::empty());
        }
        bitflags::parser::from_str::<ConfigFlags>(&self.flags).map_err(|e| ConfigError::Invalid {
            field: "window.flags",
            reason: e.to_string(),
        })
    }

    /// Check sizes, frame rate and flags
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::Invalid {
                field: "window.width/height",
                reason: format!("{}x{} is not a drawable size", self.width, self.height),
            });
        }
        if self.target_fps < 0 {
            return Err(ConfigError::Invalid {
                field: "window.target_fps",
                reason: format!("{} is negative", self.target_fps),
            });
        }
        self.config_flags().map(|_| ())
    }
}

/// Audio device settings applied by [`crate::audio::AudioDevice::from_config`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Whether the application opens the audio device at all
    pub enabled: bool,
    /// Initial master volume in [0, 1]
    pub master_volume: f32,
    /// Default buffer size in frames for new audio streams, 0 keeps the native default
    pub stream_buffer_size: i32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            master_volume: 1.0,
            stream_buffer_size: 0,
        }
    }
}

impl AudioConfig {
    /// Check volume and buffer size
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.master_volume) {
            return Err(ConfigError::Invalid {
                field: "audio.master_volume",
                reason: format!("{} is outside [0, 1]", self.master_volume),
            });
        }
        if self.stream_buffer_size < 0 {
            return Err(ConfigError::Invalid {
                field: "audio.stream_buffer_size",
                reason: format!("{} is negative", self.stream_buffer_size),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = BindingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window.config_flags().unwrap(), ConfigFlags::empty());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let text = r#"
            log_level = "debug"

            [window]
            title = "demo"
            flags = "VSYNC_HINT | WINDOW_RESIZABLE"
        "#;
        let config: BindingConfig = toml::from_str(text).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.window.title, "demo");
        assert_eq!(config.window.width, 800);
        assert_eq!(
            config.window.config_flags().unwrap(),
            ConfigFlags::VSYNC_HINT | ConfigFlags::WINDOW_RESIZABLE
        );
        assert!(config.audio.enabled);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let mut window = WindowConfig::default();
        window.flags = "VSYNC_HINT | NOT_A_FLAG".to_string();

        match window.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "window.flags"),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_with_flags_round_trips_through_text() {
        let flags = ConfigFlags::MSAA_4X_HINT | ConfigFlags::WINDOW_HIGHDPI;
        let window = WindowConfig::new(320, 240, "t").with_flags(flags);
        assert_eq!(window.config_flags().unwrap(), flags);
    }

    #[test]
    fn test_out_of_range_values() {
        let mut config = BindingConfig::default();
        config.audio.master_volume = 1.5;
        assert!(config.validate().is_err());

        let mut config = BindingConfig::default();
        config.window.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let result = BindingConfig::load_from_file("settings.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_save_and_load_ron() {
        let path = std::env::temp_dir().join(format!("ray_bindings_cfg_{}.ron", std::process::id()));
        let mut config = BindingConfig::default();
        config.window.title = "saved".to_string();
        config.audio.master_volume = 0.25;

        config.save_to_file(&path).unwrap();
        let loaded = BindingConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }
}
