//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with an explicit filter
///
/// `filters` uses the `RUST_LOG` syntax (`"info"`, `"ray_bindings=trace"`).
/// An explicit `RUST_LOG` in the environment still takes precedence.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_with_level(filters: &str) {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(filters);
    if let Ok(env_filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&env_filters);
    }
    if builder.try_init().is_err() {
        log::debug!("Logger already initialized, keeping existing configuration");
    }
}
