//! # Core Module
//!
//! Process-wide state owned explicitly: the window and graphics context, the
//! scoped begin/end modes that run on it, and monitor queries.
//!
//! ## Organization
//!
//! - **context**: [`Context`], window state, timing, cursor and clipboard
//! - **modes**: [`ModeGuard`] and the `begin_*` entry points
//! - **monitor**: [`MonitorInfo`] snapshots

mod context;
mod modes;
mod monitor;

pub use context::{ConfigFlags, Context};
pub use modes::ModeGuard;
pub use monitor::MonitorInfo;
