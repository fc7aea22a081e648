//! Configuration for the insight page runtime.
//!
//! Settings are read from an inline TOML block on the page (see
//! `conf/config.toml` for the layout). Missing or invalid entries fall back
//! to defaults so the page stays interactive.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{ConfigError, load_config, parse_config, serialize_config};
pub use models::{AppConfig, LogLevel};
