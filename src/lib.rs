//! NoteMark configuration subsystem
//!
//! This library provides the versioned default configuration for the
//! NoteMark markdown note-taking app: defaults generation (including locale
//! resolution and the anonymous installation UUID) and the on-disk
//! configuration store.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{generate_defaults, load_config, save_config, ConfigOptions};
pub use error::{ConfigError, Result};
