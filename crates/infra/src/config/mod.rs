//! Connection options loading
//!
//! This module provides utilities for loading [`ConfigOptions`] from
//! environment variables and files, for applications that do not build the
//! options in code.
//!
//! [`ConfigOptions`]: clientconfig_domain::ConfigOptions

pub mod loader;

// Re-export commonly used items
pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
