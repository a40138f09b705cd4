//! Process environment as a [`SettingsTable`].
//!
//! Writes are visible to every component reading environment variables for
//! the rest of the process. Callers must finish loading before other threads
//! start reading the environment.

use clientconfig_core::SettingsTable;
use clientconfig_domain::{ClientConfigError, Result};

/// The process-wide environment variable table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    pub const fn new() -> Self {
        Self
    }
}

impl SettingsTable for ProcessEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        if !is_valid_key(key) {
            return None;
        }
        std::env::var(key).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if !is_valid_key(key) {
            return Err(ClientConfigError::InvalidInput(format!(
                "environment variable name {key:?} is empty or contains '=' or NUL"
            )));
        }
        if value.contains('\0') {
            return Err(ClientConfigError::InvalidInput(format!(
                "value for environment variable {key} contains NUL"
            )));
        }
        std::env::set_var(key, value);
        Ok(())
    }
}

/// Names `std::env` can store without panicking
fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.contains('=') && !key.contains('\0')
}
