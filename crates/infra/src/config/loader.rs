//! Options loader
//!
//! Loads the configuration server connection options from environment
//! variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for option files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `CLIENT_CONFIG_SERVER_URL`: Base URL of the configuration server
//! - `CLIENT_CONFIG_APPLICATION_ID`: Application identifier sent to the server
//! - `CLIENT_CONFIG_TIMEOUT_MS`: Optional request timeout in milliseconds
//!
//! ## File Format
//! Same camelCase keys as the JSON wire form:
//! ```toml
//! serverUrl = "http://config.internal:8888"
//! applicationId = "billing"
//! timeout = 2000
//! ```
//!
//! ## File Locations
//! The loader probes `client-config.{json,toml}` then `config.{json,toml}` in
//! the current working directory, then beside the executable.

use std::path::{Path, PathBuf};

use clientconfig_domain::constants::{
    ENV_APPLICATION_ID, ENV_SERVER_URL, ENV_TIMEOUT_MS, OPTIONS_FILE_STEMS,
};
use clientconfig_domain::{ClientConfigError, ConfigOptions, Result};

/// Load options with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from an options file.
///
/// # Errors
/// Returns `ClientConfigError::Config` if:
/// - Options cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<ConfigOptions> {
    match load_from_env() {
        Ok(options) => {
            tracing::info!("Client config options loaded from environment variables");
            Ok(options)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load options from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load options from environment variables
///
/// # Errors
/// Returns `ClientConfigError::Config` if a required variable is missing or
/// the timeout is not a whole number of milliseconds.
pub fn load_from_env() -> Result<ConfigOptions> {
    let server_url = env_var(ENV_SERVER_URL)?;
    let application_id = env_var(ENV_APPLICATION_ID)?;

    let mut builder =
        ConfigOptions::builder().server_url(server_url).application_id(application_id);

    if let Ok(raw) = std::env::var(ENV_TIMEOUT_MS) {
        let millis = raw.trim().parse::<u64>().map_err(|e| {
            ClientConfigError::Config(format!("Invalid {ENV_TIMEOUT_MS} value '{raw}': {e}"))
        })?;
        builder = builder.timeout_ms(millis);
    }

    builder.build()
}

/// Load options from a file
///
/// If `path` is `None`, probes the standard locations.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to the options file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `ClientConfigError::Config` if:
/// - File not found (when path is specified)
/// - No options file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing or blank
pub fn load_from_file(path: Option<PathBuf>) -> Result<ConfigOptions> {
    let options_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ClientConfigError::Config(format!(
                    "Options file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ClientConfigError::Config(
                "No client config options file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %options_path.display(), "Loading client config options from file");

    let contents = std::fs::read_to_string(&options_path)
        .map_err(|e| ClientConfigError::Config(format!("Failed to read options file: {e}")))?;

    let options = parse_options(&contents, &options_path)?;
    options.validate()?;
    Ok(options)
}

/// Parse options from string content, format chosen by file extension.
fn parse_options(contents: &str, path: &Path) -> Result<ConfigOptions> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ClientConfigError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ClientConfigError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ClientConfigError::Config(format!("Unsupported options format: {extension}"))),
    }
}

/// Probe the standard locations for an options file
///
/// Searches the current working directory, then the directory holding the
/// executable, for `client-config.{json,toml}` and `config.{json,toml}`.
///
/// # Returns
/// The first file found, or `None` if none exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter().find_map(|dir| probe_dir(dir))
}

fn probe_dir(dir: &Path) -> Option<PathBuf> {
    OPTIONS_FILE_STEMS
        .iter()
        .flat_map(|stem| ["json", "toml"].map(|ext| dir.join(format!("{stem}.{ext}"))))
        .find(|path| path.exists())
}

/// Get required, non-empty environment variable
///
/// # Errors
/// Returns `ClientConfigError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            ClientConfigError::Config(format!("Missing required environment variable: {key}"))
        })
}
