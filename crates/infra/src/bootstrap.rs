//! Startup entry points
//!
//! The embedding application calls one of these once, awaits it, and only
//! then hands the returned [`ClientConfig`] to the rest of the program. None
//! of them fail because of the configuration server; an unreachable or
//! misbehaving server yields an accessor that falls back to the environment.

use std::sync::Arc;

use clientconfig_core::{ClientConfig, ConfigLoader, ConfigSource, SettingsTable};
use clientconfig_domain::{ClientConfigError, ConfigOptions, Result};
use tracing::warn;

use crate::http::HttpConfigSource;
use crate::settings::ProcessEnvironment;

/// Load properties over HTTP and publish them to the process environment.
pub async fn load(options: ConfigOptions) -> ClientConfig {
    let settings: Arc<dyn SettingsTable> = Arc::new(ProcessEnvironment::new());

    match HttpConfigSource::new() {
        Ok(source) => load_with(options, Arc::new(source), settings).await,
        Err(err) => {
            warn!(error = %err, "Failed to build HTTP client for config server");
            ClientConfig::new(options, settings)
        }
    }
}

/// Load properties with custom source and settings table.
pub async fn load_with(
    options: ConfigOptions,
    source: Arc<dyn ConfigSource>,
    settings: Arc<dyn SettingsTable>,
) -> ClientConfig {
    ConfigLoader::new(source, settings).load(options).await
}

/// Read options via [`crate::config::load`], then [`load`].
///
/// # Errors
/// Returns `ClientConfigError::Config` if no usable options are found. Server
/// failures are still absorbed.
pub async fn load_from_env() -> Result<ClientConfig> {
    let options = crate::config::load()?;
    Ok(load(options).await)
}

/// Blocking variant of [`load`] for synchronous startup code.
///
/// # Errors
/// Returns `ClientConfigError::Internal` when called from within an async
/// runtime, or if the runtime cannot be created.
pub fn load_blocking(options: ConfigOptions) -> Result<ClientConfig> {
    if tokio::runtime::Handle::try_current().is_ok() {
        return Err(ClientConfigError::Internal(
            "load_blocking called from within an async runtime; use load instead".into(),
        ));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ClientConfigError::Internal(format!("Failed to start runtime: {e}")))?;

    Ok(runtime.block_on(load(options)))
}
