//! Ports for the configuration server and the process settings table.

use async_trait::async_trait;
use clientconfig_domain::{ConfigOptions, Result};

/// Raw answer from a configuration server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceResponse {
    /// HTTP status code
    pub status: u16,
    /// Undecoded response body
    pub body: String,
}

impl SourceResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Port for fetching the property set of one application.
///
/// Implementations issue a single request per call. Transport failures
/// (connection refused, DNS, timeout) are reported as
/// `ClientConfigError::Network`; any HTTP status, including errors, is an
/// `Ok` response.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Fetch the property set selected by `options.application_id()`.
    async fn fetch(&self, options: &ConfigOptions) -> Result<SourceResponse>;
}

/// Key/value settings table visible to the whole process.
///
/// Loaded properties are written here so that code reading ambient settings
/// observes them. Writes overwrite any existing value.
pub trait SettingsTable: Send + Sync {
    /// Look up a setting, `None` if absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Set a setting, overwriting any previous value.
    ///
    /// # Errors
    /// Returns `ClientConfigError::InvalidInput` if the table cannot
    /// represent the key or value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
