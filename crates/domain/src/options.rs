//! Connection options for the configuration server

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ClientConfigError, Result};

/// Flat property set as served by the configuration server.
pub type PropertyMap = HashMap<String, String>;

/// Options describing how to reach the configuration server.
///
/// Immutable once built. The server URL is not checked for well-formedness
/// here; a malformed URL surfaces as a transport failure during load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOptions {
    server_url: String,

    /// Per-request timeout, serialized as milliseconds
    #[serde(default, with = "duration_ms", skip_serializing_if = "Option::is_none")]
    timeout: Option<Duration>,

    application_id: String,
}

impl ConfigOptions {
    /// Create options without a timeout.
    ///
    /// # Errors
    /// Returns `ClientConfigError::Config` if either field is blank.
    pub fn new(server_url: impl Into<String>, application_id: impl Into<String>) -> Result<Self> {
        Self::builder().server_url(server_url).application_id(application_id).build()
    }

    /// Create a builder for options
    pub fn builder() -> ConfigOptionsBuilder {
        ConfigOptionsBuilder::new()
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    /// Check the required fields.
    ///
    /// Deserialized options bypass the builder, so loaders call this after
    /// parsing.
    pub fn validate(&self) -> Result<()> {
        if self.server_url.trim().is_empty() {
            return Err(ClientConfigError::Config("serverUrl is required".into()));
        }
        if self.application_id.trim().is_empty() {
            return Err(ClientConfigError::Config("applicationId is required".into()));
        }
        Ok(())
    }
}

impl fmt::Display for ConfigOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "serverUrl={}, applicationId={}", self.server_url, self.application_id)?;
        match self.timeout {
            Some(timeout) => write!(f, ", timeout={}ms", timeout.as_millis()),
            None => write!(f, ", timeout=default"),
        }
    }
}

/// Builder for [`ConfigOptions`]
#[derive(Debug, Default)]
pub struct ConfigOptionsBuilder {
    server_url: Option<String>,
    timeout: Option<Duration>,
    application_id: Option<String>,
}

impl ConfigOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn timeout_ms(self, millis: u64) -> Self {
        self.timeout(Duration::from_millis(millis))
    }

    pub fn application_id(mut self, id: impl Into<String>) -> Self {
        self.application_id = Some(id.into());
        self
    }

    /// Build the options.
    ///
    /// # Errors
    /// Returns `ClientConfigError::Config` if the server URL or application
    /// id is missing or blank.
    pub fn build(self) -> Result<ConfigOptions> {
        let options = ConfigOptions {
            server_url: self.server_url.unwrap_or_default(),
            timeout: self.timeout,
            application_id: self.application_id.unwrap_or_default(),
        };
        options.validate()?;
        Ok(options)
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(duration) => {
                serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_millis))
    }
}
