//! Configuration loader - one best-effort fetch per call
//!
//! ## Failure policy
//! A configuration server outage must never stop the embedding application
//! from starting, so `load` has no error path:
//! - non-200 status: `warn`, empty properties
//! - transport failure: `warn`, empty properties
//! - undecodable 200 body: `debug`, empty properties
//!
//! Every fetched property is also written to the settings table, overwriting
//! existing values.

use std::sync::Arc;

use clientconfig_domain::{ConfigOptions, PropertyMap};
use tracing::{debug, info, warn};

use crate::accessor::ClientConfig;
use crate::payload::decode_properties;
use crate::ports::{ConfigSource, SettingsTable};
use crate::store::PropertyStore;

/// Loads properties from a [`ConfigSource`] into a [`ClientConfig`].
#[derive(Clone)]
pub struct ConfigLoader {
    source: Arc<dyn ConfigSource>,
    settings: Arc<dyn SettingsTable>,
}

impl ConfigLoader {
    pub fn new(source: Arc<dyn ConfigSource>, settings: Arc<dyn SettingsTable>) -> Self {
        Self { source, settings }
    }

    /// Fetch properties once and build the accessor.
    ///
    /// Always completes; failures degrade to an empty store.
    pub async fn load(&self, options: ConfigOptions) -> ClientConfig {
        info!(options = %options, "Loading configuration from config server");

        let properties = self.fetch_properties(&options).await;
        self.apply_to_settings(&properties);

        info!(
            application_id = %options.application_id(),
            properties = properties.len(),
            "Configuration loading completed"
        );

        let store = PropertyStore::new(properties);
        ClientConfig::with_store(options, store, Arc::clone(&self.settings))
    }

    /// Fetch and decode the property set, absorbing every failure.
    pub async fn fetch_properties(&self, options: &ConfigOptions) -> PropertyMap {
        let response = match self.source.fetch(options).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "Failed to load configuration from server");
                return PropertyMap::new();
            }
        };

        if !response.is_ok() {
            warn!(status = response.status, "Config server returned non-success status");
            return PropertyMap::new();
        }

        decode_properties(&response.body).unwrap_or_else(|err| {
            debug!(error = %err, "Discarding undecodable configuration payload");
            PropertyMap::new()
        })
    }

    fn apply_to_settings(&self, properties: &PropertyMap) {
        for (key, value) in properties {
            if let Err(err) = self.settings.set(key, value) {
                warn!(key = %key, error = %err, "Skipping property not representable in settings");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use clientconfig_domain::{ClientConfigError, Result};
    use parking_lot::Mutex;

    use super::*;
    use crate::ports::SourceResponse;
    use crate::settings::InMemorySettings;

    struct StubSource {
        outcome: Result<SourceResponse>,
        calls: Mutex<Vec<String>>,
    }

    impl StubSource {
        fn respond(status: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                outcome: Ok(SourceResponse::new(status, body)),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn fail(err: ClientConfigError) -> Arc<Self> {
            Arc::new(Self { outcome: Err(err), calls: Mutex::new(Vec::new()) })
        }
    }

    #[async_trait]
    impl ConfigSource for StubSource {
        async fn fetch(&self, options: &ConfigOptions) -> Result<SourceResponse> {
            self.calls.lock().push(options.application_id().to_string());
            self.outcome.clone()
        }
    }

    struct RejectingSettings;

    impl SettingsTable for RejectingSettings {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, key: &str, _value: &str) -> Result<()> {
            Err(ClientConfigError::InvalidInput(format!("cannot store {key}")))
        }
    }

    fn options() -> ConfigOptions {
        ConfigOptions::new("http://config.local", "billing").unwrap()
    }

    #[tokio::test]
    async fn successful_load_populates_store_and_settings() {
        let source = StubSource::respond(200, r#"{"A":"1","B":"2"}"#);
        let settings = Arc::new(InMemorySettings::new());
        let loader = ConfigLoader::new(source.clone(), settings.clone());

        let config = loader.load(options()).await;

        assert_eq!(config.get("A").as_deref(), Some("1"));
        assert_eq!(config.get("B").as_deref(), Some("2"));
        assert_eq!(settings.get("A").as_deref(), Some("1"));
        assert_eq!(settings.get("B").as_deref(), Some("2"));
        assert_eq!(source.calls.lock().as_slice(), ["billing".to_string()]);
    }

    #[tokio::test]
    async fn load_overwrites_existing_settings() {
        let source = StubSource::respond(200, r#"{"REGION":"us-east-1"}"#);
        let settings = Arc::new(InMemorySettings::with_entries([("REGION", "eu-west-1")]));
        let loader = ConfigLoader::new(source, settings.clone());

        let config = loader.load(options()).await;

        assert_eq!(settings.get("REGION").as_deref(), Some("us-east-1"));
        assert_eq!(config.get("REGION").as_deref(), Some("us-east-1"));
    }

    #[tokio::test]
    async fn server_error_degrades_to_settings_lookup() {
        let source = StubSource::respond(500, r#"{"A":"ignored"}"#);
        let settings = Arc::new(InMemorySettings::with_entries([("B", "from-env")]));
        let loader = ConfigLoader::new(source, settings.clone());

        let config = loader.load(options()).await;

        assert!(config.properties().is_empty());
        assert!(config.get("A").is_none());
        assert_eq!(config.get("B").as_deref(), Some("from-env"));
        assert_eq!(settings.len(), 1);
    }

    #[tokio::test]
    async fn transport_failure_degrades_to_empty() {
        let source = StubSource::fail(ClientConfigError::Network("connection refused".into()));
        let loader = ConfigLoader::new(source, Arc::new(InMemorySettings::new()));

        let config = loader.load(options()).await;

        assert!(config.properties().is_empty());
        assert!(config.get("anything").is_none());
    }

    #[tokio::test]
    async fn malformed_payload_degrades_to_empty() {
        let source = StubSource::respond(200, "not valid json{");
        let settings = Arc::new(InMemorySettings::new());
        let loader = ConfigLoader::new(source, settings.clone());

        let config = loader.load(options()).await;

        assert!(config.properties().is_empty());
        assert!(settings.is_empty());
    }

    #[tokio::test]
    async fn rejected_settings_writes_keep_store_values() {
        let source = StubSource::respond(200, r#"{"A":"1"}"#);
        let loader = ConfigLoader::new(source, Arc::new(RejectingSettings));

        let config = loader.load(options()).await;

        assert_eq!(config.get("A").as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn loaders_with_separate_settings_do_not_interfere() {
        let first_settings = Arc::new(InMemorySettings::new());
        let second_settings = Arc::new(InMemorySettings::new());
        let first = ConfigLoader::new(StubSource::respond(200, r#"{"A":"1"}"#), first_settings)
            .load(options())
            .await;
        let second = ConfigLoader::new(StubSource::respond(200, r#"{"A":"2"}"#), second_settings)
            .load(options())
            .await;

        assert_eq!(first.get("A").as_deref(), Some("1"));
        assert_eq!(second.get("A").as_deref(), Some("2"));
    }
}
