//! Property accessor handed to the embedding application after load.

use std::fmt;
use std::sync::Arc;

use clientconfig_domain::ConfigOptions;

use crate::ports::SettingsTable;
use crate::store::PropertyStore;

/// Two-tier property lookup: loaded properties first, then the settings
/// table.
///
/// Lookups never fail; a name absent from both tiers is `None`.
#[derive(Clone)]
pub struct ClientConfig {
    options: ConfigOptions,
    store: PropertyStore,
    settings: Arc<dyn SettingsTable>,
}

impl ClientConfig {
    /// Create an accessor with an empty store.
    ///
    /// Until a load replaces it, every lookup falls through to `settings`.
    pub fn new(options: ConfigOptions, settings: Arc<dyn SettingsTable>) -> Self {
        Self::with_store(options, PropertyStore::empty(), settings)
    }

    pub(crate) fn with_store(
        options: ConfigOptions,
        store: PropertyStore,
        settings: Arc<dyn SettingsTable>,
    ) -> Self {
        Self { options, store, settings }
    }

    /// Resolve a property.
    pub fn get(&self, name: &str) -> Option<String> {
        match self.store.get(name) {
            Some(value) => Some(value.to_string()),
            None => self.settings.get(name),
        }
    }

    /// Resolve a property into any type constructible from a `String`.
    ///
    /// This is a plain conversion; the value is not parsed or validated.
    pub fn get_as<T>(&self, name: &str) -> Option<T>
    where
        T: From<String>,
    {
        self.get(name).map(T::from)
    }

    /// Whether either tier holds `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.store.contains(name) || self.settings.get(name).is_some()
    }

    /// Properties loaded from the configuration server.
    pub const fn properties(&self) -> &PropertyStore {
        &self.store
    }

    pub const fn options(&self) -> &ConfigOptions {
        &self.options
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("options", &self.options)
            .field("properties", &self.store.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clientconfig_domain::PropertyMap;

    use super::*;
    use crate::payload::decode_properties;
    use crate::settings::InMemorySettings;

    fn options() -> ConfigOptions {
        ConfigOptions::new("http://config.local", "billing").unwrap()
    }

    fn accessor(props: &[(&str, &str)], env: &[(&str, &str)]) -> ClientConfig {
        let store: PropertyMap =
            props.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        let settings = Arc::new(InMemorySettings::with_entries(env.iter().copied()));
        ClientConfig::with_store(options(), store.into(), settings)
    }

    #[test]
    fn store_value_wins_over_settings() {
        let config = accessor(&[("LOG_LEVEL", "debug")], &[("LOG_LEVEL", "info")]);
        assert_eq!(config.get("LOG_LEVEL").as_deref(), Some("debug"));
    }

    #[test]
    fn falls_back_to_settings() {
        let config = accessor(&[], &[("HOME_DIR", "/srv")]);
        assert_eq!(config.get("HOME_DIR").as_deref(), Some("/srv"));
        assert!(config.contains("HOME_DIR"));
    }

    #[test]
    fn missing_in_both_tiers_is_none() {
        let config = accessor(&[("A", "1")], &[]);
        assert!(config.get("B").is_none());
        assert!(!config.contains("B"));
    }

    #[test]
    fn repeated_lookups_are_stable() {
        let config = accessor(&[("A", "1")], &[]);
        let first = config.get("A");
        for _ in 0..5 {
            assert_eq!(config.get("A"), first);
        }
    }

    #[test]
    fn typed_view_converts_without_parsing() {
        let config = accessor(&[("DATA_DIR", "/var/lib/app")], &[]);
        let path: Option<PathBuf> = config.get_as("DATA_DIR");
        assert_eq!(path, Some(PathBuf::from("/var/lib/app")));
    }

    #[test]
    fn new_accessor_has_empty_store() {
        let settings = Arc::new(InMemorySettings::with_entries([("A", "env")]));
        let config = ClientConfig::new(options(), settings);

        assert!(config.properties().is_empty());
        assert_eq!(config.get("A").as_deref(), Some("env"));
    }

    #[test]
    fn null_property_falls_through_to_settings() {
        let store = decode_properties(r#"{"A":null,"B":"remote"}"#).unwrap();
        let settings = Arc::new(InMemorySettings::with_entries([("A", "from-env")]));
        let config = ClientConfig::with_store(options(), store.into(), settings);

        assert!(!config.properties().contains("A"));
        assert_eq!(config.get("A").as_deref(), Some("from-env"));
        assert_eq!(config.get("B").as_deref(), Some("remote"));
    }
}
