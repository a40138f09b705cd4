//! # Client Config Core
//!
//! Pure loading and lookup logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces for the configuration server and the settings table
//! - Payload decoding rules for server responses
//! - The loader that turns one fetch attempt into a [`ClientConfig`]
//!
//! ## Architecture Principles
//! - Only depends on `clientconfig-domain`
//! - No HTTP or process-environment code
//! - All external dependencies via traits

pub mod accessor;
pub mod loader;
pub mod payload;
pub mod ports;
pub mod settings;
pub mod store;

pub use accessor::ClientConfig;
pub use loader::ConfigLoader;
pub use ports::{ConfigSource, SettingsTable, SourceResponse};
pub use settings::InMemorySettings;
pub use store::PropertyStore;
