//! # Client Config Infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - HTTP client and the configuration server source
//! - Process environment settings table
//! - Options loading from environment variables and files
//! - Startup entry points wiring them together
//!
//! ## Architecture
//! - Implements traits defined in `clientconfig-core`
//! - Contains all "impure" code (network, process environment, files)
//!
//! ## Example
//! ```no_run
//! use clientconfig_domain::ConfigOptions;
//!
//! # async fn run() -> clientconfig_domain::Result<()> {
//! let options = ConfigOptions::new("http://config.internal:8888", "billing")?;
//! let config = clientconfig_infra::bootstrap::load(options).await;
//! let db_host = config.get("DB_HOST");
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod http;
pub mod settings;

// Re-export commonly used items
pub use bootstrap::{load, load_blocking, load_with};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder, HttpConfigSource};
pub use settings::ProcessEnvironment;
