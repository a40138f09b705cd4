//! Conversions from third-party errors into [`ClientConfigError`].
//!
//! [`ClientConfigError`]: clientconfig_domain::ClientConfigError

pub mod conversions;

pub use conversions::InfraError;
