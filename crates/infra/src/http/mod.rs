//! HTTP transport for reaching the configuration server.

pub mod client;
pub mod config_source;

pub use client::{HttpClient, HttpClientBuilder};
pub use config_source::HttpConfigSource;
