//! # Client Config Domain
//!
//! Value objects and error types shared by the client config crates.
//!
//! This crate contains:
//! - Connection options for the configuration server ([`ConfigOptions`])
//! - Domain error types and Result definitions
//! - Wire-level constants (request path, query parameter names)
//!
//! ## Architecture
//! - No dependencies on other client config crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod constants;
pub mod errors;
pub mod options;

// Re-export commonly used items
pub use errors::*;
pub use options::{ConfigOptions, ConfigOptionsBuilder, PropertyMap};
