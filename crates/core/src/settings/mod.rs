//! Settings table implementations that need no platform access.

pub mod memory;

pub use memory::InMemorySettings;
