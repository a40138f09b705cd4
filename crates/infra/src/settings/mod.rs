//! Settings table backed by the operating system process.

pub mod process_env;

pub use process_env::ProcessEnvironment;
