//! Wire and environment constants
//!
//! Centralized location for the names shared between the HTTP source, the
//! options loader and tests.

// Configuration server contract
pub const CONFIGURATION_PATH: &str = "configuration";
pub const APPLICATION_ID_PARAM: &str = "applicationId";

// Environment variables read when building `ConfigOptions` from the process
pub const ENV_SERVER_URL: &str = "CLIENT_CONFIG_SERVER_URL";
pub const ENV_APPLICATION_ID: &str = "CLIENT_CONFIG_APPLICATION_ID";
pub const ENV_TIMEOUT_MS: &str = "CLIENT_CONFIG_TIMEOUT_MS";

// Options file names probed by the loader (without extension)
pub const OPTIONS_FILE_STEMS: [&str; 2] = ["client-config", "config"];
