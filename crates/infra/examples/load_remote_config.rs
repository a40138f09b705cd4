//! Example: Loading properties from a configuration server at startup
//!
//! Reads the connection options from the environment (or an options file),
//! performs the one-shot load and prints a few properties.
//!
//! # Setup
//!
//! ```bash
//! export CLIENT_CONFIG_SERVER_URL=http://localhost:8888
//! export CLIENT_CONFIG_APPLICATION_ID=billing
//! export CLIENT_CONFIG_TIMEOUT_MS=2000
//! RUST_LOG=debug cargo run --example load_remote_config -- DB_HOST DB_PORT
//! ```
//!
//! The example still starts when the server is down; lookups then fall back
//! to the environment.

use anyhow::Context;
use clientconfig_infra::{bootstrap, config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
#[allow(clippy::print_stdout)]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let options = config::load().context("no client config options found")?;
    let client_config = bootstrap::load(options).await;

    println!("Loaded {} properties from the config server", client_config.properties().len());

    for name in std::env::args().skip(1) {
        match client_config.get(&name) {
            Some(value) => println!("  {name} = {value}"),
            None => println!("  {name} is not set"),
        }
    }

    Ok(())
}
