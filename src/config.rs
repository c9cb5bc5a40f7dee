//! Configuration from the environment
//!
//! A `.env` file is loaded first when present, empty variables count as not set

use std::env::var;
use std::net::SocketAddr;

use anyhow::Context;
use anyhow::Result;

const DEFAULT_RUST_LOG: &str = "morethantasks=debug,tower_http=debug";
const DEFAULT_ADDRESS: &str = "0.0.0.0:8000";

/// Process configuration
#[derive(Debug)]
pub struct Config {
    /// Postgres connection string
    pub database_url: String,

    /// Address to listen on
    pub address: SocketAddr,
}

impl Config {
    /// Read the configuration from the environment
    ///
    /// # Errors
    ///
    /// Will return `Err` when `DATABASE_URL` is missing or `ADDRESS`/`PORT` are invalid
    pub fn from_env() -> Result<Self> {
        let database_url = env_var("DATABASE_URL").context("`DATABASE_URL` is not set")?;

        Ok(Self {
            database_url,
            address: address()?,
        })
    }
}

/// Load the `.env` file, if any
pub fn load_environment() {
    dotenvy::dotenv().ok();
}

/// Log filter directives
pub fn log_filter() -> String {
    env_var_or_else("RUST_LOG", || String::from(DEFAULT_RUST_LOG))
}

fn address() -> Result<SocketAddr> {
    let mut address = env_var_or_else("ADDRESS", || String::from(DEFAULT_ADDRESS))
        .parse::<SocketAddr>()
        .context("Invalid `ADDRESS`")?;

    // optional override of just the port
    if let Some(port) = env_var("PORT") {
        let port = port.parse::<u16>().context("Invalid `PORT`")?;

        address.set_port(port);
    }

    Ok(address)
}

/// Get the value of ENV var, only when it is set and not empty
fn env_var(var_name: &'static str) -> Option<String> {
    var(var_name).ok().filter(|value| !value.is_empty())
}

/// Get the value of ENV var, or a default
fn env_var_or_else(var_name: &'static str, or_else: fn() -> String) -> String {
    env_var(var_name).unwrap_or_else(or_else)
}
