//! Host configuration from the process environment.
//!
//! `.env` is loaded first (if present); real environment variables win.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};

use crate::error::HostError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub log_filter: String,
}

impl HostConfig {
    /// Read from the environment after loading `.env`.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self, HostError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HostError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse::<u16>().map_err(|_| HostError::InvalidEnv { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let log_filter = lookup("RUST_LOG")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());
        Ok(Self { port, log_filter })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
