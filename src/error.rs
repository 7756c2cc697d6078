//! Host startup errors.

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
    #[error("log filter: {0}")]
    LogFilter(String),
}
