//! Networking modules for the RAG backend's HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls, `error` classifies failures for the notifier,
//! and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
