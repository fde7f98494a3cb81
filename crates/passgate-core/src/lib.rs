//! Passgate Core - Shared configuration types
//!
//! This crate defines the process-wide configuration used by the passgate
//! API server:
//! - Server binding (host, port)
//! - Database connection settings
//! - Authentication settings (signing secret, token lifetime)
//!
//! Configuration is loaded once at startup; the signing secret is mandatory
//! and its absence is a fatal startup error.

pub mod config;

pub use config::{AppConfig, AuthConfig, ConfigError, DatabaseConfig, LoggingConfig, ServerConfig};
