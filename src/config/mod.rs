//! Configuration modules for the EduSync API.
//!
//! Each submodule loads one concern from environment variables with a
//! `from_env()` constructor. Values that are absent or fail to parse fall back
//! to the defaults documented on each struct. `.env` files are read by
//! `dotenvy` in `main` before any of these run.
//!
//! # Modules
//!
//! - [`database`]: document store backend selection and connection settings
//! - [`github`]: optional GitHub OAuth credentials
//! - [`server`]: listen port and request timeout
//! - [`session`]: session cookie settings
//!
//! # Example
//!
//! ```ignore
//! use crate::config::database::DatabaseConfig;
//! use crate::config::server::ServerConfig;
//!
//! let database = DatabaseConfig::from_env();
//! let server = ServerConfig::from_env();
//! ```

pub mod database;
pub mod github;
pub mod server;
pub mod session;

use std::env;
use std::str::FromStr;

/// Reads and parses an environment variable, `None` when unset or unparsable.
pub(crate) fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.trim().parse().ok())
}

/// Reads an environment variable, treating an empty value as unset.
pub(crate) fn env_non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
