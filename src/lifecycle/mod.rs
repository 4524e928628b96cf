//! # Lifecycle
//!
//! Process-level setup shared by every strategy: logging and configuration.
//!
//! - [`tracing`] - [`setup_tracing`](self::tracing::setup_tracing) installs the subscriber
//! - [`config`] - [`KitConfig`] selects the family and vehicle variants

pub mod config;
pub mod tracing;

pub use self::config::{ConfigError, KitConfig};
