//! Error types for the prototype registry.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PrototypeError {
    /// No prototype is registered under this key.
    #[error("no prototype registered under '{0}'")]
    UnknownPrototype(String),
}
