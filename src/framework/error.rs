//! # Framework Errors
//!
//! Each creation strategy owns its error enum (see `family_factory::error`,
//! `product_factory::error`, ...). [`CreationError`] is the union of all of them,
//! so callers that mix strategies can use `?` across the board.

use crate::car_builder::{BuildError, DirectorError};
use crate::family_factory::FactoryError;
use crate::lifecycle::config::ConfigError;
use crate::product_factory::DialogError;
use crate::prototype::PrototypeError;

/// Errors that can occur anywhere in the creation framework.
#[derive(Debug, thiserror::Error)]
pub enum CreationError {
    #[error(transparent)]
    Factory(#[from] FactoryError),
    #[error(transparent)]
    Dialog(#[from] DialogError),
    #[error(transparent)]
    Director(#[from] DirectorError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Prototype(#[from] PrototypeError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias using [`CreationError`].
pub type Result<T> = std::result::Result<T, CreationError>;

/// A selector string did not name any known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
