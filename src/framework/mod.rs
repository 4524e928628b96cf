//! Shared building blocks for every creation strategy.
//!
//! # Main Components
//!
//! - [`core`] - Product capability traits ([`Widget`], [`Button`], [`Checkbox`], [`Shape`])
//!   and the [`FamilyTag`] / [`Capability`] selectors
//! - [`error`] - [`CreationError`], the union of every strategy's error type
//!
//! # Testing
//!
//! See [`mock`] module for a builder double that records how a director drives it.

pub mod core;
pub mod error;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
pub use self::error::*;
