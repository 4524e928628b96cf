//! # Singleton Manager
//!
//! One process-wide [`SharedResource`], created lazily and explicitly
//! resettable.
//!
//! ## Overview
//!
//! [`Singleton<T>`] is the reusable part: a guarded slot holding at most one
//! `Arc<T>`. The crate keeps one of them in a `static` for
//! [`SharedResource`]; [`shared()`], [`reset_shared()`] and [`shared_state()`]
//! operate on it.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized --get--> Active --reset--> Destroyed --get--> Active ...
//! ```
//!
//! Every `get` after a reset creates a new instance with the next generation
//! number and zero hits.
//!
//! ```rust
//! use creation_recipe::singleton::{shared, reset_shared};
//!
//! let resource = shared();
//! assert_eq!(resource.tell(), "<> This is Singleton");
//! reset_shared();
//! ```

pub mod manager;

pub use manager::*;

use std::sync::Arc;

use crate::model::SharedResource;

static SHARED: Singleton<SharedResource> = Singleton::new(SharedResource::new);

/// The process-wide resource, created on first use.
pub fn shared() -> Arc<SharedResource> {
    SHARED.get()
}

/// Destroys the process-wide resource. See [`Singleton::reset`] for what
/// happens to handles that are still held.
pub fn reset_shared() -> bool {
    SHARED.reset()
}

pub fn shared_state() -> Lifecycle {
    SHARED.state()
}
