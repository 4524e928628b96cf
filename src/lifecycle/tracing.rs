//! # Observability & Tracing
//!
//! Every creation point in the crate emits `tracing` events with structured
//! fields (`family`, `variant`, `key`, `generation`, ...). Nothing is printed
//! until a subscriber is installed; [`setup_tracing`] installs a compact one.
//!
//! ## Usage
//!
//! ```bash
//! # Creation summaries only
//! RUST_LOG=info cargo test
//!
//! # Every build step, registration and release
//! RUST_LOG=debug cargo test
//!
//! # One strategy only
//! RUST_LOG=creation_recipe::prototype=debug cargo test
//! ```
//!
//! ## What Gets Traced
//!
//! - **Factories**: each product created, with its family
//! - **Dialogs**: tickets issued and released, refused disposals
//! - **Builders**: each step, retrieval and whether the car was complete
//! - **Registry**: registration, spawns (inside a `spawn` span), unknown keys
//! - **Singleton**: creation and reset with the generation number
//!
//! Sample output with `RUST_LOG=debug`:
//!
//! ```text
//! INFO Builder attached variant=Sedan
//! DEBUG construct: Build seat variant="Sedan"
//! DEBUG construct: Build engine variant="Sedan"
//! DEBUG construct: Build computer variant="Sedan"
//! DEBUG construct: Sequence complete variant=Sedan
//! INFO construct: Retrieved variant="Sedan" complete=true
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `filter` takes precedence over `RUST_LOG` when given (see
/// [`KitConfig::log_filter`](crate::lifecycle::config::KitConfig::log_filter)).
/// Returns `false` if a subscriber was already installed, which makes the call
/// safe to repeat from tests.
pub fn setup_tracing(filter: Option<&str>) -> bool {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::from_default_env(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_setup_is_rejected() {
        setup_tracing(Some("warn"));
        assert!(!setup_tracing(None));
    }
}
