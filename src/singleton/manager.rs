//! The generic lazily-created, resettable single instance.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

/// Where a [`Singleton`] is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// No instance was ever created.
    Uninitialized,
    /// An instance exists and [`Singleton::get`] returns it.
    Active,
    /// The last instance was reset; the next `get` creates a new one.
    Destroyed,
}

/// Manages at most one live instance of `T`.
///
/// # Architecture Note
/// The slot is a `Mutex<Option<Arc<T>>>`. Creation and [`reset`](Self::reset)
/// both happen while holding that mutex, so two threads racing on the first
/// [`get`](Self::get) still see a single instance.
///
/// `new` is a `const fn`, so a manager can live in a `static`:
///
/// ```rust
/// use creation_recipe::singleton::{Lifecycle, Singleton};
///
/// static COUNTER: Singleton<String> = Singleton::new(|generation| format!("gen {generation}"));
///
/// assert_eq!(COUNTER.state(), Lifecycle::Uninitialized);
/// assert_eq!(*COUNTER.get(), "gen 1");
/// COUNTER.reset();
/// assert_eq!(*COUNTER.get(), "gen 2");
/// ```
pub struct Singleton<T> {
    init: fn(u64) -> T,
    slot: Mutex<Option<Arc<T>>>,
    generation: AtomicU64,
}

impl<T> Singleton<T> {
    /// `init` receives the generation number of the instance it builds,
    /// starting at 1.
    pub const fn new(init: fn(u64) -> T) -> Self {
        Self {
            init,
            slot: Mutex::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// Returns the live instance, creating it first if there is none.
    pub fn get(&self) -> Arc<T> {
        let mut slot = self.lock();
        if let Some(instance) = slot.as_ref() {
            return Arc::clone(instance);
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let instance = Arc::new((self.init)(generation));
        *slot = Some(Arc::clone(&instance));
        info!(generation, "Instance created");
        instance
    }

    /// Destroys the live instance. Returns `false` if there was none.
    ///
    /// # Use after reset
    /// Handles returned by earlier [`get`](Self::get) calls stay valid (they
    /// are `Arc`s), but they point at the retired instance, not at the one the
    /// next `get` creates. Callers must not treat such a handle as the current
    /// shared state; re-acquire it with `get` instead.
    pub fn reset(&self) -> bool {
        match self.lock().take() {
            Some(retired) => {
                debug!(
                    generation = self.generation(),
                    outstanding = Arc::strong_count(&retired) - 1,
                    "Instance reset"
                );
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> Lifecycle {
        let slot = self.lock();
        match (slot.is_some(), self.generation()) {
            (true, _) => Lifecycle::Active,
            (false, 0) => Lifecycle::Uninitialized,
            (false, _) => Lifecycle::Destroyed,
        }
    }

    pub fn is_active(&self) -> bool {
        self.lock().is_some()
    }

    /// Number of instances created so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<T>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> fmt::Debug for Singleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Singleton")
            .field("state", &self.state())
            .field("generation", &self.generation())
            .finish()
    }
}
