use std::sync::atomic::{AtomicU64, Ordering};

/// The process-wide resource handed out by [`shared()`](crate::singleton::shared).
///
/// Each instance records which generation it belongs to (1 for the first
/// instance, 2 after the first reset, ...) and counts how often it was used.
/// A freshly created instance always starts with zero hits.
#[derive(Debug)]
pub struct SharedResource {
    generation: u64,
    hits: AtomicU64,
}

impl SharedResource {
    pub fn new(generation: u64) -> Self {
        Self {
            generation,
            hits: AtomicU64::new(0),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn tell(&self) -> String {
        self.touch();
        "<> This is Singleton".to_string()
    }

    /// Records one use and returns the updated count.
    pub fn touch(&self) -> u64 {
        self.hits.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::SeqCst)
    }
}
