//! Keyed store of prototypes.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, instrument, warn};

use super::error::PrototypeError;
use crate::framework::Shape;
use crate::model::{Circle, Rectangle};

type Store = HashMap<String, Box<dyn Shape>>;

/// Holds one prototype per key and hands out copies of them.
///
/// # Architecture Note
/// Spawning clones under the read lock, so a prototype never changes halfway
/// through a copy. Mutations go through [`modify`](Self::modify), which holds
/// the write lock; copies spawned earlier are unaffected by later edits.
///
/// # Example
///
/// ```rust
/// use creation_recipe::prototype::PrototypeRegistry;
///
/// let registry = PrototypeRegistry::with_defaults();
/// let copy = registry.spawn("rectangle").unwrap();
/// assert_eq!(copy.show(), "<> This is a Rectangle: 3#4");
/// ```
#[derive(Debug, Default)]
pub struct PrototypeRegistry {
    prototypes: RwLock<Store>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with a 3x4 `"rectangle"` and a radius 5 `"circle"`.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register("rectangle", Box::new(Rectangle::new(3.0, 4.0)));
        registry.register("circle", Box::new(Circle::new(5.0)));
        registry
    }

    /// Stores `prototype` under `key`, returning the one it replaced.
    pub fn register(
        &self,
        key: impl Into<String>,
        prototype: Box<dyn Shape>,
    ) -> Option<Box<dyn Shape>> {
        let key = key.into();
        debug!(%key, kind = prototype.kind(), "Register prototype");
        let replaced = self.write().insert(key, prototype);
        if let Some(old) = &replaced {
            debug!(kind = old.kind(), "Replaced prototype");
        }
        replaced
    }

    pub fn unregister(&self, key: &str) -> Result<Box<dyn Shape>, PrototypeError> {
        self.write()
            .remove(key)
            .ok_or_else(|| unknown(key))
    }

    /// Returns an independent copy of the prototype stored under `key`.
    #[instrument(skip(self))]
    pub fn spawn(&self, key: &str) -> Result<Box<dyn Shape>, PrototypeError> {
        let copy = self
            .read()
            .get(key)
            .map(|prototype| prototype.clone_shape())
            .ok_or_else(|| unknown(key))?;
        info!(kind = copy.kind(), "Spawned");
        Ok(copy)
    }

    /// Runs `f` on the stored prototype under the write lock.
    pub fn modify<F, R>(&self, key: &str, f: F) -> Result<R, PrototypeError>
    where
        F: FnOnce(&mut dyn Shape) -> R,
    {
        let mut store = self.write();
        let prototype = store.get_mut(key).ok_or_else(|| unknown(key))?;
        debug!(%key, "Modify prototype");
        Ok(f(prototype.as_mut()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.prototypes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.prototypes.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn unknown(key: &str) -> PrototypeError {
    warn!(%key, "Unknown prototype");
    PrototypeError::UnknownPrototype(key.to_string())
}
