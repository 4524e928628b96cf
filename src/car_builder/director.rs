//! The director: hides the construction sequence from callers.

use tracing::{debug, info, instrument, warn};

use super::builder::CarBuilder;
use super::error::DirectorError;
use crate::model::{BuildStep, Car};

/// Drives an attached [`CarBuilder`] through [`BuildStep::SEQUENCE`].
///
/// The director owns at most one builder. Attaching another one drops the
/// previous builder together with whatever it had half-built.
///
/// # Example
///
/// ```rust
/// use creation_recipe::car_builder::{CarDirector, SedanBuilder};
///
/// let mut director = CarDirector::new();
/// director.attach(Box::new(SedanBuilder::new()));
/// let car = director.construct().unwrap();
///
/// assert_eq!(car.to_string(), "Sedan Seat --> Sedan Engine --> Sedan Computer");
/// ```
#[derive(Debug, Default)]
pub struct CarDirector {
    builder: Option<Box<dyn CarBuilder>>,
}

impl CarDirector {
    /// Creates a director with no builder attached.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: Box<dyn CarBuilder>) -> Self {
        Self {
            builder: Some(builder),
        }
    }

    /// Attaches `builder`, releasing the previously attached one.
    pub fn attach(&mut self, builder: Box<dyn CarBuilder>) {
        let variant = builder.variant();
        if let Some(previous) = self.builder.replace(builder) {
            debug!(previous = %previous.variant(), "Released builder");
        }
        info!(%variant, "Builder attached");
    }

    /// Hands the attached builder back to the caller.
    pub fn detach(&mut self) -> Option<Box<dyn CarBuilder>> {
        self.builder.take()
    }

    pub fn has_builder(&self) -> bool {
        self.builder.is_some()
    }

    /// Runs seat, engine, computer on the attached builder, in that order.
    pub fn run_full_sequence(&mut self) -> Result<(), DirectorError> {
        let builder = self.builder_mut()?;
        for step in BuildStep::SEQUENCE {
            builder.apply(step);
        }
        debug!(variant = %builder.variant(), "Sequence complete");
        Ok(())
    }

    /// Moves the car out of the attached builder, as currently assembled.
    pub fn retrieve(&mut self) -> Result<Car, DirectorError> {
        Ok(self.builder_mut()?.retrieve_product())
    }

    /// [`run_full_sequence`](Self::run_full_sequence) followed by
    /// [`retrieve`](Self::retrieve).
    #[instrument(skip(self))]
    pub fn construct(&mut self) -> Result<Car, DirectorError> {
        self.run_full_sequence()?;
        self.retrieve()
    }

    fn builder_mut(&mut self) -> Result<&mut Box<dyn CarBuilder>, DirectorError> {
        self.builder.as_mut().ok_or_else(|| {
            warn!("No builder attached");
            DirectorError::NoBuilderAttached
        })
    }
}
