//! The builder contract and the Sedan / Suv representations.

use std::fmt::Debug;

use tracing::{debug, info, warn};

use super::error::BuildError;
use crate::model::{BuildProgress, BuildStep, Car, CarVariant};

/// Assembles one [`Car`] step by step.
///
/// # Architecture Note
/// A builder owns the car it is working on until [`retrieve_product`] moves it
/// out. After retrieval the builder holds a fresh, empty car again, so the same
/// builder can be driven for another product without leaking state.
///
/// Each `build_*` call overwrites the part it is responsible for; calling it
/// twice is harmless.
///
/// Builders are `Send` but not `Sync`. Every mutating call takes `&mut self`,
/// so one owner drives a builder at a time.
///
/// [`retrieve_product`]: CarBuilder::retrieve_product
pub trait CarBuilder: Debug + Send {
    /// The representation this builder produces.
    fn variant(&self) -> CarVariant;

    fn build_seat(&mut self);

    fn build_engine(&mut self);

    fn build_computer(&mut self);

    /// The car as currently assembled.
    fn peek(&self) -> &Car;

    /// Moves the car out as currently assembled, complete or not.
    fn retrieve_product(&mut self) -> Car;

    /// Runs the build call for `step`.
    fn apply(&mut self, step: BuildStep) {
        match step {
            BuildStep::Seat => self.build_seat(),
            BuildStep::Engine => self.build_engine(),
            BuildStep::Computer => self.build_computer(),
        }
    }

    fn progress(&self) -> BuildProgress {
        self.peek().progress()
    }

    /// Moves the car out only if every part is set.
    ///
    /// # Errors
    /// [`BuildError::Incomplete`] listing the unset steps; the builder keeps
    /// its car in that case.
    fn retrieve_complete(&mut self) -> Result<Car, BuildError> {
        let progress = self.progress();
        if !progress.is_complete() {
            let missing = progress.missing();
            warn!(variant = %self.variant(), ?missing, "Retrieve refused");
            return Err(BuildError::Incomplete { missing });
        }
        Ok(self.retrieve_product())
    }
}

/// Builds sedans.
#[derive(Debug, Default)]
pub struct SedanBuilder {
    car: Car,
}

impl SedanBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CarBuilder for SedanBuilder {
    fn variant(&self) -> CarVariant {
        CarVariant::Sedan
    }

    fn build_seat(&mut self) {
        debug!(variant = "Sedan", "Build seat");
        self.car.make_seat("Sedan Seat");
    }

    fn build_engine(&mut self) {
        debug!(variant = "Sedan", "Build engine");
        self.car.make_engine("Sedan Engine");
    }

    fn build_computer(&mut self) {
        debug!(variant = "Sedan", "Build computer");
        self.car.make_computer("Sedan Computer");
    }

    fn peek(&self) -> &Car {
        &self.car
    }

    fn retrieve_product(&mut self) -> Car {
        let car = std::mem::take(&mut self.car);
        info!(variant = "Sedan", complete = car.is_complete(), "Retrieved");
        car
    }
}

/// Builds SUVs.
#[derive(Debug, Default)]
pub struct SuvBuilder {
    car: Car,
}

impl SuvBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CarBuilder for SuvBuilder {
    fn variant(&self) -> CarVariant {
        CarVariant::Suv
    }

    fn build_seat(&mut self) {
        debug!(variant = "Suv", "Build seat");
        self.car.make_seat("Suv Seat");
    }

    fn build_engine(&mut self) {
        debug!(variant = "Suv", "Build engine");
        self.car.make_engine("Suv Engine");
    }

    fn build_computer(&mut self) {
        debug!(variant = "Suv", "Build computer");
        self.car.make_computer("Suv Computer");
    }

    fn peek(&self) -> &Car {
        &self.car
    }

    fn retrieve_product(&mut self) -> Car {
        let car = std::mem::take(&mut self.car);
        info!(variant = "Suv", complete = car.is_complete(), "Retrieved");
        car
    }
}

impl CarVariant {
    /// Creates a fresh builder for this representation.
    pub fn builder(self) -> Box<dyn CarBuilder> {
        match self {
            CarVariant::Sedan => Box::new(SedanBuilder::new()),
            CarVariant::Suv => Box::new(SuvBuilder::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BuildStage;

    #[test]
    fn test_steps_advance_stage() {
        let mut builder = SuvBuilder::new();
        assert_eq!(builder.peek().stage(), BuildStage::Empty);

        builder.build_seat();
        assert_eq!(builder.peek().stage(), BuildStage::SeatSet);
        builder.build_engine();
        assert_eq!(builder.peek().stage(), BuildStage::EngineSet);
        builder.build_computer();
        assert_eq!(builder.peek().stage(), BuildStage::ComputerSet);
        assert!(builder.progress().is_complete());
    }

    #[test]
    fn test_retrieve_is_permissive() {
        let mut builder = SedanBuilder::new();
        builder.build_engine();

        let car = builder.retrieve_product();
        assert_eq!(car.seat(), None);
        assert_eq!(car.engine(), Some("Sedan Engine"));
        assert_eq!(builder.peek().stage(), BuildStage::Empty);
    }

    #[test]
    fn test_retrieve_complete_refuses_partial_car() {
        let mut builder = SedanBuilder::new();
        builder.build_seat();

        let err = builder.retrieve_complete().unwrap_err();
        assert_eq!(
            err,
            BuildError::Incomplete {
                missing: vec![BuildStep::Engine, BuildStep::Computer],
            }
        );
        // Nothing was moved out.
        assert_eq!(builder.peek().seat(), Some("Sedan Seat"));

        builder.build_engine();
        builder.build_computer();
        let car = builder.retrieve_complete().unwrap();
        assert!(car.is_complete());
    }

    #[test]
    fn test_variant_builder() {
        let mut builder = CarVariant::Suv.builder();
        assert_eq!(builder.variant(), CarVariant::Suv);
        builder.apply(BuildStep::Computer);
        assert_eq!(builder.peek().computer(), Some("Suv Computer"));
    }
}
