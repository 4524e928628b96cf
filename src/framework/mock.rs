//! # Mock Framework
//!
//! Utilities for testing code that drives a [`CarBuilder`].
//!
//! [`MockBuilder`] hands out a builder that checks every call against a queue
//! of expectations. Queue the steps you expect with [`MockBuilder::expect_step`]
//! and [`MockBuilder::expect_retrieve`], give the builder to the code under test,
//! then call [`MockBuilder::verify`].

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::car_builder::CarBuilder;
use crate::model::{BuildStep, Car, CarVariant};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected call on the mock builder.
#[derive(Debug, Clone, PartialEq)]
enum Expectation {
    Step { step: BuildStep, part: String },
    Retrieve,
}

type Queue = Arc<Mutex<VecDeque<Expectation>>>;

fn lock(queue: &Queue) -> MutexGuard<'_, VecDeque<Expectation>> {
    queue.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A builder double with expectation tracking.
///
/// # Example
/// ```rust
/// use creation_recipe::car_builder::CarDirector;
/// use creation_recipe::framework::mock::MockBuilder;
/// use creation_recipe::model::BuildStep;
///
/// let mut mock = MockBuilder::new();
/// mock.expect_step(BuildStep::Seat).writes("Test Seat");
/// mock.expect_step(BuildStep::Engine).writes("Test Engine");
/// mock.expect_step(BuildStep::Computer).writes("Test Computer");
/// mock.expect_retrieve();
///
/// let mut director = CarDirector::with_builder(mock.builder());
/// let car = director.construct().unwrap();
///
/// assert_eq!(car.seat(), Some("Test Seat"));
/// mock.verify(); // Ensures all expectations were met
/// ```
#[derive(Debug)]
pub struct MockBuilder {
    variant: CarVariant,
    expectations: Queue,
}

impl MockBuilder {
    /// Creates a mock with no expectations that reports itself as a sedan.
    pub fn new() -> Self {
        Self::for_variant(CarVariant::Sedan)
    }

    pub fn for_variant(variant: CarVariant) -> Self {
        Self {
            variant,
            expectations: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Returns a builder backed by this mock's expectation queue.
    pub fn builder(&self) -> Box<dyn CarBuilder> {
        Box::new(MockCarBuilder {
            variant: self.variant,
            car: Car::new(),
            expectations: self.expectations.clone(),
        })
    }

    /// Expects the build call for `step`.
    pub fn expect_step(&mut self, step: BuildStep) -> StepExpectationBuilder {
        StepExpectationBuilder {
            step,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `retrieve_product` call.
    pub fn expect_retrieve(&mut self) {
        lock(&self.expectations).push_back(Expectation::Retrieve);
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        lock(&self.expectations).len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl Default for MockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for step expectations.
pub struct StepExpectationBuilder {
    step: BuildStep,
    expectations: Queue,
}

impl StepExpectationBuilder {
    /// The step will write `part` into the car.
    pub fn writes(self, part: impl Into<String>) {
        lock(&self.expectations).push_back(Expectation::Step {
            step: self.step,
            part: part.into(),
        });
    }
}

// =============================================================================
// THE MOCK BUILDER
// =============================================================================

#[derive(Debug)]
struct MockCarBuilder {
    variant: CarVariant,
    car: Car,
    expectations: Queue,
}

impl MockCarBuilder {
    fn next(&self) -> Option<Expectation> {
        lock(&self.expectations).pop_front()
    }

    fn on_step(&mut self, step: BuildStep) {
        match self.next() {
            Some(Expectation::Step { step: expected, part }) if expected == step => match step {
                BuildStep::Seat => self.car.make_seat(part),
                BuildStep::Engine => self.car.make_engine(part),
                BuildStep::Computer => self.car.make_computer(part),
            },
            other => panic!("Unexpected build step {step}, expected {other:?}"),
        }
    }
}

impl CarBuilder for MockCarBuilder {
    fn variant(&self) -> CarVariant {
        self.variant
    }

    fn build_seat(&mut self) {
        self.on_step(BuildStep::Seat);
    }

    fn build_engine(&mut self) {
        self.on_step(BuildStep::Engine);
    }

    fn build_computer(&mut self) {
        self.on_step(BuildStep::Computer);
    }

    fn peek(&self) -> &Car {
        &self.car
    }

    fn retrieve_product(&mut self) -> Car {
        match self.next() {
            Some(Expectation::Retrieve) => std::mem::take(&mut self.car),
            other => panic!("Unexpected retrieve, expected {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_builder_consumes_expectations_in_order() {
        let mut mock = MockBuilder::for_variant(CarVariant::Suv);
        mock.expect_step(BuildStep::Engine).writes("E");
        mock.expect_retrieve();

        let mut builder = mock.builder();
        assert_eq!(builder.variant(), CarVariant::Suv);
        builder.build_engine();
        assert_eq!(mock.remaining(), 1);

        let car = builder.retrieve_product();
        assert_eq!(car.engine(), Some("E"));
        mock.verify();
    }

    #[test]
    #[should_panic(expected = "Unexpected build step seat")]
    fn test_mock_builder_rejects_out_of_order_step() {
        let mut mock = MockBuilder::new();
        mock.expect_step(BuildStep::Engine).writes("E");

        let mut builder = mock.builder();
        builder.build_seat();
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_reports_leftovers() {
        let mut mock = MockBuilder::new();
        mock.expect_retrieve();
        mock.verify();
    }
}
