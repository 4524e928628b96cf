//! # Step Builder + Director
//!
//! Assembles [`Car`](crate::model::Car)s one part at a time.
//!
//! ## Structure
//!
//! - [`builder`] - The [`CarBuilder`] trait plus [`SedanBuilder`] and [`SuvBuilder`]
//! - [`director`] - [`CarDirector`], which owns one builder and drives the fixed sequence
//! - [`error`] - [`DirectorError`] and [`BuildError`]
//!
//! ## Retrieval Policy
//!
//! [`CarBuilder::retrieve_product`] hands out the car in whatever state it is
//! in; a builder that was only asked for a seat gives back a car with just a
//! seat. Callers that need a finished product use
//! [`CarBuilder::retrieve_complete`], which refuses with
//! [`BuildError::Incomplete`] until all three parts are set.
//!
//! ## Usage
//!
//! ```rust
//! use creation_recipe::car_builder::CarDirector;
//! use creation_recipe::model::CarVariant;
//!
//! let mut director = CarDirector::new();
//!
//! director.attach(CarVariant::Sedan.builder());
//! let sedan = director.construct().unwrap();
//!
//! director.attach(CarVariant::Suv.builder());
//! let suv = director.construct().unwrap();
//!
//! assert_eq!(sedan.engine(), Some("Sedan Engine"));
//! assert_eq!(suv.engine(), Some("Suv Engine"));
//! ```

pub mod builder;
pub mod director;
pub mod error;

pub use builder::*;
pub use director::*;
pub use error::*;
