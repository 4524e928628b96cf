//! # Prototype Registry / Clone
//!
//! New objects are made by copying an existing, already configured one.
//!
//! ## Overview
//!
//! Any [`Shape`] can copy itself with [`Shape::clone_shape`]; [`duplicate`] is
//! the free-standing form of that call. A copy is equal in value to its source
//! and shares no mutable storage with it. Composite shapes
//! ([`ShapeGroup`](crate::model::ShapeGroup)) copy their children too.
//!
//! [`PrototypeRegistry`] keeps named prototypes and hands out copies on
//! request, so callers can ask for `"circle"` without knowing about
//! [`Circle`](crate::model::Circle).
//!
//! ```rust
//! use creation_recipe::model::Rectangle;
//! use creation_recipe::prototype::duplicate;
//!
//! let source = Rectangle::new(3.0, 4.0);
//! let copy = duplicate(&source);
//!
//! assert_eq!(copy.show(), "<> This is a Rectangle: 3#4");
//! assert_eq!(copy.area(), 12.0);
//! ```

pub mod error;
pub mod registry;

pub use error::*;
pub use registry::*;

use tracing::debug;

use crate::framework::Shape;

/// Returns an independent deep copy of `source`.
pub fn duplicate(source: &dyn Shape) -> Box<dyn Shape> {
    debug!(kind = source.kind(), "Duplicate");
    source.clone_shape()
}
