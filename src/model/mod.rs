//! Pure product types handed out by the creation strategies.

pub mod car;
pub mod resource;
pub mod shape;
pub mod widget;

pub use car::*;
pub use resource::*;
pub use shape::*;
pub use widget::*;
