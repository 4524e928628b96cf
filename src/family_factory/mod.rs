//! # Family Factory
//!
//! Produces matched sets of UI products that are guaranteed to work together.
//!
//! ## Overview
//!
//! A family factory is constructed for exactly one [`FamilyTag`]. Everything it
//! produces reports that tag, so a caller that only talks to one factory can
//! never mix a Windows button with a Mac checkbox.
//!
//! ## Structure
//!
//! - [`FamilyFactory`] - The open contract: declared capabilities + `create_member`
//! - [`GuiFactory`] - The closed contract of the built-in families, with typed constructors
//! - [`entity`] - [`WinFactory`] and [`MacFactory`]
//! - [`extensible`] - [`ExtensibleFactory`], a family assembled at runtime
//! - [`error`] - [`FactoryError`]
//! - [`factory_for()`] - Selects a built-in family from its tag
//!
//! ## Usage
//!
//! ```rust
//! use creation_recipe::family_factory::{factory_for, FamilyFactory, GuiFactory};
//! use creation_recipe::framework::{Capability, FamilyTag, Widget};
//!
//! let factory = factory_for(FamilyTag::Mac);
//! let button = factory.create_button();
//! let checkbox = factory.create_member(Capability::Checkbox).unwrap();
//!
//! assert_eq!(button.family(), checkbox.family());
//! assert_eq!(button.show_name(), "<> Initialize Mac Button");
//! ```
//!
//! ## Concurrency
//!
//! Factories hold nothing but their tag (and, for [`ExtensibleFactory`], an
//! immutable constructor table), so they are `Send + Sync` and can be shared
//! between threads freely.

pub mod entity;
pub mod error;
pub mod extensible;

pub use entity::*;
pub use error::*;
pub use extensible::*;

use crate::framework::{Button, Capability, Checkbox, FamilyTag, Widget};

/// A factory for the members of one family.
pub trait FamilyFactory: Send + Sync {
    /// The tag every product of this factory carries.
    fn family(&self) -> FamilyTag;

    /// The capabilities this family declares.
    fn capabilities(&self) -> &[Capability];

    /// Builds a fresh member for `capability`.
    ///
    /// # Errors
    /// [`FactoryError::UnsupportedCapability`] if `capability` is not declared.
    fn create_member(&self, capability: Capability) -> Result<Box<dyn Widget>, FactoryError>;

    fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

/// A family with a fixed button + checkbox set.
pub trait GuiFactory: FamilyFactory {
    fn create_button(&self) -> Box<dyn Button>;

    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

/// Creates the built-in factory for `family`.
pub fn factory_for(family: FamilyTag) -> Box<dyn GuiFactory> {
    match family {
        FamilyTag::Windows => Box::new(WinFactory),
        FamilyTag::Mac => Box::new(MacFactory),
    }
}
