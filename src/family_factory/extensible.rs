//! An open family whose members are registered at runtime.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};

use super::error::FactoryError;
use super::FamilyFactory;
use crate::framework::{Capability, FamilyTag, Widget};
use crate::model::{MacButton, MacCheckbox, WinButton, WinCheckbox};

type MemberFn = Box<dyn Fn(FamilyTag) -> Box<dyn Widget> + Send + Sync>;

/// A family factory with a caller-declared set of capabilities.
///
/// Each capability maps to one constructor, which receives the factory's tag.
/// The factory checks every product it builds against that tag, so a faulty
/// constructor surfaces as [`FactoryError::FamilyMismatch`] instead of an
/// incompatible widget reaching the caller.
///
/// # Example
///
/// ```rust
/// use creation_recipe::family_factory::{ExtensibleFactory, FamilyFactory};
/// use creation_recipe::framework::{Capability, FamilyTag, Widget};
/// use creation_recipe::model::Slider;
///
/// let factory = ExtensibleFactory::new(FamilyTag::Mac)
///     .with_builtin_members()
///     .with_member(Capability::Slider, |family| Box::new(Slider::new(family)));
///
/// let slider = factory.create_member(Capability::Slider).unwrap();
/// assert_eq!(slider.identify(), "Mac Slider");
/// ```
pub struct ExtensibleFactory {
    family: FamilyTag,
    declared: Vec<Capability>,
    members: HashMap<Capability, MemberFn>,
}

impl ExtensibleFactory {
    /// Creates a factory that declares no capabilities yet.
    pub fn new(family: FamilyTag) -> Self {
        Self {
            family,
            declared: Vec::new(),
            members: HashMap::new(),
        }
    }

    /// Declares `capability` and registers its constructor, replacing any
    /// earlier one.
    pub fn with_member<F>(mut self, capability: Capability, make: F) -> Self
    where
        F: Fn(FamilyTag) -> Box<dyn Widget> + Send + Sync + 'static,
    {
        if !self.declared.contains(&capability) {
            self.declared.push(capability);
        }
        self.members.insert(capability, Box::new(make));
        self
    }

    /// Declares the button and checkbox of the built-in families.
    pub fn with_builtin_members(self) -> Self {
        self.with_member(Capability::Button, |family| match family {
            FamilyTag::Windows => Box::new(WinButton),
            FamilyTag::Mac => Box::new(MacButton),
        })
        .with_member(Capability::Checkbox, |family| match family {
            FamilyTag::Windows => Box::new(WinCheckbox::default()),
            FamilyTag::Mac => Box::new(MacCheckbox::default()),
        })
    }
}

impl FamilyFactory for ExtensibleFactory {
    fn family(&self) -> FamilyTag {
        self.family
    }

    fn capabilities(&self) -> &[Capability] {
        &self.declared
    }

    fn create_member(&self, capability: Capability) -> Result<Box<dyn Widget>, FactoryError> {
        let Some(make) = self.members.get(&capability) else {
            warn!(family = %self.family, %capability, "Unsupported capability");
            return Err(FactoryError::unsupported(self.family, capability));
        };

        let member = make(self.family);
        if member.family() != self.family {
            warn!(expected = %self.family, actual = %member.family(), "Family mismatch");
            return Err(FactoryError::FamilyMismatch {
                expected: self.family,
                actual: member.family(),
            });
        }

        debug!(family = %self.family, %capability, "Created member");
        Ok(member)
    }
}

impl fmt::Debug for ExtensibleFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensibleFactory")
            .field("family", &self.family)
            .field("declared", &self.declared)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Slider;

    #[test]
    fn test_empty_factory_supports_nothing() {
        let factory = ExtensibleFactory::new(FamilyTag::Windows);
        assert!(factory.capabilities().is_empty());
        let err = factory.create_member(Capability::Button).unwrap_err();
        assert_eq!(err, FactoryError::unsupported(FamilyTag::Windows, Capability::Button));
    }

    #[test]
    fn test_registered_member_is_built_for_factory_family() {
        let factory = ExtensibleFactory::new(FamilyTag::Windows)
            .with_member(Capability::Slider, |family| Box::new(Slider::new(family)));

        let slider = factory.create_member(Capability::Slider).unwrap();
        assert_eq!(slider.family(), FamilyTag::Windows);
        assert_eq!(factory.capabilities(), &[Capability::Slider]);
    }

    #[test]
    fn test_reregistering_keeps_single_declaration() {
        let factory = ExtensibleFactory::new(FamilyTag::Mac)
            .with_builtin_members()
            .with_member(Capability::Button, |_| Box::new(MacButton));
        assert_eq!(factory.capabilities(), &[Capability::Button, Capability::Checkbox]);
    }

    #[test]
    fn test_foreign_member_is_rejected() {
        let factory = ExtensibleFactory::new(FamilyTag::Mac)
            .with_member(Capability::Button, |_| Box::new(WinButton));

        let err = factory.create_member(Capability::Button).unwrap_err();
        assert_eq!(
            err,
            FactoryError::FamilyMismatch {
                expected: FamilyTag::Mac,
                actual: FamilyTag::Windows,
            }
        );
    }
}
