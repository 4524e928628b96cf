//! The built-in Windows and Mac families.
//!
//! Both factories declare exactly [`BUILTIN_CAPABILITIES`]; asking either of
//! them for anything else fails with
//! [`FactoryError::UnsupportedCapability`].

use tracing::{debug, warn};

use super::error::FactoryError;
use super::{FamilyFactory, GuiFactory};
use crate::framework::{Button, Capability, Checkbox, FamilyTag, Widget};
use crate::model::{MacButton, MacCheckbox, WinButton, WinCheckbox};

/// Capabilities every built-in family produces.
pub const BUILTIN_CAPABILITIES: [Capability; 2] = [Capability::Button, Capability::Checkbox];

/// Produces Windows-style widgets.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinFactory;

/// Produces Mac-style widgets.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacFactory;

impl FamilyFactory for WinFactory {
    fn family(&self) -> FamilyTag {
        FamilyTag::Windows
    }

    fn capabilities(&self) -> &[Capability] {
        &BUILTIN_CAPABILITIES
    }

    fn create_member(&self, capability: Capability) -> Result<Box<dyn Widget>, FactoryError> {
        let member: Box<dyn Widget> = match capability {
            Capability::Button => Box::new(WinButton),
            Capability::Checkbox => Box::new(WinCheckbox::default()),
            other => {
                warn!(family = %self.family(), capability = %other, "Unsupported capability");
                return Err(FactoryError::unsupported(self.family(), other));
            }
        };
        debug!(family = %self.family(), %capability, "Created member");
        Ok(member)
    }
}

impl GuiFactory for WinFactory {
    fn create_button(&self) -> Box<dyn Button> {
        debug!(family = %self.family(), "Created button");
        Box::new(WinButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        debug!(family = %self.family(), "Created checkbox");
        Box::new(WinCheckbox::default())
    }
}

impl FamilyFactory for MacFactory {
    fn family(&self) -> FamilyTag {
        FamilyTag::Mac
    }

    fn capabilities(&self) -> &[Capability] {
        &BUILTIN_CAPABILITIES
    }

    fn create_member(&self, capability: Capability) -> Result<Box<dyn Widget>, FactoryError> {
        let member: Box<dyn Widget> = match capability {
            Capability::Button => Box::new(MacButton),
            Capability::Checkbox => Box::new(MacCheckbox::default()),
            other => {
                warn!(family = %self.family(), capability = %other, "Unsupported capability");
                return Err(FactoryError::unsupported(self.family(), other));
            }
        };
        debug!(family = %self.family(), %capability, "Created member");
        Ok(member)
    }
}

impl GuiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        debug!(family = %self.family(), "Created button");
        Box::new(MacButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        debug!(family = %self.family(), "Created checkbox");
        Box::new(MacCheckbox::default())
    }
}
