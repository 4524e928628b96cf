//! Concrete UI products for the Windows and Mac families.
//!
//! These types are public so that factories in this crate (and callers building
//! open families) can construct them, but the factories only ever hand them out
//! as `Box<dyn Widget>`, `Box<dyn Button>` or `Box<dyn Checkbox>`.

use crate::framework::{Button, Capability, Checkbox, FamilyTag, Widget};

/// Windows-style button.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WinButton;

/// Mac-style button.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MacButton;

/// Windows-style checkbox, unchecked on creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WinCheckbox {
    checked: bool,
}

/// Mac-style checkbox, unchecked on creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MacCheckbox {
    checked: bool,
}

/// A slider usable by any family. Built-in families do not declare it; open
/// families register it explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    family: FamilyTag,
    value: u8,
}

impl Slider {
    pub fn new(family: FamilyTag) -> Self {
        Self { family, value: 0 }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Moves the knob, clamped to `0..=100`.
    pub fn set_value(&mut self, value: u8) {
        self.value = value.min(100);
    }
}

impl Widget for WinButton {
    fn identify(&self) -> String {
        "Win Button".to_string()
    }

    fn family(&self) -> FamilyTag {
        FamilyTag::Windows
    }

    fn capability(&self) -> Capability {
        Capability::Button
    }
}

impl Button for WinButton {
    fn click(&self) -> String {
        "Win Button clicked".to_string()
    }
}

impl Widget for MacButton {
    fn identify(&self) -> String {
        "Mac Button".to_string()
    }

    fn family(&self) -> FamilyTag {
        FamilyTag::Mac
    }

    fn capability(&self) -> Capability {
        Capability::Button
    }
}

impl Button for MacButton {
    fn click(&self) -> String {
        "Mac Button clicked".to_string()
    }
}

impl Widget for WinCheckbox {
    fn identify(&self) -> String {
        "Win Checkbox".to_string()
    }

    fn family(&self) -> FamilyTag {
        FamilyTag::Windows
    }

    fn capability(&self) -> Capability {
        Capability::Checkbox
    }
}

impl Checkbox for WinCheckbox {
    fn is_checked(&self) -> bool {
        self.checked
    }

    fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }
}

impl Widget for MacCheckbox {
    fn identify(&self) -> String {
        "Mac Checkbox".to_string()
    }

    fn family(&self) -> FamilyTag {
        FamilyTag::Mac
    }

    fn capability(&self) -> Capability {
        Capability::Checkbox
    }
}

impl Checkbox for MacCheckbox {
    fn is_checked(&self) -> bool {
        self.checked
    }

    fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }
}

impl Widget for Slider {
    fn identify(&self) -> String {
        format!("{} Slider", self.family)
    }

    fn family(&self) -> FamilyTag {
        self.family
    }

    fn capability(&self) -> Capability {
        Capability::Slider
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_name_uses_identity() {
        assert_eq!(WinButton.show_name(), "<> Initialize Win Button");
        assert_eq!(MacCheckbox::default().show_name(), "<> Initialize Mac Checkbox");
    }

    #[test]
    fn test_checkbox_toggle() {
        let mut checkbox = WinCheckbox::default();
        assert!(!checkbox.is_checked());
        assert!(checkbox.toggle());
        assert!(!checkbox.toggle());
    }

    #[test]
    fn test_slider_clamps() {
        let mut slider = Slider::new(FamilyTag::Mac);
        slider.set_value(250);
        assert_eq!(slider.value(), 100);
        assert_eq!(slider.identify(), "Mac Slider");
    }
}
