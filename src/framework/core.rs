//! # Product Capabilities
//!
//! This module defines the capability traits that every product hands out by the
//! creation strategies implements. Callers only ever hold these traits
//! (`Box<dyn Widget>`, `Box<dyn Button>`, `Box<dyn Shape>`), never a concrete type.
//!
//! ## Key Types
//!
//! - [`FamilyTag`]: The family a UI product belongs to (Windows or Mac).
//! - [`Capability`]: The kind of member a family factory can be asked for.
//! - [`Widget`]: The "nameable UI element" capability.
//! - [`Button`] / [`Checkbox`]: Widget capabilities with their own behavior.
//! - [`Shape`]: The "cloneable shape" capability used by the prototype registry.

use std::any::Any;
use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::framework::error::ParseError;
use crate::model::ShapeBase;

// =============================================================================
// 1. FAMILY TAGS & CAPABILITIES
// =============================================================================

/// Selector for a family of mutually compatible UI products.
///
/// The tag is fixed when a factory is constructed. Every product the factory
/// emits reports the same tag through [`Widget::family`].
///
/// Deserializes through [`FromStr`], so every spelling `parse` accepts
/// (`"win"`, `"MacOS"`, ...) is accepted in configuration too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum FamilyTag {
    Windows,
    Mac,
}

impl FamilyTag {
    /// Every built-in family, in declaration order.
    pub const ALL: [FamilyTag; 2] = [FamilyTag::Windows, FamilyTag::Mac];
}

impl Display for FamilyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FamilyTag::Windows => write!(f, "Win"),
            FamilyTag::Mac => write!(f, "Mac"),
        }
    }
}

impl FromStr for FamilyTag {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(FamilyTag::Windows),
            "mac" | "macos" => Ok(FamilyTag::Mac),
            _ => Err(ParseError::new("family", s)),
        }
    }
}

impl TryFrom<String> for FamilyTag {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The kinds of member a family factory may be asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Button,
    Checkbox,
    /// Not part of the built-in families; only open families may declare it.
    Slider,
}

impl Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Button => "button",
            Capability::Checkbox => "checkbox",
            Capability::Slider => "slider",
        };
        f.write_str(name)
    }
}

// =============================================================================
// 2. UI CAPABILITIES
// =============================================================================

/// A nameable UI element.
///
/// Concrete widgets carry nothing beyond their identity, except where the
/// capability itself needs state (a checkbox remembers whether it is checked).
pub trait Widget: Debug + Send + Sync {
    /// Short identity, e.g. `"Win Button"`.
    fn identify(&self) -> String;

    /// The family this widget was produced for.
    fn family(&self) -> FamilyTag;

    /// The capability this widget fulfils.
    fn capability(&self) -> Capability;

    /// The line a UI shell prints when the widget comes up.
    fn show_name(&self) -> String {
        format!("<> Initialize {}", self.identify())
    }
}

/// A clickable widget.
pub trait Button: Widget {
    /// Renders the reaction to a click.
    fn click(&self) -> String;
}

/// A two-state widget.
pub trait Checkbox: Widget {
    fn is_checked(&self) -> bool;

    /// Flips the state and returns the new value.
    fn toggle(&mut self) -> bool;
}

// =============================================================================
// 3. PROTOTYPE CAPABILITY
// =============================================================================

/// A shape that can produce an independent deep copy of itself.
///
/// # Architecture Note
/// `Clone` is not object safe, so the copy goes through [`Shape::clone_shape`],
/// which returns an owned box. `Box<dyn Shape>` implements `Clone` on top of it,
/// which means a `Vec<Box<dyn Shape>>` inside a composite shape deep-copies its
/// children with a plain `#[derive(Clone)]`.
pub trait Shape: Any + Debug + Send + Sync {
    /// Stable kind name (`"rectangle"`, `"circle"`, `"group"`).
    fn kind(&self) -> &'static str;

    /// Human readable description of the current state.
    fn show(&self) -> String;

    fn area(&self) -> f64;

    /// Shared state every shape carries (origin, color, label).
    fn base(&self) -> &ShapeBase;

    fn base_mut(&mut self) -> &mut ShapeBase;

    fn label(&self) -> &str {
        &self.base().label
    }

    /// Returns an owned copy equal in value and independent in storage.
    fn clone_shape(&self) -> Box<dyn Shape>;

    /// Value equality against another shape of any kind.
    fn eq_shape(&self, other: &dyn Shape) -> bool;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.clone_shape()
    }
}

impl PartialEq for dyn Shape {
    fn eq(&self, other: &Self) -> bool {
        self.eq_shape(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_tag_parsing() {
        assert_eq!("windows".parse::<FamilyTag>().unwrap(), FamilyTag::Windows);
        assert_eq!(" Win ".parse::<FamilyTag>().unwrap(), FamilyTag::Windows);
        assert_eq!("MacOS".parse::<FamilyTag>().unwrap(), FamilyTag::Mac);

        let err = "linux".parse::<FamilyTag>().unwrap_err();
        assert_eq!(err.to_string(), "unknown family: linux");
    }

    #[test]
    fn test_family_tag_display_matches_product_prefix() {
        assert_eq!(FamilyTag::Windows.to_string(), "Win");
        assert_eq!(FamilyTag::Mac.to_string(), "Mac");
    }

    #[test]
    fn test_capability_display() {
        assert_eq!(Capability::Checkbox.to_string(), "checkbox");
        assert_eq!(Capability::Slider.to_string(), "slider");
    }
}
