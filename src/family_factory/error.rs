//! Error types for family factories.

use thiserror::Error;

use crate::framework::{Capability, FamilyTag};

/// Errors that can occur while producing family members.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FactoryError {
    /// The family does not declare the requested capability.
    #[error("{family} family does not produce a {capability}")]
    UnsupportedCapability {
        family: FamilyTag,
        capability: Capability,
    },

    /// A registered constructor built a product for another family.
    #[error("{expected} factory produced a {actual} product")]
    FamilyMismatch {
        expected: FamilyTag,
        actual: FamilyTag,
    },
}

impl FactoryError {
    pub fn unsupported(family: FamilyTag, capability: Capability) -> Self {
        FactoryError::UnsupportedCapability { family, capability }
    }
}
