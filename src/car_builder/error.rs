//! Error types for builders and the director.

use thiserror::Error;

use crate::model::BuildStep;

/// Errors raised by [`CarDirector`](super::CarDirector).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectorError {
    /// The director was driven before a builder was attached.
    #[error("no builder attached to the director")]
    NoBuilderAttached,
}

/// Errors raised by strict retrieval from a builder.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    /// Some parts were never built.
    #[error("car is incomplete, missing: {}", join_steps(.missing))]
    Incomplete { missing: Vec<BuildStep> },
}

fn join_steps(steps: &[BuildStep]) -> String {
    steps
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_lists_missing_steps() {
        let err = BuildError::Incomplete {
            missing: vec![BuildStep::Engine, BuildStep::Computer],
        };
        assert_eq!(err.to_string(), "car is incomplete, missing: engine, computer");
    }
}
