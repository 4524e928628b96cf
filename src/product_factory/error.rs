//! Error types for single-product factories.

use thiserror::Error;

use super::{DialogId, ReleaseTicket};

/// Misuse of [`Dialog::dispose`](super::Dialog::dispose).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DialogError {
    /// The ticket was already released (or was never live).
    #[error("product {0} was already released")]
    DoubleRelease(ReleaseTicket),

    /// The ticket was issued by a different dialog.
    #[error("product {ticket} was not produced by {dialog}")]
    ForeignProduct {
        ticket: ReleaseTicket,
        dialog: DialogId,
    },
}
