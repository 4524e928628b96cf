//! # Single-Product Factory
//!
//! Creates one kind of product (a [`Button`]) without exposing which concrete
//! button the caller gets.
//!
//! ## Overview
//!
//! A [`Dialog`] is the creator. Each variant ([`WinDialog`], [`MacDialog`])
//! overrides one factory method, [`Dialog::make_button`]; everything else
//! (issuing, disposing, counting) is provided by the trait on top of the
//! dialog's [`IssueLedger`]. The variant is picked once, at construction, with
//! [`dialog_for()`].
//!
//! ## Create / Dispose
//!
//! Every product comes wrapped in an [`IssuedButton`] carrying a copyable
//! [`ReleaseTicket`]. The caller owns the button outright; the ticket is its
//! receipt with the dialog. Presenting the ticket to [`Dialog::dispose`]:
//!
//! - succeeds once,
//! - fails with [`DialogError::DoubleRelease`] the second time,
//! - fails with [`DialogError::ForeignProduct`] on a ticket from another dialog
//!   or one this dialog never issued.
//!
//! ```rust
//! use creation_recipe::product_factory::{dialog_for, Dialog, DialogError};
//! use creation_recipe::framework::{FamilyTag, Widget};
//!
//! let dialog = dialog_for(FamilyTag::Windows);
//! let issued = dialog.create_button();
//! assert_eq!(issued.button().identify(), "Win Button");
//!
//! let ticket = issued.ticket();
//! dialog.release(issued).unwrap();
//! assert_eq!(dialog.dispose(ticket), Err(DialogError::DoubleRelease(ticket)));
//! ```

pub mod dialog;
pub mod error;

pub use dialog::*;
pub use error::*;

use std::fmt::{self, Debug, Display};

use tracing::debug;

use crate::framework::{Button, FamilyTag};

/// Process-unique identifier of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DialogId(pub u64);

impl Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dialog_{}", self.0)
    }
}

/// Receipt for one product issued by a dialog.
///
/// Only a dialog can mint tickets; callers copy and present them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReleaseTicket {
    dialog: DialogId,
    serial: u64,
}

impl ReleaseTicket {
    /// The dialog that issued this ticket.
    pub fn dialog(&self) -> DialogId {
        self.dialog
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }
}

impl Display for ReleaseTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.dialog, self.serial)
    }
}

/// A button together with the ticket needed to dispose of it.
#[derive(Debug)]
pub struct IssuedButton {
    ticket: ReleaseTicket,
    button: Box<dyn Button>,
}

impl IssuedButton {
    pub fn ticket(&self) -> ReleaseTicket {
        self.ticket
    }

    pub fn button(&self) -> &dyn Button {
        self.button.as_ref()
    }
}

/// A creator of buttons.
pub trait Dialog: Debug + Send + Sync {
    /// The family of the buttons this dialog creates.
    fn family(&self) -> FamilyTag;

    fn ledger(&self) -> &IssueLedger;

    /// The factory method: builds the concrete button for this variant.
    fn make_button(&self) -> Box<dyn Button>;

    fn id(&self) -> DialogId {
        self.ledger().dialog()
    }

    /// Creates a fresh button and records it as live.
    fn create_button(&self) -> IssuedButton {
        let button = self.make_button();
        let ticket = self.ledger().issue();
        debug!(family = %self.family(), %ticket, "Created button");
        IssuedButton { ticket, button }
    }

    /// Releases the product identified by `ticket`.
    fn dispose(&self, ticket: ReleaseTicket) -> Result<(), DialogError> {
        self.ledger().release(ticket)
    }

    /// Drops the button and releases its ticket.
    fn release(&self, issued: IssuedButton) -> Result<(), DialogError> {
        let IssuedButton { ticket, button } = issued;
        drop(button);
        self.dispose(ticket)
    }

    /// Number of products issued and not yet released.
    fn live_count(&self) -> usize {
        self.ledger().live_count()
    }
}

/// Creates the dialog variant for `family`.
pub fn dialog_for(family: FamilyTag) -> Box<dyn Dialog> {
    match family {
        FamilyTag::Windows => Box::new(WinDialog::new()),
        FamilyTag::Mac => Box::new(MacDialog::new()),
    }
}
