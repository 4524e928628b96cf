//! Dialog variants and the ledger that tracks what they issued.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use super::error::DialogError;
use super::{Dialog, DialogId, ReleaseTicket};
use crate::framework::{Button, FamilyTag};
use crate::model::{MacButton, WinButton};

static NEXT_DIALOG_ID: AtomicU64 = AtomicU64::new(1);

/// Bookkeeping for the products a dialog has handed out and not yet released.
///
/// Serials come from an atomic counter and the live set sits behind a mutex,
/// so one ledger can be shared by any number of threads.
#[derive(Debug)]
pub struct IssueLedger {
    dialog: DialogId,
    next_serial: AtomicU64,
    live: Mutex<HashSet<u64>>,
}

impl IssueLedger {
    /// Creates a ledger with a process-unique dialog id.
    pub fn new() -> Self {
        let id = NEXT_DIALOG_ID.fetch_add(1, Ordering::SeqCst);
        Self {
            dialog: DialogId(id),
            next_serial: AtomicU64::new(1),
            live: Mutex::new(HashSet::new()),
        }
    }

    pub fn dialog(&self) -> DialogId {
        self.dialog
    }

    /// Records a new live product and returns its ticket.
    pub(crate) fn issue(&self) -> ReleaseTicket {
        let serial = self.next_serial.fetch_add(1, Ordering::SeqCst);
        let ticket = ReleaseTicket {
            dialog: self.dialog,
            serial,
        };
        let mut live = self.live();
        live.insert(serial);
        debug!(%ticket, live = live.len(), "Issued");
        ticket
    }

    /// Marks `ticket` as released.
    ///
    /// # Errors
    /// - [`DialogError::ForeignProduct`] if another dialog issued the ticket,
    ///   or this one never did.
    /// - [`DialogError::DoubleRelease`] if it was already released.
    pub fn release(&self, ticket: ReleaseTicket) -> Result<(), DialogError> {
        let issued_here = ticket.dialog == self.dialog
            && ticket.serial != 0
            && ticket.serial < self.next_serial.load(Ordering::SeqCst);
        if !issued_here {
            warn!(%ticket, dialog = %self.dialog, "Foreign product");
            return Err(DialogError::ForeignProduct {
                ticket,
                dialog: self.dialog,
            });
        }

        let mut live = self.live();
        if !live.remove(&ticket.serial) {
            warn!(%ticket, "Double release");
            return Err(DialogError::DoubleRelease(ticket));
        }
        info!(%ticket, live = live.len(), "Released");
        Ok(())
    }

    pub fn live_count(&self) -> usize {
        self.live().len()
    }

    fn live(&self) -> MutexGuard<'_, HashSet<u64>> {
        self.live.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for IssueLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// Creator variant for Windows buttons.
#[derive(Debug, Default)]
pub struct WinDialog {
    ledger: IssueLedger,
}

impl WinDialog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Dialog for WinDialog {
    fn family(&self) -> FamilyTag {
        FamilyTag::Windows
    }

    fn ledger(&self) -> &IssueLedger {
        &self.ledger
    }

    fn make_button(&self) -> Box<dyn Button> {
        Box::new(WinButton)
    }
}

/// Creator variant for Mac buttons.
#[derive(Debug, Default)]
pub struct MacDialog {
    ledger: IssueLedger,
}

impl MacDialog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Dialog for MacDialog {
    fn family(&self) -> FamilyTag {
        FamilyTag::Mac
    }

    fn ledger(&self) -> &IssueLedger {
        &self.ledger
    }

    fn make_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }
}
