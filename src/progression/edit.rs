//! Edit transactions.

use super::{Progression, Snapshot};
use crate::notify::Property;

/// Begin/cancel/end protocol used by editing front ends.
///
/// States are idle and editing. Transactions do not nest: a second
/// `begin_edit` replaces the snapshot.
pub trait Editable {
    /// Enter editing and remember the current values.
    fn begin_edit(&mut self);

    /// Restore the values remembered by `begin_edit`. Stays in editing.
    /// Does nothing when idle.
    fn cancel_edit(&mut self);

    /// Leave editing and report every observable property as changed.
    /// Safe to call when idle.
    fn end_edit(&mut self);
}

impl Editable for Progression {
    fn begin_edit(&mut self) {
        tracing::trace!(replacing = self.snapshot.is_some(), "begin edit");
        self.snapshot = Some(Snapshot {
            from_value: self.from_value,
            to_value: self.to_value,
            increment: self.increment,
        });
    }

    fn cancel_edit(&mut self) {
        let Some(snapshot) = self.snapshot else {
            return;
        };
        tracing::trace!("cancel edit");
        self.from_value = snapshot.from_value;
        self.to_value = snapshot.to_value;
        self.increment = snapshot.increment;
        self.increasing = snapshot.increment.is_positive();
        self.empty = snapshot.increment.is_zero();
    }

    fn end_edit(&mut self) {
        tracing::trace!(editing = self.snapshot.is_some(), "end edit");
        self.snapshot = None;
        for property in Property::ALL {
            self.listeners.notify(property);
        }
    }
}

impl Progression {
    /// Check if an edit transaction is open.
    pub fn is_editing(&self) -> bool {
        self.snapshot.is_some()
    }
}
