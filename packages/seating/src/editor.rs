//! Editing session: owns one layout for the duration of a create/edit form.
//!
//! The editor is the only holder of the in-memory layout. Each command runs
//! the pure reducer in [`apply_command`](crate::command::apply_command) and the
//! revision advances only when the layout actually changed, so the host can
//! skip re-rendering on no-op clicks.

use tracing::{debug, info};
use uuid::Uuid;

use crate::command::{apply_in_place, LayoutCommand};
use crate::error::Result;
use crate::layout::{BusLayout, DeckDefaults};
use crate::payload::{BusRecord, SubmissionPayload};
use crate::summary::LayoutSummary;

/// Edit counter for a layout session.
///
/// Starts at [`Revision::INITIAL`] and advances by one per effective edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Revision(pub u64);

impl Revision {
    pub const INITIAL: Revision = Revision(0);

    fn next(self) -> Self {
        Revision(self.0 + 1)
    }
}

/// Outcome of applying one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutChange {
    /// The layout changed and now sits at this revision.
    Changed(Revision),
    /// The command was a no-op.
    Unchanged,
}

impl LayoutChange {
    pub fn is_changed(&self) -> bool {
        matches!(self, LayoutChange::Changed(_))
    }
}

pub struct LayoutEditor {
    id: Option<Uuid>,
    layout: BusLayout,
    defaults: DeckDefaults,
    revision: Revision,
}

impl LayoutEditor {
    /// Start a session for a new bus with one empty deck.
    pub fn create(defaults: DeckDefaults) -> Self {
        Self {
            id: None,
            layout: BusLayout::new(&defaults),
            defaults,
            revision: Revision::INITIAL,
        }
    }

    /// Start a session for a persisted bus. The record is trusted.
    pub fn load(record: BusRecord, defaults: DeckDefaults) -> Result<Self> {
        let id = record.id;
        let layout = record.into_layout()?;
        info!(bus_id = ?id, decks = layout.decks().len(), "loaded bus layout");
        Ok(Self {
            id,
            layout,
            defaults,
            revision: Revision::INITIAL,
        })
    }

    pub fn layout(&self) -> &BusLayout {
        &self.layout
    }

    pub fn defaults(&self) -> &DeckDefaults {
        &self.defaults
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn apply(&mut self, command: &LayoutCommand) -> LayoutChange {
        if !apply_in_place(&mut self.layout, command, &self.defaults) {
            return LayoutChange::Unchanged;
        }

        self.revision = self.revision.next();
        debug!(revision = self.revision.0, "layout changed");
        LayoutChange::Changed(self.revision)
    }

    /// Apply `commands` in order, returning how many changed the layout.
    pub fn apply_all<'a>(
        &mut self,
        commands: impl IntoIterator<Item = &'a LayoutCommand>,
    ) -> usize {
        let mut changed = 0;
        for command in commands {
            if self.apply(command).is_changed() {
                changed += 1;
            }
        }
        changed
    }

    pub fn summary(&self) -> LayoutSummary {
        self.layout.summary()
    }

    pub fn payload(&self) -> SubmissionPayload {
        SubmissionPayload::from(&self.layout)
    }

    pub fn record(&self) -> BusRecord {
        BusRecord::from_layout(self.id, &self.layout)
    }

    /// End the session, handing the layout to the submission step.
    pub fn into_layout(self) -> BusLayout {
        self.layout
    }
}
