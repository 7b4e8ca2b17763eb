//! Edit commands accepted from the host, and the reducer that applies them.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cell::CellType;
use crate::deck::Deck;
use crate::layout::{BusLayout, DeckCount, DeckDefaults};
use crate::paint::paint_cell;
use crate::reconcile::resize_deck;
use crate::rename::rename_seat;

/// One discrete operator edit.
///
/// Serialized as a tagged object, e.g.
/// `{"command": "paintCell", "deck": 1, "row": 2, "column": 3, "tool": "SEAT"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum LayoutCommand {
    /// Change a deck's dimensions, keeping in-bounds cells.
    ResizeDeck { deck: u8, rows: u32, columns: u32 },

    /// Paint one cell with the active tool.
    PaintCell {
        deck: u8,
        row: u32,
        column: u32,
        tool: CellType,
    },

    /// Relabel a seat.
    RenameSeat {
        deck: u8,
        row: u32,
        column: u32,
        number: String,
    },

    /// Switch between one and two decks.
    SetDeckCount { decks: DeckCount },
}

impl LayoutCommand {
    /// The deck this command edits, if it targets a single deck.
    pub fn deck(&self) -> Option<u8> {
        match self {
            LayoutCommand::ResizeDeck { deck, .. }
            | LayoutCommand::PaintCell { deck, .. }
            | LayoutCommand::RenameSeat { deck, .. } => Some(*deck),
            LayoutCommand::SetDeckCount { .. } => None,
        }
    }
}

/// Apply `command` to `layout`, returning the new layout.
///
/// Commands addressing a deck the layout does not have leave it unchanged.
pub fn apply_command(
    mut layout: BusLayout,
    command: &LayoutCommand,
    defaults: &DeckDefaults,
) -> BusLayout {
    apply_in_place(&mut layout, command, defaults);
    layout
}

/// Apply `command` to `layout` in place, returning whether anything changed.
///
/// Single-deck edits touch one cell or the deck shape, so only that is
/// compared.
pub(crate) fn apply_in_place(
    layout: &mut BusLayout,
    command: &LayoutCommand,
    defaults: &DeckDefaults,
) -> bool {
    debug!(?command, "applying layout command");

    let changed = match command {
        LayoutCommand::ResizeDeck {
            deck,
            rows,
            columns,
        } => layout.edit_deck(*deck, |d| {
            let before = (d.row_count(), d.column_count());
            let resized = resize_deck(d, *rows, *columns);
            let changed = (resized.row_count(), resized.column_count()) != before;
            (resized, changed)
        }),
        LayoutCommand::PaintCell {
            deck,
            row,
            column,
            tool,
        } => layout.edit_deck(*deck, |d| {
            edit_cell(d, *row, *column, |d| paint_cell(d, *row, *column, *tool))
        }),
        LayoutCommand::RenameSeat {
            deck,
            row,
            column,
            number,
        } => layout.edit_deck(*deck, |d| {
            edit_cell(d, *row, *column, |d| rename_seat(d, *row, *column, number))
        }),
        LayoutCommand::SetDeckCount { decks } => {
            return layout.change_deck_count(*decks, defaults);
        }
    };

    changed.unwrap_or_else(|| {
        warn!(deck = ?command.deck(), "command targets a missing deck, ignored");
        false
    })
}

/// Run a single-cell edit, reporting whether the cell at `row`/`column` changed.
fn edit_cell(
    deck: Deck,
    row: u32,
    column: u32,
    edit: impl FnOnce(Deck) -> Deck,
) -> (Deck, bool) {
    let before = deck.get(row, column).cloned();
    let edited = edit(deck);
    let changed = edited.get(row, column) != before.as_ref();
    (edited, changed)
}
