//! # Seating
//!
//! Bus seating-layout engine for the back-office: the model and edit logic
//! behind the "design your bus" screen.
//!
//! A bus has one or two decks. Each deck is a grid of cells, and every cell is
//! a seat, an aisle, or empty space. Operators paint cells with a tool, seats
//! get numbered as they are painted, and grids can be resized without losing
//! the work that still fits.
//!
//! ## Architecture
//!
//! ```text
//! Host (form screen)
//!     │
//!     ▼ LayoutCommand
//! LayoutEditor.apply()
//!     │
//!     ▼
//! apply_command() ──► resize_deck()     (reconcile)
//!                 ├─► paint_cell()      (paint)
//!                 ├─► rename_seat()     (rename)
//!                 └─► set_deck_count()  (layout)
//!     │
//!     ▼ new BusLayout
//! summary() / SubmissionPayload ──► host submission
//! ```
//!
//! ## Key Invariants
//!
//! 1. **Complete grids** - a deck holds exactly one cell per `(row, column)`
//!    inside its dimensions
//! 2. **Numbers follow type** - a cell has a seat number iff it is a seat
//! 3. **One or two decks** - numbered from 1
//! 4. **Total edits** - edit operations never fail; invalid targets are no-ops
//!
//! ## What This Is Not
//!
//! The engine does not render, persist, price, or book. It does not keep seat
//! numbers unique: numbers are derived from the live seat count, and manual
//! renames may repeat a label. [`Deck::duplicate_seat_numbers`] reports such
//! repeats without rejecting them.
//!
//! ## Example
//!
//! ```
//! use seating::{CellType, DeckDefaults, LayoutCommand, LayoutEditor};
//!
//! let mut editor = LayoutEditor::create(DeckDefaults::default());
//! editor.apply(&LayoutCommand::PaintCell { deck: 1, row: 1, column: 1, tool: CellType::Seat });
//! editor.apply(&LayoutCommand::PaintCell { deck: 1, row: 1, column: 2, tool: CellType::Seat });
//!
//! assert_eq!(editor.summary().total_seats, 2);
//! ```

mod cell;
mod command;
mod deck;
mod editor;
mod error;
mod layout;
mod paint;
mod payload;
mod reconcile;
mod rename;
mod summary;

pub mod config;

pub use cell::{CellType, Seat};
pub use command::{apply_command, LayoutCommand};
pub use config::SeatingConfig;
pub use deck::{Deck, DeckType, MAX_DIMENSION};
pub use editor::{LayoutChange, LayoutEditor, Revision};
pub use error::{LayoutError, Result};
pub use layout::{
    set_deck_count, BusLayout, DeckCount, DeckDefaults, DEFAULT_COLUMN_COUNT, DEFAULT_ROW_COUNT,
};
pub use paint::paint_cell;
pub use payload::{BusRecord, DeckPayload, DeckRecord, SubmissionPayload};
pub use reconcile::resize_deck;
pub use rename::rename_seat;
pub use summary::{DeckSummary, LayoutSummary};
