//! Cell painting with the operator's active tool.

use tracing::{debug, warn};

use crate::cell::CellType;
use crate::deck::Deck;

/// Paint the cell at `(row, column)` with `tool`.
///
/// - Painting `SEAT` over an existing seat keeps its number.
/// - Painting `SEAT` over anything else numbers the new seat one past the
///   deck's current seat count.
/// - Painting `AISLE` or `SPACE` clears the number.
///
/// A position outside the grid leaves the deck untouched.
///
/// Numbers come from the live seat count, not from a persisted sequence:
/// removing a seat and painting a new one can repeat a label that is still in
/// use elsewhere. That repeat is logged and kept.
pub fn paint_cell(mut deck: Deck, row: u32, column: u32, tool: CellType) -> Deck {
    let Some(current) = deck.cell_type_at(row, column) else {
        warn!(
            deck = deck.deck_number(),
            row,
            column,
            "paint outside the grid ignored"
        );
        return deck;
    };

    let number = match (tool, current) {
        (CellType::Seat, CellType::Seat) => return deck,
        (CellType::Seat, _) => {
            let number = next_seat_number(&deck);
            if deck
                .seats()
                .iter()
                .any(|cell| cell.seat_number.as_deref() == Some(number.as_str()))
            {
                warn!(
                    deck = deck.deck_number(),
                    row,
                    column,
                    seat_number = %number,
                    "derived seat number already in use"
                );
            }
            Some(number)
        }
        (CellType::Aisle | CellType::Space, _) => None,
    };

    debug!(
        deck = deck.deck_number(),
        row,
        column,
        tool = %tool,
        seat_number = ?number,
        "painting cell"
    );

    if let Some(cell) = deck.get_mut(row, column) {
        cell.retype(tool, number);
    }
    deck
}

fn next_seat_number(deck: &Deck) -> String {
    (deck.seat_count() + 1).to_string()
}
