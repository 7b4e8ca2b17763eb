//! Manual seat-number overrides.

use tracing::{debug, warn};

use crate::deck::Deck;

/// Replace the number of the seat at `(row, column)` with `new_number`,
/// trimmed.
///
/// Only seats can be renamed; any other cell, or a position outside the grid,
/// leaves the deck untouched. Emptiness and uniqueness are the host's concern:
/// two seats may end up sharing a label, which is logged but kept.
pub fn rename_seat(mut deck: Deck, row: u32, column: u32, new_number: &str) -> Deck {
    let new_number = new_number.trim();

    let is_seat = deck.get(row, column).is_some_and(|cell| cell.is_seat());
    if !is_seat {
        debug!(
            deck = deck.deck_number(),
            row,
            column,
            "rename ignored: not a seat"
        );
        return deck;
    }

    let clashes = deck.seats().iter().any(|cell| {
        cell.position() != (row, column) && cell.seat_number.as_deref() == Some(new_number)
    });
    if clashes {
        warn!(
            deck = deck.deck_number(),
            row,
            column,
            seat_number = new_number,
            "seat number shared with another seat"
        );
    }

    if let Some(cell) = deck.get_mut(row, column) {
        cell.seat_number = Some(new_number.to_string());
    }
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{CellType, Seat};
    use crate::deck::DeckType;
    use crate::paint::paint_cell;

    fn one_seat() -> Deck {
        paint_cell(Deck::new(1, DeckType::Standard, 2, 2), 1, 1, CellType::Seat)
    }

    #[test]
    fn renames_a_seat_with_trimmed_label() {
        let deck = rename_seat(one_seat(), 1, 1, "  12A ");
        assert_eq!(deck.get(1, 1), Some(&Seat::seat(1, 1, "12A")));
    }

    #[test]
    fn renaming_a_non_seat_is_ignored() {
        let deck = paint_cell(one_seat(), 1, 2, CellType::Aisle);
        let renamed = rename_seat(deck.clone(), 1, 2, "9");
        assert_eq!(renamed, deck);

        let renamed = rename_seat(deck.clone(), 2, 2, "9");
        assert_eq!(renamed, deck);
    }

    #[test]
    fn renaming_outside_the_grid_is_ignored() {
        let deck = one_seat();
        assert_eq!(rename_seat(deck.clone(), 4, 4, "9"), deck);
    }

    #[test]
    fn duplicate_labels_are_allowed() {
        let deck = paint_cell(one_seat(), 2, 2, CellType::Seat);
        let deck = rename_seat(deck, 2, 2, "1");

        assert_eq!(deck.get(1, 1).and_then(|s| s.seat_number.as_deref()), Some("1"));
        assert_eq!(deck.get(2, 2).and_then(|s| s.seat_number.as_deref()), Some("1"));
    }
}
