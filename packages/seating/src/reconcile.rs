//! Grid reconciliation: resizing a deck while keeping in-bounds cells.

use tracing::debug;

use crate::deck::{clamp_dimension, Deck};

/// Resize `deck` to `row_count` × `column_count`.
///
/// Every position inside the new bounds keeps the cell it had before (type
/// and seat number untouched); new positions start as `SPACE`. Cells beyond
/// the new bounds are discarded, so shrinking and growing again does not bring
/// them back. Dimensions are clamped to `1..=MAX_DIMENSION`.
pub fn resize_deck(deck: Deck, row_count: u32, column_count: u32) -> Deck {
    let row_count = clamp_dimension(row_count);
    let column_count = clamp_dimension(column_count);

    if deck.row_count() == row_count && deck.column_count() == column_count {
        return deck;
    }

    debug!(
        deck = deck.deck_number(),
        from_rows = deck.row_count(),
        from_columns = deck.column_count(),
        to_rows = row_count,
        to_columns = column_count,
        "resizing deck"
    );

    let deck_number = deck.deck_number();
    let deck_type = deck.deck_type();
    Deck::from_seats(
        deck_number,
        deck_type,
        row_count,
        column_count,
        deck.into_seats(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{CellType, Seat};
    use crate::deck::{DeckType, MAX_DIMENSION};
    use crate::paint::paint_cell;

    fn ten_by_four_with_back_row_seats() -> Deck {
        let mut deck = Deck::new(1, DeckType::Standard, 10, 4);
        for column in 1..=4 {
            deck = paint_cell(deck, 10, column, CellType::Seat);
        }
        deck
    }

    #[test]
    fn growing_keeps_existing_cells() {
        let deck = Deck::from_seats(1, DeckType::Standard, 3, 3, vec![Seat::seat(2, 3, "5")]);

        let grown = resize_deck(deck, 5, 6);

        assert_eq!(grown.seats().len(), 30);
        assert!(grown.is_complete());
        assert_eq!(grown.get(2, 3), Some(&Seat::seat(2, 3, "5")));
        assert_eq!(grown.get(5, 6), Some(&Seat::space(5, 6)));
    }

    #[test]
    fn shrinking_is_lossy() {
        let deck = ten_by_four_with_back_row_seats();

        let shrunk = resize_deck(deck, 5, 4);
        assert_eq!(shrunk.seats().len(), 20);
        assert!(shrunk.seats().iter().all(|s| s.row <= 5));

        let regrown = resize_deck(shrunk, 10, 4);
        assert_eq!(regrown.seats().len(), 40);
        for column in 1..=4 {
            assert_eq!(regrown.get(10, column), Some(&Seat::space(10, column)));
        }
    }

    #[test]
    fn narrowing_drops_columns_but_keeps_rows() {
        let deck = ten_by_four_with_back_row_seats();

        let narrowed = resize_deck(deck, 10, 2);

        assert!(narrowed.is_complete());
        assert_eq!(narrowed.get(10, 1), Some(&Seat::seat(10, 1, "1")));
        assert_eq!(narrowed.get(10, 2), Some(&Seat::seat(10, 2, "2")));
        assert!(narrowed.get(10, 3).is_none());
    }

    #[test]
    fn non_positive_dimensions_become_one() {
        let deck = ten_by_four_with_back_row_seats();
        let collapsed = resize_deck(deck, 0, 0);
        assert_eq!((collapsed.row_count(), collapsed.column_count()), (1, 1));
        assert_eq!(collapsed.seats(), &[Seat::space(1, 1)]);
    }

    #[test]
    fn huge_dimensions_are_capped() {
        let deck = ten_by_four_with_back_row_seats();

        let grown = resize_deck(deck, 100_000, u32::MAX);

        assert_eq!((grown.row_count(), grown.column_count()), (MAX_DIMENSION, MAX_DIMENSION));
        assert_eq!(grown.seats().len(), (MAX_DIMENSION * MAX_DIMENSION) as usize);
        assert_eq!(grown.get(10, 4), Some(&Seat::seat(10, 4, "4")));
    }

    #[test]
    fn same_dimensions_return_the_deck_unchanged() {
        let deck = ten_by_four_with_back_row_seats();
        let resized = resize_deck(deck.clone(), 10, 4);
        assert_eq!(resized, deck);
    }
}
