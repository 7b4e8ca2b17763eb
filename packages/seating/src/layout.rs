//! Bus layouts: one or two decks, and the transition between those counts.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::deck::{Deck, DeckType};
use crate::error::{LayoutError, Result};

pub const DEFAULT_ROW_COUNT: u32 = 10;
pub const DEFAULT_COLUMN_COUNT: u32 = 4;

/// Shape and class given to decks the engine creates itself: the single deck
/// of a new layout and the deck added when going from one deck to two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckDefaults {
    pub row_count: u32,
    pub column_count: u32,
    pub deck_type: DeckType,
}

impl Default for DeckDefaults {
    fn default() -> Self {
        Self {
            row_count: DEFAULT_ROW_COUNT,
            column_count: DEFAULT_COLUMN_COUNT,
            deck_type: DeckType::default(),
        }
    }
}

impl DeckDefaults {
    fn empty_deck(&self, deck_number: u8) -> Deck {
        Deck::new(deck_number, self.deck_type, self.row_count, self.column_count)
    }
}

/// Number of decks on a bus. Serialized as the plain number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DeckCount {
    One,
    Two,
}

impl DeckCount {
    pub fn get(self) -> u8 {
        match self {
            DeckCount::One => 1,
            DeckCount::Two => 2,
        }
    }
}

impl From<DeckCount> for u8 {
    fn from(count: DeckCount) -> Self {
        count.get()
    }
}

impl TryFrom<u8> for DeckCount {
    type Error = LayoutError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(DeckCount::One),
            2 => Ok(DeckCount::Two),
            other => Err(LayoutError::UnsupportedDeckCount(other)),
        }
    }
}

/// The seating configuration of one bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusLayout {
    decks: Vec<Deck>,
}

impl BusLayout {
    /// A layout with a single empty deck of the default shape.
    pub fn new(defaults: &DeckDefaults) -> Self {
        Self {
            decks: vec![defaults.empty_deck(1)],
        }
    }

    /// Build a layout from already populated decks, ordered by deck number.
    ///
    /// Deck contents are trusted. Only the first two decks are kept, and they
    /// must be numbered 1, or 1 and 2.
    pub fn from_decks(mut decks: Vec<Deck>) -> Result<Self> {
        if decks.is_empty() {
            return Err(LayoutError::NoDecks);
        }
        decks.sort_by_key(Deck::deck_number);
        if decks.len() > 2 {
            warn!(decks = decks.len(), "layout has more than two decks, keeping two");
            decks.truncate(2);
        }

        let numbers: Vec<u8> = decks.iter().map(Deck::deck_number).collect();
        if !matches!(numbers.as_slice(), [1] | [1, 2]) {
            return Err(LayoutError::InvalidDeckNumbers(numbers));
        }
        Ok(Self { decks })
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn deck(&self, deck_number: u8) -> Option<&Deck> {
        self.decks.iter().find(|deck| deck.deck_number() == deck_number)
    }

    pub fn deck_count(&self) -> DeckCount {
        if self.decks.len() >= 2 {
            DeckCount::Two
        } else {
            DeckCount::One
        }
    }

    pub fn into_decks(self) -> Vec<Deck> {
        self.decks
    }

    /// Run `edit` on deck `deck_number`, replacing it with the result.
    ///
    /// Returns `false`, leaving the layout untouched, when no such deck exists.
    pub fn update_deck(&mut self, deck_number: u8, edit: impl FnOnce(Deck) -> Deck) -> bool {
        self.edit_deck(deck_number, |deck| (edit(deck), ())).is_some()
    }

    /// Like [`update_deck`](Self::update_deck), passing back whatever `edit`
    /// reports alongside the new deck. `None` when no such deck exists.
    pub(crate) fn edit_deck<T>(
        &mut self,
        deck_number: u8,
        edit: impl FnOnce(Deck) -> (Deck, T),
    ) -> Option<T> {
        let index = self
            .decks
            .iter()
            .position(|deck| deck.deck_number() == deck_number)?;
        let deck = self.decks.remove(index);
        let (deck, report) = edit(deck);
        self.decks.insert(index, deck);
        Some(report)
    }

    /// Switch to `target` decks in place. Returns whether the count changed.
    pub(crate) fn change_deck_count(
        &mut self,
        target: DeckCount,
        defaults: &DeckDefaults,
    ) -> bool {
        match (self.deck_count(), target) {
            (DeckCount::Two, DeckCount::One) => {
                debug!("removing deck 2");
                self.decks.retain(|deck| deck.deck_number() == 1);
                true
            }
            (DeckCount::One, DeckCount::Two) => {
                debug!(
                    rows = defaults.row_count,
                    columns = defaults.column_count,
                    "adding deck 2"
                );
                self.decks.push(defaults.empty_deck(2));
                true
            }
            _ => false,
        }
    }
}

/// Switch `layout` to `target` decks.
///
/// Going from two decks to one discards deck 2 and everything painted on it.
/// Going from one to two appends an all-`SPACE` deck 2 shaped by `defaults`.
/// Deck 1 is never touched.
pub fn set_deck_count(
    mut layout: BusLayout,
    target: DeckCount,
    defaults: &DeckDefaults,
) -> BusLayout {
    layout.change_deck_count(target, defaults);
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{CellType, Seat};
    use crate::paint::paint_cell;

    #[test]
    fn new_layout_has_one_empty_default_deck() {
        let layout = BusLayout::new(&DeckDefaults::default());

        assert_eq!(layout.deck_count(), DeckCount::One);
        let deck = &layout.decks()[0];
        assert_eq!(deck.deck_number(), 1);
        assert_eq!((deck.row_count(), deck.column_count()), (10, 4));
        assert!(deck.seats().iter().all(|s| s.cell_type == CellType::Space));
    }

    #[test]
    fn adding_a_deck_uses_the_given_defaults() {
        let defaults = DeckDefaults {
            row_count: 6,
            column_count: 5,
            deck_type: DeckType::Bed,
        };
        let layout = set_deck_count(
            BusLayout::new(&DeckDefaults::default()),
            DeckCount::Two,
            &defaults,
        );

        let upper = layout.deck(2).unwrap();
        assert_eq!((upper.row_count(), upper.column_count()), (6, 5));
        assert_eq!(upper.deck_type(), DeckType::Bed);
        assert_eq!(layout.deck(1).unwrap().row_count(), 10);
    }

    #[test]
    fn deck_round_trip_discards_upper_deck() {
        let defaults = DeckDefaults::default();
        let mut layout = set_deck_count(BusLayout::new(&defaults), DeckCount::Two, &defaults);
        layout.update_deck(2, |deck| paint_cell(deck, 1, 1, CellType::Seat));
        assert_eq!(layout.deck(2).unwrap().get(1, 1), Some(&Seat::seat(1, 1, "1")));

        let layout = set_deck_count(layout, DeckCount::One, &defaults);
        assert_eq!(layout.decks().len(), 1);

        let layout = set_deck_count(layout, DeckCount::Two, &defaults);
        assert_eq!(layout.deck(2).unwrap().get(1, 1), Some(&Seat::space(1, 1)));
    }

    #[test]
    fn same_count_is_unchanged() {
        let defaults = DeckDefaults::default();
        let layout = BusLayout::new(&defaults);
        assert_eq!(set_deck_count(layout.clone(), DeckCount::One, &defaults), layout);
    }

    #[test]
    fn deck_count_rejects_other_values() {
        assert_eq!(DeckCount::try_from(2).unwrap(), DeckCount::Two);
        assert!(matches!(
            DeckCount::try_from(3),
            Err(LayoutError::UnsupportedDeckCount(3))
        ));
    }

    #[test]
    fn from_decks_orders_by_number() {
        let layout = BusLayout::from_decks(vec![
            Deck::new(2, DeckType::Suite, 2, 2),
            Deck::new(1, DeckType::Standard, 3, 3),
        ])
        .unwrap();

        let numbers: Vec<_> = layout.decks().iter().map(Deck::deck_number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert!(matches!(BusLayout::from_decks(Vec::new()), Err(LayoutError::NoDecks)));
    }

    #[test]
    fn from_decks_rejects_gaps_and_repeats_in_numbering() {
        let only_upper = BusLayout::from_decks(vec![Deck::new(2, DeckType::Standard, 2, 2)]);
        assert!(matches!(
            only_upper,
            Err(LayoutError::InvalidDeckNumbers(numbers)) if numbers == vec![2]
        ));

        let repeated = BusLayout::from_decks(vec![
            Deck::new(1, DeckType::Standard, 2, 2),
            Deck::new(1, DeckType::Bed, 2, 2),
        ]);
        assert!(matches!(
            repeated,
            Err(LayoutError::InvalidDeckNumbers(numbers)) if numbers == vec![1, 1]
        ));
    }

    #[test]
    fn updating_a_missing_deck_reports_false() {
        let mut layout = BusLayout::new(&DeckDefaults::default());
        let before = layout.clone();
        assert!(!layout.update_deck(2, |deck| paint_cell(deck, 1, 1, CellType::Seat)));
        assert_eq!(layout, before);
    }
}
