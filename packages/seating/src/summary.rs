//! Read-only aggregate queries over decks and layouts.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cell::CellType;
use crate::deck::{Deck, DeckType};
use crate::layout::BusLayout;

/// Cell counts for one deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSummary {
    pub deck_number: u8,
    pub deck_type: DeckType,
    pub row_count: u32,
    pub column_count: u32,
    pub seats: usize,
    pub aisles: usize,
    pub spaces: usize,
    /// Seat numbers carried by more than one seat on this deck.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub duplicate_seat_numbers: Vec<String>,
}

/// Per-deck counts plus totals across the whole bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSummary {
    pub decks: Vec<DeckSummary>,
    pub total_seats: usize,
    pub total_aisles: usize,
    pub total_spaces: usize,
}

impl Deck {
    pub fn count_of(&self, cell_type: CellType) -> usize {
        self.seats()
            .iter()
            .filter(|cell| cell.cell_type == cell_type)
            .count()
    }

    pub fn seat_count(&self) -> usize {
        self.count_of(CellType::Seat)
    }

    pub fn aisle_count(&self) -> usize {
        self.count_of(CellType::Aisle)
    }

    pub fn space_count(&self) -> usize {
        self.count_of(CellType::Space)
    }

    /// Seat numbers that appear on more than one seat, sorted.
    ///
    /// The engine never rejects duplicates; this only reports them.
    pub fn duplicate_seat_numbers(&self) -> Vec<String> {
        let mut occurrences: BTreeMap<&str, usize> = BTreeMap::new();
        for number in self.seats().iter().filter_map(|cell| cell.seat_number.as_deref()) {
            *occurrences.entry(number).or_default() += 1;
        }
        occurrences
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(number, _)| number.to_string())
            .collect()
    }

    pub fn summary(&self) -> DeckSummary {
        DeckSummary {
            deck_number: self.deck_number(),
            deck_type: self.deck_type(),
            row_count: self.row_count(),
            column_count: self.column_count(),
            seats: self.seat_count(),
            aisles: self.aisle_count(),
            spaces: self.space_count(),
            duplicate_seat_numbers: self.duplicate_seat_numbers(),
        }
    }
}

impl BusLayout {
    pub fn count_of(&self, cell_type: CellType) -> usize {
        self.decks().iter().map(|deck| deck.count_of(cell_type)).sum()
    }

    pub fn seat_count(&self) -> usize {
        self.count_of(CellType::Seat)
    }

    pub fn aisle_count(&self) -> usize {
        self.count_of(CellType::Aisle)
    }

    pub fn space_count(&self) -> usize {
        self.count_of(CellType::Space)
    }

    pub fn summary(&self) -> LayoutSummary {
        let decks: Vec<DeckSummary> = self.decks().iter().map(Deck::summary).collect();
        LayoutSummary {
            total_seats: decks.iter().map(|deck| deck.seats).sum(),
            total_aisles: decks.iter().map(|deck| deck.aisles).sum(),
            total_spaces: decks.iter().map(|deck| deck.spaces).sum(),
            decks,
        }
    }
}
