//! Decks: one floor of a bus, stored as a dense row-major grid of cells.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cell::{CellType, Seat};
use crate::error::LayoutError;
use crate::payload::DeckRecord;

/// Largest row or column count a deck grid may have.
pub const MAX_DIMENSION: u32 = 100;

/// Physical seating class of a deck. Descriptive only; it never changes how
/// the grid behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeckType {
    #[default]
    Standard,
    SemiBed,
    Bed,
    Suite,
}

impl DeckType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeckType::Standard => "STANDARD",
            DeckType::SemiBed => "SEMI_BED",
            DeckType::Bed => "BED",
            DeckType::Suite => "SUITE",
        }
    }
}

impl fmt::Display for DeckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeckType {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "STANDARD" => Ok(DeckType::Standard),
            "SEMI_BED" => Ok(DeckType::SemiBed),
            "BED" => Ok(DeckType::Bed),
            "SUITE" => Ok(DeckType::Suite),
            _ => Err(LayoutError::UnknownDeckType(s.to_string())),
        }
    }
}

/// One floor of a bus.
///
/// Cells live in a row-major `Vec` holding exactly `row_count * column_count`
/// entries; the cell for `(row, column)` sits at
/// `(row - 1) * column_count + (column - 1)`. Every constructor fills the whole
/// grid, so lookups never scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "DeckRecord")]
pub struct Deck {
    deck_number: u8,
    deck_type: DeckType,
    row_count: u32,
    column_count: u32,
    #[serde(rename = "seats")]
    cells: Vec<Seat>,
}

impl Deck {
    /// A deck of the given shape with every cell set to `SPACE`.
    ///
    /// Dimensions are clamped to `1..=MAX_DIMENSION`.
    pub fn new(deck_number: u8, deck_type: DeckType, row_count: u32, column_count: u32) -> Self {
        Self::from_seats(deck_number, deck_type, row_count, column_count, Vec::new())
    }

    /// Lay `seats` out on a grid of the given shape.
    ///
    /// Cells outside the bounds are dropped, positions with no cell become
    /// `SPACE`, and when a position appears twice the first entry wins.
    /// Cell contents are taken as given. Dimensions are clamped to
    /// `1..=MAX_DIMENSION`.
    pub fn from_seats(
        deck_number: u8,
        deck_type: DeckType,
        row_count: u32,
        column_count: u32,
        seats: impl IntoIterator<Item = Seat>,
    ) -> Self {
        let row_count = clamp_dimension(row_count);
        let column_count = clamp_dimension(column_count);

        let mut slots: Vec<Option<Seat>> = vec![None; grid_len(row_count, column_count)];
        for seat in seats {
            if let Some(index) = grid_index(row_count, column_count, seat.row, seat.column) {
                if slots[index].is_none() {
                    slots[index] = Some(seat);
                }
            }
        }

        let cells = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| {
                    let (row, column) = grid_position(column_count, index);
                    Seat::space(row, column)
                })
            })
            .collect();

        Self {
            deck_number,
            deck_type,
            row_count,
            column_count,
            cells,
        }
    }

    pub fn deck_number(&self) -> u8 {
        self.deck_number
    }

    pub fn deck_type(&self) -> DeckType {
        self.deck_type
    }

    pub fn set_deck_type(&mut self, deck_type: DeckType) {
        self.deck_type = deck_type;
    }

    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    pub fn column_count(&self) -> u32 {
        self.column_count
    }

    /// All cells in row-major order.
    pub fn seats(&self) -> &[Seat] {
        &self.cells
    }

    /// The cells grouped by row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Seat]> {
        self.cells.chunks(self.column_count as usize)
    }

    /// The cell at `(row, column)`, or `None` when outside the grid.
    pub fn get(&self, row: u32, column: u32) -> Option<&Seat> {
        self.index_of(row, column).map(|index| &self.cells[index])
    }

    pub fn cell_type_at(&self, row: u32, column: u32) -> Option<CellType> {
        self.get(row, column).map(|cell| cell.cell_type)
    }

    pub(crate) fn get_mut(&mut self, row: u32, column: u32) -> Option<&mut Seat> {
        self.index_of(row, column).map(move |index| &mut self.cells[index])
    }

    pub(crate) fn into_seats(self) -> Vec<Seat> {
        self.cells
    }

    fn index_of(&self, row: u32, column: u32) -> Option<usize> {
        grid_index(self.row_count, self.column_count, row, column)
    }

    /// Whether every cell sits at the position its index implies.
    ///
    /// Always true for decks built through this crate.
    pub fn is_complete(&self) -> bool {
        self.cells.len() == grid_len(self.row_count, self.column_count)
            && self
                .cells
                .iter()
                .enumerate()
                .all(|(index, cell)| cell.position() == grid_position(self.column_count, index))
    }

    /// Whether every cell carries a number iff it is a seat.
    pub fn numbers_match_types(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.is_seat() == cell.seat_number.is_some())
    }
}

impl TryFrom<DeckRecord> for Deck {
    type Error = LayoutError;

    fn try_from(record: DeckRecord) -> Result<Self, Self::Error> {
        record.into_deck()
    }
}

pub(crate) fn clamp_dimension(value: u32) -> u32 {
    value.clamp(1, MAX_DIMENSION)
}

fn grid_len(row_count: u32, column_count: u32) -> usize {
    row_count as usize * column_count as usize
}

fn grid_index(row_count: u32, column_count: u32, row: u32, column: u32) -> Option<usize> {
    if row == 0 || column == 0 || row > row_count || column > column_count {
        return None;
    }
    Some((row - 1) as usize * column_count as usize + (column - 1) as usize)
}

fn grid_position(column_count: u32, index: usize) -> (u32, u32) {
    let columns = column_count as usize;
    ((index / columns) as u32 + 1, (index % columns) as u32 + 1)
}
