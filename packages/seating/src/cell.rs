//! Grid cells: the cell type enumeration and the positioned `Seat` value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// What occupies a single grid position.
///
/// `Space` is the empty state every new cell starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellType {
    Seat,
    Aisle,
    #[default]
    Space,
}

impl CellType {
    pub const ALL: [CellType; 3] = [CellType::Seat, CellType::Aisle, CellType::Space];

    pub fn as_str(&self) -> &'static str {
        match self {
            CellType::Seat => "SEAT",
            CellType::Aisle => "AISLE",
            CellType::Space => "SPACE",
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CellType {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SEAT" => Ok(CellType::Seat),
            "AISLE" => Ok(CellType::Aisle),
            "SPACE" => Ok(CellType::Space),
            _ => Err(LayoutError::UnknownCellType(s.to_string())),
        }
    }
}

/// A single grid cell of a deck.
///
/// `seat_number` is `Some` exactly when `cell_type` is [`CellType::Seat`].
/// The constructors below are the supported way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub row: u32,
    pub column: u32,
    #[serde(rename = "type")]
    pub cell_type: CellType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_number: Option<String>,
}

impl Seat {
    /// An empty cell.
    pub fn space(row: u32, column: u32) -> Self {
        Self {
            row,
            column,
            cell_type: CellType::Space,
            seat_number: None,
        }
    }

    pub fn aisle(row: u32, column: u32) -> Self {
        Self {
            row,
            column,
            cell_type: CellType::Aisle,
            seat_number: None,
        }
    }

    /// A passenger seat labelled `number`.
    pub fn seat(row: u32, column: u32, number: impl Into<String>) -> Self {
        Self {
            row,
            column,
            cell_type: CellType::Seat,
            seat_number: Some(number.into()),
        }
    }

    pub fn is_seat(&self) -> bool {
        self.cell_type == CellType::Seat
    }

    pub fn position(&self) -> (u32, u32) {
        (self.row, self.column)
    }

    /// Re-type this cell, clearing the number for non-seat types.
    ///
    /// Turning a cell into a seat requires a number, so `number` is only read
    /// when `cell_type` is `Seat`.
    pub(crate) fn retype(&mut self, cell_type: CellType, number: Option<String>) {
        self.cell_type = cell_type;
        self.seat_number = match cell_type {
            CellType::Seat => number,
            CellType::Aisle | CellType::Space => None,
        };
    }
}
