//! Errors raised at the data boundary of the seating engine.
//!
//! Edit operations (resize, paint, rename, deck-count changes) are total and
//! never produce a `LayoutError`. Only decoding external input can fail:
//! records, command scripts and raw host values.

use thiserror::Error;

use crate::deck::MAX_DIMENSION;

#[derive(Debug, Error)]
pub enum LayoutError {
    /// A deck count other than 1 or 2 was requested.
    #[error("unsupported deck count {0}: a bus has one or two decks")]
    UnsupportedDeckCount(u8),

    #[error("unknown cell type '{0}'")]
    UnknownCellType(String),

    #[error("unknown deck type '{0}'")]
    UnknownDeckType(String),

    /// A persisted deck carried neither dimensions nor seats to derive them from.
    #[error("deck {deck} has no dimensions and no seats to reconstruct them from")]
    MissingDimensions { deck: u8 },

    /// A persisted deck is larger than any bus grid can be.
    #[error(
        "deck {deck} is {rows}x{columns}, beyond the {}x{} limit",
        MAX_DIMENSION,
        MAX_DIMENSION
    )]
    DimensionsTooLarge { deck: u8, rows: u32, columns: u32 },

    /// Persisted decks were not numbered 1, or 1 and 2.
    #[error("decks numbered {0:?}: a bus has deck 1 and optionally deck 2")]
    InvalidDeckNumbers(Vec<u8>),

    /// A persisted record carried no decks at all.
    #[error("bus record has no decks")]
    NoDecks,

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = LayoutError> = std::result::Result<T, E>;
