//! Plain data exchanged with the host: persisted bus records loaded in edit
//! mode, and the per-deck payload built for submission.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cell::Seat;
use crate::deck::{Deck, DeckType, MAX_DIMENSION};
use crate::error::{LayoutError, Result};
use crate::layout::BusLayout;

/// A deck as persisted or posted by the host.
///
/// Dimensions are optional: the submission payload omits them, and they are
/// then taken from the largest row and column among the seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckRecord {
    #[serde(alias = "deck")]
    pub deck_number: u8,
    #[serde(default)]
    pub deck_type: DeckType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_count: Option<u32>,
    #[serde(default)]
    pub seats: Vec<Seat>,
}

impl DeckRecord {
    /// Turn the record into a complete deck without validating its cells.
    ///
    /// Fails when the deck, as stated or as implied by its seats, exceeds
    /// `MAX_DIMENSION` in either direction.
    pub fn into_deck(self) -> Result<Deck> {
        let row_count = match self.row_count {
            Some(rows) => rows,
            None => self.seats.iter().map(|seat| seat.row).max().ok_or(
                LayoutError::MissingDimensions {
                    deck: self.deck_number,
                },
            )?,
        };
        let column_count = match self.column_count {
            Some(columns) => columns,
            None => self.seats.iter().map(|seat| seat.column).max().ok_or(
                LayoutError::MissingDimensions {
                    deck: self.deck_number,
                },
            )?,
        };

        if row_count > MAX_DIMENSION || column_count > MAX_DIMENSION {
            return Err(LayoutError::DimensionsTooLarge {
                deck: self.deck_number,
                rows: row_count,
                columns: column_count,
            });
        }

        Ok(Deck::from_seats(
            self.deck_number,
            self.deck_type,
            row_count,
            column_count,
            self.seats,
        ))
    }
}

impl From<&Deck> for DeckRecord {
    fn from(deck: &Deck) -> Self {
        Self {
            deck_number: deck.deck_number(),
            deck_type: deck.deck_type(),
            row_count: Some(deck.row_count()),
            column_count: Some(deck.column_count()),
            seats: deck.seats().to_vec(),
        }
    }
}

/// A stored bus as far as seating is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub decks: Vec<DeckRecord>,
}

impl BusRecord {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_layout(id: Option<Uuid>, layout: &BusLayout) -> Self {
        Self {
            id,
            decks: layout.decks().iter().map(DeckRecord::from).collect(),
        }
    }

    pub fn into_layout(self) -> Result<BusLayout> {
        let decks = self
            .decks
            .into_iter()
            .map(DeckRecord::into_deck)
            .collect::<Result<Vec<_>>>()?;
        BusLayout::from_decks(decks)
    }
}

/// One deck of the create/update request. Dimensions are not sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckPayload {
    pub deck: u8,
    pub deck_type: DeckType,
    pub seats: Vec<Seat>,
}

impl DeckPayload {
    /// Rebuild the deck on the receiving side, sizing it from the seat extents.
    pub fn into_deck(self) -> Result<Deck> {
        DeckRecord {
            deck_number: self.deck,
            deck_type: self.deck_type,
            row_count: None,
            column_count: None,
            seats: self.seats,
        }
        .into_deck()
    }
}

impl From<&Deck> for DeckPayload {
    fn from(deck: &Deck) -> Self {
        Self {
            deck: deck.deck_number(),
            deck_type: deck.deck_type(),
            seats: deck.seats().to_vec(),
        }
    }
}

/// Seating part of the bus create/update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub decks: Vec<DeckPayload>,
}

impl From<&BusLayout> for SubmissionPayload {
    fn from(layout: &BusLayout) -> Self {
        Self {
            decks: layout.decks().iter().map(DeckPayload::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::cell::CellType;
    use crate::layout::DeckDefaults;
    use crate::paint::paint_cell;

    #[test]
    fn payload_omits_dimensions() {
        let mut layout = BusLayout::new(&DeckDefaults {
            row_count: 1,
            column_count: 2,
            deck_type: DeckType::SemiBed,
        });
        layout.update_deck(1, |deck| paint_cell(deck, 1, 2, CellType::Seat));

        let json = serde_json::to_value(SubmissionPayload::from(&layout)).unwrap();

        assert_eq!(
            json,
            json!({
                "decks": [{
                    "deck": 1,
                    "deckType": "SEMI_BED",
                    "seats": [
                        {"row": 1, "column": 1, "type": "SPACE"},
                        {"row": 1, "column": 2, "type": "SEAT", "seatNumber": "1"}
                    ]
                }]
            })
        );
    }

    #[test]
    fn record_without_dimensions_uses_seat_extents() {
        let record = BusRecord::from_json(
            r#"{
                "decks": [{
                    "deckNumber": 1,
                    "seats": [
                        {"row": 3, "column": 1, "type": "SEAT", "seatNumber": "1"},
                        {"row": 1, "column": 4, "type": "AISLE"}
                    ]
                }]
            }"#,
        )
        .unwrap();

        let layout = record.into_layout().unwrap();
        let deck = layout.deck(1).unwrap();

        assert_eq!((deck.row_count(), deck.column_count()), (3, 4));
        assert!(deck.is_complete());
        assert_eq!(deck.get(3, 1), Some(&Seat::seat(3, 1, "1")));
        assert_eq!(deck.get(2, 2), Some(&Seat::space(2, 2)));
    }

    #[test]
    fn deck_without_dimensions_or_seats_is_rejected() {
        let record = BusRecord::from_json(r#"{"decks": [{"deck": 2}]}"#).unwrap();
        assert!(matches!(
            record.into_layout(),
            Err(LayoutError::MissingDimensions { deck: 2 })
        ));
    }

    #[test]
    fn oversized_record_is_rejected_before_allocating() {
        let stated = BusRecord::from_json(
            r#"{"decks": [{"deckNumber": 1, "rowCount": 4000000000, "columnCount": 4}]}"#,
        )
        .unwrap();
        assert!(matches!(
            stated.into_layout(),
            Err(LayoutError::DimensionsTooLarge {
                deck: 1,
                rows: 4_000_000_000,
                columns: 4
            })
        ));

        let implied = DeckPayload {
            deck: 1,
            deck_type: DeckType::Standard,
            seats: vec![Seat::seat(2, 4_000_000_000, "1")],
        };
        assert!(matches!(
            implied.into_deck(),
            Err(LayoutError::DimensionsTooLarge { deck: 1, .. })
        ));
    }

    #[test]
    fn record_round_trips_through_layout() {
        let id = Uuid::new_v4();
        let mut layout = BusLayout::new(&DeckDefaults::default());
        layout.update_deck(1, |deck| paint_cell(deck, 4, 2, CellType::Seat));

        let record = BusRecord::from_layout(Some(id), &layout);
        let json = serde_json::to_string(&record).unwrap();
        let restored = BusRecord::from_json(&json).unwrap();

        assert_eq!(restored.id, Some(id));
        assert_eq!(restored.into_layout().unwrap(), layout);
    }

    #[test]
    fn payload_deck_is_rebuilt_from_extents() {
        let deck = Deck::from_seats(1, DeckType::Standard, 2, 3, vec![Seat::seat(2, 3, "5")]);
        let rebuilt = DeckPayload::from(&deck).into_deck().unwrap();
        assert_eq!(rebuilt, deck);
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            BusRecord::from_json("{not json"),
            Err(LayoutError::Json(_))
        ));
    }
}
