use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::deck::{DeckType, MAX_DIMENSION};
use crate::layout::{DeckDefaults, DEFAULT_COLUMN_COUNT, DEFAULT_ROW_COUNT};

/// Seating engine configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatingConfig {
    pub default_rows: u32,
    pub default_columns: u32,
    pub default_deck_type: DeckType,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            default_rows: DEFAULT_ROW_COUNT,
            default_columns: DEFAULT_COLUMN_COUNT,
            default_deck_type: DeckType::default(),
        }
    }
}

impl SeatingConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to the
    /// built-in defaults for missing keys
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            default_rows: match lookup("SEATING_DEFAULT_ROWS") {
                Some(value) => parse_dimension(&value)
                    .context("SEATING_DEFAULT_ROWS must be a number from 1 to 100")?,
                None => defaults.default_rows,
            },
            default_columns: match lookup("SEATING_DEFAULT_COLUMNS") {
                Some(value) => parse_dimension(&value)
                    .context("SEATING_DEFAULT_COLUMNS must be a number from 1 to 100")?,
                None => defaults.default_columns,
            },
            default_deck_type: match lookup("SEATING_DEFAULT_DECK_TYPE") {
                Some(value) => value
                    .parse::<DeckType>()
                    .context("SEATING_DEFAULT_DECK_TYPE must be STANDARD, SEMI_BED, BED or SUITE")?,
                None => defaults.default_deck_type,
            },
        })
    }

    pub fn deck_defaults(&self) -> DeckDefaults {
        DeckDefaults {
            row_count: self.default_rows,
            column_count: self.default_columns,
            deck_type: self.default_deck_type,
        }
    }
}

fn parse_dimension(value: &str) -> Result<u32> {
    let parsed: u32 = value.trim().parse()?;
    anyhow::ensure!(
        (1..=MAX_DIMENSION).contains(&parsed),
        "dimension must be between 1 and {}, got {}",
        MAX_DIMENSION,
        parsed
    );
    Ok(parsed)
}
