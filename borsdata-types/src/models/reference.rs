//! Reference data: branches, countries, markets, sectors and instruments.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::batch::{BatchEntry, embedded_error};

/// Business branch (industry) classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Branch {
    /// Branch id.
    pub id: i64,
    /// Display name.
    pub name: Option<String>,
    /// Sector the branch belongs to.
    pub sector_id: i64,
}

/// Country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Country id.
    pub id: i64,
    /// Display name.
    pub name: Option<String>,
}

/// Market or index list an instrument trades on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Market {
    /// Market id.
    pub id: i64,
    /// Display name.
    pub name: Option<String>,
    /// Country the market belongs to.
    pub country_id: Option<i64>,
    /// Whether the market is an index rather than a trading venue.
    pub is_index: Option<bool>,
    /// Exchange name.
    pub exchange_name: Option<String>,
}

/// Sector classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    /// Sector id.
    pub id: i64,
    /// Display name.
    pub name: Option<String>,
}

/// Listed instrument (Nordic or global).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Instrument {
    /// Instrument id, the key every other endpoint uses.
    pub ins_id: i64,
    /// Company or fund name.
    pub name: Option<String>,
    /// Slug used on borsdata.se.
    pub url_name: Option<String>,
    /// Instrument kind code (0 = share, 1 = ETF, ...).
    #[serde(rename(deserialize = "instrument"))]
    pub instrument_type: i64,
    /// ISIN.
    pub isin: Option<String>,
    /// Exchange ticker.
    pub ticker: Option<String>,
    /// Yahoo Finance symbol.
    #[serde(rename(deserialize = "yahoo"))]
    pub yahoo_symbol: Option<String>,
    /// Sector id.
    pub sector_id: Option<i64>,
    /// Market id.
    pub market_id: i64,
    /// Branch id.
    pub branch_id: Option<i64>,
    /// Country id.
    pub country_id: Option<i64>,
    /// First listing date.
    #[serde(default, with = "super::date::option")]
    pub listing_date: Option<NaiveDateTime>,
    /// Currency of the stock price.
    pub stock_price_currency: Option<String>,
    /// Currency of the financial reports.
    pub report_currency: Option<String>,
}

/// Free-text company description in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct InstrumentDescription {
    /// Instrument id.
    pub ins_id: i64,
    /// ISO language code of `text`.
    pub language_code: Option<String>,
    text: Option<String>,
    error: Option<String>,
}

impl InstrumentDescription {
    /// Build an entry directly; mostly useful for tests and fixtures.
    #[must_use]
    pub const fn new(
        ins_id: i64,
        language_code: Option<String>,
        text: Option<String>,
        error: Option<String>,
    ) -> Self {
        Self {
            ins_id,
            language_code,
            text,
            error,
        }
    }

    /// Description text, or `None` when the API flagged an error.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        if self.is_error() {
            return None;
        }
        self.text.as_deref()
    }
}

impl BatchEntry for InstrumentDescription {
    fn instrument_id(&self) -> i64 {
        self.ins_id
    }

    fn error(&self) -> Option<&str> {
        embedded_error(self.error.as_ref())
    }
}
