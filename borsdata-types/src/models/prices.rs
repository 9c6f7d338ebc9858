//! Daily prices and stock splits.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::batch::{BatchEntry, embedded_error};

/// One daily OHLCV row for a single instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPrice {
    /// Trading day as sent by the API (`YYYY-MM-DD`).
    #[serde(rename(deserialize = "d"))]
    pub date: Option<String>,
    /// Highest price.
    #[serde(rename(deserialize = "h"))]
    pub high: Option<f64>,
    /// Lowest price.
    #[serde(rename(deserialize = "l"))]
    pub low: Option<f64>,
    /// Closing price.
    #[serde(rename(deserialize = "c"))]
    pub close: f64,
    /// Opening price.
    #[serde(rename(deserialize = "o"))]
    pub open: Option<f64>,
    /// Traded volume.
    #[serde(rename(deserialize = "v"))]
    pub volume: Option<i64>,
}

impl StockPrice {
    /// Parsed trading day.
    #[must_use]
    pub fn day(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(super::date::parse_date)
    }
}

/// Latest (or on-date) price row for one instrument, as returned by the market-wide endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPriceLast {
    /// Instrument id.
    #[serde(rename(deserialize = "i"))]
    pub ins_id: i64,
    /// Trading day (`YYYY-MM-DD`).
    #[serde(rename(deserialize = "d"))]
    pub date: String,
    /// Opening price.
    #[serde(rename(deserialize = "o"))]
    pub open: Option<f64>,
    /// Highest price.
    #[serde(rename(deserialize = "h"))]
    pub high: Option<f64>,
    /// Lowest price.
    #[serde(rename(deserialize = "l"))]
    pub low: Option<f64>,
    /// Closing price.
    #[serde(rename(deserialize = "c"))]
    pub close: f64,
    /// Traded volume.
    #[serde(rename(deserialize = "v"))]
    pub volume: Option<i64>,
}

impl StockPriceLast {
    /// Parsed trading day.
    #[must_use]
    pub fn day(&self) -> Option<NaiveDate> {
        super::date::parse_date(&self.date)
    }
}

/// Per-instrument entry of the batch price endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct InstrumentStockPrices {
    /// Instrument id.
    pub instrument: i64,
    error: Option<String>,
    stock_prices_list: Option<Vec<StockPrice>>,
}

impl InstrumentStockPrices {
    /// Build an entry directly; mostly useful for tests and fixtures.
    #[must_use]
    pub const fn new(
        instrument: i64,
        stock_prices_list: Option<Vec<StockPrice>>,
        error: Option<String>,
    ) -> Self {
        Self {
            instrument,
            error,
            stock_prices_list,
        }
    }

    /// Price rows, or `None` when the API flagged an error for this instrument.
    #[must_use]
    pub fn prices(&self) -> Option<&[StockPrice]> {
        if self.is_error() {
            return None;
        }
        self.stock_prices_list.as_deref()
    }
}

impl BatchEntry for InstrumentStockPrices {
    fn instrument_id(&self) -> i64 {
        self.instrument
    }

    fn error(&self) -> Option<&str> {
        embedded_error(self.error.as_ref())
    }
}

/// Stock split or reverse split event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct StockSplit {
    /// Instrument id.
    pub ins_id: i64,
    /// Effective date.
    #[serde(with = "super::date")]
    pub split_date: NaiveDateTime,
    /// Ratio between new and old share count.
    pub split_ratio: Option<f64>,
    /// Split kind as labelled by the API.
    pub split_type: Option<String>,
}
