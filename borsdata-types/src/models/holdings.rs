//! Insider transactions, short positions and buybacks.
//!
//! The row types have no identity of their own; they always arrive inside an
//! [`InstrumentValues`] envelope keyed by instrument id.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::batch::InstrumentValues;

/// One insider transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct InsiderRow {
    /// Miscellaneous flag set by the register.
    pub misc: Option<bool>,
    /// Person or entity trading.
    pub owner_name: Option<String>,
    /// Position held by the owner.
    pub owner_position: Option<String>,
    /// Part of an equity program.
    pub equity_program: Option<bool>,
    /// Number of shares.
    pub shares: Option<i64>,
    /// Price per share.
    pub price: Option<f64>,
    /// Total amount.
    pub amount: Option<f64>,
    /// Currency of `price` and `amount`.
    pub currency: Option<String>,
    /// Transaction type code.
    pub transaction_type: Option<i32>,
    /// Date the register verified the transaction.
    #[serde(default, with = "super::date::option")]
    pub verification_date: Option<NaiveDateTime>,
    /// Date of the transaction.
    #[serde(default, with = "super::date::option")]
    pub transaction_date: Option<NaiveDateTime>,
}

/// One disclosed short position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ShortPosition {
    /// Holder of the position.
    pub position_holder: Option<String>,
    /// Position size in percent of shares outstanding.
    pub position: Option<f64>,
    /// Disclosure date.
    #[serde(default, with = "super::date::option")]
    pub date: Option<NaiveDateTime>,
}

/// One buyback transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct BuybackRow {
    /// Change in number of shares held.
    pub change: Option<i64>,
    /// Change in percent.
    pub change_proc: Option<f64>,
    /// Price per share.
    pub price: Option<f64>,
    /// Currency of `price`.
    pub currency: Option<String>,
    /// Shares held after the transaction.
    pub shares: Option<i64>,
    /// Shares held in percent.
    pub shares_proc: Option<f64>,
    /// Transaction date.
    #[serde(default, with = "super::date::option")]
    pub date: Option<NaiveDateTime>,
}

/// Insider transactions for one instrument.
pub type InsiderHoldings = InstrumentValues<InsiderRow>;
/// Short positions for one instrument.
pub type ShortPositions = InstrumentValues<ShortPosition>;
/// Buybacks for one instrument.
pub type Buyback = InstrumentValues<BuybackRow>;
