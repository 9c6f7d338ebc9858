//! Report and dividend calendars.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::batch::InstrumentValues;

/// Upcoming or past report release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ReportCalendarDate {
    /// Release date.
    #[serde(with = "super::date")]
    pub release_date: NaiveDateTime,
    /// Report kind label (e.g. `Q1`, `Bokslut`).
    pub report_type: Option<String>,
}

/// Upcoming or past dividend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DividendDate {
    /// Amount paid per share.
    pub amount_paid: Option<f64>,
    /// Currency of `amount_paid`.
    pub currency_short_name: Option<String>,
    /// Payments per year.
    pub distribution_frequency: Option<i32>,
    /// Ex-dividend date.
    #[serde(default, with = "super::date::option")]
    pub excluding_date: Option<NaiveDateTime>,
    /// Dividend kind code.
    pub dividend_type: Option<i32>,
}

/// Report calendar for one instrument.
pub type ReportCalendar = InstrumentValues<ReportCalendarDate>;
/// Dividend calendar for one instrument.
pub type DividendCalendar = InstrumentValues<DividendDate>;
