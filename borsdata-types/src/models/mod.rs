//! Typed records for every Borsdata response shape.
//!
//! Each struct declares its wire names through serde `rename` rules: the
//! struct-level `rename_all(deserialize = ...)` is the default rule and any
//! field-level `rename(deserialize = ...)` is an exception to it. Serialization
//! always uses the Rust field names.
//!
//! Identifying fields are required; descriptive fields are `Option` and an
//! absent JSON key becomes `None`.

mod batch;
mod calendar;
pub mod date;
mod holdings;
mod kpis;
mod prices;
mod reference;
mod reports;
mod translation;

pub use batch::{BatchEntry, InstrumentValues};
pub use calendar::{DividendCalendar, DividendDate, ReportCalendar, ReportCalendarDate};
pub use holdings::{Buyback, BuybackRow, InsiderHoldings, InsiderRow, ShortPosition, ShortPositions};
pub use kpis::{
    InstrumentKpiHistory, KpiAllResponse, KpiCalcUpdated, KpiDatum, KpiHistory,
    KpiHistoryBatchResponse, KpiHistoryResponse, KpiInstrumentResponse, KpiMetadata, KpiSummary,
    KpiSummaryGroup, KpiValue,
};
pub use prices::{InstrumentStockPrices, StockPrice, StockPriceLast, StockSplit};
pub use reference::{Branch, Country, Instrument, InstrumentDescription, Market, Sector};
pub use reports::{InstrumentReports, Report, ReportMetadata};
pub use translation::{TranslationItem, TranslationMetadata, Translations};
