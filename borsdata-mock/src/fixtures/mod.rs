use serde_json::Value;

/// Report and dividend calendars.
pub mod calendar;
/// Insider, short and buyback holdings.
pub mod holdings;
/// KPI metadata, history, summaries and screener values.
pub mod kpis;
/// Stock prices and splits.
pub mod prices;
/// Reference data and translations.
pub mod reference;
/// Financial reports and their metadata.
pub mod reports;

/// Instrument every per-instrument fixture is built around (ABB).
pub const INSTRUMENT: i64 = 3;
/// Instrument that batch fixtures report as failed.
pub const FAILING_INSTRUMENT: i64 = 999;
/// KPI used by the KPI fixtures (P/E).
pub const KPI: i64 = 2;

/// Every fixture keyed by the request path it answers.
#[must_use]
pub fn routes() -> Vec<(&'static str, Value)> {
    vec![
        ("/branches", reference::branches()),
        ("/countries", reference::countries()),
        ("/markets", reference::markets()),
        ("/sectors", reference::sectors()),
        ("/instruments", reference::instruments()),
        ("/instruments/global", reference::global_instruments()),
        ("/instruments/description", reference::descriptions()),
        ("/translationmetadata", reference::translations()),
        ("/instruments/3/stockprices", prices::stock_prices()),
        ("/instruments/stockprices", prices::stock_prices_batch()),
        ("/instruments/stockprices/last", prices::last()),
        ("/instruments/stockprices/global/last", prices::last()),
        ("/instruments/stockprices/date", prices::last()),
        ("/instruments/stockprices/global/date", prices::last()),
        ("/instruments/stocksplits", prices::splits()),
        ("/instruments/3/reports/year", reports::reports()),
        ("/instruments/3/reports/r12", reports::reports()),
        ("/instruments/3/reports/quarter", reports::reports()),
        ("/instruments/reports", reports::reports_batch()),
        ("/instruments/reports/metadata", reports::metadata()),
        ("/instruments/kpis/metadata", kpis::metadata()),
        ("/instruments/kpis/updated", kpis::updated()),
        ("/instruments/3/kpis/2/year/mean/history", kpis::history()),
        ("/instruments/kpis/2/year/mean/history", kpis::history_batch()),
        ("/instruments/3/kpis/year/summary", kpis::summary()),
        ("/instruments/kpis/2/last/latest", kpis::screener()),
        ("/instruments/3/kpis/2/last/latest", kpis::screener_instrument()),
        ("/holdings/insider", holdings::insider()),
        ("/holdings/shorts", holdings::shorts()),
        ("/holdings/buyback", holdings::buyback()),
        ("/instruments/report/calendar", calendar::reports()),
        ("/instruments/dividend/calendar", calendar::dividends()),
    ]
}
