use serde_json::{Value, json};

use super::{FAILING_INSTRUMENT, INSTRUMENT, KPI};

/// `/instruments/kpis/metadata`: numeric and string KPIs.
#[must_use]
pub fn metadata() -> Value {
    json!({
        "kpiHistoryMetadatas": [
            {"kpiId": 1, "nameSv": "Direktavkastning", "nameEn": "Dividend Yield", "format": "%", "isString": false},
            {"kpiId": KPI, "nameSv": "P/E", "nameEn": "P/E", "format": "", "isString": false},
            {"kpiId": 161, "nameSv": "Analytikerrekommendation", "nameEn": "Analyst Recommendation", "format": "", "isString": true}
        ]
    })
}

/// `/instruments/kpis/updated`: last screener recalculation time.
#[must_use]
pub fn updated() -> Value {
    json!({"kpisCalcUpdated": "2024-02-02T06:12:44.53"})
}

fn points() -> Value {
    json!([
        {"y": 2023, "p": 5, "v": 21.4},
        {"y": 2022, "p": 5, "v": 18.9},
        {"y": 2021, "p": 5, "v": null}
    ])
}

/// KPI history of [`INSTRUMENT`] for [`KPI`].
#[must_use]
pub fn history() -> Value {
    json!({
        "kpiId": KPI,
        "reportTime": "year",
        "priceValue": "mean",
        "values": points()
    })
}

/// KPI history of [`KPI`] for several instruments, with a failed entry.
#[must_use]
pub fn history_batch() -> Value {
    json!({
        "kpiId": KPI,
        "reportTime": "year",
        "priceValue": "mean",
        "kpisList": [
            {"instrument": INSTRUMENT, "kpiId": KPI, "error": null, "values": points()},
            {"instrument": FAILING_INSTRUMENT, "kpiId": KPI, "error": "Instrument not found", "values": []}
        ]
    })
}

/// Yearly KPI summary of [`INSTRUMENT`].
#[must_use]
pub fn summary() -> Value {
    json!({
        "instrument": INSTRUMENT,
        "reportType": "year",
        "kpis": [
            {"KpiId": 1, "values": [{"y": 2023, "p": 5, "v": 2.1}]},
            {"KpiId": KPI, "values": points()}
        ]
    })
}

/// Latest screener value of [`KPI`] for every instrument.
#[must_use]
pub fn screener() -> Value {
    json!({
        "kpiId": KPI,
        "group": "last",
        "calculation": "latest",
        "values": [
            {"i": INSTRUMENT, "n": 21.4, "s": null},
            {"i": 750, "n": 14.2, "s": null}
        ]
    })
}

/// Latest screener value of [`KPI`] for [`INSTRUMENT`].
#[must_use]
pub fn screener_instrument() -> Value {
    json!({
        "kpiId": KPI,
        "group": "last",
        "calculation": "latest",
        "value": {"i": INSTRUMENT, "n": 21.4, "s": null}
    })
}
