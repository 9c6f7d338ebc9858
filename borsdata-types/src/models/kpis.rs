//! KPI metadata, screener values and history.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::batch::{BatchEntry, embedded_error};

/// Describes one KPI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct KpiMetadata {
    /// KPI id.
    pub kpi_id: i64,
    /// Swedish name.
    pub name_sv: Option<String>,
    /// English name.
    pub name_en: Option<String>,
    /// Display format hint.
    pub format: Option<String>,
    /// Whether values are strings rather than numbers.
    pub is_string: bool,
}

/// Screener value of one KPI for one instrument.
///
/// The wire carries two optional fields; at most one of them is meaningful.
/// Use [`KpiValue::datum`] to read it as a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiValue {
    /// Instrument id.
    #[serde(rename(deserialize = "i"))]
    pub ins_id: i64,
    /// Numeric value.
    #[serde(rename(deserialize = "n"))]
    pub numeric: Option<f64>,
    /// String value.
    #[serde(rename(deserialize = "s"))]
    pub text: Option<String>,
}

/// A KPI value resolved from [`KpiValue`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KpiDatum {
    /// Numeric KPI.
    Number(f64),
    /// String KPI.
    Text(String),
}

impl KpiValue {
    /// The populated side of the value; numeric wins if both are present.
    #[must_use]
    pub fn datum(&self) -> Option<KpiDatum> {
        match (self.numeric, self.text.as_deref()) {
            (Some(n), _) => Some(KpiDatum::Number(n)),
            (None, Some(s)) if !s.is_empty() => Some(KpiDatum::Text(s.to_string())),
            _ => None,
        }
    }
}

/// Screener result: one KPI for every instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct KpiAllResponse {
    /// KPI id.
    pub kpi_id: i64,
    /// Calculation group (e.g. `1year`, `last`).
    pub group: Option<String>,
    /// Calculation (e.g. `mean`, `latest`).
    pub calculation: Option<String>,
    /// One value per instrument.
    pub values: Option<Vec<KpiValue>>,
}

/// Screener result: one KPI for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct KpiInstrumentResponse {
    /// KPI id.
    pub kpi_id: i64,
    /// Calculation group.
    pub group: Option<String>,
    /// Calculation.
    pub calculation: Option<String>,
    /// The value.
    pub value: Option<KpiValue>,
}

/// One historical KPI point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiHistory {
    /// Year.
    #[serde(rename(deserialize = "y"))]
    pub year: i32,
    /// Period within the year.
    #[serde(rename(deserialize = "p"))]
    pub period: i32,
    /// Value, absent when the KPI could not be computed.
    #[serde(rename(deserialize = "v"))]
    pub value: Option<f64>,
}

/// KPI history for a single instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct KpiHistoryResponse {
    /// KPI id.
    pub kpi_id: i64,
    /// Report granularity used.
    pub report_time: Option<String>,
    /// Price type used.
    pub price_value: Option<String>,
    /// History points.
    pub values: Option<Vec<KpiHistory>>,
}

/// Per-instrument entry of the batch KPI history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct InstrumentKpiHistory {
    /// Instrument id.
    pub instrument: i64,
    /// KPI id, when echoed by the API.
    pub kpi_id: Option<i64>,
    error: Option<String>,
    values: Option<Vec<KpiHistory>>,
}

impl InstrumentKpiHistory {
    /// Build an entry directly; mostly useful for tests and fixtures.
    #[must_use]
    pub const fn new(
        instrument: i64,
        kpi_id: Option<i64>,
        values: Option<Vec<KpiHistory>>,
        error: Option<String>,
    ) -> Self {
        Self {
            instrument,
            kpi_id,
            error,
            values,
        }
    }

    /// History points, or `None` when the API flagged an error for this instrument.
    #[must_use]
    pub fn values(&self) -> Option<&[KpiHistory]> {
        if self.is_error() {
            return None;
        }
        self.values.as_deref()
    }
}

impl BatchEntry for InstrumentKpiHistory {
    fn instrument_id(&self) -> i64 {
        self.instrument
    }

    fn error(&self) -> Option<&str> {
        embedded_error(self.error.as_ref())
    }
}

/// KPI history for a batch of instruments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct KpiHistoryBatchResponse {
    /// KPI id.
    pub kpi_id: i64,
    /// Report granularity used.
    pub report_time: Option<String>,
    /// Price type used.
    pub price_value: Option<String>,
    /// One entry per requested instrument.
    pub kpis_list: Option<Vec<InstrumentKpiHistory>>,
}

/// History of one KPI inside a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummaryGroup {
    /// KPI id. The summary endpoint capitalises this key.
    #[serde(rename(deserialize = "KpiId"), alias = "kpiId")]
    pub kpi_id: i64,
    /// History points.
    pub values: Option<Vec<KpiHistory>>,
}

/// Every KPI's history for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct KpiSummary {
    /// Instrument id.
    pub instrument: i64,
    /// Report granularity used.
    pub report_type: Option<String>,
    /// One group per KPI.
    pub kpis: Option<Vec<KpiSummaryGroup>>,
}

/// Timestamp of the last KPI recalculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct KpiCalcUpdated {
    /// Last recalculation, if reported.
    #[serde(default, with = "super::date::option")]
    pub kpis_calc_updated: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datum_prefers_number() {
        let v = KpiValue {
            ins_id: 1,
            numeric: Some(1.5),
            text: None,
        };
        assert_eq!(v.datum(), Some(KpiDatum::Number(1.5)));

        let s = KpiValue {
            ins_id: 1,
            numeric: None,
            text: Some("AAA".into()),
        };
        assert_eq!(s.datum(), Some(KpiDatum::Text("AAA".into())));

        let none = KpiValue {
            ins_id: 1,
            numeric: None,
            text: Some(String::new()),
        };
        assert_eq!(none.datum(), None);
    }
}
