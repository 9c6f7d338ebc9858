use serde::{Deserialize, Serialize};

/// A per-instrument entry of a batch response.
///
/// Batch endpoints answer with one entry per requested instrument. An entry
/// whose `error` is non-empty carries no usable data; its value accessors
/// return `None` so "failed" is never confused with "zero rows".
pub trait BatchEntry {
    /// Instrument the entry belongs to.
    fn instrument_id(&self) -> i64;

    /// The embedded per-instrument error, if non-empty.
    fn error(&self) -> Option<&str>;

    /// True when the API reported a per-instrument failure.
    fn is_error(&self) -> bool {
        self.error().is_some()
    }
}

pub(crate) fn embedded_error(raw: Option<&String>) -> Option<&str> {
    raw.map(String::as_str).filter(|e| !e.trim().is_empty())
}

/// Generic `{ insId, values, error }` envelope used by holdings and calendar endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct InstrumentValues<T> {
    /// Instrument id.
    pub ins_id: i64,
    values: Option<Vec<T>>,
    error: Option<String>,
}

impl<T> InstrumentValues<T> {
    /// Build an entry directly; mostly useful for tests and fixtures.
    pub const fn new(ins_id: i64, values: Option<Vec<T>>, error: Option<String>) -> Self {
        Self {
            ins_id,
            values,
            error,
        }
    }

    /// Rows for this instrument, or `None` when the API flagged an error or sent no list.
    #[must_use]
    pub fn values(&self) -> Option<&[T]> {
        if self.is_error() {
            return None;
        }
        self.values.as_deref()
    }

    /// Owned variant of [`values`](Self::values).
    #[must_use]
    pub fn into_values(self) -> Option<Vec<T>> {
        if self.is_error() {
            return None;
        }
        self.values
    }
}

impl<T> BatchEntry for InstrumentValues<T> {
    fn instrument_id(&self) -> i64 {
        self.ins_id
    }

    fn error(&self) -> Option<&str> {
        embedded_error(self.error.as_ref())
    }
}
