use chrono::NaiveDate;

/// Name of the query parameter carrying the API key.
pub const AUTH_PARAM: &str = "authKey";

/// One query-parameter value before wire encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// Integer, rendered in decimal.
    Int(i64),
    /// Free text, rendered as-is.
    Text(String),
    /// Boolean, rendered `1`/`0` as the API expects.
    Bool(bool),
    /// Calendar date, rendered `YYYY-MM-DD`.
    Date(NaiveDate),
    /// List of already-rendered items, joined with commas.
    List(Vec<String>),
}

impl QueryValue {
    /// Wire form of the value.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Int(v) => v.to_string(),
            Self::Text(v) => v.clone(),
            Self::Bool(true) => "1".to_string(),
            Self::Bool(false) => "0".to_string(),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
            Self::List(items) => items.join(","),
        }
    }
}

impl From<i64> for QueryValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for QueryValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<bool> for QueryValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<NaiveDate> for QueryValue {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<&[i64]> for QueryValue {
    fn from(v: &[i64]) -> Self {
        Self::List(v.iter().map(ToString::to_string).collect())
    }
}

impl From<Vec<i64>> for QueryValue {
    fn from(v: Vec<i64>) -> Self {
        Self::from(v.as_slice())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

/// Ordered query-parameter mapping.
///
/// Names are unique: setting an existing name replaces its value in place.
/// Absent values are never stored, so they can never reach the wire.
///
/// ```
/// use borsdata_core::QueryParams;
///
/// let q = QueryParams::new()
///     .with("instList", vec![1_i64, 2, 3])
///     .with_opt("maxCount", None::<i64>)
///     .with("original", true);
/// assert_eq!(
///     q.serialize(),
///     vec![
///         ("instList".to_string(), "1,2,3".to_string()),
///         ("original".to_string(), "1".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, QueryValue)>,
}

impl QueryParams {
    /// Empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set `name`, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<QueryValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Set `name` when `value` is present; otherwise leave the mapping untouched.
    pub fn insert_opt<V: Into<QueryValue>>(&mut self, name: impl Into<String>, value: Option<V>) {
        if let Some(v) = value {
            self.insert(name, v);
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Builder form of [`insert_opt`](Self::insert_opt).
    #[must_use]
    pub fn with_opt<V: Into<QueryValue>>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.insert_opt(name, value);
        self
    }

    /// Drop `name` and return its value, if any.
    pub fn remove(&mut self, name: &str) -> Option<QueryValue> {
        let idx = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(idx).1)
    }

    /// Value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Number of stored parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no parameter is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Wire pairs in insertion order.
    #[must_use]
    pub fn serialize(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(n, v)| (n.clone(), v.render()))
            .collect()
    }

    /// Wire pairs with the API key appended under [`AUTH_PARAM`].
    ///
    /// Any caller-supplied `authKey` is discarded first, so the configured key
    /// always wins and appears exactly once.
    #[must_use]
    pub fn into_authenticated(mut self, api_key: &str) -> Vec<(String, String)> {
        self.remove(AUTH_PARAM);
        let mut pairs = self.serialize();
        pairs.push((AUTH_PARAM.to_string(), api_key.to_string()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_each_kind() {
        assert_eq!(QueryValue::from(20_i64).render(), "20");
        assert_eq!(QueryValue::from(true).render(), "1");
        assert_eq!(QueryValue::from(false).render(), "0");
        assert_eq!(
            QueryValue::from(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()).render(),
            "2024-01-05"
        );
        assert_eq!(QueryValue::from(vec![3_i64, 750]).render(), "3,750");
        assert_eq!(QueryValue::from("abc").render(), "abc");
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut q = QueryParams::new().with("a", 1_i64).with("b", 2_i64);
        q.insert("a", 9_i64);
        assert_eq!(
            q.serialize(),
            vec![("a".into(), "9".into()), ("b".into(), "2".into())]
        );
    }

    #[test]
    fn caller_auth_key_is_replaced() {
        let q = QueryParams::new()
            .with(AUTH_PARAM, "attacker")
            .with("maxCount", 5_i64);
        let pairs = q.into_authenticated("secret");
        let auth: Vec<_> = pairs.iter().filter(|(n, _)| n == AUTH_PARAM).collect();
        assert_eq!(auth.len(), 1);
        assert_eq!(auth[0].1, "secret");
        assert_eq!(pairs.len(), 2);
    }
}
