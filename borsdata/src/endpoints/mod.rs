//! One async method per remote operation, grouped by API area.
//!
//! Argument validation lives here and only here: the request core sends
//! whatever it is given.

mod calendar;
mod holdings;
mod kpis;
mod prices;
mod reference;
mod reports;

use borsdata_core::{BorsdataError, MAX_BATCH_INSTRUMENTS, QueryValue};

pub use prices::DEFAULT_PRICE_COUNT;
pub use reports::{DEFAULT_REPORT_COUNT, MAX_QUARTER_R12_COUNT, MAX_YEAR_COUNT};

/// Validate a batch instrument list and encode it as an `instList` value.
pub(crate) fn instrument_list(ids: &[i64]) -> Result<QueryValue, BorsdataError> {
    if ids.is_empty() {
        return Err(BorsdataError::invalid_argument(
            "instrument list must not be empty",
        ));
    }
    if ids.len() > MAX_BATCH_INSTRUMENTS {
        return Err(BorsdataError::invalid_argument(format!(
            "at most {MAX_BATCH_INSTRUMENTS} instruments per request, got {}",
            ids.len()
        )));
    }
    Ok(QueryValue::from(ids))
}

/// Reject counts outside `1..=max`.
pub(crate) fn count_in_range(name: &str, value: u32, max: u32) -> Result<u32, BorsdataError> {
    if value == 0 || value > max {
        return Err(BorsdataError::invalid_argument(format!(
            "{name} must be within 1..={max}, got {value}"
        )));
    }
    Ok(value)
}

/// Reject zero counts.
pub(crate) fn positive_count(name: &str, value: u32) -> Result<u32, BorsdataError> {
    count_in_range(name, value, u32::MAX)
}

/// Accept a free-form value only if it is safe to splice into a URL path.
pub(crate) fn path_segment<'a>(name: &str, value: &'a str) -> Result<&'a str, BorsdataError> {
    let trimmed = value.trim();
    let ok = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(trimmed)
    } else {
        Err(BorsdataError::invalid_argument(format!(
            "{name} must be a non-empty alphanumeric path segment, got '{value}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instrument_list_bounds() {
        assert!(instrument_list(&[]).is_err());
        assert!(instrument_list(&[1; 50]).is_ok());
        let err = instrument_list(&[1; 51]).unwrap_err();
        assert!(matches!(err, BorsdataError::InvalidArgument(_)));
        assert_eq!(instrument_list(&[3, 750]).unwrap().render(), "3,750");
    }

    #[test]
    fn counts() {
        assert!(count_in_range("maxYearCount", 20, 20).is_ok());
        assert!(count_in_range("maxYearCount", 21, 20).is_err());
        assert!(positive_count("maxCount", 0).is_err());
        assert_eq!(positive_count("maxCount", 7).unwrap(), 7);
    }

    #[test]
    fn segments() {
        assert_eq!(path_segment("calc", " latest ").unwrap(), "latest");
        assert_eq!(path_segment("group", "1year").unwrap(), "1year");
        assert!(path_segment("group", "../x").is_err());
        assert!(path_segment("group", "").is_err());
        assert!(path_segment("group", "a b").is_err());
    }
}
