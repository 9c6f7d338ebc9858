//! Request vocabulary shared by endpoint methods and the tool server.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BorsdataError;

/// Maximum number of instrument ids accepted by any batch endpoint.
pub const MAX_BATCH_INSTRUMENTS: usize = 50;

/// Report period granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    /// Full fiscal years.
    #[default]
    Year,
    /// Rolling twelve months.
    R12,
    /// Single quarters.
    Quarter,
}

impl ReportType {
    /// Path segment used by the API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::R12 => "r12",
            Self::Quarter => "quarter",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = BorsdataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "year" => Ok(Self::Year),
            "r12" => Ok(Self::R12),
            "quarter" => Ok(Self::Quarter),
            other => Err(BorsdataError::invalid_argument(format!(
                "unknown report type '{other}' (expected year, r12 or quarter)"
            ))),
        }
    }
}

/// Stock price used when a KPI depends on the share price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    /// Mean price over the period.
    #[default]
    Mean,
    /// Highest price over the period.
    High,
    /// Lowest price over the period.
    Low,
}

impl PriceType {
    /// Path segment used by the API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::High => "high",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for PriceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceType {
    type Err = BorsdataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" => Ok(Self::Mean),
            "high" => Ok(Self::High),
            "low" => Ok(Self::Low),
            other => Err(BorsdataError::invalid_argument(format!(
                "unknown price type '{other}' (expected mean, high or low)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_type_parses_case_insensitively() {
        assert_eq!("R12".parse::<ReportType>().unwrap(), ReportType::R12);
        assert_eq!(" quarter ".parse::<ReportType>().unwrap(), ReportType::Quarter);
        assert!(matches!(
            "monthly".parse::<ReportType>(),
            Err(BorsdataError::InvalidArgument(_))
        ));
    }

    #[test]
    fn price_type_path_segments() {
        assert_eq!(PriceType::Mean.to_string(), "mean");
        assert_eq!("LOW".parse::<PriceType>().unwrap(), PriceType::Low);
    }
}
