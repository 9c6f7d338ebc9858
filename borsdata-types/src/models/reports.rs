//! Financial statements.
//!
//! The report endpoints use a one-off casing (`operating_Income`,
//! `cash_Flow_For_The_Year`) that no serde rule produces, so every field
//! below lists its wire name explicitly.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::batch::{BatchEntry, embedded_error};

/// One financial report (year, rolling twelve months or quarter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Fiscal year.
    pub year: i32,
    /// Period within the year (0 for full-year reports).
    pub period: i32,
    /// Revenues.
    pub revenues: Option<f64>,
    /// Gross income.
    #[serde(rename(deserialize = "gross_Income"))]
    pub gross_income: Option<f64>,
    /// Operating income (EBIT).
    #[serde(rename(deserialize = "operating_Income"))]
    pub operating_income: Option<f64>,
    /// Profit before tax.
    #[serde(rename(deserialize = "profit_Before_Tax"))]
    pub profit_before_tax: Option<f64>,
    /// Profit attributable to equity holders.
    #[serde(rename(deserialize = "profit_To_Equity_Holders"))]
    pub profit_to_equity_holders: Option<f64>,
    /// Earnings per share.
    #[serde(rename(deserialize = "earnings_Per_Share"))]
    pub earnings_per_share: Option<f64>,
    /// Number of shares outstanding.
    #[serde(rename(deserialize = "number_Of_Shares"))]
    pub number_of_shares: Option<f64>,
    /// Dividend per share.
    pub dividend: Option<f64>,
    /// Intangible assets.
    #[serde(rename(deserialize = "intangible_Assets"))]
    pub intangible_assets: Option<f64>,
    /// Tangible assets.
    #[serde(rename(deserialize = "tangible_Assets"))]
    pub tangible_assets: Option<f64>,
    /// Financial assets.
    #[serde(rename(deserialize = "financial_Assets"))]
    pub financial_assets: Option<f64>,
    /// Non-current assets.
    #[serde(rename(deserialize = "non_Current_Assets"))]
    pub non_current_assets: Option<f64>,
    /// Cash and equivalents.
    #[serde(rename(deserialize = "cash_And_Equivalents"))]
    pub cash_and_equivalents: Option<f64>,
    /// Current assets.
    #[serde(rename(deserialize = "current_Assets"))]
    pub current_assets: Option<f64>,
    /// Total assets.
    #[serde(rename(deserialize = "total_Assets"))]
    pub total_assets: Option<f64>,
    /// Total equity.
    #[serde(rename(deserialize = "total_Equity"))]
    pub total_equity: Option<f64>,
    /// Non-current liabilities.
    #[serde(rename(deserialize = "non_Current_Liabilities"))]
    pub non_current_liabilities: Option<f64>,
    /// Current liabilities.
    #[serde(rename(deserialize = "current_Liabilities"))]
    pub current_liabilities: Option<f64>,
    /// Total liabilities and equity.
    #[serde(rename(deserialize = "total_Liabilities_And_Equity"))]
    pub total_liabilities_and_equity: Option<f64>,
    /// Net debt.
    #[serde(rename(deserialize = "net_Debt"))]
    pub net_debt: Option<f64>,
    /// Cash flow from operating activities.
    #[serde(rename(deserialize = "cash_Flow_From_Operating_Activities"))]
    pub cash_flow_from_operating_activities: Option<f64>,
    /// Cash flow from investing activities.
    #[serde(rename(deserialize = "cash_Flow_From_Investing_Activities"))]
    pub cash_flow_from_investing_activities: Option<f64>,
    /// Cash flow from financing activities.
    #[serde(rename(deserialize = "cash_Flow_From_Financing_Activities"))]
    pub cash_flow_from_financing_activities: Option<f64>,
    /// Total cash flow for the period.
    #[serde(rename(deserialize = "cash_Flow_For_The_Year"))]
    pub cash_flow_for_the_year: Option<f64>,
    /// Free cash flow.
    #[serde(rename(deserialize = "free_Cash_Flow"))]
    pub free_cash_flow: Option<f64>,
    /// Average stock price over the period.
    #[serde(rename(deserialize = "stock_Price_Average"))]
    pub stock_price_average: Option<f64>,
    /// Highest stock price over the period.
    #[serde(rename(deserialize = "stock_Price_High"))]
    pub stock_price_high: Option<f64>,
    /// Lowest stock price over the period.
    #[serde(rename(deserialize = "stock_Price_Low"))]
    pub stock_price_low: Option<f64>,
    /// First day covered by the report.
    #[serde(
        default,
        rename(deserialize = "report_Start_Date"),
        with = "super::date::option"
    )]
    pub report_start_date: Option<NaiveDateTime>,
    /// Last day covered by the report.
    #[serde(
        default,
        rename(deserialize = "report_End_Date"),
        with = "super::date::option"
    )]
    pub report_end_date: Option<NaiveDateTime>,
    /// Whether the company uses a broken fiscal year.
    #[serde(rename(deserialize = "broken_Fiscal_Year"))]
    pub broken_fiscal_year: Option<bool>,
    /// Report currency.
    pub currency: Option<String>,
    /// Conversion ratio applied to reach `currency`.
    #[serde(rename(deserialize = "currency_Ratio"))]
    pub currency_ratio: Option<f64>,
    /// Net sales.
    #[serde(rename(deserialize = "net_Sales"))]
    pub net_sales: Option<f64>,
    /// Publication date.
    #[serde(
        default,
        rename(deserialize = "report_Date"),
        with = "super::date::option"
    )]
    pub report_date: Option<NaiveDateTime>,
}

/// Per-instrument entry of the batch report endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct InstrumentReports {
    /// Instrument id.
    pub instrument: i64,
    error: Option<String>,
    reports_year: Option<Vec<Report>>,
    reports_quarter: Option<Vec<Report>>,
    reports_r12: Option<Vec<Report>>,
}

impl InstrumentReports {
    /// Build an entry directly; mostly useful for tests and fixtures.
    #[must_use]
    pub const fn new(
        instrument: i64,
        reports_year: Option<Vec<Report>>,
        reports_quarter: Option<Vec<Report>>,
        reports_r12: Option<Vec<Report>>,
        error: Option<String>,
    ) -> Self {
        Self {
            instrument,
            error,
            reports_year,
            reports_quarter,
            reports_r12,
        }
    }

    fn guarded<'a>(&self, reports: Option<&'a Vec<Report>>) -> Option<&'a [Report]> {
        if self.is_error() {
            return None;
        }
        reports.map(Vec::as_slice)
    }

    /// Full-year reports.
    #[must_use]
    pub fn year(&self) -> Option<&[Report]> {
        self.guarded(self.reports_year.as_ref())
    }

    /// Quarterly reports.
    #[must_use]
    pub fn quarter(&self) -> Option<&[Report]> {
        self.guarded(self.reports_quarter.as_ref())
    }

    /// Rolling twelve-month reports.
    #[must_use]
    pub fn r12(&self) -> Option<&[Report]> {
        self.guarded(self.reports_r12.as_ref())
    }
}

impl BatchEntry for InstrumentReports {
    fn instrument_id(&self) -> i64 {
        self.instrument
    }

    fn error(&self) -> Option<&str> {
        embedded_error(self.error.as_ref())
    }
}

/// Describes one report field (name, translations and display format).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ReportMetadata {
    /// Report field name. The API spells the key `reportPropery`.
    #[serde(rename(deserialize = "reportPropery"), alias = "reportProperty")]
    pub report_property: Option<String>,
    /// Swedish name.
    pub name_sv: Option<String>,
    /// English name.
    pub name_en: Option<String>,
    /// Display format hint.
    pub format: Option<String>,
}
