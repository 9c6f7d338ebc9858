use borsdata_core::models::{InstrumentReports, Report, ReportMetadata};
use borsdata_core::{BorsdataError, QueryParams, ReportType};

use super::{count_in_range, instrument_list, positive_count};
use crate::BorsdataClient;

/// Reports returned by [`BorsdataClient::reports`] when no count is given.
pub const DEFAULT_REPORT_COUNT: u32 = 10;
/// Upper bound for `maxYearCount` on the batch endpoint.
pub const MAX_YEAR_COUNT: u32 = 20;
/// Upper bound for `maxQuarterR12Count` on the batch endpoint.
pub const MAX_QUARTER_R12_COUNT: u32 = 40;

impl BorsdataClient {
    /// Financial reports of one granularity for one instrument.
    ///
    /// `original` asks for values in the company's reporting currency instead
    /// of SEK.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for `max_count == 0`; otherwise as for any other request.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "borsdata::endpoints", skip(self))
    )]
    pub async fn reports(
        &self,
        instrument_id: i64,
        report_type: ReportType,
        max_count: Option<u32>,
        original: bool,
    ) -> Result<Vec<Report>, BorsdataError> {
        let count = positive_count("maxCount", max_count.unwrap_or(DEFAULT_REPORT_COUNT))?;
        let params = QueryParams::new()
            .with("maxCount", count)
            .with("original", original);
        self.get_list(
            &format!("/instruments/{instrument_id}/reports/{report_type}"),
            params,
            "reports",
        )
        .await
    }

    /// Year, quarter and R12 reports for up to 50 instruments.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for an empty or oversized list,
    /// `max_year_count` outside `1..=20` or `max_quarter_r12_count` outside
    /// `1..=40`, all before any request is made.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "borsdata::endpoints",
            skip(self, instrument_ids),
            fields(instruments = instrument_ids.len()),
        )
    )]
    pub async fn reports_batch(
        &self,
        instrument_ids: &[i64],
        max_year_count: Option<u32>,
        max_quarter_r12_count: Option<u32>,
        original: bool,
    ) -> Result<Vec<InstrumentReports>, BorsdataError> {
        let inst_list = instrument_list(instrument_ids)?;
        let year = max_year_count
            .map(|v| count_in_range("maxYearCount", v, MAX_YEAR_COUNT))
            .transpose()?;
        let quarter = max_quarter_r12_count
            .map(|v| count_in_range("maxQuarterR12Count", v, MAX_QUARTER_R12_COUNT))
            .transpose()?;
        let params = QueryParams::new()
            .with("instList", inst_list)
            .with_opt("maxYearCount", year)
            .with_opt("maxQuarterR12Count", quarter)
            .with("original", original);
        self.get_list("/instruments/reports", params, "reportList")
            .await
    }

    borsdata_list_endpoint! {
        /// Names and formats of every report field.
        method: reports_metadata -> ReportMetadata,
        path: "/instruments/reports/metadata",
        envelope: "reportMetadatas"
    }
}
