use borsdata_core::models::{
    KpiAllResponse, KpiCalcUpdated, KpiHistoryBatchResponse, KpiHistoryResponse,
    KpiInstrumentResponse, KpiMetadata, KpiSummary,
};
use borsdata_core::{BorsdataError, PriceType, QueryParams, ReportType};

use super::{instrument_list, path_segment, positive_count};
use crate::BorsdataClient;

impl BorsdataClient {
    borsdata_list_endpoint! {
        /// Names, formats and kinds of every KPI.
        method: kpi_metadata -> KpiMetadata,
        path: "/instruments/kpis/metadata",
        envelope: "kpiHistoryMetadatas"
    }

    /// When the KPI screener values were last recalculated.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body does not match the expected shape.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "borsdata::endpoints", skip(self))
    )]
    pub async fn kpi_updated(&self) -> Result<KpiCalcUpdated, BorsdataError> {
        self.get("/instruments/kpis/updated", QueryParams::new())
            .await
    }

    /// History of one KPI for one instrument.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for `max_count == Some(0)`; otherwise as for any other request.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "borsdata::endpoints", skip(self))
    )]
    pub async fn kpi_history(
        &self,
        instrument_id: i64,
        kpi_id: i64,
        report_type: ReportType,
        price_type: PriceType,
        max_count: Option<u32>,
    ) -> Result<KpiHistoryResponse, BorsdataError> {
        let count = max_count
            .map(|v| positive_count("maxCount", v))
            .transpose()?;
        let params = QueryParams::new().with_opt("maxCount", count);
        self.get(
            &format!(
                "/instruments/{instrument_id}/kpis/{kpi_id}/{report_type}/{price_type}/history"
            ),
            params,
        )
        .await
    }

    /// History of one KPI for up to 50 instruments.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for an empty or oversized list or
    /// `max_count == Some(0)`, before any request is made.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "borsdata::endpoints",
            skip(self, instrument_ids),
            fields(instruments = instrument_ids.len()),
        )
    )]
    pub async fn kpi_history_batch(
        &self,
        instrument_ids: &[i64],
        kpi_id: i64,
        report_type: ReportType,
        price_type: PriceType,
        max_count: Option<u32>,
    ) -> Result<KpiHistoryBatchResponse, BorsdataError> {
        let inst_list = instrument_list(instrument_ids)?;
        let count = max_count
            .map(|v| positive_count("maxCount", v))
            .transpose()?;
        let params = QueryParams::new()
            .with("instList", inst_list)
            .with_opt("maxCount", count);
        self.get(
            &format!("/instruments/kpis/{kpi_id}/{report_type}/{price_type}/history"),
            params,
        )
        .await
    }

    /// History of every KPI for one instrument.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for `max_count == Some(0)`; otherwise as for any other request.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "borsdata::endpoints", skip(self))
    )]
    pub async fn kpi_summary(
        &self,
        instrument_id: i64,
        report_type: ReportType,
        max_count: Option<u32>,
    ) -> Result<KpiSummary, BorsdataError> {
        let count = max_count
            .map(|v| positive_count("maxCount", v))
            .transpose()?;
        let params = QueryParams::new().with_opt("maxCount", count);
        self.get(
            &format!("/instruments/{instrument_id}/kpis/{report_type}/summary"),
            params,
        )
        .await
    }

    /// Screener value of one KPI for every instrument.
    ///
    /// `calc_group` is the period (`1year`, `3year`, `last`, ...) and `calc`
    /// the aggregation (`mean`, `latest`, `cagr`, ...), as listed by the API.
    ///
    /// # Errors
    /// Returns `InvalidArgument` when `calc_group` or `calc` is not a plain path segment.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "borsdata::endpoints", skip(self))
    )]
    pub async fn kpi_screener(
        &self,
        kpi_id: i64,
        calc_group: &str,
        calc: &str,
    ) -> Result<KpiAllResponse, BorsdataError> {
        let group = path_segment("calc_group", calc_group)?;
        let calc = path_segment("calc", calc)?;
        self.get(
            &format!("/instruments/kpis/{kpi_id}/{group}/{calc}"),
            QueryParams::new(),
        )
        .await
    }

    /// Screener value of one KPI for one instrument.
    ///
    /// # Errors
    /// Returns `InvalidArgument` when `calc_group` or `calc` is not a plain path segment.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "borsdata::endpoints", skip(self))
    )]
    pub async fn kpi_screener_instrument(
        &self,
        instrument_id: i64,
        kpi_id: i64,
        calc_group: &str,
        calc: &str,
    ) -> Result<KpiInstrumentResponse, BorsdataError> {
        let group = path_segment("calc_group", calc_group)?;
        let calc = path_segment("calc", calc)?;
        self.get(
            &format!("/instruments/{instrument_id}/kpis/{kpi_id}/{group}/{calc}"),
            QueryParams::new(),
        )
        .await
    }
}
