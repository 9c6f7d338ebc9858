use borsdata_core::models::{InstrumentStockPrices, StockPrice, StockPriceLast, StockSplit};
use borsdata_core::{BorsdataError, QueryParams};
use chrono::NaiveDate;

use super::{instrument_list, positive_count};
use crate::BorsdataClient;

/// Rows returned by [`BorsdataClient::stock_prices`] when no count is given.
pub const DEFAULT_PRICE_COUNT: u32 = 20;

impl BorsdataClient {
    /// Daily prices for one instrument, newest first.
    ///
    /// `max_count` defaults to [`DEFAULT_PRICE_COUNT`]; the API applies it
    /// after the `from`/`to` window.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for `max_count == 0`; otherwise as for any other request.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "borsdata::endpoints", skip(self))
    )]
    pub async fn stock_prices(
        &self,
        instrument_id: i64,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        max_count: Option<u32>,
    ) -> Result<Vec<StockPrice>, BorsdataError> {
        let count = positive_count("maxCount", max_count.unwrap_or(DEFAULT_PRICE_COUNT))?;
        let params = QueryParams::new()
            .with_opt("from", from)
            .with_opt("to", to)
            .with("maxCount", count);
        self.get_list(
            &format!("/instruments/{instrument_id}/stockprices"),
            params,
            "stockPricesList",
        )
        .await
    }

    /// Daily prices for up to 50 instruments in one call.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for an empty list or more than 50 ids.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "borsdata::endpoints",
            skip(self, instrument_ids),
            fields(instruments = instrument_ids.len()),
        )
    )]
    pub async fn stock_prices_batch(
        &self,
        instrument_ids: &[i64],
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<InstrumentStockPrices>, BorsdataError> {
        let params = QueryParams::new()
            .with("instList", instrument_list(instrument_ids)?)
            .with_opt("from", from)
            .with_opt("to", to);
        self.get_list("/instruments/stockprices", params, "stockPricesArrayList")
            .await
    }

    borsdata_list_endpoint! {
        /// Latest price row for every Nordic instrument.
        method: last_stock_prices -> StockPriceLast,
        path: "/instruments/stockprices/last",
        envelope: "stockPricesList"
    }

    borsdata_list_endpoint! {
        /// Latest price row for every global instrument.
        method: last_global_stock_prices -> StockPriceLast,
        path: "/instruments/stockprices/global/last",
        envelope: "stockPricesList"
    }

    /// Price row for every Nordic instrument on `date`.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body does not match the expected shape.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "borsdata::endpoints", skip(self))
    )]
    pub async fn stock_prices_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<StockPriceLast>, BorsdataError> {
        let params = QueryParams::new().with("date", date);
        self.get_list("/instruments/stockprices/date", params, "stockPricesList")
            .await
    }

    /// Price row for every global instrument on `date`.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body does not match the expected shape.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "borsdata::endpoints", skip(self))
    )]
    pub async fn global_stock_prices_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<StockPriceLast>, BorsdataError> {
        let params = QueryParams::new().with("date", date);
        self.get_list(
            "/instruments/stockprices/global/date",
            params,
            "stockPricesList",
        )
        .await
    }

    /// Stock splits, optionally only those on or after `from`.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body does not match the expected shape.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "borsdata::endpoints", skip(self))
    )]
    pub async fn stock_splits(
        &self,
        from: Option<NaiveDate>,
    ) -> Result<Vec<StockSplit>, BorsdataError> {
        let params = QueryParams::new().with_opt("from", from);
        self.get_list("/instruments/stocksplits", params, "stockSplits")
            .await
    }
}
