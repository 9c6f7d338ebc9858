//! Typed async client for the Borsdata REST API.
//!
//! Overview
//! - One method per remote endpoint on [`BorsdataClient`], each returning
//!   records from [`models`].
//! - Every call goes through a single request core that injects the API key,
//!   serializes query parameters and translates failures into [`BorsdataError`].
//! - HTTP 429 responses are retried with capped exponential backoff and jitter
//!   (five attempts by default). Other failures surface immediately.
//!
//! Key behaviors and trade-offs
//! - Batch endpoints accept at most 50 instrument ids and reject empty lists
//!   before any request is made.
//! - Batch responses may carry a per-instrument `error`; such entries keep the
//!   instrument id but expose no values (see [`models::BatchEntry`]).
//! - Transport failures are not retried unless
//!   [`BorsdataClientBuilder::retry_transport_errors`] is enabled, in which case
//!   they share the attempt budget with 429s.
//! - No caching and no local state beyond the pooled HTTP client.
//!
//! Example
//! ```rust,ignore
//! use borsdata::{BorsdataClient, ReportType};
//!
//! let client = BorsdataClient::from_env()?;
//! let branches = client.branches().await?;
//! let reports = client.reports(3, ReportType::Year, None, false).await?;
//! for entry in client.stock_prices_batch(&[3, 750], None, None).await? {
//!     match entry.prices() {
//!         Some(rows) => println!("{}: {} rows", entry.instrument, rows.len()),
//!         None => eprintln!("{} failed", entry.instrument),
//!     }
//! }
//! ```
#![warn(missing_docs)]

#[macro_use]
mod macros;

/// Retry delay computation and the Tokio-backed sleeper.
pub mod backoff;
mod core;
mod endpoints;
/// Default `reqwest` transport.
pub mod transport;

pub use crate::backoff::TokioSleeper;
pub use crate::core::{BorsdataClient, BorsdataClientBuilder};
pub use crate::endpoints::{
    DEFAULT_PRICE_COUNT, DEFAULT_REPORT_COUNT, MAX_QUARTER_R12_COUNT, MAX_YEAR_COUNT,
};
pub use crate::transport::ReqwestTransport;

pub use borsdata_core::{
    API_KEY_ENV, AUTH_PARAM, BackoffConfig, BorsdataError, ClientConfig, DEFAULT_BASE_URL,
    HttpTransport, MAX_BATCH_INSTRUMENTS, PriceType, QueryParams, QueryValue, RawResponse,
    ReportType, Sleeper, models,
};
