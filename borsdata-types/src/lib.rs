//! Borsdata-specific data transfer objects, the client error taxonomy and
//! configuration primitives.
//!
//! Every record in [`models`] is deserialized straight from the JSON the
//! Borsdata API returns. The wire-to-Rust name translation for each record
//! lives on the struct itself as serde `rename` rules, so the mapping is
//! checked at compile time and serialization emits canonical snake_case keys.
#![warn(missing_docs)]

mod config;
mod error;
pub mod models;
mod request;

pub use config::{API_KEY_ENV, BackoffConfig, ClientConfig, DEFAULT_BASE_URL};
pub use error::BorsdataError;
pub use request::{MAX_BATCH_INSTRUMENTS, PriceType, ReportType};
