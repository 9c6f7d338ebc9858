//! borsdata-core
//!
//! Seams and request vocabulary shared by the Borsdata client and its test
//! doubles.
//!
//! - `transport`: the [`HttpTransport`] trait a client issues every GET through,
//!   and the [`RawResponse`] it gets back.
//! - `sleep`: the [`Sleeper`] trait used for the delay between retries.
//! - `params`: [`QueryParams`], the ordered query-parameter mapping and its
//!   wire serialization.
//!
//! Keeping these here lets `borsdata-mock` implement the seams without
//! depending on the client crate itself.
#![warn(missing_docs)]

/// Query-parameter mapping and its wire encoding.
pub mod params;
/// Delay seam used between retry attempts.
pub mod sleep;
/// HTTP seam and raw response type.
pub mod transport;

pub use borsdata_types::*;
pub use params::{AUTH_PARAM, QueryParams, QueryValue};
pub use sleep::Sleeper;
pub use transport::{HttpTransport, RawResponse};
