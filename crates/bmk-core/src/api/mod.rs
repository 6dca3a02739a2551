//! Typed access to the bitmarket.pl API.
//!
//! `public` covers the unauthenticated JSON endpoints, `private` the
//! HMAC-signed account commands.

mod private;
mod public;
pub mod sign;
mod types;

pub use private::PrivateApi;
pub use public::PublicApi;
pub use types::{Graph, GraphPoint, Order, OrderBook, Ticker, Trade};

use thiserror::Error;

use crate::request::RequestError;

/// Failure of an API call: the transfer itself, or the response not having
/// the documented shape.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("malformed API response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed numeric field {field}: {value:?}")]
    BadNumber {
        field: &'static str,
        value: String,
    },
}
