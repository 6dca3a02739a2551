//! Data shapes of the public API responses.

use serde::Deserialize;

use super::ApiError;

/// Market ticker, from `/json/{market}/ticker.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    pub ask: f64,
    pub bid: f64,
    pub last: f64,
    pub low: f64,
    pub high: f64,
    pub vwap: f64,
    pub volume: f64,
}

/// One order book entry; the API encodes it as a `[rate, amount]` pair.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(from = "(f64, f64)")]
pub struct Order {
    pub rate: f64,
    pub amount: f64,
}

impl From<(f64, f64)> for Order {
    fn from((rate, amount): (f64, f64)) -> Self {
        Self { rate, amount }
    }
}

/// Order book, from `/json/{market}/orderbook.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBook {
    pub asks: Vec<Order>,
    pub bids: Vec<Order>,
}

/// One public trade, from `/json/{market}/trades.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Trade {
    pub amount: f64,
    pub price: f64,
    /// Seconds since the Unix epoch.
    pub date: i64,
    /// Transaction id.
    pub tid: i64,
    /// "buy" or "sell".
    #[serde(rename = "type")]
    pub kind: String,
}

/// OHLC series for one market and interval, from
/// `/graphs/{market}/{interval}.json`.
#[derive(Debug, Clone)]
pub struct Graph {
    pub market: String,
    pub interval: String,
    pub points: Vec<GraphPoint>,
}

#[derive(Debug, Clone, Copy)]
pub struct GraphPoint {
    /// Seconds since the Unix epoch.
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub vol: f64,
}

/// Graph point as the API sends it: OHLC values are JSON strings.
#[derive(Debug, Deserialize)]
pub(super) struct RawGraphPoint {
    pub time: i64,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub vol: String,
}

fn parse_f64(field: &'static str, value: &str) -> Result<f64, ApiError> {
    value.parse::<f64>().map_err(|_| ApiError::BadNumber {
        field,
        value: value.to_string(),
    })
}

impl TryFrom<RawGraphPoint> for GraphPoint {
    type Error = ApiError;

    fn try_from(raw: RawGraphPoint) -> Result<Self, ApiError> {
        Ok(Self {
            time: raw.time,
            open: parse_f64("open", &raw.open)?,
            high: parse_f64("high", &raw.high)?,
            low: parse_f64("low", &raw.low)?,
            close: parse_f64("close", &raw.close)?,
            vol: parse_f64("vol", &raw.vol)?,
        })
    }
}
