//! Public (unauthenticated) API endpoints.

use super::types::RawGraphPoint;
use super::{ApiError, Graph, GraphPoint, OrderBook, Ticker, Trade};
use crate::request::{self, Request};

/// Client for the public JSON endpoints of the exchange.
pub struct PublicApi {
    base_url: String,
}

impl PublicApi {
    /// Client for an HTTPS host, e.g. `www.bitmarket.pl`.
    pub fn new(host: &str) -> Self {
        Self::with_base_url(format!("https://{}", host))
    }

    /// Client for an explicit base URL (scheme included); used by tests.
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn fetch(&self, path: &str) -> Result<String, ApiError> {
        let body = request::perform(&self.base_url, &Request::get(path))?;
        Ok(request::decode(body)?)
    }

    /// Current ticker for a market (e.g. "BTCPLN").
    pub fn ticker(&self, market: &str) -> Result<Ticker, ApiError> {
        let text = self.fetch(&format!("/json/{}/ticker.json", market))?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Full order book for a market.
    pub fn orderbook(&self, market: &str) -> Result<OrderBook, ApiError> {
        let text = self.fetch(&format!("/json/{}/orderbook.json", market))?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Recent trades. With `since` set, the 500 trades following that
    /// transaction id; otherwise the trades of the last hour.
    pub fn trades(&self, market: &str, since: Option<u64>) -> Result<Vec<Trade>, ApiError> {
        let path = match since {
            Some(tid) => format!("/json/{}/trades.json?since={}", market, tid),
            None => format!("/json/{}/trades.json", market),
        };
        let text = self.fetch(&path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// OHLC graph points for a market and interval (one of 90m, 6h, 1d,
    /// 7d, 1m, 3m, 6m, 1y; passed through unvalidated).
    pub fn graphs(&self, market: &str, interval: &str) -> Result<Graph, ApiError> {
        let text = self.fetch(&format!("/graphs/{}/{}.json", market, interval))?;
        let raw: Vec<RawGraphPoint> = serde_json::from_str(&text)?;
        let points = raw
            .into_iter()
            .map(GraphPoint::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Graph {
            market: market.to_string(),
            interval: interval.to_string(),
            points,
        })
    }
}
