//! Private (authenticated) API commands.
//!
//! Every command is a url-encoded `method=<m>&tonce=<unix-seconds>&...`
//! payload POSTed to `/api2/`, authenticated by the `API-Key` header and an
//! `API-Hash` header carrying the HMAC-SHA512 of the exact payload.

use serde_json::Value;
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use super::sign;
use super::ApiError;
use crate::request::{self, Request};

const COMMAND_PATH: &str = "/api2/";

/// Client for the signed account commands of the exchange.
pub struct PrivateApi {
    base_url: String,
    public_key: String,
    secret_key: String,
}

impl PrivateApi {
    /// Client for an HTTPS host, e.g. `www.bitmarket.pl`.
    pub fn new(host: &str, public_key: &str, secret_key: &str) -> Self {
        Self::with_base_url(format!("https://{}", host), public_key, secret_key)
    }

    /// Client for an explicit base URL (scheme included); used by tests.
    pub fn with_base_url(base_url: String, public_key: &str, secret_key: &str) -> Self {
        Self {
            base_url,
            public_key: public_key.to_string(),
            secret_key: secret_key.to_string(),
        }
    }

    /// Sends a custom command. Arguments are appended to the payload in the
    /// given order; the response is returned as raw JSON.
    pub fn command(&self, method: &str, args: &[(&str, String)]) -> Result<Value, ApiError> {
        let payload = build_payload(method, args, unix_tonce());

        let mut headers = HashMap::new();
        headers.insert("API-Key".to_string(), self.public_key.clone());
        headers.insert(
            "API-Hash".to_string(),
            sign::hmac_sha512_hex(&self.secret_key, &payload),
        );

        let req = Request::post(COMMAND_PATH, &payload, headers);
        let body = request::perform(&self.base_url, &req)?;
        let text = request::decode(body)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Account information: balances, commissions, deposit data.
    pub fn info(&self) -> Result<Value, ApiError> {
        self.command("info", &[])
    }

    /// Submits an order. `kind` is "buy"/"bid" or "sell"/"ask"; with
    /// `all_or_nothing` the order must be fulfilled completely or fails.
    pub fn trade(
        &self,
        market: &str,
        kind: &str,
        amount: f64,
        rate: f64,
        all_or_nothing: bool,
    ) -> Result<Value, ApiError> {
        self.command(
            "trade",
            &[
                ("market", market.to_string()),
                ("type", kind.to_string()),
                ("amount", amount.to_string()),
                ("rate", rate.to_string()),
                (
                    "allOrNothing",
                    String::from(if all_or_nothing { "1" } else { "0" }),
                ),
            ],
        )
    }

    /// Cancels an order by id.
    pub fn cancel(&self, id: i64) -> Result<Value, ApiError> {
        self.command("cancel", &[("id", id.to_string())])
    }

    /// Lists the account's open orders on a market.
    pub fn orders(&self, market: &str) -> Result<Value, ApiError> {
        self.command("orders", &[("market", market.to_string())])
    }

    /// Lists the account's trades on a market, `count` entries starting at
    /// zero-based `start`.
    pub fn trades(&self, market: &str, count: u32, start: u32) -> Result<Value, ApiError> {
        self.command(
            "trades",
            &[
                ("market", market.to_string()),
                ("count", count.to_string()),
                ("start", start.to_string()),
            ],
        )
    }

    /// History of account operations in a currency, `count` entries
    /// starting at zero-based `start`.
    pub fn history(&self, currency: &str, count: u32, start: u32) -> Result<Value, ApiError> {
        self.command(
            "history",
            &[
                ("currency", currency.to_string()),
                ("count", count.to_string()),
                ("start", start.to_string()),
            ],
        )
    }
}

/// Url-encoded command payload: `method=<m>&tonce=<t>` plus each argument.
fn build_payload(method: &str, args: &[(&str, String)], tonce: u64) -> String {
    let mut payload = format!("method={}&tonce={}", method, tonce);
    for (key, value) in args {
        payload.push('&');
        payload.push_str(key);
        payload.push('=');
        payload.push_str(value);
    }
    payload
}

/// Seconds since the Unix epoch; a pre-epoch clock degrades to 0.
fn unix_tonce() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_without_args() {
        assert_eq!(build_payload("info", &[], 1546300800), "method=info&tonce=1546300800");
    }

    #[test]
    fn payload_appends_args_in_order() {
        let args = [
            ("market", "BTCPLN".to_string()),
            ("type", "buy".to_string()),
            ("amount", "0.5".to_string()),
            ("rate", "15000".to_string()),
            ("allOrNothing", "0".to_string()),
        ];
        assert_eq!(
            build_payload("trade", &args, 42),
            "method=trade&tonce=42&market=BTCPLN&type=buy&amount=0.5&rate=15000&allOrNothing=0"
        );
    }

    #[test]
    fn tonce_is_plausible() {
        // 2020-01-01 as a lower bound; fails only on a badly broken clock.
        assert!(unix_tonce() > 1_577_836_800);
    }
}
