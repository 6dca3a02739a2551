//! Private API commands: each sends one signed command and pretty-prints
//! the JSON response.

use anyhow::Result;
use bmk_core::api::PrivateApi;
use serde_json::Value;

fn print_response(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `bmk info` – account balances and commissions.
pub fn run_info(api: &PrivateApi) -> Result<()> {
    print_response(&api.info()?)
}

/// `bmk trade <MARKET> <buy|sell> <AMOUNT> <RATE>` – submit an order.
pub fn run_trade(
    api: &PrivateApi,
    market: &str,
    kind: &str,
    amount: f64,
    rate: f64,
    all_or_nothing: bool,
) -> Result<()> {
    print_response(&api.trade(market, kind, amount, rate, all_or_nothing)?)
}

/// `bmk cancel <ID>` – cancel an order.
pub fn run_cancel(api: &PrivateApi, id: i64) -> Result<()> {
    print_response(&api.cancel(id)?)
}

/// `bmk orders <MARKET>` – own open orders.
pub fn run_orders(api: &PrivateApi, market: &str) -> Result<()> {
    print_response(&api.orders(market)?)
}

/// `bmk my-trades <MARKET>` – own trades.
pub fn run_my_trades(api: &PrivateApi, market: &str, count: u32, start: u32) -> Result<()> {
    print_response(&api.trades(market, count, start)?)
}

/// `bmk history <CURRENCY>` – account operation history.
pub fn run_history(api: &PrivateApi, currency: &str, count: u32, start: u32) -> Result<()> {
    print_response(&api.history(currency, count, start)?)
}
