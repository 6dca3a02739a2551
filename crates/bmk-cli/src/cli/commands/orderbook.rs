//! `bmk orderbook [MARKET]` – print the order book.

use anyhow::Result;
use bmk_core::api::PublicApi;

pub fn run_orderbook(host: &str, market: &str) -> Result<()> {
    let book = PublicApi::new(host).orderbook(market)?;
    println!("{:<6} {:<16} {}", "SIDE", "RATE", "AMOUNT");
    for order in &book.asks {
        println!("{:<6} {:<16} {}", "ask", order.rate, order.amount);
    }
    for order in &book.bids {
        println!("{:<6} {:<16} {}", "bid", order.rate, order.amount);
    }
    Ok(())
}
