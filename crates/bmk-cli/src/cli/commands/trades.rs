//! `bmk trades [MARKET]` – print recent public trades.

use anyhow::Result;
use bmk_core::api::PublicApi;

pub fn run_trades(host: &str, market: &str, since: Option<u64>) -> Result<()> {
    let trades = PublicApi::new(host).trades(market, since)?;
    if trades.is_empty() {
        println!("No trades returned.");
        return Ok(());
    }
    println!("{:<12} {:<6} {:<14} {:<14} {}", "TID", "TYPE", "AMOUNT", "PRICE", "DATE");
    for trade in &trades {
        println!(
            "{:<12} {:<6} {:<14} {:<14} {}",
            trade.tid, trade.kind, trade.amount, trade.price, trade.date
        );
    }
    Ok(())
}
