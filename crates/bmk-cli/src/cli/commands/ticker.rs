//! `bmk ticker [MARKET]` – print the current ticker.

use anyhow::Result;
use bmk_core::api::PublicApi;

pub fn run_ticker(host: &str, market: &str) -> Result<()> {
    let ticker = PublicApi::new(host).ticker(market)?;
    println!("{:<8} {}", "ask", ticker.ask);
    println!("{:<8} {}", "bid", ticker.bid);
    println!("{:<8} {}", "last", ticker.last);
    println!("{:<8} {}", "low", ticker.low);
    println!("{:<8} {}", "high", ticker.high);
    println!("{:<8} {}", "vwap", ticker.vwap);
    println!("{:<8} {}", "volume", ticker.volume);
    Ok(())
}
