//! `bmk graphs <INTERVAL> [MARKET]` – print OHLC graph points.

use anyhow::Result;
use bmk_core::api::PublicApi;

pub fn run_graphs(host: &str, market: &str, interval: &str) -> Result<()> {
    let graph = PublicApi::new(host).graphs(market, interval)?;
    println!("# {} {} ({} points)", graph.market, graph.interval, graph.points.len());
    println!(
        "{:<12} {:<12} {:<12} {:<12} {:<12} {}",
        "TIME", "OPEN", "HIGH", "LOW", "CLOSE", "VOL"
    );
    for point in &graph.points {
        println!(
            "{:<12} {:<12} {:<12} {:<12} {:<12} {}",
            point.time, point.open, point.high, point.low, point.close, point.vol
        );
    }
    Ok(())
}
