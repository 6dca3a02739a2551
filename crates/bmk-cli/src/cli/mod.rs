//! CLI for the bmk exchange API client.
//!
//! The bare positional form (`bmk <path> [<body> <headers>]`) is the raw
//! request dispatcher; subcommands cover the typed public and private API.

mod commands;

use anyhow::{bail, Result};
use bmk_core::api::PrivateApi;
use bmk_core::config::{self, BmkConfig};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{
    run_cancel, run_graphs, run_history, run_info, run_my_trades, run_orderbook, run_orders,
    run_request, run_ticker, run_trade, run_trades,
};

/// Top-level CLI for the bmk exchange API client.
#[derive(Debug, Parser)]
#[command(name = "bmk")]
#[command(about = "bmk: command-line client for the bitmarket.pl exchange API", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Resource path on the API host, e.g. "/json/BTCPLN/ticker.json".
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// POST body, sent verbatim. Must be given together with HEADERS.
    #[arg(value_name = "BODY", requires = "headers")]
    pub body: Option<String>,

    /// POST headers encoded as key1=value1&key2=value2.
    #[arg(value_name = "HEADERS")]
    pub headers: Option<String>,

    /// Override the API host from the config file.
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Override the capture file path from the config file.
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the current ticker for a market.
    Ticker {
        /// Market, e.g. BTCPLN, BTCEUR, LTCPLN, LTCBTC.
        #[arg(default_value = "BTCPLN")]
        market: String,
    },

    /// Print the order book for a market.
    Orderbook {
        #[arg(default_value = "BTCPLN")]
        market: String,
    },

    /// Print recent public trades for a market.
    Trades {
        #[arg(default_value = "BTCPLN")]
        market: String,

        /// Print the 500 trades following this transaction id instead of
        /// the last hour.
        #[arg(long)]
        since: Option<u64>,
    },

    /// Print OHLC graph points for a market and interval.
    Graphs {
        /// Interval: one of 90m, 6h, 1d, 7d, 1m, 3m, 6m, 1y.
        interval: String,

        #[arg(default_value = "BTCPLN")]
        market: String,
    },

    /// Print account information (private API).
    Info,

    /// Submit an order (private API).
    Trade {
        /// Market, e.g. BTCPLN.
        market: String,

        /// Order type: buy or sell.
        kind: String,

        /// Order amount in cryptocurrency.
        amount: f64,

        /// Exchange rate.
        rate: f64,

        /// Require the order to be fulfilled completely or fail.
        #[arg(long)]
        all_or_nothing: bool,
    },

    /// Cancel an order by id (private API).
    Cancel {
        /// Market order identifier.
        id: i64,
    },

    /// List own open orders on a market (private API).
    Orders {
        #[arg(default_value = "BTCPLN")]
        market: String,
    },

    /// List own trades on a market (private API).
    MyTrades {
        #[arg(default_value = "BTCPLN")]
        market: String,

        /// Number of entries, 1 to 1000.
        #[arg(long, default_value = "1000")]
        count: u32,

        /// Zero-based index of the first entry.
        #[arg(long, default_value = "0")]
        start: u32,
    },

    /// List the history of account operations in a currency (private API).
    History {
        /// Currency, e.g. PLN or BTC.
        currency: String,

        /// Number of entries, 1 to 1000.
        #[arg(long, default_value = "1000")]
        count: u32,

        /// Zero-based index of the first entry.
        #[arg(long, default_value = "0")]
        start: u32,
    },
}

pub fn run_from_args() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return Ok(());
        }
        Err(err) => {
            // Bad argument shape exits with status 1, capture file untouched.
            let _ = err.print();
            std::process::exit(1);
        }
    };
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let host = cli.host.unwrap_or_else(|| cfg.host.clone());

    match cli.command {
        Some(CliCommand::Ticker { market }) => run_ticker(&host, &market),
        Some(CliCommand::Orderbook { market }) => run_orderbook(&host, &market),
        Some(CliCommand::Trades { market, since }) => run_trades(&host, &market, since),
        Some(CliCommand::Graphs { interval, market }) => run_graphs(&host, &market, &interval),
        Some(CliCommand::Info) => run_info(&private_api(&cfg, &host)?),
        Some(CliCommand::Trade {
            market,
            kind,
            amount,
            rate,
            all_or_nothing,
        }) => run_trade(
            &private_api(&cfg, &host)?,
            &market,
            &kind,
            amount,
            rate,
            all_or_nothing,
        ),
        Some(CliCommand::Cancel { id }) => run_cancel(&private_api(&cfg, &host)?, id),
        Some(CliCommand::Orders { market }) => run_orders(&private_api(&cfg, &host)?, &market),
        Some(CliCommand::MyTrades {
            market,
            count,
            start,
        }) => run_my_trades(&private_api(&cfg, &host)?, &market, count, start),
        Some(CliCommand::History {
            currency,
            count,
            start,
        }) => run_history(&private_api(&cfg, &host)?, &currency, count, start),
        None => {
            let Some(path) = cli.path else {
                bail!("expected <PATH>, or <PATH> <BODY> <HEADERS>, or a subcommand (see --help)");
            };
            let output = cli.output.unwrap_or_else(|| cfg.output_file.clone());
            run_request(
                &host,
                &output,
                &path,
                cli.body.as_deref(),
                cli.headers.as_deref(),
            )
        }
    }
}

/// Builds the private API client, failing with a pointer at the config file
/// when no credentials are configured.
fn private_api(cfg: &BmkConfig, host: &str) -> Result<PrivateApi> {
    let Some(keys) = &cfg.api else {
        bail!(
            "private API credentials missing: add an [api] table with \
             public_key and secret_key to {}",
            config::config_path()?.display()
        );
    };
    Ok(PrivateApi::new(host, &keys.public_key, &keys.secret_key))
}

#[cfg(test)]
mod tests;
