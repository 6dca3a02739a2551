mod graphs;
mod orderbook;
mod private;
mod request;
mod ticker;
mod trades;

pub use graphs::run_graphs;
pub use orderbook::run_orderbook;
pub use private::{run_cancel, run_history, run_info, run_my_trades, run_orders, run_trade};
pub use request::run_request;
pub use ticker::run_ticker;
pub use trades::run_trades;
