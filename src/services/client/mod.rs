//! Typed endpoint clients.
//!
//! [`EScanClient`] owns the configuration and HTTP connection pool; each API module is
//! reached through a borrowed sub-client (`client.accounts()`, `client.proxy()`, ...).

mod accounts;
mod contracts;
mod escan;
mod gas_tracker;
mod proxy;
mod stats;
mod transactions;

pub use accounts::{Accounts, MAX_BALANCE_MULTI_ADDRESSES};
pub use contracts::Contracts;
pub use escan::EScanClient;
pub use gas_tracker::GasTracker;
pub use proxy::Proxy;
pub use stats::Stats;
pub use transactions::Transactions;
