//! Async client for Etherscan-family block explorer APIs.
//!
//! The crate builds GET query strings or form-encoded POST bodies for the explorer's
//! module/action endpoints, sends them with `reqwest` and interprets the two response
//! envelopes the API uses:
//!
//! - the status envelope (`status` / `message` / `result`) used by most modules
//! - the JSON-RPC envelope (`jsonrpc` / `id` / `result`) used by the `proxy` module
//!
//! Layout:
//!
//! - `models`: networks, client configuration, endpoint catalog and response models
//! - `services`: the request dispatcher and the typed endpoint clients
//! - `utils`: query encoding and logging setup
//!
//! ```no_run
//! use escan_client::{models::{ClientConfig, EScanNetwork}, services::client::EScanClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::new(EScanNetwork::MAIN_NET, "YOUR_API_KEY").with_throttle_ms(200);
//! let client = EScanClient::new(config)?;
//! let balance = client
//! 	.accounts()
//! 	.balance("0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae", "latest")
//! 	.await?;
//! println!("{}", balance.result);
//! # Ok(())
//! # }
//! ```

pub mod models;
pub mod services;
pub mod utils;
