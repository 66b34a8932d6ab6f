//! Services talking to the explorer API.
//!
//! - `dispatch`: typed GET/POST requests and response interpretation
//! - `client`: the client handle and its per-module endpoint clients

pub mod client;
pub mod dispatch;
