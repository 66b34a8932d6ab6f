//! Core domain models for the explorer API client.
//!
//! This module contains the fundamental data structures that represent:
//! - Networks: Explorer API endpoints and the dialect each one speaks
//! - Client configuration: Base URL, API key and request pacing shared by every request

mod client_config;
mod network;

pub use client_config::ClientConfig;
pub use network::EScanNetwork;
