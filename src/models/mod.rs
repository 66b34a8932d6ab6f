//! Domain models and data structures for the explorer API client.
//!
//! This module contains all the data structures used throughout the crate:
//!
//! - `api`: Endpoint catalog, response envelopes and typed request/response models
//! - `config`: Configuration loading and validation
//! - `core`: Core domain models (EScanNetwork, ClientConfig)

mod api;
mod config;
mod core;

// Re-export api types
pub use api::{
	Action, Envelope, EScanResponse, GenericJsonRpcResponse, GenericResponse, JsonRpcResponse,
	Module, QueryParams, StatusResponse,
};

pub use api::account::{
	AccountBalance, BalanceMultiResponse, BalanceResponse, InternalTransaction,
	InternalTxListResponse, Sort, TokenBalanceResponse, TokenTransfer, TokenTransferResponse,
	Transaction, TxListParams, TxListResponse,
};

pub use api::contract::{
	AbiResponse, SourceCode, SourceCodeResponse, VerifySourceCodePayload,
	VerifyStatusResponse, VerifySubmissionResponse,
};

pub use api::gas_tracker::{GasOracle, GasOracleResponse};

pub use api::proxy::{
	BlockNumberResponse, GasPriceResponse, RpcTransaction, TransactionByHashResponse,
	TransactionCountResponse,
};

pub use api::stats::{PriceResponse, SupplyResponse, TokenSupplyResponse, UsdPrice};

pub use api::transaction::{
	ExecutionStatus, ExecutionStatusResponse, ReceiptStatus, ReceiptStatusResponse,
};

// Re-export core types
pub use self::core::{ClientConfig, EScanNetwork};

// Re-export config types
pub use config::{ConfigError, ConfigLoader, EnvConfig};
