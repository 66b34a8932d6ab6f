use std::fmt;

/// API module, the first half of an endpoint address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Module {
	Account,
	Contract,
	Transaction,
	Proxy,
	Stats,
	GasTracker,
}

impl Module {
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Account => "account",
			Self::Contract => "contract",
			Self::Transaction => "transaction",
			Self::Proxy => "proxy",
			Self::Stats => "stats",
			Self::GasTracker => "gastracker",
		}
	}
}

impl fmt::Display for Module {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// API action within a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
	// account
	Balance,
	BalanceMulti,
	TxList,
	TxListInternal,
	TokenTx,
	TokenBalance,
	// contract
	GetAbi,
	GetSourceCode,
	VerifySourceCode,
	CheckVerifyStatus,
	// transaction
	GetStatus,
	GetTxReceiptStatus,
	// proxy
	EthBlockNumber,
	EthGetTransactionByHash,
	EthGetTransactionCount,
	EthGasPrice,
	// stats
	EthSupply,
	EthPrice,
	BnbSupply,
	BnbPrice,
	TokenSupply,
	// gastracker
	GasOracle,
}

impl Action {
	/// Wire name of the action; proxy actions keep their JSON-RPC method casing
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Balance => "balance",
			Self::BalanceMulti => "balancemulti",
			Self::TxList => "txlist",
			Self::TxListInternal => "txlistinternal",
			Self::TokenTx => "tokentx",
			Self::TokenBalance => "tokenbalance",
			Self::GetAbi => "getabi",
			Self::GetSourceCode => "getsourcecode",
			Self::VerifySourceCode => "verifysourcecode",
			Self::CheckVerifyStatus => "checkverifystatus",
			Self::GetStatus => "getstatus",
			Self::GetTxReceiptStatus => "gettxreceiptstatus",
			Self::EthBlockNumber => "eth_blockNumber",
			Self::EthGetTransactionByHash => "eth_getTransactionByHash",
			Self::EthGetTransactionCount => "eth_getTransactionCount",
			Self::EthGasPrice => "eth_gasPrice",
			Self::EthSupply => "ethsupply",
			Self::EthPrice => "ethprice",
			Self::BnbSupply => "bnbsupply",
			Self::BnbPrice => "bnbprice",
			Self::TokenSupply => "tokensupply",
			Self::GasOracle => "gasoracle",
		}
	}
}

impl fmt::Display for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
