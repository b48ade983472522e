use std::path::PathBuf;

use alloy::primitives::B256;
use thiserror::Error;
use uniswaps::UnitsError;

/// Everything that can go wrong before the first network call.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0}")]
    MissingArgument(String),

    #[error("could not read env file {path}: {reason}")]
    EnvFile { path: PathBuf, reason: String },

    #[error("{0} is not set")]
    MissingKey(String),

    #[error("{key} is not a valid address: `{value}`")]
    InvalidAddress { key: String, value: String },

    #[error("invalid {key}: {source}")]
    InvalidAmount {
        key: String,
        #[source]
        source: UnitsError,
    },

    #[error("unknown ETHERS_NETWORK `{0}`")]
    UnknownNetwork(String),

    #[error("RPC_URL is not a valid url: `{0}`")]
    InvalidUrl(String),

    #[error("FROM_ADDRESS_PRIVATE_KEY did not contain a valid hex encoded secret")]
    InvalidPrivateKey,
}

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("rpc error: {0}")]
    Transport(#[from] alloy::transports::TransportError),

    #[error("waiting for transaction failed: {0}")]
    Pending(#[from] alloy::providers::PendingTransactionError),

    #[error("transaction {0} reverted")]
    Reverted(B256),

    #[error("creation transaction {0} produced no contract address")]
    NoContractAddress(B256),

    #[error("could not decode call result: {0}")]
    Decode(#[from] alloy::sol_types::Error),

    #[error("node rejected the request: {0}")]
    Rejected(String),
}

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("could not read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("artifact {path} is not a valid compiled contract: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact {0} has no creation bytecode")]
    EmptyBytecode(PathBuf),

    #[error("artifact {path} does not match SwapExampleV3: {reason}")]
    Shape { path: PathBuf, reason: String },
}
