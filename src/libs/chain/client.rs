use alloy::network::{ReceiptResponse, TransactionBuilder};
use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder};
use alloy::rpc::types::eth::TransactionRequest;
use alloy::signers::Signer;

use super::network::Network;
use crate::libs::config::NetworkConfig;
use crate::libs::errors::ChainError;

/// A transaction the operator wants mined. `to == None` is a contract
/// creation and `input` is then the creation code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxRequest {
    pub to: Option<Address>,
    pub input: Bytes,
    pub gas_limit: Option<u64>,
}

impl TxRequest {
    pub fn call(to: Address, input: impl Into<Bytes>) -> Self {
        Self {
            to: Some(to),
            input: input.into(),
            gas_limit: None,
        }
    }

    pub fn create(code: impl Into<Bytes>) -> Self {
        Self {
            to: None,
            input: code.into(),
            gas_limit: None,
        }
    }

    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    pub fn is_create(&self) -> bool {
        self.to.is_none()
    }
}

/// The part of a mined transaction's receipt the commands report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub tx_hash: B256,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    pub contract_address: Option<Address>,
    pub status: bool,
}

/// Everything the operator commands need from a chain: one signer, balance
/// reads, submission, confirmation and read-only calls.
///
/// Each method is a single attempt. Nothing here retries or times out.
#[allow(async_fn_in_trait)]
pub trait Chain {
    /// Address of the key that signs every submitted transaction.
    fn signer(&self) -> Address;

    async fn balance(&self, who: Address) -> Result<U256, ChainError>;

    /// Sign and broadcast; returns as soon as the node accepted the hash.
    async fn submit(&self, tx: TxRequest) -> Result<B256, ChainError>;

    /// Block until `tx_hash` has one confirmation. A reverted transaction
    /// is reported as [`ChainError::Reverted`].
    async fn wait_for_receipt(&self, tx_hash: B256) -> Result<Receipt, ChainError>;

    /// `eth_call` against the latest block, from the signer.
    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes, ChainError>;
}

/// JSON-RPC chain client used by the three commands.  It wraps an alloy
/// HTTP provider built with the recommended fillers (nonce, gas, chain id)
/// and a local [`PrivateKeySigner`](alloy::signers::local::PrivateKeySigner)
/// wallet, so every transaction handed to [`Chain::submit`] is signed
/// locally and broadcast with `eth_sendRawTransaction`.
///
/// The signer's address is derived once at construction and kept next to
/// the provider; helpers in [`super::spells`] read it through
/// [`Chain::signer`] instead of asking the node.  The chain id comes from
/// the configured [`Network`] rather than an `eth_chainId` round trip, which
/// keeps [`RpcChain::connect`] free of network access.
///
/// Every request is a single attempt over one HTTP endpoint.  There is no
/// retry layer and no timeout beyond the transport's own, so a hung node
/// blocks the command.
#[derive(Clone)]
pub struct RpcChain {
    provider: DynProvider,
    address: Address,
    network: Network,
}

impl RpcChain {
    /// No request is sent here; the first call opens the connection.
    pub fn connect(cfg: &NetworkConfig) -> Self {
        let chain_id = cfg.network.chain_id();
        let signer = cfg.signer.clone().with_chain_id(Some(chain_id));
        let address = signer.address();
        let provider = ProviderBuilder::new()
            .with_chain_id(chain_id)
            .wallet(signer)
            .connect_http(cfg.rpc_url.clone())
            .erased();
        Self {
            provider,
            address,
            network: cfg.network,
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }
}

impl Chain for RpcChain {
    fn signer(&self) -> Address {
        self.address
    }

    async fn balance(&self, who: Address) -> Result<U256, ChainError> {
        Ok(self.provider.get_balance(who).await?)
    }

    async fn submit(&self, tx: TxRequest) -> Result<B256, ChainError> {
        let mut request = match tx.to {
            Some(to) => TransactionRequest::default()
                .with_to(to)
                .with_input(tx.input),
            None => TransactionRequest::default().with_deploy_code(tx.input),
        }
        .with_from(self.address);
        if let Some(gas_limit) = tx.gas_limit {
            request = request.with_gas_limit(gas_limit);
        }
        let pending = self.provider.send_transaction(request).await?;
        Ok(*pending.tx_hash())
    }

    async fn wait_for_receipt(&self, tx_hash: B256) -> Result<Receipt, ChainError> {
        let receipt = PendingTransactionBuilder::new(self.provider.root().clone(), tx_hash)
            .with_required_confirmations(1)
            .get_receipt()
            .await?;
        let receipt = Receipt {
            tx_hash: receipt.transaction_hash(),
            block_number: receipt.block_number(),
            gas_used: receipt.gas_used(),
            contract_address: receipt.contract_address(),
            status: receipt.status(),
        };
        if !receipt.status {
            return Err(ChainError::Reverted(tx_hash));
        }
        Ok(receipt)
    }

    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes, ChainError> {
        let request = TransactionRequest::default()
            .with_from(self.address)
            .with_to(to)
            .with_input(input);
        Ok(self.provider.call(request).await?)
    }
}
