use alloy::primitives::{Address, B256, U256};
use alloy::sol_types::SolCall;
use uniswaps::uniswap::ISwapExampleV3;

use crate::libs::artifact::Artifact;
use crate::libs::chain::{Chain, Receipt, TxRequest};
use crate::libs::errors::ChainError;

/// `SwapExampleV3(router, tokenA, tokenB)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConstructorArgs {
    pub router: Address,
    pub token_a: Address,
    pub token_b: Address,
}

impl ConstructorArgs {
    pub fn contains(&self, address: Address) -> bool {
        [self.router, self.token_a, self.token_b].contains(&address)
    }
}

/// Handle over a deployed `SwapExampleV3`.
pub struct SwapContract<'a, C> {
    chain: &'a C,
    address: Address,
}

impl<'a, C: Chain> SwapContract<'a, C> {
    /// Bind to an existing deployment. Submits nothing.
    pub fn attach(chain: &'a C, address: Address) -> Self {
        Self { chain, address }
    }

    /// Publish a new instance and wait until the creation is mined.
    ///
    /// The creation code is the artifact's bytecode followed by the ABI
    /// encoded `(router, tokenA, tokenB)` constructor arguments.  The call
    /// submits one contract creation transaction, waits for a single
    /// confirmation and reads the new address from the receipt.  Calling it
    /// twice deploys two independent instances.
    ///
    /// Any failure is returned as is: a rejected submission, a reverted
    /// constructor ([`ChainError::Reverted`]) or a receipt without a
    /// contract address ([`ChainError::NoContractAddress`]).  The deploy
    /// command treats all of them as fatal.
    pub async fn deploy(
        chain: &'a C,
        artifact: &Artifact,
        args: ConstructorArgs,
    ) -> Result<(Self, Receipt), ChainError> {
        let code = artifact.creation_code(args.router, args.token_a, args.token_b);
        let tx_hash = chain.submit(TxRequest::create(code)).await?;
        let receipt = chain.wait_for_receipt(tx_hash).await?;
        let address = receipt
            .contract_address
            .filter(|a| !a.is_zero())
            .ok_or(ChainError::NoContractAddress(tx_hash))?;
        Ok((Self::attach(chain, address), receipt))
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Submit `swapExactInputSingle(amountIn)`; confirmation is up to the caller.
    pub async fn swap_exact_input_single(
        &self,
        amount_in: U256,
        gas_limit: Option<u64>,
    ) -> Result<B256, ChainError> {
        let input = ISwapExampleV3::swapExactInputSingleCall { amountIn: amount_in }.abi_encode();
        let mut tx = TxRequest::call(self.address, input);
        if let Some(gas_limit) = gas_limit {
            tx = tx.with_gas_limit(gas_limit);
        }
        self.chain.submit(tx).await
    }

    pub async fn swap_router(&self) -> Result<Address, ChainError> {
        let input = ISwapExampleV3::swapRouterCall {}.abi_encode();
        let out = self.chain.call(self.address, input.into()).await?;
        Ok(ISwapExampleV3::swapRouterCall::abi_decode_returns(&out)?)
    }
}
