use alloy::primitives::{Address, B256, U256};
use alloy::sol_types::SolCall;
use uniswaps::uniswap::IERC20;

use crate::constants::{USDC_CONTRACT, WETH_CONTRACT};
use crate::libs::chain::{Chain, TxRequest};
use crate::libs::errors::ChainError;

/// The two tokens the swap pair is made of.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Token {
    #[default]
    Usdc,
    Weth,
}

impl Token {
    pub const fn decimals(self) -> u8 {
        match self {
            Token::Usdc => 6,
            Token::Weth => 18,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Token::Usdc => "USDC",
            Token::Weth => "WETH",
        }
    }

    /// Env key holding this token's contract address.
    pub const fn config_key(self) -> &'static str {
        match self {
            Token::Usdc => USDC_CONTRACT,
            Token::Weth => WETH_CONTRACT,
        }
    }
}

/// Typed handle over an ERC-20 token contract.  The handle borrows the
/// chain it talks through and remembers only the token address; nothing is
/// cached, so every read goes to the chain.
///
/// Writes (`transfer`, `approve`, `transfer_from`) return the transaction
/// hash as soon as the node accepted it.  Waiting for the confirmation is
/// left to the caller through [`Chain::wait_for_receipt`], which is also
/// where a revert surfaces.  Reads go through `eth_call` from the signer and
/// decode the return data with the `IERC20` bindings; a malformed answer
/// becomes [`ChainError::Decode`].
pub struct Erc20<'a, C> {
    chain: &'a C,
    address: Address,
}

impl<'a, C: Chain> Erc20<'a, C> {
    pub fn attach(chain: &'a C, address: Address) -> Self {
        Self { chain, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub async fn transfer(&self, to: Address, amount: U256) -> Result<B256, ChainError> {
        let input = IERC20::transferCall { to, amount }.abi_encode();
        self.chain.submit(TxRequest::call(self.address, input)).await
    }

    pub async fn approve(&self, spender: Address, amount: U256) -> Result<B256, ChainError> {
        let input = IERC20::approveCall { spender, amount }.abi_encode();
        self.chain.submit(TxRequest::call(self.address, input)).await
    }

    pub async fn transfer_from(
        &self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<B256, ChainError> {
        let input = IERC20::transferFromCall { from, to, amount }.abi_encode();
        self.chain.submit(TxRequest::call(self.address, input)).await
    }

    pub async fn allowance(&self, owner: Address, spender: Address) -> Result<U256, ChainError> {
        let input = IERC20::allowanceCall { owner, spender }.abi_encode();
        let out = self.chain.call(self.address, input.into()).await?;
        Ok(IERC20::allowanceCall::abi_decode_returns(&out)?)
    }

    pub async fn balance_of(&self, account: Address) -> Result<U256, ChainError> {
        let input = IERC20::balanceOfCall { account }.abi_encode();
        let out = self.chain.call(self.address, input.into()).await?;
        Ok(IERC20::balanceOfCall::abi_decode_returns(&out)?)
    }

    pub async fn decimals(&self) -> Result<u8, ChainError> {
        let input = IERC20::decimalsCall {}.abi_encode();
        let out = self.chain.call(self.address, input.into()).await?;
        Ok(IERC20::decimalsCall::abi_decode_returns(&out)?)
    }
}
