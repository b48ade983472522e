use alloy::primitives::{Address, U256};
use uniswaps::format_token;

use crate::contracts::{SwapContract, Token};
use crate::libs::chain::spells::{check_gas_reserve, format_eth, get_balance, GasShortfall};
use crate::libs::chain::{Chain, Receipt};
use crate::libs::config::SwapConfig;
use crate::libs::errors::ChainError;
use crate::libs::writing::cc;
use crate::{fail, log};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapRequest {
    pub contract: Address,
    pub amount_in: U256,
    pub gas_limit: u64,
}

impl From<&SwapConfig> for SwapRequest {
    fn from(cfg: &SwapConfig) -> Self {
        Self {
            contract: cfg.contract,
            amount_in: cfg.amount_in,
            gas_limit: cfg.gas_limit,
        }
    }
}

#[derive(Debug)]
pub enum SwapOutcome {
    Confirmed(Receipt),
    /// Nothing was submitted.
    Skipped(GasShortfall),
    /// Submission or confirmation failed; already logged.
    Failed(ChainError),
}

/// Invoke `swapExactInputSingle` on the deployed contract.
///
/// Only the balance read can return `Err`. Once the guard passes, any
/// failure of the swap transaction itself is logged and handed back as
/// [`SwapOutcome::Failed`], so the command finishes normally.
pub async fn run_swap<C: Chain>(chain: &C, req: SwapRequest) -> Result<SwapOutcome, ChainError> {
    let balance = get_balance(chain, chain.signer()).await?;
    log!("Current ETH balance: {}", format_eth(balance));

    let contract = SwapContract::attach(chain, req.contract);
    log!("SwapExampleV3 contract address: {}", contract.address());

    if let Err(shortfall) = check_gas_reserve(balance) {
        fail!("{}", shortfall);
        return Ok(SwapOutcome::Skipped(shortfall));
    }

    log!(
        "amountIn: {} ({} {})",
        req.amount_in,
        format_token(req.amount_in, Token::Usdc.decimals()),
        Token::Usdc.symbol()
    );
    match submit_and_confirm(chain, &contract, req).await {
        Ok(receipt) => Ok(SwapOutcome::Confirmed(receipt)),
        Err(err) => {
            fail!("Error during swap: {}", err);
            Ok(SwapOutcome::Failed(err))
        }
    }
}

async fn submit_and_confirm<C: Chain>(
    chain: &C,
    contract: &SwapContract<'_, C>,
    req: SwapRequest,
) -> Result<Receipt, ChainError> {
    let tx_hash = contract
        .swap_exact_input_single(req.amount_in, Some(req.gas_limit))
        .await?;
    log!(cc::YELLOW, "Transaction hash: {}", tx_hash);

    let receipt = chain.wait_for_receipt(tx_hash).await?;
    log!(
        cc::LIGHT_GREEN,
        "Transaction confirmed in block: {}",
        receipt.block_number.unwrap_or_default()
    );
    log!("Transaction completed. Output received: {:?}", receipt);
    Ok(receipt)
}
