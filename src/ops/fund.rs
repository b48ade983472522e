use alloy::primitives::{Address, U256};
use uniswaps::format_token;

use crate::contracts::{Erc20, Token};
use crate::libs::chain::spells::{check_gas_reserve, format_eth, get_balance, GasShortfall};
use crate::libs::chain::{Chain, Receipt};
use crate::libs::config::FundConfig;
use crate::libs::errors::ChainError;
use crate::libs::writing::cc;
use crate::{fail, log};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub token: Token,
    pub token_address: Address,
    pub to: Address,
    pub amount: U256,
}

impl From<&FundConfig> for Transfer {
    fn from(cfg: &FundConfig) -> Self {
        Self {
            token: cfg.token,
            token_address: cfg.token_address,
            to: cfg.contract,
            amount: cfg.amount,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FundOutcome {
    Funded(Receipt),
    /// Nothing was submitted.
    Skipped(GasShortfall),
}

/// Send `transfer.amount` tokens to the swap contract. Submission and
/// confirmation errors propagate.
pub async fn fund_contract<C: Chain>(
    chain: &C,
    transfer: Transfer,
) -> Result<FundOutcome, ChainError> {
    let balance = get_balance(chain, chain.signer()).await?;
    log!("Current ETH balance: {}", format_eth(balance));
    log!("{}: {}", transfer.token.config_key(), transfer.token_address);
    log!("SWAP_CONTRACT_ADDRESS: {}", transfer.to);

    if let Err(shortfall) = check_gas_reserve(balance) {
        fail!("{}", shortfall);
        return Ok(FundOutcome::Skipped(shortfall));
    }

    log!(
        "Sending {} {} ({} raw)",
        format_token(transfer.amount, transfer.token.decimals()),
        transfer.token.symbol(),
        transfer.amount
    );
    let token = Erc20::attach(chain, transfer.token_address);
    let tx_hash = token.transfer(transfer.to, transfer.amount).await?;
    log!(cc::YELLOW, "Transaction sent: {}", tx_hash);

    let receipt = chain.wait_for_receipt(tx_hash).await?;
    log!(
        cc::LIGHT_GREEN,
        "Transaction confirmed in block: {}",
        receipt.block_number.unwrap_or_default()
    );
    Ok(FundOutcome::Funded(receipt))
}
