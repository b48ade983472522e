//! Small chain helpers shared by the commands: balance lookup, the gas
//! reserve guard and ether formatting.
use std::fmt;

use alloy::primitives::{Address, U256};
use uniswaps::format_token;

use super::client::Chain;
use crate::constants::MIN_GAS_RESERVE_WEI;
use crate::libs::errors::ChainError;

/// Native balance of `who`, always read fresh from the chain.
pub async fn get_balance<C: Chain>(chain: &C, who: Address) -> Result<U256, ChainError> {
    chain.balance(who).await
}

/// `wei` as ether with trailing zeros trimmed, e.g. `0.05 ETH`.
pub fn format_eth(wei: U256) -> String {
    format!("{} ETH", format_token(wei, 18))
}

/// Wallet holds less than the gas reserve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GasShortfall {
    pub balance: U256,
    pub required: U256,
}

impl GasShortfall {
    pub fn missing(&self) -> U256 {
        self.required.saturating_sub(self.balance)
    }
}

impl fmt::Display for GasShortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Insufficient ETH balance for gas: have {}, need at least {} ({} short).",
            format_eth(self.balance),
            format_eth(self.required),
            format_eth(self.missing()),
        )?;
        f.write_str(" Please add funds to the wallet.")
    }
}

impl std::error::Error for GasShortfall {}

/// Blocks only when `balance` is strictly below the reserve; exactly the
/// reserve passes.
pub fn check_gas_reserve(balance: U256) -> Result<(), GasShortfall> {
    if balance < MIN_GAS_RESERVE_WEI {
        return Err(GasShortfall {
            balance,
            required: MIN_GAS_RESERVE_WEI,
        });
    }
    Ok(())
}
