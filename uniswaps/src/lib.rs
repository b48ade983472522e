//! Uniswap V3 side of the swap toolkit: Solidity bindings for the router,
//! ERC-20 tokens and the `SwapExampleV3` contract, plus token unit helpers.

pub mod uniswap;
pub mod units;

pub use units::*;
