//! Typed handles over deployed contracts. A handle is an address plus the
//! chain it lives on; building one never touches the network.

pub mod erc20;
pub mod swap_example;

pub use erc20::{Erc20, Token};
pub use swap_example::{ConstructorArgs, SwapContract};
