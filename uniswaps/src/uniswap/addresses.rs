use alloy::primitives::{Address, address};

// https://docs.uniswap.org/contracts/v3/reference/deployments/ethereum-deployments
pub const MAINNET_SWAP_ROUTER_02: Address =
    address!("0x68b3465833fb72A70ecDF485E0e4C7bD8665Fc45");
pub const MAINNET_WETH: Address = address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
pub const MAINNET_USDC: Address = address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");

pub const SEPOLIA_SWAP_ROUTER_02: Address =
    address!("0x3bFA4769FB09eefC5a80d6E87c3B9C650f7Ae48E");
pub const SEPOLIA_WETH: Address = address!("0xfFf9976782d46CC05630D1f6eBAb18b2324d6B14");
pub const SEPOLIA_USDC: Address = address!("0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238");

/// Pool fee tier used by `SwapExampleV3` (0.3%).
pub const POOL_FEE: u32 = 3000;

/// Well known router/token set of a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deployment {
    pub swap_router: Address,
    pub weth: Address,
    pub usdc: Address,
}

/// Canonical Uniswap deployment for `chain_id`, if we know one.
pub fn canonical_deployment(chain_id: u64) -> Option<Deployment> {
    match chain_id {
        1 => Some(Deployment {
            swap_router: MAINNET_SWAP_ROUTER_02,
            weth: MAINNET_WETH,
            usdc: MAINNET_USDC,
        }),
        11_155_111 => Some(Deployment {
            swap_router: SEPOLIA_SWAP_ROUTER_02,
            weth: SEPOLIA_WETH,
            usdc: SEPOLIA_USDC,
        }),
        _ => None,
    }
}
