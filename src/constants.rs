use alloy::primitives::U256;

/// 0.05 ether. Fund and swap refuse to submit below this native balance.
pub const MIN_GAS_RESERVE_WEI: U256 = U256::from_limbs([50_000_000_000_000_000, 0, 0, 0]);

/// Gas ceiling passed with `swapExactInputSingle`.
pub const SWAP_GAS_LIMIT: u64 = 500_000;

/// Swap input, in units of the 6-decimal input token.
pub const DEFAULT_SWAP_AMOUNT: &str = "3.0";

pub const DEFAULT_ARTIFACT_PATH: &str = "artifacts/contracts/SwapExampleV3.sol/SwapExampleV3.json";

// env keys
pub const CONFIG_FILE: &str = "CONFIG_FILE";
pub const ETHERS_NETWORK: &str = "ETHERS_NETWORK";
pub const INFURA_PROJECT_ID: &str = "INFURA_PROJECT_ID";
pub const FROM_ADDRESS_PRIVATE_KEY: &str = "FROM_ADDRESS_PRIVATE_KEY";
pub const RPC_URL: &str = "RPC_URL";
pub const UNISWAP_R2_ADDRESS: &str = "UNISWAP_R2_ADDRESS";
pub const USDC_CONTRACT: &str = "USDC_CONTRACT";
pub const WETH_CONTRACT: &str = "WETH_CONTRACT";
pub const SWAP_CONTRACT_ADDRESS: &str = "SWAP_CONTRACT_ADDRESS";
pub const SWAP_AMOUNT: &str = "SWAP_AMOUNT";
pub const SWAP_ARTIFACT: &str = "SWAP_ARTIFACT";
