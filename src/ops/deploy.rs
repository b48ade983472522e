use alloy::primitives::Address;
use uniswaps::uniswap::canonical_deployment;

use crate::constants::{UNISWAP_R2_ADDRESS, USDC_CONTRACT, WETH_CONTRACT};
use crate::contracts::{ConstructorArgs, SwapContract};
use crate::libs::artifact::Artifact;
use crate::libs::chain::{Chain, Receipt};
use crate::libs::config::DeployConfig;
use crate::libs::errors::ChainError;
use crate::libs::writing::cc;
use crate::{log, warn};

/// Constructor arguments the deploy command uses: router, USDC, WETH.
pub fn constructor_args(cfg: &DeployConfig) -> ConstructorArgs {
    ConstructorArgs {
        router: cfg.router,
        token_a: cfg.usdc,
        token_b: cfg.weth,
    }
}

/// Configured addresses that differ from the network's canonical Uniswap
/// deployment, as `(key, configured, canonical)`. Empty when every address
/// matches or the network has no known deployment.
pub fn non_canonical(cfg: &DeployConfig) -> Vec<(&'static str, Address, Address)> {
    let Some(known) = canonical_deployment(cfg.network.network.chain_id()) else {
        return Vec::new();
    };
    [
        (UNISWAP_R2_ADDRESS, cfg.router, known.swap_router),
        (USDC_CONTRACT, cfg.usdc, known.usdc),
        (WETH_CONTRACT, cfg.weth, known.weth),
    ]
    .into_iter()
    .filter(|(_, configured, canonical)| configured != canonical)
    .collect()
}

/// Warn about every non-canonical address. Mocks on a public network are
/// legitimate, so this never blocks the deployment.
pub fn check_addresses(cfg: &DeployConfig) {
    for (key, configured, canonical) in non_canonical(cfg) {
        warn!(
            "{} {} is not the canonical address on {} ({})",
            key, configured, cfg.network.network, canonical
        );
    }
}

/// Publish one new instance. Every call creates a fresh contract; any
/// error is returned for the caller to treat as fatal.
pub async fn deploy_swap_example<'a, C: Chain>(
    chain: &'a C,
    artifact: &Artifact,
    args: ConstructorArgs,
) -> Result<(SwapContract<'a, C>, Receipt), ChainError> {
    log!(cc::CYAN, "Deploying {} contract...", artifact.contract_name);
    log!("UNISWAP_R2_ADDRESS {}", args.router);
    log!("TOKEN_A {}", args.token_a);
    log!("TOKEN_B {}", args.token_b);

    let (contract, receipt) = SwapContract::deploy(chain, artifact, args).await?;

    log!(
        "Deployment mined in block {} (tx {})",
        receipt.block_number.unwrap_or_default(),
        receipt.tx_hash
    );
    log!(cc::LIGHT_GREEN, "Contract deployed to address: {}", contract.address());
    Ok((contract, receipt))
}
