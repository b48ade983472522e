//! The three operator flows. Each is a straight line of chain calls with
//! at most one early exit, the gas reserve guard.

pub mod deploy;
pub mod fund;
pub mod swap;

use crate::libs::config::NetworkConfig;
use crate::libs::writing::cc;
use crate::log;

/// Header every networked command prints before its first call.
pub fn announce(cfg: &NetworkConfig) {
    log!(cc::BOLD, "swapex {}", env!("CARGO_PKG_VERSION"));
    log!("ETHERS_NETWORK: {} (chain id {})", cfg.network, cfg.network.chain_id());
    log!(
        "INFURA_PROJECT_ID: {}",
        cfg.project_id.as_deref().unwrap_or("(unset, using RPC_URL)")
    );
    log!("Wallet address: {}", cfg.signer_address());
}
