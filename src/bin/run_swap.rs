use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use swapex::constants::{DEFAULT_SWAP_AMOUNT, SWAP_CONTRACT_ADDRESS, SWAP_GAS_LIMIT};
use swapex::libs::chain::RpcChain;
use swapex::libs::cli::{config_failure, fatal, parse_args};
use swapex::libs::config::{ConfigBundle, SwapConfig};
use swapex::libs::errors::ConfigError;
use swapex::ops;
use swapex::ops::swap::{run_swap, SwapRequest};

#[derive(Parser, Debug)]
#[command(version, about = "Call swapExactInputSingle on a deployed SwapExampleV3")]
struct Cli {
    /// Env file path
    env_file: PathBuf,
    /// Deployed swap contract address
    swap_contract: String,
    /// Input amount in USDC (6 decimals)
    #[arg(long, default_value = DEFAULT_SWAP_AMOUNT)]
    amount: String,
    /// Gas limit sent with the swap
    #[arg(long, default_value_t = SWAP_GAS_LIMIT)]
    gas_limit: u64,
}

fn load(cli: Cli) -> Result<SwapConfig, ConfigError> {
    let bundle =
        ConfigBundle::load(&cli.env_file)?.with_override(SWAP_CONTRACT_ADDRESS, cli.swap_contract);
    SwapConfig::from_bundle(&bundle, &cli.amount, cli.gas_limit)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli: Cli = parse_args();
    let cfg = match load(cli) {
        Ok(cfg) => cfg,
        Err(err) => return config_failure(&err),
    };

    ops::announce(&cfg.network);
    let chain = RpcChain::connect(&cfg.network);
    // A failed swap is logged inside run_swap and still exits 0.
    match run_swap(&chain, SwapRequest::from(&cfg)).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => fatal(&anyhow::Error::new(err).context("could not read wallet balance")),
    }
}
