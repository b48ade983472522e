use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use swapex::constants::{SWAP_AMOUNT, SWAP_CONTRACT_ADDRESS};
use swapex::contracts::Token;
use swapex::libs::chain::RpcChain;
use swapex::libs::cli::{config_failure, fatal, parse_args};
use swapex::libs::config::{ConfigBundle, FundConfig};
use swapex::libs::errors::ConfigError;
use swapex::ops;
use swapex::ops::fund::{fund_contract, Transfer};

#[derive(Parser, Debug)]
#[command(version, about = "Send tokens to a deployed SwapExampleV3")]
struct Cli {
    /// Env file path
    env_file: PathBuf,
    /// Deployed swap contract address
    swap_contract: String,
    /// Decimal token amount, e.g. 3.5
    amount: String,
    /// Token to send
    #[arg(long, value_enum, default_value_t = Token::Usdc)]
    token: Token,
}

fn load(cli: Cli) -> Result<FundConfig, ConfigError> {
    let bundle = ConfigBundle::load(&cli.env_file)?
        .with_override(SWAP_CONTRACT_ADDRESS, cli.swap_contract)
        .with_override(SWAP_AMOUNT, cli.amount);
    FundConfig::from_bundle(&bundle, cli.token)
}

/// A skipped transfer (gas guard) is not an error.
async fn run(cfg: FundConfig) -> anyhow::Result<()> {
    ops::announce(&cfg.network);
    let chain = RpcChain::connect(&cfg.network);
    fund_contract(&chain, Transfer::from(&cfg))
        .await
        .context("transfer failed")?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli: Cli = parse_args();
    let cfg = match load(cli) {
        Ok(cfg) => cfg,
        Err(err) => return config_failure(&err),
    };
    match run(cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fatal(&err),
    }
}
