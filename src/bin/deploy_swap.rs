use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use swapex::constants::CONFIG_FILE;
use swapex::libs::artifact::Artifact;
use swapex::libs::chain::RpcChain;
use swapex::libs::cli::{config_failure, fatal, parse_args};
use swapex::libs::config::{resolve_env_path, ConfigBundle, DeployConfig};
use swapex::libs::errors::ConfigError;
use swapex::ops;

#[derive(Parser, Debug)]
#[command(version, about = "Deploy a new SwapExampleV3 instance")]
struct Cli {
    /// Env file path (falls back to the CONFIG_FILE env var)
    env_file: Option<PathBuf>,
}

fn load(cli: Cli) -> Result<DeployConfig, ConfigError> {
    let path = resolve_env_path(cli.env_file, CONFIG_FILE)?;
    DeployConfig::from_bundle(&ConfigBundle::load(&path)?)
}

async fn run(cfg: DeployConfig) -> anyhow::Result<()> {
    let artifact = Artifact::load(&cfg.artifact_path)?;
    ops::announce(&cfg.network);
    ops::deploy::check_addresses(&cfg);

    let chain = RpcChain::connect(&cfg.network);
    ops::deploy::deploy_swap_example(&chain, &artifact, ops::deploy::constructor_args(&cfg))
        .await
        .context("deployment failed")?;
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
