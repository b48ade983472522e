use std::{
    collections::HashMap,
    env, fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use alloy::primitives::{Address, U256};
use alloy::signers::local::PrivateKeySigner;
use url::Url;

use crate::constants::*;
use crate::contracts::Token;
use crate::libs::chain::Network;
use crate::libs::errors::ConfigError;

/// Env file path from the command line, else from `var`.
pub fn resolve_env_path(arg: Option<PathBuf>, var: &str) -> Result<PathBuf, ConfigError> {
    if let Some(path) = arg {
        return Ok(path);
    }
    match env::var(var) {
        Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => Err(ConfigError::MissingArgument(format!(
            "Please provide the environment file path as an argument or as env var {var}="
        ))),
    }
}

/// Flat key/value configuration read once per invocation.
///
/// Values from the process environment win over values from the env file,
/// the same precedence dotenv applies when it never overrides a variable
/// that is already set. The process environment itself is never modified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigBundle {
    values: HashMap<String, String>,
}

impl ConfigBundle {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let env_file_error = |reason: String| ConfigError::EnvFile {
            path: path.to_path_buf(),
            reason,
        };
        let iter = dotenv::from_path_iter(path).map_err(|e| env_file_error(e.to_string()))?;
        let mut file = Vec::new();
        for item in iter {
            file.push(item.map_err(|e| env_file_error(e.to_string()))?);
        }
        let process = env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));
        Ok(Self::layered(file, process))
    }

    /// `env` entries shadow `file` entries with the same key.
    pub fn layered<F, E>(file: F, env: E) -> Self
    where
        F: IntoIterator<Item = (String, String)>,
        E: IntoIterator<Item = (String, String)>,
    {
        let mut values: HashMap<String, String> = file.into_iter().collect();
        values.extend(env);
        Self { values }
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Command line values are applied on top of everything else.
    pub fn with_override(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    /// Blank values count as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn require(&self, key: &str) -> Result<&str, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
    }

    pub fn require_address(&self, key: &str) -> Result<Address, ConfigError> {
        let raw = self.require(key)?;
        Address::from_str(raw).map_err(|_| ConfigError::InvalidAddress {
            key: key.to_string(),
            value: raw.to_string(),
        })
    }

    /// Decimal amount under `key`, read with `decimals` places. Zero is
    /// rejected like any other unusable amount.
    pub fn require_amount(&self, key: &str, decimals: u8) -> Result<U256, ConfigError> {
        positive_amount(key, self.require(key)?, decimals)
    }
}

fn positive_amount(key: &str, raw: &str, decimals: u8) -> Result<U256, ConfigError> {
    let invalid = |source| ConfigError::InvalidAmount {
        key: key.to_string(),
        source,
    };
    let amount = uniswaps::parse_token(raw, decimals).map_err(invalid)?;
    if amount.is_zero() {
        return Err(invalid(uniswaps::UnitsError::Malformed {
            value: raw.to_string(),
            decimals,
            reason: "amount must be greater than zero".to_string(),
        }));
    }
    Ok(amount)
}

/// Where and as whom to talk to the chain.
#[derive(Clone)]
pub struct NetworkConfig {
    pub network: Network,
    pub project_id: Option<String>,
    pub rpc_url: Url,
    pub signer: PrivateKeySigner,
}

impl fmt::Debug for NetworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkConfig")
            .field("network", &self.network)
            .field("project_id", &self.project_id)
            .field("rpc_url", &self.rpc_url.host_str())
            .field("signer", &self.signer.address())
            .finish()
    }
}

impl NetworkConfig {
    /// `RPC_URL` replaces the Infura endpoint; without it a project id is
    /// required.
    pub fn from_bundle(bundle: &ConfigBundle) -> Result<Self, ConfigError> {
        let network: Network = bundle.require(ETHERS_NETWORK)?.parse()?;
        let project_id = bundle.get(INFURA_PROJECT_ID).map(str::to_string);
        let rpc_url = match bundle.get(RPC_URL) {
            Some(raw) => Url::parse(raw).map_err(|_| ConfigError::InvalidUrl(raw.to_string()))?,
            None => {
                let id = project_id
                    .as_deref()
                    .ok_or_else(|| ConfigError::MissingKey(INFURA_PROJECT_ID.to_string()))?;
                network.infura_url(id)?
            }
        };
        let signer = PrivateKeySigner::from_str(bundle.require(FROM_ADDRESS_PRIVATE_KEY)?)
            .map_err(|_| ConfigError::InvalidPrivateKey)?;
        Ok(Self {
            network,
            project_id,
            rpc_url,
            signer,
        })
    }

    pub fn signer_address(&self) -> Address {
        self.signer.address()
    }
}

#[derive(Clone, Debug)]
pub struct DeployConfig {
    pub network: NetworkConfig,
    pub router: Address,
    pub usdc: Address,
    pub weth: Address,
    pub artifact_path: PathBuf,
}

impl DeployConfig {
    pub fn from_bundle(bundle: &ConfigBundle) -> Result<Self, ConfigError> {
        Ok(Self {
            network: NetworkConfig::from_bundle(bundle)?,
            router: bundle.require_address(UNISWAP_R2_ADDRESS)?,
            usdc: bundle.require_address(USDC_CONTRACT)?,
            weth: bundle.require_address(WETH_CONTRACT)?,
            artifact_path: PathBuf::from(
                bundle.get(SWAP_ARTIFACT).unwrap_or(DEFAULT_ARTIFACT_PATH),
            ),
        })
    }
}

#[derive(Clone, Debug)]
pub struct FundConfig {
    pub network: NetworkConfig,
    pub token: Token,
    pub token_address: Address,
    pub contract: Address,
    pub amount: U256,
}

impl FundConfig {
    /// Expects `SWAP_CONTRACT_ADDRESS` and `SWAP_AMOUNT` to be present,
    /// normally as command line overrides.
    pub fn from_bundle(bundle: &ConfigBundle, token: Token) -> Result<Self, ConfigError> {
        Ok(Self {
            network: NetworkConfig::from_bundle(bundle)?,
            token,
            token_address: bundle.require_address(token.config_key())?,
            contract: bundle.require_address(SWAP_CONTRACT_ADDRESS)?,
            amount: bundle.require_amount(SWAP_AMOUNT, token.decimals())?,
        })
    }
}

#[derive(Clone, Debug)]
pub struct SwapConfig {
    pub network: NetworkConfig,
    pub contract: Address,
    pub amount_in: U256,
    pub gas_limit: u64,
}

impl SwapConfig {
    /// `amount` is read with the input token's 6-decimal precision.
    pub fn from_bundle(
        bundle: &ConfigBundle,
        amount: &str,
        gas_limit: u64,
    ) -> Result<Self, ConfigError> {
        let amount_in = positive_amount("swap amount", amount, Token::Usdc.decimals())?;
        Ok(Self {
            network: NetworkConfig::from_bundle(bundle)?,
            contract: bundle.require_address(SWAP_CONTRACT_ADDRESS)?,
            amount_in,
            gas_limit,
        })
    }
}
