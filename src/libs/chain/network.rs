use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::libs::errors::ConfigError;

/// Networks reachable through Infura, named the way `ETHERS_NETWORK`
/// spells them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Sepolia,
    Goerli,
    Holesky,
    Polygon,
    PolygonAmoy,
    Arbitrum,
    ArbitrumSepolia,
    Optimism,
    OptimismSepolia,
    Base,
    BaseSepolia,
}

impl Network {
    pub const fn chain_id(self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Sepolia => 11_155_111,
            Network::Goerli => 5,
            Network::Holesky => 17_000,
            Network::Polygon => 137,
            Network::PolygonAmoy => 80_002,
            Network::Arbitrum => 42_161,
            Network::ArbitrumSepolia => 421_614,
            Network::Optimism => 10,
            Network::OptimismSepolia => 11_155_420,
            Network::Base => 8_453,
            Network::BaseSepolia => 84_532,
        }
    }

    pub const fn infura_host(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet.infura.io",
            Network::Sepolia => "sepolia.infura.io",
            Network::Goerli => "goerli.infura.io",
            Network::Holesky => "holesky.infura.io",
            Network::Polygon => "polygon-mainnet.infura.io",
            Network::PolygonAmoy => "polygon-amoy.infura.io",
            Network::Arbitrum => "arbitrum-mainnet.infura.io",
            Network::ArbitrumSepolia => "arbitrum-sepolia.infura.io",
            Network::Optimism => "optimism-mainnet.infura.io",
            Network::OptimismSepolia => "optimism-sepolia.infura.io",
            Network::Base => "base-mainnet.infura.io",
            Network::BaseSepolia => "base-sepolia.infura.io",
        }
    }

    pub fn infura_url(self, project_id: &str) -> Result<Url, ConfigError> {
        let raw = format!("https://{}/v3/{}", self.infura_host(), project_id.trim());
        Url::parse(&raw).map_err(|_| ConfigError::InvalidUrl(raw))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Sepolia => "sepolia",
            Network::Goerli => "goerli",
            Network::Holesky => "holesky",
            Network::Polygon => "matic",
            Network::PolygonAmoy => "matic-amoy",
            Network::Arbitrum => "arbitrum",
            Network::ArbitrumSepolia => "arbitrum-sepolia",
            Network::Optimism => "optimism",
            Network::OptimismSepolia => "optimism-sepolia",
            Network::Base => "base",
            Network::BaseSepolia => "base-sepolia",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let network = match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "homestead" => Network::Mainnet,
            "sepolia" => Network::Sepolia,
            "goerli" => Network::Goerli,
            "holesky" => Network::Holesky,
            "matic" | "polygon" => Network::Polygon,
            "matic-amoy" | "polygon-amoy" => Network::PolygonAmoy,
            "arbitrum" => Network::Arbitrum,
            "arbitrum-sepolia" => Network::ArbitrumSepolia,
            "optimism" => Network::Optimism,
            "optimism-sepolia" => Network::OptimismSepolia,
            "base" => Network::Base,
            "base-sepolia" => Network::BaseSepolia,
            _ => return Err(ConfigError::UnknownNetwork(s.to_string())),
        };
        Ok(network)
    }
}
