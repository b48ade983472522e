//! Compiled contract artifacts as Hardhat (`bytecode: "0x.."`) or Foundry
//! (`bytecode: { "object": "0x.." }`) write them.
use std::path::{Path, PathBuf};

use alloy::json_abi::JsonAbi;
use alloy::primitives::{Address, Bytes};
use alloy::sol_types::SolValue;
use serde::Deserialize;

use crate::libs::errors::ArtifactError;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Hardhat(Bytes),
    Foundry { object: Bytes },
}

#[derive(Deserialize)]
struct RawArtifact {
    #[serde(rename = "contractName", default)]
    contract_name: Option<String>,
    abi: JsonAbi,
    bytecode: RawBytecode,
}

#[derive(Clone, Debug)]
pub struct Artifact {
    pub contract_name: String,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

impl Artifact {
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &raw)
    }

    /// `origin` only labels errors.
    pub fn from_json(origin: &Path, json: &str) -> Result<Self, ArtifactError> {
        let raw: RawArtifact = serde_json::from_str(json).map_err(|source| ArtifactError::Json {
            path: origin.to_path_buf(),
            source,
        })?;
        let bytecode = match raw.bytecode {
            RawBytecode::Hardhat(code) => code,
            RawBytecode::Foundry { object } => object,
        };
        if bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode(origin.to_path_buf()));
        }
        let artifact = Self {
            contract_name: raw
                .contract_name
                .unwrap_or_else(|| "SwapExampleV3".to_string()),
            abi: raw.abi,
            bytecode,
        };
        artifact.check_shape(origin)?;
        Ok(artifact)
    }

    fn check_shape(&self, origin: &Path) -> Result<(), ArtifactError> {
        let shape = |reason: &str| ArtifactError::Shape {
            path: PathBuf::from(origin),
            reason: reason.to_string(),
        };
        let ctor = self
            .abi
            .constructor()
            .ok_or_else(|| shape("no constructor"))?;
        if ctor.inputs.len() != 3 || ctor.inputs.iter().any(|p| p.ty != "address") {
            return Err(shape(
                "constructor must take (address router, address tokenA, address tokenB)",
            ));
        }
        let has_swap = self
            .abi
            .function("swapExactInputSingle")
            .is_some_and(|fs| {
                fs.iter()
                    .any(|f| f.inputs.len() == 1 && f.inputs[0].ty == "uint256")
            });
        if !has_swap {
            return Err(shape("missing swapExactInputSingle(uint256)"));
        }
        Ok(())
    }

    /// Creation code followed by the ABI encoded constructor arguments.
    pub fn creation_code(&self, router: Address, token_a: Address, token_b: Address) -> Bytes {
        let mut code = self.bytecode.to_vec();
        code.extend_from_slice(&(router, token_a, token_b).abi_encode_params());
        code.into()
    }
}
