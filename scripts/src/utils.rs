//! Utilities for the deploy scripts.

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
};

use ethers::{
    abi::{Address, Contract},
    contract::ContractFactory,
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::Bytes,
};
use json::JsonValue;
use tracing::debug;

use crate::{
    constants::{ABI_EXTENSION, BIN_EXTENSION, DEPLOYMENTS_KEY},
    errors::ScriptError,
    types::PredumContract,
};

/// Sets up the client with which to deploy the contracts, wrapping the
/// given private key & RPC URL into a signing middleware
pub async fn setup_client(
    priv_key: &str,
    rpc_url: &str,
) -> Result<Arc<impl Middleware>, ScriptError> {
    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let wallet = LocalWallet::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let chain_id = provider
        .get_chainid()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
        .as_u64();
    debug!("connected to chain {}", chain_id);

    let client = Arc::new(SignerMiddleware::new(
        provider,
        wallet.with_chain_id(chain_id),
    ));

    Ok(client)
}

/// The path to the given contract's artifact file with the given extension
fn artifact_path(contract: PredumContract, artifacts_dir: &str, extension: &str) -> PathBuf {
    Path::new(artifacts_dir).join(format!("{contract}.{extension}"))
}

/// Resolves the given contract's compiled artifact from the artifacts
/// directory, returning its parsed ABI & deployment bytecode
pub fn read_artifact(
    contract: PredumContract,
    artifacts_dir: &str,
) -> Result<(Contract, Bytes), ScriptError> {
    let abi_path = artifact_path(contract, artifacts_dir, ABI_EXTENSION);
    let abi_contents = fs::read_to_string(&abi_path)
        .map_err(|e| ScriptError::ArtifactResolution(format!("{}: {}", abi_path.display(), e)))?;

    let abi: Contract = serde_json::from_str(&abi_contents)
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let bin_path = artifact_path(contract, artifacts_dir, BIN_EXTENSION);
    let bin_contents = fs::read_to_string(&bin_path)
        .map_err(|e| ScriptError::ArtifactResolution(format!("{}: {}", bin_path.display(), e)))?;

    let bytecode = Bytes::from(
        hex::decode(bin_contents.trim().trim_start_matches("0x"))
            .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?,
    );

    Ok((abi, bytecode))
}

/// Constructs a factory for the given contract from its compiled artifact
pub fn contract_factory<M: Middleware>(
    contract: PredumContract,
    artifacts_dir: &str,
    client: Arc<M>,
) -> Result<ContractFactory<M>, ScriptError> {
    let (abi, bytecode) = read_artifact(contract, artifacts_dir)?;
    debug!("resolved {} artifact from {}", contract, artifacts_dir);

    Ok(ContractFactory::new(abi, bytecode, client))
}

/// The line reporting a successful deployment on standard output
pub fn deployed_message(contract: PredumContract, address: Address) -> String {
    format!("{contract} contract deployed to: {address:#x}")
}

/// Parses the given file as JSON
fn get_json_from_file(file_path: &str) -> Result<JsonValue, ScriptError> {
    let file_contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Reads the given contract's address from the deployments file
pub fn parse_addr_from_deployments_file(
    file_path: &str,
    contract_key: &str,
) -> Result<Address, ScriptError> {
    let parsed_json = get_json_from_file(file_path)?;

    Address::from_str(
        parsed_json[DEPLOYMENTS_KEY][contract_key]
            .as_str()
            .ok_or_else(|| {
                ScriptError::ReadDeployments(format!(
                    "no {contract_key} address recorded in {file_path}"
                ))
            })?,
    )
    .map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Records the given contract's address in the deployments file
pub fn write_deployed_address(
    file_path: &str,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !Path::new(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    }
    let mut parsed_json = get_json_from_file(file_path)?;

    parsed_json[DEPLOYMENTS_KEY][contract_key] = JsonValue::String(format!("{address:#x}"));

    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;

    Ok(())
}
