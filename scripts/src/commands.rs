//! Implementations of the deploy scripts

use std::sync::Arc;

use ethers::providers::Middleware;
use tracing::info;

use crate::{
    cli::DeploySaleArgs,
    constants::NUM_DEPLOY_CONFIRMATIONS,
    errors::ScriptError,
    types::{PredumContract, SaleParams},
    utils::{contract_factory, deployed_message, write_deployed_address},
};

/// Deploys the token contract, which takes no constructor arguments
pub async fn deploy_token(
    client: Arc<impl Middleware>,
    artifacts_dir: &str,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let contract = PredumContract::Token;
    let factory = contract_factory(contract, artifacts_dir, client)?;

    info!("Deploying {}...", contract);
    let deployed = factory
        .deploy(())
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .confirmations(NUM_DEPLOY_CONFIRMATIONS)
        .send()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    let address = deployed.address();
    info!("{} deployed at {:#x}", contract, address);

    write_deployed_address(deployments_path, contract.deployments_key(), address)?;

    println!("{}", deployed_message(contract, address));

    Ok(())
}

/// Deploys the crowdsale contract with the given sale parameters
pub async fn deploy_sale(
    args: DeploySaleArgs,
    client: Arc<impl Middleware>,
    artifacts_dir: &str,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    // Parse the sale parameters before touching the chain so that malformed
    // arguments fail without sending anything
    let params = SaleParams::from_args(&args)?;

    let contract = PredumContract::Sale;
    let factory = contract_factory(contract, artifacts_dir, client)?;

    info!("Deploying {}...", contract);
    let deployed = factory
        .deploy(params)
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .confirmations(NUM_DEPLOY_CONFIRMATIONS)
        .send()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    let address = deployed.address();
    info!("{} deployed at {:#x}", contract, address);

    write_deployed_address(deployments_path, contract.deployments_key(), address)?;

    println!("{}", deployed_message(contract, address));

    Ok(())
}
