//! Definitions of CLI arguments and commands for the deploy scripts

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use ethers::providers::Middleware;

use crate::{
    commands::{deploy_sale, deploy_token},
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_DEPLOYMENTS_PATH, DEFAULT_MIN_BUY, DEFAULT_SALE_CAP,
        DEFAULT_TOKEN_ADDRESS, DEFAULT_TOKEN_PRICE,
    },
    errors::ScriptError,
};

/// Deploy the Predum contracts to an EVM chain
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    #[arg(short, long, env = "PRIV_KEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL")]
    pub rpc_url: String,

    /// Directory containing the compiled contract artifacts,
    /// as `<ContractName>.abi` / `<ContractName>.bin` pairs
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: String,

    /// Path to the file in which deployed addresses are recorded
    #[arg(short, long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments_path: String,

    /// The deploy script to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy scripts, one per contract
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the Predum token contract
    DeployToken,
    /// Deploy the Predum crowdsale contract
    DeploySale(DeploySaleArgs),
}

impl Command {
    /// Run the deploy script selected by the command
    pub async fn run(
        self,
        client: Arc<impl Middleware>,
        artifacts_dir: &str,
        deployments_path: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployToken => deploy_token(client, artifacts_dir, deployments_path).await,
            Command::DeploySale(args) => {
                deploy_sale(args, client, artifacts_dir, deployments_path).await
            }
        }
    }
}

/// The arguments for deploying the crowdsale contract.
///
/// Defaults are the values the sale was launched with; the token
/// address in particular is network-specific.
#[derive(Args)]
pub struct DeploySaleArgs {
    /// Cap on the amount of tokens sold, in the token's
    /// smallest denomination
    #[arg(short, long, default_value = DEFAULT_SALE_CAP)]
    pub cap: String,

    /// Address of the token contract being sold, in hex
    #[arg(short, long, default_value = DEFAULT_TOKEN_ADDRESS)]
    pub token_address: String,

    /// Price of a token, in wei
    #[arg(short = 'p', long, default_value = DEFAULT_TOKEN_PRICE)]
    pub token_price: String,

    /// Minimum purchase amount, in wei
    #[arg(short, long, default_value = DEFAULT_MIN_BUY)]
    pub min_buy: String,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_DEPLOYMENTS_PATH, DEFAULT_MIN_BUY, DEFAULT_SALE_CAP,
        DEFAULT_TOKEN_ADDRESS, DEFAULT_TOKEN_PRICE,
    };

    use super::{Cli, Command};

    #[test]
    fn test_sale_args_default_to_launch_values() {
        let cli = Cli::try_parse_from([
            "predum-scripts",
            "--priv-key",
            "0xdeadbeef",
            "--rpc-url",
            "http://localhost:8545",
            "deploy-sale",
        ])
        .unwrap();

        assert_eq!(cli.artifacts_dir, DEFAULT_ARTIFACTS_DIR);
        assert_eq!(cli.deployments_path, DEFAULT_DEPLOYMENTS_PATH);

        let Command::DeploySale(args) = cli.command else {
            panic!("expected deploy-sale");
        };
        assert_eq!(args.cap, DEFAULT_SALE_CAP);
        assert_eq!(args.token_address, DEFAULT_TOKEN_ADDRESS);
        assert_eq!(args.token_price, DEFAULT_TOKEN_PRICE);
        assert_eq!(args.min_buy, DEFAULT_MIN_BUY);
    }

    #[test]
    fn test_deploy_token_takes_no_arguments() {
        let cli = Cli::try_parse_from([
            "predum-scripts",
            "--priv-key",
            "0xdeadbeef",
            "--rpc-url",
            "http://localhost:8545",
            "deploy-token",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::DeployToken));
    }
}
