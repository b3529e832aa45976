use clap::Parser;
use predum_scripts::{cli::Cli, errors::ScriptError, utils::setup_client};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        priv_key,
        rpc_url,
        artifacts_dir,
        deployments_path,
        command,
    } = Cli::parse();

    // Diagnostics go to stderr so that stdout carries only the deployed
    // addresses
    tracing_subscriber::fmt()
        .pretty()
        .with_writer(std::io::stderr)
        .init();

    let client = setup_client(&priv_key, &rpc_url).await?;

    command.run(client, &artifacts_dir, &deployments_path).await
}
