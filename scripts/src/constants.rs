//! Constants used in the deploy scripts

/// The name of the token contract, as its artifact files are named
pub const TOKEN_CONTRACT_NAME: &str = "PredumToken";

/// The name of the crowdsale contract, as its artifact files are named
pub const SALE_CONTRACT_NAME: &str = "PredumSale";

/// The extension of an ABI artifact file
pub const ABI_EXTENSION: &str = "abi";

/// The extension of a bytecode artifact file
pub const BIN_EXTENSION: &str = "bin";

/// The default directory in which compiled contract artifacts are found
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The default path to the `deployments.json` file
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";

/// The number of confirmations to wait for the contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: usize = 1;

/// The deployments key in the `deployments.json` file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The token contract key in the `deployments.json` file
pub const TOKEN_CONTRACT_KEY: &str = "token_contract";

/// The crowdsale contract key in the `deployments.json` file
pub const SALE_CONTRACT_KEY: &str = "sale_contract";

/// The default cap on the crowdsale, in the token's smallest denomination
pub const DEFAULT_SALE_CAP: &str = "10000000000000000000000000000";

/// The default address of the token contract sold in the crowdsale.
///
/// This is network-specific; override it with `--token-address` when
/// deploying anywhere other than the network the default was taken from.
pub const DEFAULT_TOKEN_ADDRESS: &str = "0xABE2D3aB08eb4e0ef40c3B0a6AdB58Bf9fa36231";

/// The default token price, in wei per token unit
pub const DEFAULT_TOKEN_PRICE: &str = "40000";

/// The default minimum purchase, in wei
pub const DEFAULT_MIN_BUY: &str = "50000000000000000";
