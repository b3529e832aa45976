//! Type definitions used throughout the scripts

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use ethers::{
    abi::{Token, Tokenize},
    types::{Address, U256},
};

use crate::{
    cli::DeploySaleArgs,
    constants::{SALE_CONTRACT_KEY, SALE_CONTRACT_NAME, TOKEN_CONTRACT_KEY, TOKEN_CONTRACT_NAME},
    errors::ScriptError,
};

/// The contracts deployed by these scripts
#[derive(Copy, Clone)]
pub enum PredumContract {
    /// The Predum ERC20 token contract
    Token,
    /// The Predum crowdsale contract
    Sale,
}

impl PredumContract {
    /// The key under which the contract's address is recorded
    /// in the deployments file
    pub fn deployments_key(&self) -> &'static str {
        match self {
            PredumContract::Token => TOKEN_CONTRACT_KEY,
            PredumContract::Sale => SALE_CONTRACT_KEY,
        }
    }
}

impl Display for PredumContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredumContract::Token => write!(f, "{}", TOKEN_CONTRACT_NAME),
            PredumContract::Sale => write!(f, "{}", SALE_CONTRACT_NAME),
        }
    }
}

/// The crowdsale constructor arguments, parsed into their on-chain types
#[derive(Clone)]
pub struct SaleParams {
    /// The cap on the amount of tokens sold in the crowdsale
    pub cap: U256,
    /// The address of the token contract being sold
    pub token_address: Address,
    /// The price of a token, in wei
    pub token_price: U256,
    /// The minimum purchase amount, in wei
    pub min_buy: U256,
}

impl SaleParams {
    /// Parse the crowdsale constructor arguments from their CLI form
    pub fn from_args(args: &DeploySaleArgs) -> Result<Self, ScriptError> {
        let cap = U256::from_dec_str(&args.cap)
            .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;

        let token_address = Address::from_str(&args.token_address)
            .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;

        let token_price = U256::from_dec_str(&args.token_price)
            .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;

        let min_buy = U256::from_dec_str(&args.min_buy)
            .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;

        Ok(SaleParams {
            cap,
            token_address,
            token_price,
            min_buy,
        })
    }
}

impl Tokenize for SaleParams {
    // The crowdsale constructor takes its arguments in exactly this order
    fn into_tokens(self) -> Vec<Token> {
        vec![
            Token::Uint(self.cap),
            Token::Address(self.token_address),
            Token::Uint(self.token_price),
            Token::Uint(self.min_buy),
        ]
    }
}
