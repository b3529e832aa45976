//! Scripts for deploying the Predum token & crowdsale contracts.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
mod commands;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;
