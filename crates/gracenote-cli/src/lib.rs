//! # gracenote-cli
//!
//! Command-line front end for the Gracenote identity client.
//!
//! - `register`: obtain a user ID and store it in the config file
//! - `whoami`: rebuild the identity from stored values, no network
//! - `config`: show, locate or edit the config file

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
