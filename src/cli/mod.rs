//! CLI module for Character Vault
//!
//! Provides the `serve` subcommand that runs the GraphQL API server.

pub mod serve;

use clap::{Parser, Subcommand};

/// Character Vault - GraphQL CRUD service for character records
#[derive(Parser)]
#[command(name = "character-vault")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the GraphQL API server
    Serve,
}
