//! CLI module for the user registry
//!
//! Provides the `serve` subcommand that runs the HTTP API server.

pub mod serve;

use clap::{Parser, Subcommand};

/// User registry - JSON CRUD API for user records
#[derive(Parser)]
#[command(name = "user-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
