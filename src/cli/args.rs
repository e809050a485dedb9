//! Defines the command-line arguments and subcommands for the Prattle CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "prattle",
    version,
    about = "A natural-language command matching engine for chat bots."
)]
pub struct PrattleArgs {
    /// Path to a JSON configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a message through the dispatcher and print the reply.
    Respond {
        /// The message, as one or more words.
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Parse a message with one command's grammar and print the captured
    /// parameters as JSON.
    Parse {
        /// The name of the registered command to parse with.
        #[arg(long)]
        command: String,
        /// The message, as one or more words.
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// List the registered commands with their help text and format hints.
    List,
}
