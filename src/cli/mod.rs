//! The Prattle command-line interface.
//!
//! This is the "external collaborator" side of the engine: thin glue that
//! loads configuration, assembles a dispatcher from the built-in commands,
//! and calls the synchronous public contracts. No parsing happens here.

use std::process;

use clap::Parser as ClapParser;

use crate::cli::args::{Command, PrattleArgs};
use crate::commands;
use crate::config::Config;
use crate::diagnostics::PrattleError;
use crate::dispatch::Dispatcher;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = PrattleArgs::parse();

    let config = match &args.config {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(error) => {
            output::print_report(error);
            process::exit(1);
        }
    };

    let dispatcher = match build_dispatcher(&config) {
        Ok(dispatcher) => dispatcher,
        Err(error) => {
            output::print_report(error);
            process::exit(1);
        }
    };

    let result = match args.command {
        Command::Respond { message } => {
            output::print_reply(&dispatcher.respond(&message.join(" ")));
            Ok(())
        }
        Command::Parse { command, message } => {
            handle_parse(&dispatcher, &command, &message.join(" "))
        }
        Command::List => {
            output::print_command_list(dispatcher.commands());
            Ok(())
        }
    };

    if let Err(error) = result {
        output::print_report(error);
        process::exit(1);
    }
}

/// Assembles the dispatcher the CLI serves: every built-in command, in a
/// fixed registration order, configured from `config`.
pub fn build_dispatcher(config: &Config) -> Result<Dispatcher, PrattleError> {
    let dispatcher = Dispatcher::new(vec![
        commands::new_hire(config.new_hire_links.clone())?,
        commands::hello_world()?,
    ]);

    Ok(match &config.fallback {
        Some(text) => dispatcher.with_fallback(text.clone()),
        None => dispatcher,
    })
}

/// Handles the `parse` subcommand: run one command's grammar against the
/// message and dump the extracted parameters as JSON.
fn handle_parse(
    dispatcher: &Dispatcher,
    name: &str,
    message: &str,
) -> Result<(), PrattleError> {
    let Some(command) = dispatcher.commands().iter().find(|c| c.name() == name) else {
        eprintln!("no command named '{name}'; try `prattle list`");
        process::exit(2);
    };

    let parsed = command.parser().parse(message)?;
    let rendered = serde_json::to_string_pretty(&parsed).map_err(|e| PrattleError::Internal {
        message: format!("could not render parsed arguments as JSON: {e}"),
    })?;
    println!("{rendered}");

    Ok(())
}
