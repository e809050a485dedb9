//! Handles all user-facing output for the CLI.
//!
//! Centralizing colorization and error rendering here keeps the subcommand
//! handlers free of presentation concerns.

use miette::Report;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::command::Command;
use crate::diagnostics::PrattleError;

fn stdout() -> StandardStream {
    let choice = if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Prints the dispatcher's reply, green when attached to a terminal.
pub fn print_reply(reply: &str) {
    let mut stdout = stdout();
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
    println!("{}", reply);
    let _ = stdout.reset();
}

/// Prints one line per registered command: name, help, and format hint.
pub fn print_command_list(commands: &[Command]) {
    let mut stdout = stdout();

    for command in commands {
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
        print!("{}", command.name());
        let _ = stdout.reset();
        println!("  {}", command.help());
        println!("    format: {}", command.format());
    }
}

/// Renders an error with full miette diagnostics to stderr.
pub fn print_report(error: PrattleError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}
