//! The hello-world command, kept around as a smoke test for the engine.

use crate::automaton::{Parser, Transition};
use crate::command::Command;
use crate::diagnostics::PrattleError;

/// Builds a command matching `hello [<pleasantry>] world`. Any single word
/// between "hello" and "world" is captured under the `pleasantry` tag.
pub fn hello_world() -> Result<Command, PrattleError> {
    let parser = Parser::new(
        "start",
        "world",
        vec![
            Transition::new("start", "hello").match_token("hello")?,
            // Declared before the param edge so that "world" closes the
            // greeting instead of being captured as a pleasantry.
            Transition::new("hello", "world").match_token("world")?,
            Transition::new("hello", "niceties").param("pleasantry"),
            Transition::new("niceties", "world").match_token("world")?,
        ],
    );

    Ok(Command::new(
        "hello-world",
        "A simple test command that returns \"Hello, world\"",
        "hello [<pleasantry>] world",
        parser,
        |_args| Ok("Hello, world".to_string()),
    ))
}
