//! The new-hires command: replies with onboarding links when someone
//! mentions new hires anywhere in a message.

use crate::automaton::{Parser, Transition};
use crate::command::Command;
use crate::diagnostics::PrattleError;

const NO_LINKS: &str =
    "There is no information available at this time. Please ask for assistance in #infosec.";

/// Builds a command that matches "... new hire(s)" and replies with the
/// configured links, or a fixed apology when none are configured.
///
/// The grammar tolerates one leading word of arbitrary preamble before
/// "new"; later words are no-ops, so the phrase can appear anywhere in the
/// message.
pub fn new_hire(links: Option<Vec<String>>) -> Result<Command, PrattleError> {
    let parser = Parser::new(
        "start",
        "hire",
        vec![
            Transition::new("start", "new").match_token("new")?,
            Transition::new("new", "hire").match_token("hires?")?,
            Transition::new("start", "arbitrary").match_token(".*")?,
            Transition::new("arbitrary", "new").match_token("new")?,
        ],
    );

    Ok(Command::new(
        "new-hires",
        "Links to useful security information for new hires",
        "(...) new hire[s]",
        parser,
        move |_args| match &links {
            None => Ok(NO_LINKS.to_string()),
            Some(links) => Ok(format!(
                "Here are some links that should help you get started:\n{}",
                links.join("\n")
            )),
        },
    ))
}
