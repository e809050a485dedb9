//! Binds a grammar to a callback and command metadata.
//!
//! A [`Command`] is the unit of behavior the dispatcher works with: parse
//! the message with the command's grammar, hand the extracted parameters to
//! the callback, and normalize any callback failure so that exactly two
//! error kinds ever leave `execute`.

use std::fmt;

use crate::automaton::{ParsedArgs, Parser};
use crate::diagnostics::PrattleError;

/// What a callback may return: a reply for the user, or any error, which
/// `execute` wraps into [`PrattleError::Command`].
pub type CallbackResult = Result<String, Box<dyn std::error::Error + Send + Sync + 'static>>;

type Callback = Box<dyn Fn(&ParsedArgs) -> CallbackResult + Send + Sync>;

/// A command the bot can respond to.
pub struct Command {
    name: String,
    help: String,
    format: String,
    parser: Parser,
    callback: Callback,
}

impl Command {
    /// * `name` — a kebab-case name to list in help messages.
    /// * `help` — what the command does, for users.
    /// * `format` — the expected input shape. Documentation only: it is
    ///   never validated against the grammar, so keep the two in sync by
    ///   hand.
    /// * `parser` — the grammar that recognizes this command.
    /// * `callback` — invoked with the parsed parameters; returns the reply
    ///   text.
    pub fn new(
        name: impl Into<String>,
        help: impl Into<String>,
        format: impl Into<String>,
        parser: Parser,
        callback: impl Fn(&ParsedArgs) -> CallbackResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            format: format.into(),
            parser,
            callback: Box::new(callback),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    /// Parses the message and invokes the callback.
    ///
    /// A parse failure propagates unchanged. A callback failure is wrapped
    /// into [`PrattleError::Command`] together with the arguments that
    /// produced it; no callback error ever escapes directly.
    pub fn execute(&self, message: &str) -> Result<String, PrattleError> {
        let args = self.parser.parse(message)?;

        match (self.callback)(&args) {
            Ok(reply) => Ok(reply),
            Err(cause) => Err(PrattleError::Command { args, cause }),
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("help", &self.help)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}
