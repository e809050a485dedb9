//! Routes incoming messages to the first command that understands them.
//!
//! The dispatcher is the outermost boundary of the engine: `respond` never
//! fails. Registration order is significant — when grammars overlap, the
//! first registered command wins — and the structured diagnostics inside
//! parse and command errors are deliberately dropped here; the only
//! user-visible failure is the fallback text.

use crate::command::Command;

/// What the bot says when no command matched, mirroring the original bot's
/// reply.
pub const DEFAULT_FALLBACK: &str =
    "I didn't understand your command, sorry.\nTry \"prattle list\" to see what I can do.";

/// An ordered set of commands with a fixed fallback reply.
///
/// Dispatchers are built once at startup and are immutable afterwards;
/// independently configured dispatchers can coexist (e.g. one per test).
#[derive(Debug)]
pub struct Dispatcher {
    commands: Vec<Command>,
    fallback: String,
}

impl Dispatcher {
    pub fn new(commands: Vec<Command>) -> Self {
        Self {
            commands,
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }

    /// Replaces the fallback reply.
    pub fn with_fallback(mut self, text: impl Into<String>) -> Self {
        self.fallback = text.into();
        self
    }

    /// The registered commands, in dispatch order. Used by the CLI to
    /// render help listings.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Tries each command against the message, in registration order, and
    /// returns the first successful reply. Every error is swallowed; if no
    /// command succeeds, the fallback text is returned.
    pub fn respond(&self, message: &str) -> String {
        for command in &self.commands {
            if let Ok(reply) = command.execute(message) {
                return reply;
            }
        }

        self.fallback.clone()
    }
}
