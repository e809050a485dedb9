//! Prattle: a natural-language command matching engine for chat bots.
//!
//! Messages are tokenized into words and run through a deterministic
//! pushdown automaton described by an ordered transition table. Commands
//! bind a grammar to a callback; a dispatcher tries each registered command
//! in order and falls back to a fixed reply when nothing matches.

pub use crate::automaton::{tokenize, ParamStack, ParsedArgs, Parser, StackEntry, Transition};
pub use crate::command::{CallbackResult, Command};
pub use crate::diagnostics::{ErrorKind, PrattleError};
pub use crate::dispatch::{Dispatcher, DEFAULT_FALLBACK};

pub mod automaton;
pub mod cli;
pub mod command;
pub mod commands;
pub mod config;
pub mod diagnostics;
pub mod dispatch;
