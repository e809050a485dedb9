//! The command-matching automaton.
//!
//! This module contains the deterministic pushdown automaton (DPDA) that
//! drives command recognition: a [`Parser`] walks an ordered table of
//! [`Transition`]s over the tokens of a message, capturing tagged parameters
//! on a [`ParamStack`] along the way.

pub mod parser;
pub mod stack;
pub mod tokenizer;
pub mod transition;

pub use parser::Parser;
pub use stack::{ParamStack, ParsedArgs, StackEntry};
pub use tokenizer::tokenize;
pub use transition::Transition;
