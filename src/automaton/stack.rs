//! The parameter stack used by the automaton.
//!
//! The stack exists so that the LIFO convention is enforced in one place:
//! the top is always the most recently pushed entry, and `stack_match`,
//! `pop`, and param pushes all operate on that same end.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The parameters extracted by a successful parse, keyed by tag. A value of
/// `None` means a param transition fired on the end-of-input sentinel and
/// captured no token.
pub type ParsedArgs = HashMap<String, Option<String>>;

/// One tagged parameter captured during a parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackEntry {
    pub tag: String,
    pub value: Option<String>,
}

impl fmt::Display for StackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.tag, value),
            None => write!(f, "{}=<none>", self.tag),
        }
    }
}

/// A LIFO stack of [`StackEntry`] values, scoped to a single parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamStack {
    entries: Vec<StackEntry>,
}

impl ParamStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a tagged value onto the top of the stack.
    pub fn push(&mut self, tag: impl Into<String>, value: Option<String>) {
        self.entries.push(StackEntry {
            tag: tag.into(),
            value,
        });
    }

    /// Removes and returns the most recently pushed entry.
    pub fn pop(&mut self) -> Option<StackEntry> {
        self.entries.pop()
    }

    /// The most recently pushed entry, if any.
    pub fn top(&self) -> Option<&StackEntry> {
        self.entries.last()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The entries in push order, oldest first.
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    /// Collapses the stack into the final argument map. Entries are visited
    /// in push order, so when a tag was pushed more than once the
    /// later-pushed value wins.
    pub fn into_args(self) -> ParsedArgs {
        let mut args = ParsedArgs::with_capacity(self.entries.len());
        for entry in self.entries {
            args.insert(entry.tag, entry.value);
        }
        args
    }
}
