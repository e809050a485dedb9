//! Unified, `miette`-based diagnostics for the Prattle engine.
//!
//! Every failure mode in the crate is represented by a [`PrattleError`]
//! variant. The two variants that cross the core boundaries are `Parse`
//! (an input never reached a grammar's end state) and `Command` (a grammar
//! matched but its callback failed). The remaining variants cover
//! construction-time and CLI-side failures and never escape
//! `Command::execute`.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, SourceCode};
use thiserror::Error;

use crate::automaton::{ParsedArgs, StackEntry};

/// Type-safe error classification that corresponds to [`PrattleError`]
/// variants. Test code matches on this instead of on message strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input was tokenized but the automaton never reached the end state.
    Parse,
    /// A command's grammar matched, but its callback returned an error.
    Command,
    /// A transition was built from a malformed regular expression.
    Grammar,
    /// A configuration file could not be read or deserialized.
    Config,
    /// Engine bugs, e.g. a no-token cycle in a transition table.
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Parse => "Parse",
            ErrorKind::Command => "Command",
            ErrorKind::Grammar => "Grammar",
            ErrorKind::Config => "Config",
            ErrorKind::Internal => "Internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unified error type for all Prattle failure modes.
///
/// `Parse` and `Command` carry the full diagnostic state described in the
/// engine contract: the halting state, the parameter stack, and the token
/// sequence for `Parse`; the parsed arguments and the original cause for
/// `Command`.
#[derive(Debug, Error)]
pub enum PrattleError {
    #[error("parse halted in state '{state}' without reaching the end state")]
    Parse {
        state: String,
        stack: Vec<StackEntry>,
        tokens: Vec<String>,
    },
    #[error("callback invocation with arguments {} failed", format_args_map(.args))]
    Command {
        args: ParsedArgs,
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
    #[error("invalid transition pattern '{pattern}'")]
    Grammar {
        pattern: String,
        #[source]
        cause: regex::Error,
    },
    #[error("could not load configuration from '{path}'")]
    Config {
        path: String,
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl PrattleError {
    /// Returns the type-safe classification for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PrattleError::Parse { .. } => ErrorKind::Parse,
            PrattleError::Command { .. } => ErrorKind::Command,
            PrattleError::Grammar { .. } => ErrorKind::Grammar,
            PrattleError::Config { .. } => ErrorKind::Config,
            PrattleError::Internal { .. } => ErrorKind::Internal,
        }
    }

    fn code_suffix(&self) -> &'static str {
        match self {
            PrattleError::Parse { .. } => "parse",
            PrattleError::Command { .. } => "command",
            PrattleError::Grammar { .. } => "grammar",
            PrattleError::Config { .. } => "config",
            PrattleError::Internal { .. } => "internal",
        }
    }
}

impl Diagnostic for PrattleError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("prattle::{}", self.code_suffix())))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            PrattleError::Parse { stack, tokens, .. } => Some(Box::new(format!(
                "tokens seen: [{}]; parameter stack at failure: [{}]",
                tokens.join(", "),
                stack
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            ))),
            PrattleError::Command { .. } => Some(Box::new(
                "the message matched this command's grammar, but the command itself failed",
            )),
            PrattleError::Grammar { .. } => Some(Box::new(
                "transition token and stack patterns must be valid regular expressions",
            )),
            PrattleError::Config { .. } => Some(Box::new(
                "the configuration file must be JSON with optional 'new_hire_links' and 'fallback' fields",
            )),
            PrattleError::Internal { .. } => {
                Some(Box::new("this is an engine bug; please report it"))
            }
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        None
    }
}

/// Renders a parsed-argument map with stable (sorted) key order so error
/// messages are reproducible across runs.
fn format_args_map(args: &ParsedArgs) -> String {
    let mut pairs: Vec<_> = args.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    let body = pairs
        .iter()
        .map(|(tag, value)| match value {
            Some(value) => format!("{tag}={value}"),
            None => format!("{tag}=<none>"),
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("{{{body}}}")
}

#[cfg(test)]
mod diagnostics_tests {
    use std::collections::HashMap;

    use miette::Report;

    use super::*;

    fn sample_args() -> ParsedArgs {
        let mut args = HashMap::new();
        args.insert("name".to_string(), Some("test".to_string()));
        args.insert("edition".to_string(), None);
        args
    }

    #[test]
    fn parse_error_message_names_the_halting_state() {
        let err = PrattleError::Parse {
            state: "cargo".to_string(),
            stack: vec![],
            tokens: vec!["cargo".to_string(), "called".to_string()],
        };

        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("state 'cargo'"));
    }

    #[test]
    fn command_error_message_lists_arguments_in_sorted_order() {
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err = PrattleError::Command {
            args: sample_args(),
            cause: Box::new(cause),
        };

        assert_eq!(err.kind(), ErrorKind::Command);
        assert_eq!(
            err.to_string(),
            "callback invocation with arguments {edition=<none>, name=test} failed"
        );
    }

    #[test]
    fn command_error_report_includes_the_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "downstream outage");
        let err = PrattleError::Command {
            args: sample_args(),
            cause: Box::new(cause),
        };

        let report = Report::new(err);
        let rendered = format!("{report:?}");
        assert!(rendered.contains("downstream outage"));
    }

    #[test]
    fn parse_error_help_includes_stack_and_tokens() {
        let err = PrattleError::Parse {
            state: "greet".to_string(),
            stack: vec![StackEntry {
                tag: "name".to_string(),
                value: Some("tester".to_string()),
            }],
            tokens: vec!["hi".to_string(), "tester".to_string()],
        };

        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("hi, tester"));
        assert!(help.contains("name=tester"));
    }
}
