//! The DPDA engine.
//!
//! A [`Parser`] owns a start state, an end state, and an ordered transition
//! table. `parse` tokenizes a message and walks the table: for each token
//! the first edge (in declared order) whose guard and stack action both
//! succeed fires, and declared order is the automaton's determinism rule —
//! overlapping edges are disambiguated purely by list position. A token for
//! which no edge fires is a no-op; whether the input matched is decided
//! only at end of input.

use std::collections::HashSet;

use crate::automaton::{tokenize, ParamStack, ParsedArgs, Transition};
use crate::diagnostics::PrattleError;

/// An immutable command grammar. Built once at startup and safe to share
/// across threads; each `parse` call allocates its own stack.
#[derive(Debug, Clone)]
pub struct Parser {
    start: String,
    end: String,
    transitions: Vec<Transition>,
    /// Number of distinct states, used to bound the finalization loop.
    state_count: usize,
}

impl Parser {
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        transitions: Vec<Transition>,
    ) -> Self {
        let start = start.into();
        let end = end.into();

        let mut states: HashSet<&str> = HashSet::new();
        states.insert(&start);
        states.insert(&end);
        for tx in &transitions {
            states.insert(tx.from_state());
            states.insert(tx.to_state());
        }
        let state_count = states.len();

        Self {
            start,
            end,
            transitions,
            state_count,
        }
    }

    pub fn start_state(&self) -> &str {
        &self.start
    }

    pub fn end_state(&self) -> &str {
        &self.end
    }

    /// Runs the automaton over a message and extracts the tagged parameters
    /// left on the stack.
    ///
    /// After the tokens are exhausted, end-of-input edges keep firing until
    /// the end state is reached or no edge applies, so grammars can require
    /// trailing clean-up without consuming a token. This finalization phase
    /// runs even for an empty message.
    ///
    /// Fails with [`PrattleError::Parse`] if the automaton does not land in
    /// the end state, carrying the halting state, the parameter stack, and
    /// the token sequence for diagnostics.
    pub fn parse(&self, message: &str) -> Result<ParsedArgs, PrattleError> {
        let tokens = tokenize(message);
        let mut state = self.start.as_str();
        let mut stack = ParamStack::new();

        for token in &tokens {
            if let Some(next) = self.step(state, &mut stack, Some(token)) {
                state = next;
            }
            // No edge fired: the token is a no-op. Failure is deferred to
            // the end-of-input check so later tokens can still be matched.
        }

        let mut steps = 0;
        while state != self.end {
            let Some(next) = self.step(state, &mut stack, None) else {
                break;
            };
            state = next;

            steps += 1;
            if steps > self.state_count {
                // A well-formed grammar never revisits a state on
                // end-of-input edges; a cycle here is a table bug.
                return Err(PrattleError::Internal {
                    message: format!(
                        "finalization did not settle after {steps} steps; \
                         the transition table contains a cycle of end-of-input edges"
                    ),
                });
            }
        }

        if state != self.end {
            return Err(PrattleError::Parse {
                state: state.to_string(),
                stack: stack.entries().to_vec(),
                tokens,
            });
        }

        Ok(stack.into_args())
    }

    /// Fires the first eligible edge in declared order, if any.
    fn step(&self, state: &str, stack: &mut ParamStack, token: Option<&str>) -> Option<&str> {
        self.transitions
            .iter()
            .find_map(|tx| tx.fire(state, stack, token))
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    #[test]
    fn parse_succeeds_when_the_end_state_is_reached() {
        let p = Parser::new(
            "start",
            "end",
            vec![
                Transition::new("start", "next").match_token("test1").unwrap(),
                Transition::new("start", "end").match_token("test").unwrap(),
                Transition::new("start", "other").match_token("test").unwrap(),
            ],
        );

        let args = p.parse("test").unwrap();
        assert!(args.is_empty());
    }

    #[test]
    fn parse_fails_when_the_end_state_is_not_reached() {
        let p = Parser::new(
            "start",
            "end",
            vec![Transition::new("start", "other").match_token("test").unwrap()],
        );

        let err = p.parse("test").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Parse);
    }

    #[test]
    fn parse_fails_when_no_transition_applies() {
        let p = Parser::new(
            "start",
            "end",
            vec![Transition::new("start", "end").match_token("test").unwrap()],
        );

        assert!(p.parse("invalid").is_err());
    }

    #[test]
    fn declared_order_breaks_ties_between_overlapping_edges() {
        let p = Parser::new(
            "start",
            "end",
            vec![
                Transition::new("start", "end").match_token("go").unwrap(),
                Transition::new("start", "wrong").match_token("go").unwrap(),
            ],
        );

        // Were the second edge to win, the parse would fail.
        assert!(p.parse("go").is_ok());
    }

    #[test]
    fn unmatched_tokens_are_no_ops() {
        let p = Parser::new(
            "start",
            "end",
            vec![Transition::new("start", "end").match_token("go").unwrap()],
        );

        // "please" matches nothing from "start"; "go" still gets through.
        assert!(p.parse("please go").is_ok());
    }

    #[test]
    fn simple_param_extraction() {
        let p = Parser::new(
            "start",
            "end",
            vec![
                Transition::new("start", "greet").match_token("hi").unwrap(),
                Transition::new("greet", "greet").match_token("Im").unwrap(),
                Transition::new("greet", "end").param("name"),
            ],
        );

        let args = p.parse("hi I'm tester").unwrap();
        assert_eq!(args.get("name"), Some(&Some("tester".to_string())));
    }

    #[test]
    fn parse_error_carries_state_stack_and_tokens() {
        let p = Parser::new(
            "start",
            "end",
            vec![
                Transition::new("start", "greet").match_token("hi").unwrap(),
                Transition::new("greet", "stuck").param("name"),
            ],
        );

        match p.parse("hi tester").unwrap_err() {
            PrattleError::Parse {
                state,
                stack,
                tokens,
            } => {
                assert_eq!(state, "stuck");
                assert_eq!(stack.len(), 1);
                assert_eq!(stack[0].tag, "name");
                assert_eq!(tokens, vec!["hi".to_string(), "tester".to_string()]);
            }
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn finalization_runs_for_an_empty_message() {
        let p = Parser::new(
            "start",
            "end",
            vec![
                Transition::new("start", "mid").param("flag"),
                Transition::new("mid", "end"),
            ],
        );

        let args = p.parse("").unwrap();
        assert_eq!(args.get("flag"), Some(&None));
    }

    #[test]
    fn finalization_chains_end_of_input_edges() {
        let p = Parser::new(
            "start",
            "end",
            vec![
                Transition::new("start", "svc").match_token("deploy").unwrap(),
                Transition::new("svc", "got").param("service"),
                Transition::new("got", "closing"),
                Transition::new("closing", "end"),
            ],
        );

        let args = p.parse("deploy api").unwrap();
        assert_eq!(args.get("service"), Some(&Some("api".to_string())));
    }

    #[test]
    fn empty_message_with_start_equal_to_end_parses() {
        let p = Parser::new("start", "start", vec![]);
        assert!(p.parse("").unwrap().is_empty());
    }

    #[test]
    fn end_of_input_cycle_is_an_internal_error() {
        // Two unguarded no-token edges forming a loop that never reaches
        // the end state.
        let p = Parser::new(
            "start",
            "end",
            vec![
                Transition::new("start", "loop"),
                Transition::new("loop", "start"),
            ],
        );

        let err = p.parse("").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Internal);
    }

    #[test]
    fn reparsing_the_same_input_is_deterministic() {
        let p = Parser::new(
            "start",
            "end",
            vec![
                Transition::new("start", "greet").match_token("hi").unwrap(),
                Transition::new("greet", "end").param("name"),
            ],
        );

        let first = p.parse("hi tester").unwrap();
        let second = p.parse("hi tester").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn stack_guard_gates_a_transition_mid_parse() {
        // "set <key> to <value>" where the value edge requires the key to
        // already be on the stack.
        let p = Parser::new(
            "start",
            "end",
            vec![
                Transition::new("start", "key").match_token("set").unwrap(),
                Transition::new("key", "to").param("key"),
                Transition::new("to", "value").match_token("to").unwrap(),
                Transition::new("value", "end").param("value").match_stack("key").unwrap(),
            ],
        );

        let args = p.parse("set color to blue").unwrap();
        assert_eq!(args.get("key"), Some(&Some("color".to_string())));
        assert_eq!(args.get("value"), Some(&Some("blue".to_string())));
    }
}
