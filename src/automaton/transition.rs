//! A single guarded, stack-mutating edge of the automaton.
//!
//! A [`Transition`] decides, given the current state, the current token, and
//! the top of the parameter stack, whether it fires. Firing is atomic: the
//! guard and the stack action must both succeed, and an edge that matches
//! but cannot legally mutate the stack (e.g. pop on an empty stack) behaves
//! exactly like an edge that never matched.

use regex::Regex;

use crate::automaton::ParamStack;
use crate::diagnostics::PrattleError;

/// One edge of a command grammar.
///
/// Built with a chain of constructors:
///
/// ```rust
/// use prattle::automaton::Transition;
/// # fn grammar() -> Result<(), prattle::PrattleError> {
/// let _edge = Transition::new("edition", "called")
///     .match_token(r"\d{4}")?
///     .param("edition");
/// # Ok(())
/// # }
/// # grammar().unwrap();
/// ```
///
/// Guard semantics:
///
/// * The edge only ever fires from its `from` state.
/// * A param edge ignores its token pattern and accepts any token,
///   including the end-of-input sentinel (a param captured at end of input
///   has value `None`).
/// * A non-param edge with a token pattern requires a token that matches
///   the pattern at its start (prefix match).
/// * A non-param edge with no token pattern fires only on the end-of-input
///   sentinel.
/// * A stack pattern additionally requires a non-empty stack whose top
///   entry's tag matches.
#[derive(Debug, Clone)]
pub struct Transition {
    from: String,
    to: String,
    token_pattern: Option<Regex>,
    stack_pattern: Option<Regex>,
    param: Option<String>,
    pop: bool,
}

impl Transition {
    /// A bare edge from one state to another, with no guards and no stack
    /// action. As constructed this is an end-of-input edge; add guards and
    /// actions with the other constructors.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            token_pattern: None,
            stack_pattern: None,
            param: None,
            pop: false,
        }
    }

    /// Requires the current token to match `pattern` at its start.
    /// The pattern is compiled here, once, not per parse.
    pub fn match_token(mut self, pattern: &str) -> Result<Self, PrattleError> {
        self.token_pattern = Some(compile_anchored(pattern)?);
        Ok(self)
    }

    /// Requires the tag of the top stack entry to match `pattern` at its
    /// start.
    pub fn match_stack(mut self, pattern: &str) -> Result<Self, PrattleError> {
        self.stack_pattern = Some(compile_anchored(pattern)?);
        Ok(self)
    }

    /// Marks this as a param edge: when it fires, the current token is
    /// pushed onto the stack under `tag`. Param edges accept any token.
    pub fn param(mut self, tag: impl Into<String>) -> Self {
        self.param = Some(tag.into());
        self
    }

    /// Pops the top stack entry when the edge fires. Combined with
    /// [`Transition::param`] this is a replace: pop, then push the new
    /// tagged value. Either way the edge refuses to fire on an empty stack.
    pub fn pop(mut self) -> Self {
        self.pop = true;
        self
    }

    pub fn from_state(&self) -> &str {
        &self.from
    }

    pub fn to_state(&self) -> &str {
        &self.to
    }

    /// Attempts to fire this edge. Returns the destination state if both
    /// the guard and the stack action succeed; otherwise returns `None` and
    /// leaves the stack untouched.
    pub fn fire(
        &self,
        state: &str,
        stack: &mut ParamStack,
        token: Option<&str>,
    ) -> Option<&str> {
        if state != self.from {
            return None;
        }
        if !self.guard_matches(stack, token) {
            return None;
        }
        if !self.apply_stack_action(stack, token) {
            return None;
        }
        Some(&self.to)
    }

    fn guard_matches(&self, stack: &ParamStack, token: Option<&str>) -> bool {
        let token_ok = if self.param.is_some() {
            // Param edges accept anything; the captured value may be None.
            true
        } else {
            match &self.token_pattern {
                Some(pattern) => token.map_or(false, |t| pattern.is_match(t)),
                // No pattern: this edge fires only at end of input.
                None => token.is_none(),
            }
        };

        let stack_ok = match &self.stack_pattern {
            Some(pattern) => stack.top().map_or(false, |entry| pattern.is_match(&entry.tag)),
            None => true,
        };

        token_ok && stack_ok
    }

    /// Applies the edge's stack action, reporting whether it was legal. The
    /// stack is only mutated on success.
    fn apply_stack_action(&self, stack: &mut ParamStack, token: Option<&str>) -> bool {
        match (&self.param, self.pop) {
            (None, false) => true,
            (Some(tag), false) => {
                stack.push(tag.clone(), token.map(str::to_owned));
                true
            }
            (None, true) => stack.pop().is_some(),
            (Some(tag), true) => {
                // Replace: the pushed entry keeps the full tagged pair so the
                // result mapping retains its value payload.
                if stack.pop().is_none() {
                    return false;
                }
                stack.push(tag.clone(), token.map(str::to_owned));
                true
            }
        }
    }
}

/// Compiles a pattern anchored at the start of its input, mirroring a
/// prefix match rather than a full-string match.
fn compile_anchored(pattern: &str) -> Result<Regex, PrattleError> {
    Regex::new(&format!("^(?:{pattern})")).map_err(|cause| PrattleError::Grammar {
        pattern: pattern.to_string(),
        cause,
    })
}
