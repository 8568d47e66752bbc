use crate::error::ParseError;
use crate::node::Node;
use crate::parser::Parser;
use crate::state::{State, Whitespace};

/// Runs a parser against fresh state and returns the result alongside
/// the terminal state, for callers that want to inspect the final
/// position or the recorded error themselves.
pub fn run<'code, P>(parser: P, input: &'code str) -> (Option<Node<'code>>, State<'code>)
where
    P: Parser<'code>,
{
    run_with(parser, input, Whitespace::default())
}

/// Like [`run`], with an explicit whitespace policy.
pub fn run_with<'code, P>(
    parser: P,
    input: &'code str,
    whitespace: Whitespace,
) -> (Option<Node<'code>>, State<'code>)
where
    P: Parser<'code>,
{
    let mut state = State::with_whitespace(input, whitespace);
    let node = parser.parse(&mut state);
    (node, state)
}

/// Runs a parser and requires it to consume the whole input.
///
/// A failing root parser surfaces the furthest-reaching recorded error.
/// A successful root that leaves input behind (after any trailing
/// whitespace) is also a failure, reported at the stall position;
/// transient errors recorded by backtracked branches do not fail an
/// otherwise complete parse.
pub fn parse<'code, P>(parser: P, input: &'code str) -> Result<Node<'code>, ParseError>
where
    P: Parser<'code>,
{
    let mut state = State::new(input);
    match parser.parse(&mut state) {
        Some(node) => {
            state.skip_whitespace();
            if state.at_end() {
                Ok(node)
            } else {
                Err(match state.error() {
                    Some(error) if error.pos() >= state.pos() => error.clone(),
                    _ => ParseError::new(state.pos(), "end of input"),
                })
            }
        }
        None => {
            let fallback = ParseError::new(state.pos(), "a match");
            Err(state.error().cloned().unwrap_or(fallback))
        }
    }
}
