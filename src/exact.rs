use std::borrow::Cow;

use crate::node::Node;
use crate::parser::Parser;
use crate::state::State;

/// Parser that matches an exact piece of text.
///
/// Whitespace is skipped first, per the state's policy. On success the
/// node's token is the matched slice of the input; on failure the
/// literal itself is recorded as the expected description and the
/// position is restored to where the attempt began.
pub struct Exact {
    text: Cow<'static, str>,
}

impl Exact {
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self { text: text.into() }
    }
}

impl<'code> Parser<'code> for Exact {
    fn parse(&self, state: &mut State<'code>) -> Option<Node<'code>> {
        match_exact(state, &self.text)
    }
}

/// Convenience function to create an Exact parser.
pub fn exact(text: impl Into<Cow<'static, str>>) -> Exact {
    Exact::new(text)
}

/// Bare text used where a parser is expected matches itself.
impl<'code> Parser<'code> for str {
    fn parse(&self, state: &mut State<'code>) -> Option<Node<'code>> {
        match_exact(state, self)
    }
}

impl<'code> Parser<'code> for String {
    fn parse(&self, state: &mut State<'code>) -> Option<Node<'code>> {
        match_exact(state, self)
    }
}

fn match_exact<'code>(state: &mut State<'code>, text: &str) -> Option<Node<'code>> {
    let start = state.pos();
    state.skip_whitespace();
    let rest = state.rest();
    if rest.starts_with(text) {
        let token = &rest[..text.len()];
        state.advance(text.len());
        Some(Node::token(token))
    } else {
        state.record_error(state.pos(), text);
        state.restore(start);
        None
    }
}
