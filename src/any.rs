use crate::node::Node;
use crate::parser::{BoxedParser, Parser, ParserList};
use crate::state::State;

/// Parser combinator that tries each alternative in order from the
/// same starting position and returns the first success.
///
/// When every alternative fails, the position is restored and the
/// failure reported. The diagnostic that survives is the one that
/// reached furthest into the input across all attempted branches, not
/// necessarily the last one tried; the shared error slot on the state
/// enforces that rule, which matters for grammars whose alternatives
/// share long prefixes.
pub struct Any<'code> {
    parsers: Vec<BoxedParser<'code>>,
}

impl<'code> Any<'code> {
    pub fn new(parsers: impl ParserList<'code>) -> Self {
        Self {
            parsers: parsers.into_parsers(),
        }
    }
}

impl<'code> Parser<'code> for Any<'code> {
    fn parse(&self, state: &mut State<'code>) -> Option<Node<'code>> {
        if self.parsers.is_empty() {
            return Some(Node::empty());
        }

        let start = state.pos();
        for parser in &self.parsers {
            if let Some(node) = parser.parse(state) {
                return Some(node);
            }
            state.restore(start);
        }

        None
    }
}

/// Convenience function to create an Any parser from a tuple of
/// alternatives, e.g. `any(("true", "false"))`.
pub fn any<'code>(parsers: impl ParserList<'code>) -> Any<'code> {
    Any::new(parsers)
}
