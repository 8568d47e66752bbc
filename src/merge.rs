use crate::node::Node;
use crate::parser::Parser;
use crate::state::State;

/// Parser combinator that flattens whatever the wrapped parser matched
/// into a single node.
///
/// On success, the inner result's substructure is discarded and the
/// returned node's token is the contiguous input span from the position
/// before the attempt through the position after it. Useful over
/// recursive grammars where only the full matched text matters.
/// Failures pass through unchanged.
pub struct Merge<P> {
    parser: P,
}

impl<P> Merge<P> {
    pub fn new(parser: P) -> Self {
        Merge { parser }
    }
}

impl<'code, P> Parser<'code> for Merge<P>
where
    P: Parser<'code>,
{
    fn parse(&self, state: &mut State<'code>) -> Option<Node<'code>> {
        let start = state.pos();
        self.parser.parse(state)?;
        Some(Node::token(state.span(start)))
    }
}

/// Convenience function to create a Merge parser.
pub fn merge<'code, P>(parser: P) -> Merge<P>
where
    P: Parser<'code>,
{
    Merge::new(parser)
}

/// Extension trait to add .merge() method support for parsers.
pub trait MergeExt<'code>: Parser<'code> + Sized {
    fn merge(self) -> Merge<Self> {
        Merge::new(self)
    }
}

impl<'code, P> MergeExt<'code> for P where P: Parser<'code> {}
