use crate::node::Node;
use crate::parser::Parser;
use crate::state::State;

/// Parser combinator that makes the wrapped parser optional.
///
/// On inner success the result passes through unchanged. On inner
/// failure the position is restored and the combinator still succeeds,
/// returning the canonical empty node. The failed attempt's error stays
/// in the state's diagnostic slot under the furthest-match rule; it
/// just never becomes this combinator's own outcome.
pub struct Maybe<P> {
    parser: P,
}

impl<P> Maybe<P> {
    pub fn new(parser: P) -> Self {
        Maybe { parser }
    }
}

impl<'code, P> Parser<'code> for Maybe<P>
where
    P: Parser<'code>,
{
    fn parse(&self, state: &mut State<'code>) -> Option<Node<'code>> {
        let start = state.pos();
        match self.parser.parse(state) {
            Some(node) => Some(node),
            None => {
                state.restore(start);
                Some(Node::empty())
            }
        }
    }
}

/// Convenience function to create a Maybe parser.
pub fn maybe<'code, P>(parser: P) -> Maybe<P>
where
    P: Parser<'code>,
{
    Maybe::new(parser)
}

/// Extension trait to add .maybe() method support for parsers.
pub trait MaybeExt<'code>: Parser<'code> + Sized {
    fn maybe(self) -> Maybe<Self> {
        Maybe::new(self)
    }
}

impl<'code, P> MaybeExt<'code> for P where P: Parser<'code> {}
