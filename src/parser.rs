use std::rc::Rc;

use crate::node::Node;
use crate::state::State;

/// Core trait for parser combinators.
///
/// A parser either advances the state past what it matched and returns
/// the resulting [`Node`], or returns `None`, leaving the position
/// where it was and recording its failure through
/// [`State::record_error`]. Backtracking is the caller combinator's
/// concern; a failed parser must never leave the position moved.
pub trait Parser<'code> {
    fn parse(&self, state: &mut State<'code>) -> Option<Node<'code>>;
}

/// A type-erased parser, the currency of the variadic combinators.
pub type BoxedParser<'code> = Box<dyn Parser<'code> + 'code>;

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    fn parse(&self, state: &mut State<'code>) -> Option<Node<'code>> {
        (**self).parse(state)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    fn parse(&self, state: &mut State<'code>) -> Option<Node<'code>> {
        (**self).parse(state)
    }
}

impl<'code, P> Parser<'code> for Rc<P>
where
    P: Parser<'code> + ?Sized,
{
    fn parse(&self, state: &mut State<'code>) -> Option<Node<'code>> {
        (**self).parse(state)
    }
}

/// Parser that matches nothing and always succeeds.
pub struct Empty;

impl<'code> Parser<'code> for Empty {
    fn parse(&self, _state: &mut State<'code>) -> Option<Node<'code>> {
        Some(Node::empty())
    }
}

/// Convenience function to create the no-op parser.
pub fn empty() -> Empty {
    Empty
}

/// Conversion from the argument forms accepted by the variadic
/// combinators ([`and`](crate::and::and), [`any`](crate::any::any)) into a list
/// of boxed parsers: tuples of up to eight parsers of mixed types, or
/// an already-built `Vec<BoxedParser>` for grammars assembled at
/// runtime. Bare `&str` literals are parsers themselves (see
/// [`exact`](crate::exact::exact)), so they can appear directly in the tuple.
pub trait ParserList<'code> {
    fn into_parsers(self) -> Vec<BoxedParser<'code>>;
}

impl<'code> ParserList<'code> for Vec<BoxedParser<'code>> {
    fn into_parsers(self) -> Vec<BoxedParser<'code>> {
        self
    }
}

impl<'code> ParserList<'code> for () {
    fn into_parsers(self) -> Vec<BoxedParser<'code>> {
        Vec::new()
    }
}

macro_rules! parser_list {
    ($($p:ident),+) => {
        impl<'code, $($p),+> ParserList<'code> for ($($p,)+)
        where
            $($p: Parser<'code> + 'code),+
        {
            #[allow(non_snake_case)]
            fn into_parsers(self) -> Vec<BoxedParser<'code>> {
                let ($($p,)+) = self;
                vec![$(Box::new($p) as BoxedParser<'code>),+]
            }
        }
    };
}

parser_list!(A);
parser_list!(A, B);
parser_list!(A, B, C);
parser_list!(A, B, C, D);
parser_list!(A, B, C, D, E);
parser_list!(A, B, C, D, E, F);
parser_list!(A, B, C, D, E, F, G);
parser_list!(A, B, C, D, E, F, G, H);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_matches_nothing() {
        let mut state = State::new("hello world");
        let node = empty().parse(&mut state).unwrap();

        assert!(node.is_empty());
        assert_eq!(state.pos(), 0);
        assert!(!state.errored());
    }

    #[test]
    fn test_reference_parser_delegates() {
        let parser = empty();
        let mut state = State::new("abc");
        assert!((&parser).parse(&mut state).is_some());
    }

    #[test]
    fn test_boxed_parser_delegates() {
        let parser: BoxedParser<'_> = Box::new(empty());
        let mut state = State::new("abc");
        assert!(parser.parse(&mut state).is_some());
    }

    #[test]
    fn test_rc_parser_delegates() {
        let parser: Rc<dyn Parser<'_>> = Rc::new(empty());
        let mut state = State::new("abc");
        assert!(parser.clone().parse(&mut state).is_some());
    }

    #[test]
    fn test_mixed_tuple_into_parsers() {
        let parsers = ("hello", empty()).into_parsers();
        assert_eq!(parsers.len(), 2);
    }

    #[test]
    fn test_unit_into_parsers_is_empty() {
        let parsers = ().into_parsers();
        assert!(parsers.is_empty());
    }
}
