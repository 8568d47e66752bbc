use crate::kleene::repeat;
use crate::node::Node;
use crate::parser::{BoxedParser, Parser};
use crate::state::State;

/// Parser combinator that matches one or more occurrences of an
/// element, optionally joined by a separator.
///
/// Identical to [`Kleene`](crate::kleene::Kleene) except that zero
/// matches is a failure: the first element attempt's error is what the
/// caller sees, and the position is restored to where the repetition
/// began.
pub struct Many<'code> {
    parser: BoxedParser<'code>,
    separator: Option<BoxedParser<'code>>,
}

impl<'code> Parser<'code> for Many<'code> {
    fn parse(&self, state: &mut State<'code>) -> Option<Node<'code>> {
        let start = state.pos();
        let mut children = Vec::new();
        repeat(state, &self.parser, self.separator.as_deref(), &mut children);

        if children.is_empty() {
            state.restore(start);
            return None;
        }

        Some(Node::sequence(children))
    }
}

/// Convenience function to create a Many parser without a separator.
pub fn many<'code>(parser: impl Parser<'code> + 'code) -> Many<'code> {
    Many {
        parser: Box::new(parser),
        separator: None,
    }
}

/// Convenience function to create a Many parser whose elements are
/// joined by a separator.
pub fn many_sep<'code>(
    parser: impl Parser<'code> + 'code,
    separator: impl Parser<'code> + 'code,
) -> Many<'code> {
    Many {
        parser: Box::new(parser),
        separator: Some(Box::new(separator)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::any::any;
    use crate::chars::chars;
    use crate::exact::exact;
    use crate::run::run;

    fn tokens<'a>(node: &'a Node<'_>) -> Vec<&'a str> {
        node.children.iter().map(|c| c.token.as_ref()).collect()
    }

    #[test]
    fn test_matches_sequence_with_separator() {
        let (node, state) = run(many_sep(chars("a-g"), exact(",")), "a,b,c,d,e,");

        assert_eq!(tokens(&node.unwrap()), ["a", "b", "c", "d", "e"]);
        assert_eq!(state.pos(), 10);
    }

    #[test]
    fn test_matches_sequence_without_separator() {
        let parser = many(any((chars("abcdefg"), exact(","))));
        let (node, state) = run(&parser, "a,b,c,d,e,");

        assert_eq!(
            tokens(&node.unwrap()),
            ["a", ",", "b", ",", "c", ",", "d", ",", "e", ","]
        );
        assert_eq!(state.pos(), 10);
    }

    #[test]
    fn test_stops_on_first_failed_element() {
        let (node, state) = run(many_sep(chars("abc"), exact(",")), "a,b,c,d,e,");

        assert_eq!(tokens(&node.unwrap()), ["a", "b", "c"]);
        assert_eq!(state.pos(), 6);
        assert_eq!(state.rest(), "d,e,");
    }

    #[test]
    fn test_zero_matches_is_a_failure() {
        let (node, state) = run(many_sep(chars("def"), exact(",")), "a,b,c,d,e,");

        assert!(node.is_none());
        assert_eq!(state.pos(), 0);
        assert_eq!(state.rest(), "a,b,c,d,e,");
        let error = state.error().unwrap();
        assert_eq!(error.to_string(), "offset 0: Expected def");
    }
}
