use crate::node::Node;
use crate::parser::{BoxedParser, Parser, ParserList};
use crate::state::State;

/// Parser combinator that matches a sequence of parsers in order.
///
/// All-or-nothing: if any step fails, the position is restored to where
/// the whole sequence began, not just to the failing step. On success
/// the node's children are the ordered sub-results; empty nodes (from
/// an inner [`maybe`](crate::maybe::maybe), say) keep their position in the
/// list.
pub struct And<'code> {
    parsers: Vec<BoxedParser<'code>>,
}

impl<'code> And<'code> {
    pub fn new(parsers: impl ParserList<'code>) -> Self {
        Self {
            parsers: parsers.into_parsers(),
        }
    }
}

impl<'code> Parser<'code> for And<'code> {
    fn parse(&self, state: &mut State<'code>) -> Option<Node<'code>> {
        let start = state.pos();
        let mut children = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            match parser.parse(state) {
                Some(node) => children.push(node),
                None => {
                    state.restore(start);
                    return None;
                }
            }
        }

        Some(Node::sequence(children))
    }
}

/// Convenience function to create an And parser from a tuple of
/// parsers, e.g. `and(("hello", "world"))`.
pub fn and<'code>(parsers: impl ParserList<'code>) -> And<'code> {
    And::new(parsers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::run;

    fn tokens<'a>(node: &'a Node<'_>) -> Vec<&'a str> {
        node.children.iter().map(|c| c.token.as_ref()).collect()
    }

    #[test]
    fn test_matches_sequence() {
        let parser = and(("hello", "world"));
        let (node, state) = run(&parser, "hello world");

        assert_eq!(tokens(&node.unwrap()), ["hello", "world"]);
        assert_eq!(state.rest(), "");
    }

    #[test]
    fn test_failure_restores_sequence_start() {
        let parser = and(("hello", "world"));
        let (node, state) = run(&parser, "hello there");

        assert!(node.is_none());
        assert_eq!(state.pos(), 0);
        let error = state.error().unwrap();
        assert_eq!(error.pos(), 6);
        assert_eq!(error.expected(), "world");
    }

    #[test]
    fn test_no_parsers_is_a_noop() {
        let (node, state) = run(and(()), "fff");

        assert!(node.unwrap().is_empty());
        assert_eq!(state.pos(), 0);
        assert!(!state.errored());
    }

    #[test]
    fn test_empty_inner_results_keep_their_position() {
        use crate::maybe::maybe;

        let parser = and(("a", maybe("x"), "b"));
        let (node, _) = run(&parser, "ab");
        let node = node.unwrap();

        assert_eq!(node.children.len(), 3);
        assert!(node.children[1].is_empty());
        assert_eq!(tokens(&node), ["a", "", "b"]);
    }
}
