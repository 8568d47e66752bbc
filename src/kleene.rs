use crate::node::Node;
use crate::parser::{BoxedParser, Parser};
use crate::state::State;

/// Parser combinator that matches zero or more occurrences of an
/// element, optionally joined by a separator.
///
/// Repetition stops at the first failed element or separator attempt,
/// leaving the position after the last fully successful step; the
/// failed attempt consumes nothing. Separators are consumed but do not
/// appear among the children. An iteration that succeeds without
/// consuming input also stops the loop, so a non-consuming element
/// cannot spin forever.
pub struct Kleene<'code> {
    parser: BoxedParser<'code>,
    separator: Option<BoxedParser<'code>>,
}

impl<'code> Parser<'code> for Kleene<'code> {
    fn parse(&self, state: &mut State<'code>) -> Option<Node<'code>> {
        let mut children = Vec::new();
        repeat(state, &self.parser, self.separator.as_deref(), &mut children);
        Some(Node::sequence(children))
    }
}

/// Shared repetition loop for [`Kleene`] and [`Many`](crate::many::Many).
pub(crate) fn repeat<'code>(
    state: &mut State<'code>,
    parser: &(dyn Parser<'code> + 'code),
    separator: Option<&(dyn Parser<'code> + 'code)>,
    children: &mut Vec<Node<'code>>,
) {
    loop {
        let mark = state.pos();
        match parser.parse(state) {
            Some(node) => children.push(node),
            None => {
                state.restore(mark);
                break;
            }
        }

        if let Some(separator) = separator {
            let after_element = state.pos();
            if separator.parse(state).is_none() {
                state.restore(after_element);
                break;
            }
        }

        if state.pos() == mark {
            break;
        }
    }
}

/// Convenience function to create a Kleene parser without a separator.
pub fn kleene<'code>(parser: impl Parser<'code> + 'code) -> Kleene<'code> {
    Kleene {
        parser: Box::new(parser),
        separator: None,
    }
}

/// Convenience function to create a Kleene parser whose elements are
/// joined by a separator.
pub fn kleene_sep<'code>(
    parser: impl Parser<'code> + 'code,
    separator: impl Parser<'code> + 'code,
) -> Kleene<'code> {
    Kleene {
        parser: Box::new(parser),
        separator: Some(Box::new(separator)),
    }
}
