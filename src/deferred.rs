use std::rc::Rc;

use once_cell::unsync::OnceCell;

use crate::node::Node;
use crate::parser::{BoxedParser, Parser};
use crate::state::State;

/// A late-bound parser reference, for grammar rules that mention
/// themselves.
///
/// `deferred()` hands out a cloneable placeholder that can be embedded
/// in a grammar immediately; `define` fills in the real parser exactly
/// once, after which every clone resolves to it through one level of
/// indirection per invocation. Because resolution happens at parse time
/// rather than construction time, a rule like "a group is `(`, then
/// optionally a group, then `)`" builds without recursing forever:
///
/// ```
/// use parsley::{and, deferred, maybe, merge, parse};
///
/// let group = deferred();
/// group.define(and(("(", maybe(group.clone()), ")")));
///
/// let node = parse(merge(&group), "((()))").unwrap();
/// assert_eq!(node.token, "((()))");
/// ```
///
/// Defining a handle twice, or invoking one that was never defined, is
/// a construction bug and panics.
pub struct Deferred<'code> {
    cell: Rc<OnceCell<BoxedParser<'code>>>,
}

impl<'code> Deferred<'code> {
    /// Supplies the actual parser. Single assignment: a second call
    /// panics.
    pub fn define(&self, parser: impl Parser<'code> + 'code) {
        if self.cell.set(Box::new(parser)).is_err() {
            panic!("deferred parser defined twice");
        }
    }
}

impl<'code> Clone for Deferred<'code> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<'code> Parser<'code> for Deferred<'code> {
    fn parse(&self, state: &mut State<'code>) -> Option<Node<'code>> {
        match self.cell.get() {
            Some(parser) => parser.parse(state),
            None => panic!("deferred parser invoked before define"),
        }
    }
}

/// Convenience function to create an undefined Deferred parser.
pub fn deferred<'code>() -> Deferred<'code> {
    Deferred {
        cell: Rc::new(OnceCell::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::and;
    use crate::any::any;
    use crate::run::run;

    #[test]
    fn test_resolves_after_define() {
        let parser = deferred();
        parser.define("hello");

        let (node, _) = run(&parser, "hello");
        assert_eq!(node.unwrap().token, "hello");
    }

    #[test]
    fn test_clones_share_one_definition() {
        let rule = deferred();
        let alias = rule.clone();
        rule.define("x");

        let (node, _) = run(&alias, "x");
        assert!(node.is_some());
    }

    #[test]
    fn test_self_reference_recursion() {
        // value = "a" | "[" value "]"
        let value = deferred();
        value.define(any(("a", and(("[", value.clone(), "]")))));

        let (node, state) = run(&value, "[[[a]]]");
        assert!(node.is_some());
        assert!(state.at_end());
    }

    #[test]
    fn test_recursion_failure_reports_deepest_position() {
        let value = deferred();
        value.define(any(("a", and(("[", value.clone(), "]")))));

        let (node, state) = run(&value, "[[b]]");
        assert!(node.is_none());
        assert_eq!(state.pos(), 0);
        assert_eq!(state.error().unwrap().pos(), 2);
    }

    #[test]
    #[should_panic(expected = "defined twice")]
    fn test_double_define_panics() {
        let parser = deferred();
        parser.define("a");
        parser.define("b");
    }

    #[test]
    #[should_panic(expected = "before define")]
    fn test_undefined_invocation_panics() {
        let parser = deferred();
        let mut state = State::new("x");
        parser.parse(&mut state);
    }
}
