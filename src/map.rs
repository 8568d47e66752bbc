use crate::node::Node;
use crate::parser::Parser;
use crate::state::State;

/// Parser combinator that transforms the node produced by a successful
/// parse.
///
/// The transformation is a pure function from node to node; it may
/// attach a payload, rewrite children, or replace the result wholesale.
/// Failures pass through untransformed.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(Node<'code>) -> Node<'code>,
{
    fn parse(&self, state: &mut State<'code>) -> Option<Node<'code>> {
        let node = self.parser.parse(state)?;
        Some((self.mapper)(node))
    }
}

/// Convenience function to create a Map parser.
pub fn map<'code, P, F>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(Node<'code>) -> Node<'code>,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers.
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Node<'code>) -> Node<'code>,
    {
        Map::new(self, mapper)
    }
}

impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::and;
    use crate::chars::chars;
    use crate::run::run;

    #[derive(Debug, PartialEq)]
    struct HtmlTag {
        name: String,
    }

    fn tag_parser<'code>() -> impl Parser<'code> {
        map(and(("<", chars("a-zA-Z0-9"), ">")), |node| {
            Node::with_payload(HtmlTag {
                name: node.children[1].token.to_string(),
            })
        })
    }

    #[test]
    fn test_transforms_successful_node() {
        let (node, _) = run(tag_parser(), "<html>");
        let node = node.unwrap();

        assert_eq!(
            node.payload_ref::<HtmlTag>(),
            Some(&HtmlTag {
                name: "html".into()
            })
        );
    }

    #[test]
    fn test_failure_passes_through_untransformed() {
        let (node, state) = run(tag_parser(), "<html");

        assert!(node.is_none());
        assert_eq!(state.pos(), 0);
        assert_eq!(state.error().unwrap().to_string(), "offset 5: Expected >");
    }

    #[test]
    fn test_method_syntax_rewrites_children() {
        let parser = and(("a", "b")).map(|mut node| {
            node.children.reverse();
            node
        });
        let (node, _) = run(&parser, "ab");
        let node = node.unwrap();

        let tokens: Vec<_> = node.children.iter().map(|c| c.token.as_ref()).collect();
        assert_eq!(tokens, ["b", "a"]);
    }
}
