use std::any::Any;
use std::borrow::Cow;
use std::fmt;

/// The output of a successful match: a matched span of text, ordered
/// child nodes from sequencing/repetition, and an optional opaque
/// payload attached by [`map`](crate::map::map).
///
/// A node with no token, no children, and no payload is the canonical
/// "matched nothing, but not an error" value, produced by
/// [`maybe`](crate::maybe::maybe) and the zero-parser forms of
/// [`and`](crate::and::and)/[`any`](crate::any::any).
pub struct Node<'code> {
    pub token: Cow<'code, str>,
    pub children: Vec<Node<'code>>,
    pub payload: Option<Box<dyn Any>>,
}

impl<'code> Node<'code> {
    /// The canonical empty node.
    pub fn empty() -> Self {
        Self {
            token: Cow::Borrowed(""),
            children: Vec::new(),
            payload: None,
        }
    }

    /// A leaf node holding a matched span.
    pub fn token(token: impl Into<Cow<'code, str>>) -> Self {
        Self {
            token: token.into(),
            children: Vec::new(),
            payload: None,
        }
    }

    /// A parent node holding ordered sub-results.
    pub fn sequence(children: Vec<Node<'code>>) -> Self {
        Self {
            token: Cow::Borrowed(""),
            children,
            payload: None,
        }
    }

    /// A node carrying only an opaque transformed value.
    pub fn with_payload(payload: impl Any) -> Self {
        Self {
            token: Cow::Borrowed(""),
            children: Vec::new(),
            payload: Some(Box::new(payload)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_empty() && self.children.is_empty() && self.payload.is_none()
    }

    /// Downcasts the payload to a concrete type, if one was attached.
    pub fn payload_ref<T: Any>(&self) -> Option<&T> {
        self.payload.as_deref().and_then(|p| p.downcast_ref())
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("token", &self.token)
            .field("children", &self.children)
            .field("payload", &self.payload.as_ref().map(|_| ".."))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_node_is_empty() {
        assert!(Node::empty().is_empty());
    }

    #[test]
    fn test_token_node_is_not_empty() {
        let node = Node::token("hello");
        assert!(!node.is_empty());
        assert_eq!(node.token, "hello");
    }

    #[test]
    fn test_sequence_preserves_order() {
        let node = Node::sequence(vec![Node::token("a"), Node::token("b")]);
        let tokens: Vec<_> = node.children.iter().map(|c| c.token.as_ref()).collect();
        assert_eq!(tokens, ["a", "b"]);
    }

    #[test]
    fn test_payload_downcast() {
        #[derive(Debug, PartialEq)]
        struct Tag(u32);

        let node = Node::with_payload(Tag(7));
        assert_eq!(node.payload_ref::<Tag>(), Some(&Tag(7)));
        assert!(node.payload_ref::<String>().is_none());
    }

    #[test]
    fn test_payload_missing() {
        assert!(Node::token("x").payload_ref::<u32>().is_none());
    }
}
