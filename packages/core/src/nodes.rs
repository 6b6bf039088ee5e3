//! The node tree handed to the renderer.

use std::borrow::Cow;

use crate::element::Element;

/// A single node in a markup tree.
///
/// Anything that can be a child converts into a `Node` through [`From`], so builder methods
/// take `impl Into<Node>`. Plain strings become escaped text; use [`Node::Raw`] (or
/// [`text`]) for markup that must be written verbatim.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum Node {
    /// An element with its attributes and children.
    Element(Box<Element>),

    /// Literal text, written without escaping.
    Raw(String),

    /// Text that is HTML-escaped when rendered.
    Escaped(String),

    /// A list of nodes rendered back to back with no wrapper.
    Fragment(Vec<Node>),
}

impl Node {
    /// An empty fragment renders nothing.
    pub fn empty() -> Self {
        Node::Fragment(Vec::new())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(&**el),
            _ => None,
        }
    }

    /// Returns true for fragments that (recursively) contain nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Fragment(nodes) => nodes.iter().all(Node::is_empty),
            _ => false,
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::empty()
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(Box::new(element))
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Escaped(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Escaped(text)
    }
}

impl From<Cow<'_, str>> for Node {
    fn from(text: Cow<'_, str>) -> Self {
        Node::Escaped(text.into_owned())
    }
}

impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(nodes: Vec<T>) -> Self {
        Node::Fragment(nodes.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(node: Option<T>) -> Self {
        node.map(Into::into).unwrap_or_default()
    }
}

/// Literal text that is written to the output unchanged.
pub fn text(value: impl Into<String>) -> Node {
    Node::Raw(value.into())
}

/// Text that is HTML-escaped when rendered.
pub fn escaped(value: impl Into<String>) -> Node {
    Node::Escaped(value.into())
}

/// Group several children without a wrapping element.
pub fn fragment<I>(nodes: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    Node::Fragment(nodes.into_iter().map(Into::into).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_are_escaped_text() {
        assert_eq!(Node::from("<b>"), Node::Escaped("<b>".into()));
        assert_eq!(text("<b>"), Node::Raw("<b>".into()));
    }

    #[test]
    fn none_is_an_empty_fragment() {
        let node: Node = None::<&str>.into();
        assert!(node.is_empty());
        assert!(fragment([Node::empty(), Node::empty()]).is_empty());
        assert!(!fragment(["x"]).is_empty());
    }
}
