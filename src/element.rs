//! Tree members: the closed [`Element`] set and its leaf kinds.
//!
//! A DFML tree is a forest of elements. An element is one of exactly three
//! kinds: a named [`Node`] with attributes and children, a [`Data`] leaf
//! wrapping one typed [`Value`], or a [`Comment`] leaf wrapping raw text.
//! The set is closed by construction — consumers match exhaustively and the
//! "unrecognized element type" failure of dynamically-typed renditions of
//! this format cannot occur.
//!
//! ## Examples
//!
//! ```rust
//! use dfml::{Comment, Data, Element, ElementKind, Node};
//!
//! let elements: Vec<Element> = vec![
//!     Node::new("config").into(),
//!     Data::create_integer(42).into(),
//!     Comment::create_with_content("a note").into(),
//! ];
//!
//! let kinds: Vec<_> = elements.iter().map(Element::kind).collect();
//! assert_eq!(
//!     kinds,
//!     [ElementKind::Node, ElementKind::Data, ElementKind::Comment]
//! );
//! ```

use crate::{Node, Value};

/// The kind of an [`Element`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Node,
    Data,
    Comment,
}

/// Any member of a DFML tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Node(Node),
    Data(Data),
    Comment(Comment),
}

impl Element {
    /// Returns the kind of this element.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Element::Node(_) => ElementKind::Node,
            Element::Data(_) => ElementKind::Data,
            Element::Comment(_) => ElementKind::Comment,
        }
    }

    /// Returns the inner node, or `None` for leaf elements.
    #[must_use]
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Element::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the inner data leaf, or `None` otherwise.
    #[must_use]
    pub fn as_data(&self) -> Option<&Data> {
        match self {
            Element::Data(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the inner comment, or `None` otherwise.
    #[must_use]
    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            Element::Comment(comment) => Some(comment),
            _ => None,
        }
    }

    /// Returns `true` if this element is a node.
    #[inline]
    #[must_use]
    pub const fn is_node(&self) -> bool {
        matches!(self, Element::Node(_))
    }

    /// Returns `true` if this element is a data leaf.
    #[inline]
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Element::Data(_))
    }

    /// Returns `true` if this element is a comment.
    #[inline]
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self, Element::Comment(_))
    }
}

impl From<Node> for Element {
    fn from(node: Node) -> Self {
        Element::Node(node)
    }
}

impl From<Data> for Element {
    fn from(data: Data) -> Self {
        Element::Data(data)
    }
}

impl From<Comment> for Element {
    fn from(comment: Comment) -> Self {
        Element::Comment(comment)
    }
}

/// A leaf element holding one typed scalar [`Value`].
#[derive(Clone, Debug, PartialEq)]
pub struct Data {
    value: Value,
}

impl Data {
    /// Wraps an existing value.
    #[must_use]
    pub fn create_with_value(value: Value) -> Self {
        Data { value }
    }

    /// Creates a string data leaf.
    #[must_use]
    pub fn create_string(value: impl Into<String>) -> Self {
        Data::create_with_value(Value::String(value.into()))
    }

    /// Creates an integer data leaf.
    #[must_use]
    pub fn create_integer(value: i64) -> Self {
        Data::create_with_value(Value::Integer(value))
    }

    /// Creates a double data leaf.
    #[must_use]
    pub fn create_double(value: f64) -> Self {
        Data::create_with_value(Value::Double(value))
    }

    /// Creates a boolean data leaf.
    #[must_use]
    pub fn create_boolean(value: bool) -> Self {
        Data::create_with_value(Value::Boolean(value))
    }

    /// Returns the wrapped value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// A leaf element wrapping raw comment text.
///
/// The text is preserved verbatim, including embedded newlines for block
/// comments; only the terminating delimiter is stripped by the parser.
#[derive(Clone, Debug, PartialEq)]
pub struct Comment {
    text: String,
}

impl Comment {
    /// Creates a comment with the given content.
    #[must_use]
    pub fn create_with_content(text: impl Into<String>) -> Self {
        Comment { text: text.into() }
    }

    /// Returns the comment text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
