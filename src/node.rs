//! Named nodes with ordered attributes and ordered children.
//!
//! This module provides [`Node`], the only branching member of a DFML tree.
//! A node carries a name, an ordered key-unique attribute map, and an ordered
//! sequence of child [`Element`]s.
//!
//! ## Why IndexMap?
//!
//! Attributes use [`IndexMap`] instead of `HashMap` so that iteration order
//! equals first-insertion order, which is what the builder emits. Re-setting
//! an existing key updates its value in place without moving its position.
//!
//! ## Examples
//!
//! ```rust
//! use dfml::{Node, Value};
//!
//! let mut node = Node::new("person");
//! node.set_attr_string("name", "John");
//! node.set_attr_integer("ages", 40);
//!
//! assert!(node.has_attr("name"));
//! assert_eq!(node.attr("ages"), Some(&Value::Integer(40)));
//! let keys: Vec<_> = node.attr_keys().collect();
//! assert_eq!(keys, vec!["name", "ages"]);
//! ```

use crate::{Element, Value};
use indexmap::IndexMap;

/// A named element with ordered attributes and ordered child elements.
///
/// The node owns its children; there are no back-references, so a tree is an
/// ordinary acyclic ownership structure. Children and attributes are mutated
/// only through the node's own methods.
///
/// # Examples
///
/// ```rust
/// use dfml::{Element, Node};
///
/// let mut red = Node::new("red");
/// red.add_child(Node::new("green"));
/// red.add_child(Node::new("blue"));
///
/// assert_eq!(red.name(), "red");
/// assert_eq!(red.children().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Node {
    name: String,
    attributes: IndexMap<String, Value>,
    children: Vec<Element>,
}

impl Node {
    /// Creates a node with the given name and no attributes or children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Returns the node's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the node.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets an attribute, overwriting any existing value for the key.
    ///
    /// A key set for the first time is appended to the iteration order;
    /// re-setting an existing key keeps its original position.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: Value) {
        self.attributes.insert(key.into(), value);
    }

    /// Sets a string attribute.
    pub fn set_attr_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set_attribute(key, Value::String(value.into()));
    }

    /// Sets an integer attribute.
    pub fn set_attr_integer(&mut self, key: impl Into<String>, value: i64) {
        self.set_attribute(key, Value::Integer(value));
    }

    /// Sets a double attribute.
    pub fn set_attr_double(&mut self, key: impl Into<String>, value: f64) {
        self.set_attribute(key, Value::Double(value));
    }

    /// Sets a boolean attribute.
    pub fn set_attr_boolean(&mut self, key: impl Into<String>, value: bool) {
        self.set_attribute(key, Value::Boolean(value));
    }

    /// Returns the value of an attribute, or `None` if the key is absent.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Returns `true` if the node carries an attribute with the given key.
    #[must_use]
    pub fn has_attr(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Returns the attribute keys in first-insertion order.
    pub fn attr_keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Returns the attribute pairs in first-insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn attr_count(&self) -> usize {
        self.attributes.len()
    }

    /// Appends a child element.
    pub fn add_child(&mut self, child: impl Into<Element>) {
        self.children.push(child.into());
    }

    /// Returns the child elements in document order.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Returns `true` if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
