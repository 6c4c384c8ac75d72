//! DFML building.
//!
//! This module provides the [`Builder`] that serializes an in-memory tree
//! back into DFML text. Output layout is controlled by
//! [`BuildOptions`](crate::BuildOptions): formatted mode emits one element
//! per line indented by nesting depth; compact mode separates everything
//! with single spaces.
//!
//! Building is infallible: the element set is closed, so every variant has
//! an emission rule.
//!
//! ## Usage
//!
//! Most users should use [`crate::to_string`]:
//!
//! ```rust
//! use dfml::Node;
//!
//! let mut node = Node::new("mynode");
//! node.set_attr_string("test", "hello");
//! node.set_attr_integer("number", 40);
//! node.set_attr_boolean("boolean", false);
//!
//! assert_eq!(
//!     dfml::to_string(&node.into()),
//!     r#"mynode(test: "hello", number: 40, boolean: false)"#
//! );
//! ```

use crate::{BuildOptions, Comment, Data, Element, Node, Value};

/// The DFML builder.
///
/// Carries the formatting options and the current indentation level. The
/// level always returns to its entry value after a call completes, so
/// sequential reuse of one builder is safe.
///
/// # Examples
///
/// ```rust
/// use dfml::{BuildOptions, Builder, Node};
///
/// let mut builder = Builder::new(BuildOptions::compact());
/// let mut node = Node::new("root");
/// node.add_child(Node::new("child"));
/// assert_eq!(builder.build_node(&node), "root { child }");
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    options: BuildOptions,
    level: usize,
}

impl Builder {
    /// Creates a builder with the given options.
    #[must_use]
    pub fn new(options: BuildOptions) -> Self {
        Builder { options, level: 0 }
    }

    /// Serializes any element.
    pub fn build(&mut self, element: &Element) -> String {
        match element {
            Element::Node(node) => self.build_node(node),
            Element::Data(data) => self.build_data(data),
            Element::Comment(comment) => self.build_comment(comment),
        }
    }

    /// Serializes a node: name, attribute list, then an optional brace
    /// block with one child per line (or space-separated in compact mode).
    pub fn build_node(&mut self, node: &Node) -> String {
        let mut result = self.indent();
        result.push_str(node.name());

        if node.attr_count() > 0 {
            result.push_str(&self.build_attributes(node));
        }

        if !node.children().is_empty() {
            result.push_str(if self.options.format { " {\n" } else { " { " });
            self.level += 1;
            for child in node.children() {
                result.push_str(&self.build(child));
                result.push_str(if self.options.format { "\n" } else { " " });
            }
            self.level -= 1;
            result.push_str(&self.indent());
            result.push('}');
        }

        result
    }

    /// Serializes a data leaf.
    pub fn build_data(&mut self, data: &Data) -> String {
        let mut result = self.indent();
        result.push_str(&build_value(data.value()));
        result
    }

    /// Serializes a comment.
    ///
    /// Always emits the block form, regardless of the surface form the
    /// comment was parsed from.
    pub fn build_comment(&mut self, comment: &Comment) -> String {
        format!("{}/*{}*/", self.indent(), comment.text())
    }

    fn build_attributes(&self, node: &Node) -> String {
        let attrs: Vec<String> = node
            .attributes()
            .map(|(key, value)| format!("{}: {}", key, build_value(value)))
            .collect();
        format!("({})", attrs.join(", "))
    }

    /// Indentation for the current nesting level.
    fn indent(&self) -> String {
        if !self.options.format || self.level == 0 {
            return String::new();
        }
        if self.options.use_spaces {
            " ".repeat(self.options.space_count * self.level)
        } else {
            "\t".repeat(self.level)
        }
    }
}

/// Serializes one value.
///
/// Integer, double, and boolean values emit their canonical text. Strings
/// are quoted under a conflict policy: text containing `"` is wrapped in
/// single quotes; text containing both quote characters has every `"`
/// stripped before double-quoting. The strip is lossy — the format has no
/// escape syntax, so a string holding both delimiters cannot be
/// represented faithfully.
fn build_value(value: &Value) -> String {
    match value {
        Value::String(s) => {
            let has_double = s.contains('"');
            let has_single = s.contains('\'');

            if has_double && has_single {
                format!("\"{}\"", s.replace('"', ""))
            } else if has_double {
                format!("'{}'", s)
            } else {
                format!("\"{}\"", s)
            }
        }
        other => other.text(),
    }
}
