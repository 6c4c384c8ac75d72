//! # dfml
//!
//! Parser and builder for DFML (Dragonfly Markup Language), a compact
//! textual markup of named nodes carrying ordered keyed attributes and
//! ordered child content.
//!
//! ## What is DFML?
//!
//! A DFML document is a forest of elements. A node has a name, an optional
//! parenthesized attribute list, and an optional brace block of children;
//! children may themselves be nodes, typed scalar data, or comments:
//!
//! ```text
//! animals {
//!     bird {
//!         /*A comment*/
//!         duck(fly: true, say: "qack", name: "Donald") {
//!             20
//!             30
//!         }
//!     }
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Round-trip by design**: [`parse`] and [`to_string`] are structural
//!   inverses for trees built through the public API (comments normalize to
//!   block form)
//! - **Ordered attributes**: attribute iteration order is first-insertion
//!   order, backed by `IndexMap`
//! - **Typed scalars**: string, integer, double, and boolean values with a
//!   canonical textual form
//! - **Line diagnostics**: every parse error carries the 1-based source line
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use dfml::{parse, to_string, ValueKind};
//!
//! let elements = parse("mynode(test: 'hello', number: 40, boolean: false)").unwrap();
//! let node = elements[0].as_node().unwrap();
//!
//! assert_eq!(node.name(), "mynode");
//! assert_eq!(node.attr("number").unwrap().kind(), ValueKind::Integer);
//!
//! assert_eq!(
//!     to_string(&elements[0]),
//!     r#"mynode(test: "hello", number: 40, boolean: false)"#
//! );
//! ```
//!
//! ## Building Trees Programmatically
//!
//! ```rust
//! use dfml::{Comment, Data, Node};
//!
//! let mut node = Node::new("test_comments");
//! node.add_child(Comment::create_with_content("comment 1"));
//! node.add_child(Data::create_integer(20000));
//!
//! let text = dfml::to_string(&node.into());
//! assert_eq!(text, "test_comments {\n\t/*comment 1*/\n\t20000\n}");
//! ```
//!
//! ## Scope
//!
//! The crate performs no I/O: loading DFML text from files or the network,
//! command-line entry points, and schema validation are the host
//! application's concern. Strings have no escape syntax — a string value
//! cannot contain its own delimiter character (see [`Builder`] for the
//! quoting policy).

pub mod builder;
pub mod element;
pub mod error;
pub mod node;
pub mod options;
pub mod parser;
mod scanner;
pub mod value;

pub use builder::Builder;
pub use element::{Comment, Data, Element, ElementKind};
pub use error::{ParseError, Result};
pub use node::Node;
pub use options::BuildOptions;
pub use parser::Parser;
pub use value::{Value, ValueKind};

/// Parses DFML source text into an ordered list of top-level elements.
///
/// # Examples
///
/// ```rust
/// let elements = dfml::parse("red { green blue { yellow } }").unwrap();
/// assert_eq!(elements.len(), 1);
/// assert_eq!(elements[0].as_node().unwrap().name(), "red");
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] carrying the 1-based source line on the first
/// grammar violation; no partial result is produced.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(input: &str) -> Result<Vec<Element>> {
    Parser::new(input).parse()
}

/// Serializes an element to DFML text with default formatting
/// (one element per line, tab indentation).
///
/// # Examples
///
/// ```rust
/// use dfml::{Data, Node};
///
/// let mut node = Node::new("test_node");
/// node.add_child(Data::create_string("string data"));
/// assert_eq!(dfml::to_string(&node.into()), "test_node {\n\t\"string data\"\n}");
/// ```
#[must_use]
pub fn to_string(element: &Element) -> String {
    to_string_with_options(element, BuildOptions::default())
}

/// Serializes an element to DFML text with custom formatting options.
///
/// # Examples
///
/// ```rust
/// use dfml::{BuildOptions, Node};
///
/// let mut node = Node::new("root");
/// node.add_child(Node::new("child"));
///
/// let options = BuildOptions::new().with_spaces_for_indent(true).with_space_count(2);
/// assert_eq!(
///     dfml::to_string_with_options(&node.into(), options),
///     "root {\n  child\n}"
/// );
/// ```
#[must_use]
pub fn to_string_with_options(element: &Element, options: BuildOptions) -> String {
    Builder::new(options).build(element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_rebuild_single_node() {
        let elements = parse("test").unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(to_string(&elements[0]), "test");
    }

    #[test]
    fn forest_at_top_level() {
        let elements = parse("one two three").unwrap();
        let names: Vec<_> = elements
            .iter()
            .filter_map(|e| e.as_node().map(Node::name))
            .collect();
        assert_eq!(names, vec!["one", "two", "three"]);
    }

    #[test]
    fn compact_options_round_trip() {
        let elements = parse("a { b { c } d }").unwrap();
        let compact = to_string_with_options(&elements[0], BuildOptions::compact());
        assert_eq!(compact, "a { b { c } d }");
        assert_eq!(parse(&compact).unwrap(), elements);
    }
}
