//! DFML parsing.
//!
//! This module provides the recursive-descent [`Parser`] that turns DFML
//! source text into a forest of [`Element`]s. The grammar, informally:
//!
//! ```text
//! document   := element*
//! element    := node | data | comment
//! node       := ident attrlist? ( '{' element* '}' )?
//! attrlist   := '(' ( attr (',' attr)* )? ')'
//! attr       := ident (':' value)?
//! value      := string | number | boolean
//! comment    := '//' lineRest | '#' lineRest | '/*' blockBody '*/'
//! data       := string | number
//! ```
//!
//! Disambiguation rules:
//!
//! - A bare identifier that reads `true` or `false` is a boolean data
//!   element, never a node name.
//! - A leading digit, `-`, or `.` starts a number; any other identifier
//!   character starts a node. `-` and `_` remain valid inside identifiers,
//!   so `node-name` is a node.
//! - Strings have no escape syntax: the opening delimiter (`"` or `'`)
//!   terminates the string on its next occurrence, so a string cannot
//!   contain its own delimiter.
//!
//! All failures abort the parse with a [`ParseError`] carrying the 1-based
//! source line.
//!
//! ## Usage
//!
//! Most users should use [`crate::parse`]:
//!
//! ```rust
//! let elements = dfml::parse("red { green blue { yellow } }").unwrap();
//! assert_eq!(elements.len(), 1);
//! let red = elements[0].as_node().unwrap();
//! assert_eq!(red.children().len(), 2);
//! ```

use crate::scanner::CharCursor;
use crate::{Comment, Data, Element, Node, ParseError, Result, Value};

/// Identifier start: alphabetic or `_`.
fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

/// Identifier continuation: alphanumeric, `-`, or `_`.
fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_'
}

/// Characters that may appear in a numeric run.
fn is_number_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.' || ch == '-'
}

/// Characters collected when scanning a bare word in value position.
fn is_word_char(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

/// Per-attribute scanning state.
///
/// One attribute is scanned with a single dispatch per character: collect
/// the key, skip to the `:` separator, then dispatch on the value's first
/// character.
enum AttrState {
    ParsingName,
    FindSep,
    FindValue,
}

/// The DFML parser.
///
/// Owns one cursor bound to one input document; parsing consumes the
/// parser. Independent parsers can run in parallel on different documents.
///
/// # Examples
///
/// ```rust
/// use dfml::Parser;
///
/// let elements = Parser::new("mynode(test: 'hello')").parse().unwrap();
/// let node = elements[0].as_node().unwrap();
/// assert_eq!(node.attr("test").unwrap().text(), "hello");
/// ```
pub struct Parser {
    cursor: CharCursor,
}

impl Parser {
    /// Creates a parser over the given source text.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Parser {
            cursor: CharCursor::new(input),
        }
    }

    /// Parses the document into an ordered list of top-level elements.
    ///
    /// DFML has no implicit single root, so the result is a forest.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on the first grammar violation; no partial
    /// result is produced.
    pub fn parse(mut self) -> Result<Vec<Element>> {
        self.parse_children()
    }

    /// Parses elements until end of input or an unmatched `}`.
    ///
    /// A `}` ends the current scope; at top level this silently ends the
    /// parse, mirroring the nested-block termination rule.
    fn parse_children(&mut self) -> Result<Vec<Element>> {
        let mut children = Vec::new();

        while let Some(ch) = self.cursor.next() {
            match ch {
                ' ' | '\t' | '\n' | '\r' => {}
                '/' | '#' => {
                    self.cursor.back();
                    children.push(Element::Comment(self.parse_comment()?));
                }
                '"' | '\'' => {
                    let value = self.parse_string();
                    children.push(Element::Data(Data::create_with_value(value)));
                }
                '}' => return Ok(children),
                _ if is_ident_start(ch) => {
                    self.cursor.back();
                    children.push(self.parse_node()?);
                }
                _ if is_number_char(ch) => {
                    self.cursor.back();
                    let value = self.parse_number()?;
                    children.push(Element::Data(Data::create_with_value(value)));
                }
                _ => {
                    return Err(ParseError::InvalidChildCharacter {
                        ch,
                        line: self.cursor.line(),
                    })
                }
            }
        }

        Ok(children)
    }

    /// Parses a node: identifier, optional attribute list, optional `{}` block.
    ///
    /// Returns a data element instead when the identifier reads `true` or
    /// `false`.
    fn parse_node(&mut self) -> Result<Element> {
        let name = self.parse_ident();

        if name == "true" {
            return Ok(Element::Data(Data::create_boolean(true)));
        }
        if name == "false" {
            return Ok(Element::Data(Data::create_boolean(false)));
        }
        if name.is_empty() {
            return Err(ParseError::EmptyNodeName {
                line: self.cursor.line(),
            });
        }

        let mut node = Node::new(name);
        if self.cursor.at_end() {
            return Ok(Element::Node(node));
        }

        let mut attr_parsed = false;

        while let Some(ch) = self.cursor.next() {
            match ch {
                ' ' | '\t' | '\n' | '\r' => {}
                '(' => {
                    if attr_parsed {
                        return Err(ParseError::DuplicateAttributeList {
                            line: self.cursor.line(),
                        });
                    }
                    self.parse_attributes(&mut node)?;
                    attr_parsed = true;
                }
                '{' => {
                    for child in self.parse_children()? {
                        node.add_child(child);
                    }
                    break;
                }
                // A '}' belongs to the enclosing block: the node has no
                // children and the caller must observe the brace.
                '}' => {
                    self.cursor.back();
                    break;
                }
                _ => {
                    self.cursor.back();
                    break;
                }
            }
        }

        Ok(Element::Node(node))
    }

    /// Scans an identifier, leaving the terminating character unconsumed.
    fn parse_ident(&mut self) -> String {
        let mut name = String::new();
        while let Some(ch) = self.cursor.next() {
            if is_ident_char(ch) {
                name.push(ch);
            } else {
                self.cursor.back();
                break;
            }
        }
        name
    }

    /// Parses a `( ... )` attribute list onto `node`.
    ///
    /// The opening `(` has already been consumed by the caller.
    fn parse_attributes(&mut self, node: &mut Node) -> Result<()> {
        while let Some(ch) = self.cursor.next() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' => {}
                ')' => return Ok(()),
                _ if is_ident_start(ch) => {
                    self.cursor.back();
                    self.parse_attribute(node)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Parses one `key: value` pair (or a bare `key`) onto `node`.
    ///
    /// A bare key commits an empty-string value. A terminating `)` is
    /// pushed back so the attribute-list loop observes the end of the list.
    fn parse_attribute(&mut self, node: &mut Node) -> Result<()> {
        let mut state = AttrState::ParsingName;
        let mut key = String::new();

        while let Some(ch) = self.cursor.next() {
            match state {
                AttrState::ParsingName => match ch {
                    ' ' | '\t' | '\n' | '\r' | ':' => {
                        self.cursor.back();
                        state = AttrState::FindSep;
                    }
                    ',' | ')' => {
                        node.set_attr_string(key, "");
                        self.cursor.back();
                        return Ok(());
                    }
                    _ if is_ident_char(ch) => key.push(ch),
                    _ => {}
                },
                AttrState::FindSep => match ch {
                    ' ' | '\t' | '\n' | '\r' => {}
                    ':' => state = AttrState::FindValue,
                    ',' => {
                        node.set_attr_string(key, "");
                        return Ok(());
                    }
                    ')' => {
                        node.set_attr_string(key, "");
                        self.cursor.back();
                        return Ok(());
                    }
                    _ => {}
                },
                AttrState::FindValue => match ch {
                    ' ' | '\t' | '\n' | '\r' => {}
                    '"' | '\'' => {
                        let value = self.parse_string();
                        node.set_attribute(key.clone(), value);
                    }
                    ',' => return Ok(()),
                    ')' => {
                        self.cursor.back();
                        return Ok(());
                    }
                    _ if is_number_char(ch) => {
                        self.cursor.back();
                        let value = self.parse_number()?;
                        node.set_attribute(key.clone(), value);
                    }
                    _ if is_word_char(ch) => {
                        self.cursor.back();
                        let value = self.parse_boolean()?;
                        node.set_attribute(key.clone(), value);
                    }
                    _ => {}
                },
            }
        }

        Ok(())
    }

    /// Scans a string delimited by the character just consumed.
    ///
    /// Characters are copied verbatim until the delimiter recurs; there is
    /// no escape syntax. End of input terminates the string silently.
    fn parse_string(&mut self) -> Value {
        let delim = self.cursor.current();
        let mut result = String::new();
        while let Some(ch) = self.cursor.next() {
            if ch == delim {
                break;
            }
            result.push(ch);
        }
        Value::String(result)
    }

    /// Scans a maximal numeric run and converts it.
    ///
    /// Any `.` in the run selects a double, otherwise an integer. The
    /// canonical text reported for the value is the runtime's own rendering
    /// of the converted number, not an echo of the source digits.
    fn parse_number(&mut self) -> Result<Value> {
        let mut literal = String::new();
        let mut double = false;

        while let Some(ch) = self.cursor.next() {
            if !is_number_char(ch) {
                self.cursor.back();
                break;
            }
            if ch == '.' {
                double = true;
            }
            literal.push(ch);
        }

        let parsed = if double {
            literal.parse::<f64>().map(Value::Double).ok()
        } else {
            literal.parse::<i64>().map(Value::Integer).ok()
        };

        parsed.ok_or_else(|| ParseError::NumberConversion {
            literal,
            line: self.cursor.line(),
        })
    }

    /// Scans a bare word in value position; only `true`/`false` are valid.
    fn parse_boolean(&mut self) -> Result<Value> {
        let mut word = String::new();
        while let Some(ch) = self.cursor.next() {
            if !is_word_char(ch) {
                self.cursor.back();
                break;
            }
            word.push(ch);
        }

        match word.as_str() {
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            _ => Err(ParseError::BooleanConversion {
                word,
                line: self.cursor.line(),
            }),
        }
    }

    /// Parses a `#`, `//`, or `/* */` comment.
    ///
    /// The terminating newline of a single-line comment is pushed back so
    /// it still separates elements upstream. A block comment also ends at
    /// end of input.
    fn parse_comment(&mut self) -> Result<Comment> {
        let single_line = match self.cursor.next() {
            Some('/') => match self.cursor.next() {
                Some('/') => true,
                Some('*') => false,
                _ => {
                    return Err(ParseError::UnterminatedComment {
                        line: self.cursor.line(),
                    })
                }
            },
            // The caller dispatched on '/' or '#'.
            _ => true,
        };

        let mut text = String::new();
        while let Some(ch) = self.cursor.next() {
            match ch {
                '\r' => {
                    if !single_line {
                        text.push(ch);
                    }
                }
                '\n' => {
                    if single_line {
                        self.cursor.back();
                        break;
                    }
                    text.push(ch);
                }
                '*' if !single_line => match self.cursor.next() {
                    Some('/') | None => break,
                    Some(other) => text.push(other),
                },
                _ => text.push(ch),
            }
        }

        Ok(Comment::create_with_content(text))
    }
}
