//! Configuration options for DFML building.
//!
//! [`BuildOptions`] controls how the [`Builder`](crate::Builder) lays out
//! its output: formatted (one element per line, indented by nesting depth)
//! or compact (everything on one line, separated by single spaces), and
//! whether indentation uses tabs or a configurable number of spaces.
//!
//! ## Examples
//!
//! ```rust
//! use dfml::{to_string_with_options, BuildOptions, Node};
//!
//! let mut node = Node::new("root");
//! node.add_child(Node::new("child"));
//!
//! let compact = BuildOptions::compact();
//! assert_eq!(to_string_with_options(&node.into(), compact), "root { child }");
//! ```

/// Formatting options for the builder.
///
/// Defaults match the original DFML tooling: formatted output, tab
/// indentation, four spaces per level when space-indenting.
///
/// # Examples
///
/// ```rust
/// use dfml::BuildOptions;
///
/// let options = BuildOptions::new()
///     .with_spaces_for_indent(true)
///     .with_space_count(3);
/// assert!(options.format);
/// assert_eq!(options.space_count, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    /// Emit newlines and indentation. When `false`, children are separated
    /// by single spaces and no indentation is emitted at all.
    pub format: bool,
    /// Indent with spaces instead of tabs.
    pub use_spaces: bool,
    /// Spaces per indent level when space-indenting.
    pub space_count: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            format: true,
            use_spaces: false,
            space_count: 4,
        }
    }
}

impl BuildOptions {
    /// Creates the default options (formatted, tab indentation).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates compact options: no newlines, no indentation.
    #[must_use]
    pub fn compact() -> Self {
        BuildOptions {
            format: false,
            ..Default::default()
        }
    }

    /// Enables or disables formatted output.
    #[must_use]
    pub fn with_format(mut self, format: bool) -> Self {
        self.format = format;
        self
    }

    /// Selects spaces (`true`) or tabs (`false`) for indentation.
    #[must_use]
    pub fn with_spaces_for_indent(mut self, use_spaces: bool) -> Self {
        self.use_spaces = use_spaces;
        self
    }

    /// Sets the number of spaces per indent level.
    ///
    /// Only takes effect when space indentation is selected.
    #[must_use]
    pub fn with_space_count(mut self, space_count: usize) -> Self {
        self.space_count = space_count;
        self
    }
}
