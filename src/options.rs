//! Formatting options for INI output.
//!
//! [`FormatOptions`] controls everything about how a document is rendered except
//! its content: the strings placed around section headers, item names and values,
//! the blank space between items and sections, and whether comments are written.
//!
//! Every [`Ini`](crate::Ini) owns a `FormatOptions`. A fresh document starts with
//! [`FormatOptions::default()`], and loading text into a document (from a string or
//! a file) resets its options back to that default.
//!
//! ## Examples
//!
//! ```rust
//! use ini_doc::{FormatOptions, Ini};
//!
//! let mut ini = Ini::new();
//! ini.set_or_create("server", "port", "8080");
//!
//! // Default: indented items, spaces around '=', blank line between items
//! assert_eq!(ini.to_string(), "[server]\r\n  port = 8080\r\n");
//!
//! // Compact: bare `key=value` lines
//! let text = ini_doc::to_string_with_options(&ini, FormatOptions::compact());
//! assert_eq!(text, "[server]\r\nport=8080\r\n");
//! ```

/// Line terminator used for every emitted line, whatever the platform.
pub const LINE_ENDING: &str = "\r\n";

/// Configuration options for INI serialization.
///
/// | Field | Default | Placement |
/// |-------|---------|-----------|
/// | `section_prefix` | `""` | before each section header and each section comment |
/// | `item_prefix` | `"  "` | before each item line and each item comment |
/// | `item_suffix` | `" "` | between the item name and `=` |
/// | `value_prefix` | `" "` | between `=` and the value |
/// | `section_separator` | `"\r\n"` | after the last item of every section but the last |
/// | `item_separator` | `"\r\n"` | between consecutive items of a section |
/// | `with_comments` | `true` | comments are written at all |
/// | `comment_prefix` | `"; "` | before each comment's text |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    pub section_prefix: String,
    pub item_prefix: String,
    pub item_suffix: String,
    pub value_prefix: String,
    pub section_separator: String,
    pub item_separator: String,
    pub with_comments: bool,
    pub comment_prefix: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            section_prefix: String::new(),
            item_prefix: "  ".to_string(),
            item_suffix: " ".to_string(),
            value_prefix: " ".to_string(),
            section_separator: LINE_ENDING.to_string(),
            item_separator: LINE_ENDING.to_string(),
            with_comments: true,
            comment_prefix: "; ".to_string(),
        }
    }
}

impl FormatOptions {
    /// Creates the default options (see the table on [`FormatOptions`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::FormatOptions;
    ///
    /// let options = FormatOptions::new();
    /// assert_eq!(options.item_prefix, "  ");
    /// assert!(options.with_comments);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for tight output: `key=value` lines, no blank lines, `;` comments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::FormatOptions;
    ///
    /// let options = FormatOptions::compact();
    /// assert!(options.item_prefix.is_empty());
    /// assert!(options.section_separator.is_empty());
    /// ```
    #[must_use]
    pub fn compact() -> Self {
        FormatOptions {
            section_prefix: String::new(),
            item_prefix: String::new(),
            item_suffix: String::new(),
            value_prefix: String::new(),
            section_separator: String::new(),
            item_separator: String::new(),
            with_comments: true,
            comment_prefix: ";".to_string(),
        }
    }

    /// Sets the string written before each section header and its comments.
    #[must_use]
    pub fn with_section_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.section_prefix = prefix.into();
        self
    }

    /// Sets the string written before each item line and its comments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::FormatOptions;
    ///
    /// let options = FormatOptions::new().with_item_prefix("\t");
    /// assert_eq!(options.item_prefix, "\t");
    /// ```
    #[must_use]
    pub fn with_item_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.item_prefix = prefix.into();
        self
    }

    /// Sets the string written between an item name and `=`.
    #[must_use]
    pub fn with_item_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.item_suffix = suffix.into();
        self
    }

    /// Sets the string written between `=` and the value.
    #[must_use]
    pub fn with_value_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.value_prefix = prefix.into();
        self
    }

    /// Sets the string inserted after a section's last item, except for the final section.
    #[must_use]
    pub fn with_section_separator(mut self, separator: impl Into<String>) -> Self {
        self.section_separator = separator.into();
        self
    }

    /// Sets the string inserted between consecutive items of one section.
    #[must_use]
    pub fn with_item_separator(mut self, separator: impl Into<String>) -> Self {
        self.item_separator = separator.into();
        self
    }

    /// Enables or disables comment output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::FormatOptions;
    ///
    /// let options = FormatOptions::new().with_comments(false);
    /// assert!(!options.with_comments);
    /// ```
    #[must_use]
    pub fn with_comments(mut self, enabled: bool) -> Self {
        self.with_comments = enabled;
        self
    }

    /// Sets the string written before the text of each comment line.
    ///
    /// Only `;` and `#` are recognised as comment markers when the text is parsed
    /// again, so other prefixes produce output that does not read back as comments.
    #[must_use]
    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = prefix.into();
        self
    }
}
