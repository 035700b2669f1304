//! The in-memory INI document and its mutation API.
//!
//! ## Core Types
//!
//! - [`Ini`]: the document; owns every section, its remembered filename and its
//!   [`FormatOptions`]
//! - [`Section`]: ordered items plus the comments written above the header
//! - [`Item`]: a string value plus the comments written above its line
//!
//! Ownership is strictly top-down: no back references, no sharing.
//!
//! ## Not found is not an error
//!
//! Every lookup or mutation whose target is missing reports it through its return
//! value (`false`, `None`, or an empty slice) and leaves the document untouched.
//! Nothing in this module panics or returns [`Error`](crate::Error).
//!
//! ## Examples
//!
//! ```rust
//! use ini_doc::Ini;
//!
//! let mut ini = ini_doc::from_str("[server]\nhost = localhost\n");
//!
//! assert_eq!(ini.get("server", "host"), Some("localhost"));
//! assert!(ini.set("server", "host", "127.0.0.1"));
//! assert!(!ini.set("server", "port", "80")); // item does not exist
//!
//! ini.set_or_create("server", "port", "80");
//! assert_eq!(ini.items("server"), vec!["host", "port"]);
//! ```

use crate::{FormatOptions, NamedMap};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A single `name = value` entry and the comments directly above it.
///
/// Values are stored verbatim as strings; callers parse numbers or booleans
/// themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    value: String,
    comments: Vec<String>,
}

impl Item {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Item {
            value: value.into(),
            comments: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_comments(value: impl Into<String>, comments: Vec<String>) -> Self {
        Item {
            value: value.into(),
            comments,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }
}

/// A named group of items. Its comments describe the section only, never its items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    items: NamedMap<Item>,
    comments: Vec<String>,
}

impl Section {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_comments(comments: Vec<String>) -> Self {
        Section {
            items: NamedMap::new(),
            comments,
        }
    }

    #[must_use]
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// The items of this section, in order.
    #[must_use]
    pub fn items(&self) -> &NamedMap<Item> {
        &self.items
    }

    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Inserts or replaces an item, comments included.
    pub(crate) fn put_item(&mut self, name: &str, item: Item) {
        self.items.insert(name.to_string(), item);
    }
}

/// An INI document.
///
/// Sections and items are kept in insertion order, so reading, listing and
/// serializing are deterministic. Loading text into a document replaces all of its
/// sections and resets its [`FormatOptions`] to the defaults.
///
/// # Examples
///
/// ```rust
/// use ini_doc::Ini;
///
/// let mut ini = Ini::new();
/// assert!(ini.add_section("db"));
/// assert!(!ini.add_section("db"));
///
/// assert!(ini.add_item("db", "user", "admin"));
/// assert!(ini.add_section_comment("db", "database settings"));
///
/// assert_eq!(ini.to_string(), "; database settings\r\n[db]\r\n  user = admin\r\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ini {
    sections: NamedMap<Section>,
    #[serde(skip)]
    pub(crate) filename: Option<PathBuf>,
    #[serde(skip)]
    options: FormatOptions,
}

impl Ini {
    /// Creates an empty document with default formatting options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole document with the content parsed from `text`.
    ///
    /// The formatting options are reset to [`FormatOptions::default()`]; the
    /// remembered filename is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::{FormatOptions, Ini};
    ///
    /// let mut ini = Ini::new();
    /// ini.set_or_create("old", "key", "value");
    /// ini.set_options(FormatOptions::compact());
    ///
    /// ini.load_from_str("[new]\nkey = value\n");
    /// assert_eq!(ini.sections(), vec!["new"]);
    /// assert_eq!(ini.options(), &FormatOptions::default());
    /// ```
    pub fn load_from_str(&mut self, text: &str) {
        let parsed = crate::de::Parser::from_str(text).parse();
        self.sections = parsed.sections;
        self.options = FormatOptions::default();
    }

    pub(crate) fn from_sections(sections: NamedMap<Section>) -> Self {
        Ini {
            sections,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut FormatOptions {
        &mut self.options
    }

    pub fn set_options(&mut self, options: FormatOptions) {
        self.options = options;
    }

    /// Returns the section names, in order.
    #[must_use]
    pub fn sections(&self) -> Vec<&str> {
        self.sections.keys().map(String::as_str).collect()
    }

    /// Returns the item names of `section`, in order. Empty if the section is absent.
    #[must_use]
    pub fn items(&self, section: &str) -> Vec<&str> {
        self.sections
            .get(section)
            .map(|s| s.items.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Iterates over `(name, section)` pairs, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, s)| (name.as_str(), s))
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[must_use]
    pub fn section_exists(&self, section: &str) -> bool {
        self.sections.contains(section)
    }

    /// Returns `true` if `item` exists in `section`; `false` if either is absent.
    #[must_use]
    pub fn item_exists(&self, section: &str, item: &str) -> bool {
        self.item(section, item).is_some()
    }

    /// Alias for [`Ini::item_exists`].
    #[must_use]
    pub fn exists(&self, section: &str, item: &str) -> bool {
        self.item_exists(section, item)
    }

    fn item(&self, section: &str, item: &str) -> Option<&Item> {
        self.sections.get(section)?.items.get(item)
    }

    fn item_mut(&mut self, section: &str, item: &str) -> Option<&mut Item> {
        self.sections.get_mut(section)?.items.get_mut(item)
    }

    /// Returns the value of `item` in `section`, or `None` if either is absent.
    #[must_use]
    pub fn get(&self, section: &str, item: &str) -> Option<&str> {
        self.item(section, item).map(Item::value)
    }

    /// Sets the value of an existing item. Returns `false` and changes nothing if the
    /// section or item does not exist.
    pub fn set(&mut self, section: &str, item: &str, value: &str) -> bool {
        match self.item_mut(section, item) {
            Some(entry) => {
                entry.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Adds an empty section. Returns `false` if it already exists.
    pub fn add_section(&mut self, section: &str) -> bool {
        if self.sections.contains(section) {
            return false;
        }
        self.sections.insert(section.to_string(), Section::new());
        true
    }

    /// Adds an item, creating its section first if needed.
    ///
    /// Returns `false` only if the item already exists; its value is left as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::Ini;
    ///
    /// let mut ini = Ini::new();
    /// assert!(ini.add_item("S", "K", "V"));
    /// assert!(ini.section_exists("S"));
    /// assert!(!ini.add_item("S", "K", "other"));
    /// assert_eq!(ini.get("S", "K"), Some("V"));
    /// ```
    pub fn add_item(&mut self, section: &str, item: &str, value: &str) -> bool {
        let target = self.sections.get_or_insert_with(section, Section::new);
        if target.items.contains(item) {
            return false;
        }
        target.put_item(item, Item::new(value));
        true
    }

    /// Sets `value`, creating the section and the item as needed. Never fails.
    pub fn set_or_create(&mut self, section: &str, item: &str, value: &str) {
        let target = self.sections.get_or_insert_with(section, Section::new);
        let entry = target.items.get_or_insert_with(item, Item::default);
        entry.value = value.to_string();
    }

    /// Renames a section, keeping its items, comments and position.
    ///
    /// Returns `false` if `old` does not exist. A section already named `new` is
    /// replaced, not merged.
    pub fn rename_section(&mut self, old: &str, new: &str) -> bool {
        self.sections.rename(old, new)
    }

    /// Renames an item within `section`, keeping its value, comments and position.
    ///
    /// Returns `false` if the section or the item does not exist. An item already
    /// named `new` is replaced.
    pub fn rename_item(&mut self, section: &str, old: &str, new: &str) -> bool {
        match self.sections.get_mut(section) {
            Some(target) => target.items.rename(old, new),
            None => false,
        }
    }

    /// Deletes an item. Returns `false` if it does not exist.
    pub fn delete_item(&mut self, section: &str, item: &str) -> bool {
        match self.sections.get_mut(section) {
            Some(target) => target.items.remove(item).is_some(),
            None => false,
        }
    }

    /// Deletes a section with all of its items. Returns `false` if it does not exist.
    pub fn delete_section(&mut self, section: &str) -> bool {
        self.sections.remove(section).is_some()
    }

    /// Returns the comments above `section`'s header, empty if the section is absent.
    #[must_use]
    pub fn section_comments(&self, section: &str) -> &[String] {
        self.sections
            .get(section)
            .map(Section::comments)
            .unwrap_or_default()
    }

    /// Returns the comments above `item`'s line, empty if the item is absent.
    #[must_use]
    pub fn item_comments(&self, section: &str, item: &str) -> &[String] {
        self.item(section, item)
            .map(Item::comments)
            .unwrap_or_default()
    }

    /// Appends a comment to a section. Returns `false` if the section does not exist.
    pub fn add_section_comment(&mut self, section: &str, comment: &str) -> bool {
        with_comments(self.sections.get_mut(section).map(|s| &mut s.comments), |c| {
            c.push(comment.to_string())
        })
    }

    /// Appends a comment to an item. Returns `false` if the item does not exist.
    pub fn add_item_comment(&mut self, section: &str, item: &str, comment: &str) -> bool {
        with_comments(self.item_mut(section, item).map(|i| &mut i.comments), |c| {
            c.push(comment.to_string())
        })
    }

    /// Removes every comment of a section. Returns `false` if the section does not exist.
    pub fn delete_section_comments(&mut self, section: &str) -> bool {
        with_comments(
            self.sections.get_mut(section).map(|s| &mut s.comments),
            Vec::clear,
        )
    }

    /// Removes every comment of an item. Returns `false` if the item does not exist.
    pub fn delete_item_comments(&mut self, section: &str, item: &str) -> bool {
        with_comments(self.item_mut(section, item).map(|i| &mut i.comments), Vec::clear)
    }

    /// Removes the comment at zero-based `index` from a section.
    ///
    /// Returns `false` only if the section does not exist. An out-of-range index
    /// removes nothing and still returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::Ini;
    ///
    /// let mut ini = ini_doc::from_str("; one\n; two\n[s]\n");
    /// assert!(ini.delete_section_comment("s", 0));
    /// assert_eq!(ini.section_comments("s"), ["two"]);
    ///
    /// assert!(ini.delete_section_comment("s", 7));
    /// assert_eq!(ini.section_comments("s"), ["two"]);
    /// ```
    pub fn delete_section_comment(&mut self, section: &str, index: usize) -> bool {
        with_comments(
            self.sections.get_mut(section).map(|s| &mut s.comments),
            |c| remove_at(c, index),
        )
    }

    /// Removes the comment at zero-based `index` from an item.
    ///
    /// Same contract as [`Ini::delete_section_comment`].
    pub fn delete_item_comment(&mut self, section: &str, item: &str, index: usize) -> bool {
        with_comments(self.item_mut(section, item).map(|i| &mut i.comments), |c| {
            remove_at(c, index)
        })
    }
}

fn with_comments<F>(comments: Option<&mut Vec<String>>, edit: F) -> bool
where
    F: FnOnce(&mut Vec<String>),
{
    match comments {
        Some(comments) => {
            edit(comments);
            true
        }
        None => false,
    }
}

fn remove_at(comments: &mut Vec<String>, index: usize) {
    if index < comments.len() {
        comments.remove(index);
    }
}

impl fmt::Display for Ini {
    /// Renders the document with its own [`FormatOptions`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::to_string(self))
    }
}
