//! INI parsing.
//!
//! Parsing happens in two steps:
//!
//! 1. [`classify`] looks at one line and decides whether it is a comment, a
//!    section header or an item. It is a pure function.
//! 2. [`Parser`] folds the classified lines of a whole text into an
//!    [`Ini`], attaching buffered comments to the next section or item.
//!
//! The parser is lenient and never fails. Blank lines, malformed lines and
//! comments at the end of the text are dropped. So are items with a blank name
//! and items outside of any section, either before the first header or after a
//! header with a blank name.
//!
//! ## Usage
//!
//! Most users should use [`crate::from_str`] or [`Ini::load_from_str`]:
//!
//! ```rust
//! use ini_doc::de::{classify, Line};
//!
//! assert_eq!(classify("  # note"), Some(Line::Comment("note")));
//! assert_eq!(classify("[ server ]"), Some(Line::Section("server")));
//! assert_eq!(
//!     classify("host = example.org"),
//!     Some(Line::Item { name: "host", value: "example.org" })
//! );
//! assert_eq!(classify("   "), None);
//! ```

use crate::{Ini, Item, NamedMap, Section};
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, trace};

static COMMENT: OnceLock<Regex> = OnceLock::new();
static SECTION: OnceLock<Regex> = OnceLock::new();
static ITEM: OnceLock<Regex> = OnceLock::new();

fn comment_regex() -> &'static Regex {
    COMMENT.get_or_init(|| Regex::new(r"^\s*[;#]\s*(.*)$").expect("invalid comment regex"))
}

fn section_regex() -> &'static Regex {
    SECTION.get_or_init(|| Regex::new(r"^\s*\[\s*([^\]]+?)\s*\]").expect("invalid section regex"))
}

fn item_regex() -> &'static Regex {
    ITEM.get_or_init(|| Regex::new(r"^\s*(.+?)\s*=\s*(.*)$").expect("invalid item regex"))
}

/// The construct a single line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `; text` or `# text`. The text may be empty.
    Comment(&'a str),
    /// `[name]`
    Section(&'a str),
    /// `name = value`. The value may be empty.
    Item { name: &'a str, value: &'a str },
}

/// Classifies one line of INI text.
///
/// Comments win over headers, and headers win over items, so `; a = b` is a
/// comment and `[a = b]` is a section. Captured parts are trimmed, so a name
/// may come back empty (`[ ]`, ` = v`). Returns `None` for blank or malformed lines.
///
/// # Examples
///
/// ```rust
/// use ini_doc::de::{classify, Line};
///
/// assert_eq!(classify("; [not a section]"), Some(Line::Comment("[not a section]")));
/// assert_eq!(classify("key ="), Some(Line::Item { name: "key", value: "" }));
/// assert_eq!(classify("[ ]"), Some(Line::Section("")));
/// assert_eq!(classify("no equals sign"), None);
/// ```
#[must_use]
pub fn classify(line: &str) -> Option<Line<'_>> {
    if let Some(caps) = comment_regex().captures(line) {
        let text = caps.get(1).map_or("", |m| m.as_str());
        return Some(Line::Comment(text.trim()));
    }

    if let Some(caps) = section_regex().captures(line) {
        return Some(Line::Section(caps.get(1)?.as_str().trim()));
    }

    if let Some(caps) = item_regex().captures(line) {
        let name = caps.get(1)?.as_str().trim();
        let value = caps.get(2).map_or("", |m| m.as_str()).trim();
        return Some(Line::Item { name, value });
    }

    None
}

/// Builds an [`Ini`] from INI text.
///
/// Comment lines are buffered until the next section header or item, which
/// takes the whole buffer as its comments. A name that appears twice replaces
/// the earlier entry, comments included.
///
/// A header with a blank name ends the current section without starting a new
/// one, so the items after it are dropped until the next valid header. An item
/// with a blank name is dropped. Both still consume the pending comments.
///
/// # Examples
///
/// ```rust
/// use ini_doc::de::Parser;
///
/// let ini = Parser::from_str("; top\n[a]\nk = 1\n[a]\nk = 2\n").parse();
/// assert_eq!(ini.get("a", "k"), Some("2"));
/// assert!(ini.section_comments("a").is_empty());
/// ```
pub struct Parser<'a> {
    input: &'a str,
    sections: NamedMap<Section>,
    pending: Vec<String>,
    current: Option<&'a str>,
}

impl<'a> Parser<'a> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str) -> Self {
        Parser {
            input,
            sections: NamedMap::new(),
            pending: Vec::new(),
            current: None,
        }
    }

    /// Consumes the whole input and returns the document.
    pub fn parse(mut self) -> Ini {
        let input = self.input;
        let mut line_count = 0;
        for (index, raw) in input.split('\n').enumerate() {
            line_count = index + 1;
            match classify(raw) {
                Some(line) => self.apply(line, line_count),
                None => trace!(line = line_count, "skipping blank or malformed line"),
            }
        }

        if !self.pending.is_empty() {
            debug!(
                count = self.pending.len(),
                "discarding trailing comments with nothing after them"
            );
        }

        debug!(
            sections = self.sections.len(),
            lines = line_count,
            "parsed INI text"
        );
        Ini::from_sections(self.sections)
    }

    fn apply(&mut self, line: Line<'a>, line_number: usize) {
        match line {
            Line::Comment(text) => self.pending.push(text.to_string()),
            Line::Section("") => {
                self.pending.clear();
                self.current = None;
                debug!(line = line_number, "dropping section header with a blank name");
            }
            Line::Section(name) => {
                let comments = std::mem::take(&mut self.pending);
                self.sections
                    .insert(name.to_string(), Section::with_comments(comments));
                self.current = Some(name);
            }
            Line::Item { name: "", .. } => {
                self.pending.clear();
                debug!(line = line_number, "dropping item with a blank name");
            }
            Line::Item { name, value } => {
                let comments = std::mem::take(&mut self.pending);
                let section = self.current.and_then(|s| self.sections.get_mut(s));
                match section {
                    Some(section) => section.put_item(name, Item::with_comments(value, comments)),
                    None => debug!(
                        line = line_number,
                        item = name,
                        "dropping item outside of any section"
                    ),
                }
            }
        }
    }
}
