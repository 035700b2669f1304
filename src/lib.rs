//! # ini_doc
//!
//! Read, edit and write INI configuration text without losing its comments.
//!
//! ## What it does
//!
//! - **Lenient parsing**: every line is a comment, a `[section]` header, a
//!   `name = value` item, or ignored. Malformed lines never produce errors.
//! - **Comments kept**: comment lines are attached to the section or item that
//!   follows them and are written back out on save.
//! - **Ordered**: sections and items keep the order they were read or added in,
//!   so output is deterministic.
//! - **Configurable output**: prefixes, separators and comment style are set per
//!   document through [`FormatOptions`].
//!
//! ## Quick Start
//!
//! ```rust
//! let text = "\
//! ; top comment
//! [section1]
//! item1=value1
//! ";
//!
//! let mut ini = ini_doc::from_str(text);
//! assert_eq!(ini.sections(), vec!["section1"]);
//! assert_eq!(ini.section_comments("section1"), ["top comment"]);
//! assert!(ini.item_comments("section1", "item1").is_empty());
//! assert_eq!(ini.get("section1", "item1"), Some("value1"));
//!
//! ini.set("section1", "item1", "changed");
//! ini.add_item("section2", "port", "80");
//!
//! let out = ini.to_string();
//! assert!(out.starts_with("; top comment\r\n[section1]\r\n  item1 = changed\r\n"));
//! ```
//!
//! ### Files
//!
//! ```rust,no_run
//! use ini_doc::Ini;
//!
//! # fn main() -> ini_doc::Result<()> {
//! let mut ini = Ini::open("config.ini")?;
//! let port: u16 = ini.get("server", "port").and_then(|p| p.parse().ok()).unwrap_or(80);
//! ini.set_or_create("server", "port", &(port + 1).to_string());
//! ini.save()?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Building documents in code
//!
//! ```rust
//! use ini_doc::ini;
//!
//! let config = ini! {
//!     "database" => { "user" => "admin", "timeout" => "30" },
//! };
//! assert_eq!(config.get("database", "timeout"), Some("30"));
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`trace` for skipped lines, `debug` for
//! dropped items, discarded comments and file access). Install any subscriber
//! to see them.
//!
//! ## Format
//!
//! See the [`format`] module for the exact dialect.

pub mod de;
pub mod document;
pub mod error;
pub mod format;
pub mod fs;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;

pub use de::{Line, Parser};
pub use document::{Ini, Item, Section};
pub use error::{Error, Result};
pub use map::NamedMap;
pub use options::FormatOptions;
pub use ser::Serializer;

use std::io;

/// Parses INI text into a new document.
///
/// Never fails: lines that are not comments, headers or items are skipped.
///
/// # Examples
///
/// ```rust
/// let ini = ini_doc::from_str("[a]\nx = 1\nnot a valid line\n");
/// assert_eq!(ini.items("a"), vec!["x"]);
/// ```
#[must_use]
pub fn from_str(s: &str) -> Ini {
    Parser::from_str(s).parse()
}

/// Parses INI text from bytes.
///
/// # Errors
///
/// Returns [`Error::InvalidUtf8`] if the bytes are not valid UTF-8.
///
/// # Examples
///
/// ```rust
/// let ini = ini_doc::from_slice(b"[a]\r\nx = 1\r\n").unwrap();
/// assert_eq!(ini.get("a", "x"), Some("1"));
///
/// assert!(ini_doc::from_slice(&[b'[', 0xff, b']']).is_err());
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Ini> {
    let s = std::str::from_utf8(v)?;
    Ok(from_str(s))
}

/// Reads everything from `reader` and parses it.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails or the input is not valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Ini>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(from_str(&string))
}

/// Renders a document using its own [`FormatOptions`].
///
/// # Examples
///
/// ```rust
/// let ini = ini_doc::from_str("[a]\nx=1\n");
/// assert_eq!(ini_doc::to_string(&ini), "[a]\r\n  x = 1\r\n");
/// ```
#[must_use]
pub fn to_string(ini: &Ini) -> String {
    to_string_with_options(ini, ini.options().clone())
}

/// Renders a document with the given options instead of its own.
///
/// # Examples
///
/// ```rust
/// use ini_doc::FormatOptions;
///
/// let ini = ini_doc::from_str("; note\n[a]\nx=1\n");
/// let options = FormatOptions::compact().with_comments(false);
/// assert_eq!(ini_doc::to_string_with_options(&ini, options), "[a]\r\nx=1\r\n");
/// ```
#[must_use]
pub fn to_string_with_options(ini: &Ini, options: FormatOptions) -> String {
    let mut serializer = Serializer::new(options);
    serializer.serialize(ini);
    serializer.into_inner()
}

/// Writes a document to `writer` using its own [`FormatOptions`].
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, ini: &Ini) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, ini, ini.options().clone())
}

/// Writes a document to `writer` with the given options.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(mut writer: W, ini: &Ini, options: FormatOptions) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(ini, options);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
