//! The INI dialect read and written by this crate.
//!
//! This module only holds documentation.
//!
//! # Lines
//!
//! Text is split on `\n`. A trailing `\r` is removed by trimming, so CRLF input
//! reads the same as LF input. Each line is tested against three patterns, and
//! the first that matches decides what the line is:
//!
//! | Construct | Pattern | Captured |
//! |-----------|---------|----------|
//! | Comment | `^\s*[;#]\s*(.*)$` | comment text, may be empty |
//! | Section | `^\s*\[\s*([^\]]+?)\s*\]` | section name |
//! | Item | `^\s*(.+?)\s*=\s*(.*)$` | item name, value (may be empty) |
//!
//! Captures are trimmed. Anything that matches none of the three (blank lines,
//! stray text, `[]`, `= value`) is skipped without error.
//!
//! A name that is blank after trimming is never stored. A header such as `[ ]`
//! closes the current section, and the items up to the next valid header are
//! dropped. An item such as ` = value` is dropped. In both cases the comments
//! above the line are discarded with it rather than moving to the next
//! construct.
//!
//! Because comments are tested first, a line that starts with `;` or `#` is a
//! comment even when it contains `=` or brackets. Markers later in the line are
//! plain text: `path = a;b` has the value `a;b`.
//!
//! ```text
//! ; Comment lines belong to the next section or item
//! # both markers work
//! [ server ]              -> section "server"
//! host = example.org      -> item "host", value "example.org"
//! url=http://x/?a=b       -> item "url", value "http://x/?a=b"
//! empty =                 -> item "empty", value ""
//! ```
//!
//! # Comment attribution
//!
//! Comment lines collect in a buffer. The next section header or item takes
//! the whole buffer, in file order, as its own comments and the buffer starts
//! over. Comments at the end of the text, with nothing after them, are dropped.
//! Section comments never describe the section's items.
//!
//! # Items outside sections
//!
//! Items that appear before the first section header have no section to belong
//! to and are dropped. They still consume any pending comments.
//!
//! # Duplicates
//!
//! A section or item name seen again replaces the earlier entry, comments
//! included. The entry keeps the position where the name first appeared.
//!
//! # No escaping
//!
//! There is no quoting, no escaping, no line continuation and no type system.
//! Every value is a string.
//!
//! # Output
//!
//! Output always uses `\r\n` line endings and is laid out as described in
//! [`crate::ser`]. With the default [`FormatOptions`](crate::FormatOptions):
//!
//! ```text
//! ; top comment\r\n
//! [section1]\r\n
//!   ; item comment\r\n
//!   item1 = value1\r\n
//! \r\n
//!   item2 = value2\r\n
//! \r\n
//! [section2]\r\n
//!   item1 = value1\r\n
//! ```
//!
//! Reading that output back yields the same sections, items, values and
//! comments, provided names and values have no leading or trailing whitespace,
//! names contain no `=`, and item names do not start with `;`, `#` or `[`.
