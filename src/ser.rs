//! INI serialization.
//!
//! This module provides the [`Serializer`] that renders an [`Ini`] back to text
//! under a set of [`FormatOptions`].
//!
//! ## Layout
//!
//! For every section, in order:
//!
//! ```text
//! {section_prefix}{comment_prefix}{comment}\r\n     (per section comment)
//! {section_prefix}[{name}]\r\n
//! {item_prefix}{comment_prefix}{comment}\r\n        (per item comment)
//! {item_prefix}{name}{item_suffix}={value_prefix}{value}\r\n
//! {item_separator}                                  (between items)
//! {section_separator}                               (after the last item, except in the last section)
//! ```
//!
//! Comment lines are left out entirely when `with_comments` is `false`. Lines
//! always end in `\r\n`. Rendering cannot fail; an empty document renders as an
//! empty string.
//!
//! ## Usage
//!
//! ```rust
//! use ini_doc::{FormatOptions, Serializer};
//!
//! let ini = ini_doc::from_str("[a]\nx = 1\ny = 2\n");
//!
//! let mut serializer = Serializer::new(FormatOptions::compact());
//! serializer.serialize(&ini);
//! assert_eq!(serializer.into_inner(), "[a]\r\nx=1\r\ny=2\r\n");
//! ```

use crate::options::LINE_ENDING;
use crate::{FormatOptions, Ini, Item, Section};

/// Renders documents to INI text.
pub struct Serializer {
    output: String,
    options: FormatOptions,
}

impl Serializer {
    pub fn new(options: FormatOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends the rendering of `ini` to the output.
    pub fn serialize(&mut self, ini: &Ini) {
        let last = ini.len().saturating_sub(1);
        for (index, (name, section)) in ini.iter().enumerate() {
            self.write_section(name, section, index == last);
        }
    }

    fn write_section(&mut self, name: &str, section: &Section, is_last: bool) {
        if self.options.with_comments {
            for comment in section.comments() {
                self.write_comment(Prefix::Section, comment);
            }
        }

        self.output.push_str(&self.options.section_prefix);
        self.output.push('[');
        self.output.push_str(name);
        self.output.push(']');
        self.output.push_str(LINE_ENDING);

        let count = section.items().len();
        for (index, (item_name, item)) in section.items().iter().enumerate() {
            self.write_item(item_name, item);

            if index + 1 != count {
                self.output.push_str(&self.options.item_separator);
            } else if !is_last {
                self.output.push_str(&self.options.section_separator);
            }
        }
    }

    fn write_item(&mut self, name: &str, item: &Item) {
        if self.options.with_comments {
            for comment in item.comments() {
                self.write_comment(Prefix::Item, comment);
            }
        }

        self.output.push_str(&self.options.item_prefix);
        self.output.push_str(name);
        self.output.push_str(&self.options.item_suffix);
        self.output.push('=');
        self.output.push_str(&self.options.value_prefix);
        self.output.push_str(item.value());
        self.output.push_str(LINE_ENDING);
    }

    fn write_comment(&mut self, prefix: Prefix, comment: &str) {
        let prefix = match prefix {
            Prefix::Section => &self.options.section_prefix,
            Prefix::Item => &self.options.item_prefix,
        };
        self.output.push_str(prefix);
        self.output.push_str(&self.options.comment_prefix);
        self.output.push_str(comment);
        self.output.push_str(LINE_ENDING);
    }
}

#[derive(Clone, Copy)]
enum Prefix {
    Section,
    Item,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(ini: &Ini, options: FormatOptions) -> String {
        let mut serializer = Serializer::new(options);
        serializer.serialize(ini);
        serializer.into_inner()
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(render(&Ini::new(), FormatOptions::default()), "");
    }

    #[test]
    fn test_default_layout() {
        let ini = crate::from_str("; top\n[a]\n; c\nx=1\ny=2\n[b]\nz=3\n");
        assert_eq!(
            render(&ini, FormatOptions::default()),
            "; top\r\n[a]\r\n  ; c\r\n  x = 1\r\n\r\n  y = 2\r\n\r\n[b]\r\n  z = 3\r\n"
        );
    }

    #[test]
    fn test_without_comments() {
        let ini = crate::from_str("; top\n[a]\n; c\nx=1\n");
        let options = FormatOptions::compact().with_comments(false);
        assert_eq!(render(&ini, options), "[a]\r\nx=1\r\n");
    }

    #[test]
    fn test_section_without_items_gets_no_separator() {
        let ini = crate::from_str("[a]\n[b]\nk=v\n[c]\n");
        let options = FormatOptions::compact().with_section_separator("--\r\n");
        assert_eq!(render(&ini, options), "[a]\r\n[b]\r\nk=v\r\n--\r\n[c]\r\n");
    }

    #[test]
    fn test_prefixes_apply_to_comments() {
        let ini = crate::from_str("# s\n[a]\n# i\nk=v\n");
        let options = FormatOptions::compact()
            .with_section_prefix(">")
            .with_item_prefix("\t")
            .with_comment_prefix("# ");
        assert_eq!(render(&ini, options), "># s\r\n>[a]\r\n\t# i\r\n\tk=v\r\n");
    }

    #[test]
    fn test_serialize_appends() {
        let ini = crate::from_str("[a]\nk=v\n");
        let mut serializer = Serializer::new(FormatOptions::compact());
        serializer.serialize(&ini);
        serializer.serialize(&ini);
        assert_eq!(serializer.into_inner(), "[a]\r\nk=v\r\n[a]\r\nk=v\r\n");
    }
}
