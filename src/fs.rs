//! Loading documents from and saving them to files.
//!
//! Reads and writes are whole-buffer and blocking. Failures are returned as
//! [`Error::File`] with the path and the original [`std::io::ErrorKind`]; nothing is
//! retried. A document remembers the last file it was loaded from or saved to, so
//! [`Ini::save`] can write back without repeating the path.
//!
//! ```rust,no_run
//! use ini_doc::Ini;
//!
//! # fn main() -> ini_doc::Result<()> {
//! let mut ini = Ini::open("config.ini")?;
//! ini.set_or_create("server", "host", "127.0.0.1");
//! ini.save()?;
//! # Ok(())
//! # }
//! ```

use crate::{Error, Ini, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

impl Ini {
    /// Opens and parses the file at `path`, remembering it as the document's filename.
    ///
    /// # Errors
    ///
    /// Returns [`Error::File`] if the file cannot be read and
    /// [`Error::InvalidUtf8`] if its content is not UTF-8.
    pub fn open(path: impl AsRef<Path>) -> Result<Ini> {
        let mut ini = Ini::new();
        ini.load_from_file(path)?;
        Ok(ini)
    }

    /// Replaces this document with the content of the file at `path`.
    ///
    /// Like [`Ini::load_from_str`], this resets the formatting options. On
    /// success `path` becomes the remembered filename; on failure the document
    /// is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`Error::File`] if the file cannot be read and
    /// [`Error::InvalidUtf8`] if its content is not UTF-8.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| Error::file(path, &e))?;
        let text = std::str::from_utf8(&bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "loading INI file");

        self.load_from_str(text);
        self.filename = Some(path.to_path_buf());
        Ok(())
    }

    /// The file this document was last loaded from or saved to.
    #[must_use]
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Writes the document to its remembered filename, overwriting the file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFilename`] if the document was never loaded from
    /// or saved to a file, and [`Error::File`] if writing fails.
    pub fn save(&mut self) -> Result<()> {
        let path = self.filename.clone().ok_or(Error::MissingFilename)?;
        self.write_file(&path)
    }

    /// Remembers `path` as the document's filename, then writes the document to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::File`] if writing fails.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.filename = Some(path.to_path_buf());
        self.write_file(path)
    }

    fn write_file(&self, path: &Path) -> Result<()> {
        let text = crate::to_string(self);
        debug!(path = %path.display(), bytes = text.len(), "saving INI file");
        fs::write(path, text).map_err(|e| Error::file(path, &e))
    }
}
