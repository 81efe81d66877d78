//! Byte sources for the configuration file.

use std::collections::BTreeMap;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};

/// Supplies the raw bytes of a configuration file.
///
/// Implementations report absence with [`io::ErrorKind::NotFound`]. Any
/// closure `Fn(&Utf8Path) -> io::Result<Vec<u8>>` is a reader.
pub trait FileReader {
    /// Read the whole file at `path`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error; absence must use
    /// [`io::ErrorKind::NotFound`].
    fn read(&self, path: &Utf8Path) -> io::Result<Vec<u8>>;
}

impl<F> FileReader for F
where
    F: Fn(&Utf8Path) -> io::Result<Vec<u8>>,
{
    fn read(&self, path: &Utf8Path) -> io::Result<Vec<u8>> {
        self(path)
    }
}

/// Reads files from the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileReader;

impl FileReader for FsFileReader {
    fn read(&self, path: &Utf8Path) -> io::Result<Vec<u8>> {
        let (dir, name) = open_parent_dir_and_name(path)?;
        dir.read(name)
    }
}

/// Return the parent directory of `path`, falling back to `"."` when the path
/// has no parent or the parent is empty.
fn parent_or_dot(path: &Utf8Path) -> &Utf8Path {
    path.parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."))
}

/// Open the parent directory of `path` via `cap-std` and extract the file name.
fn open_parent_dir_and_name(path: &Utf8Path) -> io::Result<(Dir, String)> {
    let parent = parent_or_dot(path);
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "cannot determine file name for configuration file path",
        )
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name.to_owned()))
}

/// In-memory reader holding file contents keyed by path.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use load_config::{FileReader, MemoryReader};
///
/// let reader = MemoryReader::new().with_file("config.json", r#"{"param1": "file_value1"}"#);
/// assert!(reader.read(Utf8Path::new("config.json")).is_ok());
/// assert!(reader.read(Utf8Path::new("other.json")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryReader {
    files: BTreeMap<Utf8PathBuf, Vec<u8>>,
}

impl MemoryReader {
    /// Create an empty reader in which every path is missing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `contents` under `path`.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<Utf8PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }
}

impl FileReader for MemoryReader {
    fn read(&self, path: &Utf8Path) -> io::Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no in-memory file at {path}"))
        })
    }
}
