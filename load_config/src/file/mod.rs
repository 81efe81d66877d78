//! Reading and parsing the JSON configuration file.

mod parser;
mod reader;

use camino::Utf8Path;
use serde_json::{Map, Value};

use crate::{LoadConfigError, LoadConfigResult};

pub use reader::{FileReader, FsFileReader, MemoryReader};

/// Read and parse the configuration file at `path`.
///
/// Top-level keys are folded to lower case; nested members keep the spelling
/// used in the file. A missing file yields an empty tree when
/// `ignore_missing` is set.
///
/// # Errors
///
/// Returns [`LoadConfigError::FileNotFound`] when the file is absent and not
/// ignored, [`LoadConfigError::File`] for other read failures and
/// [`LoadConfigError::Syntax`] when the contents are not a JSON object.
pub(crate) fn load_file_tree<R>(
    path: &Utf8Path,
    reader: &R,
    ignore_missing: bool,
) -> LoadConfigResult<Map<String, Value>>
where
    R: FileReader + ?Sized,
{
    match reader.read(path) {
        Ok(bytes) => {
            let tree = parser::parse_config(path, &bytes)?;
            tracing::debug!(path = %path, keys = tree.len(), "parsed configuration file");
            Ok(canonicalise_keys(tree))
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            if ignore_missing {
                tracing::warn!(path = %path, "configuration file not found; continuing without it");
                Ok(Map::new())
            } else {
                Err(LoadConfigError::FileNotFound {
                    path: path.to_path_buf(),
                })
            }
        }
        Err(source) => Err(LoadConfigError::File {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn canonicalise_keys(tree: Map<String, Value>) -> Map<String, Value> {
    let mut canonical = Map::new();
    for (key, value) in tree {
        let folded = key.to_ascii_lowercase();
        if canonical.contains_key(&folded) {
            tracing::debug!(key = %key, "duplicate key after case folding; keeping the first");
            continue;
        }
        canonical.insert(folded, value);
    }
    canonical
}
