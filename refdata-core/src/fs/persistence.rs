use crate::error::{CoreError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Loads a deserializable object from a JSON file.
///
/// # Arguments
///
/// * `path` - The file path to read from.
///
/// # Returns
///
/// * `Ok(T)` containing the deserialized object.
/// * `Err(CoreError::Io)` if the file doesn't exist or cannot be read.
/// * `Err(CoreError::Format)` if deserialization fails.
pub fn load_state<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = std::fs::File::open(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = std::io::BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CoreError::Format {
        path: path.to_path_buf(),
        source,
    })
}
