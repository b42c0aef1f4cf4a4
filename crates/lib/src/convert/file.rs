//! JSON file persistence.

use std::{fs, path::Path};

use super::{JsonOptions, from_json};
use crate::{Result, dict::ObjDict};

impl ObjDict {
    /// Saves the map to `path` as indented JSON followed by a newline.
    ///
    /// # Returns
    /// A `Result` indicating success or an I/O or serialization error.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut json = self.to_json_string(&JsonOptions::pretty())?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }
}

/// Loads a map from the JSON file at `path`.
///
/// A missing or empty file is (re)written as `{}` and yields an empty map.
/// With `ignore_errors`, any failure to read or parse the file also yields an
/// empty map instead of an error.
///
/// # Errors
/// - `Io` if the file cannot be read or created
/// - `MalformedInput` if the content is not a JSON object
pub fn load_from_file<P: AsRef<Path>>(path: P, ignore_errors: bool) -> Result<ObjDict> {
    match read_or_create(path.as_ref()) {
        Ok(dict) => Ok(dict),
        Err(err) if ignore_errors => {
            tracing::warn!(
                path = %path.as_ref().display(),
                error = %err,
                "failed to load map, using an empty one"
            );
            Ok(ObjDict::new())
        }
        Err(err) => Err(err),
    }
}

fn read_or_create(path: &Path) -> Result<ObjDict> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    if text.trim().is_empty() {
        tracing::debug!(path = %path.display(), "creating empty map file");
        fs::write(path, "{}")?;
        return Ok(ObjDict::new());
    }
    from_json(&text)
}

impl ObjDict {
    /// See [`load_from_file`]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ObjDict> {
        load_from_file(path, false)
    }
}
