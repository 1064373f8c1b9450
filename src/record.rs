//! Locale records loaded from JSON resource files
//!
//! A record is a flat JSON object mapping identifiers to translated strings.
//! It is read fresh for every lookup and never cached.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LocaleError;

/// Key holding the localized application name
pub const APP_NAME_KEY: &str = "app_name";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone)]
pub struct LocaleRecord {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl LocaleRecord {
    /// Read and parse the resource file at `path`
    pub fn load(path: &Path) -> Result<Self, LocaleError> {
        let bytes = fs::read(path).map_err(|source| LocaleError::LocaleFileMissing {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_slice(path, &bytes)
    }

    /// Parse resource text; `path` is kept for diagnostics only
    pub fn from_json(path: &Path, text: &str) -> Result<Self, LocaleError> {
        Self::from_slice(path, text.as_bytes())
    }

    /// Parse raw resource bytes, skipping one leading UTF-8 byte-order mark
    ///
    /// Invalid UTF-8 is reported by serde_json and ends up as a parse error.
    pub fn from_slice(path: &Path, bytes: &[u8]) -> Result<Self, LocaleError> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let entries: Map<String, Value> =
            serde_json::from_slice(bytes).map_err(|source| LocaleError::LocaleParseError {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a string entry. Absent keys and non-string values both fail.
    pub fn get_str(&self, key: &str) -> Result<&str, LocaleError> {
        match self.entries.get(key) {
            Some(Value::String(value)) => Ok(value.as_str()),
            other => {
                if let Some(value) = other {
                    log::debug!(
                        "key '{}' in {} is not a string: {}",
                        key,
                        self.path.display(),
                        value
                    );
                }
                Err(LocaleError::KeyMissing {
                    path: self.path.clone(),
                    key: key.to_string(),
                })
            }
        }
    }

    pub fn app_name(&self) -> Result<&str, LocaleError> {
        self.get_str(APP_NAME_KEY)
    }
}
