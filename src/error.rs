//! Errors raised while loading a locale resource

use rust_i18n::t;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure kinds, without the attached context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleErrorKind {
    LocaleFileMissing,
    LocaleParseError,
    KeyMissing,
}

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("locale file {} could not be read", .path.display())]
    LocaleFileMissing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("locale file {} is not a valid JSON object", .path.display())]
    LocaleParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("locale file {} has no string value for key '{key}'", .path.display())]
    KeyMissing { path: PathBuf, key: String },
}

impl LocaleError {
    pub fn kind(&self) -> LocaleErrorKind {
        match self {
            LocaleError::LocaleFileMissing { .. } => LocaleErrorKind::LocaleFileMissing,
            LocaleError::LocaleParseError { .. } => LocaleErrorKind::LocaleParseError,
            LocaleError::KeyMissing { .. } => LocaleErrorKind::KeyMissing,
        }
    }

    /// Path of the resource file the error refers to
    pub fn path(&self) -> &Path {
        match self {
            LocaleError::LocaleFileMissing { path, .. }
            | LocaleError::LocaleParseError { path, .. }
            | LocaleError::KeyMissing { path, .. } => path,
        }
    }

    /// Diagnostic translated into `locale`
    pub fn message(&self, locale: &str) -> String {
        let path = self.path().display().to_string();
        match self {
            LocaleError::LocaleFileMissing { source, .. } => t!(
                "errors.locale_file_missing",
                locale = locale,
                path = path,
                reason = source.to_string()
            )
            .to_string(),
            LocaleError::LocaleParseError { source, .. } => t!(
                "errors.locale_parse_error",
                locale = locale,
                path = path,
                reason = source.to_string()
            )
            .to_string(),
            LocaleError::KeyMissing { key, .. } => t!(
                "errors.key_missing",
                locale = locale,
                path = path,
                key = key
            )
            .to_string(),
        }
    }

    /// Diagnostic translated into the current rust-i18n locale
    pub fn localized(&self) -> String {
        self.message(&rust_i18n::locale())
    }
}
