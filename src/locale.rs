//! Language selection from the LANG environment variable
//!
//! Only two languages are supported: English and Chinese. The LANG value is
//! checked for the substring `zh` anywhere in it, so `zh_CN.UTF-8`, `zh` and
//! `xzhy` all select Chinese. Everything else, including an unset or
//! non-Unicode LANG, selects English.

use std::env;
use std::fmt;

/// Environment variable holding the user's language
pub const LANG_VAR: &str = "LANG";

/// Value used when LANG is not set
pub const DEFAULT_LANG: &str = "en";

/// Marker that switches the selection to Chinese
const CHINESE_MARKER: &str = "zh";

/// Languages with a locale resource file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Select a language from a raw LANG value
    ///
    /// The match is a plain case-sensitive substring test. It also accepts
    /// values such as `xyzhello`, which is kept as the documented behavior.
    pub fn from_lang(lang: Option<&str>) -> Self {
        let lang = lang.unwrap_or(DEFAULT_LANG);
        if lang.contains(CHINESE_MARKER) {
            Language::Chinese
        } else {
            Language::English
        }
    }

    /// Select a language from the process environment
    pub fn from_env() -> Self {
        Self::from_lang(read_lang().as_deref())
    }

    /// Short language code, also used as the diagnostics locale
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// File name of the locale resource for this language
    pub fn file_name(self) -> &'static str {
        match self {
            Language::English => "en.json",
            Language::Chinese => "zh.json",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Read LANG, treating a non-Unicode value the same as an unset one
pub fn read_lang() -> Option<String> {
    match env::var(LANG_VAR) {
        Ok(value) => Some(value),
        Err(env::VarError::NotPresent) => None,
        Err(env::VarError::NotUnicode(raw)) => {
            log::warn!("{} is not valid unicode ({:?}), using default", LANG_VAR, raw);
            None
        }
    }
}
