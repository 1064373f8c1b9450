//! Internationalization (i18n) support for diagnostics
//!
//! The tool's own messages (help text and errors) are translated with
//! rust-i18n. Supported languages: English (en), Chinese (zh).
//!
//! The diagnostics locale follows the same LANG rule as the resource file
//! selection, so a Chinese app name always comes with Chinese errors.

use rust_i18n::set_locale;

use crate::locale::Language;

/// Set the diagnostics locale for an explicit LANG value
pub fn init_locale(lang: Option<&str>) -> Language {
    let language = Language::from_lang(lang);
    set_locale(language.code());
    language
}
