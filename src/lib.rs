//! applocale - resolve the localized application name
//!
//! The language is taken from the LANG environment variable and selects one
//! of two JSON resource files, `locale/en.json` or `locale/zh.json`. The
//! string stored under `app_name` in that file is the result.

rust_i18n::i18n!("locales", fallback = "en");

pub mod error;
pub mod i18n;
pub mod locale;
pub mod record;
pub mod resolver;

pub use error::{LocaleError, LocaleErrorKind};
pub use locale::Language;
pub use record::LocaleRecord;
pub use resolver::{localized_app_name, LocaleResolver};
