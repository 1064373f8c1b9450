//! Locale resolver
//!
//! Turns a LANG value into a resource path, loads the record found there and
//! returns its `app_name`.

use std::path::{Path, PathBuf};

use crate::error::LocaleError;
use crate::locale::{read_lang, Language};
use crate::record::LocaleRecord;

/// Resource directory, relative to the working directory
pub const DEFAULT_LOCALE_DIR: &str = "locale";

#[derive(Debug, Clone)]
pub struct LocaleResolver {
    locale_dir: PathBuf,
}

impl Default for LocaleResolver {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE_DIR)
    }
}

impl LocaleResolver {
    pub fn new(locale_dir: impl Into<PathBuf>) -> Self {
        Self {
            locale_dir: locale_dir.into(),
        }
    }

    pub fn locale_dir(&self) -> &Path {
        &self.locale_dir
    }

    /// Path of the resource file for `language`
    pub fn resource_path(&self, language: Language) -> PathBuf {
        self.locale_dir.join(language.file_name())
    }

    /// Resolve the application name for an explicit LANG value
    pub fn resolve(&self, lang: Option<&str>) -> Result<String, LocaleError> {
        let language = Language::from_lang(lang);
        let path = self.resource_path(language);
        log::debug!(
            "LANG={:?} selects {}, loading {}",
            lang,
            language,
            path.display()
        );

        let record = LocaleRecord::load(&path)?;
        let name = record.app_name()?;

        Ok(name.to_string())
    }

    /// Resolve the application name using LANG from the process environment
    pub fn resolve_from_env(&self) -> Result<String, LocaleError> {
        self.resolve(read_lang().as_deref())
    }
}

/// Application name for the current environment, read from `locale/`
pub fn localized_app_name() -> Result<String, LocaleError> {
    LocaleResolver::default().resolve_from_env()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LocaleErrorKind;
    use std::fs;

    struct Fixture {
        dir: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("applocale-{}", uuid::Uuid::new_v4()));
            fs::create_dir_all(&dir).unwrap();
            Self { dir }
        }

        fn write(&self, file: &str, content: &str) -> &Self {
            fs::write(self.dir.join(file), content).unwrap();
            self
        }

        fn resolver(&self) -> LocaleResolver {
            LocaleResolver::new(&self.dir)
        }
    }

    impl Drop for Fixture {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.dir);
        }
    }

    fn both_languages() -> Fixture {
        let fixture = Fixture::new();
        fixture
            .write("en.json", r#"{"app_name": "MyApp"}"#)
            .write("zh.json", r#"{"app_name": "我的应用"}"#);
        fixture
    }

    #[test]
    fn test_resource_path() {
        let resolver = LocaleResolver::default();
        assert_eq!(resolver.resource_path(Language::English), Path::new("locale/en.json"));
        assert_eq!(resolver.resource_path(Language::Chinese), Path::new("locale/zh.json"));
    }

    #[test]
    fn test_resolve_english() {
        let fixture = both_languages();
        let resolver = fixture.resolver();
        assert_eq!(resolver.resolve(None).unwrap(), "MyApp");
        assert_eq!(resolver.resolve(Some("en_US.UTF-8")).unwrap(), "MyApp");
    }

    #[test]
    fn test_resolve_chinese() {
        let fixture = both_languages();
        let resolver = fixture.resolver();
        assert_eq!(resolver.resolve(Some("zh_CN.UTF-8")).unwrap(), "我的应用");
        assert_eq!(resolver.resolve(Some("xzhy")).unwrap(), "我的应用");
    }

    #[test]
    fn test_missing_chinese_file_does_not_fall_back() {
        let fixture = Fixture::new();
        fixture.write("en.json", r#"{"app_name": "MyApp"}"#);

        let err = fixture.resolver().resolve(Some("zh")).unwrap_err();
        assert_eq!(err.kind(), LocaleErrorKind::LocaleFileMissing);
        assert_eq!(err.path(), fixture.dir.join("zh.json"));
    }

    #[test]
    fn test_bad_json_and_missing_key() {
        let fixture = Fixture::new();
        fixture
            .write("en.json", r#"{"app_name": "#)
            .write("zh.json", r#"{"name": "我的应用"}"#);
        let resolver = fixture.resolver();

        assert_eq!(
            resolver.resolve(None).unwrap_err().kind(),
            LocaleErrorKind::LocaleParseError
        );
        assert_eq!(
            resolver.resolve(Some("zh")).unwrap_err().kind(),
            LocaleErrorKind::KeyMissing
        );
    }

    #[test]
    fn test_localized_app_name_reads_lang_from_environment() {
        // Uses the resources shipped in the crate's own locale/ directory
        std::env::set_var("LANG", "zh_CN.UTF-8");
        assert_eq!(Language::from_env(), Language::Chinese);
        assert_eq!(localized_app_name().unwrap(), "我的应用");

        std::env::remove_var("LANG");
        assert_eq!(Language::from_env(), Language::English);
        assert_eq!(LocaleResolver::default().resolve_from_env().unwrap(), "MyApp");
    }
}
