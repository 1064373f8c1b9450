//! app_name - Print the localized application name
//!
//! Reads LANG (or `--lang`), loads the matching locale resource and prints
//! `App Name: <value>`.

use anyhow::{bail, Result};
use clap::{Arg, Command};
use rust_i18n::t;

use applocale::i18n::init_locale;
use applocale::locale::read_lang;
use applocale::resolver::{LocaleResolver, DEFAULT_LOCALE_DIR};

rust_i18n::i18n!("locales", fallback = "en");

fn build_cli() -> Command {
    Command::new("app_name")
        .about(t!("help.app_name.about").to_string())
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .arg(
            Arg::new("locale_dir")
                .long("locale-dir")
                .short('d')
                .help(t!("help.app_name.locale_dir").to_string())
                .value_name("DIR")
                .default_value(DEFAULT_LOCALE_DIR)
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .short('l')
                .help(t!("help.app_name.lang").to_string())
                .value_name("LANG")
        )
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Help text is localized from LANG before flags are known
    let env_lang = read_lang();
    init_locale(env_lang.as_deref());

    let matches = build_cli().get_matches();

    let lang = matches.get_one::<String>("lang").cloned().or(env_lang);
    init_locale(lang.as_deref());

    let locale_dir = matches.get_one::<String>("locale_dir").unwrap();
    let resolver = LocaleResolver::new(locale_dir);

    let app_name = match resolver.resolve(lang.as_deref()) {
        Ok(name) => name,
        Err(e) => bail!("{}", e.localized()),
    };

    println!("App Name: {}", app_name);

    Ok(())
}
