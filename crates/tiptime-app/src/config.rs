//! Command-line configuration for the `tiptime` binary.

use clap::Parser;
use tiptime_core::{CurrencyLocale, FormatCurrency as _};

use crate::version;

/// Amount used to preview each locale in `--list-locales`.
const SAMPLE_AMOUNT: f64 = 1234.5;

#[derive(Debug, Clone, Parser)]
#[command(name = "tiptime", version = version::build_version(), about)]
pub struct Cli {
    /// Currency locale, e.g. `en-US` or `de_DE.UTF-8`.
    ///
    /// Defaults to the locale from `LC_ALL`, `LC_MONETARY` or `LANG`.
    #[arg(long, env = "TIPTIME_LOCALE")]
    pub locale: Option<CurrencyLocale>,

    /// Print the supported locales and exit.
    #[arg(long)]
    pub list_locales: bool,
}

impl Cli {
    /// Returns the locale given on the command line, or the one from the environment.
    #[must_use]
    pub fn resolve_locale(&self) -> CurrencyLocale {
        self.locale.unwrap_or_else(CurrencyLocale::from_env)
    }
}

/// One line per supported locale: the tag and a formatted sample amount.
#[must_use]
pub fn locale_listing() -> Vec<String> {
    CurrencyLocale::ALL
        .iter()
        .map(|locale| format!("{:<6} {}", locale.tag(), locale.format_currency(SAMPLE_AMOUNT)))
        .collect()
}
