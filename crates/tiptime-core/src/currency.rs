//! Locale-aware currency formatting.
//!
//! Formatting is exposed through the [`FormatCurrency`] trait so that the tip
//! calculation does not depend on where the formatting rules come from.
//! [`CurrencyLocale`] is the built-in implementation, covering a fixed table of
//! locales with their default currency.
//!
//! # Rounding
//!
//! Amounts are rounded to the locale's number of fraction digits using
//! round-half-even on the shortest decimal representation of the `f64`. This
//! means `2.675` (stored as `2.67499999...`) still formats as `2.68`, and
//! `0.125` formats as `0.12`.
//!
//! # Examples
//!
//! ```
//! use tiptime_core::{CurrencyLocale, FormatCurrency};
//!
//! assert_eq!(CurrencyLocale::EN_US.format_currency(1234.5), "$1,234.50");
//! assert_eq!(CurrencyLocale::DE_DE.format_currency(1234.5), "1.234,50\u{a0}€");
//! assert_eq!(CurrencyLocale::JA_JP.format_currency(1234.5), "￥1,234");
//! assert_eq!(CurrencyLocale::EN_IN.format_currency(123_456.5), "₹1,23,456.50");
//! ```

use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};

/// Capability of rendering an amount as a currency string.
pub trait FormatCurrency {
    /// Formats `amount` in this formatter's currency.
    fn format_currency(&self, amount: f64) -> String;
}

/// Errors returned when resolving a locale tag.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LocaleError {
    /// The tag was empty after stripping encoding and modifier suffixes.
    #[display("locale tag is empty")]
    EmptyTag,
    /// No supported locale matches the tag.
    #[display("unsupported locale: {tag}")]
    Unsupported {
        /// The tag as given.
        #[error(not(source))]
        tag: String,
    },
}

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// Symbol before the number (`$1.00`).
    Prefix,
    /// Symbol after the number (`1,00 €`).
    Suffix,
}

/// How the integer digits are split into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Groups of three (`1,234,567`).
    Western,
    /// A group of three followed by groups of two (`12,34,567`).
    Indian,
}

impl Grouping {
    const fn sizes(self) -> (usize, usize) {
        match self {
            Self::Western => (3, 3),
            Self::Indian => (3, 2),
        }
    }
}

/// Currency formatting rules of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyLocale {
    tag: &'static str,
    symbol: &'static str,
    symbol_position: SymbolPosition,
    symbol_spacing: &'static str,
    decimal_separator: &'static str,
    grouping_separator: &'static str,
    grouping: Grouping,
    fraction_digits: usize,
}

impl CurrencyLocale {
    /// English (United States), US dollar.
    pub const EN_US: Self = Self {
        tag: "en-US",
        symbol: "$",
        symbol_position: SymbolPosition::Prefix,
        symbol_spacing: "",
        decimal_separator: ".",
        grouping_separator: ",",
        grouping: Grouping::Western,
        fraction_digits: 2,
    };

    /// English (United Kingdom), pound sterling.
    pub const EN_GB: Self = Self {
        tag: "en-GB",
        symbol: "£",
        ..Self::EN_US
    };

    /// English (India), Indian rupee.
    pub const EN_IN: Self = Self {
        tag: "en-IN",
        symbol: "₹",
        grouping: Grouping::Indian,
        ..Self::EN_US
    };

    /// German (Germany), euro.
    pub const DE_DE: Self = Self {
        tag: "de-DE",
        symbol: "€",
        symbol_position: SymbolPosition::Suffix,
        symbol_spacing: "\u{a0}",
        decimal_separator: ",",
        grouping_separator: ".",
        grouping: Grouping::Western,
        fraction_digits: 2,
    };

    /// French (France), euro.
    pub const FR_FR: Self = Self {
        tag: "fr-FR",
        grouping_separator: "\u{202f}",
        ..Self::DE_DE
    };

    /// Japanese (Japan), yen.
    pub const JA_JP: Self = Self {
        tag: "ja-JP",
        symbol: "￥",
        fraction_digits: 0,
        ..Self::EN_US
    };

    /// All supported locales. The first entry of each language is used when a
    /// tag names only the language.
    pub const ALL: [Self; 6] = [
        Self::EN_US,
        Self::EN_GB,
        Self::EN_IN,
        Self::DE_DE,
        Self::FR_FR,
        Self::JA_JP,
    ];

    /// Environment variables consulted by [`from_env`](Self::from_env), in
    /// order of precedence.
    pub const ENV_VARS: [&'static str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

    /// Returns the BCP 47 tag of this locale.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    /// Returns the currency symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Returns the number of digits printed after the decimal separator.
    #[must_use]
    pub const fn fraction_digits(&self) -> usize {
        self.fraction_digits
    }

    /// Resolves a locale from a BCP 47 (`de-DE`) or POSIX (`de_DE.UTF-8`) tag.
    ///
    /// Matching is case-insensitive. A tag naming only a language resolves to
    /// the first supported locale of that language.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::EmptyTag`] for an empty tag and
    /// [`LocaleError::Unsupported`] when no supported locale matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiptime_core::CurrencyLocale;
    ///
    /// assert_eq!(CurrencyLocale::from_tag("de_DE.UTF-8"), Ok(CurrencyLocale::DE_DE));
    /// assert_eq!(CurrencyLocale::from_tag("ja"), Ok(CurrencyLocale::JA_JP));
    /// assert!(CurrencyLocale::from_tag("xx-YY").is_err());
    /// ```
    pub fn from_tag(tag: &str) -> Result<Self, LocaleError> {
        // Drop POSIX codeset and modifier: `de_DE.UTF-8@euro` -> `de_DE`
        let base = tag
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim();
        if base.is_empty() {
            return Err(LocaleError::EmptyTag);
        }

        let mut parts = base.split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        let region = parts.next();

        let found = Self::ALL.into_iter().find(|locale| {
            let (lang, reg) = locale.tag.split_once('-').unwrap_or((locale.tag, ""));
            lang.eq_ignore_ascii_case(language)
                && region.is_none_or(|region| reg.eq_ignore_ascii_case(region))
        });

        found.ok_or_else(|| LocaleError::Unsupported {
            tag: tag.to_owned(),
        })
    }

    /// Resolves the active locale from the process environment.
    ///
    /// See [`from_env_with`](Self::from_env_with) for the lookup rules.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Resolves the active locale through `lookup`.
    ///
    /// The first non-empty variable among [`ENV_VARS`](Self::ENV_VARS) decides.
    /// `C`, `POSIX`, unsupported values, and an environment with none of the
    /// variables set all fall back to [`CurrencyLocale::EN_US`].
    #[must_use]
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some((name, value)) = Self::ENV_VARS.into_iter().find_map(|name| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .map(|value| (name, value))
        }) else {
            log::debug!("no locale variable set, using {}", Self::default().tag);
            return Self::default();
        };

        if is_posix_default(&value) {
            log::debug!("{name}={value}, using {}", Self::default().tag);
            return Self::default();
        }

        match Self::from_tag(&value) {
            Ok(locale) => {
                log::debug!("{name}={value}, using {}", locale.tag);
                locale
            }
            Err(err) => {
                log::warn!("{name}: {err}, falling back to {}", Self::default().tag);
                Self::default()
            }
        }
    }

    fn group_integer(&self, digits: &str) -> String {
        let (primary, secondary) = self.grouping.sizes();
        let mut groups = Vec::new();
        let mut end = digits.len();
        let mut size = primary;
        while end > size {
            groups.push(&digits[end - size..end]);
            end -= size;
            size = secondary;
        }
        groups.push(&digits[..end]);
        groups.reverse();
        groups.join(self.grouping_separator)
    }

    fn format_number(&self, magnitude: f64) -> (String, bool) {
        if magnitude.is_nan() {
            return ("NaN".to_owned(), false);
        }
        if magnitude.is_infinite() {
            return ("∞".to_owned(), false);
        }

        let rounded = RoundedDecimal::new(magnitude, self.fraction_digits);
        let mut number = self.group_integer(&rounded.integer);
        if !rounded.fraction.is_empty() {
            number.push_str(self.decimal_separator);
            number.push_str(&rounded.fraction);
        }
        (number, rounded.is_zero())
    }
}

impl Default for CurrencyLocale {
    fn default() -> Self {
        Self::EN_US
    }
}

impl fmt::Display for CurrencyLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag)
    }
}

impl FromStr for CurrencyLocale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

impl FormatCurrency for CurrencyLocale {
    fn format_currency(&self, amount: f64) -> String {
        let (number, is_zero) = self.format_number(amount.abs());
        let sign = if amount.is_sign_negative() && !is_zero && !amount.is_nan() {
            "-"
        } else {
            ""
        };
        match self.symbol_position {
            SymbolPosition::Prefix => {
                format!("{sign}{}{}{number}", self.symbol, self.symbol_spacing)
            }
            SymbolPosition::Suffix => {
                format!("{sign}{number}{}{}", self.symbol_spacing, self.symbol)
            }
        }
    }
}

/// Returns `true` for the POSIX portable locale (`C`, `POSIX`), with or without
/// a codeset such as `C.UTF-8`.
fn is_posix_default(value: &str) -> bool {
    let base = value.split(['.', '@']).next().unwrap_or_default();
    base == "C" || base == "POSIX"
}

/// A non-negative decimal rounded to a fixed number of fraction digits.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RoundedDecimal {
    integer: String,
    fraction: String,
}

impl RoundedDecimal {
    /// Rounds a finite, non-negative `value` half-even to `fraction_digits`.
    fn new(value: f64, fraction_digits: usize) -> Self {
        // `Display` for f64 prints the shortest round-trip decimal, never in
        // exponent notation.
        let text = match Decimal::from_str(&value.to_string()) {
            Ok(decimal) => {
                let dp = u32::try_from(fraction_digits).unwrap_or(u32::MAX);
                let rounded =
                    decimal.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven);
                format!("{rounded:.fraction_digits$}")
            }
            // Past `Decimal`'s range every f64 is a whole number.
            Err(_) => format!("{value:.fraction_digits$}"),
        };
        let (integer, fraction) = text.split_once('.').unwrap_or((&text, ""));
        Self {
            integer: integer.to_owned(),
            fraction: fraction.to_owned(),
        }
    }

    fn is_zero(&self) -> bool {
        self.integer.bytes().chain(self.fraction.bytes()).all(|b| b == b'0')
    }
}
