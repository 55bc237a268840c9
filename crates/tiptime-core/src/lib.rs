//! Core logic for the Tip Time calculator.
//!
//! This crate holds everything the calculator does apart from drawing the
//! screen: turning the raw text of the input fields into numbers, computing the
//! tip, and rendering the result as a currency string.
//!
//! # Overview
//!
//! - [`input`]: Text-to-number conversion for the bill and tip fields. Text that
//!   does not parse counts as `0.0`.
//! - [`tip`]: The tip computation itself, with the optional round-up to the next
//!   whole currency unit.
//! - [`currency`]: Locale-aware currency formatting behind the
//!   [`FormatCurrency`] capability, with [`CurrencyLocale`] as the built-in
//!   implementation.
//!
//! # Examples
//!
//! ```
//! use tiptime_core::{CurrencyLocale, calculate_tip, parse_number};
//!
//! let locale = CurrencyLocale::EN_US;
//! let amount = parse_number("10");
//! let percent = parse_number("15");
//!
//! assert_eq!(calculate_tip(amount, percent, false, &locale), "$1.50");
//! assert_eq!(calculate_tip(amount, percent, true, &locale), "$2.00");
//!
//! // Unparseable input is treated as zero.
//! assert_eq!(calculate_tip(parse_number(""), percent, false, &locale), "$0.00");
//! ```

pub mod currency;
pub mod input;
pub mod tip;

// Re-export commonly used types
pub use self::{
    currency::{CurrencyLocale, FormatCurrency, LocaleError},
    input::{parse_number, retain_numeric},
    tip::{TipInput, calculate_tip, tip_amount},
};
