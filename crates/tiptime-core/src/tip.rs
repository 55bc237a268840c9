//! Tip computation.

use crate::{currency::FormatCurrency, input::parse_number};

/// Returns the tip for `amount` at `tip_percent` percent.
///
/// With `round_up`, the tip is rounded toward positive infinity to the next
/// whole currency unit. For a negative tip this moves it toward zero.
///
/// # Examples
///
/// ```
/// use tiptime_core::tip_amount;
///
/// assert_eq!(tip_amount(10.0, 20.0, false), 2.0);
/// assert_eq!(tip_amount(10.0, 15.0, true), 2.0);
/// assert_eq!(tip_amount(-10.0, 15.0, true), -1.0);
/// ```
#[must_use]
pub fn tip_amount(amount: f64, tip_percent: f64, round_up: bool) -> f64 {
    let tip = tip_percent / 100.0 * amount;
    if round_up { tip.ceil() } else { tip }
}

/// Computes the tip and formats it as currency.
///
/// The function is total over finite inputs: negative amounts and percentages
/// above 100 are computed literally.
#[must_use]
pub fn calculate_tip<F>(amount: f64, tip_percent: f64, round_up: bool, formatter: &F) -> String
where
    F: FormatCurrency + ?Sized,
{
    formatter.format_currency(tip_amount(amount, tip_percent, round_up))
}

/// Parsed inputs of one tip calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TipInput {
    /// Bill total.
    pub amount: f64,
    /// Tip percentage, where `20.0` means 20%.
    pub tip_percent: f64,
    /// Whether to round the tip up to a whole currency unit.
    pub round_up: bool,
}

impl TipInput {
    /// Builds the input from the raw text of the two fields.
    ///
    /// Each field goes through [`parse_number`], so unparseable text counts as
    /// `0.0`.
    #[must_use]
    pub fn from_text(amount: &str, tip_percent: &str, round_up: bool) -> Self {
        Self {
            amount: parse_number(amount),
            tip_percent: parse_number(tip_percent),
            round_up,
        }
    }

    /// Returns the unformatted tip.
    #[must_use]
    pub fn tip(&self) -> f64 {
        tip_amount(self.amount, self.tip_percent, self.round_up)
    }

    /// Returns the tip formatted by `formatter`.
    #[must_use]
    pub fn format_tip<F>(&self, formatter: &F) -> String
    where
        F: FormatCurrency + ?Sized,
    {
        calculate_tip(self.amount, self.tip_percent, self.round_up, formatter)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::currency::CurrencyLocale;

    const US: CurrencyLocale = CurrencyLocale::EN_US;

    #[test]
    fn test_twenty_percent_of_ten() {
        assert_eq!(calculate_tip(10.0, 20.0, false, &US), "$2.00");
    }

    #[test]
    fn test_round_up_fifteen_percent_of_ten() {
        assert_eq!(calculate_tip(10.0, 15.0, true, &US), "$2.00");
        assert_eq!(calculate_tip(10.0, 15.0, false, &US), "$1.50");
    }

    #[test]
    fn test_zero_amount() {
        assert_eq!(calculate_tip(0.0, 50.0, false, &US), "$0.00");
    }

    #[test]
    fn test_unparseable_amount_counts_as_zero() {
        let input = TipInput::from_text("", "20", false);
        assert_eq!(input.amount, 0.0);
        assert_eq!(input.format_tip(&US), "$0.00");
    }

    #[test]
    fn test_tip_input_matches_free_functions() {
        let input = TipInput::from_text("10", "15", false);
        assert_eq!(input.tip(), 1.5);
        assert_eq!(input.tip(), tip_amount(10.0, 15.0, false));

        let rounded = TipInput { round_up: true, ..input };
        assert_eq!(rounded.tip(), 2.0);
        assert_eq!(rounded.format_tip(&US), "$2.00");
    }

    #[test]
    fn test_fractional_amount() {
        assert_eq!(calculate_tip(7.5, 18.0, false, &US), "$1.35");
    }

    #[test]
    fn test_zero_boundary_ignores_round_up() {
        for round_up in [false, true] {
            assert_eq!(calculate_tip(0.0, 18.0, round_up, &US), "$0.00");
            assert_eq!(calculate_tip(42.0, 0.0, round_up, &US), "$0.00");
        }
    }

    #[test]
    fn test_out_of_range_percent_is_computed_literally() {
        assert_eq!(calculate_tip(10.0, 150.0, false, &US), "$15.00");
        assert_eq!(calculate_tip(10.0, -20.0, false, &US), "-$2.00");
    }

    // Ceiling semantics are kept as is: a negative tip rounds toward zero,
    // not away from it.
    #[test]
    fn test_round_up_negative_tip_moves_toward_zero() {
        assert_eq!(tip_amount(-10.0, 15.0, true), -1.0);
        assert_eq!(calculate_tip(-10.0, 15.0, true, &US), "-$1.00");
        assert_eq!(calculate_tip(10.0, -5.0, true, &US), "$0.00");
    }

    #[test]
    fn test_round_up_keeps_whole_amounts() {
        assert_eq!(tip_amount(10.0, 20.0, true), 2.0);
        assert_eq!(calculate_tip(100.0, 10.0, true, &US), "$10.00");
    }

    #[test]
    fn test_uses_given_formatter() {
        assert_eq!(
            calculate_tip(10.0, 15.0, false, &CurrencyLocale::DE_DE),
            "1,50\u{a0}€"
        );
        let formatter: &dyn FormatCurrency = &CurrencyLocale::JA_JP;
        assert_eq!(calculate_tip(1000.0, 15.0, false, formatter), "￥150");
    }

    fn amount() -> impl Strategy<Value = f64> {
        0.0..1_000_000.0_f64
    }

    fn percent() -> impl Strategy<Value = f64> {
        0.0..200.0_f64
    }

    proptest! {
        #[test]
        fn test_unrounded_tip_formats_raw_product(amount in amount(), percent in percent()) {
            let expected = US.format_currency(percent / 100.0 * amount);
            prop_assert_eq!(calculate_tip(amount, percent, false, &US), expected);
        }

        #[test]
        fn test_rounded_tip_formats_ceiling(amount in -1_000.0..1_000.0_f64, percent in -200.0..200.0_f64) {
            let expected = US.format_currency((percent / 100.0 * amount).ceil());
            prop_assert_eq!(calculate_tip(amount, percent, true, &US), expected);
        }

        #[test]
        fn test_round_up_never_decreases_tip(amount in amount(), percent in percent()) {
            prop_assert!(tip_amount(amount, percent, true) >= tip_amount(amount, percent, false));
        }

        #[test]
        fn test_rounded_tip_is_whole(amount in amount(), percent in percent()) {
            let tip = tip_amount(amount, percent, true);
            prop_assert_eq!(tip, tip.trunc());
        }

        #[test]
        fn test_calculation_is_idempotent(amount in amount(), percent in percent(), round_up in any::<bool>()) {
            prop_assert_eq!(
                calculate_tip(amount, percent, round_up, &US),
                calculate_tip(amount, percent, round_up, &US)
            );
        }

        #[test]
        fn test_unparseable_text_equals_zero(
            text in "[a-z ,]*",
            other in percent(),
            round_up in any::<bool>(),
        ) {
            let from_text = TipInput::from_text(&text, &other.to_string(), round_up);
            let from_zero = TipInput { amount: 0.0, tip_percent: other, round_up };
            prop_assert_eq!(from_text.format_tip(&US), from_zero.format_tip(&US));
        }
    }
}
