use tiptime_core::FormatCurrency;

use crate::{
    action::Field,
    state::TipState,
    ui::{
        number_field::NumberFieldViewModel, round_up::RoundUpViewModel,
        tip_screen::TipScreenViewModel,
    },
};

pub(crate) const TIP_AMOUNT_PREFIX: &str = "Tip Amount: ";

#[must_use]
pub(crate) fn build_tip_amount_text<F>(tip_state: &TipState, formatter: &F) -> String
where
    F: FormatCurrency + ?Sized,
{
    let tip = tip_state.input().format_tip(formatter);
    format!("{TIP_AMOUNT_PREFIX}{tip}")
}

fn build_number_field_vm(
    tip_state: &TipState,
    field: Field,
    focus_request: Option<Field>,
) -> NumberFieldViewModel<'_> {
    NumberFieldViewModel::new(
        field,
        tip_state.text(field),
        focus_request == Some(field),
    )
}

#[must_use]
pub(crate) fn build_tip_screen_view_model<'a, F>(
    tip_state: &'a TipState,
    formatter: &F,
    focus_request: Option<Field>,
) -> TipScreenViewModel<'a>
where
    F: FormatCurrency + ?Sized,
{
    TipScreenViewModel::new(
        build_number_field_vm(tip_state, Field::BillAmount, focus_request),
        build_number_field_vm(tip_state, Field::TipPercent, focus_request),
        RoundUpViewModel::new(tip_state.round_up),
        build_tip_amount_text(tip_state, formatter),
    )
}
