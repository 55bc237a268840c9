use tiptime_core::TipInput;

use crate::action::{Field, InputAction};

// TipState holds the raw field contents of the tip screen. It is never persisted and starts
// from defaults on every launch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TipState {
    pub bill_amount: String,
    pub tip_percent: String,
    pub round_up: bool,
}

impl TipState {
    /// Returns the state after `action`. Each action replaces exactly one field.
    #[must_use]
    pub fn apply(self, action: InputAction) -> Self {
        match action {
            InputAction::SetBillAmount(bill_amount) => Self {
                bill_amount,
                ..self
            },
            InputAction::SetTipPercent(tip_percent) => Self {
                tip_percent,
                ..self
            },
            InputAction::SetRoundUp(round_up) => Self { round_up, ..self },
        }
    }

    #[must_use]
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::BillAmount => &self.bill_amount,
            Field::TipPercent => &self.tip_percent,
        }
    }

    /// Parsed view of the fields; unparseable text counts as zero.
    #[must_use]
    pub fn input(&self) -> TipInput {
        TipInput::from_text(&self.bill_amount, &self.tip_percent, self.round_up)
    }
}
