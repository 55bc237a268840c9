use std::mem;

pub(crate) mod handler;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum Action {
    Input(InputAction),
    Ui(UiAction),
}

/// Edits of the tip form. These are the only actions that change the tip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    SetBillAmount(String),
    SetTipPercent(String),
    SetRoundUp(bool),
}

impl InputAction {
    #[must_use]
    pub fn set_text(field: Field, text: String) -> Self {
        match field {
            Field::BillAmount => Self::SetBillAmount(text),
            Field::TipPercent => Self::SetTipPercent(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    RequestFocus(Field),
}

/// The two text fields of the form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    BillAmount,
    TipPercent,
}

impl Field {
    /// Field that receives focus when editing of `self` is confirmed with Enter.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::BillAmount => Some(Self::TipPercent),
            Self::TipPercent => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
