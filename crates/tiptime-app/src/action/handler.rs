use std::mem;

use crate::{
    action::{Action, ActionRequestQueue, InputAction, UiAction},
    state::{TipState, UiState},
};

pub(crate) fn handle_all(
    tip_state: &mut TipState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(tip_state, ui_state, action);
    }
}

pub(crate) fn handle(tip_state: &mut TipState, ui_state: &mut UiState, action: Action) {
    match action {
        Action::Input(action) => action.execute(tip_state),
        Action::Ui(action) => action.execute(ui_state),
    }
}

impl InputAction {
    fn execute(self, tip_state: &mut TipState) {
        log::debug!("{self:?}");
        let state = mem::take(tip_state);
        *tip_state = state.apply(self);
    }
}

impl UiAction {
    fn execute(self, ui_state: &mut UiState) {
        match self {
            UiAction::RequestFocus(field) => ui_state.request_focus(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::handle_all;
    use crate::{
        action::{ActionRequestQueue, Field, InputAction, UiAction},
        state::{TipState, UiState},
    };

    #[test]
    fn handle_all_folds_input_actions_in_order() {
        let mut tip_state = TipState::default();
        let mut ui_state = UiState::new();
        let mut queue = ActionRequestQueue::default();
        queue.request(InputAction::SetBillAmount("1".into()).into());
        queue.request(InputAction::SetBillAmount("10".into()).into());
        queue.request(InputAction::SetTipPercent("20".into()).into());
        queue.request(InputAction::SetRoundUp(true).into());

        handle_all(&mut tip_state, &mut ui_state, &mut queue);

        assert_eq!(
            tip_state,
            TipState {
                bill_amount: "10".into(),
                tip_percent: "20".into(),
                round_up: true,
            }
        );
        assert!(queue.take_all().is_empty());
    }

    #[test]
    fn ui_actions_leave_tip_state_alone() {
        let mut tip_state = TipState::default();
        let mut ui_state = UiState::new();
        let mut queue = ActionRequestQueue::default();
        queue.request(UiAction::RequestFocus(Field::TipPercent).into());

        handle_all(&mut tip_state, &mut ui_state, &mut queue);

        assert_eq!(tip_state, TipState::default());
        assert_eq!(ui_state.take_focus_request(), Some(Field::TipPercent));
    }
}
