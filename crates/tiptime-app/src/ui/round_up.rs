use eframe::egui::{Sides, Ui};

use crate::{
    action::{ActionRequestQueue, InputAction},
    ui::toggle::toggle,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct RoundUpViewModel {
    round_up: bool,
}

impl RoundUpViewModel {
    #[must_use]
    pub(crate) fn new(round_up: bool) -> Self {
        Self { round_up }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: RoundUpViewModel, action_queue: &mut ActionRequestQueue) {
    let mut round_up = vm.round_up;
    Sides::new().show(
        ui,
        |ui| {
            ui.label("Round up tip?");
        },
        |ui| {
            if ui.add(toggle(&mut round_up)).changed() {
                action_queue.request(InputAction::SetRoundUp(round_up).into());
            }
        },
    );
}
