//! Tip Time desktop application UI.
//!
//! # Design Notes
//! - One screen: bill amount, tip percentage, a round-up switch, and the tip.
//! - Widgets never touch state directly. They push actions into a queue that is folded into
//!   the state once per frame, and the screen is rebuilt from the resulting view model.
//! - Nothing is persisted; every launch starts from an empty form.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};
use tiptime_core::CurrencyLocale;

use crate::{
    action::{ActionRequestQueue, handler},
    state::{TipState, UiState},
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct TipTimeApp {
    tip_state: TipState,
    ui_state: UiState,
    locale: CurrencyLocale,
}

impl TipTimeApp {
    pub fn new(_cc: &CreationContext<'_>, locale: CurrencyLocale) -> Self {
        log::info!("using currency locale {locale}");
        Self {
            tip_state: TipState::default(),
            ui_state: UiState::new(),
            locale,
        }
    }
}

impl App for TipTimeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        let focus_request = self.ui_state.take_focus_request();
        let tip_screen_vm = view_model_builder::build_tip_screen_view_model(
            &self.tip_state,
            &self.locale,
            focus_request,
        );

        CentralPanel::default().show(ctx, |ui| {
            ui::tip_screen::show(ui, &tip_screen_vm, &mut action_queue);
        });

        if !action_queue.is_empty() {
            handler::handle_all(&mut self.tip_state, &mut self.ui_state, &mut action_queue);
            // The tip line and focus changes show up on the next frame.
            ctx.request_repaint();
        }
    }
}
