use eframe::egui::{Align, Layout, RichText, ScrollArea, Ui};
use egui_extras::{Size, StripBuilder};

use super::{number_field, round_up};
use crate::{
    action::ActionRequestQueue,
    ui::{number_field::NumberFieldViewModel, round_up::RoundUpViewModel},
};

const MAX_CONTENT_WIDTH: f32 = 480.0;
const HORIZONTAL_PADDING: f32 = 20.0;

#[derive(Debug, Clone)]
pub(crate) struct TipScreenViewModel<'a> {
    bill_amount: NumberFieldViewModel<'a>,
    tip_percent: NumberFieldViewModel<'a>,
    round_up: RoundUpViewModel,
    tip_amount: String,
}

impl<'a> TipScreenViewModel<'a> {
    #[must_use]
    pub(crate) fn new(
        bill_amount: NumberFieldViewModel<'a>,
        tip_percent: NumberFieldViewModel<'a>,
        round_up: RoundUpViewModel,
        tip_amount: String,
    ) -> Self {
        Self {
            bill_amount,
            tip_percent,
            round_up,
            tip_amount,
        }
    }

    #[must_use]
    pub(crate) fn bill_amount(&self) -> &NumberFieldViewModel<'a> {
        &self.bill_amount
    }

    #[must_use]
    pub(crate) fn tip_percent(&self) -> &NumberFieldViewModel<'a> {
        &self.tip_percent
    }

    #[must_use]
    pub(crate) fn tip_amount(&self) -> &str {
        &self.tip_amount
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &TipScreenViewModel, action_queue: &mut ActionRequestQueue) {
    let content_width = (ui.available_width() - 2.0 * HORIZONTAL_PADDING)
        .clamp(0.0, MAX_CONTENT_WIDTH);

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(content_width))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    show_form(ui, vm, action_queue);
                });
            });
            strip.empty();
        });
}

fn show_form(ui: &mut Ui, vm: &TipScreenViewModel, action_queue: &mut ActionRequestQueue) {
    ui.add_space(20.0);
    ui.label(RichText::new("Calculate Tip").size(18.0));
    ui.add_space(15.0);

    number_field::show(ui, vm.bill_amount(), action_queue);
    ui.add_space(32.0);
    number_field::show(ui, vm.tip_percent(), action_queue);
    ui.add_space(32.0);
    round_up::show(ui, vm.round_up, action_queue);
    ui.add_space(30.0);

    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.label(RichText::new(vm.tip_amount()).size(36.0));
    });
    ui.add_space(48.0);
}
