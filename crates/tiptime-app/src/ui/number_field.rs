use eframe::egui::{Id, Key, RichText, TextEdit, Ui};
use tiptime_core::retain_numeric;

use crate::{
    action::{Action, ActionRequestQueue, Field, InputAction, UiAction},
    ui::icon,
};

#[derive(Debug, Clone)]
pub(crate) struct NumberFieldViewModel<'a> {
    field: Field,
    text: &'a str,
    request_focus: bool,
}

impl<'a> NumberFieldViewModel<'a> {
    #[must_use]
    pub(crate) fn new(field: Field, text: &'a str, request_focus: bool) -> Self {
        Self {
            field,
            text,
            request_focus,
        }
    }

    #[must_use]
    pub(crate) fn request_focus(&self) -> bool {
        self.request_focus
    }
}

fn label(field: Field) -> &'static str {
    match field {
        Field::BillAmount => "Bill Amount",
        Field::TipPercent => "Tip Percentage",
    }
}

fn leading_icon(field: Field) -> &'static str {
    match field {
        Field::BillAmount => icon::MONEY,
        Field::TipPercent => icon::PERCENT,
    }
}

// Only what a numeric keyboard could type reaches the state.
fn edit_action(field: Field, text: &str) -> Action {
    InputAction::set_text(field, retain_numeric(text)).into()
}

pub(crate) fn show(ui: &mut Ui, vm: &NumberFieldViewModel, action_queue: &mut ActionRequestQueue) {
    let label_text = label(vm.field);
    ui.label(label_text);

    let mut text = vm.text.to_owned();
    let response = ui
        .horizontal(|ui| {
            ui.label(RichText::new(leading_icon(vm.field)).size(20.0));
            TextEdit::singleline(&mut text)
                .id(Id::new(vm.field))
                .hint_text(label_text)
                .desired_width(f32::INFINITY)
                .show(ui)
                .response
        })
        .inner;

    if vm.request_focus() {
        response.request_focus();
    }

    if response.changed() {
        action_queue.request(edit_action(vm.field, &text));
    }

    if response.lost_focus()
        && ui.input(|i| i.key_pressed(Key::Enter))
        && let Some(next) = vm.field.next()
    {
        action_queue.request(UiAction::RequestFocus(next).into());
    }
}
