//! On/off switch widget.

use eframe::egui::{
    Response, Sense, StrokeKind, Ui, Vec2, Widget, WidgetInfo, WidgetType, lerp, pos2,
};

/// A switch bound to `on`. Clicking it flips the value and marks the response changed.
pub(crate) fn toggle(on: &mut bool) -> impl Widget + '_ {
    move |ui: &mut Ui| toggle_ui(ui, on)
}

fn toggle_ui(ui: &mut Ui, on: &mut bool) -> Response {
    let desired_size = ui.spacing().interact_size.y * Vec2::new(2.0, 1.0);
    let (rect, mut response) = ui.allocate_exact_size(desired_size, Sense::click());
    if response.clicked() {
        *on = !*on;
        response.mark_changed();
    }
    response.widget_info(|| WidgetInfo::selected(WidgetType::Checkbox, ui.is_enabled(), *on, ""));

    if ui.is_rect_visible(rect) {
        let how_on = ui.ctx().animate_bool_responsive(response.id, *on);
        let visuals = ui.style().interact_selectable(&response, *on);
        let rect = rect.expand(visuals.expansion);
        let radius = 0.5 * rect.height();
        let painter = ui.painter();
        painter.rect(
            rect,
            radius,
            visuals.bg_fill,
            visuals.bg_stroke,
            StrokeKind::Inside,
        );
        let knob_x = lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
        let center = pos2(knob_x, rect.center().y);
        painter.circle(center, 0.75 * radius, visuals.bg_fill, visuals.fg_stroke);
    }

    response
}
