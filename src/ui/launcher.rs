/// Closed faces of the widget: call-to-action and minimised icon
use eframe::egui;

use super::avatar;

pub const ICON_SIZE: f32 = 56.0;
pub const DOT_SIZE: f32 = 12.0;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(40, 110, 220);
const ACCENT_HOVER: egui::Color32 = egui::Color32::from_rgb(60, 130, 240);

/// Avatar with a "Start a conversation" pill. Returns true if clicked.
pub fn draw_call_to_action(ui: &mut egui::Ui, avatar_texture: Option<&egui::TextureHandle>) -> bool {
    let frame = egui::Frame::new()
        .fill(egui::Color32::WHITE)
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(210)))
        .corner_radius(28.0)
        .inner_margin(egui::Margin::symmetric(10, 8));

    let inner = frame.show(ui, |ui| {
        ui.horizontal(|ui| {
            avatar::draw(ui, avatar_texture, 40.0);
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new("💬 Start a conversation")
                    .size(15.0)
                    .color(egui::Color32::from_rgb(40, 40, 40)),
            );
        });
    });

    let response = ui.interact(
        inner.response.rect,
        egui::Id::new("call_to_action"),
        egui::Sense::click(),
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response.clicked()
}

/// Round chat icon with a notification dot. Returns true if clicked.
pub fn draw_minimized(ui: &mut egui::Ui) -> bool {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(ICON_SIZE, ICON_SIZE), egui::Sense::click());
    let painter = ui.painter();
    let center = rect.center();

    let fill = if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        ACCENT_HOVER
    } else {
        ACCENT
    };

    painter.circle_filled(center, ICON_SIZE / 2.0, fill);
    painter.circle_stroke(
        center,
        ICON_SIZE / 2.0,
        egui::Stroke::new(1.5, egui::Color32::from_rgb(20, 70, 160)),
    );
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        "💬",
        egui::FontId::proportional(24.0),
        egui::Color32::WHITE,
    );

    // Notification dot in the top-right corner
    let dot = egui::pos2(rect.max.x - DOT_SIZE / 2.0, rect.min.y + DOT_SIZE / 2.0);
    painter.circle_filled(dot, DOT_SIZE / 2.0, egui::Color32::from_rgb(230, 60, 60));
    painter.circle_stroke(dot, DOT_SIZE / 2.0, egui::Stroke::new(1.5, egui::Color32::WHITE));

    response.clicked()
}
