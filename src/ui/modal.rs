use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearChoice {
    Cancel,
    Confirm,
}

/// "Clear chat" confirmation. Escape or a click on the backdrop cancels.
pub fn draw_clear_modal(ctx: &egui::Context) -> Option<ClearChoice> {
    let modal = egui::Modal::new(egui::Id::new("clear_chat_modal")).show(ctx, |ui| {
        ui.set_width(260.0);
        ui.heading("Clear chat");
        ui.label("After clearing history you won't be able to access previous chats.");
        ui.add_space(8.0);

        let mut choice = None;
        ui.horizontal(|ui| {
            if ui.button("Cancel").clicked() {
                choice = Some(ClearChoice::Cancel);
            }
            let confirm = egui::Button::new(
                egui::RichText::new("Clear chat").color(egui::Color32::WHITE),
            )
            .fill(egui::Color32::from_rgb(210, 60, 60));
            if ui.add(confirm).clicked() {
                choice = Some(ClearChoice::Confirm);
            }
        });
        choice
    });

    if modal.inner.is_none() && modal.should_close() {
        return Some(ClearChoice::Cancel);
    }
    modal.inner
}
