use eframe::egui;

use crate::session::LeadForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadFormAction {
    Submit,
    Cancel,
}

/// Contact form shown after "I'm interested". Buttons are disabled while
/// `submitting`; Submit also waits until the required fields are filled.
pub fn draw_lead_form(
    ui: &mut egui::Ui,
    form: &mut LeadForm,
    submitting: bool,
) -> Option<LeadFormAction> {
    let mut action = None;

    egui::Frame::new()
        .fill(egui::Color32::WHITE)
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(210)))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Please provide your details").strong());
            ui.add_space(4.0);

            let width = ui.available_width();
            ui.add(
                egui::TextEdit::singleline(&mut form.name)
                    .hint_text("Your Name *")
                    .desired_width(width),
            );
            ui.add(
                egui::TextEdit::singleline(&mut form.email)
                    .hint_text("Your Email *")
                    .desired_width(width),
            );
            ui.add(
                egui::TextEdit::singleline(&mut form.phone)
                    .hint_text("Your Phone Number *")
                    .desired_width(width),
            );
            ui.add(
                egui::TextEdit::multiline(&mut form.message)
                    .hint_text("Additional Message (Optional)")
                    .desired_rows(3)
                    .desired_width(width),
            );

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!submitting, egui::Button::new("Cancel"))
                    .clicked()
                {
                    action = Some(LeadFormAction::Cancel);
                }

                let label = if submitting { "Submitting..." } else { "Submit" };
                let submit = egui::Button::new(
                    egui::RichText::new(label).color(egui::Color32::WHITE),
                )
                .fill(egui::Color32::from_rgb(40, 110, 220));
                let response = ui.add_enabled(!submitting && form.is_complete(), submit);
                if response.clicked() {
                    action = Some(LeadFormAction::Submit);
                }
                if !form.is_complete() {
                    response.on_disabled_hover_text("Name, email and phone are required");
                }
            });
        });

    action
}
