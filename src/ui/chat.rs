/// Chat window rendering and interaction module
use eframe::egui;

use super::{avatar, lead_form, markup};
use crate::session::{replies, Conversation, ConversationState, Message};

/// Constants for chat window styling
pub const CHAT_WINDOW_WIDTH: f32 = 350.0;
pub const BODY_HEIGHT: f32 = 380.0;
pub const BODY_HEIGHT_INITIAL: f32 = 300.0;
pub const BUBBLE_MAX_WIDTH: f32 = 250.0;
pub const AVATAR_SIZE: f32 = 28.0;

const HEADER_FILL: egui::Color32 = egui::Color32::from_rgb(40, 110, 220);
const BOT_BUBBLE: egui::Color32 = egui::Color32::from_rgb(236, 238, 241);
const USER_BUBBLE: egui::Color32 = egui::Color32::from_rgb(40, 110, 220);
const BOT_TEXT: egui::Color32 = egui::Color32::from_rgb(40, 40, 40);

/// What the user did in the chat window this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    Send,
    QuickQuestion(&'static str),
    Minimize,
    Close,
    Interested,
    SubmitLead,
    CancelLead,
}

/// Draws the open chat window and returns the actions taken in it
pub fn draw_chat_window(
    ui: &mut egui::Ui,
    conversation: &mut Conversation,
    input_text: &mut String,
    avatar_texture: Option<&egui::TextureHandle>,
    assistant_name: &str,
    scroll_to_bottom: bool,
) -> Vec<ChatAction> {
    let mut actions = Vec::new();

    egui::Frame::new()
        .fill(egui::Color32::from_rgb(250, 250, 251))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(200)))
        .corner_radius(12.0)
        .show(ui, |ui| {
            ui.set_width(CHAT_WINDOW_WIDTH);
            ui.spacing_mut().item_spacing.y = 6.0;

            actions.extend(draw_header(ui, avatar_texture, assistant_name));

            let body_height = if conversation.is_empty() {
                BODY_HEIGHT_INITIAL
            } else {
                BODY_HEIGHT
            };

            egui::ScrollArea::vertical()
                .max_height(body_height)
                .auto_shrink([false; 2])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    egui::Frame::new()
                        .inner_margin(egui::Margin::symmetric(10, 6))
                        .show(ui, |ui| {
                            actions.extend(draw_body(ui, conversation, avatar_texture));
                        });

                    if scroll_to_bottom {
                        ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                    }
                });

            // The input is locked while a lead form is open
            let input_enabled = conversation.lead_form().is_none();
            let can_send = conversation.state() == ConversationState::Idle;
            if draw_footer(ui, input_text, input_enabled, can_send) {
                actions.push(ChatAction::Send);
            }

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("AI can sometimes be inaccurate.")
                        .size(10.0)
                        .color(egui::Color32::from_gray(140)),
                );
            });
            ui.add_space(4.0);
        });

    actions
}

fn draw_header(
    ui: &mut egui::Ui,
    avatar_texture: Option<&egui::TextureHandle>,
    assistant_name: &str,
) -> Vec<ChatAction> {
    let mut actions = Vec::new();

    egui::Frame::new()
        .fill(HEADER_FILL)
        .corner_radius(egui::CornerRadius {
            nw: 12,
            ne: 12,
            sw: 0,
            se: 0,
        })
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let rect = avatar::draw(ui, avatar_texture, 32.0);
                // Online dot
                ui.painter().circle_filled(
                    egui::pos2(rect.max.x - 4.0, rect.max.y - 4.0),
                    4.0,
                    egui::Color32::from_rgb(60, 200, 90),
                );
                ui.label(
                    egui::RichText::new(assistant_name)
                        .size(16.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let close = egui::Button::new(
                        egui::RichText::new("×").size(18.0).color(egui::Color32::WHITE),
                    )
                    .frame(false);
                    if ui.add(close).on_hover_text("Close").clicked() {
                        actions.push(ChatAction::Close);
                    }

                    let minimize = egui::Button::new(
                        egui::RichText::new("−").size(18.0).color(egui::Color32::WHITE),
                    )
                    .frame(false);
                    if ui.add(minimize).on_hover_text("Minimize").clicked() {
                        actions.push(ChatAction::Minimize);
                    }
                });
            });
        });

    actions
}

fn draw_body(
    ui: &mut egui::Ui,
    conversation: &mut Conversation,
    avatar_texture: Option<&egui::TextureHandle>,
) -> Vec<ChatAction> {
    let mut actions = Vec::new();

    // The welcome bubble is not part of the history
    bot_row(ui, avatar_texture, |ui| {
        markup::render(ui, replies::WELCOME, BOT_TEXT);
    });

    let quick_questions = conversation.quick_questions();
    if !quick_questions.is_empty() {
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new("Common questions are:")
                .size(12.0)
                .color(egui::Color32::from_gray(110)),
        );
        for question in quick_questions {
            let button = egui::Button::new(egui::RichText::new(*question).size(12.0))
                .corner_radius(14.0)
                .stroke(egui::Stroke::new(1.0, HEADER_FILL));
            if ui.add(button).clicked() {
                actions.push(ChatAction::QuickQuestion(*question));
            }
        }
    }

    for message in conversation.messages() {
        if message.is_user() {
            user_row(ui, message);
        } else {
            let offers_interest = conversation.offers_interest(message);
            bot_row(ui, avatar_texture, |ui| {
                markup::render(ui, &message.text, BOT_TEXT);
                if offers_interest {
                    ui.add_space(4.0);
                    let button = egui::Button::new(
                        egui::RichText::new("I'm interested in this product")
                            .color(egui::Color32::WHITE),
                    )
                    .fill(HEADER_FILL)
                    .corner_radius(8.0);
                    if ui.add(button).clicked() {
                        actions.push(ChatAction::Interested);
                    }
                }
            });
        }
    }

    if conversation.is_typing() {
        bot_row(ui, avatar_texture, typing_indicator);
    }

    let submitting = conversation.lead_form().map(|state| state.submitting);
    if let (Some(submitting), Some(form)) = (submitting, conversation.lead_form_mut()) {
        ui.add_space(6.0);
        match lead_form::draw_lead_form(ui, form, submitting) {
            Some(lead_form::LeadFormAction::Submit) => actions.push(ChatAction::SubmitLead),
            Some(lead_form::LeadFormAction::Cancel) => actions.push(ChatAction::CancelLead),
            None => {}
        }
    }

    actions
}

fn bot_row(
    ui: &mut egui::Ui,
    avatar_texture: Option<&egui::TextureHandle>,
    content: impl FnOnce(&mut egui::Ui),
) {
    ui.horizontal_top(|ui| {
        avatar::draw(ui, avatar_texture, AVATAR_SIZE);
        egui::Frame::new()
            .fill(BOT_BUBBLE)
            .corner_radius(10.0)
            .inner_margin(egui::Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.set_max_width(BUBBLE_MAX_WIDTH);
                ui.vertical(content);
            });
    });
}

fn user_row(ui: &mut egui::Ui, message: &Message) {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
        ui.label(egui::RichText::new("👤").size(20.0));
        egui::Frame::new()
            .fill(USER_BUBBLE)
            .corner_radius(10.0)
            .inner_margin(egui::Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.set_max_width(BUBBLE_MAX_WIDTH);
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    markup::render(ui, &message.text, egui::Color32::WHITE);
                });
            });
    });
}

/// Three pulsing dots
fn typing_indicator(ui: &mut egui::Ui) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(36.0, 14.0), egui::Sense::hover());
    let time = ui.input(|i| i.time) as f32;

    for i in 0..3 {
        let phase = (time * 4.0 - i as f32 * 0.7).sin() * 0.5 + 0.5;
        let alpha = (80.0 + phase * 175.0) as u8;
        let center = egui::pos2(rect.min.x + 6.0 + i as f32 * 12.0, rect.center().y);
        ui.painter().circle_filled(
            center,
            4.0,
            egui::Color32::from_rgba_unmultiplied(110, 110, 110, alpha),
        );
    }

    ui.ctx().request_repaint();
}

/// Renders the input field and send button; returns true when the user sends
fn draw_footer(ui: &mut egui::Ui, input_text: &mut String, enabled: bool, can_send: bool) -> bool {
    let mut send = false;

    egui::Frame::new()
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let input = egui::TextEdit::singleline(input_text)
                    .hint_text("Tell us how can we help...")
                    .desired_width(CHAT_WINDOW_WIDTH - 70.0);
                let response = ui.add_enabled(enabled, input);

                // Send on Enter
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    send = can_send;
                    response.request_focus();
                }

                let button = egui::Button::new(
                    egui::RichText::new("↑").size(16.0).color(egui::Color32::WHITE),
                )
                .fill(HEADER_FILL)
                .corner_radius(6.0);
                if ui.add_enabled(can_send, button).clicked() {
                    send = true;
                }
            });
        });

    send && !input_text.trim().is_empty()
}
