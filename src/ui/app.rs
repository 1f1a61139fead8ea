/// Main application structure and lifecycle management
use eframe::egui;
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;

use super::chat::{self, ChatAction};
use super::{avatar, launcher, modal};
use crate::backend::{BackendResult, ChatBackend};
use crate::config::Config;
use crate::session::{
    assistant, load_catalog, replies, Conversation, Message, ProductCatalog, ScrollTracker, Shell,
    Turn, WidgetView,
};

/// Results of background network calls, applied on the UI thread
pub enum AppEvent {
    CatalogLoaded(ProductCatalog),
    Reply(Message),
    LeadSubmitted(BackendResult<()>),
}

pub struct VicApp {
    pub config: Config,
    pub backend: Arc<dyn ChatBackend>,
    pub catalog: Arc<ProductCatalog>,
    pub conversation: Conversation,
    pub shell: Shell,
    pub scroll: ScrollTracker,
    pub input_text: String,
    pub event_receiver: std_mpsc::Receiver<AppEvent>,
    pub event_sender: std_mpsc::Sender<AppEvent>,
    pub avatar_texture: Option<egui::TextureHandle>,
    pub avatar_loaded: bool,
    pub style_initialized: bool,
    pub window_positioned: bool,
}

impl VicApp {
    pub fn new(config: Config, backend: Arc<dyn ChatBackend>, ctx: egui::Context) -> Self {
        let (event_sender, event_receiver) = std_mpsc::channel();

        let app = Self {
            config,
            backend,
            catalog: Arc::new(ProductCatalog::default()),
            conversation: Conversation::new(),
            shell: Shell::new(),
            scroll: ScrollTracker::default(),
            input_text: String::new(),
            event_receiver,
            event_sender,
            avatar_texture: None,
            avatar_loaded: false,
            style_initialized: false,
            window_positioned: false,
        };
        app.fetch_catalog(ctx);
        app
    }

    /// Loads the product names once per session
    fn fetch_catalog(&self, ctx: egui::Context) {
        let backend = Arc::clone(&self.backend);
        let sender = self.event_sender.clone();

        tokio::spawn(async move {
            let catalog = load_catalog(backend.as_ref()).await;
            if let Err(e) = sender.send(AppEvent::CatalogLoaded(catalog)) {
                log::error!("Failed to deliver product catalog: {}", e);
            }
            ctx.request_repaint();
        });
    }

    /// Applies results of finished network calls
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                AppEvent::CatalogLoaded(catalog) => {
                    log::debug!("📋 Catalog ready: {} products", catalog.len());
                    self.catalog = Arc::new(catalog);
                }
                AppEvent::Reply(reply) => self.conversation.finish_turn(reply),
                AppEvent::LeadSubmitted(outcome) => self.conversation.finish_lead_submit(&outcome),
            }
        }
    }

    pub fn send_message(&mut self, ctx: &egui::Context) {
        if self.input_text.trim().is_empty() || self.conversation.is_typing() {
            return;
        }

        let text = std::mem::take(&mut self.input_text);
        self.start_turn(&text, ctx);
    }

    fn start_turn(&mut self, text: &str, ctx: &egui::Context) {
        let query = match self.conversation.send_user_message(text) {
            Turn::Pending(query) => query,
            Turn::Canned | Turn::Ignored => return,
        };

        let backend = Arc::clone(&self.backend);
        let catalog = Arc::clone(&self.catalog);
        let sender = self.event_sender.clone();
        let ctx = ctx.clone();

        tokio::spawn(async move {
            // Inner task so a panic still ends the turn with a reply
            let task = tokio::spawn(async move {
                assistant::answer_query(backend.as_ref(), &query, &catalog).await
            });
            let reply = task.await.unwrap_or_else(|e| {
                log::error!("Answer task failed: {}", e);
                Message::bot(replies::ANSWER_APOLOGY)
            });

            if let Err(e) = sender.send(AppEvent::Reply(reply)) {
                log::error!("Failed to deliver reply: {}", e);
            }
            ctx.request_repaint();
        });
    }

    fn submit_lead(&mut self, ctx: &egui::Context) {
        let Some(form) = self.conversation.begin_lead_submit() else {
            log::debug!("Lead form not ready for submission");
            return;
        };

        let backend = Arc::clone(&self.backend);
        let sender = self.event_sender.clone();
        let ctx = ctx.clone();

        tokio::spawn(async move {
            let outcome = assistant::submit_lead(backend.as_ref(), &form).await;
            if let Err(e) = sender.send(AppEvent::LeadSubmitted(outcome)) {
                log::error!("Failed to deliver lead outcome: {}", e);
            }
            ctx.request_repaint();
        });
    }

    fn apply(&mut self, action: ChatAction, ctx: &egui::Context) {
        match action {
            ChatAction::Send => self.send_message(ctx),
            ChatAction::QuickQuestion(question) => self.start_turn(question, ctx),
            ChatAction::Minimize => self.shell.toggle(),
            ChatAction::Close => self.shell.request_close(&self.conversation),
            ChatAction::Interested => {
                self.conversation.open_lead_form();
            }
            ChatAction::SubmitLead => self.submit_lead(ctx),
            ChatAction::CancelLead => self.conversation.cancel_lead_form(),
        }
    }

    /// Places the window in the bottom-right corner of the monitor, once
    fn position_window(&mut self, ctx: &egui::Context) {
        if self.window_positioned {
            return;
        }
        let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) else {
            return;
        };

        let margin = 20.0;
        let position = egui::pos2(
            monitor.x - self.config.window_width - margin,
            monitor.y - self.config.window_height - margin * 3.0,
        );
        ctx.send_viewport_cmd_to(
            egui::ViewportId::ROOT,
            egui::ViewportCommand::OuterPosition(position),
        );
        self.window_positioned = true;
    }

    fn draw_open(&mut self, ui: &mut egui::Ui) {
        let scroll_to_bottom = self
            .scroll
            .needs_scroll(self.conversation.messages().len(), self.conversation.is_typing());

        let actions = chat::draw_chat_window(
            ui,
            &mut self.conversation,
            &mut self.input_text,
            self.avatar_texture.as_ref(),
            &self.config.assistant_name,
            scroll_to_bottom,
        );

        let ctx = ui.ctx().clone();
        for action in actions {
            self.apply(action, &ctx);
        }
    }
}

impl eframe::App for VicApp {
    /// Fully transparent surface, only the widget itself is visible
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.position_window(ctx);

        if !self.style_initialized {
            let mut style = (*ctx.style()).clone();
            style.visuals.window_fill = egui::Color32::TRANSPARENT;
            style.visuals.panel_fill = egui::Color32::TRANSPARENT;
            style.visuals.window_stroke = egui::Stroke::NONE;
            ctx.set_style(style);
            self.style_initialized = true;
        }

        if !self.avatar_loaded {
            self.avatar_texture = avatar::load(ctx);
            self.avatar_loaded = true;
        }

        self.process_events();

        let view = self.shell.view(&self.conversation);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::TRANSPARENT))
            .show(ctx, |ui| {
                ui.with_layout(egui::Layout::bottom_up(egui::Align::Max), |ui| match view {
                    WidgetView::Launcher => {
                        if launcher::draw_call_to_action(ui, self.avatar_texture.as_ref()) {
                            log::debug!("Opening chat window");
                            self.shell.toggle();
                        }
                    }
                    WidgetView::Minimized => {
                        if launcher::draw_minimized(ui) {
                            self.shell.toggle();
                        }
                    }
                    WidgetView::Open => self.draw_open(ui),
                });
            });

        if self.shell.is_confirming_clear() {
            match modal::draw_clear_modal(ctx) {
                Some(modal::ClearChoice::Confirm) => {
                    self.shell.confirm_clear(&mut self.conversation);
                    self.input_text.clear();
                }
                Some(modal::ClearChoice::Cancel) => self.shell.cancel_clear(),
                None => {}
            }
        }
    }
}
