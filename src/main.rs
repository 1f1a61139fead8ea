// Application modules
mod backend;
mod config;
mod logger;
mod session;
mod ui;

use std::sync::Arc;

use backend::HttpBackend;
use config::Config;
use eframe::NativeOptions;
use ui::VicApp;

fn main() -> anyhow::Result<()> {
    let config = Config::default();
    logger::init(&config.log_file);
    log::info!("🚀 Vic chat widget started");

    // Runtime for the network calls spawned from the UI
    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    log::info!("📁 Backend: {}", config.backend_url);
    let backend = Arc::new(HttpBackend::new(&config.backend_url));
    let title = config.assistant_name.clone();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_transparent(true)
            .with_decorations(false)
            .with_always_on_top()
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(Box::new(VicApp::new(config, backend, cc.egui_ctx.clone())))
        }),
    )
    .map_err(|e| anyhow::anyhow!("window error: {}", e))
}
