use std::env;

/// Base URL of the assistant service, compiled in.
pub const DEFAULT_BACKEND_URL: &str = "https://hasistic-vic-chatbot-backend.hf.space";

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub assistant_name: String,
    pub window_width: f32,
    pub window_height: f32,
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        dotenv::dotenv().ok();

        let backend_url = env::var("VIC_BACKEND_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        Self {
            backend_url,
            assistant_name: "Vic".to_string(),
            // Room for the open window plus the launcher underneath it
            window_width: 380.0,
            window_height: 620.0,
            log_file: "logs/vic-chat.log".to_string(),
        }
    }
}
