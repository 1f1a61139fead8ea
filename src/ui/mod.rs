pub mod app;
pub mod avatar;
pub mod chat;
pub mod launcher;
pub mod lead_form;
pub mod markup;
pub mod modal;

pub use app::VicApp;
