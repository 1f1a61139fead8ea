pub mod assistant;
pub mod catalog;
pub mod conversation;
pub mod lead;
pub mod matcher;
pub mod replies;
pub mod shell;

pub use catalog::{load_catalog, ProductCatalog};
pub use conversation::{Conversation, ConversationState, Message, Turn};
pub use lead::LeadForm;
pub use shell::{ScrollTracker, Shell, WidgetView};
