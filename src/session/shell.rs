use super::conversation::Conversation;

/// Which top-level face of the widget is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetView {
    /// Call-to-action button, nothing said yet
    Launcher,
    /// Compact icon with a notification dot, conversation in progress
    Minimized,
    /// Full chat window
    Open,
}

/// Visual state of the widget: open/closed and the clear-chat dialog
#[derive(Debug, Default)]
pub struct Shell {
    open: bool,
    confirm_clear_pending: bool,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self, conversation: &Conversation) -> WidgetView {
        if self.open {
            WidgetView::Open
        } else if conversation.has_started() {
            WidgetView::Minimized
        } else {
            WidgetView::Launcher
        }
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_confirming_clear(&self) -> bool {
        self.confirm_clear_pending
    }

    /// Opens from the launcher or minimises from the header
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Closes right away when there is no history, otherwise asks first
    pub fn request_close(&mut self, conversation: &Conversation) {
        if conversation.is_empty() {
            self.open = false;
        } else {
            self.confirm_clear_pending = true;
        }
    }

    pub fn confirm_clear(&mut self, conversation: &mut Conversation) {
        conversation.clear();
        self.confirm_clear_pending = false;
        self.open = false;
    }

    pub fn cancel_clear(&mut self) {
        self.confirm_clear_pending = false;
    }
}

/// Tells the message body when to jump to the newest content
#[derive(Debug, Default)]
pub struct ScrollTracker {
    last_seen: Option<(usize, bool)>,
}

impl ScrollTracker {
    /// True whenever the message count or the typing indicator changed
    /// since the previous call
    pub fn needs_scroll(&mut self, message_count: usize, typing: bool) -> bool {
        let current = Some((message_count, typing));
        let changed = self.last_seen != current;
        self.last_seen = current;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::conversation::Message;

    #[test]
    fn starts_as_launcher_and_opening_does_not_start_conversation() {
        let conversation = Conversation::new();
        let mut shell = Shell::new();
        assert_eq!(shell.view(&conversation), WidgetView::Launcher);

        shell.toggle();
        assert_eq!(shell.view(&conversation), WidgetView::Open);
        assert!(!conversation.has_started());

        shell.toggle();
        assert_eq!(shell.view(&conversation), WidgetView::Launcher);
    }

    #[test]
    fn minimised_after_conversation_started() {
        let mut conversation = Conversation::new();
        let mut shell = Shell::new();
        shell.toggle();
        conversation.send_user_message("hello");

        shell.toggle();
        assert_eq!(shell.view(&conversation), WidgetView::Minimized);
    }

    #[test]
    fn closing_empty_chat_is_immediate() {
        let conversation = Conversation::new();
        let mut shell = Shell::new();
        shell.toggle();

        shell.request_close(&conversation);
        assert!(!shell.is_open());
        assert!(!shell.is_confirming_clear());
    }

    #[test]
    fn closing_with_history_asks_first() {
        let mut conversation = Conversation::new();
        let mut shell = Shell::new();
        shell.toggle();
        conversation.send_user_message("hi");

        shell.request_close(&conversation);
        assert!(shell.is_open());
        assert!(shell.is_confirming_clear());

        shell.cancel_clear();
        assert!(shell.is_open());
        assert!(!shell.is_confirming_clear());
        assert_eq!(conversation.messages().len(), 2);
    }

    #[test]
    fn confirming_clears_and_returns_to_launcher() {
        let mut conversation = Conversation::new();
        let mut shell = Shell::new();
        shell.toggle();
        conversation.send_user_message("hi");
        conversation.open_lead_form();

        shell.request_close(&conversation);
        shell.confirm_clear(&mut conversation);

        assert!(conversation.is_empty());
        assert!(conversation.lead_form().is_none());
        assert!(!shell.is_confirming_clear());
        assert_eq!(shell.view(&conversation), WidgetView::Launcher);
    }

    #[test]
    fn scrolls_on_new_messages_and_typing_changes() {
        let mut conversation = Conversation::new();
        let mut tracker = ScrollTracker::default();
        assert!(tracker.needs_scroll(0, false));
        assert!(!tracker.needs_scroll(0, false));

        conversation.send_user_message("shipping?");
        assert!(tracker.needs_scroll(conversation.messages().len(), conversation.is_typing()));
        assert!(!tracker.needs_scroll(conversation.messages().len(), conversation.is_typing()));

        conversation.finish_turn(Message::bot("2 days"));
        assert!(tracker.needs_scroll(conversation.messages().len(), conversation.is_typing()));
    }
}
