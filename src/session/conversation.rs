use super::lead::LeadForm;
use super::replies;
use crate::backend::BackendResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One entry of the chat history. Never modified after it is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub show_interest_button: bool,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            show_interest_button: false,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            show_interest_button: false,
        }
    }

    /// Bot reply carrying the interest flag
    pub fn bot_with_interest(text: impl Into<String>, show_interest_button: bool) -> Self {
        Self {
            show_interest_button,
            ..Self::bot(text)
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    Idle,
    AwaitingReply,
    FormOpen,
}

/// Outcome of starting a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Blank input, nothing happened
    Ignored,
    /// Answered from the canned tables, the turn is over
    Canned,
    /// The query must go to the assistant service; finish with [`Conversation::finish_turn`]
    Pending(String),
}

#[derive(Debug, Clone, Default)]
pub struct LeadFormState {
    pub form: LeadForm,
    pub submitting: bool,
}

/// Message history and turn state of one chat session
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    started: bool,
    pending_turns: usize,
    lead_form: Option<LeadFormState>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn is_typing(&self) -> bool {
        self.pending_turns > 0
    }

    pub fn state(&self) -> ConversationState {
        if self.is_typing() {
            ConversationState::AwaitingReply
        } else if self.lead_form.is_some() {
            ConversationState::FormOpen
        } else {
            ConversationState::Idle
        }
    }

    /// Example questions, offered only before anything was said
    pub fn quick_questions(&self) -> &'static [&'static str] {
        if self.messages.is_empty() {
            &replies::QUICK_QUESTIONS
        } else {
            &[]
        }
    }

    /// Appends the user's message and either answers it from the canned
    /// tables or hands back the query for the assistant service.
    pub fn send_user_message(&mut self, text: &str) -> Turn {
        let text = text.trim();
        if text.is_empty() {
            return Turn::Ignored;
        }

        self.started = true;
        self.messages.push(Message::user(text));

        if let Some(reply) = replies::canned_reply(text) {
            log::debug!("Canned reply for {:?}", text);
            self.messages.push(Message::bot(reply));
            return Turn::Canned;
        }

        self.pending_turns += 1;
        Turn::Pending(text.to_string())
    }

    /// Ends a pending turn with its bot reply and drops the typing indicator
    pub fn finish_turn(&mut self, reply: Message) {
        self.messages.push(reply);
        self.pending_turns = self.pending_turns.saturating_sub(1);
    }

    /// Wipes the history and any open lead form. In-flight turns still finish.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.started = false;
        self.lead_form = None;
        log::info!("🗑️ Conversation cleared");
    }

    /// Whether the interest affordance is shown under `message`
    pub fn offers_interest(&self, message: &Message) -> bool {
        message.show_interest_button && self.lead_form.is_none()
    }

    /// Opens an empty lead form; only one can be open at a time
    pub fn open_lead_form(&mut self) -> bool {
        if self.lead_form.is_some() {
            return false;
        }
        self.lead_form = Some(LeadFormState::default());
        true
    }

    pub fn lead_form(&self) -> Option<&LeadFormState> {
        self.lead_form.as_ref()
    }

    pub fn lead_form_mut(&mut self) -> Option<&mut LeadForm> {
        self.lead_form.as_mut().map(|state| &mut state.form)
    }

    /// Snapshot of the form to submit, or `None` when it is missing,
    /// incomplete, or already being submitted
    pub fn begin_lead_submit(&mut self) -> Option<LeadForm> {
        let state = self.lead_form.as_mut()?;
        if state.submitting || !state.form.is_complete() {
            return None;
        }
        state.submitting = true;
        Some(state.form.clone())
    }

    /// Reports the submission outcome and closes the submitted form either
    /// way. A form opened after a clear is left alone.
    pub fn finish_lead_submit(&mut self, outcome: &BackendResult<()>) {
        let text = match outcome {
            Ok(()) => replies::LEAD_SAVED,
            Err(_) => replies::LEAD_APOLOGY,
        };
        self.messages.push(Message::bot(text));
        if self.lead_form.as_ref().is_some_and(|state| state.submitting) {
            self.lead_form = None;
        }
    }

    /// Closes the form without a message; ignored while a submission runs
    pub fn cancel_lead_form(&mut self) {
        match &self.lead_form {
            Some(state) if state.submitting => {}
            _ => self.lead_form = None,
        }
    }
}
