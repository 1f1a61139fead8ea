/// Network halves of a turn. Both functions are infallible: every backend
/// error is logged here and turned into the fixed apology text.
use super::catalog::ProductCatalog;
use super::conversation::Message;
use super::lead::LeadForm;
use super::{matcher, replies};
use crate::backend::{BackendResult, ChatBackend};

/// Asks the service for an answer and builds the bot reply.
///
/// The interest flag is decided here, against the catalog snapshot the turn
/// was started with.
pub async fn answer_query(
    backend: &dyn ChatBackend,
    query: &str,
    catalog: &ProductCatalog,
) -> Message {
    match backend.fetch_answer(query).await {
        Ok(answer) => {
            let show_interest = matcher::matches(query, catalog.products());
            log::debug!("showInterestButton for {:?}: {}", query, show_interest);
            Message::bot_with_interest(replies::answer_text(answer.as_deref()), show_interest)
        }
        Err(e) => {
            log::error!("Error fetching response: {}", e);
            Message::bot(replies::ANSWER_APOLOGY)
        }
    }
}

pub async fn submit_lead(backend: &dyn ChatBackend, form: &LeadForm) -> BackendResult<()> {
    let outcome = backend.save_lead(form).await;
    match &outcome {
        Ok(()) => log::info!("✓ Lead saved"),
        Err(e) => log::error!("Error submitting form: {}", e),
    }
    outcome
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::backend::BackendError;
    use crate::session::conversation::{Conversation, Turn};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory backend returning scripted results
    pub(crate) struct ScriptedBackend {
        pub products: Mutex<Option<BackendResult<serde_json::Value>>>,
        pub answer: Mutex<Option<BackendResult<Option<String>>>>,
        pub lead: Mutex<Option<BackendResult<()>>>,
        pub queries: Mutex<Vec<String>>,
        pub leads: Mutex<Vec<LeadForm>>,
    }

    impl ScriptedBackend {
        pub fn new() -> Self {
            Self {
                products: Mutex::new(None),
                answer: Mutex::new(None),
                lead: Mutex::new(None),
                queries: Mutex::new(Vec::new()),
                leads: Mutex::new(Vec::new()),
            }
        }

        pub fn with_products(self, result: BackendResult<serde_json::Value>) -> Self {
            *self.products.lock().unwrap() = Some(result);
            self
        }

        pub fn with_answer(self, result: BackendResult<Option<String>>) -> Self {
            *self.answer.lock().unwrap() = Some(result);
            self
        }

        pub fn with_lead(self, result: BackendResult<()>) -> Self {
            *self.lead.lock().unwrap() = Some(result);
            self
        }
    }

    fn unscripted<T>() -> BackendResult<T> {
        Err(BackendError::Malformed("unscripted call".to_string()))
    }

    #[async_trait]
    impl ChatBackend for ScriptedBackend {
        async fn fetch_products(&self) -> BackendResult<serde_json::Value> {
            self.products.lock().unwrap().take().unwrap_or_else(unscripted)
        }

        async fn fetch_answer(&self, query: &str) -> BackendResult<Option<String>> {
            self.queries.lock().unwrap().push(query.to_string());
            self.answer.lock().unwrap().take().unwrap_or_else(unscripted)
        }

        async fn save_lead(&self, lead: &LeadForm) -> BackendResult<()> {
            self.leads.lock().unwrap().push(lead.clone());
            self.lead.lock().unwrap().take().unwrap_or_else(unscripted)
        }
    }

    fn catalog() -> ProductCatalog {
        ProductCatalog::new(vec!["Widget Pro".to_string(), "Gadget".to_string()])
    }

    async fn run_turn(backend: &ScriptedBackend, conversation: &mut Conversation, text: &str) {
        match conversation.send_user_message(text) {
            Turn::Pending(query) => {
                assert!(conversation.is_typing());
                let reply = answer_query(backend, &query, &catalog()).await;
                conversation.finish_turn(reply);
            }
            Turn::Canned | Turn::Ignored => {}
        }
    }

    #[tokio::test]
    async fn product_query_offers_interest() {
        let backend =
            ScriptedBackend::new().with_answer(Ok(Some("It costs $10.".to_string())));
        let reply = answer_query(&backend, "How much is the Widget Pro?", &catalog()).await;

        assert_eq!(reply, Message::bot_with_interest("It costs $10.", true));
        assert_eq!(
            backend.queries.lock().unwrap().as_slice(),
            ["How much is the Widget Pro?"]
        );
    }

    #[tokio::test]
    async fn unrelated_query_does_not_offer_interest() {
        let backend = ScriptedBackend::new().with_answer(Ok(Some("9 to 5.".to_string())));
        let reply = answer_query(&backend, "opening hours?", &catalog()).await;
        assert!(!reply.show_interest_button);
    }

    #[tokio::test]
    async fn empty_catalog_never_offers_interest() {
        let backend = ScriptedBackend::new().with_answer(Ok(Some("Sure.".to_string())));
        let reply = answer_query(&backend, "Widget Pro", &ProductCatalog::default()).await;
        assert!(!reply.show_interest_button);
    }

    #[tokio::test]
    async fn answer_is_post_processed() {
        let backend = ScriptedBackend::new().with_answer(Ok(Some(
            "Please refer to the following email".to_string(),
        )));
        let reply = answer_query(&backend, "refund", &catalog()).await;
        assert_eq!(
            reply.text,
            "Please refer to the following email: victor@victorferia.com"
        );

        let backend = ScriptedBackend::new().with_answer(Ok(None));
        let reply = answer_query(&backend, "refund", &catalog()).await;
        assert_eq!(reply.text, replies::EMPTY_ANSWER);
    }

    #[tokio::test]
    async fn failures_become_apology() {
        let failures = [
            BackendError::Http {
                status: 502,
                body: "bad gateway".to_string(),
            },
            BackendError::Malformed("not json".to_string()),
        ];

        for failure in failures {
            let backend = ScriptedBackend::new().with_answer(Err(failure));
            let reply = answer_query(&backend, "Widget Pro", &catalog()).await;
            assert_eq!(reply, Message::bot(replies::ANSWER_APOLOGY));
        }
    }

    #[tokio::test]
    async fn typing_is_cleared_on_success_and_failure() {
        let mut conversation = Conversation::new();

        let ok = ScriptedBackend::new().with_answer(Ok(Some("Yes".to_string())));
        run_turn(&ok, &mut conversation, "do you ship?").await;
        assert!(!conversation.is_typing());

        let failing = ScriptedBackend::new().with_answer(Err(BackendError::Http {
            status: 500,
            body: String::new(),
        }));
        run_turn(&failing, &mut conversation, "and to Spain?").await;
        assert!(!conversation.is_typing());

        assert_eq!(conversation.messages().len(), 4);
        assert_eq!(conversation.messages()[3].text, replies::ANSWER_APOLOGY);
    }

    #[tokio::test]
    async fn canned_turn_skips_the_service() {
        let backend = ScriptedBackend::new();
        let mut conversation = Conversation::new();
        run_turn(&backend, &mut conversation, "What can you do").await;

        assert!(backend.queries.lock().unwrap().is_empty());
        assert_eq!(conversation.messages()[1].text, replies::ABOUT_REPLY);
    }

    #[tokio::test]
    async fn every_turn_adds_one_user_and_at_most_one_bot_message() {
        let mut conversation = Conversation::new();
        for text in ["hi", "Gadget price", "   ", "who are you"] {
            let before = conversation.messages().len();
            let backend = ScriptedBackend::new().with_answer(Ok(Some("ok".to_string())));
            run_turn(&backend, &mut conversation, text).await;
            let added = conversation.messages().len() - before;

            if text.trim().is_empty() {
                assert_eq!(added, 0);
            } else {
                assert_eq!(added, 2);
                assert!(conversation.messages()[before].is_user());
                assert!(!conversation.messages()[before + 1].is_user());
            }
        }
    }

    #[tokio::test]
    async fn lead_is_posted_as_entered() {
        let backend = ScriptedBackend::new().with_lead(Ok(()));
        let form = LeadForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            message: "Call me".to_string(),
        };

        assert!(submit_lead(&backend, &form).await.is_ok());
        assert_eq!(backend.leads.lock().unwrap().as_slice(), [form]);
    }

    #[tokio::test]
    async fn lead_failure_is_reported() {
        let backend = ScriptedBackend::new().with_lead(Err(BackendError::Http {
            status: 400,
            body: String::new(),
        }));
        assert!(submit_lead(&backend, &LeadForm::default()).await.is_err());
    }
}
