/// Fixed texts of the assistant and the canned-response tables

pub const SUPPORT_EMAIL: &str = "victor@victorferia.com";
pub const FALLBACK_EMAIL_CUE: &str = "refer to the following email";

pub const WELCOME: &str =
    "Hi, I am Vic your AI live assistant, you can ask me anything.\nHow can I help you today?";
pub const GREETING_REPLY: &str = "Hi, I'm here to help! If you have any product-related questions or need assistance, feel free to ask.";
pub const ABOUT_REPLY: &str =
    "I am Vic your AI live assistant, you can ask me anything. How can I help you today?";
pub const EMPTY_ANSWER: &str = "Thank you for your question! We will assist you shortly.";
pub const ANSWER_APOLOGY: &str =
    "Sorry, I encountered an error while processing your request. Please try again later.";
pub const LEAD_SAVED: &str = "Thank you for your interest! Our team will contact you soon.";
pub const LEAD_APOLOGY: &str =
    "Sorry, there was an error submitting your information. Please try again.";

pub const QUICK_QUESTIONS: [&str; 3] = [
    "I want to buy products",
    "How long it will take to deliver in my location",
    "Can can call you directly?",
];

const GREETINGS: [&str; 4] = ["hi", "hello", "hey", "greetings"];
const ABOUT: [&str; 4] = [
    "who are you",
    "what can you do",
    "tell me about yourself",
    "what do you do",
];

/// Canned reply for an exact (trimmed, lowercased) greeting or about phrase
pub fn canned_reply(text: &str) -> Option<&'static str> {
    let normalized = text.trim().to_lowercase();

    if GREETINGS.contains(&normalized.as_str()) {
        return Some(GREETING_REPLY);
    }
    if ABOUT.contains(&normalized.as_str()) {
        return Some(ABOUT_REPLY);
    }
    None
}

/// Appends the support address when the answer points at "the following email"
/// but carries no address itself.
pub fn append_support_email(answer: &str) -> String {
    if answer.contains('@') {
        return answer.to_string();
    }
    if answer.to_lowercase().contains(FALLBACK_EMAIL_CUE) {
        return format!("{}: {}", answer, SUPPORT_EMAIL);
    }
    answer.to_string()
}

/// Bot text for a service answer; empty or missing answers get the fallback
pub fn answer_text(answer: Option<&str>) -> String {
    match answer {
        Some(answer) if !answer.is_empty() => append_support_email(answer),
        _ => append_support_email(EMPTY_ANSWER),
    }
}
