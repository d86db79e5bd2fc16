use log::error;

use crate::engine::client::Generate;
use crate::engine::prompt::build_prompt;
use crate::model::turn::{Conversation, Speaker};

/// Reply shown in the chat log when the generation call fails.
pub const FALLBACK_REPLY: &str =
    "I'm sorry, I'm having trouble processing that right now. Please try again later.";

/// All mutable state of one interactive session. Owned by the engine
/// thread; the UI only ever sees copies of it.
pub struct ChatSession {
    conversation: Conversation,
    busy: bool,
    last_error: Option<String>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            conversation: Conversation::new(),
            busy: false,
            last_error: None,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// True while a generation call is in flight. Consumed by the
    /// rendering layer for its progress indicator.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Diagnostic from the most recent turn, if its generation call
    /// failed. Cleared when the next turn starts.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Runs one full round trip: append the user's turn, call the
    /// generation service, append the bot's turn. Blank input is a
    /// no-op. A failed call appends [`FALLBACK_REPLY`] instead, so
    /// every non-blank invocation appends exactly two turns.
    pub fn handle_user_message(&mut self, raw_input: &str, client: &impl Generate) {
        if raw_input.trim().is_empty() {
            return;
        }

        self.conversation.append(Speaker::User, raw_input);
        self.busy = true;
        self.last_error = None;

        let prompt = build_prompt(raw_input);
        let reply = match client.generate(&prompt) {
            Ok(text) => text.trim().to_string(),
            Err(err) => {
                error!("error generating response: {err}");
                self.last_error = Some(err.to_string());
                FALLBACK_REPLY.to_string()
            }
        };

        self.conversation.append(Speaker::Bot, reply);
        self.busy = false;
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::client::GenerateError;

    struct CannedClient(&'static str);

    impl Generate for CannedClient {
        fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingClient;

    impl Generate for FailingClient {
        fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
            Err(GenerateError::Api {
                status: 503,
                message: "service unavailable".into(),
            })
        }
    }

    #[test]
    fn round_trip_appends_user_then_bot() {
        let mut session = ChatSession::new();
        session.handle_user_message("I feel anxious", &CannedClient("Take a deep breath."));

        let turns = session.conversation().turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].speaker, Speaker::User);
        assert_eq!(turns[0].text, "I feel anxious");
        assert_eq!(turns[1].speaker, Speaker::Bot);
        assert_eq!(turns[1].text, "Take a deep breath.");
        assert!(!session.is_busy());
        assert!(session.last_error().is_none());
    }

    #[test]
    fn blank_input_is_a_no_op() {
        let mut session = ChatSession::new();
        session.handle_user_message("", &CannedClient("x"));
        session.handle_user_message("   \n\t", &CannedClient("x"));
        assert!(session.conversation().is_empty());
    }

    #[test]
    fn reply_whitespace_is_stripped() {
        let mut session = ChatSession::new();
        session.handle_user_message("hello", &CannedClient("  Take a deep breath.  "));
        assert_eq!(session.conversation().turns()[1].text, "Take a deep breath.");
    }

    #[test]
    fn failure_substitutes_the_fallback_reply() {
        let mut session = ChatSession::new();
        session.handle_user_message("hello", &FailingClient);

        let turns = session.conversation().turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[1].speaker, Speaker::Bot);
        assert_eq!(turns[1].text, FALLBACK_REPLY);
        assert!(session.last_error().unwrap().contains("503"));
        assert!(!session.is_busy());
    }

    #[test]
    fn next_successful_turn_clears_the_error() {
        let mut session = ChatSession::new();
        session.handle_user_message("a", &FailingClient);
        session.handle_user_message("b", &CannedClient("better now"));

        assert!(session.last_error().is_none());
        assert_eq!(session.conversation().len(), 4);
    }
}
