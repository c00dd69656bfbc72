// Session log for oracle conversation memory

use super::types::ChatMessage;

/// Ordered user/assistant turns of one oracle instance.
///
/// Unlike a chat REPL history this never trims: when memory is on, every
/// earlier turn is replayed in full on each call.
#[derive(Debug, Clone, Default)]
pub struct SessionLog {
    messages: Vec<ChatMessage>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed exchange
    pub fn record_turn(&mut self, prompt: &str, reply: &str) {
        self.messages.push(ChatMessage::user(prompt));
        self.messages.push(ChatMessage::assistant(reply));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of complete turns (user + assistant pairs)
    pub fn turn_count(&self) -> usize {
        self.messages.len() / 2
    }
}
