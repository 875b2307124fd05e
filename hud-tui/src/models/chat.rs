//! Chat transcript for the assistant mockup
//!
//! There is no chat backend. Sending a message only queues a canned reply
//! that the app delivers after a short delay.

use super::enums::Sender;

/// Maximum characters accepted in the composer
pub const MAX_COMPOSER_CHARS: usize = 280;

/// Reply used for every message until a real backend exists
pub const STUB_REPLY: &str = "Got it. I'll get back to you on that shortly.";

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }
}

/// Transcript plus the text being composed
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    composer: String,
    pending_replies: usize,
}

impl ChatLog {
    /// Transcript pre-filled with the mockup conversation
    pub fn seeded(greeting: &str) -> Self {
        Self {
            messages: vec![
                ChatMessage::bot(greeting),
                ChatMessage::user("Hi MJ, what's the weather like?"),
                ChatMessage::bot(
                    "Based on current data, it's 72°F and partly cloudy in your location.",
                ),
            ],
            composer: String::new(),
            pending_replies: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn composer(&self) -> &str {
        &self.composer
    }

    pub fn is_waiting(&self) -> bool {
        self.pending_replies > 0
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_waiting() { "Typing..." } else { "Online" }
    }

    pub fn push_char(&mut self, c: char) {
        if c.is_control() || self.composer.chars().count() >= MAX_COMPOSER_CHARS {
            return;
        }
        self.composer.push(c);
    }

    pub fn backspace(&mut self) {
        self.composer.pop();
    }

    /// Move the composer text into the transcript.
    ///
    /// Returns the sent text, or None if the composer was blank.
    pub fn submit(&mut self) -> Option<String> {
        let text = self.composer.trim().to_string();
        self.composer.clear();
        if text.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(text.clone()));
        self.pending_replies += 1;
        Some(text)
    }

    /// Append a reply that arrived for an earlier submit
    pub fn receive_reply(&mut self, text: impl Into<String>) {
        self.pending_replies = self.pending_replies.saturating_sub(1);
        self.messages.push(ChatMessage::bot(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_transcript() {
        let log = ChatLog::seeded("Hello!");
        assert_eq!(log.messages().len(), 3);
        assert_eq!(log.messages()[0], ChatMessage::bot("Hello!"));
        assert_eq!(
            log.messages()[1],
            ChatMessage::user("Hi MJ, what's the weather like?")
        );
        assert_eq!(log.status_label(), "Online");
    }

    #[test]
    fn test_blank_submit_ignored() {
        let mut log = ChatLog::seeded("Hi");
        log.push_char(' ');
        log.push_char(' ');
        assert_eq!(log.submit(), None);
        assert_eq!(log.messages().len(), 3);
        assert!(!log.is_waiting());
        assert_eq!(log.composer(), "");
    }

    #[test]
    fn test_submit_then_reply() {
        let mut log = ChatLog::seeded("Hi");
        for c in " ping ".chars() {
            log.push_char(c);
        }
        assert_eq!(log.submit().as_deref(), Some("ping"));
        assert!(log.is_waiting());
        assert_eq!(log.status_label(), "Typing...");
        assert_eq!(log.messages().last(), Some(&ChatMessage::user("ping")));

        log.receive_reply(STUB_REPLY);
        assert!(!log.is_waiting());
        assert_eq!(log.messages().last(), Some(&ChatMessage::bot(STUB_REPLY)));
    }

    #[test]
    fn test_composer_editing() {
        let mut log = ChatLog::default();
        log.push_char('a');
        log.push_char('\n');
        log.push_char('b');
        assert_eq!(log.composer(), "ab");
        log.backspace();
        assert_eq!(log.composer(), "a");
        log.backspace();
        log.backspace();
        assert_eq!(log.composer(), "");
    }

    #[test]
    fn test_composer_limit() {
        let mut log = ChatLog::default();
        for _ in 0..MAX_COMPOSER_CHARS + 10 {
            log.push_char('x');
        }
        assert_eq!(log.composer().chars().count(), MAX_COMPOSER_CHARS);
    }
}
