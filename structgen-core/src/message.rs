//! Chat message and conversation types.
//!
//! A [`Conversation`] is the ordered message sequence sent to a completion
//! model. It only ever grows: the retry loop appends the model's raw reply
//! and a feedback message, producing a new snapshot each step.

use serde::{Deserialize, Serialize};

/// The author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instructions.
    System,
    /// End-user input.
    User,
    /// Model output.
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who authored the message.
    pub role: Role,
    /// The message text.
    pub content: String,
}

impl Message {
    /// Create a message with an explicit role.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// An ordered, append-only sequence of messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Create an empty conversation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a conversation from existing messages.
    #[must_use]
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Append a message in place.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Return a new conversation with `message` appended.
    ///
    /// The retry loop uses this to produce a fresh snapshot per attempt
    /// instead of mutating shared history.
    #[must_use]
    pub fn with_message(&self, message: Message) -> Self {
        let mut messages = self.messages.clone();
        messages.push(message);
        Self { messages }
    }

    /// The messages in order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the conversation has no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent message, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

impl FromIterator<Message> for Conversation {
    fn from_iter<T: IntoIterator<Item = Message>>(iter: T) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_message_constructors() {
        let msg = Message::system("be brief");
        assert_eq!(msg.role, Role::System);
        assert_eq!(msg.content, "be brief");

        assert_eq!(Message::user("hi").role, Role::User);
        assert_eq!(Message::assistant("hello").role, Role::Assistant);
    }

    #[test]
    fn test_with_message_leaves_original_untouched() {
        let base = Conversation::from_messages(vec![Message::user("hi")]);
        let grown = base.with_message(Message::assistant("hello"));

        assert_eq!(base.len(), 1);
        assert_eq!(grown.len(), 2);
        assert_eq!(grown.last().unwrap().content, "hello");
    }

    #[test]
    fn test_serde_wire_shape() {
        let conv = Conversation::from_messages(vec![
            Message::system("sys"),
            Message::user("usr"),
        ]);
        let json = serde_json::to_value(&conv).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"role": "system", "content": "sys"},
                {"role": "user", "content": "usr"}
            ])
        );
    }

    #[test]
    fn test_from_iterator() {
        let conv: Conversation = vec![Message::user("a"), Message::user("b")]
            .into_iter()
            .collect();
        assert_eq!(conv.len(), 2);
    }
}
