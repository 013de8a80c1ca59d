//! Message displayed to the user.
use uuid::Uuid;

/// Message types.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum MessageType {
    /// Informational message.
    Info,

    /// Success message.
    Success,

    /// Error message.
    Error,
}

impl MessageType {
    /// Class of a message of this type.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Info => "message-info",
            Self::Success => "message-success",
            Self::Error => "message-error",
        }
    }
}

/// A Message.
#[derive(Clone, PartialEq, Debug)]
pub struct Message {
    id: Uuid,

    /// Message to display.
    pub message: String,

    /// Type of message.
    pub kind: MessageType,
}

impl Message {
    fn new(message: impl Into<String>, kind: MessageType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
        }
    }

    /// Create a `Message` with a `kind` of [`MessageType::Info`].
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, MessageType::Info)
    }

    /// Create a `Message` with a `kind` of [`MessageType::Success`].
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, MessageType::Success)
    }

    /// Create a `Message` with a `kind` of [`MessageType::Error`].
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, MessageType::Error)
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }
}

#[cfg(test)]
#[path = "./message_test.rs"]
mod message_test;
