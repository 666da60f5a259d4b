use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl From<u64> for MessageId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "message_{}", self.0)
    }
}

/// A chat message inside a conversation.
///
/// # Repository Framework
/// This struct implements the [`RemoteResource`](repo_framework::RemoteResource)
/// trait; see [`crate::message_api::entity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub conversation_id: String,
    pub author_id: String,
    pub body: String,
}

/// Payload for posting a new message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCreate {
    pub conversation_id: String,
    pub author_id: String,
    pub body: String,
}

/// Payload for editing an existing message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageUpdate {
    pub body: Option<String>,
}
