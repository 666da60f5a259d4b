//! Resource trait implementation for the Message domain type.

use crate::model::{Message, MessageCreate, MessageUpdate};
use repo_framework::{FieldValue, RemoteResource};

impl RemoteResource for Message {
    type Id = crate::model::MessageId;
    type Create = MessageCreate;
    type Update = MessageUpdate;

    fn from_create(id: Self::Id, params: MessageCreate) -> Result<Self, String> {
        if params.body.trim().is_empty() {
            return Err("message body must not be empty".to_string());
        }
        Ok(Self {
            id,
            conversation_id: params.conversation_id,
            author_id: params.author_id,
            body: params.body,
        })
    }

    /// Message editing: only the body may change; conversation and author are
    /// fixed at creation.
    fn apply_update(&mut self, update: MessageUpdate) -> Result<(), String> {
        if let Some(body) = update.body {
            if body.trim().is_empty() {
                return Err("message body must not be empty".to_string());
            }
            self.body = body;
        }
        Ok(())
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "conversation_id" => Some(FieldValue::Str(self.conversation_id.clone())),
            "author_id" => Some(FieldValue::Str(self.author_id.clone())),
            "body" => Some(FieldValue::Str(self.body.clone())),
            _ => None,
        }
    }
}
