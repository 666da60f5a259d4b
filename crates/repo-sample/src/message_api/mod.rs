//! # Message API Binding
//!
//! This module binds the [`Message`] resource to the repository framework.
//! Messages are the busier collection in the sample: listings are usually
//! narrowed to one conversation via a filter pair, which is what
//! [`MessageRepository::conversation_history`](crate::repositories::MessageRepository::conversation_history)
//! does.
//!
//! ## Structure
//!
//! - [`entity`] - [`RemoteResource`](repo_framework::RemoteResource)
//!   implementation for [`Message`]
//! - [`error`] - [`MessageError`] type for type-safe error handling
//! - [`backend()`] - Factory that creates the in-memory backend and its
//!   service handle

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{Message, MessageId};
use repo_framework::{ChannelService, CollectionBackend};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Message collection backend and its service handle.
pub fn backend() -> (CollectionBackend<Message>, ChannelService<Message>) {
    let message_id_counter = Arc::new(AtomicU64::new(1));
    let next_message_id = move || {
        let id = message_id_counter.fetch_add(1, Ordering::SeqCst);
        MessageId(id)
    };

    CollectionBackend::new(32, next_message_id)
}
