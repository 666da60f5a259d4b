//! Wire types for the chat domain.

pub mod message;
pub mod user;

pub use message::{Message, MessageCreate, MessageId, MessageUpdate};
pub use user::{User, UserCreate, UserUpdate};
