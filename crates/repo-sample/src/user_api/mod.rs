//! # User API Binding
//!
//! This module binds the [`User`] profile resource to the repository
//! framework.
//!
//! ## Structure
//!
//! - [`entity`] - [`RemoteResource`](repo_framework::RemoteResource)
//!   implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`backend()`] - Factory that creates the in-memory backend and its
//!   service handle
//!
//! ## Usage
//!
//! ```rust
//! use repo_framework::Repository;
//! use repo_sample::repositories::UserRepository;
//! use repo_sample::model::UserCreate;
//! use repo_sample::user_api;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (backend, service) = user_api::backend();
//!     tokio::spawn(backend.run());
//!
//!     let users = UserRepository::new(service);
//!     let params = UserCreate {
//!         name: "Alice".to_string(),
//!         email: "alice@example.com".to_string(),
//!     };
//!     let user = users.create(params).await?;
//!     assert_eq!(user.id, "user_1");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::User;
use repo_framework::{ChannelService, CollectionBackend};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new User collection backend and its service handle.
pub fn backend() -> (CollectionBackend<User>, ChannelService<User>) {
    let user_id_counter = Arc::new(AtomicU64::new(1));
    let next_user_id = move || {
        let id = user_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("user_{}", id)
    };

    CollectionBackend::new(32, next_user_id)
}
