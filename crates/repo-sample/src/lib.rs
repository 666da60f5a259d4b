//! # Chat Client Sample
//!
//! This library applies the repository framework to a small chat domain and
//! exposes its modules for integration testing.
//!
//! - **[model]**: Wire types ([`User`](model::User), [`Message`](model::Message))
//!   and their create/update payloads.
//! - **[user_api] / [message_api]**: Per-resource bindings — the
//!   [`RemoteResource`](repo_framework::RemoteResource) implementations,
//!   domain error types, and backend factories.
//! - **[repositories]**: Typed repositories
//!   ([`UserRepository`](repositories::UserRepository),
//!   [`MessageRepository`](repositories::MessageRepository)) built on the
//!   framework's default operations.
//! - **[lifecycle]**: The [`ChatSystem`](lifecycle::ChatSystem) orchestrator
//!   that wires backends and repositories together.

pub mod lifecycle;
pub mod message_api;
pub mod model;
pub mod repositories;
pub mod user_api;
