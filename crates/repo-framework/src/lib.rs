//! # Repository Framework
//!
//! This crate provides the foundational building blocks for creating
//! type-safe clients of remote resource collections in Rust. It implements a
//! generic **CRUD + pagination repository** pattern over an injected
//! transport, providing a clean abstraction for consuming REST-shaped
//! services.
//!
//! ## Why a Generic Repository?
//!
//! Every remote collection looks the same from a client: fetch one by id,
//! fetch a page, create, update, delete. Writing that plumbing per resource
//! duplicates the same envelope unwrapping and error mapping everywhere.
//! This framework writes the plumbing **once**, generic over the resource's
//! identifier, entity, and the two request payload shapes, and lets each
//! resource supply only its types and its transport binding.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Resource Layer** ([`RemoteResource`]) - Your entity types and DTOs
//! 2. **Transport Layer** ([`ApiService`]) - The injected collaborator that
//!    performs the actual calls and answers with [`Envelope`]s
//! 3. **Interface Layer** ([`Repository`]) - The typed facade your
//!    application calls
//!
//! This separation means you declare your resource **once**, and the
//! framework handles delegation, envelope unwrapping, and error mapping. The
//! repository itself holds no state, caches nothing, and never retries: every
//! call is a single pass-through request, and every failure propagates
//! unchanged to the caller, which owns retry and presentation policy.
//!
//! ## Core Abstractions
//!
//! ### [`RemoteResource`] - The Resource Contract
//!
//! Associated types (`Id`, `Create`, `Update`) bind a resource to its
//! identifier and payload shapes so the compiler rejects cross-resource
//! mix-ups. Server-side hooks (`from_create`, `apply_update`, `field`) let
//! the in-memory backend validate, mutate, filter, and sort entities without
//! knowing any concrete type.
//!
//! ### [`ApiService`] - The Injected Transport
//!
//! Five asynchronous operations, each resolving to an [`Envelope`]: an
//! HTTP-like status plus either a payload or a structured error body.
//! Transport-level failures (service unreachable) surface as [`RepoError`]
//! directly; application-level failures ride inside a delivered envelope and
//! are surfaced by the explicit [`Envelope::into_result`] conversion at each
//! call site.
//!
//! ### [`Repository`] - The Typed Facade
//!
//! A trait with default bodies for all five operations. A concrete repository
//! supplies its bound service and an error mapping; nothing else is required
//! unless behavior genuinely diverges (client-side caching and optimistic
//! updates are deliberately out of scope).
//!
//! ## Concurrency Model
//!
//! Each operation is one asynchronous unit of work that suspends on the
//! service and resumes with a value or a failure. There is no shared mutable
//! state between calls and no ordering guarantee between concurrent calls;
//! callers sequence dependent operations themselves. Cancellation is
//! inherited from the service's own mechanism; the repository adds no
//! timeout or retry policy.
//!
//! The bundled [`CollectionBackend`] stand-in server follows the one-task-
//! per-collection model: requests are processed sequentially from a channel,
//! so its store needs no locks.
//!
//! ## Testing
//!
//! The framework provides a **MockService** type that implements the same
//! [`ApiService`] contract as the real services but operates entirely against
//! an in-memory expectation queue. It lets you write fast, deterministic unit
//! tests for repository logic without spawning any backend. See the [`mock`]
//! module for the full API and usage patterns.

pub mod backend;
pub mod envelope;
pub mod error;
pub mod message;
pub mod mock;
pub mod page;
pub mod repository;
pub mod resource;
pub mod service;
pub mod tracing;

// Re-export core types for convenience
pub use backend::CollectionBackend;
pub use envelope::{Envelope, ErrorBody};
pub use error::RepoError;
pub use message::{CollectionRequest, Response};
pub use page::{Page, PageRequest, DEFAULT_PAGE_SIZE};
pub use repository::Repository;
pub use resource::{FieldValue, RemoteResource};
pub use service::{ApiService, ChannelService};
