//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the sample: starting the
//! collection backends, binding repositories to their services, and shutting
//! everything down cleanly.
//!
//! ## The Orchestration Pattern
//!
//! Individual backends are simple; **wiring them together** is where the
//! coordination lives. [`ChatSystem`] is the conductor:
//!
//! 1. **Backend Creation** - instantiate every collection backend and its
//!    service handle
//! 2. **Repository Binding** - wrap each service in its typed repository
//! 3. **Lifecycle Management** - spawn each backend in its own Tokio task
//! 4. **Graceful Shutdown** - drop the repositories (closing the channels),
//!    then await every backend task
//!
//! ## Graceful Shutdown
//!
//! When the repositories are dropped, the underlying channel senders go with
//! them. Each backend detects the closed channel (`recv()` returns `None`),
//! logs its final state, and exits its loop. Awaiting the task handles then
//! guarantees no request is lost mid-flight.

pub mod chat_system;

pub use chat_system::*;
