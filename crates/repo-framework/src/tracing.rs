//! # Observability & Tracing
//!
//! This module provides the tracing setup shared by every binary and test
//! harness built on the framework.
//!
//! ## What Gets Traced
//!
//! - **Backend Lifecycle**: startup, shutdown, and final store size
//! - **Collection Operations**: GetById, List, Create, Update, Delete
//! - **Repository Calls**: each operation runs inside its own span
//! - **Errors**: rejection reasons and missing ids with full context
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full request payloads
//! ```
//!
//! With `RUST_LOG=debug`, operations log full payloads once at the start
//! (`debug!(?params, "Create")`); all subsequent lines stay concise and show
//! only the span hierarchy.

/// Initialize structured logging for the entire process.
///
/// Uses a compact format that hides the crate/module prefix
/// (`with_target(false)`); log lines carry a `resource_type` field instead.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
