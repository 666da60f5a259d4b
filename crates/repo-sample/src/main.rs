//! # Chat Client Sample
//!
//! A demonstration of the repository framework applied to a chat domain.
//!
//! The entry point demonstrates:
//! 1. Setting up the [`ChatSystem`](repo_sample::lifecycle::ChatSystem).
//! 2. Creating a [`User`](repo_sample::model::User) profile.
//! 3. Posting [`Message`](repo_sample::model::Message)s and paging through a
//!    conversation's history.
//!
//! Run with `RUST_LOG=info` for compact logs, `RUST_LOG=debug` for full
//! payloads.

use repo_framework::tracing::setup_tracing;
use repo_framework::Repository;
use repo_sample::lifecycle::ChatSystem;
use repo_sample::model::{MessageCreate, MessageUpdate, UserCreate, UserUpdate};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting chat client sample");

    // Create the system (starts both collection backends)
    let system = ChatSystem::new();

    // Create a user profile
    let user_params = UserCreate {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
    };

    let span = tracing::info_span!("profile_setup");
    let alice = async {
        info!("Creating profile");
        let alice = system
            .users
            .create(user_params)
            .await
            .map_err(|e| e.to_string())?;
        system
            .users
            .update(
                alice.id.clone(),
                UserUpdate {
                    name: None,
                    email: None,
                    avatar_url: Some("https://cdn.example.com/alice.png".to_string()),
                },
            )
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(user_id = %alice.id, "Profile ready");

    // Post a few messages into one conversation
    let span = tracing::info_span!("conversation");
    let first_id = async {
        info!("Posting messages");
        let mut first_id = None;
        for body in ["hello!", "anyone around?", "ok, later then"] {
            let message = system
                .messages
                .create(MessageCreate {
                    conversation_id: "conv_1".to_string(),
                    author_id: alice.id.clone(),
                    body: body.to_string(),
                })
                .await
                .map_err(|e| e.to_string())?;
            first_id.get_or_insert(message.id);
        }
        first_id.ok_or_else(|| "no message was posted".to_string())
    }
    .instrument(span)
    .await?;

    // Page through the history, two messages at a time
    let history = system
        .messages
        .conversation_history("conv_1", 0, 2)
        .await
        .map_err(|e| e.to_string())?;
    info!(
        count = history.len(),
        total = history.total_items,
        has_next = history.has_next,
        "Fetched first history page"
    );

    // Edit the first message
    let edited = system
        .messages
        .update(
            first_id.clone(),
            MessageUpdate {
                body: Some("hello, everyone!".to_string()),
            },
        )
        .await
        .map_err(|e| e.to_string())?;
    info!(message_id = %edited.id, body = %edited.body, "Message edited");

    // Delete it, and show the failure mode a UI would present
    system
        .messages
        .delete(first_id.clone())
        .await
        .map_err(|e| e.to_string())?;
    match system.messages.get_by_id(first_id).await {
        Ok(message) => error!(message_id = %message.id, "Deleted message still present"),
        Err(e) => info!(error = %e, "Deleted message is gone, as expected"),
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Sample completed successfully");
    Ok(())
}
