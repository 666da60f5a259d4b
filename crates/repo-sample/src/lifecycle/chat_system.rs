use crate::message_api;
use crate::repositories::{MessageRepository, UserRepository};
use crate::user_api;

/// The main runtime orchestrator for the chat client sample.
///
/// `ChatSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the collection backends
/// - **Repository Binding**: handing each repository its service
/// - **Resource Coordination**: owning the backend task handles
///
/// # Example
///
/// ```ignore
/// let system = ChatSystem::new();
///
/// let alice = system.users.create(user_data).await?;
/// let message = system.messages.create(message_data).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct ChatSystem {
    /// Repository for user profiles.
    pub users: UserRepository,

    /// Repository for chat messages.
    pub messages: MessageRepository,

    /// Task handles for the running backends (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ChatSystem {
    /// Creates and initializes a new `ChatSystem` with both backends running.
    pub fn new() -> Self {
        let (user_backend, user_service) = user_api::backend();
        let (message_backend, message_service) = message_api::backend();

        let user_handle = tokio::spawn(user_backend.run());
        let message_handle = tokio::spawn(message_backend.run());

        Self {
            users: UserRepository::new(user_service),
            messages: MessageRepository::new(message_service),
            handles: vec![user_handle, message_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops both repositories, which closes their service channels; each
    /// backend drains its queue and exits. Returns an error if a backend task
    /// panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        drop(self.users);
        drop(self.messages);

        for handle in self.handles {
            handle
                .await
                .map_err(|e| format!("backend task failed: {e}"))?;
        }
        Ok(())
    }
}

impl Default for ChatSystem {
    fn default() -> Self {
        Self::new()
    }
}
