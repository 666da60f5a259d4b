//! # Message Repository
//!
//! Provides a high-level API for the message collection. Beyond the standard
//! operations it exposes conversation-scoped history, which is the listing
//! shape the chat UI actually renders.

use crate::message_api::MessageError;
use crate::model::Message;
use async_trait::async_trait;
use repo_framework::{ApiService, ChannelService, Page, PageRequest, RepoError, Repository};
use tracing::{debug, instrument};

/// Repository for the message collection.
#[derive(Clone)]
pub struct MessageRepository<S: ApiService<Message> = ChannelService<Message>> {
    service: S,
}

impl<S: ApiService<Message>> MessageRepository<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<S: ApiService<Message>> Repository<Message> for MessageRepository<S> {
    type Service = S;
    type Error = MessageError;

    fn service(&self) -> &S {
        &self.service
    }

    fn map_error(e: RepoError) -> Self::Error {
        MessageError::from(e)
    }
}

impl<S: ApiService<Message>> MessageRepository<S> {
    /// Fetch one page of a conversation, oldest first (the collection's
    /// arrival order is its default order).
    #[instrument(skip(self))]
    pub async fn conversation_history(
        &self,
        conversation_id: &str,
        page: u64,
        size: u64,
    ) -> Result<Page<Message>, MessageError> {
        debug!("Sending request");
        let request = PageRequest::new()
            .page(page)
            .size(size)
            .filter("conversation_id", conversation_id);
        self.get_all(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MessageCreate, MessageId};
    use repo_framework::mock::MockService;
    use repo_framework::Envelope;

    fn message(id: u64, body: &str) -> Message {
        Message {
            id: MessageId(id),
            conversation_id: "conv_1".to_string(),
            author_id: "user_1".to_string(),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn test_conversation_history_returns_page() {
        let mut mock = MockService::<Message>::new();
        mock.expect_get_all()
            .return_ok(Page::new(vec![message(1, "hi"), message(2, "hey")], 0, 2, 5));

        let repo = MessageRepository::new(mock.clone());
        let page = repo.conversation_history("conv_1", 0, 2).await.unwrap();

        assert_eq!(page.len(), 2);
        assert_eq!(page.total_items, 5);
        assert_eq!(page.items[0].body, "hi");
        mock.verify();
    }

    #[tokio::test]
    async fn test_zero_size_never_reaches_the_service() {
        // No expectation queued: the request must be rejected client-side.
        let mock = MockService::<Message>::new();
        let repo = MessageRepository::new(mock.clone());

        let result = repo.conversation_history("conv_1", 0, 0).await;
        assert!(matches!(result, Err(MessageError::InvalidQuery(_))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_not_found_envelope_maps_to_domain_error() {
        let mut mock = MockService::<Message>::new();
        mock.expect_get_by_id(MessageId(9))
            .return_envelope(Envelope::not_found("no resource with id message_9"));

        let repo = MessageRepository::new(mock.clone());
        let result = repo.get_by_id(MessageId(9)).await;

        match result {
            Err(MessageError::NotFound(msg)) => assert!(msg.contains("message_9")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
        mock.verify();
    }

    #[tokio::test]
    async fn test_transport_failure_maps_to_api_error() {
        let mut mock = MockService::<Message>::new();
        mock.expect_create()
            .return_err(RepoError::Transport("service channel closed".into()));

        let repo = MessageRepository::new(mock.clone());
        let result = repo
            .create(MessageCreate {
                conversation_id: "conv_1".to_string(),
                author_id: "user_1".to_string(),
                body: "hello".to_string(),
            })
            .await;

        assert!(matches!(result, Err(MessageError::ApiError(_))));
        mock.verify();
    }
}
