//! # API Service
//!
//! This module defines the transport collaborator a repository delegates to:
//! the [`ApiService`] trait, plus [`ChannelService`], the channel-backed
//! implementation that talks to an in-process
//! [`CollectionBackend`](crate::backend::CollectionBackend).

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::envelope::Envelope;
use crate::error::RepoError;
use crate::message::CollectionRequest;
use crate::page::{Page, PageRequest};
use crate::resource::RemoteResource;

/// The injected transport collaborator of a repository.
///
/// Each operation resolves to a [`Envelope`] describing the remote outcome.
/// The `Err` arm carries transport-level failure only (the service
/// unreachable, the connection gone); a delivered envelope may still describe
/// an application-level failure through its status.
#[async_trait]
pub trait ApiService<R: RemoteResource>: Send + Sync {
    /// Fetch one resource by id.
    async fn get_by_id(&self, id: R::Id) -> Result<Envelope<R>, RepoError>;

    /// Fetch one page of the collection.
    async fn get_all(&self, request: PageRequest) -> Result<Envelope<Page<R>>, RepoError>;

    /// Create a resource from a payload.
    async fn create(&self, params: R::Create) -> Result<Envelope<R>, RepoError>;

    /// Update a resource in place.
    async fn update(&self, id: R::Id, update: R::Update) -> Result<Envelope<R>, RepoError>;

    /// Delete a resource by id.
    async fn delete(&self, id: R::Id) -> Result<Envelope<()>, RepoError>;
}

/// A type-safe service handle for a [`CollectionBackend`](crate::backend::CollectionBackend).
///
/// The handle forwards requests over a Tokio mpsc channel and receives each
/// reply over a oneshot channel. It holds only a sender, so cloning is
/// inexpensive and clones can be shared across tasks.
#[derive(Clone)]
pub struct ChannelService<R: RemoteResource> {
    sender: mpsc::Sender<CollectionRequest<R>>,
}

impl<R: RemoteResource> ChannelService<R> {
    pub fn new(sender: mpsc::Sender<CollectionRequest<R>>) -> Self {
        Self { sender }
    }
}

fn closed() -> RepoError {
    RepoError::Transport("service channel closed".to_string())
}

fn dropped() -> RepoError {
    RepoError::Transport("service dropped the response".to_string())
}

#[async_trait]
impl<R: RemoteResource> ApiService<R> for ChannelService<R> {
    async fn get_by_id(&self, id: R::Id) -> Result<Envelope<R>, RepoError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::GetById { id, respond_to })
            .await
            .map_err(|_| closed())?;
        response.await.map_err(|_| dropped())
    }

    async fn get_all(&self, request: PageRequest) -> Result<Envelope<Page<R>>, RepoError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::List {
                request,
                respond_to,
            })
            .await
            .map_err(|_| closed())?;
        response.await.map_err(|_| dropped())
    }

    async fn create(&self, params: R::Create) -> Result<Envelope<R>, RepoError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Create { params, respond_to })
            .await
            .map_err(|_| closed())?;
        response.await.map_err(|_| dropped())
    }

    async fn update(&self, id: R::Id, update: R::Update) -> Result<Envelope<R>, RepoError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Update {
                id,
                update,
                respond_to,
            })
            .await
            .map_err(|_| closed())?;
        response.await.map_err(|_| dropped())
    }

    async fn delete(&self, id: R::Id) -> Result<Envelope<()>, RepoError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Delete { id, respond_to })
            .await
            .map_err(|_| closed())?;
        response.await.map_err(|_| dropped())
    }
}
