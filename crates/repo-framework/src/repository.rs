//! # Repository Trait
//!
//! Provides a uniform, typed CRUD + pagination facade over one remote resource
//! collection, with default implementations for every operation built on top
//! of an injected [`ApiService`].
//!
//! A concrete repository only supplies the bound service and an error mapping;
//! no per-resource override is required unless behavior genuinely diverges.

use async_trait::async_trait;
use tracing::debug;

use crate::error::RepoError;
use crate::page::{Page, PageRequest};
use crate::resource::RemoteResource;
use crate::service::ApiService;

/// Trait for resource-specific repositories to inherit standard CRUD and
/// listing operations.
///
/// Every default body is a single pass-through: delegate to the service,
/// unwrap the envelope explicitly with
/// [`Envelope::into_result`](crate::envelope::Envelope::into_result), and map
/// the error into the repository's own type. There is no internal state, no
/// retry, and no caching; errors propagate unchanged and callers own any
/// retry policy.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use repo_framework::{
///     ChannelService, CollectionBackend, RemoteResource, RepoError, Repository,
/// };
///
/// // 1. Define the resource
/// #[derive(Clone, Debug)]
/// struct Note { id: u64, title: String }
/// #[derive(Debug)] struct NoteCreate { title: String }
/// #[derive(Debug)] struct NoteUpdate { title: Option<String> }
///
/// impl RemoteResource for Note {
///     type Id = u64;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///
///     fn from_create(id: u64, params: NoteCreate) -> Result<Self, String> {
///         Ok(Self { id, title: params.title })
///     }
///
///     fn apply_update(&mut self, update: NoteUpdate) -> Result<(), String> {
///         if let Some(title) = update.title { self.title = title; }
///         Ok(())
///     }
/// }
///
/// // 2. Define the repository wrapper
/// struct NoteRepository { service: ChannelService<Note> }
///
/// // 3. Implement Repository
/// #[async_trait]
/// impl Repository<Note> for NoteRepository {
///     type Service = ChannelService<Note>;
///     type Error = RepoError;
///
///     fn service(&self) -> &ChannelService<Note> {
///         &self.service
///     }
///
///     fn map_error(e: RepoError) -> RepoError {
///         e
///     }
/// }
///
/// // 4. Usage
/// #[tokio::main]
/// async fn main() {
///     let counter = std::sync::atomic::AtomicU64::new(1);
///     let (backend, service) = CollectionBackend::new(32, move || {
///         counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
///     });
///     tokio::spawn(backend.run());
///
///     // All five operations are provided automatically.
///     let repo = NoteRepository { service };
///     let note = repo.create(NoteCreate { title: "hello".into() }).await.unwrap();
///     let fetched = repo.get_by_id(note.id).await.unwrap();
///     assert_eq!(fetched.title, "hello");
///     repo.delete(note.id).await.unwrap();
/// }
/// ```
#[async_trait]
pub trait Repository<R: RemoteResource>: Send + Sync {
    /// The bound transport collaborator.
    type Service: ApiService<R>;

    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the injected service.
    fn service(&self) -> &Self::Service;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: RepoError) -> Self::Error;

    /// Fetch an entity by id. Fails with the `NotFound` kind when the remote
    /// reports no such id.
    #[tracing::instrument(skip(self))]
    async fn get_by_id(&self, id: R::Id) -> Result<R, Self::Error> {
        debug!("Sending request");
        self.service()
            .get_by_id(id)
            .await
            .and_then(|envelope| envelope.into_result())
            .map_err(Self::map_error)
    }

    /// Fetch one page of the collection, ordered per the request's sort field
    /// or the server default. Rejects a zero page size before any request is
    /// issued.
    #[tracing::instrument(skip(self))]
    async fn get_all(&self, request: PageRequest) -> Result<Page<R>, Self::Error> {
        if let Err(e) = request.validate() {
            return Err(Self::map_error(e));
        }
        debug!("Sending request");
        self.service()
            .get_all(request)
            .await
            .and_then(|envelope| envelope.into_result())
            .map_err(Self::map_error)
    }

    /// Create an entity; the result carries the server-assigned id.
    #[tracing::instrument(skip(self))]
    async fn create(&self, params: R::Create) -> Result<R, Self::Error> {
        debug!("Sending request");
        self.service()
            .create(params)
            .await
            .and_then(|envelope| envelope.into_result())
            .map_err(Self::map_error)
    }

    /// Update an entity; the result reflects the merged state.
    #[tracing::instrument(skip(self))]
    async fn update(&self, id: R::Id, update: R::Update) -> Result<R, Self::Error> {
        debug!("Sending request");
        self.service()
            .update(id, update)
            .await
            .and_then(|envelope| envelope.into_result())
            .map_err(Self::map_error)
    }

    /// Delete an entity by id. Success is the absence of an error.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: R::Id) -> Result<(), Self::Error> {
        debug!("Sending request");
        self.service()
            .delete(id)
            .await
            .and_then(|envelope| envelope.into_result())
            .map_err(Self::map_error)
    }
}
