//! # In-Memory Collection Backend
//!
//! This module defines the `CollectionBackend`, a stand-in remote service that
//! owns one resource collection and processes requests sequentially. It plays
//! the "server" role during tests and demos, answering every request with the
//! same [`Envelope`] shapes a real HTTP backend would produce.
//!
//! **Concurrency Model**:
//! Even with many `CollectionBackend` instances running, each one processes
//! its own messages *sequentially* in a loop, so the store needs no `Mutex`
//! or `RwLock`. Exclusive ownership of state within the task provides the
//! safety.

use std::collections::HashMap;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::envelope::Envelope;
use crate::message::CollectionRequest;
use crate::page::{Page, PageRequest};
use crate::resource::RemoteResource;
use crate::service::ChannelService;

/// The in-memory server owning one resource collection.
///
/// # Listing Semantics
/// Listing first filters the collection (equality on fields the resource
/// exposes via [`RemoteResource::field`]; unknown filter keys are ignored),
/// then sorts ascending by the requested field (an unexposed sort field keeps
/// the default insertion order), then slices the requested page. `total_items`
/// counts the filtered collection, not the page.
///
/// # Id Assignment
/// Ids come from an injected generator closure, so each deployment decides
/// its own id shape (`"user_7"`, a numeric counter, …) without the backend
/// knowing about it.
pub struct CollectionBackend<R: RemoteResource> {
    receiver: mpsc::Receiver<CollectionRequest<R>>,
    store: HashMap<R::Id, R>,
    // Insertion-order index; gives listings a stable default order.
    order: Vec<R::Id>,
    next_id: Box<dyn FnMut() -> R::Id + Send>,
}

impl<R: RemoteResource> CollectionBackend<R> {
    /// Creates a new backend and its associated [`ChannelService`].
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the mpsc channel. If the channel is
    ///   full, service calls wait until there is space.
    /// * `next_id` - Generator invoked once per create to assign the new id.
    pub fn new(
        buffer_size: usize,
        next_id: impl FnMut() -> R::Id + Send + 'static,
    ) -> (Self, ChannelService<R>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let backend = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id: Box::new(next_id),
        };
        let service = ChannelService::new(sender);
        (backend, service)
    }

    /// Runs the backend's event loop, processing requests until every service
    /// handle has been dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "User" instead of "repo_sample::model::user::User")
        let resource_type = std::any::type_name::<R>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(resource_type, "Collection backend started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CollectionRequest::GetById { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(resource_type, %id, found, "GetById");
                    let envelope = match item {
                        Some(item) => Envelope::ok(item),
                        None => {
                            warn!(resource_type, %id, "Not found");
                            Envelope::not_found(format!("no resource with id {id}"))
                        }
                    };
                    let _ = respond_to.send(envelope);
                }
                CollectionRequest::List {
                    request,
                    respond_to,
                } => {
                    debug!(resource_type, ?request, "List");
                    let _ = respond_to.send(self.list(&request));
                }
                CollectionRequest::Create { params, respond_to } => {
                    debug!(resource_type, ?params, "Create");
                    let id = (self.next_id)();
                    match R::from_create(id.clone(), params) {
                        Ok(item) => {
                            self.store.insert(id.clone(), item.clone());
                            self.order.push(id.clone());
                            info!(resource_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Envelope::created(item));
                        }
                        Err(reason) => {
                            warn!(resource_type, %reason, "Create rejected");
                            let _ = respond_to.send(Envelope::unprocessable(reason));
                        }
                    }
                }
                CollectionRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(resource_type, %id, ?update, "Update");
                    match self.store.get_mut(&id) {
                        Some(item) => match item.apply_update(update) {
                            Ok(()) => {
                                info!(resource_type, %id, "Updated");
                                let _ = respond_to.send(Envelope::ok(item.clone()));
                            }
                            Err(reason) => {
                                warn!(resource_type, %id, %reason, "Update rejected");
                                let _ = respond_to.send(Envelope::unprocessable(reason));
                            }
                        },
                        None => {
                            warn!(resource_type, %id, "Not found");
                            let _ = respond_to
                                .send(Envelope::not_found(format!("no resource with id {id}")));
                        }
                    }
                }
                CollectionRequest::Delete { id, respond_to } => {
                    debug!(resource_type, %id, "Delete");
                    if self.store.remove(&id).is_some() {
                        self.order.retain(|known| known != &id);
                        info!(resource_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Envelope::no_content());
                    } else {
                        warn!(resource_type, %id, "Not found");
                        let _ =
                            respond_to.send(Envelope::not_found(format!("no resource with id {id}")));
                    }
                }
            }
        }

        info!(resource_type, size = self.store.len(), "Shutdown");
    }

    fn list(&self, request: &PageRequest) -> Envelope<Page<R>> {
        // The repository already rejects this client-side; guard the wire too
        // for callers that talk to the service directly.
        if request.size == Some(0) {
            return Envelope::bad_request("page size must be positive");
        }

        let mut selected: Vec<&R> = self
            .order
            .iter()
            .filter_map(|id| self.store.get(id))
            .filter(|item| {
                request.filters.iter().all(|(key, value)| {
                    match item.field(key) {
                        Some(actual) => actual.matches(value),
                        // Unknown filter keys are ignored.
                        None => true,
                    }
                })
            })
            .collect();

        if let Some(sort) = request.sort.as_deref() {
            // Stable sort: an unexposed sort field compares equal everywhere
            // and keeps the insertion order.
            selected.sort_by(|a, b| match (a.field(sort), b.field(sort)) {
                (Some(left), Some(right)) => left.compare(&right),
                _ => std::cmp::Ordering::Equal,
            });
        }

        let total_items = selected.len() as u64;
        let items: Vec<R> = selected
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.effective_size() as usize)
            .cloned()
            .collect();

        Envelope::ok(Page::new(
            items,
            request.effective_page(),
            request.effective_size(),
            total_items,
        ))
    }
}
