//! # Generic Messages
//!
//! This module defines the generic message types exchanged between a
//! [`ChannelService`](crate::service::ChannelService) and a
//! [`CollectionBackend`](crate::backend::CollectionBackend).

use tokio::sync::oneshot;

use crate::envelope::Envelope;
use crate::page::{Page, PageRequest};
use crate::resource::RemoteResource;

/// Type alias for the one-shot reply channel used by collection backends.
///
/// Every reply is a full [`Envelope`]; transport failures are expressed by the
/// channel itself (a dropped sender), never by an envelope.
pub type Response<T> = oneshot::Sender<Envelope<T>>;

/// Internal message type sent to a collection backend to request operations.
///
/// # Resource-Oriented Design
/// The variants map one-to-one onto the repository's public contract: the four
/// CRUD operations plus paginated listing. This type is generic over
/// `R: RemoteResource` and uses the associated types defined on the trait
/// (`Id`, `Create`, `Update`) so that a request for one collection can never
/// carry another collection's payload.
#[derive(Debug)]
pub enum CollectionRequest<R: RemoteResource> {
    GetById {
        id: R::Id,
        respond_to: Response<R>,
    },
    List {
        request: PageRequest,
        respond_to: Response<Page<R>>,
    },
    Create {
        params: R::Create,
        respond_to: Response<R>,
    },
    Update {
        id: R::Id,
        update: R::Update,
        respond_to: Response<R>,
    },
    Delete {
        id: R::Id,
        respond_to: Response<()>,
    },
}
