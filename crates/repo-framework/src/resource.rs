//! # RemoteResource Trait
//!
//! The `RemoteResource` trait defines the contract that every resource kind
//! (User, Message, …) must implement to be served by the generic machinery.
//! It specifies associated types for the identifier and the two request DTOs,
//! and provides the server-side hooks a collection backend needs to construct
//! and mutate entities.
//!
//! # Architecture Note
//! Why do we need this trait?
//! By defining a contract (`RemoteResource`) that all our resource types must
//! satisfy, we can write the repository and backend logic *once* and reuse it
//! for every collection.
//!
//! We use "Associated Types" (type Id, type Create, type Update) to enforce
//! type safety. A `User` repository requires a `UserCreate` payload, and you
//! can't accidentally send it a `MessageCreate` payload. The compiler prevents
//! this class of bugs entirely.
//!
//! # Provided Methods
//! [`RemoteResource::field`] has a default implementation returning `None`,
//! meaning the resource exposes no filterable/sortable fields. Override it to
//! opt named fields into server-side filtering and sorting.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be served by a
/// [`CollectionBackend`](crate::backend::CollectionBackend) and consumed
/// through a [`Repository`](crate::repository::Repository).
pub trait RemoteResource: Clone + Send + Sync + 'static {
    /// The unique identifier for this resource (e.g., String, u64, a newtype).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + 'static;

    /// The payload accepted when creating a new resource (DTO). Distinct from
    /// the entity because creation omits server-assigned fields like the id.
    type Create: Debug + Send + 'static;

    /// The payload accepted when mutating an existing resource. May be a
    /// partial representation; DTOs never appear as return values.
    type Update: Debug + Send + 'static;

    /// Construct the entity from a freshly assigned id and a create payload.
    ///
    /// An `Err` is a server-side validation rejection; the message travels
    /// back to the caller inside a 422 envelope.
    fn from_create(id: Self::Id, params: Self::Create) -> Result<Self, String>;

    /// Apply an update payload to the entity in place.
    ///
    /// An `Err` is a server-side validation rejection, as with
    /// [`from_create`](RemoteResource::from_create).
    fn apply_update(&mut self, update: Self::Update) -> Result<(), String>;

    /// Project a named field for server-side filtering and sorting.
    ///
    /// Returning `None` marks the field as not exposed: filters on it are
    /// ignored and sorting by it falls back to the collection's default order.
    fn field(&self, _name: &str) -> Option<FieldValue> {
        None
    }
}

/// A dynamically typed field projection used by the backend's filtering and
/// sorting. Narrowed to the value shapes list endpoints actually compare.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A string value.
    Str(String),
    /// An integer value.
    Int(i64),
    /// A floating-point value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
}

impl FieldValue {
    /// Equality against a raw query-string value.
    ///
    /// Non-string variants parse the raw value first; an unparseable raw value
    /// matches nothing.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            Self::Str(value) => value == raw,
            Self::Int(value) => raw.parse::<i64>().map(|v| v == *value).unwrap_or(false),
            Self::Float(value) => raw.parse::<f64>().map(|v| v == *value).unwrap_or(false),
            Self::Bool(value) => raw.parse::<bool>().map(|v| v == *value).unwrap_or(false),
        }
    }

    /// Total ordering between two projections of the same field.
    ///
    /// Values of differing variants compare as equal, which keeps a stable
    /// sort at the collection's default order.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Str(a), Self::Str(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}
