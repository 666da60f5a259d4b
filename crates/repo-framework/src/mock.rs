//! # Mock Service & Testing Guide
//!
//! The `MockService<R>` type implements the same [`ApiService`] contract as
//! the production services but operates entirely against an in-memory
//! expectation queue. It lets you write fast, deterministic unit tests for
//! repository logic without spawning any backend task.
//!
//! ## When to use Mocks vs a Real Backend
//!
//! | Feature | MockService | CollectionBackend |
//! |---------|-------------|-------------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real store with pagination |
//! | **Use Case** | Unit testing logic *around* the repository | Testing full flows |
//! | **Error Injection** | Easy (`return_err`, `return_envelope`) | Hard (requires specific state) |
//!
//! ## Testing Failure Scenarios
//!
//! The biggest advantage of `MockService` is simulating outcomes that are hard
//! to reproduce with a real backend: transport failures, or any envelope
//! status you care about.
//!
//! ```rust
//! use repo_framework::mock::MockService;
//! use repo_framework::{ApiService, RemoteResource, RepoError};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Draft { id: u32, body: String }
//! #[derive(Debug)] struct DraftCreate { body: String }
//! #[derive(Debug)] struct DraftUpdate { body: Option<String> }
//!
//! impl RemoteResource for Draft {
//!     type Id = u32;
//!     type Create = DraftCreate;
//!     type Update = DraftUpdate;
//!
//!     fn from_create(id: u32, params: DraftCreate) -> Result<Self, String> {
//!         Ok(Self { id, body: params.body })
//!     }
//!     fn apply_update(&mut self, update: DraftUpdate) -> Result<(), String> {
//!         if let Some(body) = update.body { self.body = body; }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockService::<Draft>::new();
//!
//!     // Simulate a downstream failure
//!     mock.expect_get_by_id(1)
//!         .return_err(RepoError::Transport("service channel closed".into()));
//!
//!     // Verify your code handles it gracefully
//!     let result = mock.get_by_id(1).await;
//!     assert!(matches!(result, Err(RepoError::Transport(_))));
//!     mock.verify();
//! }
//! ```
//!
//! Application-level failures ride inside a delivered envelope instead:
//!
//! ```rust,ignore
//! mock.expect_get_by_id(9).return_envelope(Envelope::not_found("no resource with id 9"));
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::envelope::Envelope;
use crate::error::RepoError;
use crate::page::{Page, PageRequest};
use crate::resource::RemoteResource;
use crate::service::ApiService;

/// Represents an expected request to the mock service.
///
/// Used internally by `MockService` to track what requests are expected and
/// what outcomes should be returned.
enum Expectation<R: RemoteResource> {
    GetById {
        id: R::Id,
        outcome: Result<Envelope<R>, RepoError>,
    },
    GetAll {
        outcome: Result<Envelope<Page<R>>, RepoError>,
    },
    Create {
        outcome: Result<Envelope<R>, RepoError>,
    },
    Update {
        id: R::Id,
        outcome: Result<Envelope<R>, RepoError>,
    },
    Delete {
        id: R::Id,
        outcome: Result<Envelope<()>, RepoError>,
    },
}

/// A mock service with FIFO expectation tracking for fluent testing.
///
/// Clones share the same expectation queue, so a clone can be handed to the
/// repository under test while the original verifies at the end.
///
/// # Example
/// ```ignore
/// let mut mock = MockService::<User>::new();
/// mock.expect_get_by_id("user_1".to_string()).return_ok(user);
/// mock.expect_create().return_ok(created);
///
/// let repo = UserRepository::new(mock.clone());
/// // Use repo in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockService<R: RemoteResource> {
    expectations: Arc<Mutex<VecDeque<Expectation<R>>>>,
}

impl<R: RemoteResource> Clone for MockService<R> {
    fn clone(&self) -> Self {
        Self {
            expectations: self.expectations.clone(),
        }
    }
}

impl<R: RemoteResource> Default for MockService<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RemoteResource> MockService<R> {
    /// Creates a new mock service with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Expects a `get_by_id` operation.
    pub fn expect_get_by_id(&mut self, id: R::Id) -> GetByIdExpectationBuilder<R> {
        GetByIdExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get_all` operation.
    pub fn expect_get_all(&mut self) -> GetAllExpectationBuilder<R> {
        GetAllExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<R> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: R::Id) -> UpdateExpectationBuilder<R> {
        UpdateExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: R::Id) -> DeleteExpectationBuilder<R> {
        DeleteExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn next_expectation(&self) -> Option<Expectation<R>> {
        self.expectations.lock().unwrap().pop_front()
    }
}

#[async_trait]
impl<R: RemoteResource> ApiService<R> for MockService<R> {
    async fn get_by_id(&self, _id: R::Id) -> Result<Envelope<R>, RepoError> {
        match self.next_expectation() {
            Some(Expectation::GetById { id: _, outcome }) => outcome,
            _ => panic!("Unexpected get_by_id request or expectation mismatch"),
        }
    }

    async fn get_all(&self, _request: PageRequest) -> Result<Envelope<Page<R>>, RepoError> {
        match self.next_expectation() {
            Some(Expectation::GetAll { outcome }) => outcome,
            _ => panic!("Unexpected get_all request or expectation mismatch"),
        }
    }

    async fn create(&self, _params: R::Create) -> Result<Envelope<R>, RepoError> {
        match self.next_expectation() {
            Some(Expectation::Create { outcome }) => outcome,
            _ => panic!("Unexpected create request or expectation mismatch"),
        }
    }

    async fn update(&self, _id: R::Id, _update: R::Update) -> Result<Envelope<R>, RepoError> {
        match self.next_expectation() {
            Some(Expectation::Update { id: _, outcome }) => outcome,
            _ => panic!("Unexpected update request or expectation mismatch"),
        }
    }

    async fn delete(&self, _id: R::Id) -> Result<Envelope<()>, RepoError> {
        match self.next_expectation() {
            Some(Expectation::Delete { id: _, outcome }) => outcome,
            _ => panic!("Unexpected delete request or expectation mismatch"),
        }
    }
}

/// Builder for `get_by_id` expectations.
pub struct GetByIdExpectationBuilder<R: RemoteResource> {
    id: R::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<R>>>>,
}

impl<R: RemoteResource> GetByIdExpectationBuilder<R> {
    /// Queue a 200 envelope wrapping the entity.
    pub fn return_ok(self, entity: R) {
        self.return_envelope(Envelope::ok(entity));
    }

    /// Queue an arbitrary delivered envelope (e.g., a 404).
    pub fn return_envelope(self, envelope: Envelope<R>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::GetById {
            id: self.id,
            outcome: Ok(envelope),
        });
    }

    /// Queue a transport-level failure.
    pub fn return_err(self, error: RepoError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::GetById {
            id: self.id,
            outcome: Err(error),
        });
    }
}

/// Builder for `get_all` expectations.
pub struct GetAllExpectationBuilder<R: RemoteResource> {
    expectations: Arc<Mutex<VecDeque<Expectation<R>>>>,
}

impl<R: RemoteResource> GetAllExpectationBuilder<R> {
    /// Queue a 200 envelope wrapping the page.
    pub fn return_ok(self, page: Page<R>) {
        self.return_envelope(Envelope::ok(page));
    }

    /// Queue an arbitrary delivered envelope.
    pub fn return_envelope(self, envelope: Envelope<Page<R>>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::GetAll { outcome: Ok(envelope) });
    }

    /// Queue a transport-level failure.
    pub fn return_err(self, error: RepoError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::GetAll { outcome: Err(error) });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<R: RemoteResource> {
    expectations: Arc<Mutex<VecDeque<Expectation<R>>>>,
}

impl<R: RemoteResource> CreateExpectationBuilder<R> {
    /// Queue a 201 envelope wrapping the created entity.
    pub fn return_ok(self, entity: R) {
        self.return_envelope(Envelope::created(entity));
    }

    /// Queue an arbitrary delivered envelope (e.g., a 422).
    pub fn return_envelope(self, envelope: Envelope<R>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create { outcome: Ok(envelope) });
    }

    /// Queue a transport-level failure.
    pub fn return_err(self, error: RepoError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create { outcome: Err(error) });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<R: RemoteResource> {
    id: R::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<R>>>>,
}

impl<R: RemoteResource> UpdateExpectationBuilder<R> {
    /// Queue a 200 envelope wrapping the updated entity.
    pub fn return_ok(self, entity: R) {
        self.return_envelope(Envelope::ok(entity));
    }

    /// Queue an arbitrary delivered envelope.
    pub fn return_envelope(self, envelope: Envelope<R>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Update {
            id: self.id,
            outcome: Ok(envelope),
        });
    }

    /// Queue a transport-level failure.
    pub fn return_err(self, error: RepoError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Update {
            id: self.id,
            outcome: Err(error),
        });
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectationBuilder<R: RemoteResource> {
    id: R::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<R>>>>,
}

impl<R: RemoteResource> DeleteExpectationBuilder<R> {
    /// Queue a 204 envelope.
    pub fn return_ok(self) {
        self.return_envelope(Envelope::no_content());
    }

    /// Queue an arbitrary delivered envelope (e.g., a 404).
    pub fn return_envelope(self, envelope: Envelope<()>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Delete {
            id: self.id,
            outcome: Ok(envelope),
        });
    }

    /// Queue a transport-level failure.
    pub fn return_err(self, error: RepoError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Delete {
            id: self.id,
            outcome: Err(error),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        email: String,
    }

    #[derive(Debug)]
    struct UserCreate {
        name: String,
        email: String,
    }

    #[derive(Debug)]
    struct UserUpdate {
        name: Option<String>,
    }

    impl RemoteResource for User {
        type Id = u32;
        type Create = UserCreate;
        type Update = UserUpdate;

        fn from_create(id: u32, params: UserCreate) -> Result<Self, String> {
            Ok(Self {
                id,
                name: params.name,
                email: params.email,
            })
        }

        fn apply_update(&mut self, update: UserUpdate) -> Result<(), String> {
            if let Some(name) = update.name {
                self.name = name;
            }
            Ok(())
        }
    }

    impl User {
        fn new(id: u32, email: &str) -> Self {
            Self {
                id,
                name: "Test User".to_string(),
                email: email.to_string(),
            }
        }
    }

    #[tokio::test]
    async fn test_mock_service_with_expectations() {
        let mut mock = MockService::<User>::new();

        mock.expect_create().return_ok(User::new(1, "test@example.com"));
        mock.expect_get_by_id(1)
            .return_ok(User::new(1, "test@example.com"));

        let created = mock
            .create(UserCreate {
                name: "Test".to_string(),
                email: "test@example.com".to_string(),
            })
            .await
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(created.id, 1);

        let fetched = mock.get_by_id(1).await.unwrap().into_result().unwrap();
        assert_eq!(fetched.email, "test@example.com");

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_service_delivers_application_failures() {
        let mut mock = MockService::<User>::new();
        mock.expect_get_by_id(9)
            .return_envelope(Envelope::not_found("no resource with id 9"));

        let result = mock.get_by_id(9).await.unwrap().into_result();
        assert!(matches!(result, Err(RepoError::NotFound(_))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_service_injects_transport_failures() {
        let mut mock = MockService::<User>::new();
        mock.expect_delete(1)
            .return_err(RepoError::Transport("service channel closed".into()));

        let result = mock.delete(1).await;
        assert!(matches!(result, Err(RepoError::Transport(_))));
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_panics_on_unmet_expectations() {
        let mut mock = MockService::<User>::new();
        mock.expect_get_by_id(1).return_ok(User::new(1, "a@b.c"));
        mock.verify();
    }
}
