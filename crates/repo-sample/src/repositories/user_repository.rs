//! # User Repository
//!
//! Provides a high-level API for the user profile collection. It binds a
//! transport to the framework's [`Repository`] trait and exposes one
//! domain-specific lookup.

use crate::model::User;
use crate::user_api::UserError;
use async_trait::async_trait;
use repo_framework::{ApiService, ChannelService, Page, PageRequest, RepoError, Repository};
use tracing::{debug, instrument};

/// Repository for the user collection.
///
/// Generic over the service so tests can substitute a
/// [`MockService`](repo_framework::mock::MockService); production code uses
/// [`ChannelService<User>`].
#[derive(Clone)]
pub struct UserRepository<S: ApiService<User> = ChannelService<User>> {
    service: S,
}

impl<S: ApiService<User>> UserRepository<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<S: ApiService<User>> Repository<User> for UserRepository<S> {
    type Service = S;
    type Error = UserError;

    fn service(&self) -> &S {
        &self.service
    }

    fn map_error(e: RepoError) -> Self::Error {
        UserError::from(e)
    }
}

impl<S: ApiService<User>> UserRepository<S> {
    /// Look up profiles by exact email address.
    ///
    /// Email is unique in practice, so the page holds zero or one item; the
    /// uniqueness is the remote collection's business, not ours.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Page<User>, UserError> {
        debug!("Sending request");
        self.get_all(PageRequest::new().filter("email", email)).await
    }
}
