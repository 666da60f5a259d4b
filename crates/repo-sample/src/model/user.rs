use serde::{Deserialize, Serialize};

/// Represents a registered user profile.
///
/// # Repository Framework
/// This struct implements the [`RemoteResource`](repo_framework::RemoteResource)
/// trait, allowing it to be served through a
/// [`Repository`](repo_framework::Repository).
///
/// See the trait implementation in [`crate::user_api::entity`] for details on:
/// - Creation parameters ([`UserCreate`])
/// - Update parameters ([`UserUpdate`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

/// Payload for creating a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}

/// Payload for updating an existing user. All fields optional; absent fields
/// keep their current value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}
