//! Resource trait implementation for the User domain type.
//!
//! This module contains the [`RemoteResource`] implementation that enables
//! [`User`] to be stored by the generic
//! [`CollectionBackend`](repo_framework::CollectionBackend) and consumed
//! through a [`UserRepository`](crate::repositories::UserRepository).

use crate::model::{User, UserCreate, UserUpdate};
use repo_framework::{FieldValue, RemoteResource};

fn check_email(email: &str) -> Result<(), String> {
    if email.contains('@') {
        Ok(())
    } else {
        Err(format!("invalid email address: {email}"))
    }
}

impl RemoteResource for User {
    type Id = String;
    type Create = UserCreate;
    type Update = UserUpdate;

    /// Creates a new User from creation parameters. The avatar starts unset;
    /// it is only ever supplied through an update.
    fn from_create(id: String, params: UserCreate) -> Result<Self, String> {
        check_email(&params.email)?;
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            avatar_url: None,
        })
    }

    /// Handles updates to the User entity.
    ///
    /// # Fields Updated
    /// - `name`: display name
    /// - `email`: address, re-validated
    /// - `avatar_url`: profile picture location
    fn apply_update(&mut self, update: UserUpdate) -> Result<(), String> {
        if let Some(email) = update.email {
            check_email(&email)?;
            self.email = email;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(avatar_url) = update.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        Ok(())
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(FieldValue::Str(self.name.clone())),
            "email" => Some(FieldValue::Str(self.email.clone())),
            _ => None,
        }
    }
}
