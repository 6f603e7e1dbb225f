//! Wire DTOs for the user profile API.
//!
//! # Design
//! These types mirror the JSON the backend speaks and are defined
//! independently from the mock-server crate; integration tests catch schema
//! drift between the two. Every field is an opaque string: the backend sends
//! `age` as text and the client performs no numeric or format validation.
//!
//! `UserCreation` carries `username` while `ProfileModel` carries `name`.
//! The two shapes are kept as the backend defines them and are not merged.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A user profile as returned by `GET /users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileModel {
    pub age: String,
    pub name: String,
    pub email: String,
}

/// Response envelope for `GET /users/{id}`. The profile lives under the
/// `profile` key and is unwrapped by the client on success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserModel {
    pub profile: ProfileModel,
}

/// Request payload for `POST /user/`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserCreation {
    pub username: String,
    pub age: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for UserCreation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCreation")
            .field("username", &self.username)
            .field("age", &self.age)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
