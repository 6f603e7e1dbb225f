//! Async client core for the user profile API.
//!
//! # Overview
//! Three operations against a remote user resource: fetch a profile
//! (`GET /users/{id}`), create a user (`POST /user/`), and delete a user
//! (`DELETE /user/{id}`). Every call performs one HTTP round-trip and resolves
//! to `Result<T, ApiError>`, where [`ApiError::kind`] tells "the server said
//! no" apart from "the server could not be reached."
//!
//! # Design
//! - `ProfileApi` is the stateless wire contract: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - `HttpTransport` executes requests; `ReqwestTransport` is the default.
//! - `UserProfileClient` composes the two and is meant to be built once from
//!   a `ClientConfig` and shared.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{ProfileApi, UserProfileClient};
pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, ErrorKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{HttpTransport, ReqwestTransport};
pub use types::{ProfileModel, UserCreation, UserModel};
