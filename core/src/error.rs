//! Error types for the user profile client.
//!
//! # Design
//! Every failure lands in exactly one of two buckets, exposed through
//! [`ApiError::kind`]:
//!
//! - **Application**: the server answered, but with a non-2xx status or a
//!   body that is not the expected shape.
//! - **Transport**: the exchange never completed (connection refused, DNS,
//!   TLS, timeout), or the request could not even be encoded.
//!
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the user does not exist" from "the server returned an unexpected status."

use thiserror::Error;

/// Errors returned by `UserProfileClient` operations and `ProfileApi` parsers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The server returned 2xx, but the body could not be read as the
    /// expected shape.
    #[error("malformed response (HTTP {status}): {reason}")]
    MalformedResponse { status: u16, reason: String },

    /// The transport gave up waiting for the server.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The request could not be delivered or the response not received.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The request payload could not be serialized; nothing was sent.
    #[error("request encoding failed: {0}")]
    Encode(String),
}

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The server was reached and said no.
    Application,
    /// The server could not be reached.
    Transport,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::NotFound
            | ApiError::HttpError { .. }
            | ApiError::MalformedResponse { .. } => ErrorKind::Application,
            ApiError::Timeout(_) | ApiError::Transport(_) | ApiError::Encode(_) => {
                ErrorKind::Transport
            }
        }
    }

    /// HTTP status carried by an application error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::HttpError { status, .. } | ApiError::MalformedResponse { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    pub fn is_application(&self) -> bool {
        self.kind() == ErrorKind::Application
    }

    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }
}
