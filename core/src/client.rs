//! Request building, response parsing, and the async client that joins them.
//!
//! # Design
//! `ProfileApi` holds only a base URL and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`, so
//! the wire contract stays deterministic and free of I/O.
//!
//! `UserProfileClient` pairs a `ProfileApi` with an `HttpTransport` and runs
//! exactly one round-trip per call. It never retries and never caches; a
//! failed attempt is final and the caller decides what happens next.

use tracing::{debug, warn};

use crate::config::{ClientConfig, ConfigError};
use crate::error::{ApiError, ErrorKind};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::{ProfileModel, UserCreation, UserModel};

/// Synchronous, stateless wire contract for the user profile API.
#[derive(Debug, Clone)]
pub struct ProfileApi {
    base_url: String,
}

impl ProfileApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/users/{id}`. The id is sent as one percent-encoded path
    /// segment and is otherwise unchecked.
    pub fn build_fetch_profile(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/users/{}", self.base_url, urlencoding::encode(id)),
            headers: vec![("accept".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    pub fn build_create_user(&self, input: &UserCreation) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/user/", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_user_by_id(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/user/{}", self.base_url, urlencoding::encode(id)),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_fetch_profile(&self, response: HttpResponse) -> Result<ProfileModel, ApiError> {
        check_status(&response)?;
        let envelope: UserModel =
            serde_json::from_str(&response.body).map_err(|e| ApiError::MalformedResponse {
                status: response.status,
                reason: e.to_string(),
            })?;
        Ok(envelope.profile)
    }

    /// Any 2xx is success; the body is not inspected.
    pub fn parse_create_user(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    /// Any 2xx is success; the body is not inspected.
    pub fn parse_delete_user_by_id(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Async client for the user profile API.
///
/// Build one per base URL and share it; every method takes `&self`, and
/// concurrent calls are independent of each other.
#[derive(Debug, Clone)]
pub struct UserProfileClient<T = ReqwestTransport> {
    api: ProfileApi,
    transport: T,
}

impl UserProfileClient<ReqwestTransport> {
    /// Build a reqwest-backed client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::with_transport(ProfileApi::new(config.base_url()), transport))
    }
}

impl<T: HttpTransport> UserProfileClient<T> {
    pub fn with_transport(api: ProfileApi, transport: T) -> Self {
        Self { api, transport }
    }

    pub fn api(&self) -> &ProfileApi {
        &self.api
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the profile of user `id`.
    ///
    /// # Errors
    ///
    /// Application errors for non-2xx statuses or an unexpected body shape;
    /// transport errors when the server could not be reached.
    pub async fn fetch_profile(&self, id: &str) -> Result<ProfileModel, ApiError> {
        let result = async {
            let response = self.round_trip(self.api.build_fetch_profile(id)).await?;
            self.api.parse_fetch_profile(response)
        }
        .await;
        report("fetch_profile", result)
    }

    /// Create a user.
    ///
    /// # Errors
    ///
    /// Application errors for non-2xx statuses; transport errors when the
    /// request could not be encoded or delivered.
    pub async fn create_user(&self, data: &UserCreation) -> Result<(), ApiError> {
        let result = async {
            let request = self.api.build_create_user(data)?;
            let response = self.round_trip(request).await?;
            self.api.parse_create_user(response)
        }
        .await;
        report("create_user", result)
    }

    /// Delete user `id`.
    ///
    /// # Errors
    ///
    /// Application errors for non-2xx statuses; transport errors when the
    /// server could not be reached.
    pub async fn delete_user_by_id(&self, id: &str) -> Result<(), ApiError> {
        let result = async {
            let response = self.round_trip(self.api.build_delete_user_by_id(id)).await?;
            self.api.parse_delete_user_by_id(response)
        }
        .await;
        report("delete_user_by_id", result)
    }

    async fn round_trip(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, url = %request.url, "sending request");
        let response = self
            .transport
            .execute(request)
            .await
            .map_err(as_transport_error)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}

/// A transport never saw a server verdict, so whatever it returns is
/// reported as a transport failure.
fn as_transport_error(err: ApiError) -> ApiError {
    match err.kind() {
        ErrorKind::Transport => err,
        ErrorKind::Application => ApiError::Transport(err.to_string()),
    }
}

fn report<V>(operation: &'static str, result: Result<V, ApiError>) -> Result<V, ApiError> {
    if let Err(err) = &result {
        warn!(
            operation,
            kind = ?err.kind(),
            status = ?err.status(),
            error = %err,
            "request failed"
        );
    }
    result
}
