//! HTTP client for the MediSecure backend with consistent timeouts and error
//! handling. One `ApiClient` is constructed at startup and shared by reference
//! for the process lifetime; feature clients go through it so every call gets
//! the same bearer attachment, timeout policy, and session-expiry handling.
//! The bearer credential is read from the session store at send time, never at
//! request construction time.

use crate::config::ConsoleConfig;
use crate::error::{sanitize_body, ApiError};
use crate::navigation::{Navigator, LOGIN_ROUTE};
use crate::session::SessionStore;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info_span, warn, Instrument};

const USER_AGENT: &str = concat!("medisecure-console/", env!("CARGO_PKG_VERSION"));

/// Declared purpose of a call. Only the login flow is exempt from the
/// 401 session-eviction side effect; everything else is a standard call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CallIntent {
    #[default]
    Standard,
    Login,
}

/// Per-call overrides applied on top of the client defaults.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub timeout: Option<Duration>,
    pub intent: CallIntent,
}

impl RequestOptions {
    /// Options for calls that are themselves part of the login flow.
    pub fn login_flow() -> Self {
        Self {
            intent: CallIntent::Login,
            ..Self::default()
        }
    }
}

enum Payload<'a> {
    Empty,
    Json(String),
    Form(&'a [(&'a str, &'a str)]),
}

pub struct ApiClient {
    http: Client,
    base_url: String,
    timeout: Duration,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Builds the shared client. Construct once and pass by reference.
    pub fn new(
        config: &ConsoleConfig,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| ApiError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            timeout: config.request_timeout,
            session,
            navigator,
        })
    }

    /// The session store this client attaches credentials from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_with(path, RequestOptions::default()).await
    }

    pub async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let response = self.send(Method::GET, path, Payload::Empty, &options).await?;
        decode_json(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.post_with(path, body, RequestOptions::default()).await
    }

    pub async fn post_with<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let payload = encode_json(body)?;
        let response = self
            .send(Method::POST, path, Payload::Json(payload), &options)
            .await?;
        decode_json(response).await
    }

    /// Posts an empty body, used for fire-and-acknowledge endpoints.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .send(Method::POST, path, Payload::Empty, &RequestOptions::default())
            .await?;
        decode_json(response).await
    }

    /// Posts URL-encoded form fields, used by the OAuth2 password login.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let response = self
            .send(Method::POST, path, Payload::Form(form), &options)
            .await?;
        decode_json(response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.put_with(path, body, RequestOptions::default()).await
    }

    pub async fn put_with<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let payload = encode_json(body)?;
        let response = self
            .send(Method::PUT, path, Payload::Json(payload), &options)
            .await?;
        decode_json(response).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.patch_with(path, body, RequestOptions::default()).await
    }

    pub async fn patch_with<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let payload = encode_json(body)?;
        let response = self
            .send(Method::PATCH, path, Payload::Json(payload), &options)
            .await?;
        decode_json(response).await
    }

    /// Deletes a resource; the backend answers 204 with no body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.delete_with(path, RequestOptions::default()).await
    }

    pub async fn delete_with(&self, path: &str, options: RequestOptions) -> Result<(), ApiError> {
        self.send(Method::DELETE, path, Payload::Empty, &options)
            .await?;
        Ok(())
    }

    /// Builds, sends, and classifies one request. Exactly one terminal outcome
    /// per call: success, network failure, session expiry, or an HTTP error.
    /// The session-eviction side effect fires at most once, and never retries
    /// the original request.
    async fn send(
        &self,
        method: Method,
        path: &str,
        payload: Payload<'_>,
        options: &RequestOptions,
    ) -> Result<Response, ApiError> {
        let url = join_url(&self.base_url, path);
        let mut request = self
            .http
            .request(method.clone(), url.as_str())
            .timeout(options.timeout.unwrap_or(self.timeout));

        // Send-time read: a credential rotated after this call was constructed
        // is still picked up here.
        if let Some(credential) = self.session.credential() {
            request = request.header(
                AUTHORIZATION,
                format!("Bearer {}", credential.expose_secret()),
            );
        }

        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        request = match payload {
            Payload::Empty => request,
            Payload::Json(body) => request
                .header(CONTENT_TYPE, "application/json")
                .body(body),
            Payload::Form(fields) => request.form(fields),
        };

        let span = info_span!(
            "api.request",
            http.method = %method,
            url = %url
        );

        async move {
            let response = match request.send().await {
                Ok(response) => response,
                Err(err) => {
                    let mapped = map_transport_error(err);
                    warn!(error = %mapped, "transport failure");
                    return Err(mapped);
                }
            };

            let status = response.status();
            if status.is_success() {
                debug!(status = status.as_u16(), "request succeeded");
                return Ok(response);
            }

            let body = response.text().await.unwrap_or_default();

            if status == StatusCode::UNAUTHORIZED && options.intent != CallIntent::Login {
                warn!("credential rejected, evicting session");
                self.session.clear();
                if self.navigator.current_route() != LOGIN_ROUTE {
                    self.navigator.go_to(LOGIN_ROUTE);
                }
                return Err(ApiError::AuthExpired);
            }

            warn!(status = status.as_u16(), "request failed");
            Err(ApiError::Http {
                status: status.as_u16(),
                body: sanitize_body(body),
            })
        }
        .instrument(span)
        .await
    }
}

/// Joins the configured base URL and a path without doubling slashes.
fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn encode_json<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body)
        .map_err(|err| ApiError::Serialization(format!("Failed to encode request: {err}")))
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
}

/// Maps transport-level failures into the error taxonomy. Session state is
/// never touched on this path.
fn map_transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        ApiError::Config(format!("Failed to build request: {err}"))
    } else {
        ApiError::Network(format!("Unable to reach the server: {err}"))
    }
}
