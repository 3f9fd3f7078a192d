//! Client wrappers for the auth endpoints. These keep the login exemption,
//! credential storage, and best-effort logout in one place so route code never
//! touches tokens directly.

use crate::api::{ApiClient, RequestOptions};
use crate::error::ApiError;
use crate::features::auth::types::{LoginCredentials, LoginResponse, User, VerifyResponse};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

/// Exchanges credentials for a session. On success the credential and identity
/// are durably stored together; on rejection the session is left untouched and
/// the caller gets `InvalidCredentials` for display.
pub async fn login(api: &ApiClient, credentials: &LoginCredentials) -> Result<User, ApiError> {
    let form = [
        ("grant_type", "password"),
        ("username", credentials.email.as_str()),
        ("password", credentials.password.expose_secret()),
    ];

    let response: LoginResponse = match api
        .post_form("/api/auth/login", &form, RequestOptions::login_flow())
        .await
    {
        Ok(response) => response,
        Err(ApiError::Http { status: 401, .. }) => {
            debug!("login rejected by the backend");
            return Err(ApiError::InvalidCredentials);
        }
        Err(err) => return Err(err),
    };

    let credential = SecretString::from(response.access_token);
    api.session().establish(&credential, &response.user)?;

    debug!(user_id = %response.user.id, "login succeeded");
    Ok(response.user)
}

/// Notifies the backend best-effort, then unconditionally clears the local
/// session. A backend failure must never leave the user stuck signed in.
pub async fn logout(api: &ApiClient) {
    match api.post_empty::<serde_json::Value>("/api/auth/logout").await {
        Ok(_) => debug!("logout acknowledged by the backend"),
        Err(err) => debug!(error = %err, "logout notification failed"),
    }

    api.session().clear();
}

/// Asks the backend whether the current token is still valid.
pub async fn verify(api: &ApiClient) -> Result<VerifyResponse, ApiError> {
    api.get("/api/auth/verify").await
}
