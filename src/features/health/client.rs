use crate::api::ApiClient;
use crate::error::ApiError;
use crate::features::health::types::ApiHealth;

/// Probes the backend health endpoint.
pub async fn check(api: &ApiClient) -> Result<ApiHealth, ApiError> {
    api.get("/api/health").await
}
