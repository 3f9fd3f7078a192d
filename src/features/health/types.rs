use serde::{Deserialize, Serialize};

/// Health summary returned by the API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiHealth {
    pub status: String,
    pub version: String,
    pub environment: String,
}
