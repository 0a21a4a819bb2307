use thiserror::Error;

/// Failures of the HTTP collaborators (page-view recorder, auth lookup).
/// None of these ever reach the rendered UI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("Unexpected status code: {0}")]
    Status(u16),
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),
}
