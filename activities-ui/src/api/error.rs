//! API Client Errors

use thiserror::Error;

/// Shown when a request never got a usable response
pub const NETWORK_ERROR: &str = "Network error";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response at all
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response, with the server's `detail` when it sent one
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },

    /// 2xx response whose body did not match the contract
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Text for the message area. `fallback` covers rejections without detail.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Rejected { detail: None, .. } => fallback.to_string(),
            ApiError::Network(_) | ApiError::Parse(_) => NETWORK_ERROR.to_string(),
        }
    }
}
