//! HTTP API Client
//!
//! Functions for communicating with the activities REST API.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use web_sys::RequestCache;

use super::error::ApiError;
use crate::state::model::ActivityCollection;

/// Local storage key that overrides the API base URL
pub const API_URL_KEY: &str = "activities_api_url";

/// Default API base URL (same origin as the page)
pub const DEFAULT_API_BASE: &str = "";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    normalize_base(&url)
}

/// Remove surrounding whitespace and trailing slashes
pub fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

pub fn activities_url(base: &str) -> String {
    format!("{}/activities", base)
}

pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/signup?email={}",
        base,
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

pub fn participants_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/participants?email={}",
        base,
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

/// The three calls the UI makes against the API.
///
/// Mutations resolve to the server's confirmation message.
#[async_trait(?Send)]
pub trait ActivitiesApi {
    async fn list_activities(&self) -> Result<ActivityCollection, ApiError>;

    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError>;

    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError>;
}

/// [`ActivitiesApi`] over `fetch`
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl AsRef<str>) -> Self {
        Self {
            base: normalize_base(base.as_ref()),
        }
    }

    /// Client for the base URL configured in local storage
    pub fn from_storage() -> Self {
        Self::new(get_api_base())
    }
}

#[derive(Debug, serde::Deserialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, serde::Deserialize)]
struct DetailBody {
    #[serde(default)]
    detail: Option<String>,
}

#[async_trait(?Send)]
impl ActivitiesApi for HttpApi {
    async fn list_activities(&self) -> Result<ActivityCollection, ApiError> {
        let response = Request::get(&activities_url(&self.base))
            .cache(RequestCache::NoStore)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(rejection(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let response = Request::post(&signup_url(&self.base, activity, email))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        confirmation(response).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let response = Request::delete(&participants_url(&self.base, activity, email))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        confirmation(response).await
    }
}

async fn confirmation(response: Response) -> Result<String, ApiError> {
    if !response.ok() {
        return Err(rejection(response).await);
    }

    let body: MessageBody = response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;

    Ok(body.message)
}

async fn rejection(response: Response) -> ApiError {
    let status = response.status();
    // An unreadable error body is treated as "no detail".
    let detail = response
        .json::<DetailBody>()
        .await
        .ok()
        .and_then(|body| body.detail);

    ApiError::Rejected { status, detail }
}
