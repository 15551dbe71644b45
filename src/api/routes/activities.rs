//! Activity Routes
//!
//! - GET /activities - List all activities in catalog order
//! - POST /activities/:activity_name/signup?email= - Sign up a participant
//! - DELETE /activities/:activity_name/participants?email= - Remove a participant

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{EmailQuery, MessageResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::catalog::{ActivityCollection, CatalogError};

/// GET /activities
pub async fn list_activities(State(state): State<Arc<AppState>>) -> Json<ActivityCollection> {
    Json(state.catalog.list().await)
}

/// POST /activities/:activity_name/signup
pub async fn signup_for_activity(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> ApiResult<Json<MessageResponse>> {
    let email = query.email.ok_or(CatalogError::MissingEmail)?;
    let message = state.catalog.signup(&activity_name, &email).await?;
    Ok(Json(MessageResponse::new(message)))
}

/// DELETE /activities/:activity_name/participants
pub async fn unregister_participant(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> ApiResult<Json<MessageResponse>> {
    let email = query.email.ok_or(CatalogError::MissingEmail)?;
    let message = state.catalog.unregister(&activity_name, &email).await?;
    Ok(Json(MessageResponse::new(message)))
}
