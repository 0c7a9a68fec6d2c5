//! `/api/users` handlers.
//!
//! Thin translation only: decode the request, call the store, let
//! `GatewayError` pick the status for failures.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use userstore_core::{User, UserDraft, UserId};

use crate::app_state::AppState;
use crate::error::{GatewayError, Result};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: String,
}

fn user_id(path: std::result::Result<Path<UserId>, PathRejection>) -> Result<UserId> {
    path.map(|Path(id)| id)
        .map_err(|e| GatewayError::BadRequest(format!("invalid user id: {e}")))
}

fn draft(body: std::result::Result<Json<UserDraft>, JsonRejection>) -> Result<UserDraft> {
    body.map(|Json(d)| d)
        .map_err(|e| GatewayError::BadRequest(format!("invalid body: {e}")))
}

pub async fn create_user(
    State(app): State<AppState>,
    body: std::result::Result<Json<UserDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<User>)> {
    let user = app.store().create(draft(body)?)?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get_user(
    State(app): State<AppState>,
    path: std::result::Result<Path<UserId>, PathRejection>,
) -> Result<Json<User>> {
    let user = app.store().get_by_id(user_id(path)?)?;
    Ok(Json(user))
}

pub async fn list_users(State(app): State<AppState>) -> Json<Vec<User>> {
    Json(app.store().get_all())
}

pub async fn update_user(
    State(app): State<AppState>,
    path: std::result::Result<Path<UserId>, PathRejection>,
    body: std::result::Result<Json<UserDraft>, JsonRejection>,
) -> Result<Json<User>> {
    let id = user_id(path)?;
    let user = app.store().update(id, draft(body)?)?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(app): State<AppState>,
    path: std::result::Result<Path<UserId>, PathRejection>,
) -> Result<Json<Value>> {
    app.store().delete(user_id(path)?)?;
    Ok(Json(json!({ "message": "user deleted" })))
}

pub async fn search_users(
    State(app): State<AppState>,
    query: std::result::Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<User>>> {
    let Query(q) = query.map_err(|e| GatewayError::BadRequest(format!("invalid query: {e}")))?;
    Ok(Json(app.store().search_by_name(&q.name)))
}
