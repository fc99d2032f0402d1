use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    config::NotFoundPolicy,
    error::{AppError, AppResult},
    id::parse_comment_id,
    models::{
        Comment, CreateCommentRequest, HealthResponse, ListCommentsQuery, UpdateCommentRequest,
    },
    state::AppState,
};

pub async fn healthcheck(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        comments: state.repo.len().await,
    })
}

pub async fn list_comments(
    State(state): State<AppState>,
    Query(query): Query<ListCommentsQuery>,
) -> Json<Vec<Comment>> {
    Json(state.repo.list(query).await)
}

pub async fn create_comment(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Comment>)> {
    let payload: CreateCommentRequest = decode_body(&body)?;
    let comment = state.repo.create(payload.text).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn get_comment(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Option<Comment>>> {
    let comment = match parse_comment_id(&raw_id) {
        Some(id) => state.repo.get_by_id(id).await,
        None => None,
    };

    respond_or_null(state.not_found_policy, comment, &raw_id)
}

pub async fn patch_comment(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> AppResult<Json<Comment>> {
    let payload: UpdateCommentRequest = decode_body(&body)?;

    let Some(id) = parse_comment_id(&raw_id) else {
        debug!(raw_id = %raw_id, "unparseable comment id on update");
        return Err(AppError::comment_not_found());
    };

    state
        .repo
        .update_text(id, payload.text)
        .await
        .map(Json)
        .ok_or_else(AppError::comment_not_found)
}

pub async fn delete_comment(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Option<Comment>>> {
    let removed = match parse_comment_id(&raw_id) {
        Some(id) => state.repo.delete(id).await,
        None => None,
    };

    respond_or_null(state.not_found_policy, removed, &raw_id)
}

/// Under the legacy policy a miss is a successful `null`; strict turns it into 404.
fn respond_or_null(
    policy: NotFoundPolicy,
    comment: Option<Comment>,
    raw_id: &str,
) -> AppResult<Json<Option<Comment>>> {
    match (comment, policy) {
        (Some(comment), _) => Ok(Json(Some(comment))),
        (None, NotFoundPolicy::Legacy) => {
            debug!(raw_id, "comment not found, answering null");
            Ok(Json(None))
        }
        (None, NotFoundPolicy::Strict) => Err(AppError::comment_not_found()),
    }
}

/// Decodes a JSON body whatever `Content-Type` the client declared.
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> AppResult<T> {
    serde_json::from_slice(body).map_err(|err| {
        warn!(error = %err, "rejected comment body");
        AppError::invalid_body(err.to_string())
    })
}
