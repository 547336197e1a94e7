use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::extractors::CurrentUser,
    bookmarks::repo::{BookmarkPatch, NewBookmark},
    bookmarks::repo_types::Bookmark,
    error::{ApiError, ApiJson},
    state::AppState,
};

use super::dto::{BookmarkResponse, CreateBookmarkRequest, EditBookmarkRequest};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", get(list_bookmarks))
        .route("/bookmarks/:id", get(get_bookmark))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", post(create_bookmark))
        .route(
            "/bookmarks/:id",
            axum::routing::patch(edit_bookmark).delete(delete_bookmark),
        )
}

#[instrument(skip_all)]
pub async fn create_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiJson(payload): ApiJson<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<BookmarkResponse>), ApiError> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::Validation("Title must not be empty".into()));
    }
    if payload.link.trim().is_empty() {
        return Err(ApiError::Validation("Link must not be empty".into()));
    }

    let bookmark = Bookmark::create(
        &state.db,
        user.id,
        NewBookmark {
            title: payload.title,
            link: payload.link,
            description: payload.description,
        },
    )
    .await?;

    info!(user_id = %user.id, bookmark_id = %bookmark.id, "bookmark created");
    Ok((StatusCode::CREATED, Json(bookmark.into())))
}

#[instrument(skip_all)]
pub async fn list_bookmarks(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<BookmarkResponse>>, ApiError> {
    let items = Bookmark::list_by_user(&state.db, user.id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(items))
}

#[instrument(skip_all)]
pub async fn get_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<BookmarkResponse>, ApiError> {
    let bookmark = Bookmark::find_by_id(&state.db, user.id, id)
        .await?
        .ok_or_else(|| {
            warn!(user_id = %user.id, bookmark_id = %id, "bookmark not found");
            ApiError::NotFound("Bookmark not found".into())
        })?;
    Ok(Json(bookmark.into()))
}

#[instrument(skip_all)]
pub async fn edit_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    ApiJson(payload): ApiJson<EditBookmarkRequest>,
) -> Result<Json<BookmarkResponse>, ApiError> {
    if payload.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(ApiError::Validation("Title must not be empty".into()));
    }
    if payload.link.as_deref().is_some_and(|l| l.trim().is_empty()) {
        return Err(ApiError::Validation("Link must not be empty".into()));
    }

    let patch = BookmarkPatch {
        title: payload.title,
        link: payload.link,
        description: payload.description,
    };

    let bookmark = Bookmark::update(&state.db, user.id, id, patch)
        .await?
        .ok_or_else(|| {
            warn!(user_id = %user.id, bookmark_id = %id, "edit missed");
            ApiError::NotFound("Bookmark not found".into())
        })?;

    info!(user_id = %user.id, bookmark_id = %id, "bookmark updated");
    Ok(Json(bookmark.into()))
}

#[instrument(skip_all)]
pub async fn delete_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = Bookmark::delete(&state.db, user.id, id).await?;
    if !deleted {
        warn!(user_id = %user.id, bookmark_id = %id, "delete missed");
        return Err(ApiError::NotFound("Bookmark not found".into()));
    }

    info!(user_id = %user.id, bookmark_id = %id, "bookmark deleted");
    Ok(StatusCode::NO_CONTENT)
}
