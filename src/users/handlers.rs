use axum::{
    extract::State,
    routing::{get, patch},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        extractors::CurrentUser,
        repo::UserPatch,
        repo_types::User,
        services::is_valid_email,
    },
    error::{is_unique_violation, ApiError, ApiJson},
    state::AppState,
};

use super::dto::{EditUserRequest, UserResponse};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(get_me))
        .route("/users", patch(edit_user))
}

#[instrument(skip_all)]
pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(user.into())
}

#[instrument(skip_all)]
pub async fn edit_user(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiJson(payload): ApiJson<EditUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let email = match payload.email {
        Some(raw) => {
            let email = raw.trim().to_lowercase();
            if !is_valid_email(&email) {
                warn!(user_id = %user.id, "invalid email in profile edit");
                return Err(ApiError::Validation("Invalid email".into()));
            }
            Some(email)
        }
        None => None,
    };

    let patch = UserPatch {
        first_name: payload.first_name,
        last_name: payload.last_name,
        email,
    };

    let updated = match User::update_profile(&state.db, user.id, patch).await {
        Ok(u) => u,
        Err(e) if is_unique_violation(&e) => {
            warn!(user_id = %user.id, "email already taken");
            return Err(ApiError::Conflict("Email already registered".into()));
        }
        Err(e) => return Err(e.into()),
    };

    // The row can only vanish if the account was deleted mid-request
    let updated = updated.ok_or_else(|| ApiError::Unauthorized("User not found".into()))?;

    info!(user_id = %updated.id, "profile updated");
    Ok(Json(updated.into()))
}
