use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::ApiError,
    state::AppState,
    users::{
        dto::NewUser,
        repo_types::{User, UserId},
        services::UserService,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user))
        .route("/users/name/:name", get(get_user_by_name))
}

#[instrument(skip(users, payload))]
pub async fn create_user(
    State(users): State<UserService>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Json(new_user) = payload.map_err(|e| {
        warn!(error = %e, "rejected user payload");
        e
    })?;
    let user = users.create_user(new_user).await?;
    info!(id = ?user.id, name = %user.name, "user created");
    Ok(Json(user))
}

#[instrument(skip(users, path))]
pub async fn get_user(
    State(users): State<UserService>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(raw_id) = path.map_err(rejected_path)?;
    let id = raw_id.parse::<UserId>().map_err(|_| {
        warn!(raw_id = %raw_id, "unparsable user id");
        ApiError::InvalidId(raw_id.clone())
    })?;
    Ok(found_or_404(users.get_by_id(id).await?))
}

#[instrument(skip(users, path))]
pub async fn get_user_by_name(
    State(users): State<UserService>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(name) = path.map_err(rejected_path)?;
    Ok(found_or_404(users.get_by_name(&name).await?))
}

#[instrument(skip(users))]
pub async fn list_users(State(users): State<UserService>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(users.list_all().await?))
}

fn rejected_path(e: PathRejection) -> ApiError {
    warn!(error = %e, "rejected path segment");
    ApiError::Path(e)
}

fn found_or_404(user: Option<User>) -> Response {
    match user {
        Some(u) => Json(u).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
