//! User CRUD handlers: list, read, create, update, delete.
//!
//! Each handler does at most a lookup followed by one write. Any lookup
//! failure, including an id that is not an integer, is reported as not found.

use crate::error::AppError;
use crate::model::{NewUser, User, UserPatch};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

type IdPath = Result<Path<String>, PathRejection>;

fn parse_id(path: IdPath) -> Result<i64, AppError> {
    let Path(id_str) = path.map_err(|rejection| {
        tracing::debug!(error = %rejection, "undecodable id");
        AppError::NotFound
    })?;
    id_str.parse().map_err(|_| AppError::NotFound)
}

async fn fetch(state: &AppState, path: IdPath) -> Result<User, AppError> {
    let id = parse_id(path)?;
    match state.store.find(id).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(AppError::NotFound),
        Err(e) => {
            tracing::warn!(id, error = %e, "lookup failed");
            Err(AppError::NotFound)
        }
    }
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.store.list().await?;
    Ok(Json(users))
}

pub async fn read(
    State(state): State<AppState>,
    path: IdPath,
) -> Result<Json<User>, AppError> {
    let user = fetch(&state, path).await?;
    Ok(Json(user))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewUser>, JsonRejection>,
) -> Result<Json<User>, AppError> {
    let Json(new) = body?;
    let user = state.store.insert(new).await?;
    tracing::info!(id = user.id, "user created");
    Ok(Json(user))
}

pub async fn update(
    State(state): State<AppState>,
    path: IdPath,
    body: Result<Json<UserPatch>, JsonRejection>,
) -> Result<Json<User>, AppError> {
    let mut user = fetch(&state, path).await?;
    let Json(patch) = body?;
    patch.apply(&mut user);
    let user = state.store.save(user).await?.ok_or(AppError::NotFound)?;
    Ok(Json(user))
}

pub async fn delete(
    State(state): State<AppState>,
    path: IdPath,
) -> Result<StatusCode, AppError> {
    let user = fetch(&state, path).await?;
    if !state.store.delete(user.id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(id = user.id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
