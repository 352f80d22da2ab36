use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::catalog::domain::Category;
use tracing::info;

use crate::{errors::ApiError, state::AppState};

#[utoipa::path(
    get, path = "/categorias", tag = "categorias",
    responses((status = 200, description = "All categories", body = [crate::openapi::CategoryDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    let list = state.categories.list().await?;
    info!(count = list.len(), "list categories");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/categorias/{id}", tag = "categorias",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CategoryDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Category>, ApiError> {
    Ok(Json(state.categories.get(id).await?))
}

#[utoipa::path(
    post, path = "/categorias", tag = "categorias",
    request_body = crate::openapi::CategoryDoc,
    responses((status = 200, description = "Created", body = crate::openapi::CategoryDoc))
)]
pub async fn create(State(state): State<AppState>, Json(payload): Json<Category>) -> Result<Json<Category>, ApiError> {
    let created = state.categories.create(payload).await?;
    info!(id = ?created.id, name = %created.name, "created category");
    Ok(Json(created))
}

#[utoipa::path(
    put, path = "/categorias/{id}", tag = "categorias",
    params(("id" = i64, Path, description = "Category id")),
    request_body = crate::openapi::CategoryDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CategoryDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Category>,
) -> Result<Json<Category>, ApiError> {
    let updated = state.categories.update(id, payload).await?;
    info!(id, "updated category");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/categorias/{id}", tag = "categorias",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    state.categories.delete(id).await?;
    info!(id, "deleted category");
    Ok(StatusCode::NO_CONTENT)
}
