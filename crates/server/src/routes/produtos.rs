use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::catalog::domain::{ProductInput, ProductView};
use tracing::info;

use crate::{errors::ApiError, state::AppState};

#[utoipa::path(
    get, path = "/produtos", tag = "produtos",
    responses((status = 200, description = "All products", body = [crate::openapi::ProductDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ProductView>>, ApiError> {
    let list = state.products.list().await?;
    info!(count = list.len(), "list products");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/produtos/{id}", tag = "produtos",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ProductDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<ProductView>, ApiError> {
    Ok(Json(state.products.get(id).await?))
}

#[utoipa::path(
    post, path = "/produtos", tag = "produtos",
    request_body = crate::openapi::ProductInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProductDoc),
        (status = 400, description = "Unknown category or blank name"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProductInput>,
) -> Result<(StatusCode, Json<ProductView>), ApiError> {
    let created = state.products.create(input).await?;
    info!(id = ?created.id, category_id = created.category_id, "created product");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/produtos/{id}", tag = "produtos",
    params(("id" = i64, Path, description = "Product id")),
    request_body = crate::openapi::ProductInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ProductDoc),
        (status = 400, description = "Unknown category"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<ProductInput>,
) -> Result<Json<ProductView>, ApiError> {
    let updated = state.products.update(id, input).await?;
    info!(id, category_id = updated.category_id, "updated product");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/produtos/{id}", tag = "produtos",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    state.products.delete(id).await?;
    info!(id, "deleted product");
    Ok(StatusCode::NO_CONTENT)
}
