use axum::{middleware, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::{metrics, openapi::ApiDoc, state::AppState};

pub mod categorias;
pub mod produtos;

#[utoipa::path(get, path = "/health", tag = "ops", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router: catalog resources, ops endpoints and API docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let catalog = Router::new()
        .route("/categorias", get(categorias::list).post(categorias::create))
        .route(
            "/categorias/:id",
            get(categorias::get).put(categorias::update).delete(categorias::delete),
        )
        .route("/produtos", get(produtos::list).post(produtos::create))
        .route(
            "/produtos/:id",
            get(produtos::get).put(produtos::update).delete(produtos::delete),
        );

    let ops = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics_handler));

    catalog
        .merge(ops)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(middleware::from_fn(metrics::track))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
