use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CategoryDoc {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
}

#[derive(ToSchema)]
pub struct CategoryRefDoc { pub id: i64 }

#[derive(ToSchema)]
pub struct ProductInputDoc {
    pub name: String,
    pub price: f64,
    pub category_id: Option<i64>,
    /// Alternative to `category_id`; also accepted as `categoria`.
    pub category: Option<CategoryRefDoc>,
}

#[derive(ToSchema)]
pub struct ProductDoc {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category_id: i64,
    pub category: Option<CategoryDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::metrics::metrics_handler,
        crate::routes::categorias::list,
        crate::routes::categorias::get,
        crate::routes::categorias::create,
        crate::routes::categorias::update,
        crate::routes::categorias::delete,
        crate::routes::produtos::list,
        crate::routes::produtos::get,
        crate::routes::produtos::create,
        crate::routes::produtos::update,
        crate::routes::produtos::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CategoryDoc,
            CategoryRefDoc,
            ProductInputDoc,
            ProductDoc,
        )
    ),
    tags(
        (name = "ops"),
        (name = "categorias"),
        (name = "produtos")
    )
)]
pub struct ApiDoc;
