use utoipa::OpenApi;

use crate::config::DEFAULT_BASE_PATH;

/// Documents the product routes at their default mount point.
#[derive(OpenApi)]
#[openapi(
    paths(crate::api::health::ready_handler),
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::HealthResponse)
    ),
    info(
        title = "Product Catalog API",
        version = "0.1.0",
        description = "CRUD and filtering for the product catalog"
    ),
    nest(
        (path = DEFAULT_BASE_PATH, api = domain_products::handlers::ApiDoc)
    ),
    tags(
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
