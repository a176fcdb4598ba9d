use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::errors::AppError;
use crate::http::security::security_headers;
use axum::{
    Router, middleware,
    response::{IntoResponse, Response},
};
use core_config::server::ServerConfig;
use std::any::Any;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Cross-cutting options for [`create_router`].
#[derive(Clone, Debug)]
pub struct RouterOptions {
    /// CORS policy; `None` leaves cross-origin requests to the browser default.
    pub cors: Option<CorsLayer>,
    /// Convert handler panics into 500 JSON responses. Off in strict/testing mode.
    pub catch_panics: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            cors: None,
            catch_panics: true,
        }
    }
}

/// Combine application routes with docs and shared middleware.
///
/// Adds:
/// - OpenAPI docs: `/swagger-ui`, `/redoc`, `/rapidoc`, `/scalar`, `/api-docs/openapi.json`
/// - JSON 404 fallback and JSON 405 for known paths with unsupported methods
/// - Panic catching (per [`RouterOptions::catch_panics`]), request tracing,
///   security headers, optional CORS, response compression
///
/// Routes in `apis` must already have their state applied.
///
/// ```ignore
/// let api_routes = Router::new().nest("/products", products::handlers::router(service));
/// let router = create_router::<ApiDoc>(api_routes, RouterOptions::default());
/// ```
pub fn create_router<T>(apis: Router, options: RouterOptions) -> Router
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .merge(apis)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found);

    if options.catch_panics {
        router = router.layer(CatchPanicLayer::custom(panic_response));
    } else {
        info!("Strict mode: handler panics will propagate");
    }

    router = router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    if let Some(cors) = options.cors {
        router = router.layer(cors);
    }

    router.layer(CompressionLayer::new())
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::InternalServerError(format!("handler panicked: {}", detail)).into_response()
}

/// Serve until `shutdown` resolves, then run `cleanup` bounded by `shutdown_timeout`.
///
/// In-flight requests are drained before cleanup starts.
pub async fn serve_with_cleanup<S, F>(
    listener: TcpListener,
    router: Router,
    shutdown: S,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    info!("Server listening on {}", listener.local_addr()?);

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}

/// Bind to the configured address and serve until SIGINT/SIGTERM.
///
/// ```ignore
/// let cleanup = async move {
///     db.close().await.ok();
/// };
/// create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    let coordinator = ShutdownCoordinator::default();

    serve_with_cleanup(
        listener,
        router,
        async move { coordinator.wait_for_signal().await },
        shutdown_timeout,
        cleanup,
    )
    .await
}
