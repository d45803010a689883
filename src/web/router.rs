//! Router configuration for the Web API.

use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    get_gallery, get_pricing, get_property, get_reviews, get_site_info, send_inquiry, AppState,
};
use super::middleware::create_cors_layer;

/// OpenAPI documentation for the site API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "WIMSTAY API",
        description = "Content and booking-inquiry API for the Wimbledon holiday home site"
    ),
    paths(
        super::handlers::contact::send_inquiry,
        super::handlers::property::get_property,
        super::handlers::property::get_gallery,
        super::handlers::property::get_reviews,
        super::handlers::property::get_pricing,
        super::handlers::property::get_site_info,
    ),
    components(schemas(
        crate::web::dto::InquiryRequest,
        crate::web::dto::SendAck,
        crate::web::dto::SiteInfoResponse,
        crate::web::error::ErrorBody,
        crate::content::Property,
        crate::content::Amenity,
        crate::content::GalleryImage,
        crate::content::Review,
        crate::content::PricingTable,
    )),
    tags(
        (name = "contact", description = "Booking inquiry relay"),
        (name = "content", description = "Hard-coded site content")
    )
)]
struct ApiDoc;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let api_routes = Router::new()
        .route("/contact", post(send_inquiry))
        .route("/property", get(get_property))
        .route("/gallery", get(get_gallery))
        .route("/reviews", get(get_reviews))
        .route("/pricing", get(get_pricing))
        .route("/site", get(get_site_info));

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Create the Swagger UI router.
pub fn create_swagger_router() -> Router {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}

/// Create a static file router for the front-end, if the directory exists.
pub fn create_static_router(static_path: &str) -> Option<Router> {
    let dir = Path::new(static_path);
    if !dir.is_dir() {
        tracing::warn!(
            path = static_path,
            "Static path does not exist; static serving disabled"
        );
        return None;
    }

    let serve_dir = ServeDir::new(dir).append_index_html_on_directories(true);
    Some(Router::new().fallback_service(serve_dir))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
