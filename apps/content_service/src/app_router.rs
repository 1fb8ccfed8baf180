use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    app_config::CorsPolicy, app_module::AppState, content::content_controller::content_router,
    health::health_controller,
};

pub fn application_router() -> Router {
    Router::new()
        .route("/", get(health_controller::health))
        .merge(content_router())
}

/// Routes plus the middleware stack shared by the binary and the tests.
pub fn build_application(state: AppState, cors: &CorsPolicy) -> Router {
    application_router().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(Extension(state))
            .layer(cors.layer())
            .into_inner(),
    )
}
