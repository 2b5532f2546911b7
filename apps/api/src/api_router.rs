mod cors;

use axum::Router;
use axum::routing::{get, post};
use cmdsuite_core::AppError;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

use self::cors::build_cors_layer;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let cors_layer = build_cors_layer(frontend_url)?;

    let access_routes = Router::new()
        .route("/api/session", post(handlers::session::establish_session_handler))
        .route("/api/access/check", post(handlers::access::check_access_handler))
        .route(
            "/api/views/authorize",
            post(handlers::access::authorize_view_handler),
        );

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/api/roles", get(handlers::roles::list_roles_handler))
        .merge(access_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}
