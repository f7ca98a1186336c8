mod chat;
mod errors;
mod handlers;
mod middleware;
mod state;

use std::path::Path;

use axum::{Router, extract::DefaultBodyLimit, middleware as axum_middleware, routing::post};
use tower_http::{services::ServeDir, trace::TraceLayer};

pub use chat::{ChatError, ChatRelay};
pub use middleware::CSRF_HEADER;
pub use state::{HttpState, generate_csrf_token};

/// Largest accepted request body; uploads carry raw image bytes.
const BODY_LIMIT: usize = 10 * 1024 * 1024;

pub fn router(state: HttpState) -> Router<()> {
    let storage_dir = state.context.app_state.config.storage_dir.clone();
    let api = Router::new()
        .route("/vehicles_list", post(handlers::vehicles_list))
        .route("/vehicles_get", post(handlers::vehicles_get))
        .route("/vehicles_create", post(handlers::vehicles_create))
        .route("/vehicles_update", post(handlers::vehicles_update))
        .route("/vehicles_delete", post(handlers::vehicles_delete))
        .route("/vehicles_assign_driver", post(handlers::vehicles_assign_driver))
        .route("/users_list", post(handlers::users_list))
        .route("/drivers_list", post(handlers::drivers_list))
        .route("/users_get", post(handlers::users_get))
        .route("/users_create", post(handlers::users_create))
        .route("/users_update", post(handlers::users_update))
        .route("/users_delete", post(handlers::users_delete))
        .route("/departments_list", post(handlers::departments_list))
        .route("/departments_get", post(handlers::departments_get))
        .route("/departments_create", post(handlers::departments_create))
        .route("/departments_update", post(handlers::departments_update))
        .route("/departments_delete", post(handlers::departments_delete))
        .route("/providers_list", post(handlers::providers_list))
        .route("/providers_get", post(handlers::providers_get))
        .route("/providers_create", post(handlers::providers_create))
        .route("/providers_update", post(handlers::providers_update))
        .route("/providers_delete", post(handlers::providers_delete))
        .route("/maintenance_list", post(handlers::maintenance_list))
        .route("/maintenance_history", post(handlers::maintenance_history))
        .route("/maintenance_get", post(handlers::maintenance_get))
        .route("/maintenance_create", post(handlers::maintenance_create))
        .route("/maintenance_update", post(handlers::maintenance_update))
        .route("/maintenance_delete", post(handlers::maintenance_delete))
        .route("/maintenance_chart", post(handlers::maintenance_chart))
        .route("/maintenance_calendar", post(handlers::maintenance_calendar))
        .route("/dashboard_stats", post(handlers::dashboard_stats))
        .route("/activity_list", post(handlers::activity_list))
        .route("/settings_get", post(handlers::settings_get))
        .route("/settings_put", post(handlers::settings_put))
        .route("/storage_list", post(handlers::storage_list))
        .route("/storage_remove", post(handlers::storage_remove))
        .route("/vehicles_upload_image", post(handlers::vehicles_upload_image))
        .route("/users_upload_image", post(handlers::users_upload_image))
        .route("/users_upload_license", post(handlers::users_upload_license))
        .route("/settings_upload_logo", post(handlers::settings_upload_logo))
        .route("/chat", post(handlers::chat))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::require_csrf,
        ));

    Router::new()
        .nest("/api", api)
        .nest_service("/storage", storage_service(&storage_dir))
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn storage_service(storage_dir: &Path) -> ServeDir {
    ServeDir::new(storage_dir)
}
