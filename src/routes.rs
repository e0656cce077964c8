// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{health, quiz, results},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Mounts the quiz endpoints plus results lookup and a health probe.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (stores + config).
pub fn create_router(state: AppState) -> Router {
    // The quiz client is a static page served from anywhere, so any origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let quiz_routes = Router::new()
        .route("/start", get(quiz::start_quiz))
        .route("/submit", post(quiz::submit_quiz));

    Router::new()
        .route("/api/health", get(health::health_check))
        .nest("/api/quiz", quiz_routes)
        .route("/api/results", get(results::student_results))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
