//! wellness-lambda
//!
//! The portal's HTTP surface: an axum router that runs as an AWS Lambda
//! function, or on a local listener for development.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod view;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::home::welcome))
        .route("/psychological-module", get(routes::module::dashboard))
        .route(
            "/stress-assessment",
            get(routes::assessments::show_quiz).post(routes::assessments::submit_assessment),
        )
        // Static pages share one handler that dispatches on the path
        .route("/breathing-exercises", get(routes::resources::show_section))
        .route("/relaxation-techniques", get(routes::resources::show_section))
        .route("/mental-health-resources", get(routes::resources::show_section))
        .route(
            "/breathing-exercises/{id}",
            get(routes::resources::show_breathing_exercise),
        )
        .route(
            "/relaxation-techniques/{id}",
            get(routes::resources::show_relaxation_technique),
        )
        .route(
            "/recommendations/{level}",
            get(routes::recommendations::get_recommendations),
        )
        .layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::identity::identify,
        ))
        // Health (no identity)
        .route("/health", get(routes::health::health_check))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
