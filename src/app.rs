use std::sync::Arc;

use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::authz::{DefaultPolicyEvaluator, PolicyEvaluator};
use crate::config::AppConfig;
use crate::routes::{decisions, health};

#[derive(Clone)]
pub struct AppState {
    pub evaluator: Arc<dyn PolicyEvaluator>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_evaluator(config, DefaultPolicyEvaluator::new())
    }

    pub fn with_evaluator(config: AppConfig, evaluator: impl PolicyEvaluator + 'static) -> Self {
        Self {
            evaluator: Arc::new(evaluator),
            config: Arc::new(config),
        }
    }
}

pub fn create_app(config: AppConfig) -> Router {
    router(AppState::new(config))
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(Any)
        .allow_headers(Any);

    let decision_routes = Router::new()
        .route("/", post(decisions::decide))
        .route("/batch", post(decisions::decide_batch))
        .route("/enforce", post(decisions::enforce_decision));

    Router::new()
        .route("/api/health", get(health::health))
        .nest("/api/decisions", decision_routes)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
