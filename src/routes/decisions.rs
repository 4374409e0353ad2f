use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::app::AppState;
use crate::authz::enforce;
use crate::errors::{AppError, AppResult};
use crate::models::decision::{BatchDecisionRequest, BatchDecisionResponse, DecisionRequest, DecisionResponse};
use crate::utils::{decode_json, utc_now};

fn evaluate(state: &AppState, request: &DecisionRequest) -> DecisionResponse {
    DecisionResponse {
        allowed: state.evaluator.can(&request.user, request.action, &request.resource),
        kind: request.resource.kind(),
        action: request.action,
        evaluated_at: utc_now(),
    }
}

#[utoipa::path(
    post,
    path = "/api/decisions",
    tag = "Decisions",
    request_body = DecisionRequest,
    responses(
        (status = 200, description = "Decision computed", body = DecisionResponse),
        (status = 400, description = "Malformed request")
    )
)]
pub async fn decide(State(state): State<AppState>, body: Bytes) -> AppResult<Json<DecisionResponse>> {
    let request: DecisionRequest = decode_json(&body)?;
    Ok(Json(evaluate(&state, &request)))
}

#[utoipa::path(
    post,
    path = "/api/decisions/batch",
    tag = "Decisions",
    request_body = BatchDecisionRequest,
    responses(
        (status = 200, description = "Decisions computed in request order", body = BatchDecisionResponse),
        (status = 400, description = "Malformed request or too many checks")
    )
)]
pub async fn decide_batch(State(state): State<AppState>, body: Bytes) -> AppResult<Json<BatchDecisionResponse>> {
    let request: BatchDecisionRequest = decode_json(&body)?;

    if request.checks.len() > state.config.batch_limit {
        return Err(AppError::bad_request(format!(
            "batch holds {} checks, limit is {}",
            request.checks.len(),
            state.config.batch_limit
        )));
    }

    let results = request.checks.iter().map(|check| evaluate(&state, check)).collect();
    Ok(Json(BatchDecisionResponse { results }))
}

/// Applies the configured enforcement mode: 204 when the request may proceed,
/// 403 otherwise.
#[utoipa::path(
    post,
    path = "/api/decisions/enforce",
    tag = "Decisions",
    request_body = DecisionRequest,
    responses(
        (status = 204, description = "Request may proceed"),
        (status = 403, description = "Denied in strict mode")
    )
)]
pub async fn enforce_decision(State(state): State<AppState>, body: Bytes) -> AppResult<StatusCode> {
    let request: DecisionRequest = decode_json(&body)?;
    enforce(
        state.config.mode,
        state.evaluator.as_ref(),
        &request.user,
        request.action,
        &request.resource,
    )?;
    Ok(StatusCode::NO_CONTENT)
}
