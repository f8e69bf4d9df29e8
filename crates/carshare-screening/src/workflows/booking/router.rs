use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::domain::{UserProfile, VehicleSnapshot};
use super::service::{BookingScreeningService, ScreeningError};

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct EligibilityRequest {
    #[serde(default)]
    pub profile: Option<UserProfile>,
    pub vehicle: VehicleSnapshot,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Router builder exposing HTTP endpoints for risk scoring and booking gating.
pub fn screening_router(service: Arc<BookingScreeningService>) -> Router {
    Router::new()
        .route("/api/v1/risk/score", post(score_handler))
        .route("/api/v1/bookings/eligibility", post(eligibility_handler))
        .with_state(service)
}

pub(crate) async fn score_handler(
    State(service): State<Arc<BookingScreeningService>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response {
    let today = request.today.unwrap_or_else(|| Local::now().date_naive());
    match service.score(request.profile.as_ref(), today) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn eligibility_handler(
    State(service): State<Arc<BookingScreeningService>>,
    axum::Json(request): axum::Json<EligibilityRequest>,
) -> Response {
    let today = request.today.unwrap_or_else(|| Local::now().date_naive());
    match service.eligibility(request.profile.as_ref(), &request.vehicle, today) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ScreeningError) -> Response {
    let status = match error {
        ScreeningError::MissingProfile => StatusCode::BAD_REQUEST,
        ScreeningError::Projection(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
