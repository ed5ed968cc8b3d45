use crate::dtos::{PredictRequest, PredictResponse};
use crate::startup::AppState;
use crate::utils::ValidatedJson;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// Score one region's risk level.
#[utoipa::path(
    post,
    path = "/predict",
    request_body = PredictRequest,
    responses(
        (status = 200, description = "Prediction made", body = PredictResponse),
        (status = 400, description = "Malformed JSON", body = service_core::error::ErrorResponse),
        (status = 413, description = "Body exceeds the size limit", body = service_core::error::ErrorResponse),
        (status = 415, description = "Body is not JSON", body = service_core::error::ErrorResponse),
        (status = 422, description = "Missing, non-numeric or out-of-range field", body = service_core::error::ErrorResponse),
        (status = 500, description = "Internal server error", body = service_core::error::ErrorResponse)
    ),
    tag = "Prediction"
)]
#[tracing::instrument(skip(state, request))]
pub async fn predict(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PredictRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    let prediction = state.predictor.predict(&request.features())?;

    tracing::info!(
        prediction = prediction.class_label,
        risk = %prediction.risk,
        "Risk predicted"
    );

    Ok(Json(prediction.into()))
}
