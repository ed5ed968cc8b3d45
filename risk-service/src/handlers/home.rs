use crate::dtos::HomeResponse;
use axum::Json;

pub const HOME_MESSAGE: &str = "COVID Risk Prediction API";

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = HomeResponse)
    ),
    tag = "Service"
)]
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: HOME_MESSAGE.to_string(),
    })
}
