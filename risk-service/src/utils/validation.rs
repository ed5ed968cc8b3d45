use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use validator::Validate;

const NUMBER_OUT_OF_RANGE: &str = "number out of range";

/// JSON body extractor that deserializes and validates before the handler runs.
///
/// Shape errors (missing field, wrong type, a number too large for `f64`) are
/// 422 with the field named in the details; malformed JSON is 400; a missing
/// JSON content type is 415; a body over the size limit is 413.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    tracing::debug!(error = %rejection.body_text(), "Rejected request body");

    match rejection {
        JsonRejection::JsonDataError(e) => AppError::UnprocessableEntity(e.body_text()),
        // serde_json classes overflow as a syntax error, but the document is well formed.
        JsonRejection::JsonSyntaxError(e) if e.body_text().contains(NUMBER_OUT_OF_RANGE) => {
            AppError::UnprocessableEntity(e.body_text())
        }
        JsonRejection::JsonSyntaxError(e) => {
            AppError::BadRequest(anyhow::anyhow!("Malformed JSON: {}", e.body_text()))
        }
        JsonRejection::MissingJsonContentType(e) => AppError::UnsupportedMediaType(e.body_text()),
        other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            AppError::PayloadTooLarge(other.body_text())
        }
        other => AppError::BadRequest(anyhow::anyhow!(other.body_text())),
    }
}
