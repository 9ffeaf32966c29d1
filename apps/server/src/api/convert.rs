use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use fxdesk_core::{
    errors::Error as CoreError,
    fx::{ConversionInput, ConversionRequest, FxServiceTrait},
};

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{ConvertCurrencyPayload, ConvertCurrencyResponse, ErrorBody},
};

#[utoipa::path(
    post,
    path = "/convert_currency",
    request_body = ConvertCurrencyPayload,
    responses(
        (status = 200, body = ConvertCurrencyResponse),
        (status = 400, body = ErrorBody, description = "Missing or invalid input"),
        (status = 500, body = ErrorBody, description = "Rate could not be resolved")
    )
)]
pub(super) async fn convert_currency(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ConvertCurrencyPayload>, JsonRejection>,
) -> ApiResult<Json<ConvertCurrencyResponse>> {
    let Json(payload) = payload?;
    let request =
        ConversionRequest::try_from(ConversionInput::from(payload)).map_err(CoreError::from)?;
    let result = state.fx_service.convert(request).await?;
    Ok(Json(ConvertCurrencyResponse::from(result)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/convert_currency", post(convert_currency))
        // Tool-invocation path used by agent runtimes.
        .route("/tools/0/convert_currency", post(convert_currency))
}
