use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use fxdesk_core::fx::FxServiceTrait;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{ErrorBody, RateSheetResponse},
};

/// All known rates quoted against `base`.
#[utoipa::path(
    get,
    path = "/exchange-rates/{base}",
    params(("base" = String, Path, description = "Base currency code")),
    responses(
        (status = 200, body = RateSheetResponse),
        (status = 500, body = ErrorBody)
    )
)]
pub(super) async fn get_rate_sheet(
    Path(base): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<RateSheetResponse>> {
    let sheet = state.fx_service.get_rate_sheet(&base).await?;
    Ok(Json(RateSheetResponse::from(sheet)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/exchange-rates/{base}", get(get_rate_sheet))
}
