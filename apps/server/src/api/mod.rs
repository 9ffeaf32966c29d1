use std::sync::Arc;

use axum::{error_handling::HandleErrorLayer, routing::get, BoxError, Json, Router};
use tower::{
    timeout::{error::Elapsed, TimeoutLayer},
    ServiceBuilder,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    error::ApiError,
    main_lib::AppState,
    models::{
        ChatPayload, ChatResponse, ConvertCurrencyPayload, ConvertCurrencyResponse, ErrorBody,
        HealthResponse, RateSheetResponse,
    },
};

mod chat;
mod convert;
mod exchange_rates;
mod health;

#[derive(OpenApi)]
#[openapi(
    paths(
        convert::convert_currency,
        health::health,
        exchange_rates::get_rate_sheet,
        chat::chat,
    ),
    components(schemas(
        ConvertCurrencyPayload,
        ConvertCurrencyResponse,
        ErrorBody,
        HealthResponse,
        RateSheetResponse,
        ChatPayload,
        ChatResponse,
    )),
    tags((name = "fxdesk"))
)]
pub struct ApiDoc;

/// Turns middleware failures into the usual `{ "error" }` response.
async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Internal(err.to_string())
    }
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any).allow_headers(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins).allow_headers(Any)
    };

    let openapi = ApiDoc::openapi();

    Router::new()
        .merge(convert::router())
        .merge(health::router())
        .merge(exchange_rates::router())
        .merge(chat::router())
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(config.request_timeout)),
        )
        .layer(TraceLayer::new_for_http())
}
