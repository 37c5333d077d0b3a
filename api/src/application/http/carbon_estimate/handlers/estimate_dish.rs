use axum::extract::State;
use foodprint_core::domain::carbon_estimate::{
    entities::EstimateResult, ports::CarbonEstimateService, value_objects::EstimateDishInput,
};

use crate::application::http::{
    carbon_estimate::validators::EstimateDishRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "estimate",
    summary = "Estimate a dish from its name",
    description = "Infers likely ingredients of the named dish with an LLM and estimates the carbon footprint of each one.",
    request_body = EstimateDishRequest,
    responses(
        (status = 200, body = EstimateResult),
        (status = 400, description = "Dish name is empty", body = ApiErrorResponse),
        (status = 500, description = "LLM client not configured", body = ApiErrorResponse),
        (status = 502, description = "LLM call or response normalization failed", body = ApiErrorResponse),
    ),
)]
pub async fn estimate_dish(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<EstimateDishRequest>,
) -> Result<Response<EstimateResult>, ApiError> {
    let result = state
        .service
        .estimate_dish(EstimateDishInput { dish: payload.dish })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
