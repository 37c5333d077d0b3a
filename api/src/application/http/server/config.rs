use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ConfigResponse {
    pub model: String,
    pub llm_configured: bool,
    pub json_mode: bool,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Runtime configuration",
    responses(
        (status = 200, body = ConfigResponse)
    ),
)]
pub async fn get_config(State(state): State<AppState>) -> Response<ConfigResponse> {
    Response::OK(ConfigResponse {
        model: state.args.llm.gemini_model.clone(),
        llm_configured: state.service.is_llm_configured(),
        json_mode: state.args.llm.json_mode,
    })
}
