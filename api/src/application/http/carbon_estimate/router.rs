use super::handlers::{
    estimate_dish::{__path_estimate_dish, estimate_dish},
    estimate_image::{__path_estimate_image, estimate_image},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(estimate_dish, estimate_image))]
pub struct CarbonEstimateApiDoc;

pub fn carbon_estimate_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/estimate", state.args.server.root_path),
            post(estimate_dish),
        )
        .route(
            &format!("{}/estimate/image", state.args.server.root_path),
            post(estimate_image),
        )
}
