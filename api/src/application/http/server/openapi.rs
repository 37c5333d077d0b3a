use crate::application::http::{
    carbon_estimate::router::CarbonEstimateApiDoc,
    health::__path_health,
    server::{api_entities::api_error::ApiErrorResponse, config::__path_get_config},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Foodprint API",
        description = "Carbon footprint estimates for dishes, inferred by an LLM from a dish name or a photo."
    ),
    paths(health, get_config),
    components(schemas(ApiErrorResponse)),
    nest(
        (path = "/estimate", api = CarbonEstimateApiDoc),
    )
)]
pub struct ApiDoc;
