use axum::extract::{Multipart, State, multipart::MultipartRejection};
use foodprint_core::domain::carbon_estimate::{
    entities::{EstimateResult, ImagePayload},
    ports::CarbonEstimateService,
    value_objects::EstimateImageInput,
};

use crate::application::http::{
    carbon_estimate::validators::EstimateImageForm,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

const IMAGE_FIELD: &str = "image";

#[utoipa::path(
    post,
    path = "/image",
    tag = "estimate",
    summary = "Estimate a dish from a photo",
    description = "Identifies the dish or its ingredients in the uploaded image with a vision LLM and estimates their carbon footprint.",
    request_body(content = EstimateImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = EstimateResult),
        (status = 400, description = "Missing or empty image upload", body = ApiErrorResponse),
        (status = 413, description = "Image too large", body = ApiErrorResponse),
        (status = 500, description = "LLM client not configured", body = ApiErrorResponse),
        (status = 502, description = "LLM call or response normalization failed", body = ApiErrorResponse),
    ),
)]
pub async fn estimate_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response<EstimateResult>, ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let max_upload_bytes = state.args.server.max_upload_bytes;
    let mut image: Option<ImagePayload> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let media_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;

        if data.len() > max_upload_bytes {
            return Err(ApiError::PayloadTooLarge(format!(
                "Image too large. Max size is {} bytes",
                max_upload_bytes
            )));
        }

        image = Some(ImagePayload::new(data, media_type));
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;
    tracing::debug!(
        media_type = %image.media_type,
        size = image.data.len(),
        "received image upload"
    );

    let result = state
        .service
        .estimate_image(EstimateImageInput { image })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
