use axum::extract::{Multipart, State};
use foodcheck_core::domain::food_analysis::{
    entities::FoodAnalysis, ports::FoodAnalysisService, value_objects::AnalyzeUploadInput,
};

use crate::application::http::{
    food_analysis::{multipart::read_image_field, validators::AnalyzeFoodImageForm},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "food-analysis",
    summary = "Analyze food from image",
    description = "Asks the vision model for the base ingredients in the image, then infers possible allergens from them",
    request_body(content = AnalyzeFoodImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = FoodAnalysis),
        (status = 400, description = "Missing or unreadable image", body = ApiErrorResponse),
        (status = 413, description = "Image too large", body = ApiErrorResponse),
        (status = 500, description = "Model call failed", body = ApiErrorResponse)
    ),
)]
pub async fn analyze_food_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<FoodAnalysis>, ApiError> {
    let image = read_image_field(&mut multipart, state.args.upload.max_upload_bytes)
        .await?
        .ok_or_else(|| ApiError::BadRequest("Missing 'file' field in multipart form".to_string()))?;

    let analysis = state
        .service
        .analyze_upload(AnalyzeUploadInput::from(image))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(analysis))
}
