use axum::extract::State;
use foodcheck_core::domain::food_analysis::{
    entities::AllergenReport, ports::FoodAnalysisService, value_objects::InferAllergensInput,
};

use crate::application::http::{
    food_analysis::validators::InferAllergensRequest,
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
    path = "/allergens",
    tag = "food-analysis",
    summary = "Infer allergens from an ingredient list",
    description = "Runs only the allergen step of the analysis on a caller supplied ingredient list",
    request_body = InferAllergensRequest,
    responses(
        (status = 200, body = AllergenReport),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn infer_allergens(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<InferAllergensRequest>,
) -> Result<Response<AllergenReport>, ApiError> {
    let report = state
        .service
        .infer_allergens(InferAllergensInput {
            ingredients: payload.ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(report))
}
