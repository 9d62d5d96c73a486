use super::handlers::{
    analyze_food_image::{__path_analyze_food_image, analyze_food_image},
    infer_allergens::{__path_infer_allergens, infer_allergens},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_food_image, infer_allergens))]
pub struct FoodAnalysisApiDoc;

pub fn food_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/analyze", state.args.server.root_path),
            post(analyze_food_image),
        )
        .route(
            &format!("{}/api/allergens", state.args.server.root_path),
            post(infer_allergens),
        )
        .layer(DefaultBodyLimit::max(state.upload_body_limit()))
}
