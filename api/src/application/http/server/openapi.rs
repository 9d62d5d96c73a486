use crate::application::http::{
    food_analysis::router::FoodAnalysisApiDoc, fun_fact::router::FunFactApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "foodcheck API"
    ),
    nest(
        (path = "/api", api = FoodAnalysisApiDoc),
        (path = "/api", api = FunFactApiDoc),
    )
)]
pub struct ApiDoc;
