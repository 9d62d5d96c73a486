use axum::extract::State;
use foodcheck_core::domain::fun_fact::{entities::FunFact, ports::FunFactService};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/fun-fact",
    tag = "fun-fact",
    summary = "Get a fun fact",
    description = "Short, obscure fact about an obscure food allergy",
    responses(
        (status = 200, body = FunFact),
        (status = 503, description = "No fun fact provider configured", body = ApiErrorResponse)
    ),
)]
pub async fn get_fun_fact(State(state): State<AppState>) -> Result<Response<FunFact>, ApiError> {
    let fact = state.service.fun_fact().await.map_err(ApiError::from)?;

    Ok(Response::OK(fact))
}
