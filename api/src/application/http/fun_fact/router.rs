use super::handlers::get_fun_fact::{__path_get_fun_fact, get_fun_fact};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_fun_fact))]
pub struct FunFactApiDoc;

pub fn fun_fact_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/fun-fact", state.args.server.root_path),
        get(get_fun_fact),
    )
}
