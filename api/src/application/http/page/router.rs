use axum::{Router, extract::DefaultBodyLimit, routing::get};

use super::handlers::{index::index, submit::submit};
use crate::application::http::server::app_state::AppState;

pub fn page_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    let path = if root_path.is_empty() {
        "/".to_string()
    } else {
        root_path.clone()
    };

    Router::new()
        .route(&path, get(index).post(submit))
        .layer(DefaultBodyLimit::max(state.upload_body_limit()))
}
