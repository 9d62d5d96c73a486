use axum::{extract::State, response::Html};

use crate::application::http::{
    page::template::{PageView, render_page},
    server::app_state::AppState,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&PageView {
        root_path: &state.args.server.root_path,
        fun_fact_enabled: state.service.fun_fact_enabled(),
        ..PageView::default()
    }))
}
