use axum::{
    extract::{Multipart, State},
    response::{Html, IntoResponse, Response},
};
use foodcheck_core::domain::food_analysis::{
    ports::FoodAnalysisService, value_objects::AnalyzeUploadInput,
};
use tracing::error;

use crate::application::http::{
    food_analysis::multipart::read_image_field,
    page::template::{PageView, render_page},
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

/// Form submission from the upload page. Errors are shown on the page
/// rather than as JSON.
pub async fn submit(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let view = PageView {
        root_path: &state.args.server.root_path,
        fun_fact_enabled: state.service.fun_fact_enabled(),
        ..PageView::default()
    };

    let result = match read_image_field(&mut multipart, state.args.upload.max_upload_bytes).await {
        Ok(Some(image)) => state
            .service
            .analyze_upload(AnalyzeUploadInput::from(image))
            .await
            .map(Some)
            .map_err(ApiError::from),
        Ok(None) => Ok(None),
        Err(e) => Err(e),
    };

    match result {
        Ok(analysis) => Html(render_page(&PageView {
            analysis: analysis.as_ref(),
            ..view
        }))
        .into_response(),
        Err(e) => {
            error!(error = %e, "Food analysis from upload page failed");
            let status = e.status();
            (
                status,
                Html(render_page(&PageView {
                    error: Some(e.to_string()),
                    ..view
                })),
            )
                .into_response()
        }
    }
}
