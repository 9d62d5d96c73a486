use std::sync::Arc;

use foodcheck_core::application::FoodcheckService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FoodcheckService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FoodcheckService) -> Self {
        Self { args, service }
    }

    /// Body limit for multipart uploads: the image cap plus room for the
    /// multipart framing.
    pub fn upload_body_limit(&self) -> usize {
        self.args.upload.max_upload_bytes.saturating_add(64 * 1024)
    }
}
