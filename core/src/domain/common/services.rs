use crate::domain::{
    common::UploadConfig, food_analysis::ports::LLMClient, upload::ports::UploadStore,
};

/// Holds every adapter the domain services run against.
///
/// `V` answers the vision and allergen prompts, `F` the optional fun fact
/// prompt, `U` persists uploads while they are being analyzed.
#[derive(Clone)]
pub struct Service<V, F, U>
where
    V: LLMClient,
    F: LLMClient,
    U: UploadStore,
{
    pub(crate) vision_client: V,
    pub(crate) fact_client: Option<F>,
    pub(crate) upload_store: U,
    pub(crate) upload_config: UploadConfig,
}

impl<V, F, U> Service<V, F, U>
where
    V: LLMClient,
    F: LLMClient,
    U: UploadStore,
{
    pub fn new(
        vision_client: V,
        fact_client: Option<F>,
        upload_store: U,
        upload_config: UploadConfig,
    ) -> Self {
        Self {
            vision_client,
            fact_client,
            upload_store,
            upload_config,
        }
    }

    pub fn fun_fact_enabled(&self) -> bool {
        self.fact_client.is_some()
    }
}
