use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::ports::LLMClient,
    fun_fact::{
        entities::{FUN_FACT_PROMPT, FunFact},
        ports::FunFactService,
    },
    upload::ports::UploadStore,
};

impl<V, F, U> FunFactService for Service<V, F, U>
where
    V: LLMClient,
    F: LLMClient,
    U: UploadStore,
{
    #[instrument(skip(self))]
    async fn fun_fact(&self) -> Result<FunFact, CoreError> {
        let client = self
            .fact_client
            .as_ref()
            .ok_or(CoreError::FeatureDisabled("Fun fact provider"))?;

        let text = client
            .generate_with_text(FUN_FACT_PROMPT.to_string())
            .await?
            .trim()
            .to_string();

        if text.is_empty() {
            return Err(CoreError::ExternalServiceError(
                "Empty fun fact from LLM".to_string(),
            ));
        }

        Ok(FunFact::new(text))
    }
}
