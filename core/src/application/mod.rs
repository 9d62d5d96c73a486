use crate::{
    domain::common::{FoodcheckConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        llm::{GeminiLLMClient, OpenAILLMClient},
        upload::LocalUploadStore,
    },
};

pub type FoodcheckService = Service<GeminiLLMClient, OpenAILLMClient, LocalUploadStore>;

pub async fn create_service(config: FoodcheckConfig) -> Result<FoodcheckService, CoreError> {
    let vision_client = GeminiLLMClient::new(
        config.llm.gemini_api_key,
        config.llm.gemini_model,
        config.llm.gemini_base_url,
    );

    let fact_client = match config.llm.openai_api_key.filter(|key| !key.is_empty()) {
        Some(api_key) => Some(OpenAILLMClient::new(
            api_key,
            config.llm.openai_model,
            config.llm.openai_base_url,
        )),
        None => {
            tracing::warn!("OPENAI_API_KEY not set, fun facts are disabled");
            None
        }
    };

    let upload_store = LocalUploadStore::new(config.upload.folder.clone()).await?;

    Ok(Service::new(
        vision_client,
        fact_client,
        upload_store,
        config.upload,
    ))
}
