use tracing::{instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::{
        entities::{AllergenReport, FoodAnalysis, ImagePayload},
        ports::{FoodAnalysisService, LLMClient},
        prompts::{allergen_prompt, ingredient_prompt},
        value_objects::{AnalyzeUploadInput, InferAllergensInput},
    },
    upload::{ports::UploadStore, sanitize_filename},
};

impl<V, F, U> Service<V, F, U>
where
    V: LLMClient,
    F: LLMClient,
    U: UploadStore,
{
    async fn allergens_for(&self, ingredients: &str) -> Result<String, CoreError> {
        let raw = self
            .vision_client
            .generate_with_text(allergen_prompt(ingredients))
            .await?;

        Ok(raw.trim().to_string())
    }
}

impl<V, F, U> FoodAnalysisService for Service<V, F, U>
where
    V: LLMClient,
    F: LLMClient,
    U: UploadStore,
{
    #[instrument(skip(self, image), fields(mime_type = %image.mime_type, size_bytes = image.len()))]
    async fn analyze_image(
        &self,
        filename: String,
        image: ImagePayload,
    ) -> Result<FoodAnalysis, CoreError> {
        if image.is_empty() {
            return Err(CoreError::Invalid("image cannot be empty".to_string()));
        }

        // 1. Ingredient breakdown from the image
        let raw_ingredients = self
            .vision_client
            .generate_with_image(ingredient_prompt(), image)
            .await?;
        let ingredients = raw_ingredients.trim().to_string();

        if ingredients.is_empty() {
            warn!("Vision model returned an empty ingredient breakdown");
            return Err(CoreError::ExternalServiceError(
                "Empty ingredient breakdown from LLM".to_string(),
            ));
        }

        // 2. Allergens inferred from the breakdown
        let allergens = self.allergens_for(&ingredients).await?;

        tracing::info!(ingredients = %ingredients, allergens = %allergens, "Food analysis complete");

        Ok(FoodAnalysis::new(filename, ingredients, allergens))
    }

    #[instrument(skip(self, input), fields(filename = %input.filename, size_bytes = input.data.len()))]
    async fn analyze_upload(&self, input: AnalyzeUploadInput) -> Result<FoodAnalysis, CoreError> {
        let filename = sanitize_filename(&input.filename)
            .ok_or_else(|| CoreError::Invalid(format!("invalid filename: {:?}", input.filename)))?;

        if input.data.len() > self.upload_config.max_bytes {
            return Err(CoreError::FileTooLarge(self.upload_config.max_bytes));
        }

        let stored = self
            .upload_store
            .save(filename.clone(), input.data.clone())
            .await?;

        let result = self
            .analyze_image(filename, ImagePayload::new(input.data, input.mime_type))
            .await;

        if !self.upload_config.keep_uploads {
            if let Err(e) = self.upload_store.remove(stored.clone()).await {
                warn!(path = %stored.path.display(), error = %e, "Failed to remove upload");
            }
        }

        result
    }

    #[instrument(skip(self, input))]
    async fn infer_allergens(
        &self,
        input: InferAllergensInput,
    ) -> Result<AllergenReport, CoreError> {
        let ingredients = input.ingredients.trim().to_string();
        if ingredients.is_empty() {
            return Err(CoreError::Invalid("ingredients cannot be empty".to_string()));
        }

        let allergens = self.allergens_for(&ingredients).await?;

        Ok(AllergenReport::new(ingredients, allergens))
    }
}
