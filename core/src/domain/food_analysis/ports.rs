use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{
        entities::{AllergenReport, FoodAnalysis, ImagePayload},
        value_objects::{AnalyzeUploadInput, InferAllergensInput},
    },
};

/// LLM Client trait for calling hosted models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image: ImagePayload,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for food analysis business logic
#[cfg_attr(test, mockall::automock)]
pub trait FoodAnalysisService: Send + Sync {
    /// Ingredient breakdown then allergen inference for an in-memory image.
    fn analyze_image(
        &self,
        filename: String,
        image: ImagePayload,
    ) -> impl Future<Output = Result<FoodAnalysis, CoreError>> + Send;

    /// Same as `analyze_image`, with the image persisted in the upload
    /// folder while the model calls run.
    fn analyze_upload(
        &self,
        input: AnalyzeUploadInput,
    ) -> impl Future<Output = Result<FoodAnalysis, CoreError>> + Send;

    fn infer_allergens(
        &self,
        input: InferAllergensInput,
    ) -> impl Future<Output = Result<AllergenReport, CoreError>> + Send;
}
