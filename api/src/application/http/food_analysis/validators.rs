use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct InferAllergensRequest {
    #[validate(length(
        min = 1,
        max = 5000,
        message = "ingredients must be between 1 and 5000 characters"
    ))]
    #[schema(example = "{bread, peanut butter, jam}")]
    pub ingredients: String,
}

/// Multipart body of the image analysis endpoint.
#[derive(Debug, ToSchema)]
pub struct AnalyzeFoodImageForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
