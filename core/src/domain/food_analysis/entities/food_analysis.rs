use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, food_analysis::value_objects::split_braced_list};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodAnalysis {
    pub id: Uuid,
    pub filename: String,
    /// Ingredient breakdown exactly as the model returned it, trimmed.
    pub ingredients: String,
    /// Allergen list exactly as the model returned it, trimmed.
    pub allergens: String,
    pub ingredient_items: Vec<String>,
    pub allergen_items: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl FoodAnalysis {
    pub fn new(filename: String, ingredients: String, allergens: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            filename,
            ingredient_items: split_braced_list(&ingredients),
            allergen_items: split_braced_list(&allergens),
            ingredients,
            allergens,
            created_at: now,
        }
    }
}
