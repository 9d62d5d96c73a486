use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food_analysis::value_objects::split_braced_list;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AllergenReport {
    pub ingredients: String,
    pub allergens: String,
    pub allergen_items: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl AllergenReport {
    pub fn new(ingredients: String, allergens: String) -> Self {
        Self {
            allergen_items: split_braced_list(&allergens),
            ingredients,
            allergens,
            created_at: Utc::now(),
        }
    }
}
