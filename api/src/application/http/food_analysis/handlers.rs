pub mod analyze_food_image;
pub mod infer_allergens;
