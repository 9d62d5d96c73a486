const INGREDIENT_PROMPT: &str = "Give me only the breakdown of the base level ingredients of the food in the image \
in the format {bread, apple, ...}. Keep things basic such as bread instead of buns. \
Do not include any additional text in your response.";

/// Instruction sent alongside the uploaded image.
pub fn ingredient_prompt() -> String {
    INGREDIENT_PROMPT.to_string()
}

/// Instruction for the follow-up call that infers allergens from an
/// ingredient breakdown.
pub fn allergen_prompt(ingredients: &str) -> String {
    format!(
        "Give a list of possible allergens that could result from this list of ingredients {ingredients}. \
Respond in the format {{celiac, peanuts, ...}} do not include any additional text in your response."
    )
}
