use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const FUN_FACT_PROMPT: &str = "write a really random statistical obscure fact about an obscure food allergy. \
keep it short and sassy because i dont know the fact";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FunFact {
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl FunFact {
    pub fn new(text: String) -> Self {
        Self {
            text,
            created_at: Utc::now(),
        }
    }
}
