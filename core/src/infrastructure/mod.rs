pub mod llm;
pub mod upload;
