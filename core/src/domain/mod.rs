pub mod common;
pub mod food_analysis;
pub mod fun_fact;
pub mod upload;
