pub mod allergen_report;
pub mod food_analysis;
pub mod image_payload;

pub use allergen_report::*;
pub use food_analysis::*;
pub use image_payload::*;
