pub mod index;
pub mod submit;
