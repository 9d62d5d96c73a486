pub mod food_analysis;
pub mod fun_fact;
pub mod health;
pub mod page;
pub mod server;
