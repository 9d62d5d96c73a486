pub mod entities;
pub mod ports;
pub mod services;

pub use entities::FunFact;
pub use ports::FunFactService;
