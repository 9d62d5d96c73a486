pub mod analyze;
pub mod http;
pub mod logging;
