pub mod ports;
pub mod client_use_cases;
pub mod services;
