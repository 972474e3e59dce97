pub mod ports;
pub mod services;
pub mod subscriber_use_cases;
