pub mod app_state_builder;
pub mod in_memory_store;
pub mod multipart;
pub mod stubs;
