pub mod client;
pub mod contact;
pub mod media;
pub mod project;
pub mod subscriber;
