//! HTTP surface: route handlers and their shared state

pub mod handlers;

pub use handlers::api::ApiState;
