// Presentation layer - HTTP routes and handlers
pub mod app_state;
pub mod error;
pub mod handlers;
pub mod router;
